use approx::assert_abs_diff_eq;
use scene_scatter::{
    animation::{AnimationDriver, StepMode},
    config::{ConfigPatch, Configuration},
    data_structures::{
        geometry::GeometryKind,
        instance::Instance,
        registry::InstanceRegistry,
    },
    flow::Frame,
};

use crate::common::test_utils::{config, seeded_scene};

mod common;

fn frame(index: u64, elapsed: f32) -> Frame {
    Frame { index, elapsed }
}

fn is_rotating(kind: GeometryKind) -> bool {
    GeometryKind::ROTATING.contains(&kind)
}

#[test]
fn should_add_k_times_speed_to_rotating_kinds() {
    let speed = 0.004;
    let mut scene = seeded_scene(Configuration {
        rotation_speed: speed,
        number_of_meshes: 10,
        distance_multiplier: 40.0,
    });
    let before: Vec<Instance> = scene.registry().iter().cloned().collect();

    let k = 120;
    for i in 0..k {
        scene.on_frame(frame(i, i as f32 / 60.0));
    }

    for (old, new) in before.iter().zip(scene.registry().iter()) {
        assert_eq!(old.kind, new.kind);
        assert_eq!(old.position, new.position);
        assert_eq!(old.scale, new.scale);
        if is_rotating(old.kind) {
            assert_abs_diff_eq!(new.rotation.x - old.rotation.x, k as f32 * speed, epsilon = 1e-4);
            assert_abs_diff_eq!(new.rotation.y - old.rotation.y, k as f32 * speed, epsilon = 1e-4);
        } else {
            assert_eq!(old.rotation, new.rotation, "{} must not rotate", old.kind);
        }
    }
}

#[test]
fn should_rotate_four_of_six_in_single_mesh_scene() {
    let mut scene = seeded_scene(Configuration {
        rotation_speed: 0.001,
        number_of_meshes: 1,
        distance_multiplier: 1.0,
    });
    assert_eq!(scene.registry().len(), 6);
    let before: Vec<Instance> = scene.registry().iter().cloned().collect();

    scene.on_frame(frame(0, 0.0));

    let mut rotated = 0;
    for (old, new) in before.iter().zip(scene.registry().iter()) {
        let dx = new.rotation.x - old.rotation.x;
        let dy = new.rotation.y - old.rotation.y;
        if is_rotating(old.kind) {
            assert_abs_diff_eq!(dx, 0.001, epsilon = 1e-5);
            assert_abs_diff_eq!(dy, 0.001, epsilon = 1e-5);
            rotated += 1;
        } else {
            assert_eq!(dx, 0.0);
            assert_eq!(dy, 0.0);
        }
    }
    assert_eq!(rotated, 4);
}

#[test]
fn should_ignore_elapsed_time_by_default() {
    let cfg = config(0, 1.0);
    let mut slow = InstanceRegistry::new();
    let mut fast = InstanceRegistry::new();
    slow.add(Instance::new(GeometryKind::Torus));
    fast.add(Instance::new(GeometryKind::Torus));

    let mut slow_driver = AnimationDriver::default();
    let mut fast_driver = AnimationDriver::default();
    for i in 0..10 {
        slow_driver.tick(i as f32 * 0.5, &mut slow, &cfg);
        fast_driver.tick(i as f32 * 0.001, &mut fast, &cfg);
    }

    assert_eq!(slow.as_slice(), fast.as_slice());
    assert_eq!(AnimationDriver::default().mode(), StepMode::FixedPerFrame);
}

#[test]
fn should_pick_up_new_speed_on_next_frame() {
    let mut scene = seeded_scene(config(3, 10.0));
    let torus_before = scene.registry().iter().find(|i| i.kind == GeometryKind::Torus).cloned();

    scene.configure(&ConfigPatch::rotation_speed(0.01));
    scene.on_frame(frame(0, 0.0));

    let torus_after = scene.registry().iter().find(|i| i.kind == GeometryKind::Torus).cloned();
    let (before, after) = (torus_before.unwrap(), torus_after.unwrap());
    assert_abs_diff_eq!(after.rotation.x - before.rotation.x, 0.01, epsilon = 1e-5);
}

#[test]
fn should_scale_step_by_frame_time_when_requested() {
    let cfg = Configuration {
        rotation_speed: 0.002,
        ..config(0, 1.0)
    };
    let mut registry = InstanceRegistry::new();
    registry.add(Instance::new(GeometryKind::Octahedron));
    registry.add(Instance::new(GeometryKind::Sphere));
    let mut driver = AnimationDriver::new(StepMode::FrameTime { reference_fps: 60.0 });

    // First frame: one reference frame worth of rotation.
    driver.tick(0.0, &mut registry, &cfg);
    assert_abs_diff_eq!(registry.as_slice()[0].rotation.x, 0.002, epsilon = 1e-6);

    // A frame twice as long as the reference rotates twice as far.
    driver.tick(2.0 / 60.0, &mut registry, &cfg);
    assert_abs_diff_eq!(registry.as_slice()[0].rotation.x, 0.006, epsilon = 1e-6);
    assert_abs_diff_eq!(registry.as_slice()[0].rotation.y, 0.006, epsilon = 1e-6);
    assert_eq!(registry.as_slice()[1].rotation, cgmath::Vector2::new(0.0, 0.0));
}

#[test]
fn should_fall_back_to_fixed_step_for_unusable_reference_fps() {
    let cfg = Configuration {
        rotation_speed: 0.003,
        ..config(0, 1.0)
    };
    for reference_fps in [0.0, -30.0, f32::NAN, f32::INFINITY] {
        let mut registry = InstanceRegistry::new();
        registry.add(Instance::new(GeometryKind::Torus));
        let mut driver = AnimationDriver::new(StepMode::FrameTime { reference_fps });
        assert_eq!(driver.mode(), StepMode::FixedPerFrame, "{}", reference_fps);

        driver.tick(0.0, &mut registry, &cfg);
        driver.tick(1.0, &mut registry, &cfg);

        let rotation = registry.as_slice()[0].rotation;
        assert!(rotation.x.is_finite() && rotation.y.is_finite(), "{}", reference_fps);
        assert_abs_diff_eq!(rotation.x, 0.006, epsilon = 1e-6);
        assert_abs_diff_eq!(rotation.y, 0.006, epsilon = 1e-6);
    }
}

#[test]
fn should_only_visit_requested_kinds() {
    let mut registry = InstanceRegistry::new();
    for kind in GeometryKind::ALL {
        registry.add(Instance::new(kind));
    }
    let mut visited = Vec::new();
    registry.for_each(&[GeometryKind::Sphere, GeometryKind::Torus], |instance| {
        visited.push(instance.kind)
    });
    assert_eq!(visited, vec![GeometryKind::Torus, GeometryKind::Sphere]);
}
