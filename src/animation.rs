//! Per-frame rotation of the rotating kinds.
//!
//! By default every frame adds `rotation_speed` radians to the x and y rotation
//! of each torus, tetrahedron, icosahedron and octahedron, regardless of how much
//! time passed. Visual speed therefore follows the frame rate. Spheres and the
//! label never rotate.

use crate::{
    config::Configuration,
    data_structures::{geometry::GeometryKind, registry::InstanceRegistry},
};

/// How the per-frame rotation increment is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StepMode {
    /// `rotation_speed` per frame.
    #[default]
    FixedPerFrame,
    /// `rotation_speed * frame_seconds * reference_fps`, i.e. the fixed step at
    /// `reference_fps` and proportionally more or less at other rates.
    FrameTime { reference_fps: f32 },
}

/// Advances rotations once per frame. There is no paused state.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    mode: StepMode,
    rotating: Vec<GeometryKind>,
    previous_elapsed: Option<f32>,
}

impl AnimationDriver {
    /// A `FrameTime` mode whose `reference_fps` is not a finite positive
    /// number falls back to `FixedPerFrame`.
    pub fn new(mode: StepMode) -> Self {
        let mode = match mode {
            StepMode::FrameTime { reference_fps }
                if !(reference_fps.is_finite() && reference_fps > 0.0) =>
            {
                log::warn!(
                    "reference fps {} is not usable, stepping a fixed amount per frame",
                    reference_fps
                );
                StepMode::FixedPerFrame
            }
            mode => mode,
        };
        let rotating = GeometryKind::ALL
            .into_iter()
            .filter(|kind| kind.policy().animates)
            .collect();
        Self {
            mode,
            rotating,
            previous_elapsed: None,
        }
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Rotates every instance of a rotating kind by this frame's increment.
    ///
    /// `elapsed` is the clock reading for this frame. In the default mode it is
    /// recorded but does not change the increment.
    pub fn tick(&mut self, elapsed: f32, registry: &mut InstanceRegistry, config: &Configuration) {
        let step = self.step(elapsed, config.rotation_speed);
        registry.for_each(&self.rotating, |instance| {
            instance.rotation.x += step;
            instance.rotation.y += step;
        });
    }

    fn step(&mut self, elapsed: f32, rotation_speed: f32) -> f32 {
        let previous = self.previous_elapsed.replace(elapsed);
        match self.mode {
            StepMode::FixedPerFrame => rotation_speed,
            StepMode::FrameTime { reference_fps } => {
                // The first frame has nothing to measure against.
                let frame_seconds = previous.map_or(1.0 / reference_fps, |previous| {
                    (elapsed - previous).max(0.0)
                });
                rotation_speed * frame_seconds * reference_fps
            }
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(StepMode::default())
    }
}
