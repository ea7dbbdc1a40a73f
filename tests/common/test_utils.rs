use std::path::{Path, PathBuf};

use rand::{SeedableRng, rngs::StdRng};
use scene_scatter::{
    config::Configuration,
    data_structures::{
        geometry::{GeometryCatalog, GeometryKind},
        instance::Instance,
    },
    flow::Scene,
    resources::{FontAsset, MatcapTexture, SceneAssets},
};

pub(crate) const SEED: u64 = 0x5CA7_7E12;

pub(crate) fn test_assets() -> SceneAssets {
    SceneAssets::new(
        FontAsset {
            name: "fonts/test.typeface.json".to_string(),
            data: br#"{"glyphs":{}}"#.to_vec(),
        },
        MatcapTexture {
            name: "textures/matcaps/test.png".to_string(),
            data: vec![0x89, b'P', b'N', b'G'],
        },
    )
    .expect("test assets are valid")
}

pub(crate) fn config(number_of_meshes: i32, distance_multiplier: f32) -> Configuration {
    Configuration {
        number_of_meshes,
        distance_multiplier,
        ..Default::default()
    }
}

/// A scene populated with a fixed seed so failures are reproducible.
pub(crate) fn seeded_scene(config: Configuration) -> Scene<StdRng> {
    seeded_scene_with(config, SEED)
}

pub(crate) fn seeded_scene_with(config: Configuration, seed: u64) -> Scene<StdRng> {
    Scene::from_assets(
        test_assets(),
        config,
        GeometryCatalog::standard(),
        StdRng::seed_from_u64(seed),
    )
}

pub(crate) fn instances_of(scene: &Scene<StdRng>, kind: GeometryKind) -> Vec<Instance> {
    scene
        .registry()
        .iter()
        .filter(|instance| instance.kind == kind)
        .cloned()
        .collect()
}

/// A fresh directory below the system temp dir, unique per test.
pub(crate) fn temp_asset_root(test_name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "scene-scatter-{}-{}",
        test_name,
        std::process::id()
    ));
    if root.exists() {
        std::fs::remove_dir_all(&root).expect("stale temp dir can be removed");
    }
    std::fs::create_dir_all(&root).expect("temp dir can be created");
    root
}

pub(crate) fn write_asset(root: &Path, file_name: &str, data: &[u8]) {
    let path = root.join(file_name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("asset dir can be created");
    }
    std::fs::write(path, data).expect("asset can be written");
}
