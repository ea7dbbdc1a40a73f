/**
 * This module contains all logic for loading the scene's external files: the
 * label font and the matcap texture. Both are kept as raw bytes; decoding them is
 * up to the renderer.
 */
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

/// Where the scene's assets live, relative to the asset root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    /// Directory on native, URL prefix below the page origin on wasm.
    pub root: PathBuf,
    pub font: String,
    pub matcap: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./assets"),
            font: "fonts/helvetiker_regular.typeface.json".to_string(),
            matcap: "textures/matcaps/9.png".to_string(),
        }
    }
}

/// Typeface used to shape the label text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontAsset {
    pub name: String,
    pub data: Vec<u8>,
}

/// The single matcap texture every instance is shaded with, in sRGB.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcapTexture {
    pub name: String,
    pub data: Vec<u8>,
}

/// Everything that has to be loaded before the scene can exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneAssets {
    pub font: FontAsset,
    pub matcap: MatcapTexture,
}

impl SceneAssets {
    pub fn new(font: FontAsset, matcap: MatcapTexture) -> anyhow::Result<Self> {
        if font.data.is_empty() {
            bail!("font {} is empty, the label cannot be shaped", font.name);
        }
        if matcap.data.is_empty() {
            log::warn!("matcap texture {} is empty, instances will render unshaded", matcap.name);
        }
        Ok(Self { font, matcap })
    }
}

#[cfg(target_arch = "wasm32")]
fn format_url(root: &Path, file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().context("no window available")?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("page origin is not readable"))?;
    let base = reqwest::Url::parse(&format!("{}/{}/", origin, root.display()))?;
    Ok(base.join(file_name)?)
}

pub async fn load_binary(root: &Path, file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(root, file_name)?;
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = root.join(file_name);
        std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?
    };

    Ok(data)
}

/// Loads the font and the matcap concurrently.
pub async fn load_scene_assets(paths: &AssetPaths) -> anyhow::Result<SceneAssets> {
    let (font, matcap) = futures::future::try_join(
        load_binary(&paths.root, &paths.font),
        load_binary(&paths.root, &paths.matcap),
    )
    .await?;
    log::info!(
        "loaded assets: font {} ({} bytes), matcap {} ({} bytes)",
        paths.font,
        font.len(),
        paths.matcap,
        matcap.len()
    );
    SceneAssets::new(
        FontAsset {
            name: paths.font.clone(),
            data: font,
        },
        MatcapTexture {
            name: paths.matcap.clone(),
            data: matcap,
        },
    )
}
