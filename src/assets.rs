//! Asset manifest and loading
//!
//! The game cannot draw without every sprite and the HUD font, so loading is
//! all-or-nothing: the first failure aborts startup.

use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// Relative paths of every asset the presentation layer needs
#[derive(Debug, Clone)]
pub struct AssetManifest {
    pub background: PathBuf,
    pub player: PathBuf,
    pub choco_log: PathBuf,
    pub font: PathBuf,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: PathBuf::from("background.png"),
            player: PathBuf::from("player.png"),
            choco_log: PathBuf::from("chocoLog.png"),
            font: PathBuf::from("comicJungle/comicJungle.ttf"),
        }
    }
}

/// Resolves asset paths into opaque handles (images, font faces, ...)
pub trait AssetSource {
    type Handle;

    fn load(&mut self, path: &Path) -> Result<Self::Handle, AssetError>;
}

/// Reads raw asset bytes from a directory on disk
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FsAssetSource {
    type Handle = Vec<u8>;

    fn load(&mut self, path: &Path) -> Result<Vec<u8>, AssetError> {
        let full = self.root.join(path);
        let bytes = std::fs::read(&full).map_err(|source| AssetError::Io {
            path: full.clone(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(AssetError::Empty(full));
        }
        Ok(bytes)
    }
}

/// Every loaded asset handle
#[derive(Debug)]
pub struct Assets<H> {
    pub background: H,
    pub player: H,
    pub choco_log: H,
    pub font: H,
}

impl<H> Assets<H> {
    /// Load every manifest entry, stopping at the first failure
    pub fn load<S>(source: &mut S, manifest: &AssetManifest) -> Result<Self, AssetError>
    where
        S: AssetSource<Handle = H>,
    {
        let assets = Self {
            background: source.load(&manifest.background)?,
            player: source.load(&manifest.player)?,
            choco_log: source.load(&manifest.choco_log)?,
            font: source.load(&manifest.font)?,
        };
        log::info!("Loaded 4 assets");
        Ok(assets)
    }
}
