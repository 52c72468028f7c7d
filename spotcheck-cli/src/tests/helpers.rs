//! Test helpers for writing asset catalogs to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use spotcheck_core::{Asset, GridPosition};
use std::fs;
use tempfile::TempDir;

/// Temporary workspace holding a catalog file.
pub(super) struct CatalogWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl CatalogWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `assets` as a JSON catalog named `name` and return its path.
    pub(super) fn write_catalog(&self, name: &str, assets: &[Asset]) -> Utf8PathBuf {
        let payload = serde_json::to_vec_pretty(assets).expect("serialise catalog");
        self.write_raw(name, &payload)
    }

    /// Write raw bytes to `name` and return its path.
    pub(super) fn write_raw(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(path.as_std_path(), contents).expect("write catalog");
        path
    }
}

/// Ten assets along a corridor, each in its own column.
pub(super) fn corridor_assets() -> Vec<Asset> {
    (0..10_u16)
        .map(|i| {
            let mut asset = Asset::new(format!("desk-{i}")).at(GridPosition::new(0, i));
            asset.stored_place = Some("floor 3".to_owned());
            asset
        })
        .collect()
}
