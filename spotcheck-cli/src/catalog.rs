//! JSON asset catalogs read through `cap-std` and `camino`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use spotcheck_core::{Asset, AssetRepository, RepositoryError};
use std::io::{self, BufReader};

use crate::CliError;

/// Read-only asset repository backed by a JSON array of assets.
///
/// The catalog is decoded once on load; positions are expected to have been
/// filled in by an earlier floor-plan pass.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: Utf8PathBuf,
    assets: Vec<Asset>,
}

impl JsonCatalog {
    /// Load and decode the catalog at `path`.
    ///
    /// # Errors
    /// Returns [`CliError::OpenCatalog`] when the file cannot be opened and
    /// [`CliError::ParseCatalog`] when it is not a JSON array of assets.
    pub fn load(path: &Utf8Path) -> Result<Self, CliError> {
        let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let assets: Vec<Asset> =
            serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded {} assets from {path}", assets.len());
        Ok(Self {
            path: path.to_path_buf(),
            assets,
        })
    }

    /// Path the catalog was read from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Number of assets in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the catalog lists no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetRepository for JsonCatalog {
    fn fetch_all(&self) -> Result<Vec<Asset>, RepositoryError> {
        Ok(self.assets.clone())
    }
}

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
