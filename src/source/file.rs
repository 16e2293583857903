//! JSON file record source

use super::types::{decode_folders, FolderSource};
use crate::error::{Error, Result};
use crate::types::FolderRef;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record source reading a JSON document of folders from disk
///
/// The file is read on every fetch, so edits are picked up without
/// rebuilding the source.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    /// Create a source for the given file
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FolderSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_all(&self) -> Result<Vec<FolderRef>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: self.name.clone(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let folders = decode_folders(&bytes)?;
        debug!(path = %self.name, count = folders.len(), "Loaded folders from file");
        Ok(folders)
    }
}
