//! In-memory record source

use super::types::FolderSource;
use crate::error::Result;
use crate::types::{Folder, FolderRef};
use async_trait::async_trait;
use std::sync::Arc;

/// Record source backed by a vector held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    folders: Vec<FolderRef>,
}

impl InMemorySource {
    /// Create a source serving the given folders
    pub fn new(folders: impl IntoIterator<Item = Folder>) -> Self {
        Self {
            folders: folders.into_iter().map(Arc::new).collect(),
        }
    }

    /// Create a source from already shared records
    pub fn from_shared(folders: Vec<FolderRef>) -> Self {
        Self { folders }
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check if the source holds no records
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

#[async_trait]
impl FolderSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_all(&self) -> Result<Vec<FolderRef>> {
        Ok(self.folders.clone())
    }
}
