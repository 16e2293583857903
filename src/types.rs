//! Common types used throughout folder-pager
//!
//! This module contains the folder record, the request/response values
//! exchanged with callers, and small shared enums.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Type Aliases
// ============================================================================

/// Unique identifier of a folder
pub type FolderId = Uuid;

/// Organization key a folder belongs to
pub type OrgId = Uuid;

/// Shared, read-only handle to a folder record
pub type FolderRef = Arc<Folder>;

// ============================================================================
// Folder Record
// ============================================================================

/// A folder record as produced by a record source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique identifier within the full record set
    pub id: FolderId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Organization the folder belongs to
    pub org_id: OrgId,

    /// Soft-delete marker, carried as-is
    #[serde(default)]
    pub deleted: bool,
}

impl Folder {
    /// Create a new folder record
    pub fn new(id: FolderId, name: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            id,
            name: name.into(),
            org_id,
            deleted: false,
        }
    }

    /// Mark the folder as deleted
    #[must_use]
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// Request for the folders of one organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderRequest {
    /// Organization key to match; the nil UUID is a valid (usually empty) key
    #[serde(default = "Uuid::nil")]
    pub org_id: OrgId,
}

impl Default for FetchFolderRequest {
    fn default() -> Self {
        Self::new(Uuid::nil())
    }
}

impl FetchFolderRequest {
    /// Create a request for the given organization
    pub fn new(org_id: OrgId) -> Self {
        Self { org_id }
    }
}

/// Folders matching a [`FetchFolderRequest`], in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchFolderResponse {
    /// Matching folders
    pub folders: Vec<FolderRef>,
}

impl FetchFolderResponse {
    /// Create a response from matching folders
    pub fn new(folders: Vec<FolderRef>) -> Self {
        Self { folders }
    }

    /// Number of folders in the response
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

// ============================================================================
// Retry Backoff
// ============================================================================

/// Backoff strategy between HTTP retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
