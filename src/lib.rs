//! # folder-pager
//!
//! Retrieves the folders of one organization from a record source and
//! serves them as a flat list or as fixed-size pages behind a cursor.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folder_pager::filter::fetch_by_organization_paginated;
//! use folder_pager::source::JsonFileSource;
//! use folder_pager::{FetchFolderRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = JsonFileSource::new("folders.json");
//!     let request = FetchFolderRequest::new(org_id);
//!
//!     let (response, mut paginator) =
//!         fetch_by_organization_paginated(&source, &request, 3).await?;
//!
//!     let (first_page, next) = paginator.request_page();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   fetch_all   ┌──────────────┐   build   ┌──────────────┐
//! │ FolderSource │ ────────────▶ │ Filter stage │ ────────▶ │  Paginator   │
//! │ memory/file/ │               │ org_id match │           │ request/get/ │
//! │ http         │               │ source order │           │ reset/set    │
//! └──────────────┘               └──────────────┘           └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Folder record and request/response types
pub mod types;

/// HTTP client with retry
pub mod http;

/// Record sources
pub mod source;

/// Organization filter stage
pub mod filter;

/// Fixed-size pagination
pub mod pagination;

/// Settings loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use filter::{fetch_by_organization, fetch_by_organization_paginated, select_by_organization};
pub use pagination::{FolderPaginator, Paginator};
pub use source::FolderSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
