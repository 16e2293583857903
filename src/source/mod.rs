//! Record source module
//!
//! Suppliers of the full, unfiltered folder record set.
//!
//! # Overview
//!
//! - `InMemorySource` - records held in memory
//! - `JsonFileSource` - JSON document on disk
//! - `HttpSource` - JSON document served over HTTP, with retries
//!
//! All sources decode the same payload: a JSON array of folders, or an
//! object with that array under `folders`.

mod file;
mod http;
mod memory;
mod types;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use memory::InMemorySource;
pub use types::{decode_folders, FolderSource};
