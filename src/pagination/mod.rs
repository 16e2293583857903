//! Pagination module
//!
//! Partitions an ordered record sequence into fixed-size pages and serves
//! them through a saturating cursor.
//!
//! # Overview
//!
//! A [`Paginator`] is built once from a complete sequence and a page size.
//! Its pages never change afterwards; only the cursor moves:
//!
//! - `request_page` - serve the page under the cursor, then advance (saturating)
//! - `get_page` - bounds-checked lookup, cursor untouched
//! - `reset` - cursor back to the first page
//! - `set_page` - bounds-checked jump

mod paginator;

pub use paginator::{validate_page_size, FolderPaginator, Paginator};

#[cfg(test)]
mod tests;
