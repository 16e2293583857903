//! Filter stage
//!
//! Selects the folders of one organization from a record source and,
//! optionally, hands them to a [`FolderPaginator`](crate::pagination::FolderPaginator).
//!
//! # Overview
//!
//! - `select_by_organization` - pure, order-preserving exact-match filter
//! - `fetch_by_organization` - fetch from a source, then filter
//! - `fetch_by_organization_paginated` - fetch, filter, then paginate
//! - `check_unique_ids` - verify folder ids are pairwise distinct

mod stage;

pub use stage::{
    check_unique_ids, fetch_by_organization, fetch_by_organization_paginated,
    select_by_organization,
};

#[cfg(test)]
mod tests;
