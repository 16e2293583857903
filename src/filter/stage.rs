//! Organization filter and fetch operations

use crate::error::{Error, Result};
use crate::pagination::{validate_page_size, FolderPaginator};
use crate::source::FolderSource;
use crate::types::{FetchFolderRequest, FetchFolderResponse, FolderRef, OrgId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Select the folders whose `org_id` equals `org_id`, in source order.
///
/// Returns an empty vector when nothing matches, including for the nil key.
pub fn select_by_organization(records: &[FolderRef], org_id: OrgId) -> Vec<FolderRef> {
    records
        .iter()
        .filter(|folder| folder.org_id == org_id)
        .map(Arc::clone)
        .collect()
}

/// Fetch every folder from `source` and keep the requested organization's.
///
/// Source errors are returned as [`Error::SourceFailure`]; they are never
/// replaced by an empty result.
pub async fn fetch_by_organization(
    source: &dyn FolderSource,
    request: &FetchFolderRequest,
) -> Result<FetchFolderResponse> {
    let records = source
        .fetch_all()
        .await
        .map_err(|e| Error::source_failure(source.name(), e))?;

    let folders = select_by_organization(&records, request.org_id);
    info!(
        source = source.name(),
        org_id = %request.org_id,
        total = records.len(),
        matched = folders.len(),
        "Fetched folders by organization"
    );

    Ok(FetchFolderResponse::new(folders))
}

/// Like [`fetch_by_organization`], also partitioning the result into pages
/// of `page_size` folders.
///
/// `page_size` is validated before the source is consulted.
pub async fn fetch_by_organization_paginated(
    source: &dyn FolderSource,
    request: &FetchFolderRequest,
    page_size: usize,
) -> Result<(FetchFolderResponse, FolderPaginator)> {
    validate_page_size(page_size)?;

    let response = fetch_by_organization(source, request).await?;
    let paginator = FolderPaginator::build(&response.folders, page_size)?;
    debug!(
        org_id = %request.org_id,
        page_size,
        pages = paginator.page_count(),
        "Paginated folders"
    );

    Ok((response, paginator))
}

/// Check that no folder id appears twice
pub fn check_unique_ids(records: &[FolderRef]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for folder in records {
        if !seen.insert(folder.id) {
            return Err(Error::DuplicateId { id: folder.id });
        }
    }
    Ok(())
}
