//! Tests for the filter stage

use super::*;
use crate::error::{Error, Result};
use crate::source::{FolderSource, InMemorySource};
use crate::types::{FetchFolderRequest, Folder, FolderRef};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

const ORG_A: Uuid = Uuid::from_u128(0xA);
const ORG_B: Uuid = Uuid::from_u128(0xB);
const ORG_C: Uuid = Uuid::from_u128(0xC);

/// Source that always fails, counting how often it was asked
#[derive(Default)]
struct FailingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl FolderSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_all(&self) -> Result<Vec<FolderRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::FileNotFound {
            path: "folders.json".to_string(),
        })
    }
}

/// Interleave folders of three organizations; ids are unique and ascending
fn mixed_records() -> Vec<FolderRef> {
    let orgs = [ORG_A, ORG_B, ORG_A, ORG_C, ORG_A, ORG_B];
    orgs.iter()
        .enumerate()
        .map(|(i, org)| {
            Arc::new(Folder::new(
                Uuid::from_u128(i as u128 + 1),
                format!("folder-{i}"),
                *org,
            ))
        })
        .collect()
}

fn ids(folders: &[FolderRef]) -> Vec<u128> {
    folders.iter().map(|f| f.id.as_u128()).collect()
}

// ============================================================================
// select_by_organization Tests
// ============================================================================

#[test]
fn test_select_keeps_matches_in_source_order() {
    let records = mixed_records();

    let selected = select_by_organization(&records, ORG_A);
    assert_eq!(ids(&selected), vec![1, 3, 5]);
    assert!(selected.iter().all(|f| f.org_id == ORG_A));

    let selected = select_by_organization(&records, ORG_B);
    assert_eq!(ids(&selected), vec![2, 6]);
}

#[test]
fn test_select_shares_records_with_source() {
    let records = mixed_records();
    let selected = select_by_organization(&records, ORG_C);

    assert_eq!(selected.len(), 1);
    assert!(Arc::ptr_eq(&selected[0], &records[3]));
}

#[test]
fn test_select_no_match_is_empty() {
    let records = mixed_records();
    assert!(select_by_organization(&records, Uuid::from_u128(0xD)).is_empty());
}

#[test]
fn test_select_nil_key_without_match_is_empty() {
    let records = mixed_records();
    assert!(select_by_organization(&records, Uuid::nil()).is_empty());
}

#[test]
fn test_select_nil_key_matches_nil_records() {
    let mut records = mixed_records();
    records.push(Arc::new(Folder::new(Uuid::from_u128(99), "orphan", Uuid::nil())));

    let selected = select_by_organization(&records, Uuid::nil());
    assert_eq!(ids(&selected), vec![99]);
}

#[test]
fn test_select_empty_input() {
    assert!(select_by_organization(&[], ORG_A).is_empty());
}

#[test]
fn test_select_does_not_filter_deleted() {
    let records = vec![Arc::new(
        Folder::new(Uuid::from_u128(1), "gone", ORG_A).deleted(true),
    )];
    assert_eq!(select_by_organization(&records, ORG_A).len(), 1);
}

// ============================================================================
// check_unique_ids Tests
// ============================================================================

#[test]
fn test_unique_ids_pass() {
    let records = mixed_records();
    check_unique_ids(&records).unwrap();

    let selected = select_by_organization(&records, ORG_A);
    let distinct: HashSet<_> = selected.iter().map(|f| f.id).collect();
    assert_eq!(distinct.len(), selected.len());
}

#[test]
fn test_unique_ids_reports_duplicate() {
    let mut records = mixed_records();
    records.push(Arc::new(Folder::new(Uuid::from_u128(2), "copy", ORG_C)));

    let err = check_unique_ids(&records).unwrap_err();
    assert!(matches!(err, Error::DuplicateId { id } if id == Uuid::from_u128(2)));
}

// ============================================================================
// fetch_by_organization Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_by_organization() {
    let source = InMemorySource::from_shared(mixed_records());

    let response = fetch_by_organization(&source, &FetchFolderRequest::new(ORG_A))
        .await
        .unwrap();
    assert_eq!(ids(&response.folders), vec![1, 3, 5]);
}

#[tokio::test]
async fn test_fetch_by_organization_empty_source() {
    let source = InMemorySource::default();

    let response = fetch_by_organization(&source, &FetchFolderRequest::default())
        .await
        .unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_fetch_by_organization_propagates_source_failure() {
    let source = FailingSource::default();

    let err = fetch_by_organization(&source, &FetchFolderRequest::new(ORG_A))
        .await
        .unwrap_err();

    match err {
        Error::SourceFailure { name, cause } => {
            assert_eq!(name, "failing");
            assert!(matches!(*cause, Error::FileNotFound { .. }));
        }
        other => panic!("Expected SourceFailure, got {other:?}"),
    }
}

// ============================================================================
// fetch_by_organization_paginated Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_paginated() {
    let source = InMemorySource::from_shared(mixed_records());

    let (response, mut paginator) =
        fetch_by_organization_paginated(&source, &FetchFolderRequest::new(ORG_A), 2)
            .await
            .unwrap();

    assert_eq!(response.len(), 3);
    assert_eq!(paginator.page_count(), 2);

    let (page, next) = paginator.request_page();
    assert_eq!(ids(page), vec![1, 3]);
    assert_eq!(next, 1);

    let (page, next) = paginator.request_page();
    assert_eq!(ids(page), vec![5]);
    assert_eq!(next, 1);
}

#[tokio::test]
async fn test_fetch_paginated_no_match() {
    let source = InMemorySource::from_shared(mixed_records());

    let (response, mut paginator) =
        fetch_by_organization_paginated(&source, &FetchFolderRequest::new(Uuid::nil()), 3)
            .await
            .unwrap();

    assert!(response.is_empty());
    assert_eq!(paginator.page_count(), 0);
    let (page, next) = paginator.request_page();
    assert!(page.is_empty());
    assert_eq!(next, 0);
}

#[tokio::test]
async fn test_fetch_paginated_zero_page_size_fails_before_fetch() {
    let source = FailingSource::default();

    let err = fetch_by_organization_paginated(&source, &FetchFolderRequest::new(ORG_A), 0)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidConfigValue { .. }));
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fetch_paginated_propagates_source_failure() {
    let source = FailingSource::default();

    let err = fetch_by_organization_paginated(&source, &FetchFolderRequest::new(ORG_A), 3)
        .await
        .unwrap_err();

    assert!(err.is_source_failure());
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}
