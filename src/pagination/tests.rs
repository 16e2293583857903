//! Tests for pagination module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn numbers(n: usize) -> Vec<usize> {
    (0..n).collect()
}

// ============================================================================
// Build Tests
// ============================================================================

#[test_case(10, 3, 4, 1 ; "remainder on last page")]
#[test_case(9, 3, 3, 3 ; "evenly divided")]
#[test_case(1, 5, 1, 1 ; "single short page")]
#[test_case(5, 1, 5, 1 ; "page size one")]
#[test_case(666, 3, 222, 3 ; "six hundred sixty six by three")]
fn test_build_page_shape(len: usize, page_size: usize, pages: usize, last_len: usize) {
    let paginator = Paginator::build(&numbers(len), page_size).unwrap();

    assert_eq!(paginator.page_count(), pages);
    assert_eq!(paginator.page_size(), page_size);
    assert_eq!(paginator.total_records(), len);

    let sizes: Vec<usize> = paginator.pages().map(<[usize]>::len).collect();
    assert_eq!(sizes.last().copied(), Some(last_len));
    assert!(sizes[..sizes.len() - 1].iter().all(|len| *len == page_size));
}

#[test]
fn test_build_concatenation_reproduces_input() {
    let input = numbers(47);
    let paginator = Paginator::build(&input, 6).unwrap();

    let joined: Vec<usize> = paginator.pages().flatten().copied().collect();
    assert_eq!(joined, input);
}

#[test]
fn test_build_empty_has_zero_pages() {
    let paginator = Paginator::<usize>::build(&[], 3).unwrap();
    assert!(paginator.is_empty());
    assert_eq!(paginator.page_count(), 0);
    assert_eq!(paginator.total_records(), 0);
    assert_eq!(paginator.current_page(), 0);
}

#[test]
fn test_build_rejects_zero_page_size() {
    let err = Paginator::build(&numbers(4), 0).unwrap_err();
    match err {
        Error::InvalidConfigValue { field, .. } => assert_eq!(field, "page_size"),
        other => panic!("Expected InvalidConfigValue, got {other:?}"),
    }
}

// ============================================================================
// request_page Tests
// ============================================================================

#[test]
fn test_request_page_empty() {
    let mut paginator = Paginator::<usize>::build(&[], 3).unwrap();

    let (page, next) = paginator.request_page();
    assert!(page.is_empty());
    assert_eq!(next, 0);

    // Still empty on repeat
    let (page, next) = paginator.request_page();
    assert!(page.is_empty());
    assert_eq!(next, 0);
}

#[test]
fn test_request_page_returns_next_index() {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();

    let (page, next) = paginator.request_page();
    assert_eq!(page, &[0, 1, 2]);
    assert_eq!(next, 1);

    let (page, next) = paginator.request_page();
    assert_eq!(page, &[3, 4, 5]);
    assert_eq!(next, 2);
}

#[test]
fn test_request_page_saturates_on_last_page() {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();
    let count = paginator.page_count();

    let mut indices = Vec::new();
    let mut served = Vec::new();
    for _ in 0..count {
        let (page, next) = paginator.request_page();
        served.push(page.to_vec());
        indices.push(next);
    }

    assert_eq!(indices, vec![1, 2, 3, 3]);
    assert_eq!(
        served,
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
    );

    // Further calls keep serving the last page without advancing
    for _ in 0..3 {
        let (page, next) = paginator.request_page();
        assert_eq!(page, &[9]);
        assert_eq!(next, 3);
    }
    assert_eq!(paginator.current_page(), 3);
}

#[test]
fn test_request_page_single_page() {
    let mut paginator = Paginator::build(&numbers(2), 5).unwrap();

    let (page, next) = paginator.request_page();
    assert_eq!(page, &[0, 1]);
    assert_eq!(next, 0);

    let (page, next) = paginator.request_page();
    assert_eq!(page, &[0, 1]);
    assert_eq!(next, 0);
}

// ============================================================================
// get_page Tests
// ============================================================================

#[test]
fn test_get_page_does_not_move_cursor() {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();
    paginator.request_page();

    assert_eq!(paginator.get_page(3).unwrap(), &[9]);
    assert_eq!(paginator.get_page(0).unwrap(), &[0, 1, 2]);
    assert_eq!(paginator.current_page(), 1);
}

#[test_case(-1 ; "negative")]
#[test_case(4 ; "page count")]
#[test_case(100 ; "far past end")]
#[test_case(i64::MIN ; "minimum")]
fn test_get_page_out_of_range(page: i64) {
    let paginator = Paginator::build(&numbers(10), 3).unwrap();

    let err = paginator.get_page(page).unwrap_err();
    assert!(err.is_out_of_range());
    assert_eq!(
        err.to_string(),
        format!("page {page} out of range, page must be in the range [0, 4)")
    );
}

#[test]
fn test_get_page_on_empty_paginator() {
    let paginator = Paginator::<usize>::build(&[], 3).unwrap();
    let err = paginator.get_page(0).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfRange {
            page: 0,
            page_count: 0
        }
    ));
}

// ============================================================================
// reset / set_page Tests
// ============================================================================

#[test]
fn test_reset_returns_to_first_page() {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();
    for _ in 0..6 {
        paginator.request_page();
    }

    paginator.reset();
    assert_eq!(paginator.current_page(), 0);

    let (page, next) = paginator.request_page();
    assert_eq!(page, &[0, 1, 2]);
    assert_eq!(next, 1);
}

#[test]
fn test_reset_on_empty_paginator() {
    let mut paginator = Paginator::<usize>::build(&[], 3).unwrap();
    paginator.reset();
    assert_eq!(paginator.request_page(), (&[][..], 0));
}

#[test]
fn test_set_page_then_request() {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();

    paginator.set_page(2).unwrap();
    let (page, next) = paginator.request_page();
    assert_eq!(page, &[6, 7, 8]);
    assert_eq!(next, 3);
}

#[test]
fn test_set_page_to_last_stays() {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();

    paginator.set_page(3).unwrap();
    let (page, next) = paginator.request_page();
    assert_eq!(page, &[9]);
    assert_eq!(next, 3);
}

#[test]
fn test_set_page_can_move_backwards() {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();
    paginator.set_page(3).unwrap();
    paginator.set_page(1).unwrap();
    assert_eq!(paginator.current_page(), 1);
}

#[test_case(-1 ; "negative")]
#[test_case(4 ; "page count")]
fn test_set_page_out_of_range_keeps_cursor(page: i64) {
    let mut paginator = Paginator::build(&numbers(10), 3).unwrap();
    paginator.request_page();

    let err = paginator.set_page(page).unwrap_err();
    assert!(err.is_out_of_range());
    assert!(err.to_string().contains("[0, 4)"));
    assert_eq!(paginator.current_page(), 1);
}
