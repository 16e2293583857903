//! Fixed-size paginator with a saturating cursor

use crate::error::{Error, Result};
use crate::types::FolderRef;
use tracing::debug;

/// Reject page sizes that cannot partition a sequence
pub fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::invalid_value(
            "page_size",
            "page size must be at least 1, got 0",
        ));
    }
    Ok(())
}

/// Paginator over shared folder records
pub type FolderPaginator = Paginator<FolderRef>;

/// Pages built once from an ordered sequence, plus the index of the next
/// page to serve.
///
/// Every page holds exactly `page_size` items except the last, which holds
/// the remainder. An empty input produces zero pages.
///
/// Mutating operations take `&mut self`; sharing a paginator between
/// callers needs an external lock around each read-modify sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T> {
    pages: Vec<Vec<T>>,
    cursor: usize,
    page_size: usize,
}

impl<T: Clone> Paginator<T> {
    /// Partition `records` into pages of `page_size` items.
    ///
    /// Fails with [`Error::InvalidConfigValue`] when `page_size` is zero.
    pub fn build(records: &[T], page_size: usize) -> Result<Self> {
        validate_page_size(page_size)?;

        let pages: Vec<Vec<T>> = records.chunks(page_size).map(<[T]>::to_vec).collect();
        debug!(
            records = records.len(),
            page_size,
            pages = pages.len(),
            "Built paginator"
        );

        Ok(Self {
            pages,
            cursor: 0,
            page_size,
        })
    }
}

impl<T> Paginator<T> {
    /// Serve the page under the cursor and advance towards the last page.
    ///
    /// Returns the served page together with the cursor value *after*
    /// advancing, i.e. the index of the page the next call will serve.
    /// Once the last page is reached, every call returns it again with the
    /// last index. With zero pages this returns an empty slice and `0`.
    pub fn request_page(&mut self) -> (&[T], usize) {
        if self.pages.is_empty() {
            return (&[], 0);
        }

        let served = self.cursor;
        if self.cursor < self.pages.len() - 1 {
            self.cursor += 1;
        }
        (self.pages[served].as_slice(), self.cursor)
    }

    /// Look up a page by index without touching the cursor
    pub fn get_page(&self, page_num: i64) -> Result<&[T]> {
        let index = self.checked_index(page_num)?;
        Ok(self.pages[index].as_slice())
    }

    /// Move the cursor back to the first page
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to `page_num`
    pub fn set_page(&mut self, page_num: i64) -> Result<()> {
        self.cursor = self.checked_index(page_num)?;
        Ok(())
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Configured page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the page the next `request_page` call will serve
    pub fn current_page(&self) -> usize {
        self.cursor
    }

    /// Total number of items across all pages
    pub fn total_records(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Check if there are no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over all pages in order
    pub fn pages(&self) -> impl Iterator<Item = &[T]> {
        self.pages.iter().map(Vec::as_slice)
    }

    /// Validate a caller-supplied page number against `[0, page_count)`
    fn checked_index(&self, page_num: i64) -> Result<usize> {
        usize::try_from(page_num)
            .ok()
            .filter(|index| *index < self.pages.len())
            .ok_or_else(|| Error::out_of_range(page_num, self.pages.len()))
    }
}
