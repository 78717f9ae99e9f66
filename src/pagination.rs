//! This module defines the common functionality for paging data.

use crate::Error;

/// The config for pagination.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Transactions to display per page of the transaction list.
    pub transaction_page_size: usize,
    /// Category labels to display per page of the category selector.
    pub category_page_size: usize,
    /// The maximum number of numbered pages to show in the pagination
    /// indicator.
    pub max_indicators: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            transaction_page_size: 5,
            category_page_size: 3,
            max_indicators: 5,
        }
    }
}

/// The slice of `items` that belongs to the 1-indexed `page`.
///
/// A page past the end of the data (or page zero) yields an empty slice
/// rather than an error; concatenating the slices for pages `1..=total`
/// reconstructs `items` exactly.
///
/// # Errors
///
/// Returns [Error::InvalidPageSize] when `page_size` is zero, which is a
/// caller programming error rather than a data condition.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Result<&[T], Error> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }

    let Some(page_index) = page.checked_sub(1) else {
        return Ok(&[]);
    };
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Ok(&items[start..end])
}

/// The number of pages needed to show `item_count` items, i.e.
/// `ceil(item_count / page_size)`. Zero items means zero pages.
///
/// # Errors
///
/// Returns [Error::InvalidPageSize] when `page_size` is zero.
pub fn total_pages(item_count: usize, page_size: usize) -> Result<usize, Error> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }

    Ok(item_count.div_ceil(page_size))
}

/// A single element of the pagination indicator row.
#[derive(Debug, PartialEq, Eq)]
pub enum PageIndicator {
    /// A numbered link to another page.
    Page(usize),
    /// The current page.
    CurrPage(usize),
    /// A link to the next page.
    NextButton(usize),
    /// A link to the previous page.
    BackButton(usize),
}

/// Builds the indicator row for a paged list: a back button when there is a
/// previous page, up to `max_indicators` numbered pages centred on the
/// current page, and a next button when there is a following page.
pub fn create_page_indicators(
    curr_page: usize,
    page_count: usize,
    max_indicators: usize,
) -> Vec<PageIndicator> {
    if page_count == 0 {
        return Vec::new();
    }

    let max_indicators = max_indicators.max(1);
    let last = (curr_page.saturating_sub(max_indicators / 2).max(1) + max_indicators - 1)
        .min(page_count);
    let first = last.saturating_sub(max_indicators - 1).max(1);

    let mut indicators = Vec::new();

    if curr_page > 1 {
        indicators.push(PageIndicator::BackButton(curr_page - 1));
    }

    for page in first..=last {
        if page == curr_page {
            indicators.push(PageIndicator::CurrPage(page));
        } else {
            indicators.push(PageIndicator::Page(page));
        }
    }

    if curr_page < page_count {
        indicators.push(PageIndicator::NextButton(curr_page + 1));
    }

    indicators
}
