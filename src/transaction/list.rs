//! Filtered, paginated views over the transaction list and the category
//! selector.

use crate::{
    Error,
    pagination::{PageIndicator, PaginationConfig, create_page_indicators, paginate, total_pages},
    transaction::Transaction,
};

/// View state for the transaction table: the active category filter and the
/// current page.
///
/// Selecting a new category filter always resets the view to the first page,
/// so a page number left over from a previous, larger filtered set can never
/// silently point past the end of a smaller one.
#[derive(Debug, Clone)]
pub struct TransactionListView {
    category: Option<String>,
    page: usize,
    page_size: usize,
    max_indicators: usize,
}

impl TransactionListView {
    /// Create a view showing the first, unfiltered page.
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            category: None,
            page: 1,
            page_size: config.transaction_page_size,
            max_indicators: config.max_indicators,
        }
    }

    /// The active category filter, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The current 1-indexed page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the active category filter and reset to the first page.
    pub fn select_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 1;
    }

    /// Move to a 1-indexed page. A page past the end of the filtered data is
    /// allowed and yields an empty slice from [Self::page_items].
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// The transactions visible on the current page, after applying the
    /// category filter.
    ///
    /// `transactions` is expected to already be in display order (newest
    /// first, see [crate::sort_newest_first]); the filter and slice both
    /// preserve it.
    pub fn page_items<'a>(
        &self,
        transactions: &'a [Transaction],
    ) -> Result<Vec<&'a Transaction>, Error> {
        let filtered = self.filtered(transactions);

        Ok(paginate(&filtered, self.page, self.page_size)?.to_vec())
    }

    /// The number of pages in the current filtered set.
    pub fn total_pages(&self, transactions: &[Transaction]) -> Result<usize, Error> {
        total_pages(self.filtered(transactions).len(), self.page_size)
    }

    /// The pagination indicator row for the current filtered set.
    pub fn indicators(&self, transactions: &[Transaction]) -> Result<Vec<PageIndicator>, Error> {
        Ok(create_page_indicators(
            self.page,
            self.total_pages(transactions)?,
            self.max_indicators,
        ))
    }

    fn filtered<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|transaction| {
                self.category
                    .as_deref()
                    .map(|category| transaction.category == category)
                    .unwrap_or(true)
            })
            .collect()
    }
}

/// Pager over the fixed category suggestion labels shown as filter chips.
///
/// Independent of [TransactionListView]: paging through the chips does not
/// move the transaction list, and vice versa.
#[derive(Debug, Clone)]
pub struct CategoryPager {
    page: usize,
    page_size: usize,
}

impl CategoryPager {
    /// Create a pager showing the first page of labels.
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            page: 1,
            page_size: config.category_page_size,
        }
    }

    /// The current 1-indexed page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Move to a 1-indexed page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// The labels visible on the current page.
    pub fn page_items<'a>(&self, labels: &'a [&'a str]) -> Result<&'a [&'a str], Error> {
        paginate(labels, self.page, self.page_size)
    }

    /// The number of pages needed for `labels`.
    pub fn total_pages(&self, labels: &[&str]) -> Result<usize, Error> {
        total_pages(labels.len(), self.page_size)
    }
}
