//! Clarity is a personal finance tracker. This crate is its analytics core:
//! the pure computations that turn the user's transaction history into the
//! derived state the app displays.
//!
//! Given a collection of [Transaction]s the core produces:
//!
//! - the headline balance/income/expense summary ([summarize]),
//! - a zero-filled trailing window of daily activity ([daily_activity]),
//! - category totals ranked by magnitude ([aggregate_by_category]),
//! - the current-month savings rate ([savings_rate]),
//! - filtered, paginated list views ([TransactionListView], [CategoryPager]),
//! - monthly report groups and their CSV export ([monthly_reports],
//!   [export_csv]).
//!
//! Fetching and persisting transactions are external collaborator operations
//! behind the [TransactionSource] trait; the core is re-invoked with the full,
//! refreshed collection after each of those calls resolves. Every computation
//! here is a synchronous pure function of its inputs and recomputes from
//! scratch, so a superseded result can simply be discarded.

#![warn(missing_docs)]

mod activity;
mod category;
mod dashboard;
mod fmt;
mod pagination;
mod report;
mod savings;
mod store;
mod summary;
mod timezone;
mod transaction;

pub use activity::{DEFAULT_WINDOW_DAYS, DayBucket, daily_activity};
pub use category::{CategoryBucket, aggregate_by_category, suggested_categories};
pub use dashboard::DashboardModel;
pub use fmt::{format_currency, format_signed_amount};
pub use pagination::{PageIndicator, PaginationConfig, create_page_indicators, paginate, total_pages};
pub use report::{MonthlyReportGroup, export_csv, monthly_reports};
pub use savings::{SavingsLevel, savings_rate};
pub use store::{DemoSource, TransactionSource, prepare_fetched};
pub use summary::{TransactionSummary, summarize};
pub use timezone::local_offset;
pub use transaction::{
    CategoryPager, NewTransaction, Transaction, TransactionBuilder, TransactionListView,
    TransactionType, localize, normalize_amount, sort_newest_first,
};

/// The errors that may occur in the analytics core.
///
/// The taxonomy is deliberately narrow: data-quality issues (malformed
/// amounts, empty collections, out-of-range page requests) degrade to
/// identity values instead of erroring, so the variants below cover only
/// caller programming errors and configuration problems.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A page size of zero was passed to a pagination operation.
    ///
    /// Unlike an out-of-range page number, which clamps to an empty slice,
    /// a zero page size is a caller programming error.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// The configured timezone is not a known canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// An error occurred while serializing transactions as CSV.
    #[error("could not serialize transactions as CSV: {0}")]
    CsvError(String),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}
