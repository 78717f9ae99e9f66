//! Transaction models and views for the analytics core.
//!
//! This module contains everything related to transactions themselves:
//! - The [Transaction] model, [TransactionType], and the [NewTransaction]
//!   builder for records headed to the persist collaborator
//! - Normalization of fetched records (text amounts, mixed date formats,
//!   timezone localization)
//! - The filtered/paginated list views over a transaction collection

mod core;
mod list;
mod normalize;

pub use self::core::{
    NewTransaction, Transaction, TransactionBuilder, TransactionType, sort_newest_first,
};
pub use self::list::{CategoryPager, TransactionListView};
pub use self::normalize::{localize, normalize_amount};
