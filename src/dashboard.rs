//! One-shot recomputation of every derived view over the current
//! transaction collection.

use time::Date;

use crate::{
    activity::{DEFAULT_WINDOW_DAYS, DayBucket, daily_activity},
    category::{CategoryBucket, aggregate_by_category},
    savings::{SavingsLevel, savings_rate},
    summary::{TransactionSummary, summarize},
    transaction::{Transaction, TransactionType},
};

/// All derived state for the analytics dashboard.
///
/// A pure view over the transaction collection: the caller rebuilds it from
/// scratch whenever the collection changes (after a fetch or a persist), and
/// a superseded model is simply dropped in favour of the latest one. Nothing
/// in here is cached or independently mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    /// The headline balance/income/expense totals.
    pub summary: TransactionSummary,
    /// The trailing week of daily activity, oldest day first.
    pub weekly_activity: Vec<DayBucket>,
    /// Expense categories ranked by total, largest first.
    pub expense_categories: Vec<CategoryBucket>,
    /// Income categories ranked by total, largest first.
    pub income_categories: Vec<CategoryBucket>,
    /// The current-month savings rate as a percentage in `[0, 100]`.
    pub savings_rate: u8,
    /// The qualitative band the savings rate falls into.
    pub savings_level: SavingsLevel,
}

impl DashboardModel {
    /// Computes every derived view for `transactions`, with `today` as the
    /// reference date for the activity window and the savings rate.
    pub fn from_transactions(transactions: &[Transaction], today: Date) -> Self {
        let rate = savings_rate(transactions, today);

        Self {
            summary: summarize(transactions),
            weekly_activity: daily_activity(transactions, today, DEFAULT_WINDOW_DAYS),
            expense_categories: aggregate_by_category(transactions, TransactionType::Expense),
            income_categories: aggregate_by_category(transactions, TransactionType::Income),
            savings_rate: rate,
            savings_level: SavingsLevel::from_rate(rate),
        }
    }
}
