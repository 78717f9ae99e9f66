//! The collaborator seam for fetching and persisting transactions.
//!
//! The analytics core never talks to a backend itself: it is handed the full
//! transaction collection and recomputes its derived views from scratch.
//! [TransactionSource] is the boundary behind which the real fetch/persist
//! operations live. [DemoSource] is the in-memory implementation backing the
//! app's demo mode, selected by constructing it explicitly rather than by
//! reading ambient session state.

use time::{Duration, OffsetDateTime};

use crate::{
    Error,
    timezone::local_offset,
    transaction::{NewTransaction, Transaction, TransactionType, localize, sort_newest_first},
};

/// Handles fetching and persisting of transactions.
pub trait TransactionSource {
    /// All of the current user's transactions, normalized and in display
    /// order (newest first).
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, Error>;

    /// Persist a new transaction and return it with the identifier the
    /// persistence layer assigned.
    fn create_transaction(
        &mut self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, Error>;
}

/// Prepares records freshly deserialized from a remote collaborator for
/// aggregation: shifts each timestamp into the user's timezone and orders
/// the collection newest first.
///
/// Implementations of [TransactionSource] backed by a network fetch should
/// run their deserialized records through this before returning them.
///
/// # Errors
///
/// Returns [Error::InvalidTimezone] when `timezone` is not a canonical
/// timezone name.
pub fn prepare_fetched(
    mut transactions: Vec<Transaction>,
    timezone: &str,
    now: OffsetDateTime,
) -> Result<Vec<Transaction>, Error> {
    let offset =
        local_offset(timezone, now).ok_or_else(|| Error::InvalidTimezone(timezone.to_owned()))?;

    localize(&mut transactions, offset);
    sort_newest_first(&mut transactions);

    Ok(transactions)
}

/// An in-memory transaction source seeded with sample data, backing the
/// app's demo mode.
///
/// Demo mode is an explicit construction-time choice: callers that want it
/// build a `DemoSource` instead of their real source, and nothing deeper in
/// the core ever branches on a mode flag.
#[derive(Debug, Clone)]
pub struct DemoSource {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl DemoSource {
    /// Create a source seeded with the demo data set, dated relative to
    /// `now`: a salary payment today, groceries yesterday, and an electric
    /// bill two days ago.
    pub fn new(now: OffsetDateTime) -> Self {
        let seed = [
            (
                "1",
                2500.0,
                "Salary",
                "Monthly Salary",
                now,
                TransactionType::Income,
            ),
            (
                "2",
                45.0,
                "Groceries",
                "Weekly supply",
                now - Duration::days(1),
                TransactionType::Expense,
            ),
            (
                "3",
                120.0,
                "Utilities",
                "Electric Bill",
                now - Duration::days(2),
                TransactionType::Expense,
            ),
        ];

        let transactions = seed
            .into_iter()
            .map(|(id, amount, category, description, date, kind)| Transaction {
                id: id.to_owned(),
                amount,
                category: category.to_owned(),
                description: description.to_owned(),
                date,
                kind,
            })
            .collect();

        Self {
            transactions,
            next_id: 4,
        }
    }
}

impl TransactionSource for DemoSource {
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let mut transactions = self.transactions.clone();
        sort_newest_first(&mut transactions);

        Ok(transactions)
    }

    fn create_transaction(
        &mut self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, Error> {
        let transaction = Transaction {
            id: format!("demo-{}", self.next_id),
            amount: new_transaction.amount,
            category: new_transaction.category,
            description: new_transaction.description,
            date: new_transaction.date,
            kind: new_transaction.kind,
        };
        self.next_id += 1;

        tracing::debug!("created demo transaction {}", transaction.id);
        self.transactions.insert(0, transaction.clone());

        Ok(transaction)
    }
}
