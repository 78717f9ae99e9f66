//! Defines the core data models for transactions.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::normalize::clamp_amount;

/// Whether a transaction brings money in or takes money out.
///
/// All monetary aggregation derives its sign from this value; the stored
/// amount itself is always a non-negative magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a grocery run.
    Expense,
}

impl TransactionType {
    /// The lowercase wire name of the type, as it appears in fetched records
    /// and exported reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Values of this type always hold a finite, non-negative `amount`: the
/// deserializer normalizes whatever the collaborator returned (including
/// amounts encoded as text) before any aggregation can observe it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Opaque identifier assigned by the persistence layer. Stable for the
    /// lifetime of the record.
    pub id: String,
    /// The amount of money that moved, as a non-negative magnitude. The
    /// direction is carried by `kind`.
    pub amount: f64,
    /// Free-text label grouping the transaction, e.g. "Groceries". Not
    /// constrained to an enumerated set.
    pub category: String,
    /// A text description of what the transaction was for. May be empty.
    pub description: String,
    /// When the transaction happened. This is the event time, not the time
    /// the record was created.
    #[serde(with = "time::serde::iso8601")]
    pub date: OffsetDateTime,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Start building a [NewTransaction] to hand to the persist collaborator.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, date: OffsetDateTime, kind: TransactionType) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            kind,
            category: None,
            description: None,
        }
    }

    /// The calendar date of the transaction in the timezone its timestamp
    /// carries, ignoring the time of day.
    pub fn calendar_date(&self) -> Date {
        self.date.date()
    }

    /// The amount with the sign implied by the transaction type: positive
    /// for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// A transaction that has not been persisted yet.
///
/// This is the shape the persist collaborator accepts: a [Transaction] minus
/// its identifier, which is assigned by the persistence layer and is not this
/// crate's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    /// The amount of money that moved, as a non-negative magnitude.
    pub amount: f64,
    /// Free-text label grouping the transaction.
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    #[serde(with = "time::serde::iso8601")]
    pub date: OffsetDateTime,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// A builder for creating [NewTransaction] instances.
///
/// Optional fields default the way the app's entry form does: an unselected
/// category becomes "Other" and an empty description becomes
/// "No description". Call `finalise()` to produce the [NewTransaction].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    amount: f64,
    date: OffsetDateTime,
    kind: TransactionType,
    category: Option<String>,
    description: Option<String>,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Create the [NewTransaction], applying defaults and running the amount
    /// through the same normalization as fetched records.
    pub fn finalise(self) -> NewTransaction {
        let description = match self.description {
            Some(description) if !description.is_empty() => description,
            _ => "No description".to_owned(),
        };

        NewTransaction {
            amount: clamp_amount(self.amount),
            category: self.category.unwrap_or_else(|| "Other".to_owned()),
            description,
            date: self.date,
            kind: self.kind,
        }
    }
}

/// Sorts transactions by date, newest first.
///
/// This is the presentation ordering the list views expect. The aggregators
/// themselves are order-independent and do not rely on it.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::transaction::{Transaction, TransactionType, sort_newest_first};

    #[test]
    fn builder_applies_entry_form_defaults() {
        let new_transaction =
            Transaction::build(45.0, datetime!(2024-01-15 0:00 UTC), TransactionType::Expense)
                .finalise();

        assert_eq!(new_transaction.category, "Other");
        assert_eq!(new_transaction.description, "No description");
        assert_eq!(new_transaction.amount, 45.0);
    }

    #[test]
    fn builder_keeps_provided_fields() {
        let new_transaction =
            Transaction::build(2500.0, datetime!(2024-01-01 0:00 UTC), TransactionType::Income)
                .category("Salary")
                .description("Monthly Salary")
                .finalise();

        assert_eq!(new_transaction.category, "Salary");
        assert_eq!(new_transaction.description, "Monthly Salary");
        assert_eq!(new_transaction.kind, TransactionType::Income);
    }

    #[test]
    fn builder_normalizes_bad_amounts() {
        let negative =
            Transaction::build(-10.0, datetime!(2024-01-15 0:00 UTC), TransactionType::Expense)
                .finalise();
        let not_a_number =
            Transaction::build(f64::NAN, datetime!(2024-01-15 0:00 UTC), TransactionType::Expense)
                .finalise();

        assert_eq!(negative.amount, 0.0);
        assert_eq!(not_a_number.amount, 0.0);
    }

    #[test]
    fn signed_amount_follows_type() {
        let mut transaction = test_transaction(120.0, TransactionType::Expense);
        assert_eq!(transaction.signed_amount(), -120.0);

        transaction.kind = TransactionType::Income;
        assert_eq!(transaction.signed_amount(), 120.0);
    }

    #[test]
    fn sorts_newest_first() {
        let mut transactions = vec![
            dated_transaction("old", datetime!(2024-01-01 9:00 UTC)),
            dated_transaction("new", datetime!(2024-03-01 9:00 UTC)),
            dated_transaction("mid", datetime!(2024-02-01 9:00 UTC)),
        ];

        sort_newest_first(&mut transactions);

        let ids: Vec<&str> = transactions
            .iter()
            .map(|transaction| transaction.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    fn test_transaction(amount: f64, kind: TransactionType) -> Transaction {
        Transaction {
            id: "1".to_owned(),
            amount,
            category: "Utilities".to_owned(),
            description: "Electric Bill".to_owned(),
            date: datetime!(2024-01-15 12:00 UTC),
            kind,
        }
    }

    fn dated_transaction(id: &str, date: time::OffsetDateTime) -> Transaction {
        Transaction {
            id: id.to_owned(),
            amount: 1.0,
            category: "Other".to_owned(),
            description: String::new(),
            date,
            kind: TransactionType::Expense,
        }
    }
}
