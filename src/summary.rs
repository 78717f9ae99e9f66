//! Reduces a transaction collection into the headline balance figures.

use serde::Serialize;

use crate::transaction::{Transaction, TransactionType};

/// The headline totals for a transaction collection.
///
/// Derived, never persisted: recomputed from the full collection whenever it
/// changes.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    /// Income minus expenses.
    pub balance: f64,
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
}

/// Computes the [TransactionSummary] for a collection in a single linear
/// pass.
///
/// The traversal order does not affect the result, and an empty collection
/// yields the all-zero summary. Bad upstream data cannot produce an error
/// here: amounts are normalized before they reach this function, so the
/// worst a malformed record can do is contribute zero.
pub fn summarize<'a, I>(transactions: I) -> TransactionSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summary = TransactionSummary::default();

    for transaction in transactions {
        match transaction.kind {
            TransactionType::Income => {
                summary.income += transaction.amount;
                summary.balance += transaction.amount;
            }
            TransactionType::Expense => {
                summary.expense += transaction.amount;
                summary.balance -= transaction.amount;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        summary::{TransactionSummary, summarize},
        transaction::{Transaction, TransactionType},
    };

    fn create_test_transaction(
        amount: f64,
        kind: TransactionType,
        category: &str,
        date: time::Date,
    ) -> Transaction {
        Transaction {
            id: "test".to_owned(),
            amount,
            category: category.to_owned(),
            description: String::new(),
            date: date.midnight().assume_utc(),
            kind,
        }
    }

    #[test]
    fn summarizes_mixed_collection() {
        let transactions = vec![
            create_test_transaction(500.0, TransactionType::Income, "Salary", date!(2024 - 01 - 01)),
            create_test_transaction(100.0, TransactionType::Expense, "Food", date!(2024 - 01 - 01)),
            create_test_transaction(50.0, TransactionType::Expense, "Food", date!(2024 - 01 - 02)),
        ];

        let summary = summarize(&transactions);

        assert_eq!(
            summary,
            TransactionSummary {
                balance: 350.0,
                income: 500.0,
                expense: 150.0,
            }
        );
    }

    #[test]
    fn empty_collection_yields_zero_summary() {
        let summary = summarize(&[]);

        assert_eq!(summary, TransactionSummary::default());
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let transactions = vec![
            create_test_transaction(10.0, TransactionType::Income, "Gift", date!(2024 - 02 - 10)),
            create_test_transaction(25.5, TransactionType::Expense, "Food", date!(2024 - 02 - 11)),
            create_test_transaction(3.25, TransactionType::Income, "Refunds", date!(2024 - 02 - 12)),
        ];

        let summary = summarize(&transactions);

        assert_eq!(summary.balance, summary.income - summary.expense);
    }

    #[test]
    fn traversal_order_does_not_change_the_result() {
        let mut transactions = vec![
            create_test_transaction(500.0, TransactionType::Income, "Salary", date!(2024 - 01 - 01)),
            create_test_transaction(100.0, TransactionType::Expense, "Food", date!(2024 - 01 - 01)),
            create_test_transaction(50.0, TransactionType::Expense, "Food", date!(2024 - 01 - 02)),
        ];

        let forward = summarize(&transactions);
        transactions.reverse();
        let backward = summarize(&transactions);

        assert_eq!(forward, backward);
    }

    #[test]
    fn accepts_a_filtered_iterator() {
        let transactions = vec![
            create_test_transaction(500.0, TransactionType::Income, "Salary", date!(2024 - 01 - 01)),
            create_test_transaction(100.0, TransactionType::Expense, "Food", date!(2024 - 02 - 01)),
        ];

        let summary = summarize(
            transactions
                .iter()
                .filter(|transaction| transaction.calendar_date().month() == time::Month::January),
        );

        assert_eq!(summary.income, 500.0);
        assert_eq!(summary.expense, 0.0);
    }
}
