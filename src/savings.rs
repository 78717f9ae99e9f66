//! The current-month savings-rate health metric.

use time::Date;

use crate::{summary::summarize, transaction::Transaction};

/// Computes the percentage of the current month's income that was not spent,
/// as an integer clamped to `[0, 100]`.
///
/// Only transactions whose (localized) date falls in the same calendar month
/// and year as `today` count. An income of exactly zero yields `0` by
/// definition, avoiding a division by zero; overspending (expenses above
/// income) also reports `0` rather than a negative percentage, leaving the
/// qualitative "spending more than you earn" signal to the caller via
/// [SavingsLevel].
pub fn savings_rate(transactions: &[Transaction], today: Date) -> u8 {
    let current_month = transactions.iter().filter(|transaction| {
        let date = transaction.calendar_date();
        date.year() == today.year() && date.month() == today.month()
    });
    let summary = summarize(current_month);

    if summary.income == 0.0 {
        return 0;
    }

    let rate = ((summary.income - summary.expense) / summary.income * 100.0).round();
    rate.clamp(0.0, 100.0) as u8
}

/// Qualitative band for a savings rate, used to pick the health message
/// shown next to the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsLevel {
    /// Saving more than 20% of income this month.
    Healthy,
    /// Saving something, but no more than 20%.
    Modest,
    /// Spending at least as much as earned this month, or no income at all.
    Overspent,
}

impl SavingsLevel {
    /// The band a clamped savings rate falls into.
    pub fn from_rate(rate: u8) -> Self {
        if rate > 20 {
            Self::Healthy
        } else if rate > 0 {
            Self::Modest
        } else {
            Self::Overspent
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use crate::{
        savings::{SavingsLevel, savings_rate},
        transaction::{Transaction, TransactionType},
    };

    fn create_test_transaction(
        amount: f64,
        kind: TransactionType,
        date: time::OffsetDateTime,
    ) -> Transaction {
        Transaction {
            id: "test".to_owned(),
            amount,
            category: "Other".to_owned(),
            description: String::new(),
            date,
            kind,
        }
    }

    #[test]
    fn computes_rounded_current_month_rate() {
        let transactions = vec![
            create_test_transaction(
                500.0,
                TransactionType::Income,
                datetime!(2024-01-01 0:00 UTC),
            ),
            create_test_transaction(
                100.0,
                TransactionType::Expense,
                datetime!(2024-01-01 0:00 UTC),
            ),
            create_test_transaction(
                50.0,
                TransactionType::Expense,
                datetime!(2024-01-02 0:00 UTC),
            ),
        ];

        assert_eq!(savings_rate(&transactions, date!(2024 - 01 - 15)), 70);
    }

    #[test]
    fn zero_income_is_zero_rate_regardless_of_expenses() {
        let transactions = vec![create_test_transaction(
            250.0,
            TransactionType::Expense,
            datetime!(2024-01-05 0:00 UTC),
        )];

        assert_eq!(savings_rate(&transactions, date!(2024 - 01 - 15)), 0);
        assert_eq!(savings_rate(&[], date!(2024 - 01 - 15)), 0);
    }

    #[test]
    fn overspending_clamps_to_zero() {
        let transactions = vec![
            create_test_transaction(
                100.0,
                TransactionType::Income,
                datetime!(2024-01-05 0:00 UTC),
            ),
            create_test_transaction(
                300.0,
                TransactionType::Expense,
                datetime!(2024-01-06 0:00 UTC),
            ),
        ];

        assert_eq!(savings_rate(&transactions, date!(2024 - 01 - 15)), 0);
    }

    #[test]
    fn other_months_are_excluded() {
        let transactions = vec![
            create_test_transaction(
                500.0,
                TransactionType::Income,
                datetime!(2024-01-01 0:00 UTC),
            ),
            // Same month number, previous year.
            create_test_transaction(
                400.0,
                TransactionType::Expense,
                datetime!(2023-01-10 0:00 UTC),
            ),
            // Previous month.
            create_test_transaction(
                400.0,
                TransactionType::Expense,
                datetime!(2023-12-31 0:00 UTC),
            ),
        ];

        assert_eq!(savings_rate(&transactions, date!(2024 - 01 - 15)), 100);
    }

    #[test]
    fn rate_is_always_within_bounds() {
        let saved_everything = vec![create_test_transaction(
            500.0,
            TransactionType::Income,
            datetime!(2024-01-01 0:00 UTC),
        )];

        assert_eq!(savings_rate(&saved_everything, date!(2024 - 01 - 15)), 100);
    }

    #[test]
    fn levels_follow_the_health_bands() {
        assert_eq!(SavingsLevel::from_rate(70), SavingsLevel::Healthy);
        assert_eq!(SavingsLevel::from_rate(21), SavingsLevel::Healthy);
        assert_eq!(SavingsLevel::from_rate(20), SavingsLevel::Modest);
        assert_eq!(SavingsLevel::from_rate(1), SavingsLevel::Modest);
        assert_eq!(SavingsLevel::from_rate(0), SavingsLevel::Overspent);
    }
}
