//! Currency display formatting for derived figures.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::transaction::{Transaction, TransactionType};

/// Formats a dollar amount with a thousands separator and two decimal
/// places, e.g. `$1,234.50`, `-$45.00`, `$0.00`.
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Formats a transaction's amount the way the list renders it: income with a
/// leading `+`, expenses with a leading `-`.
pub fn format_signed_amount(transaction: &Transaction) -> String {
    match transaction.kind {
        TransactionType::Income => format!("+{}", format_currency(transaction.amount)),
        TransactionType::Expense => format_currency(-transaction.amount),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{
        fmt::{format_currency, format_signed_amount},
        transaction::{Transaction, TransactionType},
    };

    #[test]
    fn formats_positive_amounts() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(45.0), "$45.00");
        assert_eq!(format_currency(0.05), "$0.05");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-45.0), "-$45.00");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
    }

    #[test]
    fn signed_amounts_follow_the_transaction_type() {
        let mut transaction = Transaction {
            id: "1".to_owned(),
            amount: 2500.0,
            category: "Salary".to_owned(),
            description: String::new(),
            date: datetime!(2024-01-15 9:00 UTC),
            kind: TransactionType::Income,
        };

        assert_eq!(format_signed_amount(&transaction), "+$2,500.00");

        transaction.kind = TransactionType::Expense;
        assert_eq!(format_signed_amount(&transaction), "-$2,500.00");
    }
}
