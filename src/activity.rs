//! Groups transactions into calendar-day buckets over a trailing window.

use time::{Date, Duration, Month, Weekday};

use crate::transaction::{Transaction, TransactionType};

/// The number of trailing days shown on the activity chart by default.
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// The income and expense totals for one calendar day in the activity
/// window.
///
/// Days with no transactions are still present, with zero totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    /// The calendar day this bucket covers.
    pub date: Date,
    /// Three-letter weekday label, e.g. "Mon".
    pub label: String,
    /// Short date label, e.g. "Jan 05".
    pub date_label: String,
    /// Total income recorded on this day.
    pub income: f64,
    /// Total expenses recorded on this day.
    pub expense: f64,
}

impl DayBucket {
    fn empty(date: Date) -> Self {
        Self {
            date,
            label: weekday_abbrev(date.weekday()).to_owned(),
            date_label: format!("{} {:02}", month_abbrev(date.month()), date.day()),
            income: 0.0,
            expense: 0.0,
        }
    }
}

/// Buckets transactions into the `window_days` trailing calendar days ending
/// at `today` inclusive, oldest first.
///
/// A transaction belongs to the bucket whose calendar day matches the year,
/// month, and day of its (localized) date; the time of day is ignored.
/// Transactions outside the window are skipped. The result always contains
/// exactly `window_days` buckets, zero-filled where no transactions match.
pub fn daily_activity(
    transactions: &[Transaction],
    today: Date,
    window_days: usize,
) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = (0..window_days)
        .map(|index| today - Duration::days((window_days - 1 - index) as i64))
        .map(DayBucket::empty)
        .collect();

    for transaction in transactions {
        let day = transaction.calendar_date();
        let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.date == day) else {
            continue;
        };

        match transaction.kind {
            TransactionType::Income => bucket.income += transaction.amount,
            TransactionType::Expense => bucket.expense += transaction.amount,
        }
    }

    buckets
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
