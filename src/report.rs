//! Monthly report groups and their CSV export.

use std::collections::HashMap;

use time::{Date, Month};

use crate::{Error, transaction::Transaction};

/// Fixed size increment per transaction used for the displayed report size.
///
/// This mirrors what the report list shows: a rough feel for how large the
/// export will be, not a measured byte count.
const SIZE_MB_PER_TRANSACTION: f64 = 0.05;

/// The transactions recorded in one calendar month, ready to be listed as a
/// downloadable report.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReportGroup {
    /// The first day of the month the group covers.
    pub month: Date,
    /// Display label for the month, e.g. "October 2023".
    pub label: String,
    /// The month's transactions, in the order they appeared in the input.
    pub transactions: Vec<Transaction>,
    /// The number of transactions in the group.
    pub count: usize,
    /// Display-only size estimate. Grows with the transaction count but is
    /// not a real file size.
    pub approximate_size_mb: f64,
}

impl MonthlyReportGroup {
    /// The size estimate formatted for display, e.g. "0.15 MB".
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.approximate_size_mb)
    }

    /// The download file name for this group's CSV export, e.g.
    /// "clarity_report_October_2023.csv".
    pub fn file_name(&self) -> String {
        format!("clarity_report_{}.csv", self.label.replace(' ', "_"))
    }
}

/// Groups transactions by the calendar month and year of their (localized)
/// date, newest month first.
///
/// Every distinct month present in the collection produces exactly one
/// group; months with no transactions are not represented.
pub fn monthly_reports(transactions: &[Transaction]) -> Vec<MonthlyReportGroup> {
    let mut groups: Vec<MonthlyReportGroup> = Vec::new();
    let mut index_by_month: HashMap<Date, usize> = HashMap::new();

    for transaction in transactions {
        let month = transaction.calendar_date().replace_day(1).unwrap();
        let index = *index_by_month.entry(month).or_insert_with(|| {
            groups.push(MonthlyReportGroup {
                month,
                label: format!("{} {}", month_name(month.month()), month.year()),
                transactions: Vec::new(),
                count: 0,
                approximate_size_mb: 0.0,
            });
            groups.len() - 1
        });

        groups[index].transactions.push(transaction.clone());
    }

    for group in &mut groups {
        group.count = group.transactions.len();
        group.approximate_size_mb = SIZE_MB_PER_TRANSACTION * group.count as f64;
    }

    groups.sort_by(|a, b| b.month.cmp(&a.month));
    groups
}

/// Serializes transactions as a CSV document with the fixed header
/// `ID,Date,Type,Category,Amount,Description`.
///
/// Rows are `\n`-separated with no trailing newline. Dates are written as
/// ISO calendar dates without a time component, amounts as plain decimal
/// text. Fields containing the delimiter or a quote character are
/// quote-wrapped with internal quotes doubled, so the output stays
/// parseable by any standard CSV reader.
pub fn export_csv(transactions: &[Transaction]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["ID", "Date", "Type", "Category", "Amount", "Description"])?;

    for transaction in transactions {
        let date = transaction.calendar_date().to_string();
        let amount = transaction.amount.to_string();
        writer.write_record([
            transaction.id.as_str(),
            date.as_str(),
            transaction.kind.as_str(),
            transaction.category.as_str(),
            amount.as_str(),
            transaction.description.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))?;

    Ok(text.trim_end_matches('\n').to_owned())
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}
