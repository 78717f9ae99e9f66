//! Coercion of externally-sourced records into safe, canonical transactions.
//!
//! The fetch collaborator may return amounts as JSON numbers or as numeric
//! text, and dates as full ISO 8601 instants or bare calendar dates. This
//! module normalizes all of that exactly once, at deserialization time, so
//! no aggregator ever observes a string amount, NaN, or a negative
//! magnitude. A value that cannot be salvaged degrades to zero rather than
//! failing the fetch.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use time::{Date, OffsetDateTime, UtcOffset, format_description::well_known::Iso8601};

use super::core::{Transaction, TransactionType};

/// Coerces a loosely-typed amount value into a finite, non-negative number.
///
/// Accepts JSON numbers and numeric text (leading/trailing whitespace is
/// tolerated). Anything else, including null, the empty string, and
/// non-numeric text, yields `0.0`, as does a negative or non-finite value.
pub fn normalize_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(amount) => clamp_amount(amount),
        None => {
            tracing::debug!("could not parse amount {value}, defaulting to zero");
            0.0
        }
    }
}

/// Restricts an already-numeric amount to the finite, non-negative range the
/// aggregators require.
pub(crate) fn clamp_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount >= 0.0 {
        amount
    } else {
        tracing::debug!("normalized out-of-range amount {amount} to zero");
        0.0
    }
}

/// Shifts every timestamp into the user's local offset.
///
/// Downstream calendar computations (day buckets, current-month filters,
/// report groups) read the date component directly, so this must run once
/// per fetch, right after deserialization.
pub fn localize(transactions: &mut [Transaction], offset: UtcOffset) {
    for transaction in transactions {
        transaction.date = transaction.date.to_offset(offset);
    }
}

fn parse_date(text: &str) -> Option<OffsetDateTime> {
    if let Ok(instant) = OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        return Some(instant);
    }

    // The backend stores bare dates for transactions created without a
    // time of day.
    Date::parse(text, &Iso8601::DEFAULT)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// The shape of a transaction record as returned by the fetch collaborator.
#[derive(Deserialize)]
struct RawTransaction {
    id: RawId,
    #[serde(default)]
    amount: Value,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    date: String,
    #[serde(rename = "type")]
    kind: TransactionType,
}

/// Identifiers arrive as strings from the demo data set and as integers from
/// the database-backed API.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTransaction::deserialize(deserializer)?;
        let date = parse_date(&raw.date).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid transaction date {:?}", raw.date))
        })?;

        Ok(Transaction {
            id: raw.id.into_string(),
            amount: normalize_amount(&raw.amount),
            category: raw.category,
            description: raw.description,
            date,
            kind: raw.kind,
        })
    }
}
