//! Category grouping and ranking for a type-filtered transaction subset.

use std::collections::HashMap;

use crate::transaction::{Transaction, TransactionType};

/// The total amount recorded against one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    /// The category label, exactly as it appears on the transactions.
    pub name: String,
    /// The summed amount for this category within the selected type.
    pub total: f64,
}

/// Groups transactions of the selected type by category and ranks the
/// categories by total, largest first.
///
/// Category matching is case-sensitive and the set of categories comes
/// purely from the data; no fixed taxonomy is enforced. Ties keep the order
/// in which the categories were first seen, so the ranking is deterministic
/// for a given input. An empty (or fully filtered-out) collection yields an
/// empty sequence; presenting "no data" is the caller's job.
pub fn aggregate_by_category(
    transactions: &[Transaction],
    kind: TransactionType,
) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        match index_by_name.get(transaction.category.as_str()) {
            Some(&index) => buckets[index].total += transaction.amount,
            None => {
                index_by_name.insert(transaction.category.as_str(), buckets.len());
                buckets.push(CategoryBucket {
                    name: transaction.category.clone(),
                    total: transaction.amount,
                });
            }
        }
    }

    // Stable sort, so equal totals keep first-seen order.
    buckets.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    buckets
}

/// The category labels the entry form suggests for each transaction type.
///
/// These are UI configuration data, not a closed set: stored transactions
/// may carry any label, and the aggregator treats suggestions and free-text
/// labels identically.
pub fn suggested_categories(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Income => INCOME_CATEGORIES,
    }
}

const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Shopping",
    "Health",
    "Education",
    "Travel",
    "Groceries",
    "Other",
];

const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Business",
    "Gift",
    "Rental",
    "Refunds",
    "Other",
];
