// Aggregation over a record set snapshot
// Pure functions: no mutation, no persistence, no hidden state.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::error::{LedgerError, Result};
use crate::record::{Category, ExpenseRecord};

// ============================================================================
// SUMMARY
// ============================================================================

/// Aggregate view of a record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Sum of all amounts.
    pub total: f64,
    /// Arithmetic mean of all amounts.
    pub average: f64,
    /// Per-category sums; categories with no records are omitted.
    pub category_totals: BTreeMap<Category, f64>,
}

/// Compute total, average and per-category totals over `records`.
///
/// An empty record set has no defined average and reports
/// `LedgerError::EmptyInput`.
pub fn summary(records: &[ExpenseRecord]) -> Result<Summary> {
    if records.is_empty() {
        return Err(LedgerError::EmptyInput);
    }

    let mut total = 0.0;
    let mut category_totals: BTreeMap<Category, f64> = BTreeMap::new();
    for record in records {
        total += record.amount;
        *category_totals.entry(record.category).or_insert(0.0) += record.amount;
    }

    Ok(Summary {
        total,
        average: total / records.len() as f64,
        category_totals,
    })
}

// ============================================================================
// PREDICATE
// ============================================================================

/// Typed filter condition over record attributes.
///
/// A closed expression tree rather than an evaluated query string: every
/// attribute reference and comparison is fixed at the type level, so the
/// only evaluation failure left is a stored date that does not parse.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// amount strictly greater than the threshold
    AmountAbove(f64),
    /// amount strictly less than the threshold
    AmountBelow(f64),
    CategoryIs(Category),
    /// date on or after the given day; parses the stored date text
    OnOrAfter(NaiveDate),
    /// date on or before the given day; parses the stored date text
    OnOrBefore(NaiveDate),
    /// case-sensitive substring match on the description
    DescriptionContains(String),
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }

    /// Evaluate this predicate against one record.
    pub fn matches(&self, record: &ExpenseRecord) -> Result<bool> {
        match self {
            Predicate::AmountAbove(threshold) => Ok(record.amount > *threshold),
            Predicate::AmountBelow(threshold) => Ok(record.amount < *threshold),
            Predicate::CategoryIs(category) => Ok(record.category == *category),
            Predicate::OnOrAfter(day) => Ok(record_date(record)? >= *day),
            Predicate::OnOrBefore(day) => Ok(record_date(record)? <= *day),
            Predicate::DescriptionContains(needle) => {
                Ok(record.description.contains(needle.as_str()))
            }
            Predicate::And(a, b) => Ok(a.matches(record)? && b.matches(record)?),
            Predicate::Or(a, b) => Ok(a.matches(record)? || b.matches(record)?),
            Predicate::Not(inner) => Ok(!inner.matches(record)?),
        }
    }
}

fn record_date(record: &ExpenseRecord) -> Result<NaiveDate> {
    record.parsed_date().map_err(|e| {
        LedgerError::predicate(format!("record date {:?} is not a date: {}", record.date, e))
    })
}

/// Return the records satisfying `predicate`, preserving input order.
/// The input is untouched; results borrow from it.
pub fn filter<'a>(
    records: &'a [ExpenseRecord],
    predicate: &Predicate,
) -> Result<Vec<&'a ExpenseRecord>> {
    let mut matched = Vec::new();
    for record in records {
        if predicate.matches(record)? {
            matched.push(record);
        }
    }
    Ok(matched)
}

// ============================================================================
// TESTS
// ============================================================================
