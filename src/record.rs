// Expense record model
// One row of the persisted CSV file; immutable once appended to the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Column order of the persisted file. Loading fails if the header row
/// differs from this.
pub const HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

// ============================================================================
// CATEGORY
// ============================================================================

/// Closed set of expense categories. Anything outside this enumeration is
/// rejected at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Other,
}

impl Category {
    /// All valid categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Exact-name match against the fixed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| {
                LedgerError::validation(
                    "category",
                    format!(
                        "unknown category {:?}, expected one of: Food, Transport, Utilities, Entertainment, Other",
                        s
                    ),
                )
            })
    }
}

// ============================================================================
// EXPENSE RECORD
// ============================================================================

/// One logged expense. Field names are renamed to match the persisted
/// CSV header exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date as text (YYYY-MM-DD expected); parsed on demand.
    #[serde(rename = "Date")]
    pub date: String,

    /// Positive decimal amount; unit is an implicit currency.
    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Category")]
    pub category: Category,

    /// Free-text note, no constraints.
    #[serde(rename = "Description")]
    pub description: String,
}

impl ExpenseRecord {
    /// Parse the stored date text into a calendar date.
    pub fn parsed_date(&self) -> chrono::ParseResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_valid() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Other".parse::<Category>().unwrap(), Category::Other);
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation { field: "category", .. }
        ));
    }

    #[test]
    fn test_category_parse_is_exact_match() {
        // The enumeration is closed and case-sensitive.
        assert!("food".parse::<Category>().is_err());
        assert!(" Food".parse::<Category>().is_err());
    }

    #[test]
    fn test_parsed_date() {
        let record = ExpenseRecord {
            date: "2025-01-10".to_string(),
            amount: 50.0,
            category: Category::Food,
            description: "Lunch".to_string(),
        };
        assert_eq!(
            record.parsed_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_parsed_date_rejects_garbage() {
        let record = ExpenseRecord {
            date: "not a date".to_string(),
            amount: 1.0,
            category: Category::Other,
            description: String::new(),
        };
        assert!(record.parsed_date().is_err());
    }
}
