// Expense Ledger - Core Library
// Record store plus aggregation over a CSV-backed expense record set.

pub mod aggregate;
pub mod error;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use aggregate::{filter, summary, Predicate, Summary};
pub use error::{LedgerError, Result};
pub use record::{Category, ExpenseRecord, HEADER};
pub use store::RecordStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
