// Error taxonomy for the expense ledger
// Every failure is a recoverable, local condition; nothing here panics.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Insertion refused: the offending field and why.
    /// The in-memory record set is untouched.
    #[error("invalid expense ({field}): {message}")]
    Validation { field: &'static str, message: String },

    /// The persisted file does not match the expected schema.
    #[error("malformed expense file {path:?}: {message}")]
    Format { path: PathBuf, message: String },

    /// Reading or rewriting the backing file failed.
    /// On write the in-memory record set keeps the appended record.
    #[error("storage failure on {path:?}")]
    Storage {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Summary requested over zero records.
    #[error("no expense records to summarize")]
    EmptyInput,

    /// A filter predicate could not be evaluated against a record.
    #[error("predicate not evaluable: {message}")]
    Predicate { message: String },
}

impl LedgerError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn format(path: &std::path::Path, message: impl Into<String>) -> Self {
        LedgerError::Format {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn storage(path: &std::path::Path, source: csv::Error) -> Self {
        LedgerError::Storage {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn predicate(message: impl Into<String>) -> Self {
        LedgerError::Predicate {
            message: message.into(),
        }
    }
}
