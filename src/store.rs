// Record store
// Owns the in-memory record set and mediates all mutation and persistence.
// Backing storage is one flat CSV file, rewritten in full after every
// successful append.

use csv::{Reader, Writer};
use log::{debug, info, warn};
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, Result};
use crate::record::{Category, ExpenseRecord, HEADER};

/// File-backed store of expense records, insertion order preserved.
///
/// Single-process, single-writer: mutation goes through `&mut self`, and
/// every successful append rewrites the whole backing file. A failed write
/// leaves the in-memory set mutated; persistence is best-effort after the
/// in-memory commit.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl RecordStore {
    /// Open the store backed by `path`. An existing file is parsed in full;
    /// a missing one is created with a header-only table.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if path.exists() {
            let records = read_records(&path)?;
            debug!("loaded {} expense records from {:?}", records.len(), path);
            Ok(RecordStore { path, records })
        } else {
            let store = RecordStore {
                path,
                records: Vec::new(),
            };
            store.persist()?;
            info!("created new expense file at {:?}", store.path);
            Ok(store)
        }
    }

    /// Validate and append one expense, then rewrite the backing file.
    ///
    /// Rejects a non-positive `amount` and a `category` outside the fixed
    /// enumeration without mutating anything. A write failure surfaces as
    /// `LedgerError::Storage` with the record already committed in memory.
    pub fn add_expense(
        &mut self,
        date: &str,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<()> {
        // Negated comparison so NaN is rejected as well.
        if !(amount > 0.0) {
            return Err(LedgerError::validation(
                "amount",
                format!("must be positive, got {}", amount),
            ));
        }
        let category: Category = category.parse()?;

        self.records.push(ExpenseRecord {
            date: date.to_string(),
            amount,
            category,
            description: description.to_string(),
        });
        debug!(
            "appended {} expense of {} on {}, store now holds {} records",
            category,
            amount,
            date,
            self.records.len()
        );

        if let Err(err) = self.persist() {
            warn!("expense appended in memory but not persisted: {}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Read-only view of the record set, in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file from memory: header row, then one row per
    /// record. Overwrite semantics, never an append.
    fn persist(&self) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| LedgerError::storage(&self.path, e.into()))?;
        let mut writer = Writer::from_writer(BufWriter::new(file));

        writer
            .write_record(HEADER)
            .map_err(|e| LedgerError::storage(&self.path, e))?;
        for record in &self.records {
            let amount = record.amount.to_string();
            writer
                .write_record([
                    record.date.as_str(),
                    amount.as_str(),
                    record.category.as_str(),
                    record.description.as_str(),
                ])
                .map_err(|e| LedgerError::storage(&self.path, e))?;
        }
        writer
            .flush()
            .map_err(|e| LedgerError::storage(&self.path, e.into()))?;
        Ok(())
    }
}

fn read_records(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let mut reader = Reader::from_path(path).map_err(|e| LedgerError::storage(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| LedgerError::format(path, e.to_string()))?;
    if headers.iter().ne(HEADER) {
        return Err(LedgerError::format(
            path,
            format!(
                "unexpected columns {:?}, expected {:?}",
                headers.iter().collect::<Vec<_>>(),
                HEADER
            ),
        ));
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: ExpenseRecord =
            result.map_err(|e| LedgerError::format(path, e.to_string()))?;
        records.push(record);
    }
    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
