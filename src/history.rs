// history.rs

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::HistoryError;
use crate::util::format_number;

pub const HEADER: [&str; 3] = ["Operation", "Input", "Result"];

/// Handle given to every command that reads or writes the log.
pub type SharedHistory = Rc<RefCell<HistoryStore>>;

/// One row of the history file. Records have no id; they are addressed by
/// their position in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "Result")]
    pub result: String,
}

/// Calculation log backed by a CSV file. Every mutation rewrites the whole
/// file; if that fails the in-memory log stays authoritative.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl HistoryStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        let mut store = Self { path, records: Vec::new() };
        store.load();
        store
    }

    pub fn shared(self) -> SharedHistory {
        Rc::new(RefCell::new(self))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the in-memory log with the file contents. A missing or
    /// unreadable file leaves an empty log.
    pub fn load(&mut self) {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no existing history, starting empty");
            self.records.clear();
            return;
        }
        match read_records(&self.path) {
            Ok(records) => {
                info!(path = %self.path.display(), count = records.len(), "history loaded");
                self.records = records;
            }
            Err(e) => {
                warn!(path = %self.path.display(), "failed to load history: {e}");
                self.records.clear();
            }
        }
    }

    pub fn add_record(&mut self, operation: &str, input: &str, result: f64) {
        let record = Record {
            operation: operation.to_string(),
            input: input.to_string(),
            result: format_number(result),
        };
        info!(operation, input, result = %record.result, "adding record");
        self.records.push(record);
        self.save();
    }

    /// Removes the record at `index`; later records shift down by one.
    /// Returns false without touching the file when `index` is out of range.
    pub fn delete_record(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            warn!(index, len = self.records.len(), "invalid index, cannot delete record");
            return false;
        }
        let removed = self.records.remove(index);
        debug!(index, ?removed, "record removed");
        self.save();
        info!(index, len = self.records.len(), "record deleted");
        true
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.save();
        info!("history cleared");
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Printable listing with zero-based positions, as `delete` expects them.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "History is empty.".to_string();
        }
        self.records()
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{:>5}  {}: {} = {}", i, r.operation, r.input, r.result))
            .join("\n")
    }

    fn save(&self) {
        match self.write_records() {
            Ok(()) => debug!(path = %self.path.display(), "history saved"),
            Err(e) => error!(path = %self.path.display(), "failed to save history: {e}"),
        }
    }

    fn write_records(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| HistoryError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn read_records(path: &Path) -> Result<Vec<Record>, HistoryError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    if !headers.iter().eq(HEADER) {
        return Err(HistoryError::Schema {
            found: headers.iter().map(str::to_string).collect(),
        });
    }
    let records = reader.deserialize().collect::<Result<Vec<Record>, _>>()?;
    Ok(records)
}
