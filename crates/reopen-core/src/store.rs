use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{ReopenError, Result};
use crate::record::Record;

#[cfg(test)]
mod tests;

/// Whole-file JSON store of records, keyed by absolute path.
///
/// Every operation reads the backing file fresh and writes it back whole;
/// no in-memory state is carried across invocations. The file is protected
/// only by OS create/rename semantics, so concurrent `update` calls against
/// the same store can lose writes. That is accepted for a tool driven by
/// one interactive invocation at a time.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored record. A missing backing file is an empty store
    /// (first run), not an error; an unreadable or unparseable file is
    /// surfaced to the caller.
    pub fn read_all(&self) -> Result<Vec<Record>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Serializes `records` and atomically replaces the backing file. A
    /// half-written store is never visible: content lands in a fresh temp
    /// file first and is renamed over the target.
    pub fn write_all(&self, records: &[Record]) -> Result<()> {
        let data = serde_json::to_string(records)?;
        self.write_atomic(&data)
    }

    /// Merge-upserts `record`: an existing record for the same path absorbs
    /// it (scores add, access time refreshes to `now`); otherwise it is
    /// appended. Read-modify-write over the whole file, no fine-grained
    /// locking.
    pub fn update(&self, record: Record, now: DateTime<Utc>) -> Result<()> {
        let mut records = self.read_all()?;

        match records
            .iter_mut()
            .find(|existing| existing.path == record.path)
        {
            Some(existing) => *existing = existing.merge(&record, now),
            None => records.push(record),
        }

        self.write_all(&records)
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ReopenError::InvalidPath(format!(
                    "invalid store filename: {}",
                    self.path.display()
                ))
            })?;
        let tmp_name = format!(".{file_name}.reopen.tmp.{}", uuid::Uuid::new_v4().simple());
        let tmp_path = parent.join(tmp_name);

        let written = (|| -> Result<()> {
            let mut tmp = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&tmp_path)?;
            tmp.write_all(content.as_bytes())?;
            tmp.sync_all()?;
            Ok(())
        })();
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }

        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ReopenError::from(err));
        }

        if let Ok(dir) = fs::File::open(&parent) {
            let _ = dir.sync_all();
        }
        Ok(())
    }
}
