use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// One tracked file: absolute path, accumulated access score, and the time
/// of the most recent access. `path` is the unique key within a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub path: String,
    pub score: f64,
    pub last_access: DateTime<Utc>,
}

impl Record {
    /// A freshly observed path starts at score 1.0.
    #[must_use]
    pub fn new(path: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            score: 1.0,
            last_access: now,
        }
    }

    /// Combines two observations of the same path: scores add, and the
    /// access time moves to `now` rather than either input's timestamp.
    /// The stored score only ever grows; decay happens at read time in the
    /// frecency weight.
    #[must_use]
    pub fn merge(&self, other: &Self, now: DateTime<Utc>) -> Self {
        Self {
            path: self.path.clone(),
            score: self.score + other.score,
            last_access: now,
        }
    }

    /// Final path component, or an empty string for paths without one.
    #[must_use]
    pub fn basename(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }
}
