use std::fs;
use std::path::Path;

use crate::error::{ReopenError, Result};
use crate::record::Record;
use crate::store::RecordStore;


const MAX_MATCH_PARALLELISM: usize = 8;
pub const MATCH_PARALLELISM_ENV: &str = "REOPEN_MATCH_PARALLELISM";

/// Filters the store down to records whose basename equals `name` exactly
/// (case-sensitive) and whose path still resolves to a regular file on
/// disk.
///
/// The existence check is a fresh stat per record, so it runs fanned out
/// across scoped threads; concurrency is a throughput optimization, not a
/// correctness requirement. Result order is unspecified until the selector
/// re-sorts.
pub fn search(store: &RecordStore, name: &str) -> Result<Vec<Record>> {
    let records = store.read_all()?;
    let parallelism = match_parallelism(records.len());
    filter_matches(records, name, parallelism)
}

fn filter_matches(records: Vec<Record>, name: &str, parallelism: usize) -> Result<Vec<Record>> {
    if parallelism <= 1 {
        return Ok(records
            .into_iter()
            .filter(|record| matches_on_disk(record, name))
            .collect());
    }

    let mut matches = Vec::<Record>::new();
    let mut pending = records.into_iter();
    loop {
        let batch = pending.by_ref().take(parallelism).collect::<Vec<_>>();
        if batch.is_empty() {
            break;
        }

        let mut batch_matches = std::thread::scope(|scope| {
            let handles = batch
                .into_iter()
                .map(|record| scope.spawn(move || matches_on_disk(&record, name).then_some(record)))
                .collect::<Vec<_>>();

            let mut out = Vec::<Record>::with_capacity(handles.len());
            for handle in handles {
                let joined = handle
                    .join()
                    .map_err(|_| ReopenError::Internal("match worker panicked".to_string()))?;
                if let Some(record) = joined {
                    out.push(record);
                }
            }
            Ok::<Vec<Record>, ReopenError>(out)
        })?;
        matches.append(&mut batch_matches);
    }
    Ok(matches)
}

fn matches_on_disk(record: &Record, name: &str) -> bool {
    record.basename() == name && is_regular_file(Path::new(&record.path))
}

/// Stat failures (deleted file, dangling symlink, permission error) fold
/// into "no match"; they are never surfaced.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

fn match_parallelism(record_count: usize) -> usize {
    let available_parallelism = std::thread::available_parallelism()
        .map(|value| value.get())
        .unwrap_or(MAX_MATCH_PARALLELISM);
    let env_raw = std::env::var(MATCH_PARALLELISM_ENV).ok();
    let cap = resolve_match_parallelism_cap(env_raw.as_deref(), available_parallelism);
    record_count.clamp(1, cap)
}

fn resolve_match_parallelism_cap(env_raw: Option<&str>, available_parallelism: usize) -> usize {
    let default_cap = available_parallelism.clamp(1, MAX_MATCH_PARALLELISM);
    let Some(raw) = env_raw else {
        return default_cap;
    };
    let Ok(parsed) = raw.trim().parse::<usize>() else {
        return default_cap;
    };
    if parsed == 0 {
        return default_cap;
    }
    parsed.min(MAX_MATCH_PARALLELISM)
}
