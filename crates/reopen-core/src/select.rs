use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::error::{ReopenError, Result};
use crate::frecency::frecency;
use crate::record::Record;


/// Interactive selection seam. Implementations present `paths` to a human
/// and return the chosen index, or `None` when the pick is cancelled.
pub trait Chooser {
    fn choose(&mut self, paths: &[String]) -> Result<Option<usize>>;
}

fn weight_ordering(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Highest frecency weight at `now` wins. Equal weights keep whichever
/// record the scan reaches last; no secondary key is defined, so ties are
/// deterministic for a given match set but not across runs.
#[must_use]
pub fn best_match(matches: &[Record], now: DateTime<Utc>) -> Option<&Record> {
    matches
        .iter()
        .max_by(|a, b| weight_ordering(frecency(a, now), frecency(b, now)))
}

/// Sorts a match set by descending frecency weight at `now`.
#[must_use]
pub fn rank(mut matches: Vec<Record>, now: DateTime<Utc>) -> Vec<Record> {
    matches.sort_by(|a, b| weight_ordering(frecency(b, now), frecency(a, now)));
    matches
}

/// Hands the matched paths to `chooser` and returns the record it picked,
/// or `None` when the human cancelled.
pub fn pick_interactive<'a>(
    matches: &'a [Record],
    chooser: &mut dyn Chooser,
) -> Result<Option<&'a Record>> {
    let paths: Vec<String> = matches.iter().map(|record| record.path.clone()).collect();
    let Some(index) = chooser.choose(&paths)? else {
        return Ok(None);
    };
    matches.get(index).map(Some).ok_or_else(|| {
        ReopenError::Internal(format!(
            "chooser returned out-of-range index {index} for {} candidates",
            matches.len()
        ))
    })
}
