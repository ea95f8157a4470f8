use chrono::{DateTime, Duration, Utc};

use crate::record::Record;


/// Frequency-plus-recency ranking weight for one record at a reference time.
///
/// Pure four-bucket recency multiplier over the stored score. Buckets are
/// closed on the lower bound: an age of exactly one hour takes the 24-hour
/// multiplier, not the one-hour one. Negative ages (a `last_access` in the
/// future) fall into the freshest bucket.
#[must_use]
pub fn frecency(record: &Record, now: DateTime<Utc>) -> f64 {
    let age = now.signed_duration_since(record.last_access);

    if age < Duration::hours(1) {
        record.score * 4.0
    } else if age < Duration::hours(24) {
        record.score * 2.0
    } else if age < Duration::days(7) {
        record.score / 2.0
    } else {
        record.score / 4.0
    }
}
