use chrono::NaiveDate;

/// Canonical key for one local calendar day: `YYYY-MM-DD`, zero-padded.
/// Two dates produce the same key iff they are the same calendar day.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inverse of [`day_key`]. Returns `None` for keys that do not name a valid
/// calendar date, so corrupted log keys can be skipped rather than miscounted.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
