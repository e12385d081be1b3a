use crate::daykey::parse_day_key;
use crate::models::{CompletionLog, FollowUpLog, FollowUpStatus, StatusCounts, StreakResult};
use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

/// Current and best streak over a set of completed day-keys.
///
/// The current streak is "live" only if the most recent completed day is
/// `today` or yesterday; otherwise the streak is already broken and counts
/// as 0. The best streak is the longest run of consecutive calendar days
/// anywhere in history, regardless of liveness. Malformed keys are skipped.
pub fn calculate_streaks<'a, I>(completed_keys: I, today: NaiveDate) -> StreakResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut days: Vec<NaiveDate> = completed_keys
        .into_iter()
        .filter_map(|key| {
            let parsed = parse_day_key(key);
            if parsed.is_none() {
                warn!("skipping malformed day key in log: {key:?}");
            }
            parsed
        })
        .collect();
    days.sort_unstable();
    days.dedup();

    let Some(&newest) = days.last() else {
        return StreakResult::default();
    };

    let mut best_streak = 1u32;
    let mut run = 1u32;
    for pair in days.windows(2) {
        if pair[1] - pair[0] == Duration::days(1) {
            run += 1;
        } else {
            run = 1;
        }
        best_streak = best_streak.max(run);
    }

    let yesterday = today - Duration::days(1);
    let mut current_streak = 0u32;
    if newest == today || newest == yesterday {
        current_streak = 1;
        let mut expected = newest - Duration::days(1);
        for &day in days.iter().rev().skip(1) {
            if day != expected {
                break;
            }
            current_streak += 1;
            expected = expected - Duration::days(1);
        }
    }

    StreakResult {
        current_streak,
        best_streak,
    }
}

/// Day-keys of a habit log that are marked completed.
pub fn completed_keys(log: &CompletionLog) -> impl Iterator<Item = &str> {
    log.iter()
        .filter(|(_, done)| **done)
        .map(|(key, _)| key.as_str())
}

/// Completed entries falling in the same month as `reference`.
pub fn month_completions(log: &CompletionLog, reference: NaiveDate) -> u32 {
    completed_keys(log)
        .filter_map(parse_day_key)
        .filter(|day| day.year() == reference.year() && day.month() == reference.month())
        .count() as u32
}

pub fn total_completions(log: &CompletionLog) -> u32 {
    completed_keys(log).count() as u32
}

/// Per-status totals of a follow-up log. When `since` is set, entries before
/// that day are excluded (counts for the current program run only).
pub fn status_counts(log: &FollowUpLog, since: Option<NaiveDate>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for entry in log.values() {
        if let Some(start) = since {
            if entry.timestamp < start {
                continue;
            }
        }
        match entry.status {
            FollowUpStatus::Relapse => counts.relapse += 1,
            FollowUpStatus::SlipUp => counts.slip_up += 1,
            FollowUpStatus::Success => counts.success += 1,
            FollowUpStatus::Absent => counts.absent += 1,
        }
    }
    counts
}
