use crate::daykey::day_key;
use crate::models::{CompletionLog, WeeklyProgress};
use chrono::{Datelike, Duration, NaiveDate};

/// The 7 days of the Sunday-start week containing `reference`, in order.
/// Always a full week, including days still in the future.
pub fn week_days(reference: NaiveDate) -> [NaiveDate; 7] {
    let start = reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);
    std::array::from_fn(|offset| start + Duration::days(offset as i64))
}

/// How many of the current week's 7 days are marked completed.
pub fn weekly_progress(log: &CompletionLog, reference: NaiveDate) -> WeeklyProgress {
    let completed_days = week_days(reference)
        .iter()
        .filter(|day| log.get(&day_key(**day)).copied().unwrap_or(false))
        .count() as u8;

    WeeklyProgress {
        completed_days,
        ratio: f64::from(completed_days) / 7.0,
    }
}
