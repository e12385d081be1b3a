use crate::daykey::day_key;
use crate::errors::AppError;
use crate::models::{FollowUpEntry, FollowUpLog, FollowUpStatus};
use chrono::NaiveDate;
use tracing::warn;

/// Result of one reconciliation pass: which day-keys were written and which
/// writes failed. Failures never abort the remaining days.
#[derive(Debug, Default)]
pub struct BackfillOutcome {
    pub written: Vec<String>,
    pub failed: Vec<BackfillFailure>,
}

#[derive(Debug)]
pub struct BackfillFailure {
    pub day_key: String,
    pub error: String,
}

/// Days in `[start_date, today)` that have no follow-up entry yet, in order.
/// No start date, or a start date on/after today, yields nothing to do.
pub fn missing_days(
    log: &FollowUpLog,
    start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    let Some(start) = start_date else {
        return Vec::new();
    };
    if start >= today {
        return Vec::new();
    }

    start
        .iter_days()
        .take_while(|day| *day < today)
        .filter(|day| !log.contains_key(&day_key(*day)))
        .collect()
}

/// Stage an `absent` entry for every planned day through `write_entry`.
/// Each write is attempted independently; failed days are reported in the
/// outcome and logged, and there is no rollback of the days that succeeded.
pub fn apply<W>(plan: &[NaiveDate], mut write_entry: W) -> BackfillOutcome
where
    W: FnMut(&str, &FollowUpEntry) -> Result<(), AppError>,
{
    let mut outcome = BackfillOutcome::default();
    for &day in plan {
        let key = day_key(day);
        let entry = FollowUpEntry {
            status: FollowUpStatus::Absent,
            timestamp: day,
        };
        match write_entry(&key, &entry) {
            Ok(()) => outcome.written.push(key),
            Err(err) => {
                warn!("backfill write failed for {key}: {}", err.message);
                outcome.failed.push(BackfillFailure {
                    day_key: key,
                    error: err.message,
                });
            }
        }
    }
    outcome
}
