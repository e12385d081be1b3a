use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily follow-up outcome, one entry per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpStatus {
    Relapse,
    SlipUp,
    Success,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpEntry {
    pub status: FollowUpStatus,
    /// The calendar day the entry describes, matching its day-key.
    pub timestamp: NaiveDate,
}

/// Day-key -> completed flag for one habit.
pub type CompletionLog = BTreeMap<String, bool>;

/// Day-key -> follow-up entry.
pub type FollowUpLog = BTreeMap<String, FollowUpEntry>;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Habit {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub logs: CompletionLog,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub habits: BTreeMap<String, Habit>,
    #[serde(default)]
    pub follow_ups: FollowUpLog,
    /// Day zero of the recovery counter; unset until the user starts it.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// Derived streak counts; recomputed on every read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct StreakResult {
    pub current_streak: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyProgress {
    pub completed_days: u8,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct StatusCounts {
    pub relapse: u32,
    pub slip_up: u32,
    pub success: u32,
    pub absent: u32,
}

/// One slot of the month grid; `date` is `None` for the leading blank
/// cells that pad the first week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    pub date: Option<NaiveDate>,
    pub day_key: String,
    pub status: Option<FollowUpStatus>,
    pub is_today: bool,
}

impl CalendarCell {
    pub fn blank() -> Self {
        Self {
            date: None,
            day_key: String::new(),
            status: None,
            is_today: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitLogRequest {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct LogStatusRequest {
    pub status: FollowUpStatus,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub start_date: Option<NaiveDate>,
    pub days_clean: i64,
}

#[derive(Debug, Serialize)]
pub struct HabitStatsResponse {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub weekly_completions: u8,
    pub weekly_ratio: f64,
    pub month_completions: u32,
    pub total_completions: u32,
}

#[derive(Debug, Serialize)]
pub struct FollowUpSummaryResponse {
    pub since_start: StatusCounts,
    pub total: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

#[derive(Debug, Serialize)]
pub struct LogStatusResponse {
    pub day_key: String,
    pub status: FollowUpStatus,
    pub start_date: Option<NaiveDate>,
}
