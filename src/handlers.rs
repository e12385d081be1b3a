use crate::backfill;
use crate::calendar::month_grid;
use crate::daykey::day_key;
use crate::errors::AppError;
use crate::models::{
    CalendarQuery, CalendarResponse, CompletionLog, CounterResponse, CreateHabitRequest,
    FollowUpEntry, FollowUpStatus, FollowUpSummaryResponse, Habit, HabitLogRequest,
    HabitStatsResponse, LogStatusRequest, LogStatusResponse,
};
use crate::state::AppState;
use crate::stats::{
    calculate_streaks, completed_keys, month_completions, status_counts, total_completions,
};
use crate::storage::persist_data;
use crate::ui::render_index;
use crate::weekly::weekly_progress;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use chrono::{Local, NaiveDate, Utc};
use std::sync::atomic::Ordering;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let today_status = data.follow_ups.get(&day_key(today)).map(|entry| entry.status);
    Html(render_index(
        &day_key(today),
        counter_days(data.start_date, today),
        today_status,
    ))
}

pub async fn get_counter(State(state): State<AppState>) -> Result<Json<CounterResponse>, AppError> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    Ok(Json(CounterResponse {
        start_date: data.start_date,
        days_clean: counter_days(data.start_date, today),
    }))
}

pub async fn reset_counter(
    State(state): State<AppState>,
) -> Result<Json<CounterResponse>, AppError> {
    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;
    data.start_date = Some(today);
    persist_data(&state.data_path, &data).await?;
    info!("recovery counter reset to {}", day_key(today));

    Ok(Json(CounterResponse {
        start_date: data.start_date,
        days_clean: 0,
    }))
}

pub async fn list_habits(
    State(state): State<AppState>,
) -> Result<Json<Vec<HabitStatsResponse>>, AppError> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let habits = data
        .habits
        .iter()
        .map(|(id, habit)| habit_stats(id, habit, today))
        .collect();
    Ok(Json(habits))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<HabitStatsResponse>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }

    let today = Local::now().date_naive();
    let id = Utc::now().timestamp_millis().to_string();
    let habit = Habit {
        name: name.to_string(),
        icon: payload.icon.trim().to_string(),
        logs: CompletionLog::new(),
    };

    let mut data = state.data.lock().await;
    let response = habit_stats(&id, &habit, today);
    data.habits.insert(id, habit);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(response))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.habits.remove(&id).is_none() {
        return Err(AppError::not_found("no such habit"));
    }
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn log_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<HabitLogRequest>,
) -> Result<Json<HabitStatsResponse>, AppError> {
    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("no such habit"))?;
    habit.logs.insert(day_key(today), payload.completed);
    let response = habit_stats(&id, habit, today);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(response))
}

pub async fn followup_summary(
    State(state): State<AppState>,
) -> Result<Json<FollowUpSummaryResponse>, AppError> {
    ensure_backfill(&state).await?;
    let data = state.data.lock().await;
    Ok(Json(FollowUpSummaryResponse {
        since_start: status_counts(&data.follow_ups, data.start_date),
        total: status_counts(&data.follow_ups, None),
    }))
}

pub async fn followup_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    if !(1..=12).contains(&query.month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }

    ensure_backfill(&state).await?;
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let cells = month_grid(
        query.year,
        query.month,
        &data.follow_ups,
        data.start_date,
        today,
    );

    Ok(Json(CalendarResponse {
        year: query.year,
        month: query.month,
        cells,
    }))
}

pub async fn log_followup(
    State(state): State<AppState>,
    Json(payload): Json<LogStatusRequest>,
) -> Result<Json<LogStatusResponse>, AppError> {
    let today = Local::now().date_naive();
    let key = day_key(today);

    let mut data = state.data.lock().await;
    data.follow_ups.insert(
        key.clone(),
        FollowUpEntry {
            status: payload.status,
            timestamp: today,
        },
    );
    if payload.status == FollowUpStatus::Relapse {
        // A confirmed relapse restarts the recovery counter at today.
        data.start_date = Some(today);
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(LogStatusResponse {
        day_key: key,
        status: payload.status,
        start_date: data.start_date,
    }))
}

/// Run the absent-day backfill at most once per server session. The latch is
/// set before the write pass so overlapping requests cannot trigger a second
/// pass; re-running would be safe but wasteful.
async fn ensure_backfill(state: &AppState) -> Result<(), AppError> {
    if state.backfill_done.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;
    let plan = backfill::missing_days(&data.follow_ups, data.start_date, today);
    if plan.is_empty() {
        return Ok(());
    }

    let follow_ups = &mut data.follow_ups;
    let outcome = backfill::apply(&plan, |key, entry| {
        follow_ups.insert(key.to_string(), entry.clone());
        Ok(())
    });
    info!("backfilled {} absent day(s)", outcome.written.len());
    persist_data(&state.data_path, &data).await?;
    Ok(())
}

fn counter_days(start_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    start_date
        .map(|start| (today - start).num_days().max(0))
        .unwrap_or(0)
}

fn habit_stats(id: &str, habit: &Habit, today: NaiveDate) -> HabitStatsResponse {
    let streaks = calculate_streaks(completed_keys(&habit.logs), today);
    let weekly = weekly_progress(&habit.logs, today);

    HabitStatsResponse {
        id: id.to_string(),
        name: habit.name.clone(),
        icon: habit.icon.clone(),
        current_streak: streaks.current_streak,
        best_streak: streaks.best_streak,
        weekly_completions: weekly.completed_days,
        weekly_ratio: weekly.ratio,
        month_completions: month_completions(&habit.logs, today),
        total_completions: total_completions(&habit.logs),
    }
}
