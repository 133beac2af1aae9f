use crate::achievements::AchievementDefinition;
use crate::dates::parse_log_date;
use crate::errors::AppError;
use crate::models::{LogMoodRequest, MoodEntry, MoodStatsResponse, TodayQuery};
use crate::moods::{self, Mood};
use crate::state::AppState;
use crate::stats::build_stats_at;
use crate::storage::{persist_data, LogDateSource};
use crate::view::{build_view_model_at, StreakAndAchievementsViewModel};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, error, info};

pub async fn list_moods() -> Json<&'static [Mood]> {
    Json(&moods::MOODS[..])
}

pub async fn list_achievements(State(state): State<AppState>) -> Json<Vec<AchievementDefinition>> {
    Json(state.catalog.definitions().to_vec())
}

pub async fn get_today_mood(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<Option<MoodEntry>>, AppError> {
    let user_id = validate_user_id(&user_id)?;
    let today = resolve_today(&query)?;
    let data = state.data.lock().await;
    Ok(Json(data.mood_on(user_id, today).cloned()))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<LogMoodRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    let user_id = validate_user_id(&user_id)?;
    let mood = payload.mood.trim();
    if moods::lookup(mood).is_none() {
        return Err(AppError::bad_request(format!("unknown mood '{mood}'")));
    }
    let date = match payload.date.as_deref() {
        Some(raw) => {
            parse_log_date(raw).map_err(|err| AppError::bad_request(err.to_string()))?
        }
        None => local_today(),
    };

    let entry = apply_mood(&state, user_id, mood, date).await?;
    info!(user_id, date = %entry.date, mood = %entry.mood, "logged mood");
    Ok(Json(entry))
}

/// Upserts and persists; the in-memory store only keeps the change once it is on disk.
async fn apply_mood(
    state: &AppState,
    user_id: &str,
    mood: &str,
    date: NaiveDate,
) -> Result<MoodEntry, AppError> {
    let mut data = state.data.lock().await;
    let (entry, previous) = data.upsert_mood(user_id, mood, date, Utc::now());

    if let Err(err) = persist_data(&state.data_path, &data).await {
        error!(user_id, date = %entry.date, "failed to persist mood: {}", err.message);
        data.revert_mood(&entry, previous);
        return Err(err);
    }

    Ok(entry)
}

pub async fn get_streaks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<StreakAndAchievementsViewModel>, AppError> {
    let user_id = validate_user_id(&user_id)?;
    let today = resolve_today(&query)?;
    let dates = state.data.lock().await.log_dates_for_user(user_id);

    if dates.is_empty() {
        debug!(user_id, "no mood logs yet");
        return Ok(Json(StreakAndAchievementsViewModel::empty(&state.catalog)));
    }

    let view = build_view_model_at(today, &dates, &state.catalog).map_err(|err| {
        error!(user_id, "stored log dates are invalid: {err}");
        AppError::internal(err)
    })?;
    Ok(Json(view))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<MoodStatsResponse>, AppError> {
    let user_id = validate_user_id(&user_id)?;
    let today = resolve_today(&query)?;
    let data = state.data.lock().await;
    Ok(Json(build_stats_at(today, data.entries_for_user(user_id))))
}

fn validate_user_id(user_id: &str) -> Result<&str, AppError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::bad_request("user id must not be empty"));
    }
    Ok(user_id)
}

fn resolve_today(query: &TodayQuery) -> Result<NaiveDate, AppError> {
    match query.today.as_deref() {
        Some(raw) => parse_log_date(raw).map_err(|err| AppError::bad_request(err.to_string())),
        None => Ok(local_today()),
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
