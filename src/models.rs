use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub user_id: String,
    pub mood: String,
    pub date: String,
    pub timestamp: DateTime<Utc>,
}

/// Mood entries keyed by [`mood_key`], at most one per user per day.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub moods: BTreeMap<String, MoodEntry>,
}

pub fn mood_key(user_id: &str, date: &str) -> String {
    format!("{user_id}_{date}")
}

#[derive(Debug, Deserialize)]
pub struct LogMoodRequest {
    pub mood: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TodayQuery {
    #[serde(default)]
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodPoint {
    pub date: String,
    pub mood: Option<String>,
    pub score: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodShare {
    pub mood: String,
    pub label: String,
    pub count: u64,
    pub percentage: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStatsResponse {
    pub last_7_days: Vec<MoodPoint>,
    pub distribution: Vec<MoodShare>,
    pub average_score: Option<f64>,
    pub weekly_moods: u64,
}
