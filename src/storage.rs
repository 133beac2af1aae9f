use crate::dates::date_key;
use crate::errors::AppError;
use crate::models::{mood_key, AppData, MoodEntry};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, warn};

/// Read side of the mood store consumed by the streak engine.
pub trait LogDateSource {
    fn log_dates_for_user(&self, user_id: &str) -> Vec<String>;
}

impl LogDateSource for AppData {
    fn log_dates_for_user(&self, user_id: &str) -> Vec<String> {
        self.entries_for_user(user_id).map(|entry| entry.date.clone()).collect()
    }
}

impl AppData {
    pub fn entries_for_user<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a MoodEntry> + 'a {
        self.moods.values().filter(move |entry| entry.user_id == user_id)
    }

    pub fn mood_on(&self, user_id: &str, date: NaiveDate) -> Option<&MoodEntry> {
        self.moods.get(&mood_key(user_id, &date_key(date)))
    }

    /// Writes the user's mood for `date`, replacing any earlier entry for that day.
    ///
    /// Returns the new entry and the one it replaced, if any.
    pub fn upsert_mood(
        &mut self,
        user_id: &str,
        mood: &str,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
    ) -> (MoodEntry, Option<MoodEntry>) {
        let date = date_key(date);
        let entry = MoodEntry {
            user_id: user_id.to_string(),
            mood: mood.to_string(),
            date: date.clone(),
            timestamp,
        };
        let previous = self.moods.insert(mood_key(user_id, &date), entry.clone());
        if let Some(previous) = &previous {
            debug!(user_id, date = %date, previous = %previous.mood, "replaced mood entry");
        }
        (entry, previous)
    }

    /// Undoes an [`upsert_mood`](Self::upsert_mood) whose write to disk failed.
    pub fn revert_mood(&mut self, entry: &MoodEntry, previous: Option<MoodEntry>) {
        let key = mood_key(&entry.user_id, &entry.date);
        match previous {
            Some(previous) => {
                self.moods.insert(key, previous);
            }
            None => {
                self.moods.remove(&key);
            }
        }
    }
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                set_aside(path).await;
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("no data file at {}, starting empty", path.display());
            AppData::default()
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

/// Moves an unreadable data file out of the way so the next write cannot clobber it.
async fn set_aside(path: &Path) {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S");
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".corrupt-{stamp}"));
    let target = PathBuf::from(name);
    match fs::rename(path, &target).await {
        Ok(()) => warn!("moved unreadable data file to {}", target.display()),
        Err(err) => error!("failed to move unreadable data file aside: {err}"),
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
