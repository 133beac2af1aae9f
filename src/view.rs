use crate::achievements::{AchievementState, Catalog};
use crate::dates::normalize_dates;
use crate::errors::EngineError;
use crate::streak::{compute_streaks, StreakResult};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakAndAchievementsViewModel {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_logs: u32,
    pub achievements: Vec<AchievementState>,
}

impl StreakAndAchievementsViewModel {
    /// Zero streak, zero logs, every achievement locked.
    pub fn empty(catalog: &Catalog) -> Self {
        Self::from_result(StreakResult::default(), catalog)
    }

    pub fn from_result(result: StreakResult, catalog: &Catalog) -> Self {
        Self {
            current_streak: result.current_streak,
            longest_streak: result.longest_streak,
            total_logs: result.total_logs,
            achievements: catalog.evaluate(&result),
        }
    }
}

pub fn build_view_model_at<I, S>(
    today: NaiveDate,
    raw_dates: I,
    catalog: &Catalog,
) -> Result<StreakAndAchievementsViewModel, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dates = normalize_dates(raw_dates)?;
    let result = compute_streaks(&dates, today);
    Ok(StreakAndAchievementsViewModel::from_result(result, catalog))
}
