use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_logs: u32,
}

/// Computes streaks over dates already normalized by
/// [`normalize_dates`](crate::dates::normalize_dates): distinct, most recent first.
pub fn compute_streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakResult {
    StreakResult {
        current_streak: current_streak(dates, today),
        longest_streak: longest_streak(dates),
        total_logs: u32::try_from(dates.len()).unwrap_or(u32::MAX),
    }
}

/// Length of the consecutive-day run ending today or yesterday.
///
/// A most recent log older than yesterday breaks the streak entirely, no
/// matter how long the run before it was.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(latest) = dates.first() else {
        return 0;
    };

    if (today - *latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() != 1 {
            break;
        }
        streak += 1;
    }
    streak
}

/// Length of the longest maximal run of consecutive days anywhere in history.
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}
