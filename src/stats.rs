use crate::dates::date_key;
use crate::models::{MoodEntry, MoodPoint, MoodShare, MoodStatsResponse};
use crate::moods;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// Mood analytics for one user's entries as of `today`.
pub fn build_stats_at<'a, I>(today: NaiveDate, entries: I) -> MoodStatsResponse
where
    I: IntoIterator<Item = &'a MoodEntry>,
{
    let by_date: HashMap<&str, &MoodEntry> = entries
        .into_iter()
        .map(|entry| (entry.date.as_str(), entry))
        .collect();

    let mut last_7_days = Vec::with_capacity(7);
    let mut weekly_moods = 0u64;
    for offset in (0..7).rev() {
        let date = date_key(today - Duration::days(offset));
        let entry = by_date.get(date.as_str());
        if entry.is_some() {
            weekly_moods += 1;
        }
        last_7_days.push(MoodPoint {
            score: entry.map(|e| moods::score(&e.mood)),
            mood: entry.map(|e| e.mood.clone()),
            date,
        });
    }

    let total = by_date.len() as u64;
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    let mut score_sum = 0u64;
    for entry in by_date.values() {
        *counts.entry(entry.mood.as_str()).or_default() += 1;
        score_sum += u64::from(moods::score(&entry.mood));
    }

    let mut distribution: Vec<MoodShare> = counts
        .into_iter()
        .map(|(mood, count)| MoodShare {
            mood: mood.to_string(),
            label: moods::label(mood).to_string(),
            count,
            percentage: ((count as f64 / total as f64) * 100.0).round() as u8,
        })
        .collect();
    // Stable sort keeps emoji order for equal counts.
    distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let average_score = if total == 0 {
        None
    } else {
        Some(score_sum as f64 / total as f64)
    };

    MoodStatsResponse {
        last_7_days,
        distribution,
        average_score,
        weekly_moods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(date: &str, mood: &str) -> MoodEntry {
        MoodEntry {
            user_id: "alice".into(),
            mood: mood.into(),
            date: date.into(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn last_7_days_includes_each_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let entries = vec![entry("2026-01-03", "😊"), entry("2025-12-01", "😢")];

        let stats = build_stats_at(today, &entries);
        assert_eq!(stats.last_7_days.len(), 7);
        assert_eq!(stats.last_7_days[0].date, "2025-12-30");
        assert_eq!(stats.last_7_days[6].date, "2026-01-05");
        let point = stats
            .last_7_days
            .iter()
            .find(|day| day.date == "2026-01-03")
            .expect("missing day");
        assert_eq!(point.mood.as_deref(), Some("😊"));
        assert_eq!(point.score, Some(8));
        assert_eq!(stats.weekly_moods, 1);
        assert!(stats.last_7_days[6].mood.is_none());
    }

    #[test]
    fn distribution_sorted_by_count() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let entries = vec![
            entry("2026-01-01", "😢"),
            entry("2026-01-02", "😊"),
            entry("2026-01-03", "😊"),
            entry("2026-01-04", "😊"),
        ];

        let stats = build_stats_at(today, &entries);
        assert_eq!(stats.distribution.len(), 2);
        assert_eq!(stats.distribution[0].mood, "😊");
        assert_eq!(stats.distribution[0].label, "Happy");
        assert_eq!(stats.distribution[0].percentage, 75);
        assert_eq!(stats.distribution[1].percentage, 25);
        assert_eq!(stats.average_score, Some((8.0 * 3.0 + 3.0) / 4.0));
    }

    #[test]
    fn empty_history() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let stats = build_stats_at(today, &Vec::<MoodEntry>::new());
        assert_eq!(stats.last_7_days.len(), 7);
        assert!(stats.distribution.is_empty());
        assert_eq!(stats.average_score, None);
        assert_eq!(stats.weekly_moods, 0);
    }
}
