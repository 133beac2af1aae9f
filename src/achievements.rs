//! Achievement catalog and unlock rules.
//!
//! A [`Catalog`] is validated once when it is loaded. Evaluating it against a
//! [`StreakResult`] cannot fail and yields one [`AchievementState`] per
//! definition, in declaration order.

use crate::errors::CatalogError;
use crate::streak::StreakResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which metric an achievement threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Streak,
    TotalLogs,
}

impl MetricKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "streak" => Some(Self::Streak),
            "totalLogs" => Some(Self::TotalLogs),
            _ => None,
        }
    }

    fn value(&self, result: &StreakResult) -> u32 {
        match self {
            Self::Streak => result.current_streak,
            Self::TotalLogs => result.total_logs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub threshold_kind: MetricKind,
    pub threshold_value: u32,
}

/// Catalog entry as it appears in a catalog file, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAchievementDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub threshold_kind: String,
    pub threshold_value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementState {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    pub progress: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    definitions: Vec<AchievementDefinition>,
}

type DefaultEntry = (&'static str, &'static str, &'static str, &'static str, MetricKind, u32);

const DEFAULT_CATALOG: [DefaultEntry; 4] = [
    (
        "first_step",
        "First Step",
        "Log your first mood",
        "🌱",
        MetricKind::TotalLogs,
        1,
    ),
    (
        "three_day",
        "Consistency",
        "Log your mood for 3 days in a row",
        "🔥",
        MetricKind::Streak,
        3,
    ),
    (
        "week_warrior",
        "Week Warrior",
        "7 day streak! You're on fire!",
        "🏆",
        MetricKind::Streak,
        7,
    ),
    (
        "reflection_master",
        "Reflection Master",
        "Log 30 total moods",
        "🧘",
        MetricKind::TotalLogs,
        30,
    ),
];

impl Default for Catalog {
    fn default() -> Self {
        let definitions = DEFAULT_CATALOG
            .iter()
            .map(
                |&(id, title, description, icon, threshold_kind, threshold_value)| {
                    AchievementDefinition {
                        id: id.to_string(),
                        title: title.to_string(),
                        description: description.to_string(),
                        icon: icon.to_string(),
                        threshold_kind,
                        threshold_value,
                    }
                },
            )
            .collect();
        Self { definitions }
    }
}

impl Catalog {
    pub fn from_raw(raw: Vec<RawAchievementDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut definitions = Vec::with_capacity(raw.len());

        for entry in raw {
            let id = entry.id.trim().to_string();
            if id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId(id));
            }

            let Some(threshold_kind) = MetricKind::parse(&entry.threshold_kind) else {
                return Err(CatalogError::UnknownKind {
                    id,
                    kind: entry.threshold_kind,
                });
            };
            if entry.threshold_value <= 0 {
                return Err(CatalogError::NonPositiveThreshold {
                    id,
                    value: entry.threshold_value,
                });
            }
            let threshold_value = u32::try_from(entry.threshold_value).map_err(|_| {
                CatalogError::ThresholdOutOfRange {
                    id: id.clone(),
                    value: entry.threshold_value,
                }
            })?;

            definitions.push(AchievementDefinition {
                id,
                title: entry.title,
                description: entry.description,
                icon: entry.icon,
                threshold_kind,
                threshold_value,
            });
        }

        Ok(Self { definitions })
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let raw: Vec<RawAchievementDefinition> =
            serde_json::from_slice(bytes).map_err(|err| CatalogError::Malformed(err.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    pub fn evaluate(&self, result: &StreakResult) -> Vec<AchievementState> {
        self.definitions
            .iter()
            .map(|definition| {
                let metric = definition.threshold_kind.value(result);
                AchievementState {
                    id: definition.id.clone(),
                    title: definition.title.clone(),
                    description: definition.description.clone(),
                    icon: definition.icon.clone(),
                    unlocked: metric >= definition.threshold_value,
                    progress: metric.min(definition.threshold_value),
                    total: definition.threshold_value,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, kind: &str, value: i64) -> RawAchievementDefinition {
        RawAchievementDefinition {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            icon: String::new(),
            threshold_kind: kind.to_string(),
            threshold_value: value,
        }
    }

    fn result(current_streak: u32, total_logs: u32) -> StreakResult {
        StreakResult {
            current_streak,
            longest_streak: current_streak,
            total_logs,
        }
    }

    fn state<'a>(states: &'a [AchievementState], id: &str) -> &'a AchievementState {
        states.iter().find(|s| s.id == id).expect("missing achievement")
    }

    #[test]
    fn default_catalog_order_and_thresholds() {
        let catalog = Catalog::default();
        let ids: Vec<_> = catalog.definitions().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["first_step", "three_day", "week_warrior", "reflection_master"]);
        let week = &catalog.definitions()[2];
        assert_eq!(week.threshold_kind, MetricKind::Streak);
        assert_eq!(week.threshold_value, 7);
    }

    #[test]
    fn progress_caps_at_total() {
        let states = Catalog::default().evaluate(&result(12, 100));
        for s in &states {
            assert!(s.unlocked);
            assert_eq!(s.progress, s.total);
        }
    }

    #[test]
    fn streak_and_total_metrics_are_independent() {
        let states = Catalog::default().evaluate(&result(0, 30));
        assert!(state(&states, "first_step").unlocked);
        assert!(state(&states, "reflection_master").unlocked);
        let three = state(&states, "three_day");
        assert!(!three.unlocked);
        assert_eq!((three.progress, three.total), (0, 3));
    }

    #[test]
    fn unlocks_exactly_at_threshold() {
        let states = Catalog::default().evaluate(&result(3, 3));
        assert!(state(&states, "three_day").unlocked);
        let week = state(&states, "week_warrior");
        assert!(!week.unlocked);
        assert_eq!(week.progress, 3);
    }

    #[test]
    fn loads_valid_raw_catalog_in_order() {
        let catalog =
            Catalog::from_raw(vec![raw("b", "totalLogs", 2), raw("a", "streak", 5)]).unwrap();
        let ids: Vec<_> = catalog.definitions().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = Catalog::from_raw(vec![raw("x", "journalEntries", 2)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownKind {
                id: "x".into(),
                kind: "journalEntries".into()
            }
        );
    }

    #[test]
    fn rejects_non_positive_threshold() {
        for value in [0, -4] {
            let err = Catalog::from_raw(vec![raw("x", "streak", value)]).unwrap_err();
            assert_eq!(err, CatalogError::NonPositiveThreshold { id: "x".into(), value });
        }
    }

    #[test]
    fn rejects_oversized_threshold() {
        let err = Catalog::from_raw(vec![raw("x", "streak", i64::from(u32::MAX) + 1)]).unwrap_err();
        assert!(matches!(err, CatalogError::ThresholdOutOfRange { .. }));
    }

    #[test]
    fn rejects_duplicate_and_empty_ids() {
        let err =
            Catalog::from_raw(vec![raw("a", "streak", 1), raw("a", "totalLogs", 2)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".into()));
        let err = Catalog::from_raw(vec![raw("  ", "streak", 1)]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyId);
    }

    #[test]
    fn loads_catalog_from_json() {
        let json = r#"[
            {
                "id": "first_step",
                "title": "First Step",
                "icon": "🌱",
                "thresholdKind": "totalLogs",
                "thresholdValue": 1
            },
            {
                "id": "fortnight",
                "title": "Fortnight",
                "description": "14 days",
                "thresholdKind": "streak",
                "thresholdValue": 14
            }
        ]"#;
        let catalog = Catalog::from_json(json.as_bytes()).unwrap();
        assert_eq!(catalog.definitions().len(), 2);
        assert_eq!(catalog.definitions()[1].threshold_kind, MetricKind::Streak);
        assert_eq!(catalog.definitions()[1].description, "14 days");
        assert_eq!(catalog.definitions()[0].icon, "🌱");
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        let err = Catalog::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn metric_kind_names_match_serialized_form() {
        for kind in [MetricKind::Streak, MetricKind::TotalLogs] {
            let name = serde_json::to_value(kind).unwrap();
            assert_eq!(MetricKind::parse(name.as_str().unwrap()), Some(kind));
        }
        assert_eq!(MetricKind::parse("Streak"), None);
        assert_eq!(MetricKind::parse("currentStreak"), None);
    }
}
