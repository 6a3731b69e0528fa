//! Read-only activity catalog: activity definitions grouped by category,
//! curated themes, and the selectable weekend shapes.
//!
//! The catalog is supplied by the host (or taken from [`Catalog::builtin`])
//! and never mutated by the engine. Malformed entries are rejected when the
//! catalog is built, so scheduling code can trust every `Activity` it sees.

mod builtin;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::interval::{ClockTime, TimeSlot};

/// A day a weekend plan can span, in weekend-centric order.
///
/// The ordering runs Thursday through Tuesday so that multi-day weekend
/// shapes (`Thu-Sun`, `Fri-Mon`, `Sat-Tue`) iterate chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Monday,
    Tuesday,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indoor/outdoor split used for weather-aware decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Indoor,
    Outdoor,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indoor => f.write_str("Indoor"),
            Self::Outdoor => f.write_str("Outdoor"),
        }
    }
}

/// Energy level an activity demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

/// A schedulable leisure activity.
///
/// Catalog entries are shared and read-only; placing one on a day or in
/// the bucket clones it, so the copy carries its own `time` override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub category: Category,
    pub vibe: String,
    #[serde(default)]
    pub energy: EnergyLevel,
    pub time: ClockTime,
    #[serde(default)]
    pub description: String,
}

impl Activity {
    /// The `[time, time + duration)` window this activity occupies.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.time, self.duration_minutes)
    }

    /// Same activity at a different start time.
    pub fn at(&self, time: ClockTime) -> Activity {
        Activity {
            time,
            ..self.clone()
        }
    }

    /// Fresh id for ad-hoc activities created outside the catalog.
    pub fn generated_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// A named group of related catalog activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub key: String,
    pub name: String,
    pub activities: Vec<Activity>,
}

/// A curated, named list of activity ids used to bulk-populate a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub key: String,
    pub name: String,
    pub description: String,
    pub mood: String,
    pub activity_ids: Vec<String>,
}

/// One selectable weekend shape: an ordered, deduplicated day list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendOption {
    pub key: String,
    pub name: String,
    pub days: Vec<Day>,
}

/// The full static catalog handed to the engine at construction.
///
/// Deliberately not deserializable as a whole: hosts load the raw parts
/// and go through [`Catalog::new`] so validation cannot be skipped.
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
    themes: Vec<Theme>,
    weekend_options: Vec<WeekendOption>,
}

impl Catalog {
    /// Validate and assemble a catalog.
    ///
    /// Rejects empty or duplicate activity ids, zero durations, duplicate
    /// theme/option keys, and degenerate weekend options. Theme entries
    /// pointing at unknown activity ids are allowed; they are skipped at
    /// application time.
    pub fn new(
        groups: Vec<CategoryGroup>,
        themes: Vec<Theme>,
        weekend_options: Vec<WeekendOption>,
    ) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        for activity in groups.iter().flat_map(|g| &g.activities) {
            if activity.id.is_empty() {
                return Err(CatalogError::EmptyActivityId);
            }
            if activity.duration_minutes == 0 {
                return Err(CatalogError::ZeroDuration {
                    id: activity.id.clone(),
                });
            }
            if !seen_ids.insert(activity.id.clone()) {
                return Err(CatalogError::DuplicateActivityId(activity.id.clone()));
            }
        }

        if weekend_options.is_empty() {
            return Err(CatalogError::NoWeekendOptions);
        }
        let mut option_keys = HashSet::new();
        for option in &weekend_options {
            if option.days.is_empty() {
                return Err(CatalogError::EmptyWeekendOption {
                    key: option.key.clone(),
                });
            }
            let mut seen_days = HashSet::new();
            for day in &option.days {
                if !seen_days.insert(day) {
                    return Err(CatalogError::DuplicateWeekendDay {
                        key: option.key.clone(),
                        day: *day,
                    });
                }
            }
            if !option_keys.insert(option.key.clone()) {
                return Err(CatalogError::DuplicateWeekendOption(option.key.clone()));
            }
        }

        let mut theme_keys = HashSet::new();
        for theme in &themes {
            if !theme_keys.insert(theme.key.clone()) {
                return Err(CatalogError::DuplicateTheme(theme.key.clone()));
            }
        }

        Ok(Self {
            groups,
            themes,
            weekend_options,
        })
    }

    /// The built-in catalog shipped with the app.
    pub fn builtin() -> Self {
        builtin::catalog().expect("built-in catalog is valid")
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn weekend_options(&self) -> &[WeekendOption] {
        &self.weekend_options
    }

    /// All activities in stable enumeration order: group order, then the
    /// order entries appear within their group.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.groups.iter().flat_map(|g| g.activities.iter())
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities().find(|a| a.id == id)
    }

    pub fn theme(&self, key: &str) -> Result<&Theme, CatalogError> {
        self.themes
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| CatalogError::UnknownTheme {
                key: key.to_string(),
            })
    }

    pub fn weekend_option(&self, key: &str) -> Result<&WeekendOption, CatalogError> {
        self.weekend_options
            .iter()
            .find(|o| o.key == key)
            .ok_or_else(|| CatalogError::UnknownWeekendOption {
                key: key.to_string(),
            })
    }

    /// Resolve a theme's activity ids against the catalog.
    ///
    /// Returns the resolved activities in theme order plus the ids that
    /// matched nothing (skipped, not an error).
    pub fn resolve_theme(&self, theme: &Theme) -> (Vec<&Activity>, Vec<String>) {
        let mut resolved = Vec::new();
        let mut skipped = Vec::new();
        for id in &theme.activity_ids {
            match self.activity(id) {
                Some(activity) => resolved.push(activity),
                None => skipped.push(id.clone()),
            }
        }
        (resolved, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, duration: u32) -> Activity {
        Activity {
            id: id.to_string(),
            name: id.to_string(),
            duration_minutes: duration,
            category: Category::Indoor,
            vibe: "cozy".to_string(),
            energy: EnergyLevel::Low,
            time: "10:00".parse().unwrap(),
            description: String::new(),
        }
    }

    fn group(activities: Vec<Activity>) -> CategoryGroup {
        CategoryGroup {
            key: "test".to_string(),
            name: "Test".to_string(),
            activities,
        }
    }

    fn two_days() -> WeekendOption {
        WeekendOption {
            key: "two_days".to_string(),
            name: "Default".to_string(),
            days: vec![Day::Saturday, Day::Sunday],
        }
    }

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(catalog.activities().count() >= 20);
        assert_eq!(catalog.weekend_options().len(), 6);
        assert_eq!(catalog.themes().len(), 6);
        // Every theme id resolves in the shipped data set.
        for theme in catalog.themes() {
            let (_, skipped) = catalog.resolve_theme(theme);
            assert!(skipped.is_empty(), "theme {} has dangling ids", theme.key);
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(
            vec![group(vec![activity("a", 60), activity("a", 30)])],
            vec![],
            vec![two_days()],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateActivityId(_))));
    }

    #[test]
    fn rejects_zero_duration() {
        let result = Catalog::new(
            vec![group(vec![activity("a", 0)])],
            vec![],
            vec![two_days()],
        );
        assert!(matches!(result, Err(CatalogError::ZeroDuration { .. })));
    }

    #[test]
    fn rejects_degenerate_weekend_options() {
        let empty = WeekendOption {
            key: "none".to_string(),
            name: "None".to_string(),
            days: vec![],
        };
        assert!(matches!(
            Catalog::new(vec![], vec![], vec![empty]),
            Err(CatalogError::EmptyWeekendOption { .. })
        ));

        let doubled = WeekendOption {
            key: "dup".to_string(),
            name: "Dup".to_string(),
            days: vec![Day::Saturday, Day::Saturday],
        };
        assert!(matches!(
            Catalog::new(vec![], vec![], vec![doubled]),
            Err(CatalogError::DuplicateWeekendDay { .. })
        ));
    }

    #[test]
    fn unknown_theme_ids_are_skipped_on_resolution() {
        let catalog = Catalog::new(
            vec![group(vec![activity("real", 60)])],
            vec![Theme {
                key: "mixed".to_string(),
                name: "Mixed".to_string(),
                description: String::new(),
                mood: String::new(),
                activity_ids: vec!["real".to_string(), "ghost".to_string()],
            }],
            vec![two_days()],
        )
        .unwrap();

        let (resolved, skipped) = catalog.resolve_theme(catalog.theme("mixed").unwrap());
        assert_eq!(resolved.len(), 1);
        assert_eq!(skipped, vec!["ghost".to_string()]);
    }

    #[test]
    fn day_ordering_is_weekend_centric() {
        assert!(Day::Thursday < Day::Friday);
        assert!(Day::Sunday < Day::Monday);
        assert!(Day::Monday < Day::Tuesday);
    }
}
