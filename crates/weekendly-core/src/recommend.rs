//! Preference-based activity recommendations.
//!
//! The profile is derived on demand from whatever is currently placed --
//! nothing is persisted or learned across sessions. Scoring favors the
//! vibes, categories, and energy levels the user already picked, nudges
//! toward familiar durations, and boosts weather-appropriate categories.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Activity, Catalog, Category, Day, EnergyLevel};
use crate::plan::WeekendPlan;
use crate::weather::WeatherSource;

/// Frequency histograms plus average duration over the placed activities.
#[derive(Debug, Clone, Default)]
pub struct PreferenceProfile {
    vibes: HashMap<String, u32>,
    categories: HashMap<Category, u32>,
    energy: HashMap<EnergyLevel, u32>,
    avg_duration: f64,
}

/// Fallback average duration when nothing is placed yet, in minutes.
const DEFAULT_AVG_DURATION: f64 = 120.0;

impl PreferenceProfile {
    pub fn from_plan(plan: &WeekendPlan) -> Self {
        let mut profile = Self {
            avg_duration: DEFAULT_AVG_DURATION,
            ..Self::default()
        };
        let mut total_minutes = 0u64;
        let mut count = 0u64;
        for activity in plan.scheduled() {
            *profile.vibes.entry(activity.vibe.clone()).or_insert(0) += 1;
            *profile.categories.entry(activity.category).or_insert(0) += 1;
            *profile.energy.entry(activity.energy).or_insert(0) += 1;
            total_minutes += u64::from(activity.duration_minutes);
            count += 1;
        }
        if count > 0 {
            profile.avg_duration = total_minutes as f64 / count as f64;
        }
        profile
    }

    pub fn vibe_count(&self, vibe: &str) -> u32 {
        self.vibes.get(vibe).copied().unwrap_or(0)
    }

    pub fn category_count(&self, category: Category) -> u32 {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn energy_count(&self, energy: EnergyLevel) -> u32 {
        self.energy.get(&energy).copied().unwrap_or(0)
    }

    pub fn avg_duration(&self) -> f64 {
        self.avg_duration
    }
}

/// Scoring weights and limits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_vibe_weight")]
    pub vibe_weight: u32,
    #[serde(default = "default_category_weight")]
    pub category_weight: u32,
    #[serde(default = "default_energy_weight")]
    pub energy_weight: u32,
    /// Bonus per active day whose weather favors the activity's category.
    #[serde(default = "default_weather_weight")]
    pub weather_weight: u32,
    /// Duration within this many minutes of the average earns the full bonus.
    #[serde(default = "default_duration_close")]
    pub duration_close_minutes: u32,
    /// Duration within this many minutes earns the smaller bonus.
    #[serde(default = "default_duration_near")]
    pub duration_near_minutes: u32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_vibe_weight() -> u32 {
    3
}
fn default_category_weight() -> u32 {
    2
}
fn default_energy_weight() -> u32 {
    2
}
fn default_weather_weight() -> u32 {
    3
}
fn default_duration_close() -> u32 {
    30
}
fn default_duration_near() -> u32 {
    60
}
fn default_max_results() -> usize {
    5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            vibe_weight: default_vibe_weight(),
            category_weight: default_category_weight(),
            energy_weight: default_energy_weight(),
            weather_weight: default_weather_weight(),
            duration_close_minutes: default_duration_close(),
            duration_near_minutes: default_duration_near(),
            max_results: default_max_results(),
        }
    }
}

/// A catalog activity the user has not scheduled, with its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub activity: Activity,
    pub score: u32,
}

/// Scores unscheduled catalog activities against the derived profile.
pub struct RecommendationEngine {
    config: ScoringConfig,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Rank catalog activities not yet in the plan's schedule.
    ///
    /// Results are sorted by score descending; ties keep catalog
    /// enumeration order. At most `max_results` entries come back.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        plan: &WeekendPlan,
        days: &[Day],
        weather: &dyn WeatherSource,
    ) -> Vec<Recommendation> {
        let profile = PreferenceProfile::from_plan(plan);

        let mut adverse_days = 0u32;
        let mut clear_days = 0u32;
        for day in days {
            if let Some(code) = weather.weather_for(*day) {
                if code.is_adverse() {
                    adverse_days += 1;
                } else if code.is_clear() {
                    clear_days += 1;
                }
            }
        }

        let mut ranked: Vec<Recommendation> = catalog
            .activities()
            .filter(|activity| !plan.is_scheduled(&activity.id))
            .map(|activity| Recommendation {
                score: self.score(activity, &profile, adverse_days, clear_days),
                activity: activity.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.config.max_results);
        ranked
    }

    fn score(
        &self,
        activity: &Activity,
        profile: &PreferenceProfile,
        adverse_days: u32,
        clear_days: u32,
    ) -> u32 {
        let cfg = &self.config;
        let mut score = cfg.vibe_weight * profile.vibe_count(&activity.vibe)
            + cfg.category_weight * profile.category_count(activity.category)
            + cfg.energy_weight * profile.energy_count(activity.energy);

        let diff = (f64::from(activity.duration_minutes) - profile.avg_duration()).abs();
        if diff <= f64::from(cfg.duration_close_minutes) {
            score += 2;
        } else if diff <= f64::from(cfg.duration_near_minutes) {
            score += 1;
        }

        score += match activity.category {
            Category::Indoor => cfg.weather_weight * adverse_days,
            Category::Outdoor => cfg.weather_weight * clear_days,
        };

        score
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
