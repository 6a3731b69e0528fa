//! Weather-reactive advisories.
//!
//! The advisor only ever proposes. Swaps are applied by the planner when
//! the user confirms; dismissing a proposal is simply not confirming it.
//! Each evaluation recomputes from the current plan and weather, so a new
//! forecast may re-propose a swap the user previously ignored.

use serde::{Deserialize, Serialize};

use crate::catalog::{Activity, Catalog, Category, Day};
use crate::plan::WeekendPlan;
use crate::weather::WeatherSource;

/// A suggested replacement of one scheduled activity by a catalog one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapProposal {
    pub day: Day,
    pub from: Activity,
    pub to: Activity,
}

/// One piece of weather-driven advice for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WeatherAdvisory {
    /// Adverse weather over an outdoor activity: swap it for a similar
    /// length indoor one.
    SuggestSwap(SwapProposal),
    /// Clear skies but the day is mostly indoors; worth adding something
    /// outside.
    OutdoorOpportunity { day: Day },
}

/// Advisor tunables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Maximum duration difference, in minutes, between an outdoor
    /// activity and its proposed indoor replacement.
    #[serde(default = "default_swap_tolerance")]
    pub swap_duration_tolerance: u32,
}

fn default_swap_tolerance() -> u32 {
    30
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            swap_duration_tolerance: default_swap_tolerance(),
        }
    }
}

/// Scans the plan against a forecast and emits advisories.
pub struct WeatherAdvisor {
    config: AdvisorConfig,
}

impl WeatherAdvisor {
    pub fn new() -> Self {
        Self {
            config: AdvisorConfig::default(),
        }
    }

    pub fn with_config(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Evaluate every active day. At most one advisory per day comes
    /// back: a swap for the first outdoor activity on an adverse day, or
    /// an outdoor nudge on a clear, indoor-heavy day.
    pub fn evaluate(
        &self,
        catalog: &Catalog,
        plan: &WeekendPlan,
        days: &[Day],
        weather: &dyn WeatherSource,
    ) -> Vec<WeatherAdvisory> {
        let mut advisories = Vec::new();
        for &day in days {
            let Some(code) = weather.weather_for(day) else {
                continue;
            };
            if code.is_adverse() {
                if let Some(proposal) = self.propose_swap(catalog, plan, day) {
                    advisories.push(WeatherAdvisory::SuggestSwap(proposal));
                }
            } else if code.is_clear() && mostly_indoors(plan, day) {
                advisories.push(WeatherAdvisory::OutdoorOpportunity { day });
            }
        }
        advisories
    }

    fn propose_swap(
        &self,
        catalog: &Catalog,
        plan: &WeekendPlan,
        day: Day,
    ) -> Option<SwapProposal> {
        let outdoor = plan
            .activities_on(day)
            .iter()
            .find(|a| a.category == Category::Outdoor)?;
        let tolerance = self.config.swap_duration_tolerance;
        // `contains`, not `is_scheduled`: proposing a bucketed activity
        // would make the confirmation fail its duplicate check.
        let replacement = catalog.activities().find(|candidate| {
            candidate.category == Category::Indoor
                && !plan.contains(&candidate.id)
                && candidate.duration_minutes.abs_diff(outdoor.duration_minutes) <= tolerance
        })?;
        Some(SwapProposal {
            day,
            from: outdoor.clone(),
            to: replacement.clone(),
        })
    }
}

impl Default for WeatherAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

fn mostly_indoors(plan: &WeekendPlan, day: Day) -> bool {
    let list = plan.activities_on(day);
    if list.is_empty() {
        return false;
    }
    let indoor = list
        .iter()
        .filter(|a| a.category == Category::Indoor)
        .count();
    indoor * 2 > list.len()
}
