//! The weekend planner engine.
//!
//! One `WeekendPlanner` owns the catalog, the active weekend shape, the
//! plan state, and a queue of committed-change events. Every public
//! operation is synchronous and all-or-nothing: it either commits and
//! queues an event, or returns a typed error leaving the plan untouched.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::advisor::{SwapProposal, WeatherAdvisor, WeatherAdvisory};
use crate::catalog::{Activity, Catalog, Category, Day, EnergyLevel, WeekendOption};
use crate::error::{CoreError, PlacementError, SnapshotError};
use crate::events::PlannerEvent;
use crate::interval::ClockTime;
use crate::plan::WeekendPlan;
use crate::recommend::{Recommendation, RecommendationEngine};
use crate::storage::config::PlannerConfig;
use crate::storage::snapshot::PlanSnapshot;
use crate::weather::WeatherSource;

/// Result of one bucket entry during a bulk flush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum FlushResult {
    /// Landed on this day.
    Placed { day: Day },
    /// The id was already on some day; the bucket copy is dropped.
    AlreadyScheduled,
    /// No day could take it; the entry stays in the bucket.
    NoSlot,
}

/// Per-activity outcome of [`WeekendPlanner::flush_bucket`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushOutcome {
    pub activity_id: String,
    pub activity_name: String,
    #[serde(flatten)]
    pub result: FlushResult,
}

/// Everything that happened during a bulk flush, in processing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlushReport {
    pub outcomes: Vec<FlushOutcome>,
}

impl FlushReport {
    pub fn placed(&self) -> usize {
        self.count(|r| matches!(r, FlushResult::Placed { .. }))
    }

    pub fn retained(&self) -> usize {
        self.count(|r| matches!(r, FlushResult::NoSlot))
    }

    pub fn dropped(&self) -> usize {
        self.count(|r| matches!(r, FlushResult::AlreadyScheduled))
    }

    fn count(&self, pred: impl Fn(&FlushResult) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.result)).count()
    }
}

/// What a weekend-shape change did with the activities on dropped days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekendChangeReport {
    /// Activities re-placed onto days of the new shape.
    pub reassigned: Vec<(String, Day)>,
    /// Activities that found no slot and were staged in the bucket.
    pub moved_to_bucket: Vec<String>,
}

/// What applying a theme did.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeReport {
    pub placed: usize,
    /// Theme ids that matched nothing in the catalog.
    pub skipped: Vec<String>,
    /// Bucket entries superseded because the theme placed the same id.
    pub removed_from_bucket: Vec<String>,
}

/// Rolled-up counts for sharing a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_activities: usize,
    pub total_minutes: u64,
    /// Distinct categories in first-seen order.
    pub categories: Vec<Category>,
    /// Distinct vibes in first-seen order.
    pub vibes: Vec<String>,
}

/// The stateful scheduling engine for one planning session.
pub struct WeekendPlanner {
    catalog: Catalog,
    config: PlannerConfig,
    weekend: WeekendOption,
    plan: WeekendPlan,
    theme: Option<String>,
    events: Vec<PlannerEvent>,
}

impl WeekendPlanner {
    /// Build a planner over the given catalog.
    ///
    /// The active weekend starts as the configured default shape, or the
    /// catalog's first option when that key is unknown.
    pub fn new(catalog: Catalog, config: PlannerConfig) -> Self {
        let weekend = catalog
            .weekend_option(&config.default_weekend)
            .unwrap_or(&catalog.weekend_options()[0])
            .clone();
        let plan = WeekendPlan::for_days(&weekend.days);
        Self {
            catalog,
            config,
            weekend,
            plan,
            theme: None,
            events: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn weekend(&self) -> &WeekendOption {
        &self.weekend
    }

    pub fn plan(&self) -> &WeekendPlan {
        &self.plan
    }

    /// Key of the most recently applied theme, if any.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Drain queued events for the host to present.
    pub fn take_events(&mut self) -> Vec<PlannerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Place an activity on a specific day, or on the first day of the
    /// active weekend that has room when `day` is `None`.
    ///
    /// Returns the day actually used.
    pub fn place_activity(
        &mut self,
        activity: Activity,
        day: Option<Day>,
    ) -> Result<Day, PlacementError> {
        let target = match day {
            Some(day) => day,
            None => {
                if self.plan.contains(&activity.id) {
                    return Err(PlacementError::Duplicate {
                        id: activity.id.clone(),
                    });
                }
                self.weekend
                    .days
                    .iter()
                    .copied()
                    .find(|d| self.plan.conflict_on(*d, &activity).is_none())
                    .ok_or_else(|| PlacementError::NoSlot {
                        id: activity.id.clone(),
                        name: activity.name.clone(),
                    })?
            }
        };
        let (id, name) = (activity.id.clone(), activity.name.clone());
        self.plan.place_on_day(target, activity)?;
        self.events.push(PlannerEvent::ActivityPlaced {
            day: target,
            activity_id: id,
            activity_name: name,
            at: Utc::now(),
        });
        Ok(target)
    }

    /// Remove an activity from a day. Returns it, or `None` when it was
    /// not there -- absence is reported, never an error.
    pub fn remove_from_day(&mut self, day: Day, id: &str) -> Option<Activity> {
        let removed = self.plan.remove_from_day(day, id)?;
        self.events.push(PlannerEvent::ActivityRemoved {
            day,
            activity_id: removed.id.clone(),
            at: Utc::now(),
        });
        Some(removed)
    }

    /// Stage an activity for later placement, optionally at a new time.
    pub fn add_to_bucket(
        &mut self,
        activity: Activity,
        custom_time: Option<ClockTime>,
    ) -> Result<(), PlacementError> {
        let activity = match custom_time {
            Some(time) => activity.at(time),
            None => activity,
        };
        let (id, name) = (activity.id.clone(), activity.name.clone());
        self.plan.add_to_bucket(activity)?;
        self.events.push(PlannerEvent::ActivityBucketed {
            activity_id: id,
            activity_name: name,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Create an ad-hoc activity outside the catalog and stage it.
    ///
    /// Missing duration and time fall back to the configured bucket
    /// defaults. Returns the generated id.
    pub fn stage_custom(
        &mut self,
        name: &str,
        category: Category,
        vibe: &str,
        energy: EnergyLevel,
        duration_minutes: Option<u32>,
        time: Option<ClockTime>,
    ) -> Result<String, PlacementError> {
        let activity = Activity {
            id: Activity::generated_id(),
            name: name.to_string(),
            duration_minutes: duration_minutes.unwrap_or(self.config.bucket.default_duration),
            category,
            vibe: vibe.to_string(),
            energy,
            time: time.unwrap_or(self.config.bucket.default_time),
            description: String::new(),
        };
        let id = activity.id.clone();
        self.add_to_bucket(activity, None)?;
        Ok(id)
    }

    pub fn remove_from_bucket(&mut self, id: &str) -> Option<Activity> {
        let removed = self.plan.remove_from_bucket(id)?;
        self.events.push(PlannerEvent::BucketActivityRemoved {
            activity_id: removed.id.clone(),
            at: Utc::now(),
        });
        Some(removed)
    }

    /// Move one bucketed activity onto a day (first free day when `None`).
    pub fn place_from_bucket(
        &mut self,
        id: &str,
        day: Option<Day>,
    ) -> Result<Day, PlacementError> {
        let entry = self
            .plan
            .bucket()
            .iter()
            .find(|e| e.activity.id == id)
            .ok_or_else(|| PlacementError::UnknownActivity { id: id.to_string() })?;
        let activity = entry.activity.clone();
        let target = match day {
            Some(day) => day,
            None => self
                .weekend
                .days
                .iter()
                .copied()
                .find(|d| self.plan.conflict_on(*d, &activity).is_none())
                .ok_or_else(|| PlacementError::NoSlot {
                    id: activity.id.clone(),
                    name: activity.name.clone(),
                })?,
        };
        self.plan.promote_from_bucket(id, target)?;
        self.events.push(PlannerEvent::ActivityPlaced {
            day: target,
            activity_id: activity.id,
            activity_name: activity.name,
            at: Utc::now(),
        });
        Ok(target)
    }

    /// Distribute the whole bucket over the active weekend.
    ///
    /// Entries are processed sorted by start time (ties keep bucket
    /// order) with a day pointer that rotates after every successful
    /// placement, so consecutive entries spread across days. Entries
    /// whose id is already scheduled are dropped; entries no day can
    /// take stay in the bucket.
    pub fn flush_bucket(&mut self) -> FlushReport {
        let mut pending: Vec<Activity> = self
            .plan
            .bucket()
            .iter()
            .map(|e| e.activity.clone())
            .collect();
        pending.sort_by_key(|a| a.time);

        let days = self.weekend.days.clone();
        let mut pointer = 0usize;
        let mut report = FlushReport::default();

        for activity in pending {
            if self.plan.is_scheduled(&activity.id) {
                self.plan.remove_from_bucket(&activity.id);
                report.outcomes.push(FlushOutcome {
                    activity_id: activity.id,
                    activity_name: activity.name,
                    result: FlushResult::AlreadyScheduled,
                });
                continue;
            }

            let mut placed_on = None;
            for offset in 0..days.len() {
                let day = days[(pointer + offset) % days.len()];
                if self.plan.conflict_on(day, &activity).is_none() {
                    placed_on = Some((day, offset));
                    break;
                }
            }

            let result = match placed_on {
                Some((day, offset)) => match self.plan.promote_from_bucket(&activity.id, day) {
                    Ok(()) => {
                        pointer = (pointer + offset + 1) % days.len();
                        FlushResult::Placed { day }
                    }
                    Err(_) => FlushResult::NoSlot,
                },
                None => FlushResult::NoSlot,
            };
            report.outcomes.push(FlushOutcome {
                activity_id: activity.id,
                activity_name: activity.name,
                result,
            });
        }

        self.events.push(PlannerEvent::BucketFlushed {
            placed: report.placed(),
            retained: report.retained(),
            dropped: report.dropped(),
            at: Utc::now(),
        });
        report
    }

    /// Switch to another weekend shape.
    ///
    /// Days present in both shapes keep their lists. Activities on
    /// dropped days are re-placed first-fit over the new day list;
    /// whatever does not fit goes to the bucket, never discarded.
    pub fn change_weekend(&mut self, key: &str) -> Result<WeekendChangeReport, CoreError> {
        let option = self.catalog.weekend_option(key)?.clone();
        let extracted = self.plan.reshape(&option.days);

        let mut report = WeekendChangeReport::default();
        for activity in extracted {
            let slot = option
                .days
                .iter()
                .copied()
                .find(|d| self.plan.conflict_on(*d, &activity).is_none());
            match slot {
                Some(day) => {
                    let id = activity.id.clone();
                    self.plan.place_on_day(day, activity)?;
                    report.reassigned.push((id, day));
                }
                None => {
                    report.moved_to_bucket.push(activity.id.clone());
                    self.plan.add_to_bucket(activity)?;
                }
            }
        }

        self.weekend = option;
        self.events.push(PlannerEvent::WeekendChanged {
            option: key.to_string(),
            reassigned: report.reassigned.len(),
            moved_to_bucket: report.moved_to_bucket.len(),
            at: Utc::now(),
        });
        Ok(report)
    }

    /// Overwrite the schedule with a theme's activities, round-robin
    /// across the active days.
    ///
    /// This is a full replacement, not a merge: whatever was scheduled is
    /// gone afterward, and no conflict checking is applied to the
    /// interleaved result. Unknown theme ids are skipped. Bucket entries
    /// sharing an id with a placed theme activity are superseded so ids
    /// stay unique across the plan.
    pub fn apply_theme(&mut self, key: &str) -> Result<ThemeReport, CoreError> {
        let theme = self.catalog.theme(key)?;
        let (resolved, skipped) = self.catalog.resolve_theme(theme);

        let days = &self.weekend.days;
        let mut schedule: BTreeMap<Day, Vec<Activity>> =
            days.iter().map(|d| (*d, Vec::new())).collect();
        for (index, activity) in resolved.iter().enumerate() {
            let day = days[index % days.len()];
            if let Some(list) = schedule.get_mut(&day) {
                list.push((*activity).clone());
            }
        }

        let mut report = ThemeReport {
            placed: resolved.len(),
            skipped,
            removed_from_bucket: Vec::new(),
        };
        let placed_ids: Vec<String> = resolved.iter().map(|a| a.id.clone()).collect();
        for id in &placed_ids {
            if self.plan.remove_from_bucket(id).is_some() {
                report.removed_from_bucket.push(id.clone());
            }
        }

        self.plan.overwrite_schedule(schedule);
        self.theme = Some(key.to_string());
        self.events.push(PlannerEvent::ThemeApplied {
            theme: key.to_string(),
            placed: report.placed,
            skipped: report.skipped.len(),
            at: Utc::now(),
        });
        Ok(report)
    }

    /// Change the start time of an activity wherever it currently lives.
    pub fn reschedule(&mut self, id: &str, time: ClockTime) -> Result<(), PlacementError> {
        self.plan.set_time(id, time)?;
        self.events.push(PlannerEvent::ActivityRescheduled {
            activity_id: id.to_string(),
            new_time: time.to_string(),
            at: Utc::now(),
        });
        Ok(())
    }

    /// Move a scheduled (or bucketed) activity to another day.
    ///
    /// The target is conflict-checked before anything is removed, so a
    /// failed move leaves the plan untouched. Moving onto the day the
    /// activity is already on succeeds as a no-op.
    pub fn move_activity(&mut self, id: &str, to: Day) -> Result<(), PlacementError> {
        if !self.plan.has_day(to) {
            return Err(PlacementError::DayNotInWeekend { day: to });
        }
        if self.plan.is_bucketed(id) {
            self.place_from_bucket(id, Some(to))?;
            return Ok(());
        }
        let from = self
            .plan
            .day_of(id)
            .ok_or_else(|| PlacementError::UnknownActivity { id: id.to_string() })?;
        if from == to {
            return Ok(());
        }
        let activity = self
            .plan
            .activities_on(from)
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| PlacementError::UnknownActivity { id: id.to_string() })?;
        if let Some(existing) = self.plan.conflict_on(to, &activity) {
            return Err(PlacementError::Conflict {
                day: to,
                with_id: existing.id.clone(),
                with_name: existing.name.clone(),
            });
        }
        self.plan.remove_from_day(from, id);
        self.plan.place_on_day(to, activity)?;
        self.events.push(PlannerEvent::ActivityMoved {
            activity_id: id.to_string(),
            from,
            to,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Rank unscheduled catalog activities for the current plan.
    pub fn recommend(&self, weather: &dyn WeatherSource) -> Vec<Recommendation> {
        RecommendationEngine::with_config(self.config.scoring)
            .recommend(&self.catalog, &self.plan, &self.weekend.days, weather)
    }

    /// Compute weather advisories for the current plan. Proposals are
    /// never applied here; see [`WeekendPlanner::confirm_swap`].
    pub fn evaluate_weather(&self, weather: &dyn WeatherSource) -> Vec<WeatherAdvisory> {
        WeatherAdvisor::with_config(self.config.advisor).evaluate(
            &self.catalog,
            &self.plan,
            &self.weekend.days,
            weather,
        )
    }

    /// Apply a user-confirmed swap proposal.
    ///
    /// The replacement is conflict-checked against the day as it will be
    /// after the removal, so the whole swap either commits or nothing
    /// changes. A proposal that raced a newer mutation (activity moved,
    /// replacement scheduled meanwhile) fails cleanly.
    pub fn confirm_swap(&mut self, proposal: &SwapProposal) -> Result<(), PlacementError> {
        let SwapProposal { day, from, to } = proposal;
        if !self.plan.has_day(*day) {
            return Err(PlacementError::DayNotInWeekend { day: *day });
        }
        if !self
            .plan
            .activities_on(*day)
            .iter()
            .any(|a| a.id == from.id)
        {
            return Err(PlacementError::UnknownActivity {
                id: from.id.clone(),
            });
        }
        if self.plan.contains(&to.id) {
            return Err(PlacementError::Duplicate { id: to.id.clone() });
        }
        let to_slot = to.slot();
        if let Some(existing) = self
            .plan
            .activities_on(*day)
            .iter()
            .find(|a| a.id != from.id && a.slot().overlaps(&to_slot))
        {
            return Err(PlacementError::Conflict {
                day: *day,
                with_id: existing.id.clone(),
                with_name: existing.name.clone(),
            });
        }

        self.plan.remove_from_day(*day, &from.id);
        self.plan.place_on_day(*day, to.clone())?;
        self.events.push(PlannerEvent::SwapApplied {
            day: *day,
            removed_id: from.id.clone(),
            placed_id: to.id.clone(),
            at: Utc::now(),
        });
        Ok(())
    }

    /// Counts and distinct tags for the share view.
    pub fn summary(&self) -> PlanSummary {
        let mut summary = PlanSummary::default();
        for activity in self.plan.scheduled() {
            summary.total_activities += 1;
            summary.total_minutes += u64::from(activity.duration_minutes);
            if !summary.categories.contains(&activity.category) {
                summary.categories.push(activity.category);
            }
            if !summary.vibes.contains(&activity.vibe) {
                summary.vibes.push(activity.vibe.clone());
            }
        }
        summary
    }

    /// Capture the full plan state for persistence.
    pub fn snapshot(&self) -> PlanSnapshot {
        PlanSnapshot {
            id: uuid::Uuid::new_v4().to_string(),
            weekend: self.weekend.key.clone(),
            theme: self.theme.clone(),
            schedule: self.plan.schedule().clone(),
            bucket: self.plan.bucket().to_vec(),
            saved_at: Utc::now(),
        }
    }

    /// Replace the plan state from a snapshot.
    ///
    /// The snapshot is validated first: its weekend key must exist in
    /// the catalog, scheduled days must belong to that shape, and no id
    /// may appear twice. Overlapping entries within a day are accepted,
    /// since a theme overwrite can legitimately produce them. A corrupt
    /// snapshot is rejected wholesale; the current state stays.
    pub fn restore(&mut self, snapshot: PlanSnapshot) -> Result<(), CoreError> {
        let option = self
            .catalog
            .weekend_option(&snapshot.weekend)
            .map_err(|_| SnapshotError::UnknownWeekendOption {
                key: snapshot.weekend.clone(),
            })?
            .clone();

        let mut seen = std::collections::HashSet::new();
        for (day, list) in &snapshot.schedule {
            if !option.days.contains(day) {
                return Err(SnapshotError::DayOutsideWeekend { day: *day }.into());
            }
            for a in list {
                if !seen.insert(a.id.clone()) {
                    return Err(SnapshotError::DuplicateActivity { id: a.id.clone() }.into());
                }
            }
        }
        for entry in &snapshot.bucket {
            if !seen.insert(entry.activity.id.clone()) {
                return Err(SnapshotError::DuplicateActivity {
                    id: entry.activity.id.clone(),
                }
                .into());
            }
        }

        let mut schedule = snapshot.schedule;
        for day in &option.days {
            schedule.entry(*day).or_default();
        }
        self.plan = WeekendPlan::from_parts(schedule, snapshot.bucket);
        self.theme = snapshot.theme;
        self.weekend = option;
        self.events.push(PlannerEvent::SnapshotRestored {
            option: snapshot.weekend,
            at: Utc::now(),
        });
        Ok(())
    }
}
