//! The weekend plan store: per-day activity lists plus the staging bucket.
//!
//! Two rules hold after every mutation:
//! - within one day, no two activities' time windows overlap;
//! - an activity id lives in at most one place (one day, or the bucket).
//!
//! Day lists keep insertion order. Sorting by start time is a display
//! concern and happens in the caller, never here.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Activity, Day};
use crate::error::PlacementError;
use crate::interval::ClockTime;

/// A bucketed activity with the moment it was staged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketEntry {
    pub activity: Activity,
    pub added_at: DateTime<Utc>,
}

/// Per-day schedule and unscheduled bucket for one planning session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekendPlan {
    schedule: BTreeMap<Day, Vec<Activity>>,
    bucket: Vec<BucketEntry>,
}

impl WeekendPlan {
    /// Empty plan covering the given days.
    pub fn for_days(days: &[Day]) -> Self {
        Self {
            schedule: days.iter().map(|d| (*d, Vec::new())).collect(),
            bucket: Vec::new(),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.schedule.keys().copied()
    }

    pub fn has_day(&self, day: Day) -> bool {
        self.schedule.contains_key(&day)
    }

    /// Activities on a day in insertion order. Empty for unknown days.
    pub fn activities_on(&self, day: Day) -> &[Activity] {
        self.schedule.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn schedule(&self) -> &BTreeMap<Day, Vec<Activity>> {
        &self.schedule
    }

    pub fn bucket(&self) -> &[BucketEntry] {
        &self.bucket
    }

    /// All placed activities, day order then insertion order.
    pub fn scheduled(&self) -> impl Iterator<Item = &Activity> {
        self.schedule.values().flat_map(|list| list.iter())
    }

    pub fn scheduled_count(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }

    /// Day currently holding the id, if any.
    pub fn day_of(&self, id: &str) -> Option<Day> {
        self.schedule
            .iter()
            .find(|(_, list)| list.iter().any(|a| a.id == id))
            .map(|(day, _)| *day)
    }

    pub fn is_scheduled(&self, id: &str) -> bool {
        self.day_of(id).is_some()
    }

    pub fn is_bucketed(&self, id: &str) -> bool {
        self.bucket.iter().any(|e| e.activity.id == id)
    }

    /// True when the id is anywhere in the plan, scheduled or bucketed.
    pub fn contains(&self, id: &str) -> bool {
        self.is_scheduled(id) || self.is_bucketed(id)
    }

    /// First activity on `day` whose window overlaps the candidate's.
    ///
    /// An entry sharing the candidate's id is skipped, so rescheduling an
    /// activity never collides with itself.
    pub fn conflict_on(&self, day: Day, candidate: &Activity) -> Option<&Activity> {
        let slot = candidate.slot();
        self.activities_on(day)
            .iter()
            .find(|existing| existing.id != candidate.id && existing.slot().overlaps(&slot))
    }

    /// Append the activity to `day` after conflict and duplicate checks.
    pub fn place_on_day(&mut self, day: Day, activity: Activity) -> Result<(), PlacementError> {
        if !self.has_day(day) {
            return Err(PlacementError::DayNotInWeekend { day });
        }
        if self.contains(&activity.id) {
            return Err(PlacementError::Duplicate {
                id: activity.id.clone(),
            });
        }
        if let Some(existing) = self.conflict_on(day, &activity) {
            return Err(PlacementError::Conflict {
                day,
                with_id: existing.id.clone(),
                with_name: existing.name.clone(),
            });
        }
        self.schedule
            .get_mut(&day)
            .map(|list| list.push(activity))
            .ok_or(PlacementError::DayNotInWeekend { day })
    }

    /// Remove by id from a day. Returns the removed activity, `None` if
    /// it was not there (callers report this; it is not fatal).
    pub fn remove_from_day(&mut self, day: Day, id: &str) -> Option<Activity> {
        let list = self.schedule.get_mut(&day)?;
        let index = list.iter().position(|a| a.id == id)?;
        Some(list.remove(index))
    }

    /// Stage an activity in the bucket. No time-conflict checks apply,
    /// but the one-place-per-id rule still does.
    pub fn add_to_bucket(&mut self, activity: Activity) -> Result<(), PlacementError> {
        if self.contains(&activity.id) {
            return Err(PlacementError::Duplicate {
                id: activity.id.clone(),
            });
        }
        self.bucket.push(BucketEntry {
            activity,
            added_at: Utc::now(),
        });
        Ok(())
    }

    pub fn remove_from_bucket(&mut self, id: &str) -> Option<Activity> {
        let index = self.bucket.iter().position(|e| e.activity.id == id)?;
        Some(self.bucket.remove(index).activity)
    }

    /// Move a bucketed activity onto a day in one step.
    ///
    /// The bucket entry is only consumed when the placement succeeds.
    pub fn promote_from_bucket(&mut self, id: &str, day: Day) -> Result<(), PlacementError> {
        if !self.has_day(day) {
            return Err(PlacementError::DayNotInWeekend { day });
        }
        let entry = self
            .bucket
            .iter()
            .find(|e| e.activity.id == id)
            .ok_or_else(|| PlacementError::UnknownActivity { id: id.to_string() })?;
        if let Some(existing) = self.conflict_on(day, &entry.activity) {
            return Err(PlacementError::Conflict {
                day,
                with_id: existing.id.clone(),
                with_name: existing.name.clone(),
            });
        }
        let activity = self
            .remove_from_bucket(id)
            .ok_or_else(|| PlacementError::UnknownActivity { id: id.to_string() })?;
        self.schedule
            .get_mut(&day)
            .map(|list| list.push(activity))
            .ok_or(PlacementError::DayNotInWeekend { day })
    }

    /// Change the start time of an activity wherever it lives.
    ///
    /// Scheduled activities are conflict-checked against the rest of
    /// their day first; bucketed ones change freely.
    pub fn set_time(&mut self, id: &str, time: ClockTime) -> Result<(), PlacementError> {
        if let Some(entry) = self.bucket.iter_mut().find(|e| e.activity.id == id) {
            entry.activity.time = time;
            return Ok(());
        }
        let day = self
            .day_of(id)
            .ok_or_else(|| PlacementError::UnknownActivity { id: id.to_string() })?;
        let current = self
            .activities_on(day)
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| PlacementError::UnknownActivity { id: id.to_string() })?;
        let moved = current.at(time);
        if let Some(existing) = self.conflict_on(day, &moved) {
            return Err(PlacementError::Conflict {
                day,
                with_id: existing.id.clone(),
                with_name: existing.name.clone(),
            });
        }
        if let Some(list) = self.schedule.get_mut(&day) {
            if let Some(slot) = list.iter_mut().find(|a| a.id == id) {
                slot.time = time;
            }
        }
        Ok(())
    }

    /// Rebuild the day set, keeping lists for days present in both the
    /// old and new shape. Returns the activities from dropped days in
    /// day-then-insertion order.
    pub fn reshape(&mut self, days: &[Day]) -> Vec<Activity> {
        let old = std::mem::take(&mut self.schedule);
        self.schedule = days.iter().map(|d| (*d, Vec::new())).collect();
        let mut extracted = Vec::new();
        for (day, list) in old {
            match self.schedule.get_mut(&day) {
                Some(slot) => *slot = list,
                None => extracted.extend(list),
            }
        }
        extracted
    }

    /// Replace every day list at once. Used by bulk overwrites; the
    /// caller is responsible for what goes in.
    pub(crate) fn overwrite_schedule(&mut self, schedule: BTreeMap<Day, Vec<Activity>>) {
        self.schedule = schedule;
    }

    /// Rebuild from snapshot parts without invariant checks; the caller
    /// validates first.
    pub(crate) fn from_parts(
        schedule: BTreeMap<Day, Vec<Activity>>,
        bucket: Vec<BucketEntry>,
    ) -> Self {
        Self { schedule, bucket }
    }
}
