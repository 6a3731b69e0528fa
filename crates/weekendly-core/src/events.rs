//! Planner events.
//!
//! Every committed state change produces an event. The engine queues
//! them; the host drains the queue with
//! [`WeekendPlanner::take_events`](crate::planner::WeekendPlanner::take_events)
//! and decides how (or whether) each one is surfaced. Failed operations
//! produce no events -- they are reported through the returned error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Day;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlannerEvent {
    ActivityPlaced {
        day: Day,
        activity_id: String,
        activity_name: String,
        at: DateTime<Utc>,
    },
    ActivityRemoved {
        day: Day,
        activity_id: String,
        at: DateTime<Utc>,
    },
    ActivityBucketed {
        activity_id: String,
        activity_name: String,
        at: DateTime<Utc>,
    },
    BucketActivityRemoved {
        activity_id: String,
        at: DateTime<Utc>,
    },
    /// Bulk flush finished: how many landed on days, how many stayed in
    /// the bucket for lack of a slot, how many were dropped as already
    /// scheduled.
    BucketFlushed {
        placed: usize,
        retained: usize,
        dropped: usize,
        at: DateTime<Utc>,
    },
    ActivityRescheduled {
        activity_id: String,
        new_time: String,
        at: DateTime<Utc>,
    },
    ActivityMoved {
        activity_id: String,
        from: Day,
        to: Day,
        at: DateTime<Utc>,
    },
    /// Weekend shape changed; `moved_to_bucket` counts activities from
    /// dropped days that found no slot in the new shape.
    WeekendChanged {
        option: String,
        reassigned: usize,
        moved_to_bucket: usize,
        at: DateTime<Utc>,
    },
    ThemeApplied {
        theme: String,
        placed: usize,
        skipped: usize,
        at: DateTime<Utc>,
    },
    SwapApplied {
        day: Day,
        removed_id: String,
        placed_id: String,
        at: DateTime<Utc>,
    },
    SnapshotRestored {
        option: String,
        at: DateTime<Utc>,
    },
}
