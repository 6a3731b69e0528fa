//! # Weekendly Core Library
//!
//! This library provides the core business logic for the Weekendly
//! weekend planner. It is UI-free by design: the desktop or web shell is
//! a thin presentation layer that calls the synchronous operations here
//! and renders the typed results and events that come back.
//!
//! ## Architecture
//!
//! - **Planner Engine**: One owned store for the per-day schedule, the
//!   staging bucket, and the active weekend shape; every operation is
//!   all-or-nothing
//! - **Catalog**: Read-only activity, theme, and weekend-option data,
//!   validated at load time
//! - **Recommendations**: On-demand preference profile over the placed
//!   activities, scored against the unscheduled catalog
//! - **Weather Advisor**: Proposes day-appropriate swaps from a forecast;
//!   never applies anything without confirmation
//! - **Storage**: TOML configuration and a JSON snapshot port
//!
//! ## Key Components
//!
//! - [`WeekendPlanner`]: Core scheduling engine and operation surface
//! - [`Catalog`]: Static catalog with built-in data set
//! - [`RecommendationEngine`]: Preference-based activity ranking
//! - [`WeatherAdvisor`]: Weather-reactive swap proposals
//! - [`PersistencePort`]: Snapshot save/load contract

pub mod advisor;
pub mod catalog;
pub mod error;
pub mod events;
pub mod interval;
pub mod plan;
pub mod planner;
pub mod recommend;
pub mod storage;
pub mod weather;

pub use advisor::{AdvisorConfig, SwapProposal, WeatherAdvisor, WeatherAdvisory};
pub use catalog::{
    Activity, Catalog, Category, CategoryGroup, Day, EnergyLevel, Theme, WeekendOption,
};
pub use error::{CatalogError, ConfigError, CoreError, PlacementError, Result, SnapshotError};
pub use events::PlannerEvent;
pub use interval::{ClockTime, TimeSlot};
pub use plan::{BucketEntry, WeekendPlan};
pub use planner::{
    FlushOutcome, FlushReport, FlushResult, PlanSummary, ThemeReport, WeekendChangeReport,
    WeekendPlanner,
};
pub use recommend::{PreferenceProfile, Recommendation, RecommendationEngine, ScoringConfig};
pub use storage::{JsonSnapshotStore, PersistencePort, PlanSnapshot, PlannerConfig};
pub use weather::{NoWeather, WeatherByDay, WeatherCode, WeatherSource};
