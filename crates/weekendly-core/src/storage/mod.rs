pub mod config;
pub mod snapshot;

pub use config::PlannerConfig;
pub use snapshot::{JsonSnapshotStore, PersistencePort, PlanSnapshot};

use std::path::PathBuf;

/// Returns `~/.config/weekendly[-dev]/` based on WEEKENDLY_ENV.
///
/// Set WEEKENDLY_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WEEKENDLY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("weekendly-dev")
    } else {
        base_dir.join("weekendly")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
