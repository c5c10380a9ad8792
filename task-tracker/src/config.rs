use serde::{Deserialize, Serialize};

/// Task file used when neither the config file nor the environment says
/// otherwise, resolved against the working directory.
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub tracker: TrackerConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TrackerConfig {
    pub task_file: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            task_file: DEFAULT_TASK_FILE.to_string(),
        }
    }
}

impl Config {
    /// Layers an optional `task-tracker.toml` and `TASK_TRACKER`-prefixed
    /// environment variables over the built-in defaults. A missing file is
    /// fine; a present-but-invalid one is a startup error.
    pub fn load() -> anyhow::Result<Self> {
        let s = config::Config::builder()
            .set_default("tracker.task_file", DEFAULT_TASK_FILE)?
            .add_source(config::File::with_name("task-tracker").required(false))
            .add_source(
                config::Environment::with_prefix("TASK_TRACKER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
