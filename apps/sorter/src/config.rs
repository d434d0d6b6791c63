use std::{fs, path::Path};

use sequence_source::{
    DEFAULT_COMPARE_BOUND, DEFAULT_COMPARE_COUNT, DEFAULT_RANDOM_COUNT, DEFAULT_RANDOM_MAX,
};
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_PATH: &str = "sorter.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial state of the step-by-step toggle.
    pub trace_default: bool,
    pub random_count: usize,
    pub random_max: i32,
    pub compare_count: usize,
    pub compare_bound: i32,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trace_default: true,
            random_count: DEFAULT_RANDOM_COUNT,
            random_max: DEFAULT_RANDOM_MAX,
            compare_count: DEFAULT_COMPARE_COUNT,
            compare_bound: DEFAULT_COMPARE_BOUND,
            seed: None,
        }
    }
}

pub fn load_settings(path: &Path) -> Settings {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file at `path` if it exists, then environment overrides.
pub fn load_settings_with<F>(path: &Path, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<Settings>(&raw) {
            Ok(parsed) => {
                debug!(path = %path.display(), "loaded settings file");
                parsed
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring malformed settings file");
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    };

    if let Some(v) = env_override(
        &env,
        &["SORTER_TRACE", "APP__TRACE_DEFAULT"],
        parse_flag,
    ) {
        settings.trace_default = v;
    }
    if let Some(v) = env_override(
        &env,
        &["SORTER_RANDOM_COUNT", "APP__RANDOM_COUNT"],
        parse::<usize>,
    ) {
        settings.random_count = v;
    }
    if let Some(v) = env_override(
        &env,
        &["SORTER_RANDOM_MAX", "APP__RANDOM_MAX"],
        parse::<i32>,
    ) {
        settings.random_max = v;
    }
    if let Some(v) = env_override(
        &env,
        &["SORTER_COMPARE_COUNT", "APP__COMPARE_COUNT"],
        parse::<usize>,
    ) {
        settings.compare_count = v;
    }
    if let Some(v) = env_override(
        &env,
        &["SORTER_COMPARE_BOUND", "APP__COMPARE_BOUND"],
        parse::<i32>,
    ) {
        settings.compare_bound = v;
    }
    if let Some(v) = env_override(
        &env,
        &["SORTER_SEED", "APP__SEED"],
        parse::<u64>,
    ) {
        settings.seed = Some(v);
    }

    settings
}

/// Later keys win, matching the `APP__` convention taking precedence. Unparsable values are skipped.
fn env_override<F, T>(env: &F, keys: &[&str], parse_value: fn(&str) -> Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|key| env(key).and_then(|raw| parse_value(raw.trim())))
        .last()
}

fn parse<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
