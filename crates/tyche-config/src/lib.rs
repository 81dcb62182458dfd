use anyhow::Context;
use chrono::FixedOffset;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tyche::aspects::AspectSettings;
use tyche::ephemeris::GeoLocation;
use tyche::input::{parse_utc_offset, validate_location, DEFAULT_UTC_OFFSET};
use tyche::narrative::RetryPolicy;
use tyche::{AnalysisSettings, DignityTables};

/// Relative locations tried, in order, when no explicit path is given.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["configs/tyche.toml", "../../configs/tyche.toml"];

#[derive(Debug, Clone)]
pub struct TycheSettings {
    pub utc_offset: FixedOffset,
    pub analysis: AnalysisSettings,
    /// Fallback birth place when none is given on the command line
    pub location: Option<GeoLocation>,
    pub ephemeris_path: Option<PathBuf>,
    /// Policy for a narrative client built on `tyche::narrative::generate_with_retry`.
    /// The calculation itself never reads it.
    pub retry: RetryPolicy,
    pub dignity_tables: DignityTables,
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocationToml {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct NarrativeToml {
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
    #[serde(default = "default_backoff_secs")]
    backoff_secs: u64,
}

impl Default for NarrativeToml {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_secs: default_backoff_secs(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_secs() -> u64 {
    5
}

fn default_utc_offset() -> String {
    DEFAULT_UTC_OFFSET.to_string()
}

fn default_orb_limit() -> f64 {
    5.0
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default = "default_utc_offset")]
    utc_offset: String,
    #[serde(default = "default_orb_limit")]
    orb_limit: f64,
    #[serde(default)]
    location: Option<LocationToml>,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    dignity_tables: Option<PathBuf>,
    #[serde(default)]
    narrative: NarrativeToml,
}

/// First existing file among [`CONFIG_SEARCH_PATHS`].
pub fn find_config_path() -> Option<PathBuf> {
    CONFIG_SEARCH_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Parse settings from TOML text. Relative paths inside the file are resolved
/// against `base_dir`.
pub fn parse_settings(text: &str, base_dir: Option<&Path>) -> anyhow::Result<TycheSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse tyche.toml: {e}"))?;

    let utc_offset = parse_utc_offset(&root.utc_offset).context("Invalid utc_offset in tyche.toml")?;

    if !root.orb_limit.is_finite() || !(0.0..=15.0).contains(&root.orb_limit) {
        anyhow::bail!("orb_limit must be between 0 and 15 degrees, got {}", root.orb_limit);
    }

    let location = match root.location {
        Some(LocationToml { latitude, longitude }) => {
            let location = GeoLocation {
                lat: latitude,
                lon: longitude,
            };
            validate_location(&location).context("Invalid [location] in tyche.toml")?;
            Some(location)
        }
        None => None,
    };

    if root.narrative.max_attempts == 0 {
        anyhow::bail!("narrative.max_attempts must be at least 1");
    }

    let resolve = |p: PathBuf| match base_dir {
        Some(dir) if p.is_relative() => dir.join(p),
        _ => p,
    };

    let dignity_tables = match root.dignity_tables.map(resolve) {
        Some(path) => load_dignity_tables(&path)?,
        None => DignityTables::traditional(),
    };

    Ok(TycheSettings {
        utc_offset,
        analysis: AnalysisSettings {
            aspects: AspectSettings {
                orb_limit: root.orb_limit,
            },
        },
        location,
        ephemeris_path: root.ephemeris_path.map(resolve),
        retry: RetryPolicy {
            max_attempts: root.narrative.max_attempts,
            backoff_step: Duration::from_secs(root.narrative.backoff_secs),
        },
        dignity_tables,
        source: None,
    })
}

pub fn load_dignity_tables(path: &Path) -> anyhow::Result<DignityTables> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dignity tables {}", path.display()))?;
    DignityTables::from_toml_str(&text)
        .with_context(|| format!("Invalid dignity tables in {}", path.display()))
}

/// Load settings from `explicit`, or from the first file on the search path.
/// Without either, the built-in defaults (an empty file) are returned.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<TycheSettings> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match find_config_path() {
            Some(p) => p,
            None => return parse_settings("", None),
        },
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Could not load config from {}", path.display()))?;
    let mut settings = parse_settings(&text, path.parent())?;
    settings.source = Some(path);
    Ok(settings)
}
