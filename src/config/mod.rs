use crate::errors::{AppError, AppResult};
use crate::models::rules::{ValidationLimits, WorkRules};
use crate::utils::time::parse_duration;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_work_duration")]
    pub work_duration: String,
    #[serde(default = "default_lunch_duration")]
    pub lunch_duration: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
    #[serde(default = "default_min_lead_before_lunch")]
    pub min_lead_before_lunch: String,
    #[serde(default = "default_min_lunch")]
    pub min_lunch: String,
    #[serde(default = "default_max_lunch")]
    pub max_lunch: String,
    #[serde(default = "default_max_day_span")]
    pub max_day_span: String,
    #[serde(default = "default_lunch_notice_seconds")]
    pub lunch_notice_seconds: i64,
    #[serde(default = "default_end_notice_seconds")]
    pub end_notice_seconds: i64,
}

fn default_work_duration() -> String {
    "8h".to_string()
}
fn default_lunch_duration() -> String {
    "1h".to_string()
}
fn default_refresh_interval() -> u64 {
    60
}
fn default_min_lead_before_lunch() -> String {
    "1h".to_string()
}
fn default_min_lunch() -> String {
    "15m".to_string()
}
fn default_max_lunch() -> String {
    "2h".to_string()
}
fn default_max_day_span() -> String {
    "12h".to_string()
}
fn default_lunch_notice_seconds() -> i64 {
    30
}
fn default_end_notice_seconds() -> i64 {
    300
}

/// Every key a complete configuration file carries.
pub const CONFIG_KEYS: [&str; 9] = [
    "work_duration",
    "lunch_duration",
    "refresh_interval",
    "min_lead_before_lunch",
    "min_lunch",
    "max_lunch",
    "max_day_span",
    "lunch_notice_seconds",
    "end_notice_seconds",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            work_duration: default_work_duration(),
            lunch_duration: default_lunch_duration(),
            refresh_interval: default_refresh_interval(),
            min_lead_before_lunch: default_min_lead_before_lunch(),
            min_lunch: default_min_lunch(),
            max_lunch: default_max_lunch(),
            max_day_span: default_max_day_span(),
            lunch_notice_seconds: default_lunch_notice_seconds(),
            end_notice_seconds: default_end_notice_seconds(),
        }
    }
}

/// Longest duration any config key may hold.
const MAX_CONFIG_DURATION_HOURS: i64 = 24;

fn within_a_day(key: &str, raw: &str) -> AppResult<Duration> {
    let d = parse_duration(raw)?;
    if d < Duration::zero() {
        return Err(AppError::Config(format!("{key} must not be negative ({raw})")));
    }
    if d > Duration::hours(MAX_CONFIG_DURATION_HOURS) {
        return Err(AppError::Config(format!(
            "{key} must not exceed {MAX_CONFIG_DURATION_HOURS}h ({raw})"
        )));
    }
    Ok(d)
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkday")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkday")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkday.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg: Config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file =
            fs::File::create(path).map_err(|_| AppError::ConfigSave(path.display().to_string()))?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Keys absent from the file at `path` (their defaults apply).
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)
            .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = value.as_mapping();

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.is_some_and(|m| m.contains_key(*k)))
            .collect())
    }

    pub fn work_rules(&self) -> AppResult<WorkRules> {
        Ok(WorkRules::new(
            within_a_day("work_duration", &self.work_duration)?,
            within_a_day("lunch_duration", &self.lunch_duration)?,
        ))
    }

    pub fn validation_limits(&self) -> AppResult<ValidationLimits> {
        Ok(ValidationLimits {
            min_lead_before_lunch: within_a_day("min_lead_before_lunch", &self.min_lead_before_lunch)?,
            min_lunch: within_a_day("min_lunch", &self.min_lunch)?,
            max_lunch: within_a_day("max_lunch", &self.max_lunch)?,
            max_day_span: within_a_day("max_day_span", &self.max_day_span)?,
        })
    }

    pub fn refresh(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh_interval.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_standard_day() {
        let cfg = Config::default();
        assert_eq!(cfg.work_rules().unwrap(), WorkRules::default());
        assert_eq!(cfg.validation_limits().unwrap(), ValidationLimits::default());
        assert_eq!(cfg.refresh(), std::time::Duration::from_secs(60));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let cfg = Config::load(&dir.path().join("absent.conf")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rworkday.conf");
        fs::write(&path, "work_duration: 7h30m\nrefresh_interval: 5\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.work_rules().unwrap().required_work, Duration::minutes(450));
        assert_eq!(cfg.lunch_duration, "1h");
        assert_eq!(cfg.refresh_interval, 5);

        let missing = Config::missing_keys(&path).unwrap();
        assert!(!missing.contains(&"work_duration"));
        assert!(missing.contains(&"lunch_duration"));
        assert_eq!(missing.len(), CONFIG_KEYS.len() - 2);
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("rworkday.conf");
        let cfg = Config {
            lunch_duration: "45m".into(),
            ..Config::default()
        };
        cfg.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), cfg);
        assert!(Config::missing_keys(&path).unwrap().is_empty());
    }

    #[test]
    fn invalid_durations_are_config_errors() {
        let cfg = Config {
            work_duration: "all day".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.work_rules(), Err(AppError::InvalidDuration(_))));

        let cfg = Config {
            max_lunch: "-10".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.validation_limits(), Err(AppError::Config(_))));
    }

    #[test]
    fn oversized_durations_are_config_errors() {
        let cfg = Config {
            work_duration: "3000000000h".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.work_rules(), Err(AppError::Config(_))));

        let cfg = Config {
            lunch_duration: "25h".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.work_rules(), Err(AppError::Config(_))));

        let cfg = Config {
            max_day_span: "24h".into(),
            ..Config::default()
        };
        assert_eq!(cfg.validation_limits().unwrap().max_day_span, Duration::hours(24));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.conf");
        fs::write(&path, "work_duration: [unclosed\n").unwrap();
        assert!(matches!(Config::load(&path), Err(AppError::Yaml(_))));
    }
}
