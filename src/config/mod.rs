use crate::core::allocator::ClockRounding;
use crate::core::time_input::TimeInputMode;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every config file is expected to carry (used by `config --check`).
pub const CONFIG_KEYS: [&str; 8] = [
    "input_mode",
    "default_ratios",
    "clock_rounding",
    "task_label",
    "raw_decimals",
    "auto_calculate",
    "color",
    "clipboard_hold_secs",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input_mode: TimeInputMode,
    #[serde(default = "default_ratios")]
    pub default_ratios: String,
    #[serde(default)]
    pub clock_rounding: ClockRounding,
    #[serde(default = "default_task_label")]
    pub task_label: String,
    #[serde(default = "default_raw_decimals")]
    pub raw_decimals: usize,
    #[serde(default = "default_true")]
    pub auto_calculate: bool,
    #[serde(default = "default_true")]
    pub color: bool,
    /// Seconds `calc --copy` keeps owning the clipboard on X11/Wayland (0 = off).
    #[serde(default = "default_clipboard_hold_secs")]
    pub clipboard_hold_secs: u64,
}

fn default_ratios() -> String {
    "50,30,20".to_string()
}
fn default_task_label() -> String {
    "Task".to_string()
}
fn default_raw_decimals() -> usize {
    2
}
fn default_true() -> bool {
    true
}
fn default_clipboard_hold_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_mode: TimeInputMode::default(),
            default_ratios: default_ratios(),
            clock_rounding: ClockRounding::default(),
            task_label: default_task_label(),
            raw_decimals: default_raw_decimals(),
            auto_calculate: true,
            color: true,
            clipboard_hold_secs: default_clipboard_hold_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimesplit")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesplit.conf")
    }

    /// Resolve `--config` override or fall back to the standard location
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Keys from [`CONFIG_KEYS`] absent in the given YAML text
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Null
        } else {
            serde_yaml::from_str(content)?
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_none())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let cfg = Config::from_yaml("input_mode: minutes\nraw_decimals: 1\n").unwrap();
        assert_eq!(cfg.input_mode, TimeInputMode::Minutes);
        assert_eq!(cfg.raw_decimals, 1);
        assert_eq!(cfg.default_ratios, "50,30,20");
        assert_eq!(cfg.clock_rounding, ClockRounding::Legacy);
        assert!(cfg.auto_calculate);
        assert_eq!(cfg.clipboard_hold_secs, 10);
    }

    #[test]
    fn test_clipboard_hold_can_be_disabled() {
        let cfg = Config::from_yaml("clipboard_hold_secs: 0\n").unwrap();
        assert_eq!(cfg.clipboard_hold_secs, 0);
    }

    #[test]
    fn test_yaml_roundtrip_of_defaults() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("input_mode: compact"));
        assert!(yaml.contains("clock_rounding: legacy"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_yaml_is_config_error() {
        let err = Config::from_yaml("clock_rounding: sideways\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_keys() {
        let missing = Config::missing_keys("task_label: Job\ncolor: false\n").unwrap();
        assert!(!missing.contains(&"task_label"));
        assert!(!missing.contains(&"color"));
        assert!(missing.contains(&"input_mode"));
        assert_eq!(missing.len(), CONFIG_KEYS.len() - 2);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("rtimesplit_no_such_config.conf");
        std::fs::remove_file(&path).ok();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
