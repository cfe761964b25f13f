//! Runtime configuration for user-adjustable constants
//!
//! `RuntimeConfig` carries `Option<T>` overrides for the compiled constants.
//! Accessor methods fall back to the constants when a field is `None`.
//! Overrides come from an optional TOML file (path in `MINDBAND_CONFIG`)
//! and then from individual environment variables, which win last.

use std::path::{Path, PathBuf};

use mindband_contracts::{EasingKind, Transition};
use serde::Deserialize;
use thiserror::Error;

use crate::domains::carousel::types::ResizePolicy;
use crate::domains::carousel::viewport::{Breakpoint, Breakpoints};
use crate::infra::constants::carousel::{breakpoints, transition};

pub const CONFIG_PATH_VAR: &str = "MINDBAND_CONFIG";
pub const TRANSITION_MS_VAR: &str = "MINDBAND_TRANSITION_MS";
pub const RESIZE_POLICY_VAR: &str = "MINDBAND_RESIZE_POLICY";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// On-disk layout of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    carousel: CarouselSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CarouselSection {
    transition_ms: Option<u64>,
    easing: Option<EasingKind>,
    resize_policy: Option<ResizePolicy>,
    breakpoints: Option<Vec<Breakpoint>>,
    wide_visible: Option<usize>,
}

/// Runtime configuration with optional overrides for constants.
/// Fields are None by default, falling back to compiled constants.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Shift duration after an arrow click (ms)
    pub transition_ms: Option<u64>,
    /// Shift easing curve
    pub easing: Option<EasingKind>,
    /// What happens to the carousel position on resize
    pub resize_policy: Option<ResizePolicy>,
    /// Replacement breakpoint table
    pub breakpoints: Option<Vec<Breakpoint>>,
    /// Visible count beyond the last breakpoint
    pub wide_visible: Option<usize>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `MINDBAND_CONFIG` (if set) and the process environment.
    pub fn load() -> Result<Self, ConfigLoadError> {
        let path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
        Self::load_with(path.as_deref(), |name| std::env::var(name).ok())
    }

    /// Load from an explicit file (if any) and a variable lookup.
    pub fn load_with<F>(
        path: Option<&Path>,
        lookup: F,
    ) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let file: ConfigFile =
            toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from(file);
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML text; used by tests and embedders that ship their own file.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigLoadError> {
        let file: ConfigFile =
            toml::from_str(raw).map_err(|source| ConfigLoadError::Parse {
                path: PathBuf::from("<inline>"),
                source,
            })?;
        let config = Self::from(file);
        config.validate()?;
        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TRANSITION_MS_VAR)
            && !raw.trim().is_empty()
        {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                ConfigLoadError::Invalid(format!(
                    "{TRANSITION_MS_VAR} must be a whole number of milliseconds, got '{raw}'"
                ))
            })?;
            self.transition_ms = Some(ms);
        }

        if let Some(raw) = lookup(RESIZE_POLICY_VAR)
            && !raw.trim().is_empty()
        {
            let policy = raw
                .parse::<ResizePolicy>()
                .map_err(ConfigLoadError::Invalid)?;
            self.resize_policy = Some(policy);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.transition_ms() > transition::MAX_DURATION_MS {
            return Err(ConfigLoadError::Invalid(format!(
                "transition_ms {} exceeds {} ms",
                self.transition_ms(),
                transition::MAX_DURATION_MS
            )));
        }
        Breakpoints::new(self.breakpoint_rows(), self.wide_visible())
            .map(|_| ())
            .map_err(ConfigLoadError::Invalid)
    }

    // ========== CAROUSEL ACCESSORS ==========

    pub fn transition_ms(&self) -> u64 {
        self.transition_ms.unwrap_or(transition::DURATION_MS)
    }

    pub fn easing(&self) -> EasingKind {
        self.easing.unwrap_or_else(|| {
            transition::EASING.parse().unwrap_or_default()
        })
    }

    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy.unwrap_or_default()
    }

    pub fn wide_visible(&self) -> usize {
        self.wide_visible.unwrap_or(breakpoints::WIDE_VISIBLE)
    }

    fn breakpoint_rows(&self) -> Vec<Breakpoint> {
        match &self.breakpoints {
            Some(rows) => rows.clone(),
            None => breakpoints::TABLE
                .iter()
                .map(|&(max_width, visible)| Breakpoint { max_width, visible })
                .collect(),
        }
    }

    /// Breakpoint table in effect. Falls back to the compiled table if the
    /// overrides were never validated and turn out to be unusable.
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints::new(self.breakpoint_rows(), self.wide_visible())
            .unwrap_or_default()
    }

    /// Transition used for arrow navigation.
    pub fn navigation_transition(&self) -> Transition {
        Transition::animated(self.transition_ms(), self.easing())
    }
}

impl From<ConfigFile> for RuntimeConfig {
    fn from(file: ConfigFile) -> Self {
        let CarouselSection {
            transition_ms,
            easing,
            resize_policy,
            breakpoints,
            wide_visible,
        } = file.carousel;
        Self {
            transition_ms,
            easing,
            resize_policy,
            breakpoints,
            wide_visible,
        }
    }
}
