//! Driver settings, read from the environment.

use std::path::PathBuf;

use emporium_core::{DomainError, DomainResult};
use emporium_observability::LogFormat;

pub const DAYS_VAR: &str = "EMPORIUM_DAYS";
pub const ITEMS_VAR: &str = "EMPORIUM_ITEMS";
pub const LOG_FORMAT_VAR: &str = "EMPORIUM_LOG_FORMAT";

pub const DEFAULT_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Last day rendered; the report covers days `0..=days`.
    pub days: u32,
    /// JSON item list to use instead of the standard fixture.
    pub items_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            items_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut settings = Self::default();

        if let Some(raw) = lookup(DAYS_VAR) {
            settings.days = raw.trim().parse().map_err(|e| {
                DomainError::validation(format!("{DAYS_VAR}={raw:?} is not a day count: {e}"))
            })?;
        }

        if let Some(raw) = lookup(ITEMS_VAR).filter(|v| !v.trim().is_empty()) {
            settings.items_path = Some(PathBuf::from(raw));
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            settings.log_format = raw
                .parse()
                .map_err(|e: String| DomainError::validation(format!("{LOG_FORMAT_VAR}: {e}")))?;
        }

        Ok(settings)
    }
}
