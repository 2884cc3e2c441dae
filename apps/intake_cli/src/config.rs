use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "intake.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub email_directory: Vec<String>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_directory: [
                "john.doe@example.com",
                "jane.smith@example.com",
                "admin@company.com",
                "support@company.com",
                "javier.ramirez@email.com",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    email_directory: Option<Vec<String>>,
    log_filter: Option<String>,
}

/// Defaults, then the config file, then environment overrides.
///
/// Without an explicit `path` a missing `intake.toml` is skipped.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    if required || path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(directory) = file_cfg.email_directory {
        settings.email_directory = directory;
    }
    if let Some(filter) = file_cfg.log_filter {
        settings.log_filter = filter;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("INTAKE_DIRECTORY") {
        settings.email_directory = parse_directory(&v);
    }
    if let Some(v) = lookup("APP__DIRECTORY") {
        settings.email_directory = parse_directory(&v);
    }

    if let Some(v) = lookup("APP__LOG_FILTER") {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }
}

fn parse_directory(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
