use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use crate::shell::parser::MAX_ARG_LEN;

pub const DEFAULT_PROMPT: &str = "minish$ ";

/// Everything the shell core reads from the outside world.
///
/// `PATH` and `HOME` are captured once here and injected into the resolver
/// and the `cd` builtin, so the core never reads the process environment.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub path: Option<String>,
    pub home: Option<String>,
    pub prompt: String,
    pub require_executable: bool,
    pub max_arg_len: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            path: None,
            home: None,
            prompt: DEFAULT_PROMPT.to_string(),
            require_executable: false,
            max_arg_len: MAX_ARG_LEN,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self {
            path: env::var("PATH").ok(),
            home: env::var("HOME").ok(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[cfg(test)]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    fn apply(&mut self, settings: Settings) {
        if let Some(prompt) = settings.prompt {
            self.prompt = prompt;
        }
        if let Some(strict) = settings.require_executable {
            self.require_executable = strict;
        }
        if let Some(len) = settings.max_arg_len {
            self.max_arg_len = len;
        }
    }
}

/// Optional settings file, e.g. `~/.config/minish.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub prompt: Option<String>,
    pub require_executable: Option<bool>,
    pub max_arg_len: Option<usize>,
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content).context("Failed to parse settings")?;
    if settings.max_arg_len == Some(0) {
        bail!("max_arg_len must be greater than zero");
    }
    Ok(settings)
}

/// Environment snapshot layered with the settings file, if any.
pub fn load_config(settings_path: Option<&Path>) -> Result<ShellConfig> {
    let mut config = ShellConfig::from_env();

    if let Some(path) = settings_path {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = parse_settings(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        config.apply(settings);
    }

    Ok(config)
}
