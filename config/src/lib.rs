//! Launcher configuration.
//!
//! Sources, lowest to highest precedence:
//!
//! 1. Built-in defaults ([`LaunchTarget::default`])
//! 2. `~/.timeline-launch/config.toml` (or the file named by `TIMELINE_LAUNCH_CONFIG`)
//! 3. `TIMELINE_LAUNCH_*` environment variables
//!
//! ```toml
//! [launcher]
//! interpreter = "python3"
//! runtime_name = "Python"
//! module = "eventeditor.timeline"
//! manifest = "requirements.txt"
//! pause_on_error = true
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use timeline_launch_core::LaunchTarget;

pub const CONFIG_PATH_ENV: &str = "TIMELINE_LAUNCH_CONFIG";
pub const INTERPRETER_ENV: &str = "TIMELINE_LAUNCH_INTERPRETER";
pub const MODULE_ENV: &str = "TIMELINE_LAUNCH_MODULE";
pub const MANIFEST_ENV: &str = "TIMELINE_LAUNCH_MANIFEST";
pub const NO_PAUSE_ENV: &str = "TIMELINE_LAUNCH_NO_PAUSE";

#[derive(Debug, Default, Deserialize)]
pub struct LaunchConfig {
    pub launcher: Option<LauncherSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LauncherSection {
    /// Single interpreter, tried before `interpreters`.
    pub interpreter: Option<String>,
    #[serde(default)]
    pub interpreters: Vec<String>,
    /// Runtime name shown when no interpreter is found.
    pub runtime_name: Option<String>,
    pub module: Option<String>,
    pub manifest: Option<String>,
    /// Wait for Enter after a failure. Default: true.
    pub pause_on_error: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path.as_path(),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub target: LaunchTarget,
    pub pause_on_error: bool,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            target: LaunchTarget::default(),
            pause_on_error: true,
        }
    }
}

impl LaunchConfig {
    /// Load the config file, if one exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }
}

/// Merge the optional file config with the process environment.
#[must_use]
pub fn resolve(config: Option<&LaunchConfig>) -> LaunchSettings {
    resolve_with(config, |key| env::var(key).ok())
}

/// Merge with an explicit environment lookup.
pub fn resolve_with<F>(config: Option<&LaunchConfig>, lookup: F) -> LaunchSettings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = LaunchSettings::default();

    if let Some(section) = config.and_then(|cfg| cfg.launcher.as_ref()) {
        let candidates = section
            .interpreter
            .iter()
            .chain(section.interpreters.iter())
            .cloned();
        let mut target = settings.target.with_interpreters(candidates);
        if let Some(runtime_name) = &section.runtime_name {
            target = target.with_runtime_name(runtime_name.as_str());
        }
        if let Some(module) = &section.module {
            target = target.with_module(module.as_str());
        }
        if let Some(manifest) = &section.manifest {
            target = target.with_manifest(manifest.as_str());
        }
        settings.target = target;
        if let Some(pause) = section.pause_on_error {
            settings.pause_on_error = pause;
        }
    }

    if let Some(interpreter) = lookup(INTERPRETER_ENV) {
        settings.target = settings.target.with_interpreters([interpreter]);
    }
    if let Some(module) = lookup(MODULE_ENV) {
        settings.target = settings.target.with_module(module);
    }
    if let Some(manifest) = lookup(MANIFEST_ENV) {
        settings.target = settings.target.with_manifest(manifest);
    }
    if lookup(NO_PAUSE_ENV).is_some_and(|raw| is_truthy(&raw)) {
        settings.pause_on_error = false;
    }

    settings
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".timeline-launch").join("config.toml"))
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
