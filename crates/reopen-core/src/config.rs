use std::path::PathBuf;

use crate::error::{ReopenError, Result};


pub const STORE_ENV: &str = "REOPEN_STORE";
pub const EDITOR_ENV: &str = "REOPEN_EDITOR";
pub const SYSTEM_EDITOR_ENV: &str = "EDITOR";

const DEFAULT_STORE_FILE: &str = ".reopen.json";
const FALLBACK_EDITOR: &str = "vi";

/// Resolved runtime settings. Both values are injected into the store and
/// editor layers rather than read ambiently there, so tests can point at
/// temporary files and harmless commands.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub editor: String,
}

impl Config {
    /// Resolves settings from explicit overrides and the environment.
    /// Store path: override, then `REOPEN_STORE`, then `~/.reopen.json`.
    /// Editor: override, then `REOPEN_EDITOR`, then `EDITOR`, then `vi`.
    pub fn from_env(
        store_override: Option<PathBuf>,
        editor_override: Option<String>,
    ) -> Result<Self> {
        let store_path = resolve_store_path(
            store_override,
            std::env::var_os(STORE_ENV).map(PathBuf::from),
            home_dir(),
        )?;
        let editor = resolve_editor(
            editor_override,
            std::env::var(EDITOR_ENV).ok(),
            std::env::var(SYSTEM_EDITOR_ENV).ok(),
        );
        Ok(Self { store_path, editor })
    }
}

#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve_store_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = env {
        return Ok(path);
    }
    home.map(|dir| dir.join(DEFAULT_STORE_FILE)).ok_or_else(|| {
        ReopenError::InvalidPath(format!(
            "cannot resolve a home directory for the default store; set {STORE_ENV} or pass --store"
        ))
    })
}

fn resolve_editor(
    flag: Option<String>,
    reopen_env: Option<String>,
    system_env: Option<String>,
) -> String {
    non_empty(flag)
        .or_else(|| non_empty(reopen_env))
        .or_else(|| non_empty(system_env))
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
