use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use reopen_core::config::home_dir;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Expands a leading `~` against the home directory and makes the result
/// absolute against the current directory. The core index only ever sees
/// the expanded absolute form.
pub(super) fn expand_path(raw: &str) -> Result<String> {
    let expanded = expand_home(raw, home_dir());
    let absolute = std::path::absolute(&expanded)?;
    absolute
        .to_str()
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("path is not valid UTF-8: {}", absolute.display()))
}

pub(super) fn expand_home(raw: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return home;
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return home.join(rest);
    }
    PathBuf::from(raw)
}
