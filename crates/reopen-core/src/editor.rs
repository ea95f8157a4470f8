use std::process::Command;

use crate::error::{ReopenError, Result};


/// Launches `editor` on `path` attached to the invoking process's standard
/// streams and waits for it to exit. A spawn failure or non-zero exit is
/// surfaced; the caller should not assume the file was edited.
pub fn open_in_editor(editor: &str, path: &str) -> Result<()> {
    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(|err| ReopenError::Editor(format!("failed to launch {editor}: {err}")))?;

    if !status.success() {
        return Err(ReopenError::Editor(format!("{editor} exited with {status}")));
    }
    Ok(())
}
