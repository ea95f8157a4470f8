use std::io::{self, BufRead, Write};

use reopen_core::{Chooser, Result};

/// Numbered prompt over the invoking terminal. The candidate list goes to
/// stderr so stdout stays clean for scripted use; an empty, non-numeric,
/// or out-of-range reply counts as a cancelled pick.
pub(super) struct StdinChooser;

impl Chooser for StdinChooser {
    fn choose(&mut self, paths: &[String]) -> Result<Option<usize>> {
        let mut stderr = io::stderr().lock();
        for (index, path) in paths.iter().enumerate() {
            writeln!(stderr, "{}. {path}", index + 1)?;
        }
        write!(stderr, "select [1-{}]: ", paths.len())?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let Ok(number) = line.trim().parse::<usize>() else {
            return Ok(None);
        };
        if number == 0 || number > paths.len() {
            return Ok(None);
        }
        Ok(Some(number - 1))
    }
}
