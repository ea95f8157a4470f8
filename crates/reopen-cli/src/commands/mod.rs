use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use reopen_core::{Config, Record, RecordStore, editor, matcher, select};

use crate::cli::{Cli, Commands};

mod chooser;
mod support;


use self::chooser::StdinChooser;
use self::support::{expand_path, print_json};

pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Open(args) => {
            let config = Config::from_env(cli.store, args.editor)
                .context("failed to resolve configuration")?;
            run_open(&config, &args.path, args.pick)
        }
        Commands::Touch(args) => {
            let config =
                Config::from_env(cli.store, None).context("failed to resolve configuration")?;
            run_touch(&config, &args.path)
        }
        Commands::Matches(args) => {
            let config =
                Config::from_env(cli.store, None).context("failed to resolve configuration")?;
            run_matches(&config, &args.name)
        }
    }
}

fn run_open(config: &Config, raw_path: &str, pick: bool) -> Result<()> {
    let target = resolve_open_target(config, raw_path, pick, &mut StdinChooser)?;
    editor::open_in_editor(&config.editor, &target)
        .with_context(|| format!("failed to open {target}"))?;
    Ok(())
}

/// Touch-then-search flow: the resolved path is recorded first, so it is
/// always part of the candidate set its own search produces.
fn resolve_open_target(
    config: &Config,
    raw_path: &str,
    pick: bool,
    chooser: &mut dyn reopen_core::Chooser,
) -> Result<String> {
    let store = RecordStore::new(&config.store_path);
    let resolved = expand_path(raw_path)?;

    // Validate before the touch so a nameless path never lands in the index.
    let name = Path::new(&resolved)
        .file_name()
        .and_then(|value| value.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("path has no file name to match on: {resolved}"))?;

    let now = Utc::now();
    store
        .update(Record::new(resolved.clone(), now), now)
        .context("failed to update the file index")?;

    let matches = matcher::search(&store, &name).context("failed to search the file index")?;

    let target = match matches.len() {
        // No live candidate (the file may not exist yet): fall back to the
        // path as given and let the editor complain if it cannot open it.
        0 => resolved,
        1 => matches[0].path.clone(),
        _ if pick => match select::pick_interactive(&matches, chooser)? {
            Some(record) => record.path.clone(),
            None => anyhow::bail!("selection cancelled"),
        },
        _ => select::best_match(&matches, Utc::now())
            .map(|record| record.path.clone())
            .unwrap_or(resolved),
    };
    Ok(target)
}

fn run_touch(config: &Config, raw_path: &str) -> Result<()> {
    let store = RecordStore::new(&config.store_path);
    let resolved = expand_path(raw_path)?;
    let now = Utc::now();
    store
        .update(Record::new(resolved, now), now)
        .context("failed to update the file index")?;
    Ok(())
}

fn run_matches(config: &Config, name: &str) -> Result<()> {
    let store = RecordStore::new(&config.store_path);
    let matches = matcher::search(&store, name).context("failed to search the file index")?;
    print_json(&select::rank(matches, Utc::now()))
}
