use clap::Parser;

use super::*;

#[test]
fn open_parses_path_with_defaults() {
    let cli = Cli::try_parse_from(["reopen", "open", "notes.md"]).expect("parse");
    match cli.command {
        Commands::Open(OpenArgs { path, editor, pick }) => {
            assert_eq!(path, "notes.md");
            assert!(editor.is_none());
            assert!(!pick);
        }
        _ => panic!("expected open command"),
    }
    assert!(cli.store.is_none());
}

#[test]
fn open_parses_editor_and_pick_flags() {
    let cli = Cli::try_parse_from(["reopen", "open", "notes.md", "--editor", "hx", "--pick"])
        .expect("parse");
    match cli.command {
        Commands::Open(OpenArgs { path, editor, pick }) => {
            assert_eq!(path, "notes.md");
            assert_eq!(editor.as_deref(), Some("hx"));
            assert!(pick);
        }
        _ => panic!("expected open command"),
    }
}

#[test]
fn store_flag_is_global() {
    let cli = Cli::try_parse_from(["reopen", "touch", "notes.md", "--store", "/tmp/idx.json"])
        .expect("parse");
    assert_eq!(cli.store, Some(PathBuf::from("/tmp/idx.json")));
    match cli.command {
        Commands::Touch(TouchArgs { path }) => assert_eq!(path, "notes.md"),
        _ => panic!("expected touch command"),
    }
}

#[test]
fn matches_parses_basename() {
    let cli = Cli::try_parse_from(["reopen", "matches", "x.txt"]).expect("parse");
    match cli.command {
        Commands::Matches(MatchesArgs { name }) => assert_eq!(name, "x.txt"),
        _ => panic!("expected matches command"),
    }
}

#[test]
fn open_requires_a_path() {
    let parsed = Cli::try_parse_from(["reopen", "open"]);
    assert!(parsed.is_err(), "open without a path must be rejected");
}
