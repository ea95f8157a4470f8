use clap::Args;

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// File to open; a leading `~` expands against the home directory.
    pub path: String,
    /// Editor command (defaults to $REOPEN_EDITOR, then $EDITOR, then vi).
    #[arg(long)]
    pub editor: Option<String>,
    /// Choose among candidates interactively instead of taking the highest
    /// frecency weight.
    #[arg(long, default_value_t = false)]
    pub pick: bool,
}

#[derive(Debug, Args)]
pub struct TouchArgs {
    /// File to record; a leading `~` expands against the home directory.
    pub path: String,
}

#[derive(Debug, Args)]
pub struct MatchesArgs {
    /// Basename to look up (exact, case-sensitive).
    pub name: String,
}
