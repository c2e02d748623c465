use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skyrim-weapons-db")]
#[command(version, about = "Build and query a SQLite database of Skyrim weapon data")]
pub struct Cli {
    /// SQLite database path
    #[arg(default_value = "SkyrimWeaponsDB.db")]
    pub db: PathBuf,

    /// Remove an existing database file before starting. Without this,
    /// running twice against the same file fails on the first duplicate
    /// weapon ID.
    #[arg(long)]
    pub fresh: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
