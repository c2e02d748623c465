use anyhow::{Context, Result};
use skyrim_weapons_db::{cli::Cli, patch, report, seed, store::Store};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let start = Instant::now();

    if cli.fresh && cli.db.exists() {
        std::fs::remove_file(&cli.db).context("Failed to remove existing database")?;
    }

    let store = Store::open(&cli.db)?;
    store.create_tables()?;

    let record_count = seed::load_all(&store)?;
    println!();

    let patched = patch::apply_all(&store)?;

    report::run_all(&store)?;

    let elapsed = start.elapsed();
    println!(
        "Created {:?} ({} records, {} patched) in {:.1}s",
        cli.db,
        record_count,
        patched,
        elapsed.as_secs_f64()
    );

    Ok(())
}
