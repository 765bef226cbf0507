use std::env;
use std::fs;

use tracing::{error, info};

use fpl_snapshot::error::SnapshotError;
use fpl_snapshot::fpl::FplClient;
use fpl_snapshot::store::SnapshotStore;
use fpl_snapshot::{compare, report};

const DATA_DIR: &str = "data";

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();

    if let Err(e) = run() {
        error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SnapshotError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let store = SnapshotStore::new(DATA_DIR);

    match args.first().map(String::as_str) {
        Some("collect") => collect(&store),
        Some("list") => list(&store),
        Some("compare") => {
            let (Some(older), Some(newer)) = (args.get(1), args.get(2)) else {
                usage();
                return Ok(());
            };
            let save = args.iter().any(|a| a == "--save");
            run_compare(&store, older, newer, save)
        }
        _ => {
            usage();
            Ok(())
        }
    }
}

fn collect(store: &SnapshotStore) -> Result<(), SnapshotError> {
    let snapshot = FplClient::new().collect()?;
    let saved = store.save(&snapshot, chrono::Utc::now())?;
    println!("Saved snapshot: {}", saved.json.display());
    println!("Saved players CSV: {}", saved.csv.display());
    Ok(())
}

fn list(store: &SnapshotStore) -> Result<(), SnapshotError> {
    let snapshots = store.find_snapshots()?;
    if snapshots.is_empty() {
        println!("No snapshots found in {}/", DATA_DIR);
        return Ok(());
    }
    println!("Available snapshots:");
    for (date, path) in snapshots {
        let size_mb = fs::metadata(&path)?.len() as f64 / (1024.0 * 1024.0);
        println!("  {} ({:.1} MB)", date, size_mb);
    }
    Ok(())
}

fn run_compare(
    store: &SnapshotStore,
    older: &str,
    newer: &str,
    save: bool,
) -> Result<(), SnapshotError> {
    let before = store.load(older)?;
    let after = store.load(newer)?;

    let result = compare::compare(&before, &after);
    if !result.diagnostics.skipped_players.is_empty()
        || !result.diagnostics.skipped_fixtures.is_empty()
    {
        info!(
            skipped_players = result.diagnostics.skipped_players.len(),
            skipped_fixtures = result.diagnostics.skipped_fixtures.len(),
            "Skipped malformed records during comparison"
        );
    }

    let rendered = report::render(&result, older, newer);
    println!("{}", rendered);

    if save {
        let filename = format!("comparison_{}_to_{}.txt", older, newer);
        fs::write(&filename, &rendered)?;
        println!("Report saved to: {}", filename);
    }
    Ok(())
}

fn usage() {
    eprintln!("Usage:");
    eprintln!("  fpl-snapshot collect                          fetch and archive a snapshot");
    eprintln!("  fpl-snapshot list                             list archived snapshot dates");
    eprintln!("  fpl-snapshot compare <older> <newer> [--save] diff two snapshot dates");
}
