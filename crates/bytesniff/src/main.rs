//! bytesniff - identify file formats from their magic-number prefixes
//!
//! Usage:
//!   bytesniff <files>...              Identify each file
//!   bytesniff --json <files>...       Machine-readable output
//!   bytesniff --catalog extra.json    Merge a user catalog over the builtin one
//!   bytesniff list                    List the known signatures

use anyhow::{Context, Result};
use bytesniff_magic::{builtin, Catalog};
use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bytesniff")]
#[command(about = "Identify file formats from their magic-number prefixes", long_about = None)]
#[command(version)]
struct Cli {
    /// Files to identify
    files: Vec<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Merge an extra signature catalog (JSON) over the builtin one
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known signatures and the required prefix length
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.quiet, cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Some(Commands::List) => list_signatures(&catalog),
        None => identify_files(&catalog, &cli.files, cli.json),
    }

    Ok(())
}

fn init_logging(quiet: bool, verbose: u8) {
    let level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    if let Err(e) = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .try_init()
    {
        eprintln!("failed to setup logger: {e}");
    }
}

/// Build the working catalog: the builtin one, with the user catalog (if
/// any) merged over it so its entries win on exact pattern collisions.
fn load_catalog(extra: Option<&Path>) -> Result<Catalog> {
    let mut catalog = builtin::catalog();

    if let Some(path) = extra {
        let user = Catalog::load_json(path)
            .with_context(|| format!("failed to load catalog: {}", path.display()))?;
        log::info!(
            "merging {} signature(s) from {}",
            user.len(),
            path.display()
        );
        catalog.merge(&user);
    }

    Ok(catalog)
}

fn list_signatures(catalog: &Catalog) {
    let detector = catalog.detector();

    println!("Known signatures ({} total)", catalog.len());
    println!("{}", "=".repeat(60));
    println!("{:<10} {:<26} {}", "Kind", "Name", "Pattern");
    println!("{}", "-".repeat(60));

    for signature in catalog.signatures() {
        println!(
            "{:<10?} {:<26} {}",
            signature.kind,
            signature.kind.name(),
            signature
        );
    }

    println!();
    println!(
        "Reading the first {} bytes of a file is enough to identify any of these.",
        detector.max_prefix_len()
    );
}

fn identify_files(catalog: &Catalog, files: &[PathBuf], json: bool) {
    let detector = catalog.detector();
    log::debug!(
        "detector ready: {} patterns, {}-byte prefix window",
        detector.len(),
        detector.max_prefix_len()
    );

    let mut results = Vec::new();

    for path in files {
        let kind = match read_prefix(path, detector.max_prefix_len()) {
            Ok(prefix) => detector.detect(&prefix),
            Err(e) => {
                log::warn!("{}: {e:#}", path.display());
                None
            }
        };
        results.push((path, kind));
    }

    if json {
        print_json(&results);
    } else {
        for (path, kind) in &results {
            let label = kind.map_or("unknown", |k| k.name());
            println!("{}: {}", path.display(), label);
        }
    }
}

/// Read up to `len` leading bytes of a file; shorter files yield what
/// they have.
fn read_prefix(path: &Path, len: usize) -> Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("can't open {}", path.display()))?;

    let mut prefix = Vec::with_capacity(len);
    file.take(len as u64)
        .read_to_end(&mut prefix)
        .with_context(|| format!("can't read {}", path.display()))?;

    Ok(prefix)
}

fn print_json(results: &[(&PathBuf, Option<bytesniff_magic::FileKind>)]) {
    let entries: Vec<serde_json::Value> = results
        .iter()
        .map(|(path, kind)| match kind {
            Some(kind) => serde_json::json!({
                "path": path.display().to_string(),
                "kind": kind,
                "name": kind.name(),
            }),
            None => serde_json::json!({
                "path": path.display().to_string(),
                "kind": serde_json::Value::Null,
                "name": "unknown",
            }),
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Array(entries))
            .expect("JSON output is always serializable")
    );
}
