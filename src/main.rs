use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tallydb::cli::{menu, output, CliArgs, Colors, View};
use tallydb::config::Config;
use tallydb::loader::Loader;
use tallydb::{backup, Error, FrequencyDb};

fn main() {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    // RUST_LOG wins; the config file sets the fallback level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run(args, config) {
        error!("fatal: {}", e);
        error!("the session cannot continue without a database");
        std::process::exit(1);
    }
}

fn run(args: CliArgs, config: Config) -> tallydb::Result<()> {
    let input: PathBuf = args
        .input
        .clone()
        .unwrap_or_else(|| config.input.path.clone().into());
    let backup_path: PathBuf = args
        .backup
        .clone()
        .unwrap_or_else(|| config.backup.path.clone().into());
    let backup_enabled = config.backup.enabled && !args.no_backup;

    let view = View {
        colors: Colors::new(config.display.colors && !args.no_color),
        width: args.width.unwrap_or(config.display.width),
        pause: !args.no_pause,
    };
    let pause_ms = if args.no_pause { 0 } else { config.display.pause_ms };

    menu::print_banner(&view);

    // Read every token up front so the progress bar has a total; the
    // database is then populated in a single bulk ingestion.
    info!("reading input from {}", input.display());
    let tokens: Vec<String> = Loader::open(&input)?.collect::<tallydb::Result<_>>()?;
    let total = tokens.len();

    let mut db = FrequencyDb::new();
    let mut current = 0usize;
    let consumed = db.ingest(tokens.into_iter().inspect(|_| {
        current += 1;
        output::print_progress(total, current, pause_ms);
    }))?;
    println!();
    info!("ingested {} tokens into {} distinct items", consumed, db.len());

    if backup_enabled {
        match backup::write_file(&db, &backup_path) {
            Ok(_) => {}
            // The in-memory database is still valid; continue without a
            // backup rather than aborting the session.
            Err(e @ Error::SinkUnavailable { .. }) => {
                warn!("continuing without a backup: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    menu::run(&db, &view)?;
    menu::print_farewell(&view);
    Ok(())
}
