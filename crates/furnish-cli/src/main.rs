//! Furnish layout checker entry point

use std::process::ExitCode;

use clap::Parser;
use furnish_cli::cli::Cli;
use furnish_cli::config::ConfigManager;
use furnish_cli::report::{audit_layout, problem_count};
use furnish_cli::AppContext;
use furnish_core::{import_room_json, share_link};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "furnish_cli=debug,furnish_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    tracing::debug!("Using config {:?}", manager.config_file_path());
    cli.apply_overrides(&mut manager);
    let ctx = AppContext::new(manager);

    if cli.save_config {
        ctx.save_config()?;
    }

    if let Some(path) = &cli.room {
        let json = std::fs::read_to_string(path)?;
        ctx.open_room(import_room_json(&json)?);
    }

    if ctx.snap_enabled() {
        ctx.snap_layout();
    }

    let store = ctx.store.lock();
    let room = store.current_room();
    println!(
        "{} ({} x {} x {} m), {} item(s)",
        room.name,
        room.dimensions.width,
        room.dimensions.length,
        room.dimensions.height,
        room.placed_furniture.len()
    );

    let reports = audit_layout(&store);
    for report in &reports {
        println!("  {}", report);
    }

    if let Some(base_url) = &cli.share {
        println!("{}", share_link(base_url, room)?);
    }

    let problems = problem_count(&reports);
    if problems > 0 {
        tracing::warn!("{} item(s) need attention", problems);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
