// AgentDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Draft restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use agentdeck::app;
pub use agentdeck::core;
pub use agentdeck::platform;
pub use agentdeck::ui;
pub use agentdeck::util;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// AgentDeck - a dashboard of simulated marketing agents.
///
/// Each panel collects a short brief and answers with a canned example
/// response after a simulated delay. Nothing is sent over the network.
#[derive(Parser, Debug)]
#[command(name = "AgentDeck", version, about)]
struct Cli {
    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Simulated response latency in milliseconds (overrides config.toml).
    #[arg(short = 'l', long = "latency-ms")]
    latency_ms: Option<u64>,

    /// Start with empty forms instead of restoring saved drafts.
    #[arg(long = "no-restore")]
    no_restore: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so [logging] can choose the level.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (config, mut warnings) = platform::config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "AgentDeck starting"
    );
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // CLI latency overrides config, within the same bound.
    let mut latency_ms = config.latency_ms;
    if let Some(ms) = cli.latency_ms {
        if ms <= util::constants::MAX_LATENCY_MS {
            latency_ms = ms;
        } else {
            let msg = format!(
                "--latency-ms {ms} exceeds the maximum of {} ms; using {latency_ms} ms.",
                util::constants::MAX_LATENCY_MS
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
        }
    }

    let mut state = app::state::AppState::new(Duration::from_millis(latency_ms), cli.debug);
    state.dark_mode = config.dark_mode;
    state.font_size = config.font_size;
    state.show_warnings = !warnings.is_empty();
    state.warnings = warnings;

    let session_path = app::session::session_path(&platform_paths.data_dir);
    if config.restore_drafts && !cli.no_restore {
        if let Some(data) = app::session::load(&session_path) {
            state.restore_drafts(data.drafts);
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::AgentDeckApp::new(state, Some(session_path))))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch AgentDeck GUI: {e}");
        std::process::exit(1);
    }
}
