//! Bottleneck Solver - Main entry point

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use bottleneck_solver::app::App;
use bottleneck_solver::cli::{Cli, Commands};
use bottleneck_solver::config::AppConfig;
use bottleneck_solver::explain::{provider_from_config, spawn_explanation, ExplanationRequest};
use bottleneck_solver::report;
use bottleneck_solver::types::ComponentKind;
use bottleneck_solver::{estimate_selection, Catalog};
use strum::IntoEnumIterator;

/// Default filter for a `-v` count
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging.
///
/// `RUST_LOG` overrides the verbosity flag. In TUI mode logs go to the
/// configured log file, or nowhere, so they cannot corrupt the screen.
fn init_tracing(verbose: u8, tui_mode: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    match (tui_mode, log_file) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        (true, None) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .init();
        }
        (false, None) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
    Ok(())
}

/// Load settings from `--config`, or defaults
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Main application entry point
fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    init_tracing(cli.verbose, tui_mode, config.log_file.as_deref())?;
    info!("Bottleneck Solver starting up");

    let catalog = config.load_catalog(cli.catalog.as_deref())?;
    debug!("Catalog ready");

    match cli.command {
        Some(Commands::Calculate {
            cpu,
            gpu,
            resolution,
            json,
            explain,
        }) => run_calculate(&catalog, &config, &cpu, &gpu, &resolution, json, explain),
        Some(Commands::List { kind }) => {
            run_list(&catalog, kind);
            Ok(())
        }
        Some(Commands::ExportCatalog { output }) => {
            catalog.save_to_file(&output)?;
            println!("✓ Catalog written to {:?}", output);
            Ok(())
        }
        Some(Commands::ExportConfig { output }) => {
            config.save_to_file(&output)?;
            println!("✓ Settings written to {:?}", output);
            Ok(())
        }
        Some(Commands::Tui) | None => run_tui(catalog, &config),
    }
}

fn run_calculate(
    catalog: &Catalog,
    config: &AppConfig,
    cpu: &str,
    gpu: &str,
    resolution: &str,
    json: bool,
    explain: bool,
) -> Result<()> {
    let selection = catalog.resolve(cpu, gpu, resolution)?;
    let result = estimate_selection(&selection)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::render_text(&result));
    }

    if explain {
        match provider_from_config(&config.explanation) {
            Some(provider) => {
                let handle = spawn_explanation(provider, ExplanationRequest::from(&result));
                // Failures here never invalidate the printed result
                match handle.wait(Duration::from_secs(config.explanation.timeout_secs)) {
                    Ok(text) => println!("\n{}", text),
                    Err(e) => eprintln!("✗ {}", e),
                }
            }
            None => eprintln!(
                "✗ AI analysis unavailable: set {} or enable explanations in the config",
                config.explanation.api_key_env
            ),
        }
    }

    Ok(())
}

fn run_list(catalog: &Catalog, kind: Option<ComponentKind>) {
    let kinds: Vec<ComponentKind> = match kind {
        Some(kind) => vec![kind],
        None => ComponentKind::iter().collect(),
    };
    let sections: Vec<String> = kinds
        .into_iter()
        .map(|kind| report::render_catalog(catalog, kind))
        .collect();
    println!("{}", sections.join("\n\n"));
}

/// Run the TUI
fn run_tui(catalog: Catalog, config: &AppConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");
    let provider = provider_from_config(&config.explanation);

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(Arc::new(catalog), config, provider);
            app.run(&mut terminal).map_err(anyhow::Error::from)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
