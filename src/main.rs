//! Traffic Dash - real-time traffic signal monitoring
//!
//! Polls the traffic backend and displays:
//! - Signal status per intersection
//! - Queue lengths
//! - RL agent reward and reward history
//! - System alerts
//!
//! Usage:
//!   traffic-dash [OPTIONS]
//!
//! Examples:
//!   traffic-dash                                          # Poll http://127.0.0.1:5000/detect
//!   traffic-dash --endpoint http://10.0.0.5:5000/detect
//!   traffic-dash --interval 500                           # Faster polling (ms)
//!   traffic-dash --config dash.toml

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::{fs::OpenOptions, path::PathBuf, sync::Mutex, time::Duration};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use traffic_dash_core::{
    App, ConfigOverrides, DashConfig, HttpSnapshotSource, KeyOutcome, Poller, PollerHandle,
    TerminalManager,
};

/// UI redraw period, independent of the poll interval
const FRAME_PERIOD: Duration = Duration::from_millis(100);

/// Dashboard CLI arguments
#[derive(Parser)]
#[command(name = "traffic-dash")]
#[command(about = "Real-time terminal dashboard for an adaptive traffic signal backend")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "TRAFFIC_DASH_CONFIG")]
    config: Option<PathBuf>,

    /// Snapshot endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Poll interval in milliseconds
    #[arg(long)]
    interval: Option<u64>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log file (the terminal is owned by the dashboard)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            poll_interval_ms: self.interval,
            request_timeout_ms: self.timeout,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

/// Initialize logging (to file, not stderr)
fn init_logging(config: &DashConfig) -> Result<()> {
    // log_level is one of the validated lowercase names
    let level = &config.log_level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("traffic_dash={level},traffic_dash_core={level}"))
    });

    let log_path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = DashConfig::load(args.config.as_deref())
        .and_then(|config| config.apply_overrides(args.overrides()))
        .context("Invalid configuration")?;

    init_logging(&config)?;

    info!("Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Configuration: {:?}", config);

    let source = HttpSnapshotSource::new(&config.endpoint, config.request_timeout())
        .context("Failed to build HTTP client")?;
    let poller = Poller::new(source, config.poll_interval()).spawn();

    let mut app = App::new(poller.subscribe(), config.endpoint.clone());

    let result = {
        let mut terminal = TerminalManager::new()
            .context("Failed to initialize terminal")?;
        run_app(&mut terminal, &mut app, &poller)
    };

    poller.shutdown().await;

    if let Err(err) = result {
        error!("Error: {:?}", err);
        return Err(err);
    }

    info!("Dashboard exiting cleanly");
    Ok(())
}

fn run_app(terminal: &mut TerminalManager, app: &mut App, poller: &PollerHandle) -> Result<()> {
    loop {
        terminal.terminal_mut().draw(|frame| app.draw(frame))?;

        if event::poll(FRAME_PERIOD)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Refresh => poller.refresh_now(),
                    KeyOutcome::Continue => {}
                }
            }
        }
    }
}
