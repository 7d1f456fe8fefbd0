//! runboard - A terminal dashboard for model-evaluation test runs
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use tracing::info;

use runboard::headless::{run_headless, HeadlessQuery};
use runboard_app::config::{self, PollInterval, Settings};
use runboard_app::{AppState, RouteContext, SortOption};
use runboard_client::HttpRunService;
use runboard_core::DisplayStatus;

/// runboard - Monitor model-evaluation test runs from the terminal
#[derive(Parser, Debug)]
#[command(name = "runboard", version)]
#[command(about = "A terminal dashboard for monitoring model-evaluation test runs", long_about = None)]
struct Args {
    /// Base URL of the test-run API (overrides config.toml)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Configuration directory containing config.toml
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Project the dashboard was opened from
    #[arg(long, value_name = "ID")]
    project_id: Option<String>,

    /// Project flow the dashboard was opened from
    #[arg(long, value_name = "NAME")]
    flow: Option<String>,

    /// Auto-refresh interval in minutes (1, 5, 10 or 15)
    #[arg(long, value_name = "MIN", value_parser = parse_interval)]
    interval: Option<PollInterval>,

    /// Fetch once, print the requested page as JSON and exit
    #[arg(long)]
    headless: bool,

    /// Only show runs with this status (repeatable, headless only)
    #[arg(long, value_name = "STATUS", value_parser = parse_status)]
    status: Vec<DisplayStatus>,

    /// Only show runs of this algorithm group id (headless only)
    #[arg(long, value_name = "GID")]
    algorithm: Option<String>,

    /// Sort by algorithm name (headless only)
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Page to print, starting at 1 (headless only)
    #[arg(long, value_name = "N", default_value_t = 1)]
    page: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOption {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Asc => SortOption::NameAscending,
            SortArg::Desc => SortOption::NameDescending,
        }
    }
}

fn parse_interval(s: &str) -> std::result::Result<PollInterval, String> {
    let minutes: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of minutes", s))?;
    PollInterval::from_minutes(minutes)
        .ok_or_else(|| format!("unsupported interval {} (choose 1, 5, 10 or 15)", minutes))
}

fn parse_status(s: &str) -> std::result::Result<DisplayStatus, String> {
    DisplayStatus::parse(s).ok_or_else(|| {
        format!(
            "unknown status '{}' (choose PENDING, RUNNING, SUCCESS, ERROR or CANCELLED)",
            s
        )
    })
}

/// Config file first, then CLI overrides
fn resolve_settings(args: &Args) -> Settings {
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => {
            let dir = config::default_config_dir();
            if let Err(e) = config::init_config_dir(&dir) {
                tracing::warn!("Could not create default config: {}", e);
            }
            dir
        }
    };

    let mut settings = config::load_settings(&config_dir);
    if let Some(base_url) = &args.base_url {
        settings.server.base_url = base_url.clone();
    }
    if let Some(interval) = args.interval {
        settings.polling.interval_minutes = interval.minutes();
    }
    settings
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    runboard_core::logging::init()?;

    let settings = resolve_settings(&args);
    info!("Using test-run API at {}", settings.server.base_url);

    let service = HttpRunService::new(
        &settings.server.base_url,
        settings.server.request_timeout(),
    )?;

    if args.headless {
        let query = HeadlessQuery {
            statuses: args.status.clone(),
            algorithm: args.algorithm.clone(),
            sort: args.sort.map(SortOption::from).unwrap_or_default(),
            page: args.page,
        };
        let event = run_headless(&service, &query).await;
        event.emit();
        if event.is_failure() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let route = RouteContext::new(args.project_id.clone(), args.flow.clone());
    let state = AppState::with_settings(settings, route);
    runboard_tui::run(state, Arc::new(service)).await?;

    info!("runboard exiting");
    Ok(())
}
