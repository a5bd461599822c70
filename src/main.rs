//! Aid log administration - Entry Point

use aidlog::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
};
use aidlog::controller::AidLifecycleController;
use aidlog::model::AppError;
use aidlog::service::{AidService, HttpAidService};
use aidlog::state::list_state::parse_per_page;
use aidlog::state::AppState;
use aidlog::view::{ColorConfig, Palette};
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Aid log administration - track scheduled and delivered aid
#[derive(Parser, Debug)]
#[command(name = "aidlog")]
#[command(version)]
#[command(about = "Terminal admin tool for scheduled and delivered aid records")]
pub struct Args {
    /// Aid service endpoint URL (overrides AIDLOG_ENDPOINT and the config file)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Admin session token (overrides AIDLOG_TOKEN)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Rows per page (must be positive)
    #[arg(short, long, value_parser = parse_per_page_arg)]
    pub per_page: Option<NonZeroUsize>,

    /// Start with the Future list filtered by this term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_per_page_arg(s: &str) -> Result<NonZeroUsize, String> {
    let n: usize = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    parse_per_page(n).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file)?;
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(
            with_env,
            args.endpoint.clone(),
            args.token.clone(),
            args.per_page,
        )
    };

    aidlog::logging::init(&config.log_file_path)?;

    info!(
        endpoint = ?config.endpoint,
        has_token = config.token.is_some(),
        per_page = config.per_page.get(),
        future_debounce_ms = config.search_delays.future.as_millis() as u64,
        completed_debounce_ms = config.search_delays.completed.as_millis() as u64,
        "Configuration loaded and resolved"
    );

    let endpoint = config.endpoint.clone().ok_or(AppError::MissingEndpoint)?;
    let token = config.token.clone().unwrap_or_default();
    if token.is_empty() {
        warn!("no session token configured; the service will likely refuse requests");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Terminal)?;

    let service: Arc<dyn AidService> = Arc::new(HttpAidService::new(endpoint)?);
    let controller = AidLifecycleController::new(service, token, config.per_page);
    let app_state = AppState::new(config.search_delays);
    let palette = Palette::new(ColorConfig::from_env_and_args(args.no_color));

    aidlog::view::run(
        controller,
        app_state,
        args.search,
        palette,
        runtime.handle().clone(),
    )?;

    info!("exiting");
    Ok(())
}
