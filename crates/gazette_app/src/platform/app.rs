use std::path::{Path, PathBuf};

use anyhow::Context;
use gazette_core::{decide, RunState};
use gazette_engine::{
    apply_decision, FetchSettings, GazetteExtractor, GazetteSource, JsonStateStore,
    ReqwestFetcher, RssFeedWriter, RunSummary, StateStore,
};
use gazette_logging::{gazette_debug, gazette_info, gazette_warn};
use url::Url;

use super::config::AppConfig;
use super::logging::{self, LogDestination};

/// One full run: load state, check the front page, decide, execute, exit.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Terminal);

    let config = AppConfig::from_env();
    let base_url = Url::parse(&config.base_url).context("invalid gazette base url")?;
    gazette_info!("Starting gazette check against {}", base_url);
    if config.proxy.is_some() {
        gazette_info!("Proxy credentials found in environment; routing through proxy");
    } else {
        gazette_debug!("No proxy credentials in environment; fetching directly");
    }

    let store = JsonStateStore::new(&config.state_file);
    let state = RunState::new(store.load());
    match state.last_processed() {
        Some(issue) => gazette_info!("Last processed gazette number: {}", issue),
        None => gazette_info!("No previous state; treating this as the first run"),
    }

    let settings = FetchSettings {
        proxy: config.proxy.clone(),
        accept_invalid_certs: config.accept_invalid_certs,
        ..FetchSettings::default()
    };
    let source = GazetteSource::new(
        base_url.clone(),
        Box::new(ReqwestFetcher::new(settings)),
        Box::new(GazetteExtractor),
    );

    // The check is the only async work in the process; the app owns the
    // runtime and blocks on it once.
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let outcome = runtime.block_on(source.check());

    let decision = decide(state.last_processed(), outcome);
    let emitter = feed_writer(&config)?;
    match apply_decision(decision, &emitter, &store) {
        RunSummary::Published {
            issue,
            state_saved: true,
        } => gazette_info!("Run complete: published issue {}", issue),
        RunSummary::Published {
            issue,
            state_saved: false,
        } => gazette_warn!(
            "Run complete: published issue {} but could not persist state; it may be reprocessed once",
            issue
        ),
        RunSummary::EmitFailed { issue } => gazette_warn!(
            "Run complete: feed write failed for issue {}; next run will retry it",
            issue
        ),
        RunSummary::Skipped => gazette_info!("Run complete: nothing to publish"),
    }

    Ok(())
}

fn feed_writer(config: &AppConfig) -> anyhow::Result<RssFeedWriter> {
    let feed_dir = config
        .feed_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let feed_name = config
        .feed_file
        .file_name()
        .and_then(|name| name.to_str())
        .context("feed file path has no file name")?;
    Ok(RssFeedWriter::new(
        config.base_url.trim_end_matches('/'),
        feed_dir,
        feed_name,
    ))
}
