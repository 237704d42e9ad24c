//! Environment-driven configuration.
//!
//! The watcher is meant to run from a scheduler (cron, CI workflow), so all
//! knobs come from the environment rather than CLI flags. Proxy credentials
//! follow the scheduler-secrets convention: all four variables must be set
//! for a proxy to be used.

use std::env;
use std::path::PathBuf;

use gazette_engine::ProxySettings;

pub const DEFAULT_BASE_URL: &str = "https://www.resmigazete.gov.tr";
const DEFAULT_FEED_FILE: &str = "resmi_gazete.xml";
const DEFAULT_STATE_FILE: &str = "last_processed.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub feed_file: PathBuf,
    pub state_file: PathBuf,
    pub proxy: Option<ProxySettings>,
    pub accept_invalid_certs: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: non_empty_var("GAZETTE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            feed_file: non_empty_var("GAZETTE_FEED_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FEED_FILE)),
            state_file: non_empty_var("GAZETTE_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
            proxy: proxy_from_env(),
            accept_invalid_certs: matches!(
                env::var("GAZETTE_ACCEPT_INVALID_CERTS").as_deref(),
                Ok("1") | Ok("true")
            ),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn proxy_from_env() -> Option<ProxySettings> {
    Some(ProxySettings {
        host: non_empty_var("PROXY_HOST")?,
        port: non_empty_var("PROXY_PORT")?,
        username: non_empty_var("PROXY_USERNAME")?,
        password: non_empty_var("PROXY_PASSWORD")?,
    })
}
