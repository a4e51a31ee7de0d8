use crate::storage::resolve_data_path;
use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_QUOTES_URL: &str =
    "https://api.quotable.io/random?tags=motivational,inspirational";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Base URL of an upstream journal API; entries are synced with it when set.
    pub remote_url: Option<String>,
    pub sentiment_url: Option<String>,
    pub quotes_url: Option<String>,
    pub pdf_url: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let quotes_url = match optional_var("JOURNIFY_QUOTES_URL") {
            Some(value) if value.eq_ignore_ascii_case("off") => None,
            Some(value) => Some(value),
            None => Some(DEFAULT_QUOTES_URL.to_string()),
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(8080),
            data_path: resolve_data_path(),
            remote_url: optional_var("JOURNIFY_REMOTE_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            sentiment_url: optional_var("JOURNIFY_SENTIMENT_URL"),
            quotes_url,
            pdf_url: optional_var("JOURNIFY_PDF_URL"),
            http_timeout: Duration::from_secs(
                env::var("JOURNIFY_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(5),
            ),
        }
    }

    /// Configuration with every collaborator switched off.
    #[cfg(test)]
    pub(crate) fn local(data_path: PathBuf) -> Self {
        Self {
            port: 8080,
            data_path,
            remote_url: None,
            sentiment_url: None,
            quotes_url: None,
            pdf_url: None,
            http_timeout: Duration::from_secs(5),
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
