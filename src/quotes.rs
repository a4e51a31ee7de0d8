use crate::errors::RemoteError;
use crate::models::{Quote, QuoteSource};
use rand::seq::IndexedRandom;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

const FALLBACK_QUOTES: [(&str, &str); 5] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    (
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
    ),
];

#[derive(Debug, Deserialize)]
struct RemoteQuote {
    content: String,
    author: String,
}

/// A quote from the configured service, or one of the built-in quotes.
pub async fn daily_quote(http: &Client, url: Option<&str>) -> Quote {
    match fetch_quote(http, url).await {
        Ok(quote) => quote,
        Err(err) => {
            warn!("quote service unavailable, using fallback: {err}");
            fallback_quote()
        }
    }
}

async fn fetch_quote(http: &Client, url: Option<&str>) -> Result<Quote, RemoteError> {
    let url = url.ok_or(RemoteError::NotConfigured("quote service"))?;
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status));
    }
    let remote: RemoteQuote = response.json().await?;
    Ok(Quote {
        content: remote.content,
        author: remote.author,
        source: QuoteSource::Remote,
    })
}

pub fn fallback_quote() -> Quote {
    let (content, author) = FALLBACK_QUOTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(FALLBACK_QUOTES[0]);
    Quote {
        content: content.to_string(),
        author: author.to_string(),
        source: QuoteSource::Fallback,
    }
}
