//! Clients for the optional HTTP collaborators. Every function reports
//! failure as a [`RemoteError`]; choosing the fallback is up to the caller.

use crate::errors::RemoteError;
use crate::models::{JournalEntry, SentimentReport, SentimentRequest};
use reqwest::{header, Client, Response};

pub async fn fetch_entries(http: &Client, base_url: &str) -> Result<Vec<JournalEntry>, RemoteError> {
    let response = http.get(format!("{base_url}/api/journal")).send().await?;
    Ok(ensure_success(response)?.json().await?)
}

pub async fn push_entry(
    http: &Client,
    base_url: &str,
    entry: &JournalEntry,
) -> Result<JournalEntry, RemoteError> {
    let response = http
        .post(format!("{base_url}/api/journal"))
        .json(entry)
        .send()
        .await?;
    Ok(ensure_success(response)?.json().await?)
}

pub async fn analyze_sentiment(
    http: &Client,
    url: &str,
    text: &str,
) -> Result<SentimentReport, RemoteError> {
    let response = http
        .post(url)
        .json(&SentimentRequest {
            text: text.to_string(),
        })
        .send()
        .await?;
    Ok(ensure_success(response)?.json().await?)
}

/// Sends an HTML fragment to the PDF renderer and returns the document bytes.
pub async fn render_pdf(http: &Client, url: &str, html: &str) -> Result<Vec<u8>, RemoteError> {
    let response = http
        .post(url)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(html.to_string())
        .send()
        .await?;
    let bytes = ensure_success(response)?.bytes().await?;
    Ok(bytes.to_vec())
}

fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RemoteError::Status(status))
    }
}
