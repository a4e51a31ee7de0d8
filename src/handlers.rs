use crate::calendar::build_month;
use crate::errors::{AppError, RemoteError};
use crate::export::{export_filename, report_html, report_text};
use crate::journal::{load_entries, save_entry};
use crate::models::{
    AnalyticsResponse, CalendarMonth, CalendarQuery, ExportFormat, ExportQuery, JournalEntry,
    NewEntry, Preferences, PreferencesUpdate, Quote, SentimentReport, SentimentRequest,
    StreakStats, SummaryResponse, Timeframe, TimeframeQuery, VoiceCommand, VoiceRequest,
    VoiceResponse,
};
use crate::state::AppState;
use crate::stats::{build_analytics, build_summary, entries_in_window};
use crate::storage::persist_data;
use crate::streak::build_streak_stats;
use crate::ui::render_index;
use crate::{preferences, quotes, remote, sentiment, voice};
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&preferences::current(&data)))
}

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    Ok(Json(load_entries(&state).await?))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntry>,
) -> Result<Json<JournalEntry>, AppError> {
    Ok(Json(save_entry(&state, payload).await?))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StreakStats>, AppError> {
    let entries = load_entries(&state).await?;
    Ok(Json(build_streak_stats(&entries)))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<TimeframeQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let timeframe = Timeframe::parse_or_default(query.timeframe.as_deref());
    let entries = load_entries(&state).await?;
    Ok(Json(build_summary(&entries, timeframe)))
}

pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<TimeframeQuery>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let timeframe = Timeframe::parse_or_default(query.timeframe.as_deref());
    let entries = load_entries(&state).await?;
    Ok(Json(build_analytics(&entries, timeframe)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>, AppError> {
    let today = Local::now().date_naive();
    let entries = load_entries(&state).await?;
    let month = build_month(
        query.year.unwrap_or(today.year()),
        query.month.unwrap_or(today.month()),
        &entries,
        today,
    )?;
    Ok(Json(month))
}

pub async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(payload): Json<SentimentRequest>,
) -> Result<Json<SentimentReport>, AppError> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::bad_request("Please write something to analyze"));
    }

    let remote_report = match state.config.sentiment_url.as_deref() {
        Some(url) => remote::analyze_sentiment(&state.http, url, text).await,
        None => Err(RemoteError::NotConfigured("sentiment analyzer")),
    };
    let report = remote_report.unwrap_or_else(|err| {
        if !matches!(err, RemoteError::NotConfigured(_)) {
            warn!("sentiment analyzer unavailable, scoring locally: {err}");
        }
        sentiment::analyze(text)
    });
    Ok(Json(report))
}

pub async fn get_quote(State(state): State<AppState>) -> Json<Quote> {
    Json(quotes::daily_quote(&state.http, state.config.quotes_url.as_deref()).await)
}

pub async fn voice_command(Json(payload): Json<VoiceRequest>) -> Json<VoiceResponse> {
    let command = voice::parse(&payload.transcript);
    let mut draft = payload.draft;
    voice::apply(&mut draft, &command);
    let mood_theme = match &command {
        VoiceCommand::Mood(mood) => Some(preferences::mood_theme_for(mood.as_str())),
        _ => None,
    };
    Json(VoiceResponse {
        command,
        draft,
        mood_theme,
    })
}

pub async fn get_preferences(State(state): State<AppState>) -> Json<Preferences> {
    let data = state.data.lock().await;
    Json(preferences::current(&data))
}

pub async fn update_preferences(
    State(state): State<AppState>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<Preferences>, AppError> {
    let mut data = state.data.lock().await;
    let prefs = preferences::apply_update(&mut data, &update);
    persist_data(state.data_path(), &data).await?;
    Ok(Json(prefs))
}

pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<Preferences>, AppError> {
    let mut data = state.data.lock().await;
    data.theme = preferences::toggled(data.theme);
    persist_data(state.data_path(), &data).await?;
    Ok(Json(preferences::current(&data)))
}

/// Weekly report. PDF goes through the renderer when one is configured and
/// degrades to the text download otherwise.
pub async fn export_week(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let format = ExportFormat::parse(query.format.as_deref())
        .ok_or_else(|| AppError::bad_request("format must be 'pdf', 'html' or 'text'"))?;

    let today = Local::now().date_naive();
    let entries = load_entries(&state).await?;
    let week = entries_in_window(today, &entries, Timeframe::Week);
    if week.is_empty() {
        return Err(AppError::not_found("No entries to export"));
    }

    match format {
        ExportFormat::Html => Ok(Html(report_html(&week, today)).into_response()),
        ExportFormat::Text => Ok(text_download(&week, today)),
        ExportFormat::Pdf => {
            let rendered = match state.config.pdf_url.as_deref() {
                Some(url) => remote::render_pdf(&state.http, url, &report_html(&week, today)).await,
                None => Err(RemoteError::NotConfigured("pdf renderer")),
            };
            match rendered {
                Ok(pdf) => Ok(attachment("application/pdf", export_filename(today, "pdf"), pdf)),
                Err(err) => {
                    warn!("pdf export unavailable, sending text: {err}");
                    Ok(text_download(&week, today))
                }
            }
        }
    }
}

fn text_download(week: &[JournalEntry], today: NaiveDate) -> Response {
    attachment(
        "text/plain; charset=utf-8",
        export_filename(today, "txt"),
        report_text(week).into_bytes(),
    )
}

fn attachment(content_type: &'static str, filename: String, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{LocalState, Sentiment};
    use crate::test_support::{entry_with, serve, temp_path};
    use axum::{http::StatusCode, routing::post, Router};

    fn state_with(name: &str, configure: impl FnOnce(&mut Config), data: LocalState) -> AppState {
        let mut config = Config::local(temp_path(name));
        configure(&mut config);
        AppState::new(config, data).unwrap()
    }

    fn request(text: &str) -> Json<SentimentRequest> {
        Json(SentimentRequest {
            text: text.to_string(),
        })
    }

    #[tokio::test]
    async fn remote_sentiment_answer_wins() {
        let base_url = serve(Router::new().route(
            "/analyze",
            post(|Json(req): Json<SentimentRequest>| async move {
                Json(SentimentReport {
                    sentiment: Sentiment::Negative,
                    confidence: 0.42,
                    positive_words: 0,
                    negative_words: 0,
                    key_phrases: vec![req.text],
                })
            }),
        ))
        .await;
        let state = state_with(
            "sentiment_remote",
            |config| config.sentiment_url = Some(format!("{base_url}/analyze")),
            LocalState::default(),
        );

        let Json(report) = analyze_sentiment(State(state), request("  good great happy "))
            .await
            .unwrap();
        assert_eq!(report.sentiment, Sentiment::Negative);
        assert_eq!(report.confidence, 0.42);
        assert_eq!(report.key_phrases, vec!["good great happy".to_string()]);
    }

    #[tokio::test]
    async fn failing_sentiment_service_scores_locally() {
        let base_url = serve(Router::new().route(
            "/analyze",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;
        let state = state_with(
            "sentiment_500",
            |config| config.sentiment_url = Some(format!("{base_url}/analyze")),
            LocalState::default(),
        );

        let Json(report) = analyze_sentiment(State(state), request("good great happy"))
            .await
            .unwrap();
        assert_eq!(report, sentiment::analyze("good great happy"));
        assert_eq!(report.sentiment, Sentiment::Positive);
    }

    #[tokio::test]
    async fn rendered_pdf_is_sent_as_attachment() {
        let base_url = serve(Router::new().route(
            "/render",
            post(|body: String| async move {
                if body.contains("Journify Weekly Report") && body.contains("shipped it") {
                    (StatusCode::OK, b"%PDF-1.4 journify".to_vec())
                } else {
                    (StatusCode::BAD_REQUEST, Vec::new())
                }
            }),
        ))
        .await;
        let today = Local::now().date_naive();
        let data = LocalState {
            entries: vec![entry_with(today, "good", "shipped it")],
            ..LocalState::default()
        };
        let state = state_with(
            "pdf_remote",
            |config| config.pdf_url = Some(format!("{base_url}/render")),
            data,
        );

        let query = ExportQuery {
            format: Some("pdf".to_string()),
        };
        let response = export_week(State(state), Query(query)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"{}\"", export_filename(today, "pdf")).as_str()
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"%PDF-1.4 journify");
    }

    #[tokio::test]
    async fn empty_week_has_nothing_to_export() {
        let state = state_with("pdf_empty", |_| {}, LocalState::default());
        let query = ExportQuery { format: None };
        let Err(err) = export_week(State(state), Query(query)).await else {
            panic!("expected an error for an empty week");
        };
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "No entries to export");
    }
}
