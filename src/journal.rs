use crate::errors::AppError;
use crate::models::{JournalEntry, Mood, NewEntry};
use crate::preferences::mood_theme_for;
use crate::remote;
use crate::state::AppState;
use crate::storage::{persist_data, upsert_entry};
use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};

/// Turns a submitted form into an entry. A mood is required and must be one
/// of the five known labels.
pub fn validate(payload: NewEntry, today: NaiveDate) -> Result<JournalEntry, AppError> {
    let mood = payload
        .mood
        .as_deref()
        .map(str::trim)
        .filter(|mood| !mood.is_empty())
        .ok_or_else(|| AppError::bad_request("Please select a mood"))?;
    let mood = Mood::parse(&mood.to_lowercase())
        .ok_or_else(|| AppError::bad_request(format!("unknown mood '{mood}'")))?;

    Ok(JournalEntry {
        date: payload.date.unwrap_or(today),
        went_well: payload.went_well,
        could_improve: payload.could_improve,
        tomorrow_goal: payload.tomorrow_goal,
        mood: mood.to_string(),
        mood_note: payload.mood_note,
        timestamp: Utc::now(),
    })
}

/// Current entries. The upstream store wins whenever it answers, and its copy
/// replaces the local cache (rewritten only when it changed); otherwise the
/// local collection is used.
pub async fn load_entries(state: &AppState) -> Result<Vec<JournalEntry>, AppError> {
    let fetched = match state.config.remote_url.as_deref() {
        Some(base_url) => match remote::fetch_entries(&state.http, base_url).await {
            Ok(entries) => Some(entries),
            Err(err) => {
                warn!("remote journal unavailable, loading locally: {err}");
                None
            }
        },
        None => None,
    };

    let mut data = state.data.lock().await;
    if let Some(entries) = fetched {
        if data.entries != entries {
            data.entries = entries;
            persist_data(state.data_path(), &data).await?;
        }
    }
    Ok(data.entries.clone())
}

/// Saves an entry, overwriting any entry for the same date. The local copy is
/// always written; the reply is the upstream echo when the upstream accepted it.
pub async fn save_entry(state: &AppState, payload: NewEntry) -> Result<JournalEntry, AppError> {
    let entry = validate(payload, Local::now().date_naive())?;

    let echoed = match state.config.remote_url.as_deref() {
        Some(base_url) => match remote::push_entry(&state.http, base_url, &entry).await {
            Ok(saved) => Some(saved),
            Err(err) => {
                warn!("remote journal unavailable, saving locally: {err}");
                None
            }
        },
        None => None,
    };

    let mut data = state.data.lock().await;
    let replaced = upsert_entry(&mut data.entries, entry.clone());
    data.mood_theme = mood_theme_for(&entry.mood);
    persist_data(state.data_path(), &data).await?;

    info!(date = %entry.date, mood = %entry.mood, replaced, "journal entry saved");
    Ok(echoed.unwrap_or(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{LocalState, MoodTheme};
    use crate::storage::load_data;
    use crate::test_support::{entry, entry_with, serve, temp_path};
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };

    fn form(mood: Option<&str>) -> NewEntry {
        NewEntry {
            date: None,
            went_well: "walked".to_string(),
            could_improve: String::new(),
            tomorrow_goal: String::new(),
            mood: mood.map(str::to_string),
            mood_note: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    #[test]
    fn mood_is_required() {
        let err = validate(form(None), today()).unwrap_err();
        assert_eq!(err.message, "Please select a mood");

        let err = validate(form(Some("  ")), today()).unwrap_err();
        assert_eq!(err.message, "Please select a mood");

        assert!(validate(form(Some("grumpy")), today()).is_err());
    }

    #[test]
    fn validated_entry_defaults_to_today() {
        let entry = validate(form(Some("Good")), today()).unwrap();
        assert_eq!(entry.date, today());
        assert_eq!(entry.mood, "good");
        assert_eq!(entry.went_well, "walked");
    }

    fn state_with_remote(name: &str, remote_url: String, local: Vec<JournalEntry>) -> AppState {
        let mut config = Config::local(temp_path(name));
        config.remote_url = Some(remote_url);
        let data = LocalState {
            entries: local,
            ..LocalState::default()
        };
        AppState::new(config, data).unwrap()
    }

    fn unreachable_state(name: &str) -> AppState {
        // nothing listens on the discard port
        state_with_remote(
            name,
            "http://127.0.0.1:9".to_string(),
            vec![entry(today(), "bad")],
        )
    }

    fn upstream_entries() -> Vec<JournalEntry> {
        let yesterday = today().pred_opt().unwrap();
        vec![
            entry_with(yesterday, "good", "long walk"),
            entry_with(today(), "amazing", "finished the book"),
        ]
    }

    #[tokio::test]
    async fn load_falls_back_to_local_entries() {
        let state = unreachable_state("load");
        let entries = load_entries(&state).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, "bad");
    }

    #[tokio::test]
    async fn reachable_remote_replaces_local_cache() {
        let upstream = upstream_entries();
        let served = upstream.clone();
        let base_url = serve(Router::new().route(
            "/api/journal",
            get(move || {
                let served = served.clone();
                async move { Json(served) }
            }),
        ))
        .await;
        let state = state_with_remote("remote_wins", base_url, vec![entry(today(), "terrible")]);

        let entries = load_entries(&state).await.unwrap();
        assert_eq!(entries, upstream);
        assert_eq!(state.data.lock().await.entries, upstream);
        assert_eq!(load_data(state.data_path()).await.entries, upstream);
        let _ = std::fs::remove_file(state.data_path());
    }

    #[tokio::test]
    async fn remote_error_status_falls_back_without_touching_cache() {
        let base_url = serve(Router::new().route(
            "/api/journal",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        ))
        .await;
        let local = vec![entry(today(), "bad")];
        let state = state_with_remote("remote_503", base_url, local.clone());

        let entries = load_entries(&state).await.unwrap();
        assert_eq!(entries, local);
        assert!(!state.data_path().exists());
    }

    #[tokio::test]
    async fn unchanged_remote_copy_is_not_rewritten() {
        let upstream = upstream_entries();
        let served = upstream.clone();
        let base_url = serve(Router::new().route(
            "/api/journal",
            get(move || {
                let served = served.clone();
                async move { Json(served) }
            }),
        ))
        .await;
        let state = state_with_remote("remote_same", base_url, upstream.clone());

        assert_eq!(load_entries(&state).await.unwrap(), upstream);
        assert!(!state.data_path().exists());
    }

    #[tokio::test]
    async fn save_returns_remote_echo_and_writes_locally() {
        let base_url = serve(Router::new().route(
            "/api/journal",
            post(|Json(mut entry): Json<JournalEntry>| async move {
                entry.went_well = format!("{} (synced)", entry.went_well);
                Json(entry)
            }),
        ))
        .await;
        let state = state_with_remote("remote_echo", base_url, Vec::new());
        let mut payload = form(Some("good"));
        payload.date = Some(today());

        let saved = save_entry(&state, payload).await.unwrap();
        assert_eq!(saved.went_well, "walked (synced)");

        let stored = load_data(state.data_path()).await;
        assert_eq!(stored.entries.len(), 1);
        assert_eq!(stored.entries[0].went_well, "walked");
        assert_eq!(stored.mood_theme, MoodTheme::Peaceful);
        let _ = std::fs::remove_file(state.data_path());
    }

    #[tokio::test]
    async fn save_falls_back_and_overwrites_locally() {
        let state = unreachable_state("save");
        let mut payload = form(Some("amazing"));
        payload.date = Some(today());

        let saved = save_entry(&state, payload).await.unwrap();
        assert_eq!(saved.mood, "amazing");

        let data = state.data.lock().await;
        assert_eq!(data.entries.len(), 1);
        assert_eq!(data.entries[0].mood, "amazing");
        assert_eq!(data.mood_theme, MoodTheme::Joy);
        let _ = std::fs::remove_file(state.data_path());
    }
}
