use crate::errors::AppError;
use crate::models::{JournalEntry, LocalState};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/state.json")
}

pub async fn load_data(path: &Path) -> LocalState {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                LocalState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LocalState::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            LocalState::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &LocalState) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Replaces the first entry with the same date, or appends. Returns `true`
/// when an existing entry was overwritten.
pub fn upsert_entry(entries: &mut Vec<JournalEntry>, entry: JournalEntry) -> bool {
    match entries.iter_mut().find(|existing| existing.date == entry.date) {
        Some(existing) => {
            *existing = entry;
            true
        }
        None => {
            entries.push(entry);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, entry_with, temp_path};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    #[test]
    fn saving_same_date_overwrites() {
        let mut entries = vec![entry(date(1), "bad"), entry(date(2), "okay")];

        let replaced = upsert_entry(&mut entries, entry_with(date(1), "amazing", "fixed it"));
        assert!(replaced);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].mood, "amazing");
        assert_eq!(entries[0].went_well, "fixed it");

        assert!(!upsert_entry(&mut entries, entry(date(3), "good")));
        assert_eq!(entries.len(), 3);
    }

    #[tokio::test]
    async fn missing_or_corrupt_file_loads_default() {
        let path = temp_path("missing");
        assert!(load_data(&path).await.entries.is_empty());

        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        assert!(load_data(&path).await.entries.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_state_loads_back() {
        let path = temp_path("persist");
        let mut state = LocalState::default();
        state.entries.push(entry_with(date(4), "good", "shipped"));

        persist_data(&path, &state).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded.entries, state.entries);
        let _ = fs::remove_file(&path).await;
    }
}
