use crate::models::{
    ActivityDay, AnalyticsResponse, JournalEntry, Mood, MoodCount, PhraseCount, SummaryResponse,
    Timeframe, Trend, TrendPoint, WeeklySummary,
};
use crate::sentiment::tokenize;
use chrono::{Duration, Local, NaiveDate};
use std::collections::{HashMap, HashSet};

const ACTIVITY_DAYS: i64 = 30;
const TOP_PHRASE_LIMIT: usize = 4;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "i",
    "me", "my", "we", "our", "you", "your", "it", "is", "was", "were", "been", "have", "has",
    "had", "do", "does", "did", "will", "would", "could", "should", "may", "might", "can", "this",
    "that", "these", "those",
];

pub fn build_summary(entries: &[JournalEntry], timeframe: Timeframe) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), entries, timeframe)
}

pub fn build_summary_at(
    today: NaiveDate,
    entries: &[JournalEntry],
    timeframe: Timeframe,
) -> SummaryResponse {
    let window = entries_in_window(today, entries, timeframe);
    SummaryResponse {
        timeframe,
        summary: summarize(&window),
    }
}

pub fn build_analytics(entries: &[JournalEntry], timeframe: Timeframe) -> AnalyticsResponse {
    build_analytics_at(Local::now().date_naive(), entries, timeframe)
}

pub fn build_analytics_at(
    today: NaiveDate,
    entries: &[JournalEntry],
    timeframe: Timeframe,
) -> AnalyticsResponse {
    let window = entries_in_window(today, entries, timeframe);

    let mood_trend = window
        .iter()
        .map(|entry| TrendPoint {
            date: entry.date,
            rank: entry.mood_rank(),
        })
        .collect();

    AnalyticsResponse {
        timeframe,
        mood_trend,
        mood_distribution: mood_distribution(&window),
        activity: activity_grid(today, entries),
        top_phrases: top_phrases(&window),
    }
}

/// Entries dated within the trailing `timeframe` days (today included),
/// oldest first. Future-dated entries are kept.
pub fn entries_in_window(
    today: NaiveDate,
    entries: &[JournalEntry],
    timeframe: Timeframe,
) -> Vec<JournalEntry> {
    let cutoff = today - Duration::days(timeframe.days() - 1);
    let mut window: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| entry.date >= cutoff)
        .cloned()
        .collect();
    window.sort_by_key(|entry| entry.date);
    window
}

/// Summary of an already date-sorted window; `None` when it is empty.
pub fn summarize(window: &[JournalEntry]) -> Option<WeeklySummary> {
    if window.is_empty() {
        return None;
    }

    let average = mean_rank(window);
    let average_mood = Mood::from_rank(average.round() as u8).unwrap_or(Mood::Okay);

    let split = window.len().div_ceil(2);
    let (first_half, second_half) = window.split_at(split);
    let trend = if second_half.is_empty() {
        Trend::Stable
    } else {
        let first = mean_rank(first_half);
        let second = mean_rank(second_half);
        if second > first {
            Trend::Improving
        } else if second < first {
            Trend::Declining
        } else {
            Trend::Stable
        }
    };

    let mut best = &window[0];
    for entry in &window[1..] {
        if entry.mood_rank() > best.mood_rank() {
            best = entry;
        }
    }

    let goals_achieved = window
        .iter()
        .filter(|entry| entry.went_well.to_lowercase().contains("goal"))
        .count();

    Some(WeeklySummary {
        average_mood,
        trend,
        best_day: best.date.format("%A").to_string(),
        goals_achieved,
        total_entries: window.len(),
    })
}

fn mean_rank(entries: &[JournalEntry]) -> f64 {
    let total: u32 = entries.iter().map(|entry| u32::from(entry.mood_rank())).sum();
    f64::from(total) / entries.len() as f64
}

/// Counts per known mood. Percentages are of the whole window, so entries
/// with an unrecognised mood still take their share.
fn mood_distribution(window: &[JournalEntry]) -> Vec<MoodCount> {
    let mut counts: HashMap<Mood, usize> = HashMap::new();
    for mood in window.iter().filter_map(JournalEntry::mood) {
        *counts.entry(mood).or_default() += 1;
    }
    let total = window.len();

    Mood::ALL
        .into_iter()
        .map(|mood| {
            let count = counts.get(&mood).copied().unwrap_or_default();
            let percentage = if total == 0 {
                0
            } else {
                (count as f64 * 100.0 / total as f64).round() as u32
            };
            MoodCount {
                mood,
                count,
                percentage,
            }
        })
        .collect()
}

fn activity_grid(today: NaiveDate, entries: &[JournalEntry]) -> Vec<ActivityDay> {
    let dates: HashSet<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
    (0..ACTIVITY_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            ActivityDay {
                date,
                has_entry: dates.contains(&date),
            }
        })
        .collect()
}

/// Two-word phrases that recur across the window's reflections.
fn top_phrases(window: &[JournalEntry]) -> Vec<PhraseCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for entry in window {
        let text = entry.reflection_text().to_lowercase();
        let words: Vec<&str> = tokenize(&text)
            .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
            .collect();

        for pair in words.windows(2) {
            let phrase = format!("{} {}", pair[0], pair[1]);
            let count = counts.entry(phrase.clone()).or_default();
            if *count == 0 {
                order.push(phrase);
            }
            *count += 1;
        }
    }

    let mut phrases: Vec<PhraseCount> = order
        .into_iter()
        .filter_map(|phrase| {
            let count = counts[&phrase];
            (count > 1).then_some(PhraseCount { phrase, count })
        })
        .collect();
    // stable: ties keep first-seen order
    phrases.sort_by(|a, b| b.count.cmp(&a.count));
    phrases.truncate(TOP_PHRASE_LIMIT);
    phrases
}
