use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Terrible,
    Bad,
    Okay,
    Good,
    Amazing,
}

impl Mood {
    /// All moods in ascending rank order.
    pub const ALL: [Mood; 5] = [
        Mood::Terrible,
        Mood::Bad,
        Mood::Okay,
        Mood::Good,
        Mood::Amazing,
    ];

    pub const NEUTRAL_RANK: u8 = 3;

    pub fn rank(self) -> u8 {
        match self {
            Mood::Terrible => 1,
            Mood::Bad => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Amazing => 5,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.rank() == rank)
    }

    pub fn parse(value: &str) -> Option<Mood> {
        match value {
            "terrible" => Some(Mood::Terrible),
            "bad" => Some(Mood::Bad),
            "okay" => Some(Mood::Okay),
            "good" => Some(Mood::Good),
            "amazing" => Some(Mood::Amazing),
            _ => None,
        }
    }

    /// Rank of a stored mood string; anything unrecognised counts as `okay`.
    pub fn rank_of(value: &str) -> u8 {
        Mood::parse(value).map_or(Mood::NEUTRAL_RANK, Mood::rank)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Terrible => "terrible",
            Mood::Bad => "bad",
            Mood::Okay => "okay",
            Mood::Good => "good",
            Mood::Amazing => "amazing",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's journal record. `mood` stays a raw string so entries written by
/// other clients survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub went_well: String,
    #[serde(default)]
    pub could_improve: String,
    #[serde(default)]
    pub tomorrow_goal: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub mood_note: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    pub fn mood(&self) -> Option<Mood> {
        Mood::parse(&self.mood)
    }

    pub fn mood_rank(&self) -> u8 {
        Mood::rank_of(&self.mood)
    }

    /// The three reflection fields joined with spaces.
    pub fn reflection_text(&self) -> String {
        format!(
            "{} {} {}",
            self.went_well, self.could_improve, self.tomorrow_goal
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub went_well: String,
    #[serde(default)]
    pub could_improve: String,
    #[serde(default)]
    pub tomorrow_goal: String,
    pub mood: Option<String>,
    #[serde(default)]
    pub mood_note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTheme {
    Joy,
    Peaceful,
    #[default]
    Calm,
    Sad,
    Angry,
}

/// Everything the local store keeps on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalState {
    pub theme: Theme,
    pub mood_theme: MoodTheme,
    pub entries: Vec<JournalEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Quarter,
}

impl Timeframe {
    pub fn days(self) -> i64 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
        }
    }

    /// Lenient parse used for query strings; unknown values mean a week.
    pub fn parse_or_default(value: Option<&str>) -> Timeframe {
        match value.map(str::trim) {
            Some("month") | Some("30") => Timeframe::Month,
            Some("quarter") | Some("90") => Timeframe::Quarter,
            _ => Timeframe::Week,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeframeQuery {
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_entries: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub average_mood: Mood,
    pub trend: Trend,
    pub best_day: String,
    pub goals_achieved: usize,
    pub total_entries: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub timeframe: Timeframe,
    pub summary: Option<WeeklySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub rank: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub has_entry: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub timeframe: Timeframe,
    pub mood_trend: Vec<TrendPoint>,
    pub mood_distribution: Vec<MoodCount>,
    pub activity: Vec<ActivityDay>,
    pub top_phrases: Vec<PhraseCount>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub in_month: bool,
    pub is_today: bool,
    pub mood: Option<String>,
    pub mood_note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub sentiment: Sentiment,
    pub confidence: f64,
    #[serde(default)]
    pub positive_words: usize,
    #[serde(default)]
    pub negative_words: usize,
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
    pub source: QuoteSource,
}

/// Unsaved form contents, as edited by voice commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub went_well: String,
    pub could_improve: String,
    pub tomorrow_goal: String,
    pub mood: Option<Mood>,
    pub mood_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum VoiceCommand {
    WentWell(String),
    CouldImprove(String),
    TomorrowGoal(String),
    Mood(Mood),
    MoodNote(String),
    Dictation(String),
    Ignored,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceRequest {
    pub transcript: String,
    #[serde(default)]
    pub draft: Draft,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResponse {
    pub command: VoiceCommand,
    pub draft: Draft,
    pub mood_theme: Option<MoodTheme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub mood_theme: MoodTheme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub theme: Option<Theme>,
    pub mood_theme: Option<MoodTheme>,
    /// Derive the mood theme from a mood label instead of naming it.
    pub mood: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Html,
    Text,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}
