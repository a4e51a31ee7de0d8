use crate::models::{Sentiment, SentimentReport};

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "happy",
    "wonderful",
    "amazing",
    "perfect",
    "love",
    "joy",
    "excited",
    "grateful",
    "blessed",
    "fantastic",
    "awesome",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "sad",
    "angry",
    "frustrated",
    "disappointed",
    "stressed",
    "worried",
    "anxious",
    "hate",
    "horrible",
    "worst",
];

const KEY_PHRASE_LIMIT: usize = 3;

/// Splits on runs of anything that is not an ASCII letter, digit or `_`.
/// Empty pieces are skipped.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
}

/// Keyword-count sentiment used when no remote analyzer answers.
pub fn analyze(text: &str) -> SentimentReport {
    let lowered = text.to_lowercase();
    let mut positive_words = 0;
    let mut negative_words = 0;
    for word in tokenize(&lowered) {
        if POSITIVE_WORDS.contains(&word) {
            positive_words += 1;
        }
        if NEGATIVE_WORDS.contains(&word) {
            negative_words += 1;
        }
    }

    let (sentiment, confidence) = classify(positive_words, negative_words);

    SentimentReport {
        sentiment,
        confidence,
        positive_words,
        negative_words,
        key_phrases: key_phrases(text),
    }
}

fn classify(positive: usize, negative: usize) -> (Sentiment, f64) {
    let total = positive + negative;
    if total == 0 {
        return (Sentiment::Neutral, 0.5);
    }

    let ratio = positive as f64 / total as f64;
    if ratio > 0.6 {
        (Sentiment::Positive, ratio)
    } else if ratio < 0.4 {
        (Sentiment::Negative, 1.0 - ratio)
    } else {
        (Sentiment::Neutral, 0.5)
    }
}

/// First few sentences in source order.
pub fn key_phrases(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .take(KEY_PHRASE_LIMIT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_positive_words() {
        let report = analyze("good great happy");
        assert_eq!(report.sentiment, Sentiment::Positive);
        assert_eq!(report.positive_words, 3);
        assert_eq!(report.negative_words, 0);
        assert_eq!(report.confidence, 1.0);
    }

    #[test]
    fn no_keywords_is_neutral() {
        let report = analyze("Walked to the store and bought bread.");
        assert_eq!(report.sentiment, Sentiment::Neutral);
        assert_eq!(report.confidence, 0.5);
        assert_eq!(report.positive_words + report.negative_words, 0);
    }

    #[test]
    fn mostly_negative() {
        let report = analyze("Stressed and worried, but the lunch was GOOD. Awful commute!");
        assert_eq!(report.sentiment, Sentiment::Negative);
        assert_eq!(report.positive_words, 1);
        assert_eq!(report.negative_words, 3);
        assert_eq!(report.confidence, 0.75);
    }

    #[test]
    fn balanced_counts_stay_neutral() {
        let report = analyze("happy but sad");
        assert_eq!(report.sentiment, Sentiment::Neutral);
        assert_eq!(report.confidence, 0.5);
    }

    #[test]
    fn punctuation_splits_words() {
        let report = analyze("great!!love,joy-awesome");
        assert_eq!(report.positive_words, 4);
    }

    #[test]
    fn key_phrases_are_first_three_sentences() {
        let phrases = key_phrases("  One.  Two!! ... Three? Four.");
        assert_eq!(phrases, vec!["One", "Two", "Three"]);
    }
}
