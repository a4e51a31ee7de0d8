use crate::models::{JournalEntry, StreakStats};
use chrono::{Duration, Local, NaiveDate};
use std::collections::HashSet;

pub fn build_streak_stats(entries: &[JournalEntry]) -> StreakStats {
    build_streak_stats_at(Local::now().date_naive(), entries)
}

pub fn build_streak_stats_at(today: NaiveDate, entries: &[JournalEntry]) -> StreakStats {
    StreakStats {
        current_streak: current_streak_at(today, entries),
        longest_streak: longest_streak(entries),
        total_entries: entries.len(),
    }
}

/// Consecutive days with an entry, counted backward from `today`.
///
/// Returns 0 unless today or yesterday has an entry. The walk itself starts at
/// today, so a run that ends yesterday also counts as 0.
pub fn current_streak_at(today: NaiveDate, entries: &[JournalEntry]) -> u32 {
    let dates: HashSet<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
    let yesterday = today - Duration::days(1);
    if !dates.contains(&today) && !dates.contains(&yesterday) {
        return 0;
    }

    let mut streak = 0;
    let mut check_date = today;
    while dates.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive days anywhere in history.
///
/// Duplicate dates are not collapsed: a zero-day gap resets the run like any
/// other gap.
pub fn longest_streak(entries: &[JournalEntry]) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let mut dates: Vec<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
    dates.sort();

    let mut longest = 1;
    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            streak += 1;
            longest = longest.max(streak);
        } else {
            streak = 1;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn days_ago(offsets: &[i64]) -> Vec<JournalEntry> {
        offsets
            .iter()
            .map(|offset| entry(today() - Duration::days(*offset), "good"))
            .collect()
    }

    #[test]
    fn current_streak_is_zero_without_recent_entry() {
        let entries = days_ago(&[3, 4]);
        assert_eq!(current_streak_at(today(), &entries), 0);
    }

    #[test]
    fn current_streak_counts_until_first_gap() {
        let entries = days_ago(&[0, 1, 2, 3, 4, 6, 7]);
        assert_eq!(current_streak_at(today(), &entries), 5);
    }

    #[test]
    fn current_streak_ignores_insertion_order() {
        let entries = days_ago(&[2, 0, 1]);
        assert_eq!(current_streak_at(today(), &entries), 3);
    }

    #[test]
    fn current_streak_walk_starts_at_today() {
        let entries = days_ago(&[1, 2, 3]);
        assert_eq!(current_streak_at(today(), &entries), 0);
    }

    #[test]
    fn longest_streak_picks_longest_run() {
        let dates = [
            (2024, 1, 1),
            (2024, 1, 2),
            (2024, 1, 3),
            (2024, 1, 10),
            (2024, 1, 11),
            (2024, 1, 12),
            (2024, 1, 13),
        ];
        let entries: Vec<JournalEntry> = dates
            .iter()
            .rev()
            .map(|(y, m, d)| entry(NaiveDate::from_ymd_opt(*y, *m, *d).unwrap(), "okay"))
            .collect();
        assert_eq!(longest_streak(&entries), 4);
    }

    #[test]
    fn longest_streak_of_empty_and_single() {
        assert_eq!(longest_streak(&[]), 0);
        assert_eq!(longest_streak(&days_ago(&[10])), 1);
    }

    #[test]
    fn duplicate_dates_reset_the_run() {
        let entries = days_ago(&[3, 2, 2, 1]);
        assert_eq!(longest_streak(&entries), 2);
    }

    #[test]
    fn stats_report_totals() {
        let stats = build_streak_stats_at(today(), &days_ago(&[0, 1, 5]));
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.total_entries, 3);
    }
}
