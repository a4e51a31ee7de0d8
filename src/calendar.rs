use crate::errors::AppError;
use crate::models::{CalendarDay, CalendarMonth, JournalEntry};
use chrono::{Datelike, Duration, NaiveDate};

const GRID_CELLS: i64 = 42;

/// Six-week grid for a month, starting on the Sunday on or before the 1st.
pub fn build_month(
    year: i32,
    month: u32,
    entries: &[JournalEntry],
    today: NaiveDate,
) -> Result<CalendarMonth, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }
    let out_of_range = || AppError::bad_request("year is out of range");
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    let start = first
        .checked_sub_signed(Duration::days(i64::from(
            first.weekday().num_days_from_sunday(),
        )))
        .ok_or_else(out_of_range)?;

    let days = (0..GRID_CELLS)
        .map(|offset| {
            let date = start
                .checked_add_signed(Duration::days(offset))
                .ok_or_else(out_of_range)?;
            let entry = entries.iter().find(|entry| entry.date == date);
            Ok(CalendarDay {
                date,
                day: date.day(),
                in_month: date.month() == month,
                is_today: date == today,
                mood: entry
                    .filter(|entry| !entry.mood.is_empty())
                    .map(|entry| entry.mood.clone()),
                mood_note: entry
                    .filter(|entry| !entry.mood_note.is_empty())
                    .map(|entry| entry.mood_note.clone()),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(CalendarMonth {
        label: first.format("%B %Y").to_string(),
        year,
        month,
        days,
    })
}
