use crate::models::{ExportFormat, JournalEntry};
use chrono::NaiveDate;
use std::fmt;

impl ExportFormat {
    pub fn parse(value: Option<&str>) -> Option<ExportFormat> {
        match value.map(str::trim) {
            None | Some("") | Some("pdf") => Some(ExportFormat::Pdf),
            Some("html") => Some(ExportFormat::Html),
            Some("text") | Some("txt") => Some(ExportFormat::Text),
            Some(_) => None,
        }
    }
}

pub fn export_filename(today: NaiveDate, extension: &str) -> String {
    format!("journify-export-{}.{extension}", today.format("%Y-%m-%d"))
}

/// Printable weekly report handed to the PDF renderer. Expects entries sorted
/// by date.
pub fn report_html(entries: &[JournalEntry], today: NaiveDate) -> String {
    HtmlReport { entries, today }.to_string()
}

/// Plain-text version of the weekly report.
pub fn report_text(entries: &[JournalEntry]) -> String {
    TextReport { entries }.to_string()
}

struct HtmlReport<'a> {
    entries: &'a [JournalEntry],
    today: NaiveDate,
}

impl fmt::Display for HtmlReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries;
        let start = entries.first().map_or(self.today, |entry| entry.date);
        let end = entries.last().map_or(self.today, |entry| entry.date);

        write!(
            f,
            "<h1 style=\"color: #3b82f6; text-align: center; margin-bottom: 30px;\">Journify Weekly Report</h1>\n\
             <p style=\"text-align: center; color: #64748b; margin-bottom: 40px;\">{} - {}</p>\n",
            start.format("%-m/%-d/%Y"),
            end.format("%-m/%-d/%Y"),
        )?;

        for entry in entries {
            let mut mood_line = mood_title(&entry.mood);
            if !entry.mood_note.is_empty() {
                mood_line = format!("{mood_line} - {}", entry.mood_note);
            }

            write!(
                f,
                "<div style=\"margin-bottom: 30px; padding: 20px; border: 1px solid #e2e8f0; border-radius: 8px;\">\n\
                 <h2 style=\"color: #1e293b; margin-bottom: 10px;\">{}</h2>\n\
                 <p style=\"color: #3b82f6; font-weight: bold; margin-bottom: 15px;\">Mood: {}</p>\n",
                entry.date.format("%A, %B %-d, %Y"),
                escape_html(&mood_line),
            )?;
            let sections = [
                ("#059669", "What went well:", &entry.went_well),
                ("#dc2626", "What could be improved:", &entry.could_improve),
                ("#7c3aed", "Goal for tomorrow:", &entry.tomorrow_goal),
            ];
            for (color, heading, text) in sections {
                if text.is_empty() {
                    continue;
                }
                write!(
                    f,
                    "<h3 style=\"color: {color}; margin-bottom: 5px;\">{heading}</h3>\n\
                     <p style=\"margin-bottom: 15px; line-height: 1.6;\">{}</p>\n",
                    escape_html(text),
                )?;
            }
            f.write_str("</div>\n")?;
        }

        write!(
            f,
            "<div style=\"margin-top: 40px; padding: 20px; background-color: #f8fafc; border-radius: 8px;\">\n\
             <h2 style=\"color: #1e293b; margin-bottom: 20px;\">Week Summary</h2>\n\
             <p><strong>Total Entries:</strong> {}</p>\n\
             <p><strong>Mood Distribution:</strong></p>\n\
             <ul style=\"margin-left: 20px;\">\n",
            entries.len(),
        )?;
        for (mood, count) in mood_counts(entries) {
            writeln!(f, "<li>{}: {count} days</li>", escape_html(&mood_title(mood)))?;
        }
        f.write_str("</ul>\n</div>\n")
    }
}

struct TextReport<'a> {
    entries: &'a [JournalEntry],
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries {
            let mood = if entry.mood.is_empty() {
                "Not specified"
            } else {
                entry.mood.as_str()
            };
            let note = if entry.mood_note.is_empty() {
                String::new()
            } else {
                format!(" - {}", entry.mood_note)
            };

            write!(
                f,
                "=== {} ===\n\
                 Mood: {mood}{note}\n\
                 \n\
                 What went well:\n{}\n\
                 \n\
                 What could be improved:\n{}\n\
                 \n\
                 Goal for tomorrow:\n{}\n\
                 \n\
                 ---\n\n",
                entry.date.format("%a %b %d %Y"),
                or_not_specified(&entry.went_well),
                or_not_specified(&entry.could_improve),
                or_not_specified(&entry.tomorrow_goal),
            )?;
        }
        Ok(())
    }
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        "Not specified"
    } else {
        value
    }
}

/// Moods in first-seen order with their counts; empty moods are skipped.
fn mood_counts(entries: &[JournalEntry]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries.iter().filter(|entry| !entry.mood.is_empty()) {
        match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood.as_str(), 1)),
        }
    }
    counts
}

fn mood_title(mood: &str) -> String {
    if mood.is_empty() {
        return "Not specified".to_string();
    }
    let mut chars = mood.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, entry_with};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[test]
    fn format_parsing() {
        assert_eq!(ExportFormat::parse(None), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::parse(Some("txt")), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse(Some("docx")), None);
    }

    #[test]
    fn filename_uses_today() {
        assert_eq!(export_filename(date(5), "txt"), "journify-export-2026-01-05.txt");
    }

    #[test]
    fn text_report_fills_missing_fields() {
        let mut first = entry_with(date(3), "good", "Ran 5k");
        first.mood_note = "energised".to_string();
        let text = report_text(&[first, entry(date(4), "bad")]);

        assert!(text.starts_with("=== Sat Jan 03 2026 ===\nMood: good - energised\n"));
        assert!(text.contains("What went well:\nRan 5k\n"));
        assert!(text.contains("=== Sun Jan 04 2026 ===\nMood: bad\n"));
        assert_eq!(text.matches("Not specified").count(), 5);
    }

    #[test]
    fn html_report_escapes_and_summarizes() {
        let entries = vec![
            entry_with(date(3), "good", "<b>shipped</b> & celebrated"),
            entry(date(4), "good"),
            entry(date(5), "okay"),
        ];
        let html = report_html(&entries, date(5));

        assert!(html.contains("Journify Weekly Report"));
        assert!(html.contains("1/3/2026 - 1/5/2026"));
        assert!(html.contains("Saturday, January 3, 2026"));
        assert!(html.contains("&lt;b&gt;shipped&lt;/b&gt; &amp; celebrated"));
        assert!(!html.contains("<b>shipped"));
        assert!(html.contains("<strong>Total Entries:</strong> 3"));
        let good = html.find("<li>Good: 2 days</li>").unwrap();
        let okay = html.find("<li>Okay: 1 days</li>").unwrap();
        assert!(good < okay);
    }
}
