//! Recency filter for the experience timeline ("last N years").
//!
//! Durations are free text written by the model ("Jan 2020 - Present",
//! "2016–2018", "Summer Internship"), so the filter is heuristic and fails open:
//! anything it cannot date stays visible.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::ExperienceEntry;

/// Substrings that mark an entry as ongoing.
const ONGOING_MARKERS: &[&str] = &["present", "current", "now"];

/// The windows the timeline filter offers, in display order.
pub const WINDOW_OPTIONS: [(&str, RecencyWindow); 4] = [
    ("All", RecencyWindow::All),
    ("1Y", RecencyWindow::Years(1)),
    ("3Y", RecencyWindow::Years(3)),
    ("5Y", RecencyWindow::Years(5)),
];

/// How far back the timeline reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WindowRepr", into = "WindowRepr")]
pub enum RecencyWindow {
    #[default]
    All,
    Years(u32),
}

/// Wire form: `"all"`, a JSON integer, or a numeric string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WindowRepr {
    Years(u32),
    Text(String),
}

impl TryFrom<WindowRepr> for RecencyWindow {
    type Error = String;

    fn try_from(repr: WindowRepr) -> Result<Self, Self::Error> {
        match repr {
            WindowRepr::Years(n) => Ok(RecencyWindow::Years(n)),
            WindowRepr::Text(text) => text.parse(),
        }
    }
}

impl From<RecencyWindow> for WindowRepr {
    fn from(window: RecencyWindow) -> Self {
        match window {
            RecencyWindow::All => WindowRepr::Text("all".to_string()),
            RecencyWindow::Years(n) => WindowRepr::Years(n),
        }
    }
}

impl FromStr for RecencyWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(RecencyWindow::All);
        }
        s.parse::<u32>()
            .map(RecencyWindow::Years)
            .map_err(|_| format!("invalid recency window {s:?}: expected \"all\" or a number of years"))
    }
}

fn word_pattern() -> &'static Regex {
    static WORDS: OnceLock<Regex> = OnceLock::new();
    WORDS.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").expect("static pattern compiles"))
}

/// Every standalone four-digit 19xx/20xx year in `text`.
///
/// A year must be a whole ASCII word, so "2019" in "Jan 2019" counts but the
/// digits in "v20191" or "Q2020" do not.
pub fn extract_years(text: &str) -> Vec<i32> {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| {
            word.len() == 4
                && word.bytes().all(|b| b.is_ascii_digit())
                && (word.starts_with("19") || word.starts_with("20"))
        })
        .filter_map(|word| word.parse().ok())
        .collect()
}

/// Whether an entry with this duration text belongs in a `window_years` window.
pub fn is_recent(duration: &str, window_years: u32, current_year: i32) -> bool {
    let text = duration.to_lowercase();
    if ONGOING_MARKERS.iter().any(|marker| text.contains(marker)) {
        return true;
    }

    match extract_years(&text).into_iter().max() {
        // Undated entries are kept.
        None => true,
        Some(end_year) => i64::from(current_year) - i64::from(end_year) <= i64::from(window_years),
    }
}

/// Filters the timeline to `window`, preserving order. Never fails.
pub fn filter_by_recency(
    entries: &[ExperienceEntry],
    window: RecencyWindow,
    current_year: i32,
) -> Vec<&ExperienceEntry> {
    match window {
        RecencyWindow::All => entries.iter().collect(),
        RecencyWindow::Years(years) => entries
            .iter()
            .filter(|entry| is_recent(&entry.duration, years, current_year))
            .collect(),
    }
}

/// The current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}
