//! Day-block segmentation of generated itinerary text
//!
//! Splits a block of free-form multi-line text into ordered day entries.
//! A title line is any line whose trimmed, lowercased form starts with the
//! literal prefix "day". Detail lines are the non-empty trimmed lines
//! between one title and the next. Text before the first title (summaries,
//! greetings the model adds anyway) is dropped.

use tracing::debug;

/// One day of an itinerary, carved out of free-form generated text.
///
/// An entry is built up while scanning and sealed when the next title line
/// (or end of input) is reached; it is never mutated after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    /// The line that opened this block, outer whitespace stripped
    pub title: String,

    /// Non-empty trimmed lines between this title and the next
    pub detail_lines: Vec<String>,

    /// Place pulled from the title, empty when the title has no usable shape
    pub place_name: String,
}

impl DayEntry {
    fn open(title: &str) -> Self {
        Self {
            title: title.to_string(),
            detail_lines: Vec::new(),
            place_name: extract_place_name(title),
        }
    }
}

/// Split generated itinerary text into ordered day entries.
///
/// Single forward pass, no lookahead. Never fails: input with no title
/// lines (or no lines at all) yields an empty vec, and a malformed title
/// yields an entry with an empty `place_name`.
pub fn segment(raw: &str) -> Vec<DayEntry> {
    debug!(len = raw.len(), "segment: called");
    let mut result = Vec::new();
    let mut current: Option<DayEntry> = None;

    for line in raw.lines() {
        let line = line.trim();

        if line.to_lowercase().starts_with("day") {
            if let Some(entry) = current.take() {
                debug!(title = %entry.title, details = entry.detail_lines.len(), "segment: sealing entry");
                result.push(entry);
            }
            current = Some(DayEntry::open(line));
        } else if !line.is_empty()
            && let Some(entry) = current.as_mut()
        {
            entry.detail_lines.push(line.to_string());
        }
        // Blank lines, and anything before the first title, are dropped
    }

    if let Some(entry) = current.take() {
        debug!(title = %entry.title, details = entry.detail_lines.len(), "segment: sealing final entry");
        result.push(entry);
    }

    debug!(entries = result.len(), "segment: done");
    result
}

/// Pull the place name out of a title line.
///
/// "Day 1: Gateway, Mumbai - Arrival" -> "Gateway, Mumbai". Splits on the
/// first colon, then takes what precedes the first hyphen of the remainder.
/// Best effort: a title without a colon, or with nothing usable after it,
/// yields an empty string rather than an error.
fn extract_place_name(title: &str) -> String {
    let Some((_, rest)) = title.split_once(':') else {
        return String::new();
    };

    let place = match rest.split_once('-') {
        Some((before_hyphen, _)) => before_hyphen,
        None => rest,
    };

    place.trim().to_string()
}
