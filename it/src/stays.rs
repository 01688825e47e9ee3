//! Stay-name extraction from list-shaped model output
//!
//! The generator is asked for hostel names, one per line, no explanation.
//! In practice the names come back decorated as a bulleted or numbered
//! list, so each line is stripped of leading list markers before use.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Leading list markers: bullets, numbering, and the whitespace around them
fn list_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-•*\d.)\s]+").expect("list marker pattern is valid"))
}

/// Extract stay names from one-name-per-line model output.
///
/// Blank lines and lines that are nothing but list markers are dropped.
/// Never fails.
pub fn parse_stay_names(raw: &str) -> Vec<String> {
    debug!(len = raw.len(), "parse_stay_names: called");
    let stays: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let name = list_marker().replace(line, "").trim().to_string();
            (!name.is_empty()).then_some(name)
        })
        .collect();
    debug!(count = stays.len(), "parse_stay_names: done");
    stays
}
