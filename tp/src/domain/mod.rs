//! Core domain types: plan requests, budget split, interest catalog

use eyre::{Result, bail};
use itinerary::DayEntry;
use tracing::debug;

/// The interest tags a plan can be steered towards
pub const ALL_INTERESTS: [&str; 12] = [
    "Adventure",
    "Relaxation",
    "Culture",
    "Food",
    "Nature",
    "Historical Places",
    "Shopping",
    "Photography",
    "Nightlife",
    "Spiritual",
    "Wildlife",
    "Budget Travel",
];

/// Fixed student tips appended to every plan
pub const STUDENT_TIPS: [&str; 4] = [
    "Use public transport",
    "Book hostels or budget stays",
    "Travel in groups",
    "Avoid peak seasons",
];

/// Trip length bounds
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;

/// Smallest budget a plan can be asked for, in INR
pub const MIN_BUDGET_INR: u32 = 1000;

/// A validated request for a travel plan
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub destination: String,
    pub days: u32,
    pub budget: u32,
    pub interests: Vec<String>,
}

impl PlanRequest {
    /// Validate inputs and build a request
    pub fn new(destination: impl Into<String>, days: u32, budget: u32, interests: Vec<String>) -> Result<Self> {
        let destination = destination.into().trim().to_string();
        debug!(%destination, days, budget, interest_count = interests.len(), "PlanRequest::new: called");

        if destination.is_empty() {
            bail!("Please enter a destination");
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            bail!("Number of days must be between {} and {}", MIN_DAYS, MAX_DAYS);
        }
        if budget < MIN_BUDGET_INR {
            bail!("Budget must be at least {} INR", MIN_BUDGET_INR);
        }

        Ok(Self {
            destination,
            days,
            budget,
            interests,
        })
    }

    /// Comma-joined interests for prompt rendering, or "general travel"
    pub fn interest_text(&self) -> String {
        if self.interests.is_empty() {
            "general travel".to_string()
        } else {
            self.interests.join(", ")
        }
    }
}

/// Canonicalize interest tags against the catalog
///
/// Tags are matched case-insensitively and returned in catalog spelling.
/// `all` selects the whole catalog (and wins over individual tags).
pub fn resolve_interests(tags: &[String], all: bool) -> Result<Vec<String>> {
    debug!(tag_count = tags.len(), all, "resolve_interests: called");
    if all {
        return Ok(ALL_INTERESTS.iter().map(|s| s.to_string()).collect());
    }

    let mut resolved = Vec::with_capacity(tags.len());
    for tag in tags {
        match ALL_INTERESTS.iter().find(|known| known.eq_ignore_ascii_case(tag.trim())) {
            Some(known) => resolved.push(known.to_string()),
            None => bail!(
                "Unknown interest '{}'. Supported interests: {}",
                tag,
                ALL_INTERESTS.join(", ")
            ),
        }
    }
    Ok(resolved)
}

/// Estimated budget split, in INR
///
/// 40% travel, 30% stay, 20% food, 10% others, each truncated to whole
/// rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSplit {
    pub travel: u32,
    pub stay: u32,
    pub food: u32,
    pub others: u32,
}

impl BudgetSplit {
    pub fn from_total(budget: u32) -> Self {
        Self {
            travel: (budget as f64 * 0.4) as u32,
            stay: (budget as f64 * 0.3) as u32,
            food: (budget as f64 * 0.2) as u32,
            others: (budget as f64 * 0.1) as u32,
        }
    }
}

/// A fully assembled travel plan
///
/// `itinerary` is the parsed day-wise view of `raw_itinerary`; the report
/// keeps the raw text so nothing the generator wrote is lost on export.
#[derive(Debug, Clone)]
pub struct TravelPlan {
    pub request: PlanRequest,
    pub itinerary: Vec<DayEntry>,
    pub raw_itinerary: String,
    pub stays: Vec<String>,
    pub travel_options: String,
    pub budget_split: BudgetSplit,
}
