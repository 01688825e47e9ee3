//! Flat-text travel plan document assembly
//!
//! The exported document is plain multi-line text: the raw itinerary is
//! reproduced verbatim under its header, followed by stays, travel options,
//! the budget split and the student tips.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;
use eyre::{Context, Result};
use tracing::debug;

use crate::domain::{STUDENT_TIPS, TravelPlan};

/// Assemble the plan document as one flat string
pub fn build_report(plan: &TravelPlan) -> String {
    debug!(destination = %plan.request.destination, "build_report: called");
    let mut doc = String::new();

    let _ = writeln!(
        doc,
        "TRAVEL PLAN: {} ({} days, budget {} INR)",
        plan.request.destination, plan.request.days, plan.request.budget
    );
    let _ = writeln!(doc, "Generated: {}", Local::now().format("%Y-%m-%d"));
    doc.push('\n');

    doc.push_str("DAY-WISE ITINERARY\n");
    doc.push_str(plan.raw_itinerary.trim_end());
    doc.push_str("\n\n");

    doc.push_str("BUDGET HOSTELS / STAYS\n");
    for stay in &plan.stays {
        let _ = writeln!(doc, "- {}", stay);
    }
    doc.push('\n');

    doc.push_str("TRAVEL OPTIONS\n");
    doc.push_str(plan.travel_options.trim_end());
    doc.push_str("\n\n");

    doc.push_str("ESTIMATED BUDGET SPLIT\n");
    let split = plan.budget_split;
    let _ = writeln!(doc, "Travel: ₹{}", split.travel);
    let _ = writeln!(doc, "Stay: ₹{}", split.stay);
    let _ = writeln!(doc, "Food: ₹{}", split.food);
    let _ = writeln!(doc, "Others: ₹{}", split.others);
    doc.push('\n');

    doc.push_str("STUDENT TIPS\n");
    for tip in STUDENT_TIPS {
        let _ = writeln!(doc, "• {}", tip);
    }

    doc
}

/// Write the plan document to a file
pub fn write_report(plan: &TravelPlan, path: &Path) -> Result<()> {
    debug!(?path, "write_report: called");
    fs::write(path, build_report(plan)).context(format!("Failed to write plan document to {}", path.display()))
}
