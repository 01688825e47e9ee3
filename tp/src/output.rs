//! Terminal rendering of assembled plans

use colored::Colorize;
use tracing::debug;

use crate::domain::{ALL_INTERESTS, BudgetSplit, STUDENT_TIPS, TravelPlan};

/// Build a map link for a location
///
/// The location goes into the query string of the configured maps base URL.
/// An unparseable base degrades to an empty string; callers skip empty
/// links.
pub fn maps_url(base: &str, location: &str) -> String {
    reqwest::Url::parse_with_params(base, &[("q", location), ("output", "embed")])
        .map(String::from)
        .unwrap_or_default()
}

/// Print the full plan to the terminal
pub fn print_plan(plan: &TravelPlan, maps_base: &str) {
    debug!(days = plan.itinerary.len(), "print_plan: called");

    println!();
    println!("{}", "Destination Location".bold().underline());
    print_map_line(maps_base, &plan.request.destination);

    println!();
    println!("{}", "Day-wise Itinerary".bold().underline());
    if plan.itinerary.is_empty() {
        println!("The generator returned no day-wise itinerary. Raw response:");
        println!("{}", plan.raw_itinerary);
    }
    for entry in &plan.itinerary {
        println!();
        println!("{}", entry.title.cyan().bold());
        for line in &entry.detail_lines {
            println!("- {}", line);
        }
        if !entry.place_name.is_empty() {
            print_map_line(maps_base, &format!("{}, {}", entry.place_name, plan.request.destination));
        }
    }

    println!();
    print_stays(&plan.request.destination, &plan.stays, maps_base);

    println!();
    print_travel_options(&plan.request.destination, &plan.travel_options);

    println!();
    print_budget_split(&plan.budget_split);

    println!();
    println!("{}", "Student Tips".bold().underline());
    for tip in STUDENT_TIPS {
        println!("✔ {}", tip);
    }
}

/// Print the budget stays section
pub fn print_stays(city: &str, stays: &[String], maps_base: &str) {
    println!("{}", format!("Budget-Friendly Hostels & Stays in {}", city).bold().underline());
    if stays.is_empty() {
        println!("No hostel data found. Try another destination.");
        return;
    }
    for stay in stays {
        println!("{}", stay.green().bold());
        print_map_line(maps_base, &format!("{}, {}", stay, city));
    }
}

/// Print the travel options section
pub fn print_travel_options(city: &str, text: &str) {
    println!("{}", format!("Travel Options for {}", city).bold().underline());
    if text.trim().is_empty() {
        println!("No travel information available.");
    } else {
        println!("{}", text.trim_end());
    }
}

/// Print the interest catalog
pub fn print_interests() {
    println!("Supported interests:");
    for interest in ALL_INTERESTS {
        println!("  {}", interest);
    }
}

fn print_budget_split(split: &BudgetSplit) {
    println!("{}", "Estimated Budget Split".bold().underline());
    println!("Travel: ₹{}", split.travel);
    println!("Stay:   ₹{}", split.stay);
    println!("Food:   ₹{}", split.food);
    println!("Others: ₹{}", split.others);
}

fn print_map_line(maps_base: &str, location: &str) {
    let url = maps_url(maps_base, location);
    if !url.is_empty() {
        println!("{}", format!("Map: {}", url).dimmed());
    }
}
