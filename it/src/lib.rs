//! Itinerary - heuristic parsing of model-generated travel text
//!
//! Hosted text generators are asked for a day-wise itinerary in a loose
//! template ("Day 1: <place> - <title>" followed by free-text detail lines)
//! and for hostel shortlists as one name per line. They follow the template
//! only best-effort, so everything in this crate is written to degrade
//! instead of fail: unparseable input yields fewer entries or empty fields,
//! never an error.
//!
//! # Example
//!
//! ```
//! use itinerary::segment;
//!
//! let days = segment("Day 1: Baga Beach, Goa - Arrival\nMorning: check in\n");
//! assert_eq!(days.len(), 1);
//! assert_eq!(days[0].place_name, "Baga Beach, Goa");
//! ```

mod segment;
mod stays;

pub use segment::{DayEntry, segment};
pub use stays::parse_stay_names;
