//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Day-wise itinerary prompt
pub const ITINERARY: &str = include_str!("../../prompts/itinerary.pmt");

/// Budget stays shortlist prompt
pub const STAYS: &str = include_str!("../../prompts/stays.pmt");

/// Travel options prompt
pub const TRAVEL: &str = include_str!("../../prompts/travel.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "itinerary" => Some(ITINERARY),
        "stays" => Some(STAYS),
        "travel" => Some(TRAVEL),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
