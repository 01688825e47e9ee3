//! Prompt templates for the planner
//!
//! Handlebars templates with a file-override chain and embedded fallbacks.

mod embedded;
mod loader;

pub use loader::{ItineraryContext, PromptLoader, StaysContext, TravelContext};
