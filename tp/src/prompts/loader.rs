//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::PathBuf;

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Context for the day-wise itinerary template
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryContext {
    pub destination: String,
    pub days: u32,
    pub budget: u32,
    /// Comma-joined interest tags, or "general travel"
    pub interests: String,
}

/// Context for the budget stays template
#[derive(Debug, Clone, Serialize)]
pub struct StaysContext {
    pub city: String,
    pub count: u32,
}

/// Context for the travel options template
#[derive(Debug, Clone, Serialize)]
pub struct TravelContext {
    pub city: String,
}

/// Loads and renders prompt templates
///
/// Checks in order: working-directory override (`.tripplan/prompts/`),
/// user config directory (`~/.config/tripplan/prompts/`), embedded
/// fallback compiled into the binary.
pub struct PromptLoader {
    hbs: Handlebars<'static>,
    /// Working-directory override (e.g. `.tripplan/prompts/`)
    local_dir: Option<PathBuf>,
    /// User config directory (e.g. `~/.config/tripplan/prompts/`)
    user_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the working directory
    pub fn new() -> Self {
        let local_dir = PathBuf::from(".tripplan/prompts");
        let user_dir = dirs::config_dir().map(|d| d.join("tripplan").join("prompts"));

        let local_exists = local_dir.exists();
        let user_exists = user_dir.as_ref().is_some_and(|d| d.exists());
        debug!(?local_dir, %local_exists, ?user_dir, %user_exists, "PromptLoader::new: checking directories");

        Self {
            hbs: plain_text_handlebars(),
            local_dir: local_exists.then_some(local_dir),
            user_dir: if user_exists { user_dir } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: plain_text_handlebars(),
            local_dir: None,
            user_dir: None,
        }
    }

    /// Load a template by name
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        for dir in [&self.local_dir, &self.user_dir].into_iter().flatten() {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt {}: {}", path.display(), e));
            }
        }

        debug!("PromptLoader::load_template: trying embedded fallback");
        if let Some(content) = embedded::get_embedded(name) {
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render<C: Serialize>(&self, template_name: &str, context: &C) -> Result<String> {
        debug!(%template_name, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;

        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }
}

impl Default for PromptLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompts are plain text, not HTML; destinations like "St. John's" must
/// pass through unescaped.
fn plain_text_handlebars() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(handlebars::no_escape);
    hbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_itinerary() {
        let loader = PromptLoader::embedded_only();
        let ctx = ItineraryContext {
            destination: "Goa".to_string(),
            days: 3,
            budget: 3000,
            interests: "Adventure, Food".to_string(),
        };

        let prompt = loader.render("itinerary", &ctx).unwrap();
        assert!(prompt.contains("3-day budget-friendly travel itinerary for Goa"));
        assert!(prompt.contains("Budget: 3000 INR."));
        assert!(prompt.contains("Interests: Adventure, Food."));
        assert!(prompt.contains("Day 1: <Place Name>, Goa - Short title"));
    }

    #[test]
    fn test_render_stays() {
        let loader = PromptLoader::embedded_only();
        let ctx = StaysContext {
            city: "Delhi".to_string(),
            count: 4,
        };

        let prompt = loader.render("stays", &ctx).unwrap();
        assert!(prompt.contains("List 4 budget-friendly hostels or hotels for students in Delhi."));
    }

    #[test]
    fn test_render_travel() {
        let loader = PromptLoader::embedded_only();
        let ctx = TravelContext {
            city: "Paris".to_string(),
        };

        let prompt = loader.render("travel", &ctx).unwrap();
        assert!(prompt.contains("travel to and within Paris"));
        assert!(prompt.contains("1. Bus"));
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let loader = PromptLoader::embedded_only();
        let ctx = TravelContext {
            city: "St. John's".to_string(),
        };

        let prompt = loader.render("travel", &ctx).unwrap();
        assert!(prompt.contains("St. John's"));
    }

    #[test]
    fn test_unknown_template() {
        let loader = PromptLoader::embedded_only();
        let ctx = TravelContext {
            city: "Paris".to_string(),
        };

        assert!(loader.render("nonexistent-template", &ctx).is_err());
    }
}
