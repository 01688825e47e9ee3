//! Plan assembly: prompts in, parsed travel plan out
//!
//! The planner owns its LLM client and prompt loader; nothing here lives at
//! process scope, so callers decide the client's lifetime.

use std::sync::Arc;

use eyre::{Context, Result};
use itinerary::{parse_stay_names, segment};
use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::domain::{BudgetSplit, PlanRequest, TravelPlan};
use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::prompts::{ItineraryContext, PromptLoader, StaysContext, TravelContext};

/// System prompt for itinerary generation
const PLANNER_SYSTEM_PROMPT: &str = "You are an expert travel planner for students.";

/// System prompt for the stays and travel sections
const ASSISTANT_SYSTEM_PROMPT: &str = "You are a helpful travel assistant.";

/// Generates travel plans by prompting a hosted LLM and parsing its output
pub struct Planner {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, config: PlannerConfig) -> Self {
        Self { llm, prompts, config }
    }

    /// Generate a full travel plan for the request
    ///
    /// The itinerary is the heart of the plan, so its failure is an error.
    /// The stays and travel sections degrade to empty content instead;
    /// a plan with a missing section beats no plan at all.
    pub async fn generate(&self, request: &PlanRequest) -> Result<TravelPlan> {
        debug!(destination = %request.destination, days = request.days, "generate: called");

        let raw_itinerary = self
            .itinerary_text(request)
            .await
            .context("Failed to generate the itinerary")?;

        let days = segment(&raw_itinerary);
        if days.is_empty() {
            warn!("generate: model output contained no day blocks");
        }

        let stays = match self.budget_stays(&request.destination).await {
            Ok(stays) => stays,
            Err(e) => {
                warn!(error = %e, "generate: stays lookup failed, continuing without");
                Vec::new()
            }
        };

        let travel_options = match self.travel_options(&request.destination).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "generate: travel options failed, continuing without");
                String::new()
            }
        };

        Ok(TravelPlan {
            request: request.clone(),
            itinerary: days,
            raw_itinerary,
            stays,
            travel_options,
            budget_split: BudgetSplit::from_total(request.budget),
        })
    }

    /// Ask the model for the raw day-wise itinerary text
    async fn itinerary_text(&self, request: &PlanRequest) -> Result<String> {
        let ctx = ItineraryContext {
            destination: request.destination.clone(),
            days: request.days,
            budget: request.budget,
            interests: request.interest_text(),
        };
        let prompt = self.prompts.render("itinerary", &ctx)?;

        let response = self
            .llm
            .complete(CompletionRequest {
                system_prompt: PLANNER_SYSTEM_PROMPT.to_string(),
                messages: vec![Message::user(prompt)],
                max_tokens: self.config.itinerary_max_tokens,
                temperature: self.config.itinerary_temperature,
            })
            .await?;

        Ok(response.content.unwrap_or_default())
    }

    /// Ask the model for a budget stays shortlist
    pub async fn budget_stays(&self, city: &str) -> Result<Vec<String>> {
        debug!(%city, "budget_stays: called");
        let ctx = StaysContext {
            city: city.to_string(),
            count: self.config.stays_count,
        };
        let prompt = self.prompts.render("stays", &ctx)?;

        let response = self
            .llm
            .complete(CompletionRequest {
                system_prompt: ASSISTANT_SYSTEM_PROMPT.to_string(),
                messages: vec![Message::user(prompt)],
                max_tokens: self.config.stays_max_tokens,
                temperature: self.config.section_temperature,
            })
            .await?;

        Ok(parse_stay_names(&response.content.unwrap_or_default()))
    }

    /// Ask the model how students get to and around the city
    pub async fn travel_options(&self, city: &str) -> Result<String> {
        debug!(%city, "travel_options: called");
        let ctx = TravelContext { city: city.to_string() };
        let prompt = self.prompts.render("travel", &ctx)?;

        let response = self
            .llm
            .complete(CompletionRequest {
                system_prompt: ASSISTANT_SYSTEM_PROMPT.to_string(),
                messages: vec![Message::user(prompt)],
                max_tokens: self.config.travel_max_tokens,
                temperature: self.config.section_temperature,
            })
            .await?;

        Ok(response.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;

    const ITINERARY_TEXT: &str = "Day 1: Baga Beach, Goa - Arrival\nMorning: check in\nEvening: beach walk\nDay 2: Fort Aguada, Goa - History\nMorning: fort visit";

    fn planner_with(client: MockLlmClient) -> (Planner, Arc<MockLlmClient>) {
        let client = Arc::new(client);
        let planner = Planner::new(client.clone(), PromptLoader::embedded_only(), PlannerConfig::default());
        (planner, client)
    }

    fn request() -> PlanRequest {
        PlanRequest::new("Goa", 2, 3000, vec!["Adventure".to_string()]).unwrap()
    }

    #[tokio::test]
    async fn test_generate_full_plan() {
        let mock = MockLlmClient::new(vec![
            ITINERARY_TEXT,
            "- Zostel Goa\n- The Hosteller\n",
            "Bus: cheap overnight routes.\nTrain: book early.",
        ]);
        let (planner, client) = planner_with(mock);

        let plan = planner.generate(&request()).await.unwrap();

        assert_eq!(plan.itinerary.len(), 2);
        assert_eq!(plan.itinerary[0].place_name, "Baga Beach, Goa");
        assert_eq!(plan.raw_itinerary, ITINERARY_TEXT);
        assert_eq!(plan.stays, vec!["Zostel Goa", "The Hosteller"]);
        assert!(plan.travel_options.contains("Bus"));
        assert_eq!(plan.budget_split.travel, 1200);
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_generate_prompts_carry_request_fields() {
        let mock = MockLlmClient::new(vec![ITINERARY_TEXT, "Zostel Goa", "Bus info"]);
        let (planner, client) = planner_with(mock);

        planner.generate(&request()).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 3);

        // Itinerary prompt carries destination, days, budget and interests
        let itinerary_prompt = &requests[0].messages[0].content;
        assert!(itinerary_prompt.contains("2-day"));
        assert!(itinerary_prompt.contains("Goa"));
        assert!(itinerary_prompt.contains("3000 INR"));
        assert!(itinerary_prompt.contains("Adventure"));
        assert_eq!(requests[0].system_prompt, PLANNER_SYSTEM_PROMPT);
        assert_eq!(requests[0].max_tokens, 900);

        // Stays and travel prompts use the assistant persona
        assert_eq!(requests[1].system_prompt, ASSISTANT_SYSTEM_PROMPT);
        assert!(requests[1].messages[0].content.contains("List 4"));
        assert_eq!(requests[2].system_prompt, ASSISTANT_SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn test_generate_degrades_when_sections_fail() {
        // Only the itinerary succeeds; stays and travel calls hit errors
        let mock = MockLlmClient::new(vec![ITINERARY_TEXT]);
        let (planner, _) = planner_with(mock);

        let plan = planner.generate(&request()).await.unwrap();

        assert_eq!(plan.itinerary.len(), 2);
        assert!(plan.stays.is_empty());
        assert!(plan.travel_options.is_empty());
    }

    #[tokio::test]
    async fn test_generate_fails_without_itinerary() {
        let mock = MockLlmClient::with_outcomes(vec![Err("upstream 500")]);
        let (planner, _) = planner_with(mock);

        let result = planner.generate(&request()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_generate_tolerates_unstructured_itinerary() {
        // Model ignored the template entirely; plan still assembles
        let mock = MockLlmClient::new(vec!["Have a nice trip!", "Zostel", "Bus"]);
        let (planner, _) = planner_with(mock);

        let plan = planner.generate(&request()).await.unwrap();
        assert!(plan.itinerary.is_empty());
        assert_eq!(plan.raw_itinerary, "Have a nice trip!");
    }

    #[tokio::test]
    async fn test_budget_stays_strips_markers() {
        let mock = MockLlmClient::new(vec!["1. Zostel Goa\n2. Madpackers"]);
        let (planner, _) = planner_with(mock);

        let stays = planner.budget_stays("Goa").await.unwrap();
        assert_eq!(stays, vec!["Zostel Goa", "Madpackers"]);
    }
}
