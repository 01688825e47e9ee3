//! Tripplan - AI travel planner for students
//!
//! Collects a destination, trip length, budget and interest tags, renders
//! natural-language prompts, sends them to a hosted chat-completions
//! inference endpoint, and parses the returned text into a day-wise travel
//! plan with budget stays, travel options and an estimated budget split.
//! The assembled plan is rendered to the terminal (with map links) and
//! written out as a flat-text document.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and the OpenAI-compatible implementation
//! - [`prompts`] - Handlebars prompt templates with embedded fallbacks
//! - [`planner`] - Plan assembly: prompts in, parsed travel plan out
//! - [`domain`] - Plan requests, budget split, interest catalog
//! - [`report`] - Flat-text plan document assembly
//! - [`output`] - Terminal rendering and map URLs
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod output;
pub mod planner;
pub mod prompts;
pub mod report;

// Re-export commonly used types
pub use config::{Config, LlmConfig, OutputConfig, PlannerConfig, ResolvedLlmConfig};
pub use domain::{ALL_INTERESTS, BudgetSplit, PlanRequest, STUDENT_TIPS, TravelPlan};
pub use llm::{
    CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, OpenAIClient, Role, StopReason, TokenUsage,
    create_client,
};
pub use planner::Planner;
pub use prompts::{ItineraryContext, PromptLoader, StaysContext, TravelContext};
