// Portfolio generation: enrichment + avatar synthesis.
// All model calls go through llm_client; no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod image;
pub mod prompts;
pub mod schema;
