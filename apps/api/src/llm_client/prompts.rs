// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; only cross-cutting pieces live here.

/// System instruction for schema-constrained calls.
pub const JSON_ONLY_SYSTEM: &str = "You are a JSON-only generator. \
    You must return valid JSON matching the schema provided. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// MIME type requested for structured output.
pub const JSON_MIME_TYPE: &str = "application/json";
