// Shared prompt fragments.
// Each service that needs generation calls defines its own prompts.rs alongside it.
// This file contains the cross-cutting JSON contract fragments.

/// Persona shared by every resume review prompt.
pub const REVIEWER_PERSONA: &str = "You are an expert resume analyst and career advisor.";

/// Lead-in placed directly above a rendered schema block.
pub const SCHEMA_LEAD: &str = "as a JSON object with EXACTLY the following structure. \
    The `//` notes give each field's type and meaning; do not copy them into your answer.";

/// Closing instruction appended to every prompt that expects a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Ensure ALL keys are present even if values are empty arrays or default values. \
    Return the JSON object only. DO NOT include any explanation, markdown code fences, \
    comments, or text outside the JSON structure.";
