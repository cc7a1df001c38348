// Resume review engine.
// Every task runs the same stages: prompt -> generate -> normalize -> extract -> repair.
// Only `handlers` and `pipeline` know about the generation backend.

pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod repair;
pub mod request;
pub mod schema;
