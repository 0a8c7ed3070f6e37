//! Helpers for turning free-form LLM output into typed responses.

mod parser;
mod response;

pub use parser::parse_with_fallback;
pub use response::LlmResponse;
