pub mod clock;
pub mod llm;
pub mod prompts;
pub mod types;
pub mod validation;
