use schemars::gen::SchemaGenerator;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// A typed answer expected back from a language model.
///
/// Parsing never fails outright: when the model output cannot be coerced into
/// `Self`, the `Default` value is used and flagged through `mark_as_fallback`.
pub trait LlmResponse: DeserializeOwned + Default + JsonSchema {
    fn mark_as_fallback(&mut self, error_message: String);

    fn is_success(&self) -> bool;

    /// Pretty-printed JSON schema, embedded into prompts
    fn json_schema_string() -> String {
        let mut gen = SchemaGenerator::default();
        let schema = gen.root_schema_for::<Self>();
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
    }
}
