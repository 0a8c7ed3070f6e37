//! Prompt template management.
//!
//! Templates live in `templates/prompts/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::context;

/// Render the system prompt for the LLM classifier.
///
/// # Arguments
/// * `description` - Resident's description of the issue
/// * `categories` / `priorities` - Allowed values the model must pick from
/// * `json_schema` - JSON schema of the expected answer
/// * `has_image` - Whether a photo accompanies the prompt
pub fn render_classifier_prompt(
    description: &str,
    categories: &[&str],
    priorities: &[&str],
    json_schema: &str,
    has_image: bool,
) -> Result<String, TemplateError> {
    render_template(
        "classifier/system.jinja",
        context! {
            description => description,
            categories => categories,
            priorities => priorities,
            json_schema => json_schema,
            has_image => has_image,
            max_title_words => 7,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_classifier_prompt() {
        let prompt = render_classifier_prompt(
            "Streetlight flickering all night",
            &["pothole", "other"],
            &["low", "high"],
            "{\"type\": \"object\"}",
            true,
        )
        .unwrap();

        assert!(prompt.contains("Streetlight flickering all night"));
        assert!(prompt.contains("pothole, other"));
        assert!(prompt.contains("low, high"));
        assert!(prompt.contains("{\"type\": \"object\"}"));
        assert!(prompt.contains("attached photo"));
    }

    #[test]
    fn test_render_classifier_prompt_without_image() {
        let prompt =
            render_classifier_prompt("Graffiti on wall", &["graffiti"], &["low"], "{}", false)
                .unwrap();
        assert!(!prompt.contains("attached photo"));
    }
}
