use lazy_static::lazy_static;
use regex::Regex;

use super::LlmResponse;

lazy_static! {
    /// `,` directly before a closing `}` or `]`
    static ref TRAILING_COMMA_RE: Regex = Regex::new(r",(\s*[}\]])").unwrap();

    /// `"a" + "b"` style concatenation
    static ref STRING_CONCAT_RE: Regex = Regex::new(r#""\s*\+\s*""#).unwrap();

    /// Fenced code block, optionally tagged with a language
    static ref FENCED_BLOCK_RE: Regex = Regex::new(r"(?s)```[a-zA-Z]*\s*\n?(.*?)```").unwrap();
}

/// Pull the JSON object out of a model reply.
///
/// Fenced code blocks win; otherwise the reply itself if it starts with `{`;
/// otherwise the span from the first `{` to the last `}`.
pub fn extract_json_string(text: &str) -> Result<String, String> {
    if let Some(block) = FENCED_BLOCK_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
    {
        return Ok(block.as_str().trim().to_string());
    }

    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed.to_string());
    }

    let start = text
        .find('{')
        .ok_or_else(|| "No JSON object found in response".to_string())?;
    let end = text
        .rfind('}')
        .ok_or_else(|| "Incomplete JSON object in response".to_string())?;

    if start < end {
        Ok(text[start..=end].to_string())
    } else {
        Err("Invalid JSON boundaries in response".to_string())
    }
}

pub fn fix_trailing_commas(json_str: &str) -> String {
    TRAILING_COMMA_RE.replace_all(json_str, "$1").to_string()
}

pub fn fix_string_concatenation(json_str: &str) -> String {
    STRING_CONCAT_RE.replace_all(json_str, "").to_string()
}

fn repair_with_llm_json(json_str: &str) -> Option<String> {
    let options = llm_json::RepairOptions::default();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        llm_json::repair_json(json_str, &options)
    }));

    match result {
        Ok(Ok(repaired)) => Some(repaired),
        Ok(Err(e)) => {
            tracing::debug!("JSON repair failed: {:?}", e);
            None
        }
        Err(_) => {
            tracing::warn!("JSON repair panicked");
            None
        }
    }
}

/// Candidate texts in the order they are tried: as extracted, after the
/// cheap regex fixes, after a full `llm_json` repair.
fn candidates(json_str: &str) -> impl Iterator<Item = String> + '_ {
    let quick = move || fix_trailing_commas(&fix_string_concatenation(json_str));
    std::iter::once(json_str.to_string())
        .chain(std::iter::once_with(quick))
        .chain(std::iter::once_with(move || repair_with_llm_json(json_str)).flatten())
}

fn try_parse<T: LlmResponse>(text: &str) -> Result<T, String> {
    let json_str = extract_json_string(text)?;

    tracing::debug!(
        "Extracted JSON (first 500 chars): {}",
        json_str.chars().take(500).collect::<String>()
    );

    for (attempt, candidate) in candidates(&json_str).enumerate() {
        if let Ok(parsed) = serde_json::from_str::<T>(&candidate) {
            tracing::debug!("JSON parsed on attempt {}", attempt + 1);
            return Ok(parsed);
        }
    }

    Err(format!(
        "Failed to parse JSON after all repair attempts. Original: {}",
        json_str.chars().take(200).collect::<String>()
    ))
}

/// Parse a model reply into `T`, returning a flagged `T::default()` when
/// every strategy fails.
pub fn parse_with_fallback<T: LlmResponse>(text: &str) -> T {
    match try_parse::<T>(text) {
        Ok(parsed) => parsed,
        Err(error_msg) => {
            tracing::warn!("LLM response parsing failed, using fallback: {}", error_msg);
            let mut fallback = T::default();
            fallback.mark_as_fallback(error_msg);
            fallback
        }
    }
}
