use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches any string containing at least one non-whitespace character
    /// - Valid: "a", "  pothole ", "x\n"
    /// - Invalid: "", "   ", "\t\n"
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}
