//! Acceptance rules for raw candidate answers.
//!
//! Every rule works on the raw text of one turn and never fails loudly: a
//! rejected answer is a normal outcome that sends the candidate back to the
//! same question.

use once_cell::sync::Lazy;
use regex::Regex;

/// Inclusive upper bound for declared years of experience.
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

/// Minimum number of digits a phone number must contain.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Coarse email shape: local part without `@`, an `@`, then anything
/// containing a dot with text on both sides.
///
/// Intentionally lax. Addresses such as `a@@b.c` pass; tightening this
/// would reject answers earlier intake flows accepted.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@.+\..+").expect("email pattern is valid"));

/// Returns true if the input looks enough like an email address.
pub fn validate_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input.trim())
}

/// Returns true if the input holds at least ten digits once every
/// non-digit character (spaces, dashes, parentheses, `+`) is removed.
pub fn validate_phone(input: &str) -> bool {
    input.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

/// Returns true if the trimmed input is made only of decimal digits and
/// names a whole number of years between 0 and 50.
pub fn validate_experience(input: &str) -> bool {
    parse_experience(input).is_some()
}

fn parse_experience(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // Overflowing digit strings are out of range anyway.
    let years: u32 = trimmed.parse().ok()?;
    (years <= MAX_EXPERIENCE_YEARS).then_some(years)
}

/// Splits a declared tech stack into distinct technology names.
///
/// Separators are `,` and `/`. Tokens are trimmed, empty tokens dropped,
/// and later duplicates (compared case-insensitively) discarded so the
/// first spelling wins and declaration order is kept.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut technologies = Vec::new();

    for token in input.split([',', '/']) {
        let tech = token.trim();
        if tech.is_empty() {
            continue;
        }
        let key = tech.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        technologies.push(tech.to_string());
    }

    technologies
}

/// Returns true if the declared stack names at least one technology.
pub fn validate_tech_stack(input: &str) -> bool {
    !parse_tech_stack(input).is_empty()
}
