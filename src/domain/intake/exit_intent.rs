//! Detection of a candidate's wish to leave the conversation.

/// Words that end the session whenever they appear in a turn.
pub const EXIT_KEYWORDS: [&str; 5] = ["exit", "quit", "bye", "goodbye", "end"];

/// Returns true if any word of the input is an exit keyword.
///
/// Words are maximal runs of alphanumeric characters, compared without
/// regard to case. Matching whole words keeps answers like
/// "Backend Engineer" or "Weekend shifts" from ending the session.
pub fn is_exit_intent(input: &str) -> bool {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| {
            EXIT_KEYWORDS
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_keyword_inside_sentence() {
        assert!(is_exit_intent("I want to quit now"));
    }

    #[test]
    fn detects_every_keyword() {
        for keyword in EXIT_KEYWORDS {
            assert!(is_exit_intent(keyword), "{keyword} should end the session");
        }
    }

    #[test]
    fn is_case_insensitive() {
        assert!(is_exit_intent("BYE"));
        assert!(is_exit_intent("GoodBye then"));
    }

    #[test]
    fn ignores_surrounding_punctuation() {
        assert!(is_exit_intent("exit."));
        assert!(is_exit_intent("ok, end!"));
    }

    #[test]
    fn ignores_keywords_embedded_in_longer_words() {
        assert!(!is_exit_intent("Backend Engineer"));
        assert!(!is_exit_intent("Weekend shifts"));
        assert!(!is_exit_intent("Appendix, Byers"));
    }

    #[test]
    fn ordinary_answers_are_not_exit_intent() {
        assert!(!is_exit_intent("Jane Doe"));
        assert!(!is_exit_intent("jane@x.com"));
        assert!(!is_exit_intent("Python, Go"));
        assert!(!is_exit_intent(""));
    }
}
