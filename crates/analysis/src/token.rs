/// Normalize one whitespace-delimited candidate into a token.
///
/// Leading and trailing characters that are neither alphabetic nor numeric are
/// stripped and the remainder is lowercased. Inner punctuation is kept, so
/// `"don't"` stays `"don't"` and `"--e-mail--"` becomes `"e-mail"`. Returns
/// `None` when nothing alphanumeric is left.
pub fn normalize_token(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Split `text` on Unicode whitespace and normalize each candidate.
///
/// Candidates that normalize to nothing (pure punctuation, symbols) are
/// dropped. Order of the surviving tokens follows the input.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_edges_and_lowercases() {
        assert_eq!(normalize_token("Hello,").as_deref(), Some("hello"));
        assert_eq!(normalize_token("\"Quoted!\"").as_deref(), Some("quoted"));
        assert_eq!(normalize_token("(42)").as_deref(), Some("42"));
        assert_eq!(normalize_token("don't").as_deref(), Some("don't"));
        assert_eq!(normalize_token("--e-mail--").as_deref(), Some("e-mail"));
    }

    #[test]
    fn punctuation_only_is_dropped() {
        assert_eq!(normalize_token("..."), None);
        assert_eq!(normalize_token("—"), None);
        assert_eq!(normalize_token(""), None);
    }

    #[test]
    fn non_ascii_letters_and_digits_survive() {
        assert_eq!(normalize_token("«Привет»").as_deref(), Some("привет"));
        assert_eq!(normalize_token("Ünïcödé.").as_deref(), Some("ünïcödé"));
        assert_eq!(normalize_token("٣").as_deref(), Some("٣"));
    }

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        let tokens: Vec<String> = tokenize("One\ttwo\n\nthree\u{a0}four  - ").collect();
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }
}
