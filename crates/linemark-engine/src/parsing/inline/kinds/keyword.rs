use std::sync::OnceLock;

use regex::Regex;

/// Which bracket pair a keyword was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// `[keyword]`
    Bracket,
    /// `{keyword}`
    Brace,
}

impl KeywordKind {
    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\[([^\]]*)\]|\{([^}]*)\}").expect("Invalid keyword regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bracket_kinds_match() {
        let found: Vec<_> = KeywordKind::regex()
            .captures_iter("[a] and {b}")
            .map(|c| (c.get(1).is_some(), c[0].to_string()))
            .collect();
        assert_eq!(found, vec![(true, "[a]".into()), (false, "{b}".into())]);
    }
}
