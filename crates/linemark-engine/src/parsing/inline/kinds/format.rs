use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Emphasis delimiter class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// `*text*`
    Asterisk,
    /// `**text**`
    DoubleAsterisk,
    /// `_text_`
    Underscore,
    /// `__text__` and `___text___`
    DoubleUnderscore,
}

impl FormatKind {
    pub fn delimiter(self) -> &'static str {
        match self {
            FormatKind::Asterisk => "*",
            FormatKind::DoubleAsterisk => "**",
            FormatKind::Underscore => "_",
            FormatKind::DoubleUnderscore => "__",
        }
    }

    /// Longer delimiters come first so `**a**` is never read as `*` + `*a*`.
    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*|___(.+?)___|__(.+?)__|_(.+?)_")
                .expect("Invalid emphasis regex")
        })
    }

    /// Delimiter class and inner-text group of an emphasis match.
    pub fn of(caps: &Captures<'_>) -> Option<(FormatKind, usize)> {
        [
            (1, FormatKind::DoubleAsterisk),
            (2, FormatKind::Asterisk),
            (3, FormatKind::DoubleUnderscore),
            (4, FormatKind::DoubleUnderscore),
            (5, FormatKind::Underscore),
        ]
        .into_iter()
        .find(|(group, _)| caps.get(*group).is_some())
        .map(|(group, kind)| (kind, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(text: &str) -> Option<(FormatKind, String)> {
        let caps = FormatKind::regex().captures(text)?;
        let (kind, group) = FormatKind::of(&caps)?;
        Some((kind, caps[group].to_string()))
    }

    #[test]
    fn asterisks() {
        assert_eq!(kind_of("*a*"), Some((FormatKind::Asterisk, "a".into())));
        assert_eq!(kind_of("**a**"), Some((FormatKind::DoubleAsterisk, "a".into())));
    }

    #[test]
    fn underscores() {
        assert_eq!(kind_of("_a_"), Some((FormatKind::Underscore, "a".into())));
        assert_eq!(kind_of("__a__"), Some((FormatKind::DoubleUnderscore, "a".into())));
        assert_eq!(kind_of("___a___"), Some((FormatKind::DoubleUnderscore, "a".into())));
    }

    #[test]
    fn unclosed_is_not_emphasis() {
        assert_eq!(kind_of("*open"), None);
        assert_eq!(kind_of("2 * 3"), None);
    }
}
