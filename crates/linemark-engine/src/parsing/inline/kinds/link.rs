use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Explicit and bare links.
pub struct Link;

impl Link {
    /// Prefix given to URLs written without a scheme.
    pub const DEFAULT_SCHEME: &'static str = "http://";
    /// Characters split off the end of a URL and kept after the link.
    pub const TRAILING: [char; 2] = [',', '.'];

    /// `<http://example.com>`
    pub fn angle() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"<([^<>\s\x{FFFC}]*[.:/][^<>\s\x{FFFC}]*)>")
                .expect("Invalid angle link regex")
        })
    }

    /// `[text](url)`
    pub fn inline() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\[([^\]]+)\]\(\s*([^()\s\x{FFFC}]+)\s*\)")
                .expect("Invalid inline link regex")
        })
    }

    /// `[text]: url`
    pub fn reference() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\[([^\]]+)\]:[ \t]*([^\s\x{FFFC}]+)")
                .expect("Invalid reference link regex")
        })
    }

    /// `http://`, `https://`, `ftp://` and `file://` URLs outside brackets.
    pub fn scheme() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"(?i)\b(?:https?|ftp|file)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]")
                .expect("Invalid URL regex")
        })
    }

    /// `www.example.com` not directly preceded by `/`. Group 1 is the link.
    pub fn www() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"(?i)(?:^|[^/])(www\.[^\s<>\x{FFFC}]*[^\s<>\x{FFFC}.,;:!?)\]])")
                .expect("Invalid www regex")
        })
    }

    /// Gives `url` the default scheme unless it already names one.
    pub fn with_scheme(url: &str) -> Cow<'_, str> {
        if Self::has_scheme(url) {
            Cow::Borrowed(url)
        } else {
            Cow::Owned(format!("{}{url}", Self::DEFAULT_SCHEME))
        }
    }

    fn has_scheme(url: &str) -> bool {
        if url.starts_with("mailto:") {
            return true;
        }
        match url.find("://") {
            Some(0) | None => false,
            Some(i) => url[..i]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')),
        }
    }

    /// Splits one trailing `,` or `.` off `url`.
    pub fn split_trailing(url: &str) -> (&str, &str) {
        match url.chars().next_back() {
            Some(c) if Self::TRAILING.contains(&c) => url.split_at(url.len() - c.len_utf8()),
            _ => (url, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_is_added_when_missing() {
        assert_eq!(Link::with_scheme("www.google.com"), "http://www.google.com");
        assert_eq!(Link::with_scheme("example.com/a"), "http://example.com/a");
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(Link::with_scheme("https://a.io"), "https://a.io");
        assert_eq!(Link::with_scheme("ftp://files.io"), "ftp://files.io");
        assert_eq!(Link::with_scheme("mailto:me@a.io"), "mailto:me@a.io");
    }

    #[test]
    fn trailing_punctuation() {
        assert_eq!(Link::split_trailing("a.com."), ("a.com", "."));
        assert_eq!(Link::split_trailing("a.com,"), ("a.com", ","));
        assert_eq!(Link::split_trailing("a.com"), ("a.com", ""));
    }

    #[test]
    fn angle_requires_url_like_content() {
        assert!(Link::angle().is_match("<http://a.io>"));
        assert!(Link::angle().is_match("<www.a.io>"));
        assert!(!Link::angle().is_match("<br>"));
    }

    #[test]
    fn www_excludes_trailing_punctuation() {
        let caps = Link::www().captures("see www.example.com.").unwrap();
        assert_eq!(&caps[1], "www.example.com");
    }

    #[test]
    fn scheme_url_stops_at_space() {
        let m = Link::scheme().find("go to https://a.io/x?y=1 now").unwrap();
        assert_eq!(m.as_str(), "https://a.io/x?y=1");
    }
}
