use std::sync::OnceLock;

use regex::Regex;

/// An image reference, with its optional dimensions and wrapping link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub alt: String,
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Link the image is wrapped in.
    pub url: Option<String>,
}

impl Image {
    /// Separates `src#WIDTHxHEIGHT` dimensions from the path.
    pub const DIMENSIONS: char = '#';

    /// `[![alt](src)](url)`
    pub fn linked() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\[!\[([^\]]*)\]\(([^()\s\x{FFFC}]+)\)\]\(([^()\s\x{FFFC}]+)\)")
                .expect("Invalid linked image regex")
        })
    }

    /// `![alt](src)` with an optional trailing `(url)`.
    pub fn plain() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"!\[([^\]]*)\]\(([^()\s\x{FFFC}]+)\)(?:\(([^()\s\x{FFFC}]+)\))?")
                .expect("Invalid image regex")
        })
    }

    /// Builds an image from its raw source, which may carry dimensions.
    pub fn new(alt: impl Into<String>, source: &str, url: Option<String>) -> Self {
        let (src, width, height) = Self::split_source(source);
        Self {
            alt: alt.into(),
            src: src.to_string(),
            width,
            height,
            url,
        }
    }

    /// `logo.png#120x40` → (`logo.png`, 120, 40). A `#` at the very start is
    /// part of the path.
    pub fn split_source(source: &str) -> (&str, Option<u32>, Option<u32>) {
        match source.find(Self::DIMENSIONS) {
            Some(index) if index > 0 => {
                let (w, h) = source[index + 1..]
                    .split_once('x')
                    .unwrap_or((&source[index + 1..], ""));
                (&source[..index], w.parse().ok(), h.parse().ok())
            }
            _ => (source, None, None),
        }
    }
}
