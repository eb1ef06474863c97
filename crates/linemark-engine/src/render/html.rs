use html_escape::encode_double_quoted_attribute as attr;

use crate::parsing::{
    blocks::{BreakKind, KeyValue, ListItem, ParagraphTag, kinds::Title},
    inline::{FormatKind, Image, KeywordKind},
};

use super::Renderer;

/// Default renderer producing HTML fragments.
///
/// Attribute values are encoded; element content is emitted exactly as the
/// engine hands it over, so raw HTML in the source passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn title(&self, marker: &str, text: &str) -> Option<String> {
        Some(match Title::level(marker) {
            Some(level) => format!("<h{level}>{text}</h{level}>"),
            None => format!("{marker} {text}"),
        })
    }

    fn paragraph(&self, tag: ParagraphTag, lines: &[String]) -> Option<String> {
        let class = if tag.is_quote() { "quote" } else { "comment" };
        Some(format!(r#"<p class="{class}">{}</p>"#, lines.join("<br />")))
    }

    fn list(&self, items: &[ListItem]) -> Option<String> {
        let body: String = items
            .iter()
            .map(|item| format!("<li>{}</li>", item.value))
            .collect();
        Some(format!("<ul>{body}</ul>"))
    }

    fn key_value(&self, entries: &[KeyValue]) -> Option<String> {
        let body: String = entries
            .iter()
            .map(|e| format!("<dt>{}</dt><dd>{}</dd>", e.key, e.value))
            .collect();
        Some(format!("<dl>{body}</dl>"))
    }

    fn embedded(&self, command: &str, lines: &[String]) -> Option<String> {
        let body = lines.join("\n");
        Some(if command.is_empty() {
            format!("<pre>{body}</pre>")
        } else {
            format!(r#"<pre data-command="{}">{body}</pre>"#, attr(command))
        })
    }

    fn line_break(&self, kind: BreakKind) -> Option<String> {
        Some(match kind {
            BreakKind::LineFeed => "<br />".to_string(),
            BreakKind::Rule => "<hr />".to_string(),
        })
    }

    fn line(&self, text: &str) -> Option<String> {
        Some(format!(r#"<p class="line">{text}</p>"#))
    }

    fn link(&self, text: &str, url: &str) -> Option<String> {
        Some(format!(r#"<a href="{}">{text}</a>"#, attr(url)))
    }

    fn image(&self, image: &Image) -> Option<String> {
        let mut tag = format!(r#"<img src="{}""#, attr(&image.src));
        if let Some(width) = image.width {
            tag.push_str(&format!(r#" width="{width}""#));
        }
        if let Some(height) = image.height {
            tag.push_str(&format!(r#" height="{height}""#));
        }
        tag.push_str(&format!(r#" alt="{}" border="0" />"#, attr(&image.alt)));

        Some(match &image.url {
            Some(url) => format!(r#"<a href="{}">{tag}</a>"#, attr(url)),
            None => tag,
        })
    }

    fn format(&self, kind: FormatKind, text: &str) -> Option<String> {
        let element = match kind {
            FormatKind::DoubleAsterisk => "em",
            FormatKind::Asterisk => "i",
            FormatKind::DoubleUnderscore => "strong",
            FormatKind::Underscore => "b",
        };
        Some(format!("<{element}>{text}</{element}>"))
    }

    fn keyword(&self, _kind: KeywordKind, text: &str) -> Option<String> {
        Some(format!("<span>{text}</span>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn titles_by_level() {
        let r = HtmlRenderer;
        assert_eq!(r.title("#", "A").as_deref(), Some("<h1>A</h1>"));
        assert_eq!(r.title("#####", "E").as_deref(), Some("<h5>E</h5>"));
    }

    #[test]
    fn unknown_title_marker_falls_back_to_text() {
        let r = HtmlRenderer;
        assert_eq!(r.title("######", "F").as_deref(), Some("###### F"));
        assert_eq!(r.title("#x", "y").as_deref(), Some("#x y"));
    }

    #[test]
    fn paragraph_classes() {
        let r = HtmlRenderer;
        assert_eq!(
            r.paragraph(ParagraphTag::Pipe, &lines(&["a", "b"])).as_deref(),
            Some(r#"<p class="quote">a<br />b</p>"#)
        );
        assert_eq!(
            r.paragraph(ParagraphTag::Comment, &lines(&["c"])).as_deref(),
            Some(r#"<p class="comment">c</p>"#)
        );
    }

    #[test]
    fn embedded_keeps_content_raw() {
        let r = HtmlRenderer;
        assert_eq!(
            r.embedded("js", &lines(&["if (a < b) {", "}"])).as_deref(),
            Some("<pre data-command=\"js\">if (a < b) {\n}</pre>")
        );
        assert_eq!(r.embedded("", &[]).as_deref(), Some("<pre></pre>"));
    }

    #[test]
    fn link_href_is_attribute_encoded() {
        let r = HtmlRenderer;
        assert_eq!(
            r.link("Q", "http://a.io/?q=\"x\"").as_deref(),
            Some(r#"<a href="http://a.io/?q=&quot;x&quot;">Q</a>"#)
        );
    }

    #[test]
    fn image_with_dimensions_and_link() {
        let r = HtmlRenderer;
        let image = Image {
            alt: "Logo".into(),
            src: "logo.png".into(),
            width: Some(120),
            height: Some(40),
            url: Some("http://a.io".into()),
        };
        assert_eq!(
            r.image(&image).as_deref(),
            Some(concat!(
                r#"<a href="http://a.io">"#,
                r#"<img src="logo.png" width="120" height="40" alt="Logo" border="0" /></a>"#
            ))
        );
    }

    #[test]
    fn format_elements() {
        let r = HtmlRenderer;
        assert_eq!(r.format(FormatKind::DoubleAsterisk, "a").as_deref(), Some("<em>a</em>"));
        assert_eq!(r.format(FormatKind::Asterisk, "a").as_deref(), Some("<i>a</i>"));
        assert_eq!(
            r.format(FormatKind::DoubleUnderscore, "a").as_deref(),
            Some("<strong>a</strong>")
        );
        assert_eq!(r.format(FormatKind::Underscore, "a").as_deref(), Some("<b>a</b>"));
    }

    #[test]
    fn breaks() {
        let r = HtmlRenderer;
        assert_eq!(r.line_break(BreakKind::LineFeed).as_deref(), Some("<br />"));
        assert_eq!(r.line_break(BreakKind::Rule).as_deref(), Some("<hr />"));
    }
}
