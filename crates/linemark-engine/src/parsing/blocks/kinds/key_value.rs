/// Definition lines: `key<indent>: value`.
///
/// The text before the first `:` must contain a tab, or a run of at least
/// [`KeyValueLine::MIN_SPACES`] consecutive spaces.
pub struct KeyValueLine;

impl KeyValueLine {
    pub const SEPARATOR: char = ':';
    pub const MIN_SPACES: usize = 3;

    /// Splits a definition line into its trimmed key and value.
    pub fn split(line: &str) -> Option<(&str, &str)> {
        let index = line.find(Self::SEPARATOR)?;
        let key = &line[..index];
        if !Self::is_indented(key) {
            return None;
        }
        Some((key.trim(), line[index + 1..].trim()))
    }

    fn is_indented(prefix: &str) -> bool {
        let mut spaces = 0usize;
        for c in prefix.chars() {
            match c {
                '\t' => return true,
                ' ' => {
                    spaces += 1;
                    if spaces >= Self::MIN_SPACES {
                        return true;
                    }
                }
                _ => spaces = 0,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_before_separator() {
        assert_eq!(KeyValueLine::split("key    : value"), Some(("key", "value")));
    }

    #[test]
    fn leading_indent() {
        assert_eq!(KeyValueLine::split("   name: Peter"), Some(("name", "Peter")));
    }

    #[test]
    fn tab_anywhere_before_separator() {
        assert_eq!(KeyValueLine::split("key\t: value"), Some(("key", "value")));
    }

    #[test]
    fn plain_colon_is_not_a_definition() {
        assert_eq!(KeyValueLine::split("key: value"), None);
        assert_eq!(KeyValueLine::split("a  b: c"), None);
    }

    #[test]
    fn space_run_is_reset_by_other_characters() {
        assert_eq!(KeyValueLine::split("a  b  c: d"), None);
    }

    #[test]
    fn only_first_separator_splits() {
        assert_eq!(
            KeyValueLine::split("url   : http://example.com"),
            Some(("url", "http://example.com"))
        );
    }

    #[test]
    fn no_separator() {
        assert_eq!(KeyValueLine::split("    indented text"), None);
    }
}
