/// The kind of block that is currently open.
///
/// Exactly one block kind is open at a time; `Empty` means none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    Empty,
    Paragraph,
    Embedded,
    List,
    KeyValue,
}

/// Normalized kind handed to the break callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// An empty line.
    LineFeed,
    /// A `***` or `---` line.
    Rule,
}

/// The tag a paragraph line was written with.
///
/// Switching tags between consecutive lines always breaks the paragraph,
/// including a switch between the two quote spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphTag {
    /// `> text`
    Quote,
    /// `| text`
    Pipe,
    /// `// text`
    Comment,
}

impl ParagraphTag {
    /// The source marker for this tag.
    pub fn marker(self) -> &'static str {
        match self {
            ParagraphTag::Quote => ">",
            ParagraphTag::Pipe => "|",
            ParagraphTag::Comment => "//",
        }
    }

    /// True for both quote spellings.
    pub fn is_quote(self) -> bool {
        matches!(self, ParagraphTag::Quote | ParagraphTag::Pipe)
    }
}

/// One entry of a list block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// The marker character: `-`, `+` or `x`.
    pub marker: char,
    /// Inline-processed item text.
    pub value: String,
}

/// One entry of a key-value block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Inline-processed, trimmed key.
    pub key: String,
    /// Inline-processed, trimmed value.
    pub value: String,
}

/// The open block together with everything buffered for it.
///
/// Data lives inside the variant, so a block with buffered content can only
/// exist while a block is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenBlock {
    None,
    Paragraph {
        tag: ParagraphTag,
        lines: Vec<String>,
    },
    Embedded {
        /// Everything after the opening fence, e.g. a language name.
        command: String,
        /// Raw lines, never inline-processed.
        lines: Vec<String>,
    },
    List(Vec<ListItem>),
    KeyValue(Vec<KeyValue>),
}

impl OpenBlock {
    pub fn status(&self) -> BlockStatus {
        match self {
            OpenBlock::None => BlockStatus::Empty,
            OpenBlock::Paragraph { .. } => BlockStatus::Paragraph,
            OpenBlock::Embedded { .. } => BlockStatus::Embedded,
            OpenBlock::List(_) => BlockStatus::List,
            OpenBlock::KeyValue(_) => BlockStatus::KeyValue,
        }
    }

    /// The command qualifier of the open block, empty when there is none.
    pub fn command(&self) -> &str {
        match self {
            OpenBlock::Paragraph { tag, .. } => tag.marker(),
            OpenBlock::Embedded { command, .. } => command,
            _ => "",
        }
    }
}
