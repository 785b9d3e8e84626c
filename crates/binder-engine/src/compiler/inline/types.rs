use super::kinds::{LinkKind, SpanKind};

/// A parsed inline node borrowing from the block text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode<'a> {
    /// Plain text that isn't part of any special construct. Emitted unescaped.
    Text(&'a str),
    /// A bold, italic or code span. The inner text is never parsed further.
    Span {
        kind: SpanKind,
        /// Content between the delimiters (to end of text if unterminated).
        inner: &'a str,
    },
    /// An external link, image or wiki-link.
    Link {
        kind: LinkKind,
        /// Text before the first `|`.
        text: &'a str,
        /// Text after the first `|`; empty without a pipe. Unused for wiki-links.
        destination: &'a str,
    },
}
