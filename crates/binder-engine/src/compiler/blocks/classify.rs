use super::kinds::{CodeBlock, Heading, ListKind, RawHtml};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block compilation: each line is classified on its own,
/// from its first (and for headings, second) character after trimming.
/// Whether a line sits inside an open code block is decided by the
/// [`super::BlockCompiler`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Exactly "```".
    CodeToggle,
    Heading { level: u8, text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    /// Starts with `<`; carries the whole trimmed line.
    RawHtml(&'a str),
    /// Anything else; carries the whole trimmed line.
    Paragraph(&'a str),
}

impl LineClass<'_> {
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            LineClass::ListItem { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Classifies a raw body line. Priority follows the variant order of
/// [`LineClass`].
pub fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    let Some(&first) = trimmed.as_bytes().first() else {
        return LineClass::Blank;
    };

    if CodeBlock::is_toggle(trimmed) {
        return LineClass::CodeToggle;
    }
    if let Some((level, text)) = Heading::parse(trimmed) {
        return LineClass::Heading { level, text };
    }
    if let Some(kind) = ListKind::from_marker(first) {
        return LineClass::ListItem {
            kind,
            text: ListKind::item_text(trimmed),
        };
    }
    if first == RawHtml::MARK {
        return LineClass::RawHtml(trimmed);
    }
    LineClass::Paragraph(trimmed)
}
