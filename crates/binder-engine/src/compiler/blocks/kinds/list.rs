use super::Heading;

/// The two list flavours and their markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `# item` (a `#` not followed by a heading digit)
    Ordered,
    /// `- item`
    Unordered,
}

impl ListKind {
    pub const BULLET: u8 = b'-';

    pub fn from_marker(b: u8) -> Option<Self> {
        match b {
            Heading::MARK => Some(ListKind::Ordered),
            Self::BULLET => Some(ListKind::Unordered),
            _ => None,
        }
    }

    /// Item text: everything after the first two characters (marker and separator).
    pub fn item_text(trimmed: &str) -> &str {
        trimmed
            .char_indices()
            .nth(2)
            .map_or("", |(i, _)| &trimmed[i..])
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>\n",
            ListKind::Unordered => "<ul>\n",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>\n",
            ListKind::Unordered => "</ul>\n",
        }
    }

    pub fn render_item(inner: &str) -> String {
        format!("  <li>{inner}</li>\n")
    }
}
