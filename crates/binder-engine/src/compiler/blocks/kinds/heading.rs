/// Heading block type with owned marker constant.
///
/// `#N text` with `N` in `1..=9` is a heading; `#` followed by anything else
/// is an ordered-list item (see [`super::ListKind`]).
pub struct Heading;

impl Heading {
    /// Shared with the ordered-list marker.
    pub const MARK: u8 = b'#';

    /// Splits `#N text` into `(N, text)`, dropping one separating space.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let b = trimmed.as_bytes();
        if b.first() != Some(&Self::MARK) {
            return None;
        }
        let level = match b.get(1).copied() {
            Some(d @ b'1'..=b'9') => d - b'0',
            _ => return None,
        };
        let rest = &trimmed[2..];
        Some((level, rest.strip_prefix(' ').unwrap_or(rest)))
    }

    pub fn render(level: u8, inner: &str) -> String {
        format!("<h{level}>{inner}</h{level}>\n")
    }
}
