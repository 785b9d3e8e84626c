/// The three bracketed link forms.
///
/// All share one attribute syntax: `[text|destination]`, where the first `|`
/// splits text from destination and a missing `]` runs to end of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `[text|dest]`
    External,
    /// `![alt|src]`, recorded alongside external links.
    Image,
    /// `>[name]`, pointing at another compiled document.
    Wiki,
}

impl LinkKind {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const PIPE: u8 = b'|';
    pub const IMAGE_OPEN: &'static [u8; 2] = b"![";
    pub const WIKI_OPEN: &'static [u8; 2] = b">[";

    /// Number of bytes the opener occupies.
    pub fn opener_len(self) -> usize {
        match self {
            LinkKind::External => 1,
            LinkKind::Image => Self::IMAGE_OPEN.len(),
            LinkKind::Wiki => Self::WIKI_OPEN.len(),
        }
    }
}
