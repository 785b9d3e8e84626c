/// A verbatim inline span: content runs to the next matching delimiter or
/// the end of the text, and is never parsed further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Bold,
    Italic,
    Code,
}

impl SpanKind {
    pub const ASTERISK: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TICK: u8 = b'`';

    pub fn from_delimiter(b: u8) -> Option<Self> {
        match b {
            Self::ASTERISK => Some(SpanKind::Bold),
            Self::UNDERSCORE => Some(SpanKind::Italic),
            Self::TICK => Some(SpanKind::Code),
            _ => None,
        }
    }

    /// The byte that opens and closes this span.
    pub fn delimiter(self) -> u8 {
        match self {
            SpanKind::Bold => Self::ASTERISK,
            SpanKind::Italic => Self::UNDERSCORE,
            SpanKind::Code => Self::TICK,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            SpanKind::Bold => "strong",
            SpanKind::Italic => "em",
            SpanKind::Code => "code",
        }
    }
}
