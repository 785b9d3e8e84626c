/// Code block type: lines between two toggle lines, escaped on close.
pub struct CodeBlock;

impl CodeBlock {
    pub const TOGGLE: &'static str = "```";
    pub const OPEN: &'static str = "<pre>\n";
    pub const CLOSE: &'static str = "</pre>\n";

    pub fn is_toggle(trimmed: &str) -> bool {
        trimmed == Self::TOGGLE
    }

    /// Escaped body followed by the closing tag.
    pub fn render_close(buffer: &str) -> String {
        let mut out = html_escape::encode_double_quoted_attribute(buffer).into_owned();
        out.push_str(Self::CLOSE);
        out
    }
}
