/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// line rule matches. Each non-blank line is its own paragraph.
pub struct Paragraph;

impl Paragraph {
    pub fn render(inner: &str) -> String {
        format!("<p>{inner}</p>\n")
    }
}
