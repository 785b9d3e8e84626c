use super::{
    cursor::Cursor,
    kinds::{LinkKind, SpanKind},
    types::InlineNode,
};

/// Parses one block's text into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Links are tried before spans, and `![`/`>[` before a bare `[`. A lone `!`
/// or `>` is plain text.
///
/// # Returns
/// Nodes covering the entire input. Text between constructs is emitted as
/// `InlineNode::Text`; the concatenated source of all nodes is the input.
pub fn parse_inline(s: &str) -> Vec<InlineNode<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text<'a>(out: &mut Vec<InlineNode<'a>>, s: &'a str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_link(&mut cur).or_else(|| try_parse_span(&mut cur)) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts to parse an external link, image or wiki-link at the cursor.
///
/// Returns `None` without moving the cursor if no opener is present.
/// Otherwise the cursor ends past the closing `]`, or at end of text.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    let kind = if cur.starts_with(LinkKind::IMAGE_OPEN) {
        LinkKind::Image
    } else if cur.starts_with(LinkKind::WIKI_OPEN) {
        LinkKind::Wiki
    } else if cur.peek() == Some(LinkKind::OPEN) {
        LinkKind::External
    } else {
        return None;
    };

    cur.bump_n(kind.opener_len());
    let attributes = cur.take_until(LinkKind::CLOSE);
    cur.eat(LinkKind::CLOSE);

    let (text, destination) = attributes
        .split_once(LinkKind::PIPE as char)
        .unwrap_or((attributes, ""));

    Some(InlineNode::Link {
        kind,
        text,
        destination,
    })
}

/// Attempts to parse a bold, italic or code span at the cursor.
///
/// Returns `None` without moving the cursor if not at a span delimiter.
/// An unterminated span consumes the rest of the text.
fn try_parse_span<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    let kind = cur.peek().and_then(SpanKind::from_delimiter)?;

    cur.bump();
    let inner = cur.take_until(kind.delimiter());
    cur.eat(kind.delimiter());

    Some(InlineNode::Span { kind, inner })
}
