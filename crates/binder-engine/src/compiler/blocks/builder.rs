use crate::compiler::{Fragment, inline::compile_inline};

use super::{
    classify::{LineClass, classify},
    kinds::{CodeBlock, Heading, ListKind, Paragraph},
};

/// List run state. `Open(kind)` means an `<ol>`/`<ul>` has been emitted and
/// not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    None,
    Open(ListKind),
}

/// Line-at-a-time block compiler.
///
/// Carries the only cross-line state of the grammar: the open list run and
/// the open code block buffer.
pub struct BlockCompiler {
    list: ListState,
    code: Option<String>,
    out: Fragment,
}

impl BlockCompiler {
    pub fn new() -> Self {
        Self {
            list: ListState::None,
            code: None,
            out: Fragment::default(),
        }
    }

    /// Compiles `line`. `next` is the following raw line, used only to decide
    /// whether a list run continues; `None` means end of body.
    pub fn push(&mut self, line: &str, next: Option<&str>) {
        match classify(line) {
            LineClass::Blank => {}
            LineClass::CodeToggle => self.toggle_code(),
            _ if self.code.is_some() => self.push_code_line(line),
            LineClass::Heading { level, text } => {
                let inner = self.inline(text);
                self.out.html.push_str(&Heading::render(level, &inner));
            }
            LineClass::ListItem { kind, text } => self.push_list_item(kind, text, next),
            LineClass::RawHtml(text) => {
                self.out.html.push_str(text);
                self.out.html.push('\n');
            }
            LineClass::Paragraph(text) => {
                let inner = self.inline(text);
                self.out.html.push_str(&Paragraph::render(&inner));
            }
        }
    }

    pub fn finish(mut self) -> Fragment {
        // EOF flush: an unterminated code block is still closed and escaped
        if let Some(buffer) = self.code.take() {
            self.out.html.push_str(&CodeBlock::render_close(&buffer));
        }
        self.close_list();
        self.out
    }

    fn inline(&mut self, text: &str) -> String {
        let frag = compile_inline(text);
        self.out.links.extend(frag.links);
        frag.html
    }

    fn toggle_code(&mut self) {
        match self.code.take() {
            None => {
                self.out.html.push_str(CodeBlock::OPEN);
                self.code = Some(String::new());
            }
            Some(buffer) => self.out.html.push_str(&CodeBlock::render_close(&buffer)),
        }
    }

    fn push_code_line(&mut self, line: &str) {
        if let Some(buffer) = self.code.as_mut() {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str, next: Option<&str>) {
        if self.list != ListState::Open(kind) {
            self.close_list();
            self.out.html.push_str(kind.open_tag());
            self.list = ListState::Open(kind);
        }

        let inner = self.inline(text);
        self.out.html.push_str(&ListKind::render_item(&inner));

        let continues = next.and_then(|n| classify(n).list_kind()) == Some(kind);
        if !continues {
            self.close_list();
        }
    }

    fn close_list(&mut self) {
        if let ListState::Open(kind) = std::mem::take(&mut self.list) {
            self.out.html.push_str(kind.close_tag());
        }
    }
}

impl Default for BlockCompiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{compile_body, links::Link};
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        assert_eq!(compile_body("#1 Hi\n").html, "<h1>Hi</h1>\n");
    }

    #[test]
    fn paragraph_per_line() {
        assert_eq!(
            compile_body("one\ntwo\n").html,
            "<p>one</p>\n<p>two</p>\n"
        );
    }

    #[test]
    fn blank_lines_contribute_nothing() {
        assert_eq!(compile_body("\n\n  \none\n\n").html, "<p>one</p>\n");
    }

    #[test]
    fn consecutive_items_form_one_list() {
        assert_eq!(
            compile_body("- a\n- b\n- c\n").html,
            "<ul>\n  <li>a</li>\n  <li>b</li>\n  <li>c</li>\n</ul>\n"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            compile_body("# one\n# two\n").html,
            "<ol>\n  <li>one</li>\n  <li>two</li>\n</ol>\n"
        );
    }

    #[test]
    fn list_closes_before_heading() {
        assert_eq!(
            compile_body("- a\n#1 Done\n").html,
            "<ul>\n  <li>a</li>\n</ul>\n<h1>Done</h1>\n"
        );
    }

    #[test]
    fn ordered_list_closes_before_heading() {
        assert_eq!(
            compile_body("# a\n#2 Next\n").html,
            "<ol>\n  <li>a</li>\n</ol>\n<h2>Next</h2>\n"
        );
    }

    #[test]
    fn switching_list_kinds_closes_and_reopens() {
        assert_eq!(
            compile_body("- a\n# b\n").html,
            "<ul>\n  <li>a</li>\n</ul>\n<ol>\n  <li>b</li>\n</ol>\n"
        );
    }

    #[test]
    fn blank_line_splits_list_runs() {
        assert_eq!(
            compile_body("- a\n\n- b\n").html,
            "<ul>\n  <li>a</li>\n</ul>\n<ul>\n  <li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn list_at_end_without_trailing_newline_closes() {
        assert_eq!(compile_body("- last").html, "<ul>\n  <li>last</li>\n</ul>\n");
    }

    #[test]
    fn code_block_is_escaped_and_untrimmed() {
        assert_eq!(
            compile_body("```\n  <b>x</b>\n```\n").html,
            "<pre>\n  &lt;b&gt;x&lt;/b&gt;\n</pre>\n"
        );
    }

    #[test]
    fn code_block_suppresses_block_rules() {
        assert_eq!(
            compile_body("```\n#1 not a heading\n- nor a list\n```\n").html,
            "<pre>\n#1 not a heading\n- nor a list\n</pre>\n"
        );
    }

    #[test]
    fn code_block_drops_blank_lines() {
        assert_eq!(
            compile_body("```\na\n\nb\n```\n").html,
            "<pre>\na\nb\n</pre>\n"
        );
    }

    #[test]
    fn unterminated_code_block_is_flushed() {
        assert_eq!(
            compile_body("```\na < b\n").html,
            "<pre>\na &lt; b\n</pre>\n"
        );
    }

    #[test]
    fn raw_html_passes_through() {
        let frag = compile_body("<hr class=\"x\">\n");
        assert_eq!(frag.html, "<hr class=\"x\">\n");
        assert!(frag.links.is_empty());
    }

    #[test]
    fn raw_html_is_not_inline_compiled() {
        assert_eq!(
            compile_body("<span>[not|a link]</span>\n").html,
            "<span>[not|a link]</span>\n"
        );
    }

    #[test]
    fn line_breaks_come_only_from_blocks() {
        assert_eq!(
            compile_body("<hr>\n*a* _b_ `c`\n#2 >[x-y]\n").html,
            "<hr>\n<p><strong>a</strong> <em>b</em> <code>c</code></p>\n<h2><a href=\"x-y.html\">x y</a></h2>\n"
        );
    }

    #[test]
    fn links_collected_across_blocks() {
        let frag = compile_body("#1 [a|1]\n- >[b-c]\npara ![d|2]\n");
        assert_eq!(
            frag.links.external,
            vec![Link::new("a", "1"), Link::new("d", "2")]
        );
        assert_eq!(frag.links.internal, vec![Link::new("b c", "b-c.html")]);
    }

    #[test]
    fn crlf_lines() {
        assert_eq!(
            compile_body("- a\r\n- b\r\n").html,
            "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn empty_body() {
        let frag = compile_body("");
        assert_eq!(frag.html, "");
        assert!(frag.links.is_empty());
    }

    #[test]
    fn push_with_missing_lookahead_closes_list() {
        let mut compiler = BlockCompiler::new();
        compiler.push("# only", None);
        assert_eq!(compiler.finish().html, "<ol>\n  <li>only</li>\n</ol>\n");
    }
}
