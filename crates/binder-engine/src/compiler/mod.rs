pub mod blocks;
pub mod header;
pub mod inline;
pub mod links;

use serde::Serialize;

use blocks::BlockCompiler;
use header::{Header, parse_header};
use links::LinkRecord;

/// The line separating header from body.
pub const BODY_DELIMITER: &str = "---";

/// What happens to body text after a second delimiter line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelimiterPolicy {
    /// The body is everything after the first delimiter line.
    #[default]
    Preserve,
    /// The body stops at the next delimiter line; the rest is discarded.
    Truncate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub delimiter: DelimiterPolicy,
}

/// HTML plus the links discovered while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub html: String,
    pub links: LinkRecord,
}

/// Everything a page assembler needs from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledDocument {
    pub header: Header,
    pub html: String,
    pub links: LinkRecord,
}

/// Compiles a document with default options.
pub fn compile_document(text: &str) -> CompiledDocument {
    compile_document_with(text, &CompileOptions::default())
}

pub fn compile_document_with(text: &str, options: &CompileOptions) -> CompiledDocument {
    let (header_text, body_text) = split_document(text, options.delimiter);
    let Fragment { html, links } = compile_body(body_text);

    CompiledDocument {
        header: parse_header(header_text),
        html,
        links,
    }
}

/// Compiles body markup to HTML.
pub fn compile_body(text: &str) -> Fragment {
    let mut compiler = BlockCompiler::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        compiler.push(line, lines.peek().copied());
    }

    compiler.finish()
}

/// Splits raw text into `(header, body)` at the first line that is exactly
/// `---`. Without a delimiter line the whole text is header and the body is
/// empty.
pub fn split_document(text: &str, policy: DelimiterPolicy) -> (&str, &str) {
    let Some((delim_start, delim_end)) = find_delimiter(text) else {
        return (text, "");
    };
    let header = &text[..delim_start];
    let body = &text[delim_end..];

    match policy {
        DelimiterPolicy::Preserve => (header, body),
        DelimiterPolicy::Truncate => match find_delimiter(body) {
            Some((next_start, _)) => (header, &body[..next_start]),
            None => (header, body),
        },
    }
}

/// Byte range of the first delimiter line, including its line break.
fn find_delimiter(text: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if line.trim_end_matches(['\r', '\n']) == BODY_DELIMITER {
            return Some((start, offset));
        }
    }
    None
}
