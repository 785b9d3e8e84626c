//! # Inline Compilation
//!
//! Cursor-based scanning of a single block's text (a heading, list item or
//! paragraph line).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Span, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (SpanKind, LinkKind, WikiLink)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` with `try_parse_*` helpers
//! - **`render`**: `compile_inline()` turning nodes into HTML plus links
//!
//! ## Grammar
//!
//! Spans don't nest: everything up to the closing delimiter is copied
//! verbatim, and an unclosed span or link runs to the end of the text.
//! Nothing outside code blocks is HTML-escaped.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::parse_inline;
pub use render::compile_inline;
pub use types::InlineNode;
