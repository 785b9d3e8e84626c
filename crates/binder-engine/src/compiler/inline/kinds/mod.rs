//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`SpanKind`**: `*bold*`, `_italic_`, `` `code` `` (verbatim, non-nesting)
//! - **`LinkKind`**: `[text|dest]`, `![alt|src]`, `>[name]`
//! - **`WikiLink`**: href and display-name rules for `>[name]`
//!
//! The parser calls these constants; it never hardcodes `[` or `*`.

pub mod link;
pub mod span;
pub mod wikilink;

pub use link::LinkKind;
pub use span::SpanKind;
pub use wikilink::WikiLink;
