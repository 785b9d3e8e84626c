//! # Block Compilation
//!
//! Two-phase, line-oriented block compilation.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `LineClass` from its leading character(s) alone
//!
//! 2. **Block Construction** (`builder`): a `BlockCompiler` carries the open
//!    list run and code block across lines and emits HTML as it goes
//!
//! ## Line Rules (first match wins)
//!
//! | Line                | Result                              |
//! |---------------------|-------------------------------------|
//! | blank               | skipped                             |
//! | "```"               | toggles a `<pre>` block             |
//! | inside a code block | buffered verbatim, escaped on close |
//! | `#N text`, N in 1-9 | `<hN>`                              |
//! | `# text`            | ordered list item                   |
//! | `- text`            | unordered list item                 |
//! | `<...`              | raw HTML, copied as-is              |
//! | anything else       | `<p>`                               |
//!
//! ## Modules
//!
//! - **`kinds`**: Block types with owned markers (Heading, ListKind, CodeBlock, RawHtml, Paragraph)
//! - **`classify`**: `classify()` produces a `LineClass` for each line
//! - **`builder`**: `BlockCompiler` state machine

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::{BlockCompiler, ListState};
pub use classify::{LineClass, classify};
