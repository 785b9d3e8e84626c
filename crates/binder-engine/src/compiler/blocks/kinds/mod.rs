pub mod code_block;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod raw_html;

pub use code_block::CodeBlock;
pub use heading::Heading;
pub use list::ListKind;
pub use paragraph::Paragraph;
pub use raw_html::RawHtml;
