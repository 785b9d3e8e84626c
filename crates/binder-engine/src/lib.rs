pub mod compiler;
pub mod io;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use compiler::{
    CompileOptions, CompiledDocument, DelimiterPolicy, Fragment, compile_body, compile_document,
    compile_document_with,
    header::{Header, HeaderValue, parse_header},
    links::{Link, LinkRecord},
};
pub use io::*;
pub use models::{entry::*, source_file::*};
