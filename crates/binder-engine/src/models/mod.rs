pub mod entry;
pub mod source_file;

pub use entry::EntryTemplate;
pub use source_file::SourceFile;
