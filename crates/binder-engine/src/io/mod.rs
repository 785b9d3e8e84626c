use crate::compiler::{CompileOptions, CompiledDocument, compile_document_with};
use crate::models::{EntryTemplate, SourceFile, source_file::SOURCE_EXTENSION};
use chrono::NaiveDateTime;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Entry names become file names and wiki-link targets.
static ENTRY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("valid entry name regex"));

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid entry name: {0:?}")]
    InvalidEntryName(String),
    #[error("Refusing to overwrite existing file: {0}")]
    AlreadyExists(PathBuf),
}

/// Read a source document and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and compile one source document.
///
/// An unreadable file aborts this document only; compilation itself never fails.
pub fn compile_file(
    source: &SourceFile,
    options: &CompileOptions,
) -> Result<CompiledDocument, IoError> {
    let text = read_file(source.path())?;
    log::debug!("Read {} ({} bytes)", source.path().display(), text.len());

    let doc = compile_document_with(&text, options);
    log::debug!(
        "Compiled {}: {} header fields, {} external links, {} internal links",
        source.name(),
        doc.header.len(),
        doc.links.external.len(),
        doc.links.internal.len()
    );
    Ok(doc)
}

/// Write a compiled fragment as `<out_dir>/<name>.html`, returning its path
pub fn write_fragment(
    out_dir: &Path,
    source: &SourceFile,
    html: &str,
) -> Result<PathBuf, IoError> {
    fs::create_dir_all(out_dir).map_err(IoError::Io)?;

    let path = out_dir.join(source.output_file_name());
    fs::write(&path, html).map_err(IoError::Io)?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

pub fn validate_entry_name(name: &str) -> Result<(), IoError> {
    if ENTRY_NAME.is_match(name) {
        Ok(())
    } else {
        Err(IoError::InvalidEntryName(name.to_string()))
    }
}

/// Create `<dir>/<name>.bndr` holding a fresh header. Existing files are
/// never overwritten.
pub fn create_entry(
    dir: &Path,
    name: &str,
    template: &EntryTemplate,
    created: NaiveDateTime,
) -> Result<PathBuf, IoError> {
    validate_entry_name(name)?;

    let path = dir.join(format!("{name}.{SOURCE_EXTENSION}"));
    if path.exists() {
        return Err(IoError::AlreadyExists(path));
    }

    fs::create_dir_all(dir).map_err(IoError::Io)?;
    fs::write(&path, template.render(created)).map_err(IoError::Io)?;
    log::debug!("Created entry {}", path.display());
    Ok(path)
}
