use std::path::{Path, PathBuf};

/// Extension of authored source documents.
pub const SOURCE_EXTENSION: &str = "bndr";

/// Extension of compiled fragments, shared with wiki-link targets.
pub const OUTPUT_EXTENSION: &str = "html";

/// An authored document on disk and the entry name derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    path: PathBuf,
    name: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = Self::extract_name(&path);
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry name: the file name without the `.bndr` extension. This is the
    /// name other documents use in `>[name]` wiki-links.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the compiled fragment, e.g. `about-me.html`
    pub fn output_file_name(&self) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.name)
    }

    pub fn is_source(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
    }

    fn extract_name(path: &Path) -> String {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| {
                name.strip_suffix(&format!(".{SOURCE_EXTENSION}"))
                    .unwrap_or(name)
            })
            .unwrap_or("untitled")
            .to_string()
    }
}

impl From<&str> for SourceFile {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_strips_extension() {
        let file = SourceFile::from("notes/about-me.bndr");
        assert_eq!(file.name(), "about-me");
        assert_eq!(file.output_file_name(), "about-me.html");
        assert_eq!(file.path(), Path::new("notes/about-me.bndr"));
    }

    #[test]
    fn other_extensions_are_kept_in_name() {
        let file = SourceFile::from("readme.txt");
        assert_eq!(file.name(), "readme.txt");
    }

    #[test]
    fn path_without_file_name_is_untitled() {
        let file = SourceFile::from("/");
        assert_eq!(file.name(), "untitled");
    }

    #[test]
    fn recognises_source_files() {
        assert!(SourceFile::is_source(Path::new("a/b.bndr")));
        assert!(!SourceFile::is_source(Path::new("a/b.md")));
        assert!(!SourceFile::is_source(Path::new("bndr")));
    }
}
