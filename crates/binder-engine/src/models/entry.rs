use chrono::NaiveDateTime;

use crate::compiler::{
    BODY_DELIMITER,
    header::{CREATED, DESCRIPTION, IS_PORTAL, PARENT, TIMESTAMP_FORMAT, TITLE},
};

/// Header values for a new, empty document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTemplate {
    pub title: String,
    pub parent: Option<String>,
    pub description: String,
    pub is_portal: bool,
}

impl EntryTemplate {
    /// A template titled after the entry name, with no parent or description.
    pub fn new(name: &str) -> Self {
        Self {
            title: name.to_string(),
            parent: None,
            description: String::new(),
            is_portal: false,
        }
    }

    /// Renders the header and delimiter; the body is left empty.
    ///
    /// The `parent` line is written only when a non-empty parent is set.
    pub fn render(&self, created: NaiveDateTime) -> String {
        let mut out = String::new();
        if let Some(parent) = self.parent.as_deref().filter(|p| !p.is_empty()) {
            out.push_str(&format!("{PARENT}: {parent}\n"));
        }
        out.push_str(&format!("{TITLE}: {}\n", self.title));
        out.push_str(&format!("{DESCRIPTION}: {}\n", self.description));
        out.push_str(&format!(
            "{CREATED}: {}\n",
            created.format(TIMESTAMP_FORMAT)
        ));
        out.push_str(&format!("{IS_PORTAL}: {}\n", self.is_portal));
        out.push_str(BODY_DELIMITER);
        out.push('\n');
        out
    }
}
