use serde::Serialize;

/// A link discovered while compiling inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Display text (for wiki-links, the name after hyphen substitution).
    pub text: String,
    /// Link target exactly as written, or `NAME.html` for wiki-links.
    pub destination: String,
}

impl Link {
    pub fn new(text: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            destination: destination.into(),
        }
    }
}

/// Links collected from a document in scan order.
///
/// Images are recorded under `external` together with ordinary external links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub external: Vec<Link>,
    pub internal: Vec<Link>,
}

impl LinkRecord {
    pub fn is_empty(&self) -> bool {
        self.external.is_empty() && self.internal.is_empty()
    }

    /// Appends every link from `other`, preserving order.
    pub fn extend(&mut self, other: LinkRecord) {
        self.external.extend(other.external);
        self.internal.extend(other.internal);
    }
}
