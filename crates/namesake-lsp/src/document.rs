//! Document state management

use std::path::PathBuf;

use tower_lsp::lsp_types::Url;

/// State of a single document open in the server
pub struct DocumentState {
    pub uri: Url,
    pub text: String,
    pub version: i32,
}

impl DocumentState {
    pub fn new(uri: Url, text: String, version: i32) -> Self {
        Self { uri, text, version }
    }

    /// Replace document text (full sync)
    pub fn update(&mut self, text: String, version: i32) {
        self.text = text;
        self.version = version;
    }

    /// Filesystem path behind this document, when it has one. Untitled and
    /// virtual documents have none and cannot be renamed.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.uri.to_file_path().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_text_and_version() {
        let uri = Url::parse("file:///tmp/a.rs").unwrap();
        let mut doc = DocumentState::new(uri, "one".to_string(), 1);
        doc.update("two".to_string(), 2);
        assert_eq!(doc.text, "two");
        assert_eq!(doc.version, 2);
    }

    #[test]
    fn virtual_documents_have_no_file_path() {
        let uri = Url::parse("untitled:Untitled-1").unwrap();
        let doc = DocumentState::new(uri, String::new(), 1);
        assert!(doc.file_path().is_none());
    }
}
