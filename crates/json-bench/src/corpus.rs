//! Input corpus loading
//!
//! Documents are read fully into memory before any timing begins, so no
//! trial ever touches the filesystem. Byte content is kept exactly as
//! stored: no encoding transformation, no newline normalization.

use crate::{Error, Result};
use std::path::Path;

/// One loaded, immutable benchmark input
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    bytes: Vec<u8>,
}

impl Document {
    /// Read the file at `path` fully into memory, in binary mode
    ///
    /// The document is named after the path argument as given. Any open or
    /// read failure is fatal ([`Error::Document`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Document {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            name: path.display().to_string(),
            bytes,
        })
    }

    /// Build a document from bytes already in memory
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Display name used in report headers
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw document content
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the document is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Load every input path, in argument order
///
/// The first failure aborts the whole run; there is no partial corpus.
pub fn load_corpus<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>> {
    paths.iter().map(Document::load).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_exact_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        let content = b"{\"key\": [1, 2, 3]}";
        std::fs::write(&path, content).unwrap();

        let doc = Document::load(&path).unwrap();

        assert_eq!(doc.bytes(), content);
        assert_eq!(doc.len(), content.len());
        assert_eq!(doc.name(), path.display().to_string());
    }

    #[test]
    fn test_load_preserves_newlines_and_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.json");
        // CRLF and a multi-byte UTF-8 sequence must survive untouched
        let content = b"[\"a\",\r\n \"\xc3\xa9\"]\r\n";
        std::fs::write(&path, content).unwrap();

        let doc = Document::load(&path).unwrap();

        assert_eq!(doc.bytes(), content);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.json");

        let err = Document::load(&path).unwrap_err();

        match err {
            Error::Document { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Error::Document, got {other:?}"),
        }
    }

    #[test]
    fn test_load_corpus_order_and_failure() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.json");
        let second = temp_dir.path().join("second.json");
        std::fs::write(&first, b"[1]").unwrap();
        std::fs::write(&second, b"[2]").unwrap();

        let corpus = load_corpus(&[&first, &second]).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].bytes(), b"[1]");
        assert_eq!(corpus[1].bytes(), b"[2]");

        let missing = temp_dir.path().join("missing.json");
        assert!(load_corpus(&[&first, &missing]).is_err());
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = load_corpus::<&Path>(&[]).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::from_bytes("empty", Vec::new());
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
