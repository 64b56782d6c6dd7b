//! Reading JSON documents from arguments, files, or stdin.

use anyhow::{Context, Result};
use serde_json::Value;

use std::io::Read;
use std::path::Path;

/// Where a document argument points.
#[derive(Debug, PartialEq, Eq)]
pub enum DocumentSource<'a> {
    Stdin,
    File(&'a Path),
    Inline(&'a str),
}

impl<'a> DocumentSource<'a> {
    /// `None` or `-` reads stdin, `@path` reads a file, anything else is JSON text.
    pub fn from_arg(arg: Option<&'a str>) -> Self {
        match arg {
            None | Some("-") => DocumentSource::Stdin,
            Some(s) => match s.strip_prefix('@') {
                Some(path) => DocumentSource::File(Path::new(path)),
                None => DocumentSource::Inline(s),
            },
        }
    }
}

/// Read and parse the document an argument points to.
pub fn read_document(arg: Option<&str>) -> Result<Value> {
    match DocumentSource::from_arg(arg) {
        DocumentSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            serde_json::from_str(&text).context("Document on stdin is not valid JSON")
        }
        DocumentSource::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", path.display()))
        }
        DocumentSource::Inline(text) => {
            serde_json::from_str(text).context("Document argument is not valid JSON")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_document_source_from_arg() {
        assert_eq!(DocumentSource::from_arg(None), DocumentSource::Stdin);
        assert_eq!(DocumentSource::from_arg(Some("-")), DocumentSource::Stdin);
        assert_eq!(
            DocumentSource::from_arg(Some("@doc.json")),
            DocumentSource::File(Path::new("doc.json"))
        );
        assert_eq!(
            DocumentSource::from_arg(Some("{}")),
            DocumentSource::Inline("{}")
        );
    }

    #[test]
    fn test_read_inline_document() {
        let doc = read_document(Some(r#"{"bot_name":"merge-bot"}"#)).unwrap();
        assert_eq!(doc, json!({"bot_name": "merge-bot"}));
    }

    #[test]
    fn test_read_file_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.json");
        std::fs::write(&path, r#"{"queue_name":"default","timestamp":500}"#).unwrap();

        let arg = format!("@{}", path.display());
        let doc = read_document(Some(&arg)).unwrap();
        assert_eq!(doc["timestamp"], 500);
    }

    #[test]
    fn test_read_invalid_json() {
        let err = read_document(Some("{not json")).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_document(Some("@/nonexistent/botledger/doc.json")).is_err());
    }
}
