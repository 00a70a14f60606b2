//! The `path -> content` file map handed over by the host page.

use std::collections::BTreeMap;

use serde_json::error::Category;

use crate::error::SourceError;

/// Mapping of `/`-separated paths to file text.
pub type FileMap = BTreeMap<String, String>;

/// Parse a JSON object of `"path": "content"` pairs.
pub fn parse_file_map(json: &str) -> Result<FileMap, SourceError> {
    serde_json::from_str(json).map_err(|e| match e.classify() {
        Category::Data => SourceError::InvalidShape(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => SourceError::InvalidJson(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_map() {
        let map = parse_file_map(r##"{ "src/a.ts": "x", "b.md": "# b" }"##).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("src/a.ts").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_file_map("{"), Err(SourceError::InvalidJson(_))));
        assert!(matches!(parse_file_map("[1, 2]"), Err(SourceError::InvalidShape(_))));
        assert!(matches!(
            parse_file_map(r#"{ "a.ts": 3 }"#),
            Err(SourceError::InvalidShape(_))
        ));
    }
}
