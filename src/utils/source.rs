//! Where the file map comes from.

use std::fmt;

use codeview_core::{FileMap, SourceError, parse_file_map};

use super::dom;
use crate::config::{DEMO_FILES_JSON, HOST_FILES_GLOBAL};

/// Origin of the loaded file map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSource {
    /// `window.__CODEVIEW_FILES__` set by the host page
    Host,
    /// Built-in demo map
    Demo,
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "window.{}", HOST_FILES_GLOBAL),
            Self::Demo => write!(f, "built-in demo"),
        }
    }
}

/// Load the host's file map, falling back to the demo map.
///
/// A host global that is present but not an object of strings is an error,
/// not a reason to fall back.
pub fn load_file_map() -> Result<(FileMap, FileSource), SourceError> {
    if let Some(value) = dom::host_global(HOST_FILES_GLOBAL) {
        let map = serde_wasm_bindgen::from_value(value)
            .map_err(|e| SourceError::InvalidShape(e.to_string()))?;
        return Ok((map, FileSource::Host));
    }
    parse_file_map(DEMO_FILES_JSON).map(|map| (map, FileSource::Demo))
}
