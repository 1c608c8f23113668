use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::delta::error::InputError;

/// Read a combined scan+score JSON document from disk.
///
/// Only existence and JSON well-formedness are checked here. Shape
/// tolerance (nested vs flat summaries, absent fields) is handled later
/// by normalization, never at load time.
pub fn load_document(path: &Path) -> Result<Value, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| InputError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
