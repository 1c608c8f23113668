use std::path::PathBuf;

use thiserror::Error;

/// Failures attributable to an input document itself.
///
/// Every variant here maps to exit code 3 at the CLI boundary. Missing
/// fields inside an otherwise valid document are never an error; those
/// are silently defaulted during normalization.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{side} document is not a JSON object")]
    NotAnObject { side: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = InputError::NotFound(PathBuf::from("/tmp/base.json"));
        assert_eq!(err.to_string(), "file not found: /tmp/base.json");

        let err = InputError::NotAnObject { side: "head" };
        assert_eq!(err.to_string(), "head document is not a JSON object");
    }
}
