//! Structured error types for memsym
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// Failures while loading the binary that addresses are resolved against.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Binary not found: {path}\n\nMake sure the path is correct and the binary exists.")]
    NotFound { path: String },

    #[error(
        "Not a file: {path}\n\nBINARY must point to an executable or shared object, not a directory."
    )]
    NotAFile { path: String },

    #[error("Failed to read binary {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse object file {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: object::Error,
    },

    #[error("Failed to load DWARF debug information: {0}")]
    Dwarf(#[from] gimli::Error),
}

/// Failures while turning a dump into collapsed stacks.
#[derive(Error, Debug)]
pub enum SymbolizeError {
    #[error(
        "Malformed record on line {line_number}: expected `<size> <count> <addresses...>`, got {line:?}"
    )]
    MalformedRecord { line_number: usize, line: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_display() {
        let err = SymbolizeError::MalformedRecord { line_number: 3, line: "justoneword".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("\"justoneword\""));
    }

    #[test]
    fn test_not_found_display() {
        let err = ResolverError::NotFound { path: "/opt/app".to_string() };
        assert!(err.to_string().starts_with("Binary not found: /opt/app"));
    }

    #[test]
    fn test_read_failed_display() {
        let err = ResolverError::ReadFailed {
            path: "/nonexistent/app".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/nonexistent/app"));
    }
}
