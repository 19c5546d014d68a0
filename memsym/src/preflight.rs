//! Pre-flight checks for memsym
//!
//! Validates the target binary before symbols are loaded from it, and warns
//! once symbols are loaded if the binary lacks the debug info stacks need.

use std::path::Path;

use crate::domain::ResolverError;
use crate::symbolization::DebugInfo;

/// Run all pre-flight checks before the symbolizer is created
///
/// # Errors
/// Returns an error if the path is missing or is not a regular file
pub fn run_preflight_checks(target_path: &Path) -> Result<(), ResolverError> {
    check_binary_exists(target_path)
}

/// Check if the target binary exists and is a regular file
fn check_binary_exists(target_path: &Path) -> Result<(), ResolverError> {
    let path = target_path.display().to_string();
    if !target_path.exists() {
        return Err(ResolverError::NotFound { path });
    }
    if !target_path.is_file() {
        return Err(ResolverError::NotAFile { path });
    }
    Ok(())
}

/// Warning to show for the debug info a binary carries, if any
#[must_use]
pub fn debug_info_warning(status: DebugInfo) -> Option<&'static str> {
    match status {
        DebugInfo::Stripped => {
            Some("binary stripped, every frame will resolve to ?? and be dropped")
        }
        DebugInfo::SymbolsOnly => Some("no DWARF debug info, inlined frames will be missing"),
        DebugInfo::Full => None,
    }
}

/// Print the debug info warning for the loaded binary on stderr
pub fn report_debug_info(status: DebugInfo) {
    if let Some(warning) = debug_info_warning(status) {
        eprintln!("warning: {warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_binary_not_found() {
        let result = check_binary_exists(Path::new("/nonexistent/path/to/binary"));
        assert!(matches!(result, Err(ResolverError::NotFound { .. })));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Binary not found"));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = check_binary_exists(dir.path());
        assert!(matches!(result, Err(ResolverError::NotAFile { .. })));
    }

    #[test]
    fn test_regular_file_passes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not an elf file").unwrap();
        assert!(run_preflight_checks(file.path()).is_ok());
    }

    #[test]
    fn test_debug_info_warnings() {
        assert_eq!(debug_info_warning(DebugInfo::Full), None);
        assert!(debug_info_warning(DebugInfo::SymbolsOnly).unwrap().contains("no DWARF"));
        assert!(debug_info_warning(DebugInfo::Stripped).unwrap().contains("stripped"));
    }
}
