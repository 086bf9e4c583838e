//! Logging utilities
//!
//! This module provides standardized logging functions for parse and
//! traversal operations.

use std::path::Path;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a completed parse with consistent format
///
/// # Arguments
/// * `source` - Description of the parsed source
/// * `individuals` - Number of individuals in the resulting graph
/// * `families` - Number of families in the resulting graph
/// * `elapsed` - Optional elapsed time
pub fn log_parse_complete(
    source: &str,
    individuals: usize,
    families: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Parsed {source}: {individuals} individuals, {families} families in {duration:?}"
        );
    } else {
        log::info!("Parsed {source}: {individuals} individuals, {families} families");
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
