//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GedcomError, Result};

/// Safely read a GEDCOM file to a string with rich error information
///
/// This function checks that the path exists and names a regular file before
/// reading, and provides detailed error information if any step fails.
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
///
/// # Returns
/// * `Result<String>` - The file contents or a detailed error
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    // Check if the path exists
    if !path.exists() {
        return Err(GedcomError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {} (needed for: {purpose})", path.display()),
        )));
    }

    // Check if the path is a file
    if !path.is_file() {
        return Err(GedcomError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "path is not a file: {} (expected a file for: {purpose})",
                path.display()
            ),
        )));
    }

    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading {}", path.display())
                }
                io::ErrorKind::InvalidData => {
                    format!(
                        "{} contains invalid UTF-8 data - cannot read as text",
                        path.display()
                    )
                }
                _ => format!("failed to read {} for: {purpose}", path.display()),
            };

            Err(GedcomError::Io(io::Error::new(e.kind(), context)))
        }
    }
}
