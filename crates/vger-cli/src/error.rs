//! Error conversion utilities for CLI.
//!
//! Converts vger-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use vger_core::ArchiveError;
use vger_core::DocumentError;
use vger_core::RulesError;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError) -> anyhow::Error {
    match err {
        ArchiveError::NotFound { path } => {
            anyhow!(
                "File not found: '{}'\n\
                 HINT: Check the archive name, or drag the file into the terminal to paste its path.",
                path.display()
            )
        }
        ArchiveError::NotAValidArchive { path, reason } => {
            anyhow!(
                "Error: '{}' is not a valid zip file: {}\n\
                 HINT: The download may be incomplete. Fetch the archive again.",
                path.display(),
                reason
            )
        }
        err @ ArchiveError::Other { .. } => {
            anyhow::Error::from(err).context("Error hashing archive")
        }
    }
}

/// Converts `DocumentError` to user-friendly anyhow error with context
pub fn convert_document_error(err: DocumentError) -> anyhow::Error {
    match err {
        DocumentError::NotFound { path } => {
            anyhow!(
                "File not found: '{}'\n\
                 HINT: Check the letter name. Letters are PDF files, or .txt files with pages split by form feeds.",
                path.display()
            )
        }
        err @ DocumentError::Other { .. } => {
            anyhow::Error::from(err).context("Error reading letter")
        }
    }
}

/// Converts `RulesError` to user-friendly anyhow error with context
pub fn convert_rules_error(err: RulesError) -> anyhow::Error {
    match err {
        RulesError::Parse { path, source } => {
            anyhow!(
                "Invalid rules file '{}': {}\n\
                 HINT: Supported keys: strip, boilerplate, extra_boilerplate, prefix",
                path.display(),
                source
            )
        }
        err @ RulesError::Io { .. } => anyhow::Error::from(err),
    }
}
