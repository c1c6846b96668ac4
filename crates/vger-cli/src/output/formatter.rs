//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use vger_core::DigestAlgorithm;
use vger_core::DigestSet;
use vger_core::ManifestText;
use vger_core::VerificationReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the outcome of a verification run
    fn format_verification_report(
        &self,
        report: &VerificationReport,
        report_file: Option<&Path>,
    ) -> Result<()>;

    /// Format the digests computed for an archive
    fn format_digest_set(
        &self,
        archive: &Path,
        algorithm: DigestAlgorithm,
        digests: &DigestSet,
    ) -> Result<()>;

    /// Format normalized manifest text
    fn format_manifest(&self, document: &Path, manifest: &ManifestText) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Completed operation whose result is negative, e.g. a digest mismatch.
    pub fn failure(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Failure,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
