//! High-level verification API.

use std::path::Path;

use tracing::info;

use crate::VerifyConfig;
use crate::archive::extract_digests;
use crate::error::VerifyError;
use crate::manifest::extract_manifest_text;
use crate::progress::ProgressCallback;
use crate::reconcile::reconcile;
use crate::report::VerificationReport;
use crate::types::DigestSet;
use crate::types::ManifestText;

/// Hashes `archive`, reads the manifest from `document` and reconciles the
/// two.
///
/// This never fails. A stage that errors is logged, recorded in
/// [`VerificationReport::diagnostics`] and replaced by an empty result, so
/// a bad document still yields a report listing every digest as a mismatch.
///
/// # Examples
///
/// ```no_run
/// use vger_core::NoopProgress;
/// use vger_core::VerifyConfig;
/// use vger_core::verify;
///
/// let report = verify(
///     "12345678-20250101-1.zip",
///     "Letter.pdf",
///     &VerifyConfig::default(),
///     &mut NoopProgress,
/// );
/// for line in report.lines() {
///     println!("{line}");
/// }
/// ```
pub fn verify<A: AsRef<Path>, D: AsRef<Path>>(
    archive: A,
    document: D,
    config: &VerifyConfig,
    progress: &mut dyn ProgressCallback,
) -> VerificationReport {
    let archive = archive.as_ref();
    let document = document.as_ref();
    let mut diagnostics = Vec::new();

    let digests = extract_digests(archive, config, progress).unwrap_or_else(|e| {
        info!(archive = %archive.display(), error = %e, "archive extraction failed");
        diagnostics.push(VerifyError::Archive(e));
        DigestSet::empty()
    });

    let manifest = extract_manifest_text(document, config).unwrap_or_else(|e| {
        info!(document = %document.display(), error = %e, "manifest extraction failed");
        diagnostics.push(VerifyError::Document(e));
        ManifestText::default()
    });

    let reconciliation = reconcile(&digests, &manifest);
    info!(
        matches = reconciliation.success_count(),
        mismatches = reconciliation.error_count(),
        status = %reconciliation.status(),
        "reconciled digests"
    );

    VerificationReport {
        archive: archive.to_path_buf(),
        document: document.to_path_buf(),
        algorithm: config.algorithm,
        layout: digests.layout(),
        diagnostics,
        reconciliation,
    }
}
