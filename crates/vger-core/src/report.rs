//! Verification report model and text rendering.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use crate::digest::DigestAlgorithm;
use crate::error::VerifyError;
use crate::reconcile::Reconciliation;
use crate::reconcile::RunStatus;
use crate::types::ArchiveLayout;

/// Suffix appended to the archive path to name the report file.
pub const REPORT_SUFFIX: &str = ".txt";

/// Rule printed under the banner and above the summary.
pub const SEPARATOR: &str = "------------------------------------------------------------------";

/// Line printed instead of the summary when nothing was verified.
pub const NO_DATA_LINE: &str = "An error occurred.";

/// Returns the report title for `algorithm`.
#[must_use]
pub fn banner(algorithm: DigestAlgorithm) -> String {
    format!(
        "Verifier for Google Electronic Returns (VGER) Version {} {} Edition",
        env!("CARGO_PKG_VERSION"),
        algorithm.name()
    )
}

/// Returns the report path for `archive`: the archive path with
/// [`REPORT_SUFFIX`] appended.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vger_core::report_path;
///
/// assert_eq!(
///     report_path(Path::new("returns/12345678-20250101-1.zip")),
///     Path::new("returns/12345678-20250101-1.zip.txt")
/// );
/// ```
#[must_use]
pub fn report_path(archive: &Path) -> PathBuf {
    let mut path = archive.as_os_str().to_owned();
    path.push(REPORT_SUFFIX);
    PathBuf::from(path)
}

/// Outcome of one verification run.
#[derive(Debug)]
pub struct VerificationReport {
    /// Archive that was hashed.
    pub archive: PathBuf,

    /// Document the manifest was read from.
    pub document: PathBuf,

    /// Hash algorithm used.
    pub algorithm: DigestAlgorithm,

    /// How the archive was interpreted.
    pub layout: ArchiveLayout,

    /// Extraction errors, in the order the stages ran.
    pub diagnostics: Vec<VerifyError>,

    /// Verdicts and counts.
    pub reconciliation: Reconciliation,
}

impl VerificationReport {
    /// Overall status of the run.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        self.reconciliation.status()
    }

    /// Returns `true` if every digest matched.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status() == RunStatus::Verified
    }

    /// Returns [`VerifyError::NoData`] when nothing was verified.
    pub fn ensure_data(&self) -> Result<(), VerifyError> {
        if self.reconciliation.is_empty() {
            Err(VerifyError::NoData)
        } else {
            Ok(())
        }
    }

    /// Diagnostic lines, one per extraction error.
    pub fn diagnostic_lines(&self) -> impl Iterator<Item = String> {
        self.diagnostics.iter().map(|d| format!("Error: {d}"))
    }

    /// Per-entry lines, `label:digest:match` or
    /// `label:digest:mismatch or error`.
    pub fn record_lines(&self) -> impl Iterator<Item = String> {
        self.reconciliation.records().iter().map(ToString::to_string)
    }

    /// Summary lines, or the single no-data line.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        if self.reconciliation.is_empty() {
            return vec![NO_DATA_LINE.to_string()];
        }
        vec![
            SEPARATOR.to_string(),
            format!(
                "{} checked against {}",
                self.archive.display(),
                self.document.display()
            ),
            format!(
                "{} hash match(es) verified.",
                self.reconciliation.success_count()
            ),
            format!(
                "{} hash mismatch(es) or error(s) detected.",
                self.reconciliation.error_count()
            ),
        ]
    }

    /// Every report line in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![banner(self.algorithm), SEPARATOR.to_string()];
        lines.extend(self.diagnostic_lines());
        lines.extend(self.record_lines());
        lines.extend(self.summary_lines());
        lines
    }

    /// Writes the report, one line per row.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }

    /// Creates or truncates `path` and writes the report to it.
    pub fn write_file(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)
    }
}
