//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use vger_core::DigestAlgorithm;
use vger_core::DigestEntry;
use vger_core::DigestSet;
use vger_core::ManifestText;
use vger_core::VerificationReport;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct EntryOutput {
    label: String,
    digest: String,
}

impl From<&DigestEntry> for EntryOutput {
    fn from(entry: &DigestEntry) -> Self {
        Self {
            label: entry.label().to_string(),
            digest: entry.digest().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RecordOutput {
    #[serde(flatten)]
    entry: EntryOutput,
    verdict: &'static str,
}

#[derive(Debug, Serialize)]
struct VerificationOutput {
    archive: String,
    document: String,
    algorithm: &'static str,
    layout: String,
    status: String,
    records: Vec<RecordOutput>,
    success_count: usize,
    error_count: usize,
    diagnostics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_path: Option<String>,
}

impl VerificationOutput {
    fn new(report: &VerificationReport, report_file: Option<&Path>) -> Self {
        let reconciliation = &report.reconciliation;
        Self {
            archive: report.archive.display().to_string(),
            document: report.document.display().to_string(),
            algorithm: report.algorithm.name(),
            layout: report.layout.to_string(),
            status: report.status().to_string(),
            records: reconciliation
                .records()
                .iter()
                .map(|r| RecordOutput {
                    entry: EntryOutput::from(&r.entry),
                    verdict: r.verdict.as_str(),
                })
                .collect(),
            success_count: reconciliation.success_count(),
            error_count: reconciliation.error_count(),
            diagnostics: report.diagnostics.iter().map(ToString::to_string).collect(),
            report_path: report_file.map(|p| p.display().to_string()),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_verification_report(
        &self,
        report: &VerificationReport,
        report_file: Option<&Path>,
    ) -> Result<()> {
        let data = VerificationOutput::new(report, report_file);
        let output = if report.is_verified() {
            JsonOutput::success("verify", data)
        } else {
            JsonOutput::failure("verify", data)
        };
        Self::output(&output)
    }

    fn format_digest_set(
        &self,
        archive: &Path,
        algorithm: DigestAlgorithm,
        digests: &DigestSet,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct DigestOutput {
            archive: String,
            algorithm: &'static str,
            layout: String,
            entries: Vec<EntryOutput>,
        }

        let data = DigestOutput {
            archive: archive.display().to_string(),
            algorithm: algorithm.name(),
            layout: digests.layout().to_string(),
            entries: digests.iter().map(EntryOutput::from).collect(),
        };

        Self::output(&JsonOutput::success("digest", data))
    }

    fn format_manifest(&self, document: &Path, manifest: &ManifestText) -> Result<()> {
        #[derive(Serialize)]
        struct ManifestOutput<'a> {
            document: String,
            length: usize,
            text: &'a str,
        }

        let data = ManifestOutput {
            document: document.display().to_string(),
            length: manifest.len(),
            text: manifest.as_str(),
        };

        Self::output(&JsonOutput::success("normalize", data))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        // stdout carries exactly one JSON document per run
        let _ = writeln!(io::stderr(), "WARNING: {message}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vger_core::ArchiveError;
    use vger_core::ArchiveLayout;
    use vger_core::reconcile;

    fn report() -> VerificationReport {
        let set = DigestSet::new(
            vec![DigestEntry::new("a.zip", "01"), DigestEntry::new("b.zip", "02")],
            ArchiveLayout::Nested,
        );
        VerificationReport {
            archive: PathBuf::from("outer.zip"),
            document: PathBuf::from("Letter.pdf"),
            algorithm: DigestAlgorithm::Sha512,
            layout: set.layout(),
            diagnostics: Vec::new(),
            reconciliation: reconcile(&set, &ManifestText::new("a.zip:01")),
        }
    }

    #[test]
    fn test_verification_output_structure() {
        let data = VerificationOutput::new(&report(), Some(Path::new("outer.zip.txt")));
        let json = serde_json::to_value(JsonOutput::failure("verify", data)).unwrap();

        assert_eq!(json["status"], "failure");
        assert_eq!(json["data"]["layout"], "nested");
        assert_eq!(json["data"]["success_count"], 1);
        assert_eq!(json["data"]["records"][0]["label"], "a.zip");
        assert_eq!(json["data"]["records"][1]["verdict"], "mismatch or error");
        assert_eq!(json["data"]["report_path"], "outer.zip.txt");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_diagnostics_serialized_as_messages() {
        let mut report = report();
        report.diagnostics.push(
            ArchiveError::NotFound {
                path: PathBuf::from("outer.zip"),
            }
            .into(),
        );
        let data = VerificationOutput::new(&report, None);
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["diagnostics"][0], "file not found: 'outer.zip'");
        assert!(json.get("report_path").is_none());
    }
}
