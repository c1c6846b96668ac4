//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use vger_core::DigestAlgorithm;
use vger_core::DigestSet;
use vger_core::ManifestText;
use vger_core::Verdict;
use vger_core::VerificationRecord;
use vger_core::VerificationReport;
use vger_core::report::SEPARATOR;
use vger_core::report::banner;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn record_line(&self, record: &VerificationRecord) -> String {
        let verdict = record.verdict.as_str();
        if !self.use_colors {
            return record.to_string();
        }
        let styled = match record.verdict {
            Verdict::Match => style(verdict).green().bold(),
            Verdict::Mismatch => style(verdict).red().bold(),
        };
        format!("{}:{styled}", record.entry)
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_verification_report(
        &self,
        report: &VerificationReport,
        report_file: Option<&Path>,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style(banner(report.algorithm)).bold()));
        } else {
            let _ = self.term.write_line(&banner(report.algorithm));
        }
        let _ = self.term.write_line(SEPARATOR);

        for line in report.diagnostic_lines() {
            if self.use_colors {
                let _ = self.term.write_line(&format!("{}", style(line).red()));
            } else {
                let _ = self.term.write_line(&line);
            }
        }
        for record in report.reconciliation.records() {
            let _ = self.term.write_line(&self.record_line(record));
        }
        for line in report.summary_lines() {
            let _ = self.term.write_line(&line);
        }

        if self.verbose {
            let _ = self.term.write_line(&format!("  Layout: {}", report.layout));
            if let Some(path) = report_file {
                let _ = self.term.write_line(&format!("  Report: {}", path.display()));
            }
        }

        Ok(())
    }

    fn format_digest_set(
        &self,
        archive: &Path,
        algorithm: DigestAlgorithm,
        digests: &DigestSet,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in digests {
            let _ = self.term.write_line(&entry.to_string());
        }

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!(
                "{}: {} {} digest(s), {} layout",
                archive.display(),
                digests.len(),
                algorithm,
                digests.layout()
            ));
        }

        Ok(())
    }

    fn format_manifest(&self, document: &Path, manifest: &ManifestText) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line(manifest.as_str());

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!(
                "{}: {} characters after normalization",
                document.display(),
                manifest.len()
            ));
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}
