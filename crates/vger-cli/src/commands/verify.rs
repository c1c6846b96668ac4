//! Verify command implementation.

use super::hash_config;
use crate::cli::VerifyArgs;
use crate::error::convert_rules_error;
use crate::output::OutputFormatter;
use crate::progress::with_progress;
use crate::prompt::ARCHIVE_PROMPT;
use crate::prompt::DOCUMENT_PROMPT;
use crate::prompt::path_or_prompt;
use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;
use vger_core::RemovalRules;
use vger_core::report_path;
use vger_core::verify;

/// Runs a verification and writes its report next to the archive.
///
/// Exits non-zero unless every computed digest was found in the letter.
pub fn execute(
    args: &VerifyArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<ExitCode> {
    let document = path_or_prompt(args.document.clone(), DOCUMENT_PROMPT)?;
    let archive = path_or_prompt(args.archive.clone(), ARCHIVE_PROMPT)?;

    let mut config = hash_config(&args.hash)?;
    if let Some(rules) = &args.rules {
        config.rules = RemovalRules::load(rules, config.algorithm).map_err(convert_rules_error)?;
    }

    let report = with_progress(show_progress, |progress| {
        verify(&archive, &document, &config, progress)
    });

    let report_file = if args.no_report {
        None
    } else {
        let path = report_path(&archive);
        match report.write_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "wrote report");
                Some(path)
            }
            Err(e) => {
                formatter.format_warning(&format!(
                    "Failed to write report '{}': {e}",
                    path.display()
                ));
                None
            }
        }
    };

    formatter.format_verification_report(&report, report_file.as_deref())?;
    if let Err(e) = report.ensure_data() {
        formatter.format_warning(&e.to_string());
    }

    if report.is_verified() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
