//! Digest command implementation

use super::hash_config;
use crate::cli::DigestArgs;
use crate::error::convert_archive_error;
use crate::output::OutputFormatter;
use crate::progress::with_progress;
use anyhow::Result;
use vger_core::extract_digests;

pub fn execute(
    args: &DigestArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let config = hash_config(&args.hash)?;

    let digests = with_progress(show_progress, |progress| {
        extract_digests(&args.archive, &config, progress)
    })
    .map_err(convert_archive_error)?;

    formatter.format_digest_set(&args.archive, config.algorithm, &digests)
}
