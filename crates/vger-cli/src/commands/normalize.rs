//! Normalize command implementation

use crate::cli::NormalizeArgs;
use crate::error::convert_document_error;
use crate::error::convert_rules_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use vger_core::RemovalRules;
use vger_core::VerifyConfig;
use vger_core::extract_manifest_text;

pub fn execute(args: &NormalizeArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut config = VerifyConfig::for_algorithm(args.algorithm.into());
    if let Some(rules) = &args.rules {
        config.rules = RemovalRules::load(rules, config.algorithm).map_err(convert_rules_error)?;
    }

    let manifest = extract_manifest_text(&args.document, &config).map_err(convert_document_error)?;

    formatter.format_manifest(&args.document, &manifest)
}
