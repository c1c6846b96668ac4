//! Subcommand implementations.

pub mod completion;
pub mod digest;
pub mod normalize;
pub mod verify;

use crate::cli::HashOptions;
use anyhow::Context;
use anyhow::Result;
use vger_core::VerifyConfig;

/// Builds the hashing part of a config from command-line options.
fn hash_config(options: &HashOptions) -> Result<VerifyConfig> {
    let mut config = VerifyConfig::for_algorithm(options.algorithm.into());
    config.chunk_size = usize::try_from(options.chunk_size)
        .context("--chunk-size does not fit in memory on this platform")?;
    Ok(config)
}
