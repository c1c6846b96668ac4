//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap_complete::Shell;
use std::path::PathBuf;
use vger_core::DigestAlgorithm;

/// Upper bound for `--chunk-size`, matching the largest buffer the core allocates.
#[allow(clippy::cast_possible_truncation)]
const MAX_CHUNK_SIZE: u64 = vger_core::digest::MAX_CHUNK_SIZE as u64;

#[derive(Parser)]
#[command(name = "vger")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Enable trace logging
    #[arg(long, global = true)]
    pub trace: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify an archive against the digests listed in its letter
    Verify(VerifyArgs),
    /// Print the digests computed for an archive
    Digest(DigestArgs),
    /// Print the normalized manifest text of a letter
    Normalize(NormalizeArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

/// Hash algorithm selectable on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    Sha512,
    Sha256,
}

impl From<AlgorithmArg> for DigestAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha512 => Self::Sha512,
            AlgorithmArg::Sha256 => Self::Sha256,
        }
    }
}

#[derive(clap::Args)]
pub struct HashOptions {
    /// Hash algorithm
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Sha512)]
    pub algorithm: AlgorithmArg,

    /// Read buffer size in bytes (at most 16 MiB)
    #[arg(
        long,
        default_value = "4096",
        value_parser = clap::value_parser!(u64).range(1..=MAX_CHUNK_SIZE)
    )]
    pub chunk_size: u64,
}

#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Path to the archive (prompted for when omitted)
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// Path to the letter listing the digests (prompted for when omitted)
    #[arg(value_name = "DOCUMENT")]
    pub document: Option<PathBuf>,

    #[command(flatten)]
    pub hash: HashOptions,

    /// TOML file overriding the text removal rules
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Do not write the report file next to the archive
    #[arg(long)]
    pub no_report: bool,
}

#[derive(clap::Args)]
pub struct DigestArgs {
    /// Path to the archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    #[command(flatten)]
    pub hash: HashOptions,
}

#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Path to the letter
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Hash algorithm whose manifest prefix is removed
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Sha512)]
    pub algorithm: AlgorithmArg,

    /// TOML file overriding the text removal rules
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verify_defaults() {
        let cli = Cli::try_parse_from(["vger", "verify", "outer.zip", "Letter.pdf"]).unwrap();
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert_eq!(args.archive, Some(PathBuf::from("outer.zip")));
        assert_eq!(args.document, Some(PathBuf::from("Letter.pdf")));
        assert_eq!(args.hash.algorithm, AlgorithmArg::Sha512);
        assert_eq!(args.hash.chunk_size, 4096);
        assert!(!args.no_report);
        assert!(args.rules.is_none());
    }

    #[test]
    fn test_verify_paths_are_optional() {
        let cli = Cli::try_parse_from(["vger", "verify"]).unwrap();
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert!(args.archive.is_none());
        assert!(args.document.is_none());
    }

    #[test]
    fn test_algorithm_flag() {
        let cli =
            Cli::try_parse_from(["vger", "digest", "outer.zip", "--algorithm", "sha256"]).unwrap();
        let Commands::Digest(args) = cli.command else {
            panic!("expected digest");
        };
        assert_eq!(
            DigestAlgorithm::from(args.hash.algorithm),
            DigestAlgorithm::Sha256
        );
    }

    #[test]
    fn test_chunk_size_upper_bound() {
        let max = MAX_CHUNK_SIZE.to_string();
        let cli =
            Cli::try_parse_from(["vger", "digest", "a.zip", "--chunk-size", max.as_str()]).unwrap();
        let Commands::Digest(args) = cli.command else {
            panic!("expected digest");
        };
        assert_eq!(args.hash.chunk_size, 16 * 1024 * 1024);

        let over = (MAX_CHUNK_SIZE + 1).to_string();
        assert!(
            Cli::try_parse_from(["vger", "digest", "a.zip", "--chunk-size", over.as_str()]).is_err()
        );
        assert!(
            Cli::try_parse_from([
                "vger",
                "verify",
                "e.zip",
                "l.txt",
                "--chunk-size",
                "100000000000000"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert!(Cli::try_parse_from(["vger", "digest", "a.zip", "--chunk-size", "0"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vger", "-q", "-v", "verify"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["vger", "normalize", "Letter.pdf", "--json"]).unwrap();
        assert!(cli.json);
    }
}
