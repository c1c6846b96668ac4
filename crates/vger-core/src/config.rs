//! Verification configuration.

use crate::digest::DEFAULT_CHUNK_SIZE;
use crate::digest::DigestAlgorithm;
use crate::manifest::RemovalRules;

/// Extension that marks an archive member as a nested archive.
pub const DEFAULT_NESTED_EXTENSION: &str = ".zip";

/// Settings shared by the extractor and the normalizer.
///
/// Pass by reference; nothing in the pipeline needs ownership.
///
/// # Examples
///
/// ```
/// use vger_core::DigestAlgorithm;
/// use vger_core::VerifyConfig;
///
/// let config = VerifyConfig::default();
/// assert_eq!(config.algorithm, DigestAlgorithm::Sha512);
/// assert_eq!(config.nested_extension, ".zip");
///
/// let sha256 = VerifyConfig::for_algorithm(DigestAlgorithm::Sha256);
/// assert_eq!(sha256.rules.prefix, "SHA256-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Hash algorithm; must match the one the manifest declares.
    pub algorithm: DigestAlgorithm,

    /// Member name suffix that triggers nested hashing (case-sensitive).
    pub nested_extension: String,

    /// Read size for streaming hashes, in bytes.
    pub chunk_size: usize,

    /// Ordered literal removals applied to the manifest text.
    pub rules: RemovalRules,
}

impl VerifyConfig {
    /// Creates the default configuration for `algorithm`, with the matching
    /// manifest prefix marker.
    #[must_use]
    pub fn for_algorithm(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            rules: RemovalRules::for_algorithm(algorithm),
            ..Self::default()
        }
    }
}

impl Default for VerifyConfig {
    /// Default values:
    /// - `algorithm`: SHA-512
    /// - `nested_extension`: `.zip`
    /// - `chunk_size`: 4096
    /// - `rules`: the two known letter boilerplate blocks and `SHA512-`
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::Sha512,
            nested_extension: DEFAULT_NESTED_EXTENSION.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            rules: RemovalRules::default(),
        }
    }
}
