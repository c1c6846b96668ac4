//! Manifest text extraction and normalization.
//!
//! # Examples
//!
//! ```no_run
//! use vger_core::VerifyConfig;
//! use vger_core::manifest::extract_manifest_text;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VerifyConfig::default();
//! let manifest = extract_manifest_text("Letter.pdf", &config)?;
//! println!("{} normalized bytes", manifest.len());
//! # Ok(())
//! # }
//! ```

pub mod normalize;
pub mod source;

pub use normalize::Normalizer;
pub use normalize::RemovalRules;
pub use source::PdfTextSource;
pub use source::PlainTextSource;
pub use source::TextSource;
pub use source::source_for;

use std::path::Path;

use tracing::info;

use crate::VerifyConfig;
use crate::error::DocumentError;
use crate::types::ManifestText;

/// Extracts and normalizes the manifest text of the document at `path`.
///
/// The text source is chosen by [`source_for`].
pub fn extract_manifest_text<P: AsRef<Path>>(
    path: P,
    config: &VerifyConfig,
) -> Result<ManifestText, DocumentError> {
    let path = path.as_ref();
    extract_manifest_text_with(path, source_for(path).as_ref(), config)
}

/// Extracts and normalizes manifest text using an explicit text source.
pub fn extract_manifest_text_with(
    path: &Path,
    source: &dyn TextSource,
    config: &VerifyConfig,
) -> Result<ManifestText, DocumentError> {
    let pages = source.pages(path)?;

    let mut normalizer = Normalizer::new(&config.rules);
    for page in &pages {
        normalizer.push_page(page);
    }
    let manifest = normalizer.finish();

    info!(
        document = %path.display(),
        source = source.name(),
        pages = pages.len(),
        bytes = manifest.len(),
        "normalized manifest text"
    );

    Ok(manifest)
}
