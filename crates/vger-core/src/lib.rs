//! Archive digest extraction and manifest reconciliation.
//!
//! `vger-core` checks that a delivered ZIP archive matches the SHA-512
//! digests listed in the letter that accompanies it. The archive is hashed
//! either per nested archive or as a whole, the letter text is normalized so
//! every `label:digest` pair is contiguous, and each computed pair is looked
//! up in that text.
//!
//! # Examples
//!
//! ```no_run
//! use vger_core::NoopProgress;
//! use vger_core::RunStatus;
//! use vger_core::VerifyConfig;
//! use vger_core::verify;
//!
//! let report = verify(
//!     "12345678-20250101-1.zip",
//!     "Letter.pdf",
//!     &VerifyConfig::default(),
//!     &mut NoopProgress,
//! );
//! if report.status() == RunStatus::Verified {
//!     println!("all {} digests matched", report.reconciliation.success_count());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod progress;
pub mod reconcile;
pub mod report;
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::verify;
pub use archive::extract_digests;
pub use config::VerifyConfig;
pub use digest::DigestAlgorithm;
pub use error::ArchiveError;
pub use error::DocumentError;
pub use error::RulesError;
pub use error::VerifyError;
pub use manifest::RemovalRules;
pub use manifest::extract_manifest_text;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
pub use reconcile::Reconciliation;
pub use reconcile::RunStatus;
pub use reconcile::reconcile;
pub use report::VerificationReport;
pub use report::report_path;
pub use types::ArchiveLayout;
pub use types::DigestEntry;
pub use types::DigestSet;
pub use types::ManifestText;
pub use types::Verdict;
pub use types::VerificationRecord;
