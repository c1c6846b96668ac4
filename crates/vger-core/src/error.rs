//! Error types for digest extraction and manifest reading.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while hashing an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The file exists but is not a readable ZIP container.
    #[error("'{}' is not a valid zip file: {reason}", path.display())]
    NotAValidArchive {
        /// Archive path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The archive path does not exist.
    #[error("file not found: '{}'", path.display())]
    NotFound {
        /// Archive path.
        path: PathBuf,
    },

    /// Any other failure while opening or streaming the archive.
    #[error("failed to read '{}': {message}", path.display())]
    Other {
        /// Archive path.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl ArchiveError {
    /// Returns `true` if the archive path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use vger_core::ArchiveError;
    ///
    /// let err = ArchiveError::NotFound {
    ///     path: PathBuf::from("missing.zip"),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the archive path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotAValidArchive { path, .. }
            | Self::NotFound { path }
            | Self::Other { path, .. } => path,
        }
    }

    pub(crate) fn from_io(path: &Path, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Other {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }
}

/// Errors raised while reading the manifest document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document path does not exist.
    #[error("file not found: '{}'", path.display())]
    NotFound {
        /// Document path.
        path: PathBuf,
    },

    /// The document could not be opened or its text could not be extracted.
    #[error("failed to read '{}': {message}", path.display())]
    Other {
        /// Document path.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl DocumentError {
    /// Returns `true` if the document path does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the document path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Other { path, .. } => path,
        }
    }

    pub(crate) fn from_io(path: &Path, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Other {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }
}

/// Errors raised while loading removal rules from a TOML file.
#[derive(Error, Debug)]
pub enum RulesError {
    /// The rules file could not be read.
    #[error("failed to read rules file '{}': {source}", path.display())]
    Io {
        /// Rules file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rules file is not valid TOML for [`RemovalRules`](crate::RemovalRules).
    #[error("invalid rules file '{}': {source}", path.display())]
    Parse {
        /// Rules file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level outcome errors of a verification run.
///
/// Extraction errors are collected as diagnostics rather than aborting the
/// run. `NoData` is derived after reconciliation when nothing was checked.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The archive stage failed.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// The document stage failed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// No digest entries were produced, so nothing could be verified.
    #[error("no digests were produced; nothing was verified")]
    NoData,
}
