//! Data model shared by the extractor, normalizer and reconciler.

use std::fmt;

/// A computed digest for one archive unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    label: String,
    digest: String,
}

impl DigestEntry {
    /// Creates an entry. The digest is stored lowercase.
    #[must_use]
    pub fn new(label: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            digest: digest.into().to_ascii_lowercase(),
        }
    }

    /// Member name for nested archives, base filename for flat ones.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lowercase hex digest.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Returns `label:digest`, the form searched for in the manifest.
    ///
    /// # Examples
    ///
    /// ```
    /// use vger_core::DigestEntry;
    ///
    /// let entry = DigestEntry::new("a.zip", "ABCD");
    /// assert_eq!(entry.canonical(), "a.zip:abcd");
    /// ```
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{}:{}", self.label, self.digest)
    }
}

impl fmt::Display for DigestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.digest)
    }
}

/// How the archive was interpreted during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveLayout {
    /// The container held at least one nested archive; each was hashed.
    Nested,
    /// The container itself was hashed as a single unit.
    #[default]
    Flat,
}

impl fmt::Display for ArchiveLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested => write!(f, "nested"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Ordered digests produced from one archive, in member enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestSet {
    entries: Vec<DigestEntry>,
    layout: ArchiveLayout,
}

impl DigestSet {
    /// Creates a set from already-ordered entries.
    #[must_use]
    pub fn new(entries: Vec<DigestEntry>, layout: ArchiveLayout) -> Self {
        Self { entries, layout }
    }

    /// Creates an empty set, used when extraction failed.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entries in enumeration order.
    #[must_use]
    pub fn entries(&self) -> &[DigestEntry] {
        &self.entries
    }

    /// How the archive was interpreted.
    #[must_use]
    pub fn layout(&self) -> ArchiveLayout {
        self.layout
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no units were hashed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DigestEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DigestSet {
    type Item = &'a DigestEntry;
    type IntoIter = std::slice::Iter<'a, DigestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Normalized manifest text: every intended `label:digest` pair is a
/// contiguous substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestText(String);

impl ManifestText {
    /// Wraps text that has already been normalized.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns `true` if `needle` occurs anywhere in the text.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ManifestText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of checking one entry against the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// `label:digest` was found in the manifest.
    Match,
    /// Not found: either the digest differs or the label is absent.
    Mismatch,
}

impl Verdict {
    /// Suffix used in report lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch or error",
        }
    }

    /// Returns `true` for [`Verdict::Match`].
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry with its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    /// The entry that was checked.
    pub entry: DigestEntry,
    /// Outcome of the check.
    pub verdict: Verdict,
}

impl fmt::Display for VerificationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entry, self.verdict)
    }
}
