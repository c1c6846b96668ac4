//! Reconciliation of computed digests against manifest text.

use crate::types::DigestSet;
use crate::types::ManifestText;
use crate::types::Verdict;
use crate::types::VerificationRecord;

/// Overall outcome of a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every entry matched.
    Verified,
    /// At least one entry did not match.
    Discrepancies,
    /// No entries were reconciled, usually because extraction failed.
    NoData,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "verified"),
            Self::Discrepancies => write!(f, "discrepancies"),
            Self::NoData => write!(f, "no data"),
        }
    }
}

/// Per-entry verdicts with match and mismatch counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    records: Vec<VerificationRecord>,
    success_count: usize,
    error_count: usize,
}

impl Reconciliation {
    /// Records in digest-set order.
    #[must_use]
    pub fn records(&self) -> &[VerificationRecord] {
        &self.records
    }

    /// Number of entries found in the manifest.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.success_count
    }

    /// Number of entries not found in the manifest.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns `true` if nothing was reconciled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.success_count + self.error_count == 0
    }

    /// Classifies the outcome.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        if self.is_empty() {
            RunStatus::NoData
        } else if self.error_count == 0 {
            RunStatus::Verified
        } else {
            RunStatus::Discrepancies
        }
    }

    fn push(mut self, record: VerificationRecord) -> Self {
        if record.verdict.is_match() {
            self.success_count += 1;
        } else {
            self.error_count += 1;
        }
        self.records.push(record);
        self
    }
}

/// Checks every entry of `digests` against `manifest`.
///
/// An entry matches when its canonical `label:digest` string occurs anywhere
/// in the normalized manifest as a substring. The manifest is not parsed:
/// letter layout is too irregular for that, so all format handling happens
/// during normalization and this test is intentionally nothing more than
/// containment. Every entry yields exactly one record, in input order.
///
/// # Examples
///
/// ```
/// use vger_core::ArchiveLayout;
/// use vger_core::DigestEntry;
/// use vger_core::DigestSet;
/// use vger_core::ManifestText;
/// use vger_core::Verdict;
/// use vger_core::reconcile;
///
/// let digests = DigestSet::new(
///     vec![DigestEntry::new("a.zip", "01"), DigestEntry::new("b.zip", "02")],
///     ArchiveLayout::Nested,
/// );
/// let manifest = ManifestText::new("a.zip:01b.zip:ff");
///
/// let result = reconcile(&digests, &manifest);
/// assert_eq!(result.success_count(), 1);
/// assert_eq!(result.error_count(), 1);
/// assert_eq!(result.records()[1].verdict, Verdict::Mismatch);
/// ```
#[must_use]
pub fn reconcile(digests: &DigestSet, manifest: &ManifestText) -> Reconciliation {
    digests
        .iter()
        .fold(Reconciliation::default(), |acc, entry| {
            let verdict = if manifest.contains(&entry.canonical()) {
                Verdict::Match
            } else {
                Verdict::Mismatch
            };
            acc.push(VerificationRecord {
                entry: entry.clone(),
                verdict,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArchiveLayout;
    use crate::types::DigestEntry;

    fn set(entries: &[(&str, &str)]) -> DigestSet {
        DigestSet::new(
            entries
                .iter()
                .map(|(label, digest)| DigestEntry::new(*label, *digest))
                .collect(),
            ArchiveLayout::Nested,
        )
    }

    #[test]
    fn test_all_match() {
        let result = reconcile(
            &set(&[("a.zip", "aa"), ("b.zip", "bb")]),
            &ManifestText::new("xa.zip:aab.zip:bbx"),
        );
        assert_eq!(result.status(), RunStatus::Verified);
        assert_eq!(result.success_count(), 2);
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_label_must_accompany_digest() {
        let result = reconcile(&set(&[("a.zip", "aa")]), &ManifestText::new("b.zip:aa"));
        assert_eq!(result.records()[0].verdict, Verdict::Mismatch);
        assert_eq!(result.status(), RunStatus::Discrepancies);
    }

    #[test]
    fn test_truncated_digest_does_not_match() {
        let result = reconcile(&set(&[("a.zip", "aabbcc")]), &ManifestText::new("a.zip:aabb"));
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_records_preserve_order() {
        let result = reconcile(
            &set(&[("z.zip", "01"), ("a.zip", "02"), ("m.zip", "03")]),
            &ManifestText::new("a.zip:02"),
        );
        let labels: Vec<_> = result.records().iter().map(|r| r.entry.label()).collect();
        assert_eq!(labels, ["z.zip", "a.zip", "m.zip"]);
        let verdicts: Vec<_> = result.records().iter().map(|r| r.verdict).collect();
        assert_eq!(verdicts, [Verdict::Mismatch, Verdict::Match, Verdict::Mismatch]);
        assert_eq!(result.success_count(), 1);
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn test_empty_set_is_no_data() {
        let result = reconcile(&DigestSet::empty(), &ManifestText::new("a.zip:01"));
        assert!(result.is_empty());
        assert_eq!(result.status(), RunStatus::NoData);
    }

    #[test]
    fn test_empty_manifest_mismatches_everything() {
        let result = reconcile(&set(&[("a.zip", "01")]), &ManifestText::default());
        assert_eq!(result.status(), RunStatus::Discrepancies);
    }

    #[test]
    fn test_duplicate_labels_are_each_counted() {
        let result = reconcile(
            &set(&[("a.zip", "01"), ("a.zip", "01")]),
            &ManifestText::new("a.zip:01"),
        );
        assert_eq!(result.success_count(), 2);
        assert_eq!(result.records().len(), 2);
    }
}
