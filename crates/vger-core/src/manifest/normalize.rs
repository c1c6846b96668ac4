//! Literal-removal normalization of extracted manifest text.
//!
//! Reconciliation is a substring test, so every `label:digest` pair the
//! letter conveys must collapse into one contiguous run. All knowledge of the
//! letter's formatting lives in [`RemovalRules`].
//!
//! Known risk: spaces are deleted everywhere, so two tokens that were
//! separated only by whitespace are joined. A label ending in a digest
//! fragment followed by an unrelated token can therefore form a spurious
//! `label:digest` run. This matches how return letters have always been
//! checked and is left as is.

use std::path::Path;

use serde::Deserialize;

use crate::digest::DigestAlgorithm;
use crate::error::RulesError;
use crate::types::ManifestText;

/// First known letterhead variant (note the misspelled mailbox).
pub const LETTERHEAD_WITH_URL: &str = "GoogleLLCUSLawEnforcment@google.com1600AmphitheatreParkwayMountainView,California94043www.google.com";

/// Second known letterhead variant.
pub const LETTERHEAD: &str =
    "GoogleLLCUSLawEnforcement@google.com1600AmphitheatreParkwayMountainView,California94043";

/// Ordered literal substrings removed from manifest text.
///
/// Passes run in field order: `strip`, then each `boilerplate` block, then
/// `prefix`. Boilerplate literals must be written without whitespace, since
/// `strip` has already removed it by the time they are matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRules {
    /// Whitespace and line-break literals deleted first.
    pub strip: Vec<String>,

    /// Letterhead and contact blocks, in removal order.
    pub boilerplate: Vec<String>,

    /// Algorithm marker preceding each label, e.g. `SHA512-`.
    pub prefix: String,
}

impl RemovalRules {
    /// Default rules with the prefix marker for `algorithm`.
    #[must_use]
    pub fn for_algorithm(algorithm: DigestAlgorithm) -> Self {
        Self {
            strip: vec!["\r".to_string(), "\n".to_string(), " ".to_string()],
            boilerplate: vec![LETTERHEAD_WITH_URL.to_string(), LETTERHEAD.to_string()],
            prefix: algorithm.manifest_prefix().to_string(),
        }
    }

    /// Parses rules from TOML, filling missing keys from the defaults for
    /// `algorithm`.
    ///
    /// Recognized keys: `strip`, `boilerplate` (replaces the defaults),
    /// `extra_boilerplate` (appended after them) and `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vger_core::DigestAlgorithm;
    /// use vger_core::RemovalRules;
    ///
    /// let rules = RemovalRules::from_toml_str(
    ///     r#"extra_boilerplate = ["Page1of2"]"#,
    ///     DigestAlgorithm::Sha512,
    /// )?;
    /// assert_eq!(rules.boilerplate.len(), 3);
    /// # Ok::<(), toml::de::Error>(())
    /// ```
    pub fn from_toml_str(input: &str, algorithm: DigestAlgorithm) -> Result<Self, toml::de::Error> {
        let file: RulesFile = toml::from_str(input)?;
        let defaults = Self::for_algorithm(algorithm);

        let mut boilerplate = file.boilerplate.unwrap_or(defaults.boilerplate);
        boilerplate.extend(file.extra_boilerplate);

        Ok(Self {
            strip: file.strip.unwrap_or(defaults.strip),
            boilerplate,
            prefix: file.prefix.unwrap_or(defaults.prefix),
        })
    }

    /// Loads rules from a TOML file.
    pub fn load(path: &Path, algorithm: DigestAlgorithm) -> Result<Self, RulesError> {
        let input = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input, algorithm).map_err(|source| RulesError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Iterates over the removal literals in application order, skipping
    /// empty ones.
    pub fn removals(&self) -> impl Iterator<Item = &str> {
        self.strip
            .iter()
            .chain(&self.boilerplate)
            .chain(std::iter::once(&self.prefix))
            .map(String::as_str)
            .filter(|literal| !literal.is_empty())
    }

    /// Applies every pass once, in order.
    fn apply_once(&self, text: &str) -> String {
        let mut out = text.to_string();
        for literal in self.removals() {
            if out.contains(literal) {
                out = out.replace(literal, "");
            }
        }
        out
    }

    /// Applies the passes until the text stops shrinking.
    ///
    /// Running this on its own output is a no-op.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let mut current = self.apply_once(text);
        loop {
            let next = self.apply_once(&current);
            if next.len() == current.len() {
                return current;
            }
            current = next;
        }
    }
}

impl Default for RemovalRules {
    fn default() -> Self {
        Self::for_algorithm(DigestAlgorithm::default())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RulesFile {
    strip: Option<Vec<String>>,
    boilerplate: Option<Vec<String>>,
    extra_boilerplate: Vec<String>,
    prefix: Option<String>,
}

/// Accumulates page text and keeps it normalized as pages arrive.
///
/// The passes are re-applied to the whole accumulated text after every page,
/// so a boilerplate block split across a page break is still removed.
#[derive(Debug)]
pub struct Normalizer<'a> {
    rules: &'a RemovalRules,
    text: String,
}

impl<'a> Normalizer<'a> {
    /// Creates an empty normalizer.
    #[must_use]
    pub fn new(rules: &'a RemovalRules) -> Self {
        Self {
            rules,
            text: String::new(),
        }
    }

    /// Appends one page and renormalizes.
    pub fn push_page(&mut self, page: &str) {
        self.text.push_str(page);
        self.text = self.rules.normalize(&self.text);
    }

    /// Returns the normalized manifest.
    #[must_use]
    pub fn finish(self) -> ManifestText {
        ManifestText::new(self.text)
    }
}
