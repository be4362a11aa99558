//! Phone inventories for the supported phonetic alphabets.
//!
//! Syllabification and transcript alignment need to know three things about
//! the alphabet a transcription is written in: which phone tokens are vowels
//! (syllable nuclei), which consonant sequences form unbreakable onset
//! clusters, and how length, voicelessness and post-aspiration are marked on
//! a token. [`PhoneInventory`] bundles those, with built-in profiles for
//! X-SAMPA and IPA and an optional typed JSON override resource.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::lexicon::LexiconError;

/// File name of the optional phone-set override inside a tables directory.
pub const PHONE_SET_FILE: &str = "phones.json";

/// The phonetic alphabets with built-in inventories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// X-SAMPA as used by Icelandic pronunciation dictionaries (`a:`, `l_0`, `t_h`).
    #[default]
    Sampa,
    /// IPA with combining marks (`aː`, `l̥`, `tʰ`).
    Ipa,
}

// 'e' and 'o' are not in the Icelandic vowel inventory on their own, but the
// diphthongs 'ei' and 'ou' must be recognizable from their first character,
// so both characters are kept in the list.
const SAMPA_VOWELS: &[&str] = &[
    "a", "a:", "ai", "ai:", "au", "au:", "e", "ei", "ei:", "E", "E:", "i", "i:", "I", "I:", "o",
    "ou", "ou:", "O", "O:", "u", "u:", "Y", "Y:", "Yi", "9", "9:", "9i", "9i:",
];

const IPA_VOWELS: &[&str] = &[
    "a", "aː", "ai", "aiː", "au", "auː", "e", "ei", "eiː", "ɛ", "ɛː", "i", "iː", "ɪ", "ɪː", "o",
    "ou", "ouː", "ɔ", "ɔː", "u", "uː", "ʏ", "ʏː", "ʏi", "œ", "œː", "œy", "œyː",
];

// Consonant sequences that always build an onset together and therefore move
// between syllables as a unit: s/p/t/k + v/j/r, and f + r. The table is
// ordered by ascending precedence; when more than one entry matches a
// syllable tail, the last match wins.
const ONSET_CLUSTERS: &[&str] = &[
    "s v", "s j", "s r", "p v", "p j", "p r", "t v", "t j", "t r", "k v", "k j", "k r", "f r",
];

/// Everything syllabification needs to know about one phonetic alphabet.
///
/// Instances are cheap to construct and immutable afterwards; a
/// [`Processor`](crate::processor::Processor) builds one at startup and shares
/// it by reference.
#[derive(Debug, Clone)]
pub struct PhoneInventory {
    vowels: HashSet<String>,
    vowel_initials: HashSet<char>,
    clusters: Vec<String>,
    length_symbol: String,
    voiceless_marker: String,
    aspiration_marker: String,
}

impl PhoneInventory {
    /// Built-in inventory for the given alphabet.
    pub fn builtin(alphabet: Alphabet) -> Self {
        match alphabet {
            Alphabet::Sampa => Self::from_parts(SAMPA_VOWELS, ONSET_CLUSTERS, ":", "_0", "_h"),
            Alphabet::Ipa => Self::from_parts(IPA_VOWELS, ONSET_CLUSTERS, "ː", "\u{325}", "ʰ"),
        }
    }

    /// Load the inventory for a tables directory.
    ///
    /// If `dir` contains a `phones.json` resource it is parsed and validated;
    /// otherwise the built-in inventory for `alphabet` is used.
    pub fn load_or_builtin(dir: &Path, alphabet: Alphabet) -> Result<Self, LexiconError> {
        let path = dir.join(PHONE_SET_FILE);
        if path.exists() {
            log::info!("Loading phone set from {}", path.display());
            Self::from_json_file(&path)
        } else {
            log::debug!("No {PHONE_SET_FILE} in tables directory, using built-in {alphabet:?}");
            Ok(Self::builtin(alphabet))
        }
    }

    /// Load and validate a phone-set definition from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let def: PhoneSetDef = serde_json::from_str(&content)
            .map_err(|e| LexiconError::PhoneSet(format!("{}: {e}", path.display())))?;
        def.validate()
            .map_err(|e| LexiconError::PhoneSet(format!("{}: {e}", path.display())))?;
        Ok(Self::from_parts(
            &def.vowels.iter().map(String::as_str).collect::<Vec<_>>(),
            &def.onset_clusters.iter().map(String::as_str).collect::<Vec<_>>(),
            &def.length_symbol,
            &def.voiceless_marker,
            &def.aspiration_marker,
        ))
    }

    fn from_parts(
        vowels: &[&str],
        clusters: &[&str],
        length_symbol: &str,
        voiceless_marker: &str,
        aspiration_marker: &str,
    ) -> Self {
        let vowel_initials = vowels.iter().filter_map(|v| v.chars().next()).collect();
        Self {
            vowels: vowels.iter().map(|v| v.to_string()).collect(),
            vowel_initials,
            clusters: clusters.iter().map(|c| c.to_string()).collect(),
            length_symbol: length_symbol.to_string(),
            voiceless_marker: voiceless_marker.to_string(),
            aspiration_marker: aspiration_marker.to_string(),
        }
    }

    /// Whether a phone token is a vowel (a syllable nucleus).
    pub fn is_vowel(&self, phone: &str) -> bool {
        self.vowels.contains(phone)
    }

    /// Whether a phone token begins with a vowel character.
    ///
    /// Used where only the first character matters, e.g. recognizing that a
    /// syllable starts vocalically without caring about length marks.
    pub fn is_vowel_initial(&self, phone: &str) -> bool {
        phone
            .chars()
            .next()
            .is_some_and(|c| self.vowel_initials.contains(&c))
    }

    /// The onset-cluster table, ordered by ascending precedence.
    pub fn onset_clusters(&self) -> &[String] {
        &self.clusters
    }

    /// The length-mark symbol of this alphabet (`:` for X-SAMPA).
    pub fn length_symbol(&self) -> &str {
        &self.length_symbol
    }

    /// The post-aspiration marker of this alphabet (`_h` for X-SAMPA).
    pub fn aspiration_marker(&self) -> &str {
        &self.aspiration_marker
    }

    /// Strip a trailing length mark or voicelessness/post-aspiration marker
    /// from a phone token.
    ///
    /// Tokens whose bases are equal are treated as interchangeable during
    /// transcript alignment: `a:` == `a`, `r_0` == `r`, `t_h` == `t`.
    pub fn base_phone<'a>(&self, phone: &'a str) -> &'a str {
        if let Some(stripped) = phone.strip_suffix(self.length_symbol.as_str()) {
            return stripped;
        }
        if let Some(stripped) = phone.strip_suffix(self.voiceless_marker.as_str()) {
            return stripped;
        }
        if let Some(stripped) = phone.strip_suffix(self.aspiration_marker.as_str()) {
            return stripped;
        }
        phone
    }
}

impl Default for PhoneInventory {
    fn default() -> Self {
        Self::builtin(Alphabet::Sampa)
    }
}

/// On-disk shape of a phone-set override resource.
#[derive(Debug, Deserialize)]
struct PhoneSetDef {
    vowels: Vec<String>,
    onset_clusters: Vec<String>,
    length_symbol: String,
    #[serde(default)]
    voiceless_marker: String,
    #[serde(default)]
    aspiration_marker: String,
}

impl PhoneSetDef {
    fn validate(&self) -> Result<(), String> {
        if self.vowels.is_empty() {
            return Err("vowel list is empty".to_string());
        }
        if let Some(v) = self.vowels.iter().find(|v| v.trim().is_empty()) {
            return Err(format!("blank vowel entry {v:?}"));
        }
        for cluster in &self.onset_clusters {
            if cluster.split_whitespace().count() < 2 {
                return Err(format!(
                    "onset cluster {cluster:?} must contain at least two space-separated phones"
                ));
            }
        }
        if self.length_symbol.is_empty() {
            return Err("length symbol is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, PhoneInventory};

    #[test]
    fn recognizes_plain_and_marked_vowels() {
        let inv = PhoneInventory::builtin(Alphabet::Sampa);
        assert!(inv.is_vowel("a"));
        assert!(inv.is_vowel("a:"));
        assert!(inv.is_vowel("9i"));
        assert!(!inv.is_vowel("r"));
        assert!(!inv.is_vowel("l_0"));
    }

    #[test]
    fn diphthongs_are_vowel_initial() {
        let inv = PhoneInventory::builtin(Alphabet::Sampa);
        assert!(inv.is_vowel_initial("ei"));
        assert!(inv.is_vowel_initial("ou:"));
        assert!(inv.is_vowel_initial("E:"));
        assert!(!inv.is_vowel_initial("t_h"));
    }

    #[test]
    fn base_phone_strips_markers() {
        let inv = PhoneInventory::builtin(Alphabet::Sampa);
        assert_eq!(inv.base_phone("a:"), "a");
        assert_eq!(inv.base_phone("r_0"), "r");
        assert_eq!(inv.base_phone("t_h"), "t");
        assert_eq!(inv.base_phone("h"), "h");
        assert_eq!(inv.base_phone("ei"), "ei");
    }

    #[test]
    fn ipa_profile_uses_ipa_marks() {
        let inv = PhoneInventory::builtin(Alphabet::Ipa);
        assert!(inv.is_vowel("aː"));
        assert!(inv.is_vowel("œy"));
        assert_eq!(inv.base_phone("aː"), "a");
        assert_eq!(inv.base_phone("tʰ"), "t");
    }

    #[test]
    fn phone_set_definition_is_validated() {
        let bad: Result<super::PhoneSetDef, _> = serde_json::from_str(r#"{ "vowels": [] }"#);
        // missing required fields fail at parse time
        assert!(bad.is_err());

        let parsed: super::PhoneSetDef = serde_json::from_str(
            r#"{ "vowels": ["a"], "onset_clusters": ["s"], "length_symbol": ":" }"#,
        )
        .expect("well-formed JSON should parse");
        assert!(parsed.validate().is_err(), "one-phone cluster must be rejected");

        let ok: super::PhoneSetDef = serde_json::from_str(
            r#"{ "vowels": ["a", "a:"], "onset_clusters": ["s v"], "length_symbol": ":" }"#,
        )
        .expect("well-formed JSON should parse");
        assert!(ok.validate().is_ok());
    }
}
