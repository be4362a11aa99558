//! Syllables and stress levels.

use std::fmt;

/// Relative prominence of a syllable.
///
/// The numeric labels follow the pronunciation-dictionary convention:
/// `0` for not yet decided, `1` for primary stress, `3` for no stress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stress {
    /// No decision has been made for this syllable yet.
    #[default]
    Unset,
    /// The syllable carries primary stress.
    Primary,
    /// The syllable is explicitly unstressed.
    NoStress,
}

impl Stress {
    /// The numeric label used in annotated output.
    pub fn label(self) -> char {
        match self {
            Stress::Unset => '0',
            Stress::Primary => '1',
            Stress::NoStress => '3',
        }
    }
}

impl fmt::Display for Stress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One syllable of a transcription: an ordered run of phone tokens plus the
/// bookkeeping the syllabifier and the stress assigner need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Syllable {
    phones: Vec<String>,
    nucleus: bool,
    cluster: Option<String>,
    stress: Stress,
}

impl Syllable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a syllable directly from phone tokens. The nucleus flag is
    /// derived later by the syllabifier; here it is simply marked set.
    pub fn from_phones<I, S>(phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phones: phones.into_iter().map(Into::into).collect(),
            nucleus: true,
            cluster: None,
            stress: Stress::Unset,
        }
    }

    /// The phone tokens of this syllable, in order.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// The phones joined with single spaces, e.g. `"p r I G"`.
    pub fn content(&self) -> String {
        self.phones.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Whether a vowel has been placed in this syllable.
    pub fn has_nucleus(&self) -> bool {
        self.nucleus
    }

    /// The onset cluster identified at this syllable's tail, if any.
    pub fn onset_cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }

    pub fn stress(&self) -> Stress {
        self.stress
    }

    pub(crate) fn first_phone(&self) -> Option<&str> {
        self.phones.first().map(String::as_str)
    }

    pub(crate) fn last_phone(&self) -> Option<&str> {
        self.phones.last().map(String::as_str)
    }

    pub(crate) fn append(&mut self, phone: &str) {
        self.phones.push(phone.to_string());
    }

    pub(crate) fn mark_nucleus(&mut self) {
        self.nucleus = true;
    }

    pub(crate) fn set_cluster(&mut self, cluster: &str) {
        self.cluster = Some(cluster.to_string());
    }

    pub(crate) fn clear_cluster(&mut self) {
        self.cluster = None;
    }

    /// Move `count` phones off this syllable's tail, preserving their order.
    pub(crate) fn take_tail(&mut self, count: usize) -> Vec<String> {
        let split = self.phones.len().saturating_sub(count);
        self.phones.split_off(split)
    }

    /// Insert phones at the front of this syllable, preserving their order.
    pub(crate) fn prepend(&mut self, phones: Vec<String>) {
        let mut prefixed = phones;
        prefixed.append(&mut self.phones);
        self.phones = prefixed;
    }

    /// Raise or set the stress level. A syllable that has been given primary
    /// stress keeps it; later assignments never downgrade.
    pub(crate) fn assign_stress(&mut self, level: Stress) {
        if self.stress == Stress::Primary {
            return;
        }
        self.stress = level;
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content())
    }
}
