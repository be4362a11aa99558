//! Lexical entries: a word paired with its phonetic transcription.

use std::collections::BTreeSet;

use crate::phones::PhoneInventory;
use crate::syllable::Syllable;

/// One pronunciation-dictionary entry.
///
/// Created from a word and its space-separated transcription, then enriched
/// by the pipeline: the syllabifier fills [`syllables`](Self::syllables) and
/// [`compound_elements`](Self::compound_elements), the stress assigner labels
/// the syllables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PronEntry {
    word: String,
    transcript: String,
    variants: BTreeSet<String>,
    syllables: Vec<Syllable>,
    compound_elements: Vec<String>,
}

impl PronEntry {
    /// Create an entry. Surrounding whitespace on the transcription is not
    /// meaningful and is trimmed.
    pub fn new(word: &str, transcription: &str) -> Self {
        let transcript = transcription.trim().to_string();
        let mut variants = BTreeSet::new();
        variants.insert(transcript.clone());
        Self {
            word: word.to_string(),
            transcript,
            variants,
            syllables: Vec::new(),
            compound_elements: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// The phone tokens of the transcription, in order.
    pub fn phones(&self) -> impl Iterator<Item = &str> {
        self.transcript.split_whitespace()
    }

    pub fn phone_count(&self) -> usize {
        self.phones().count()
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub(crate) fn syllables_mut(&mut self) -> &mut Vec<Syllable> {
        &mut self.syllables
    }

    /// The words this entry decomposes into, in surface order. A
    /// non-compound entry lists just its own word.
    pub fn compound_elements(&self) -> &[String] {
        &self.compound_elements
    }

    pub(crate) fn set_compound_elements(&mut self, elements: Vec<String>) {
        self.compound_elements = elements;
    }

    /// Alternative transcriptions recorded for this entry. Always contains
    /// the main transcript.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    pub fn add_variant(&mut self, transcription: &str) {
        self.variants.insert(transcription.trim().to_string());
    }

    /// Discard variants that differ from the main transcript only in length
    /// marks, only in post-aspiration, or only in a combination of the two.
    /// Such variants carry no information a compound pipeline cares about.
    pub fn simplify_variants(&mut self, inventory: &PhoneInventory) {
        let length = inventory.length_symbol();
        let aspir = inventory.aspiration_marker();
        let no_aspir = self.transcript.replace(aspir, "");

        let kept = std::mem::take(&mut self.variants);
        self.variants.insert(self.transcript.clone());
        for variant in kept {
            if variant.replace(length, "") == self.transcript
                || self.transcript.replace(length, "") == variant
            {
                continue;
            }
            if variant == no_aspir {
                continue;
            }
            if variant.replace(length, "") == no_aspir || no_aspir.replace(length, "") == variant {
                continue;
            }
            self.variants.insert(variant);
        }
    }
}
