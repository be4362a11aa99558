//! Stress assignment over syllabified entries.
//!
//! Icelandic puts primary stress on the first syllable of every word, and
//! compounds carry an additional primary stress on the first syllable of
//! the head. Instead of re-deriving compound structure, the assigner walks
//! an alphabetically ordered word list and reuses the stress pattern of a
//! word that the current word starts with; the first syllable after the
//! shared part gets a primary stress of its own unless the longer word is
//! just an inflected form of the shorter one.

use crate::entry::PronEntry;
use crate::syllable::Stress;

// Grammatical and other endings containing a vowel and thus constituting a
// syllable of their own. A word extending a shorter word by one of these is
// the same word inflected, not a compound with a stressed head.
const ENDING_SYLLABLES: &[&str] = &[
    "a", "i", "u", "ar", "ir", "ur", "is", "um", "na", "ni", "nu", "ið", "ins", "sins", "in",
    "inn", "unum", "num", "nna", "nni", "nnar", "innar", "nar", "inum", "nir", "irnir", "ina",
    "va", "var", "vum", "ngur", "inu", "stu", "ra", "ndi", "da", "di", "un", "uð", "ri", "gur",
    "ga", "gðar", "gðir", "gður", "nga", "leg", "lega", "nlegt", "legt", "semi", "ning",
    "arinnar", "ði", "tha", "ðar", "ðir", "sti", "nda", "ba", "ngu", "inni", "ður", "ngum",
    "ann", "anna", "anni", "ara", "ari", "as", "að", "enn", "í", "ía",
];

/// The stress pattern of an already labeled word, kept around for prefix
/// reuse after the entry itself has moved on.
#[derive(Debug, Clone)]
struct Labeled {
    word: String,
    stresses: Vec<Stress>,
}

impl Labeled {
    fn from_entry(entry: &PronEntry) -> Self {
        Self {
            word: entry.word().to_string(),
            stresses: entry.syllables().iter().map(|s| s.stress()).collect(),
        }
    }

    fn syllable_count(&self) -> usize {
        self.stresses.len()
    }

    fn last_stress(&self) -> Stress {
        self.stresses.last().copied().unwrap_or(Stress::NoStress)
    }
}

/// Assign stress levels to every entry, in place.
///
/// Every word receives primary stress on its first syllable. When a word
/// starts with the previous word, or with a word remembered on the modifier
/// stack, the shorter word's stress pattern is transferred to the shared
/// syllables and the syllable right after the shared part may receive an
/// additional primary stress:
///
/// ```text
/// verslunar        -> ve'rslunar
/// verslunareigandi -> ve'rslunarei'gandi   (compound: stress on the head)
/// verslunarinnar   -> ve'rslunarinnar      (ending: no additional stress)
/// ```
///
/// Prefix reuse expects alphabetically ordered input (see
/// [`sort_for_stress`]); unordered input is still labeled correctly but
/// misses reuse opportunities.
pub fn label_stress(entries: &mut [PronEntry]) {
    let mut modifiers: Vec<Labeled> = Vec::new();
    let mut previous: Option<Labeled> = None;

    for entry in entries.iter_mut() {
        match entry.syllables_mut().first_mut() {
            Some(first) => first.assign_stress(Stress::Primary),
            None => log::warn!("cannot assign stress, no syllables: {:?}", entry.word()),
        }

        match previous.as_ref() {
            Some(prev) if entry.word().starts_with(prev.word.as_str()) => {
                synchronize_stress(prev, entry);
                if prev.word.chars().count() > 1 {
                    modifiers.push(prev.clone());
                }
                add_head_stress(prev, entry);
            }
            _ => {
                while let Some(top) = modifiers.last() {
                    if entry.word().starts_with(top.word.as_str()) {
                        synchronize_stress(top, entry);
                        add_head_stress(top, entry);
                        break;
                    }
                    modifiers.pop();
                }
            }
        }

        previous = Some(Labeled::from_entry(entry));
    }
}

/// Sort entries into the alphabetical order that prefix reuse expects.
pub fn sort_for_stress(entries: &mut [PronEntry]) {
    entries.sort_by(|a, b| a.word().cmp(b.word()));
}

/// Transfer the stress marks of the shorter word to the beginning of the
/// longer word. The longer word must start with the shorter one.
fn synchronize_stress(short: &Labeled, long: &mut PronEntry) {
    // dative 'tei' (of 'te') has two syllables, whereas longer words like
    // 'teigur' start with a single 'teig' syllable; the patterns do not line up
    if short.word == "tei" {
        return;
    }
    if short.syllable_count() > long.syllables().len() {
        log::warn!(
            "{:?} has fewer syllables ({}) than its prefix {:?} ({}), syncing what fits",
            long.word(),
            long.syllables().len(),
            short.word,
            short.syllable_count()
        );
    }
    for (syll, stress) in long
        .syllables_mut()
        .iter_mut()
        .zip(short.stresses.iter().copied())
    {
        syll.assign_stress(stress);
    }
}

/// Put primary stress on the first syllable after the syllables shared with
/// `modifier`, if plausible: the current word must have more syllables, the
/// modifier's last syllable must not carry primary stress itself, and the
/// current word must not simply be the modifier with a grammatical ending.
fn add_head_stress(modifier: &Labeled, current: &mut PronEntry) {
    if current.syllables().len() > modifier.syllable_count()
        && modifier.last_stress() != Stress::Primary
        && !is_inflected_form(&modifier.word, current.word())
    {
        current.syllables_mut()[modifier.syllable_count()].assign_stress(Stress::Primary);
    }
}

/// Whether `long` is `short` with a grammatical ending attached.
fn is_inflected_form(short: &str, long: &str) -> bool {
    let ending = long[short.len()..].trim();
    ENDING_SYLLABLES.contains(&ending)
}
