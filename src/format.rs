//! Output rendering for annotated entries.

use crate::entry::PronEntry;
use crate::phones::PhoneInventory;

/// The supported output renderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Syllables joined by a separator: `f E r . D a s t`
    #[default]
    Syllables,
    /// Syllables with stress labels on the vowels: `f E1 r . D a0 s t`
    Stress,
    /// Festival-style CMU s-expression: `("ferðast" nil (((f E r) 1) ((D a s t) 0)))`
    Cmu,
}

/// Render an entry in the requested format.
pub fn render(
    entry: &PronEntry,
    format: Format,
    inventory: &PhoneInventory,
    separator: &str,
) -> String {
    match format {
        Format::Syllables => dot_syllables(entry, separator),
        Format::Stress => stress_marked(entry, inventory, separator),
        Format::Cmu => cmu(entry),
    }
}

/// The syllables of an entry joined by `separator`. An empty separator
/// joins the syllables with plain spaces.
pub fn dot_syllables(entry: &PronEntry, separator: &str) -> String {
    let contents: Vec<String> = entry.syllables().iter().map(|s| s.content()).collect();
    contents.join(&join_string(separator))
}

/// Like [`dot_syllables`], with the stress label appended to every vowel:
/// `f E1 r . D a0 s t`.
pub fn stress_marked(entry: &PronEntry, inventory: &PhoneInventory, separator: &str) -> String {
    let mut syllables = Vec::with_capacity(entry.syllables().len());
    for syll in entry.syllables() {
        let marked: Vec<String> = syll
            .phones()
            .iter()
            .map(|p| {
                if inventory.is_vowel(p) {
                    format!("{p}{}", syll.stress().label())
                } else {
                    p.clone()
                }
            })
            .collect();
        syllables.push(marked.join(" "));
    }
    syllables.join(&join_string(separator))
}

/// A dictionary line pairing the word with its syllables:
/// `ferðast - f E r . D a s t`.
pub fn word_line(entry: &PronEntry, separator: &str) -> String {
    format!("{} - {}", entry.word(), dot_syllables(entry, separator))
}

/// The CMU dictionary s-expression used by Festival voices. The part of
/// speech is not tracked and is rendered as `nil`.
pub fn cmu(entry: &PronEntry) -> String {
    let syllables: Vec<String> = entry
        .syllables()
        .iter()
        .map(|s| format!("(({}) {})", s.content(), s.stress().label()))
        .collect();
    format!("(\"{}\" nil ({}))", entry.word(), syllables.join(" "))
}

fn join_string(separator: &str) -> String {
    if separator.is_empty() {
        " ".to_string()
    } else {
        format!(" {separator} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phones::PhoneInventory;
    use crate::stress::label_stress;
    use crate::syllabify::syllabify_entry;

    fn labeled_entry(word: &str, transcript: &str) -> PronEntry {
        let inv = PhoneInventory::default();
        let mut entry = PronEntry::new(word, transcript);
        syllabify_entry(&mut entry, &inv);
        let mut entries = vec![entry];
        label_stress(&mut entries);
        entries.pop().unwrap()
    }

    #[test]
    fn joins_syllables_with_the_separator() {
        let entry = labeled_entry("ferðast", "f E r D a s t");
        assert_eq!(dot_syllables(&entry, "."), "f E r . D a s t");
        assert_eq!(dot_syllables(&entry, "-"), "f E r - D a s t");
    }

    #[test]
    fn empty_separator_joins_with_plain_spaces() {
        let entry = labeled_entry("ferðast", "f E r D a s t");
        assert_eq!(dot_syllables(&entry, ""), "f E r D a s t");
    }

    #[test]
    fn stress_labels_attach_to_vowels_only() {
        let inv = PhoneInventory::default();
        let entry = labeled_entry("ferðast", "f E r D a s t");
        assert_eq!(stress_marked(&entry, &inv, "."), "f E1 r . D a0 s t");
    }

    #[test]
    fn long_vowels_carry_the_label_too() {
        let inv = PhoneInventory::default();
        let entry = labeled_entry("afi", "a: v I");
        assert_eq!(stress_marked(&entry, &inv, "."), "a:1 . v I0");
    }

    #[test]
    fn word_line_pairs_word_and_syllables() {
        let entry = labeled_entry("ferðast", "f E r D a s t");
        assert_eq!(word_line(&entry, "."), "ferðast - f E r . D a s t");
    }

    #[test]
    fn cmu_wraps_each_syllable_with_its_stress() {
        let entry = labeled_entry("ferðast", "f E r D a s t");
        assert_eq!(cmu(&entry), "(\"ferðast\" nil (((f E r) 1) ((D a s t) 0)))");
    }

    #[test]
    fn render_dispatches_on_format() {
        let inv = PhoneInventory::default();
        let entry = labeled_entry("afi", "a: v I");
        assert_eq!(render(&entry, Format::Syllables, &inv, "."), "a: . v I");
        assert_eq!(render(&entry, Format::Stress, &inv, "."), "a:1 . v I0");
        assert!(render(&entry, Format::Cmu, &inv, ".").starts_with("(\"afi\""));
    }

    #[test]
    fn entry_without_syllables_renders_empty() {
        let inv = PhoneInventory::default();
        let entry = PronEntry::new("x", "");
        assert_eq!(render(&entry, Format::Syllables, &inv, "."), "");
    }
}
