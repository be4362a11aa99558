//! Compound segmentation.
//!
//! Icelandic builds long compounds from a modifier and a head, both of which
//! may themselves be compounds. Splitting a word into its components before
//! syllabification keeps syllable boundaries from crossing component
//! boundaries, and the component structure later drives stress assignment.
//! The split decisions are purely table-driven; no morphology is computed.

use crate::entry::PronEntry;
use crate::lexicon::{LexicalTables, PhoneLookup};
use crate::phones::PhoneInventory;

// Vowel characters of Icelandic orthography, used to sanity-check a
// modifier candidate: a word part without a written vowel is not a word.
const WRITTEN_VOWELS: &[char] = &[
    'a', 'á', 'e', 'é', 'i', 'í', 'o', 'ó', 'u', 'ú', 'y', 'ý', 'ö',
];

/// Words of this many characters or fewer are never split.
const MIN_COMPOUND_LEN: usize = 4;
/// The character position from which to start searching for a head word.
const MIN_HEAD_POS: usize = 2;

/// A binary decomposition of one entry.
///
/// Every node holds an entry; an internal node additionally holds the
/// decomposition of that entry's word into a modifier (left) and a head
/// (right). Leaves are the components that could not be split further, and
/// reading them left to right restores the surface word.
#[derive(Debug, Clone)]
pub struct CompoundTree {
    entry: PronEntry,
    left: Option<Box<CompoundTree>>,
    right: Option<Box<CompoundTree>>,
}

impl CompoundTree {
    /// A tree consisting of a single unsplit entry.
    pub fn leaf(entry: PronEntry) -> Self {
        Self {
            entry,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The entry at this node. At the root that is the full word.
    pub fn entry(&self) -> &PronEntry {
        &self.entry
    }

    pub(crate) fn entry_mut(&mut self) -> &mut PronEntry {
        &mut self.entry
    }

    /// The modifier subtree, if this node was split.
    pub fn left(&self) -> Option<&CompoundTree> {
        self.left.as_deref()
    }

    /// The head subtree, if this node was split.
    pub fn right(&self) -> Option<&CompoundTree> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut CompoundTree> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut CompoundTree> {
        self.right.as_deref_mut()
    }

    /// Consume the tree, returning the root entry.
    pub fn into_entry(self) -> PronEntry {
        self.entry
    }

    /// The leaf entries in surface order.
    pub fn leaf_entries(&self) -> Vec<&PronEntry> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a PronEntry>) {
        if self.is_leaf() {
            leaves.push(&self.entry);
        }
        if let Some(left) = &self.left {
            left.collect_leaves(leaves);
        }
        if let Some(right) = &self.right {
            right.collect_leaves(leaves);
        }
    }
}

/// Decompose an entry into a binary compound tree.
///
/// As long as components can be extracted, the word and its transcription
/// are split recursively. A word split is only accepted if the head's
/// dictionary transcription can be aligned with a suffix of the entry's
/// transcription; otherwise the node stays a leaf, so every leaf carries a
/// consistent word and transcript pair.
pub fn segment(
    entry: PronEntry,
    tables: &LexicalTables,
    inventory: &PhoneInventory,
) -> CompoundTree {
    let mut tree = CompoundTree::leaf(entry);
    expand(&mut tree, tables, inventory);
    tree
}

/// Decompose a word without transcript information.
///
/// Returns the component words in surface order, or a single-element list
/// containing `word` itself if no decomposition can be performed.
pub fn compound_parts(word: &str, tables: &LexicalTables) -> Vec<String> {
    let mut tree = CompoundTree::leaf(PronEntry::new(word, ""));
    expand_words_only(&mut tree, tables);
    tree.leaf_entries()
        .into_iter()
        .map(|e| e.word().to_string())
        .collect()
}

fn expand(tree: &mut CompoundTree, tables: &LexicalTables, inventory: &PhoneInventory) {
    let Some((modifier, head)) = find_split(tree.entry.word(), tables) else {
        return;
    };
    let (modifier, head) = (modifier.to_string(), head.to_string());
    let Some(split) = align_head_transcript(tree.entry.transcript(), &head, tables, inventory)
    else {
        log::debug!(
            "no transcript alignment for head {:?} of {:?}, keeping whole",
            head,
            tree.entry.word()
        );
        return;
    };
    let phones: Vec<&str> = tree.entry.phones().collect();
    let modifier_transcript = phones[..split].join(" ");
    let head_transcript = phones[split..].join(" ");
    tree.left = Some(Box::new(CompoundTree::leaf(PronEntry::new(
        &modifier,
        &modifier_transcript,
    ))));
    tree.right = Some(Box::new(CompoundTree::leaf(PronEntry::new(
        &head,
        &head_transcript,
    ))));
    if let Some(left) = tree.left.as_deref_mut() {
        expand(left, tables, inventory);
    }
    if let Some(right) = tree.right.as_deref_mut() {
        expand(right, tables, inventory);
    }
}

fn expand_words_only(tree: &mut CompoundTree, tables: &LexicalTables) {
    let Some((modifier, head)) = find_split(tree.entry.word(), tables) else {
        return;
    };
    let (modifier, head) = (modifier.to_string(), head.to_string());
    tree.left = Some(Box::new(CompoundTree::leaf(PronEntry::new(&modifier, ""))));
    tree.right = Some(Box::new(CompoundTree::leaf(PronEntry::new(&head, ""))));
    if let Some(left) = tree.left.as_deref_mut() {
        expand_words_only(left, tables);
    }
    if let Some(right) = tree.right.as_deref_mut() {
        expand_words_only(right, tables);
    }
}

/// Find the best modifier/head division of `word` against the tables.
///
/// The rule of thumb is that the longest possible head word shows the
/// correct division: candidate heads are scanned from the longest suffix
/// down, and the first whose remaining prefix is a known modifier wins. If
/// no head pairs up with a known modifier, the longest known head is taken
/// on its own, assuming the prefix in front of it is a valid modifier even
/// though the tables do not list it. That assumption is only accepted if
/// the prefix contains a written vowel.
fn find_split<'a>(word: &'a str, tables: &LexicalTables) -> Option<(&'a str, &'a str)> {
    let char_count = word.chars().count();
    if char_count <= MIN_COMPOUND_LEN {
        return None;
    }

    let mut longest_head_start: Option<usize> = None;
    for (pos, (byte, _)) in word.char_indices().enumerate() {
        if pos < MIN_HEAD_POS {
            continue;
        }
        if pos >= char_count - 2 {
            break;
        }
        let head = &word[byte..];
        if tables.is_head(head) {
            if tables.is_modifier(&word[..byte]) {
                return Some((&word[..byte], head));
            }
            if longest_head_start.is_none() {
                longest_head_start = Some(byte);
            }
        }
    }

    let byte = longest_head_start?;
    let modifier = &word[..byte];
    if !contains_written_vowel(modifier) {
        return None;
    }
    Some((modifier, &word[byte..]))
}

/// Locate the head's transcription at the tail of the full transcription,
/// returning the phone index where the head starts.
///
/// Transcriptions of a word in isolation and inside a compound do not always
/// match exactly, so the match is somewhat flexible: a length mark,
/// voicelessness or post-aspiration difference does not cause it to fail
/// (`a:` == `a`, `r_0` == `r`, `t_h` == `t`). The match must leave at least
/// one phone for the modifier.
fn align_head_transcript(
    transcript: &str,
    head: &str,
    tables: &LexicalTables,
    inventory: &PhoneInventory,
) -> Option<usize> {
    let head_transcript = tables.lookup(head)?;
    let phones: Vec<&str> = transcript.split_whitespace().collect();
    let head_phones: Vec<&str> = head_transcript.split_whitespace().collect();
    if phones.is_empty() || head_phones.is_empty() {
        return None;
    }

    if phones.len() > head_phones.len()
        && phones[phones.len() - head_phones.len()..] == head_phones[..]
    {
        return Some(phones.len() - head_phones.len());
    }

    let mut pi = phones.len();
    for head_phone in head_phones.iter().rev() {
        if pi == 0 {
            return None;
        }
        let phone = phones[pi - 1];
        if phone != *head_phone
            && inventory.base_phone(phone) != inventory.base_phone(head_phone)
        {
            return None;
        }
        pi -= 1;
    }
    if pi == 0 {
        None
    } else {
        Some(pi)
    }
}

fn contains_written_vowel(word: &str) -> bool {
    word.chars().any(|c| WRITTEN_VOWELS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexicalTables;
    use crate::phones::PhoneInventory;

    fn family_tables() -> LexicalTables {
        LexicalTables::new(
            ["afi"],
            ["föður"],
            [
                ("afi".to_string(), "a: v I".to_string()),
                ("föður".to_string(), "f 9: D Y r".to_string()),
            ],
        )
    }

    fn segment_words(word: &str, transcript: &str, tables: &LexicalTables) -> Vec<String> {
        let inv = PhoneInventory::default();
        let tree = segment(PronEntry::new(word, transcript), tables, &inv);
        tree.leaf_entries()
            .into_iter()
            .map(|e| e.word().to_string())
            .collect()
    }

    #[test]
    fn splits_a_two_part_compound_with_transcripts() {
        let tables = family_tables();
        let inv = PhoneInventory::default();
        let entry = PronEntry::new("föðurafi", "f 9: D Y r a: v I");
        let tree = segment(entry, &tables, &inv);

        assert!(!tree.is_leaf());
        let leaves = tree.leaf_entries();
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].word(), "föður");
        assert_eq!(leaves[0].transcript(), "f 9: D Y r");
        assert_eq!(leaves[1].word(), "afi");
        assert_eq!(leaves[1].transcript(), "a: v I");
        assert_eq!(tree.entry().word(), "föðurafi");
    }

    #[test]
    fn leaf_transcripts_reassemble_the_original() {
        let tables = family_tables();
        let inv = PhoneInventory::default();
        let entry = PronEntry::new("föðurafi", "f 9: D Y r a: v I");
        let tree = segment(entry, &tables, &inv);

        let rebuilt: Vec<String> = tree
            .leaf_entries()
            .iter()
            .map(|e| e.transcript().to_string())
            .collect();
        assert_eq!(rebuilt.join(" "), "f 9: D Y r a: v I");
        let words: Vec<&str> = tree.leaf_entries().iter().map(|e| e.word()).collect();
        assert_eq!(words.concat(), "föðurafi");
    }

    #[test]
    fn decomposes_a_nested_compound_word() {
        let tables = LexicalTables::new(
            ["tónlistarkennsla", "listarkennsla", "kennsla"],
            ["djass", "tón", "listar"],
            [],
        );
        assert_eq!(
            compound_parts("djasstónlistarkennsla", &tables),
            vec!["djass", "tón", "listar", "kennsla"]
        );
    }

    #[test]
    fn non_compound_word_stays_whole() {
        let tables = family_tables();
        assert_eq!(compound_parts("föður", &tables), vec!["föður"]);
    }

    #[test]
    fn short_words_are_never_split() {
        let tables = LexicalTables::new(["fi"], ["af"], []);
        assert_eq!(compound_parts("affi", &tables), vec!["affi"]);
    }

    #[test]
    fn longest_head_wins_when_several_pairings_exist() {
        let tables = LexicalTables::new(["abbb", "bbb"], ["aa", "aaa"], []);
        assert_eq!(compound_parts("aaabbb", &tables), vec!["aa", "abbb"]);
    }

    #[test]
    fn unlisted_modifier_is_assumed_for_the_longest_head() {
        let tables = LexicalTables::new(["afi"], [] as [&str; 0], []);
        assert_eq!(compound_parts("föðurafi", &tables), vec!["föður", "afi"]);
    }

    #[test]
    fn assumed_modifier_must_contain_a_written_vowel() {
        let tables = LexicalTables::new(["llafi"], [] as [&str; 0], []);
        assert_eq!(compound_parts("bfllafi", &tables), vec!["bfllafi"]);
    }

    #[test]
    fn assumed_modifier_ends_where_the_found_head_starts() {
        // the head string also occurs at the beginning of the word; the
        // recorded head position must be used, not the first occurrence
        let tables = LexicalTables::new(["lista"], [] as [&str; 0], []);
        assert_eq!(compound_parts("listalista", &tables), vec!["lista", "lista"]);
    }

    #[test]
    fn alignment_tolerates_length_marks() {
        let tables = LexicalTables::new(
            ["afi"],
            ["föður"],
            [("afi".to_string(), "a v I".to_string())],
        );
        // the compound carries "a:" where the dictionary has "a"
        let parts = segment_words("föðurafi", "f 9: D Y r a: v I", &tables);
        assert_eq!(parts, vec!["föður", "afi"]);
    }

    #[test]
    fn alignment_tolerates_aspiration_markers() {
        let tables = LexicalTables::new(
            ["tak"],
            [] as [&str; 0],
            [("tak".to_string(), "t a k".to_string())],
        );
        let inv = PhoneInventory::default();
        let tree = segment(PronEntry::new("xatak", "x a t_h a k"), &tables, &inv);
        let leaves = tree.leaf_entries();
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].transcript(), "x a");
        assert_eq!(leaves[1].transcript(), "t_h a k");
    }

    #[test]
    fn mismatched_head_transcript_keeps_the_entry_whole() {
        let tables = LexicalTables::new(
            ["afi"],
            ["föður"],
            [("afi".to_string(), "ou k a".to_string())],
        );
        let parts = segment_words("föðurafi", "f 9: D Y r a: v I", &tables);
        assert_eq!(parts, vec!["föðurafi"]);
    }

    #[test]
    fn missing_dictionary_transcript_keeps_the_entry_whole() {
        let tables = LexicalTables::new(["afi"], ["föður"], []);
        let parts = segment_words("föðurafi", "f 9: D Y r a: v I", &tables);
        assert_eq!(parts, vec!["föðurafi"]);
    }

    #[test]
    fn head_may_not_cover_the_whole_transcript() {
        let tables = LexicalTables::new(
            ["tak"],
            [] as [&str; 0],
            [("tak".to_string(), "t a k".to_string())],
        );
        let parts = segment_words("xatak", "t a k", &tables);
        assert_eq!(parts, vec!["xatak"]);
    }

    #[test]
    fn in_token_match_does_not_count_as_alignment() {
        // "a v I" appears character-wise inside "k a v Il" but not as a
        // token suffix; the entry must stay whole
        let tables = LexicalTables::new(
            ["afi"],
            ["föður"],
            [("afi".to_string(), "a v I".to_string())],
        );
        let parts = segment_words("föðurafi", "f 9: a v Il", &tables);
        assert_eq!(parts, vec!["föðurafi"]);
    }
}
