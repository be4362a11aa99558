//! Syllabification of aligned transcriptions.
//!
//! Icelandic syllable structure follows the onset-rhyme model: whenever
//! possible, a syllable claims an onset consonant. Syllabification runs in
//! three passes over the phone sequence:
//!
//! 1. divide the word so that every syllable after the first starts with a
//!    vowel: `a v p r I G D I` becomes `avpr.IGD.I`
//! 2. mark consonant clusters that must not be split: `av(pr).IGD.I`
//! 3. move consonants to the onset of the following syllable, clusters as a
//!    whole and single consonants otherwise: `af.prIG.DI`
//!
//! The passes give correct results for simple words but can produce errors
//! when applied to compounds, so compound segmentation must run first;
//! [`syllabify_tree`] handles each component separately and component
//! boundaries always remain syllable boundaries.

use crate::compound::CompoundTree;
use crate::entry::PronEntry;
use crate::phones::PhoneInventory;
use crate::syllable::Syllable;

// 'é' is transcribed as 'j' followed by an open e. The two phones act as a
// single vowel and must not end up in different syllables. 'j' is written
// alike in X-SAMPA and IPA, the open e differs.
const OPEN_E_SAMPA: char = 'E';
const OPEN_E_IPA: char = 'ɛ';
const CONS_J: &str = "j";

/// Syllabify one entry in place.
///
/// The entry's transcription is split into syllables; any previous
/// syllable structure is replaced.
pub fn syllabify_entry(entry: &mut PronEntry, inventory: &PhoneInventory) {
    let mut syllables = split_on_nuclei(entry, inventory);
    identify_clusters(&mut syllables, inventory);
    maximize_onsets(&mut syllables, inventory);
    *entry.syllables_mut() = syllables;
}

/// Syllabify every leaf of a compound tree and assemble the result on the
/// root entry.
///
/// Each component is syllabified on its own and the leaf syllables are
/// concatenated in surface order, so syllable boundaries never cross
/// component boundaries. The root entry also receives the component words
/// as its compound elements.
pub fn syllabify_tree(mut tree: CompoundTree, inventory: &PhoneInventory) -> PronEntry {
    let mut syllables = Vec::new();
    let mut elements = Vec::new();
    syllabify_leaves(&mut tree, inventory, &mut syllables, &mut elements);
    let mut root = tree.into_entry();
    *root.syllables_mut() = syllables;
    root.set_compound_elements(elements);
    root
}

fn syllabify_leaves(
    tree: &mut CompoundTree,
    inventory: &PhoneInventory,
    syllables: &mut Vec<Syllable>,
    elements: &mut Vec<String>,
) {
    if tree.is_leaf() {
        syllabify_entry(tree.entry_mut(), inventory);
        syllables.extend_from_slice(tree.entry().syllables());
        elements.push(tree.entry().word().to_string());
    }
    if let Some(left) = tree.left_mut() {
        syllabify_leaves(left, inventory, syllables, elements);
    }
    if let Some(right) = tree.right_mut() {
        syllabify_leaves(right, inventory, syllables, elements);
    }
}

/// First pass. Divide the phones so that each syllable starts with a vowel,
/// except the first one if the word starts with consonants.
fn split_on_nuclei(entry: &PronEntry, inventory: &PhoneInventory) -> Vec<Syllable> {
    let mut syllables = Vec::new();
    let mut current = Syllable::new();
    for phone in entry.phones() {
        if current.has_nucleus() && inventory.is_vowel(phone) {
            syllables.push(std::mem::take(&mut current));
        }
        if inventory.is_vowel(phone) {
            current.mark_nucleus();
        }
        current.append(phone);
    }
    if !current.is_empty() {
        syllables.push(current);
    }
    syllables
}

/// Second pass. Mark syllables whose tail is an onset cluster. The cluster
/// table is ordered by ascending precedence, so the last match wins.
fn identify_clusters(syllables: &mut [Syllable], inventory: &PhoneInventory) {
    for syll in syllables.iter_mut() {
        for cluster in inventory.onset_clusters() {
            if ends_with_cluster(syll, cluster) {
                syll.set_cluster(cluster);
            }
        }
    }
}

fn ends_with_cluster(syll: &Syllable, cluster: &str) -> bool {
    let cluster_len = cluster.split_whitespace().count();
    let phones = syll.phones();
    phones.len() >= cluster_len
        && phones[phones.len() - cluster_len..]
            .iter()
            .map(String::as_str)
            .eq(cluster.split_whitespace())
}

/// Third pass. Move consonants from rhyme to onset where appropriate, i.e.
/// where one syllable ends with a consonant and the next one starts with a
/// vowel. A marked cluster moves as a whole, otherwise only the last
/// consonant moves.
fn maximize_onsets(syllables: &mut [Syllable], inventory: &PhoneInventory) {
    for ind in 1..syllables.len() {
        let (before, after) = syllables.split_at_mut(ind);
        let prev = &mut before[ind - 1];
        let curr = &mut after[0];

        let starts_with_vowel = curr
            .first_phone()
            .is_some_and(|p| inventory.is_vowel_initial(p));
        if !starts_with_vowel {
            continue;
        }

        if let Some(cluster) = prev.onset_cluster().map(str::to_string) {
            let count = cluster.split_whitespace().count();
            let moved = prev.take_tail(count);
            curr.prepend(moved);
            prev.clear_cluster();
        } else if prev.last_phone().is_some_and(|p| !inventory.is_vowel(p)) {
            let count = onset_width(prev, curr, inventory);
            let moved = prev.take_tail(count);
            curr.prepend(moved);
        }
    }
}

/// How many phones to pull from the previous syllable's tail. Normally one,
/// but a 'j' in front of an open e belongs to that vowel ('é'), so the
/// consonant before the 'j' comes along as the onset, provided one exists
/// and is not itself the nucleus.
fn onset_width(prev: &Syllable, curr: &Syllable, inventory: &PhoneInventory) -> usize {
    let ends_with_j = prev.last_phone() == Some(CONS_J);
    let open_e_next = curr
        .first_phone()
        .is_some_and(|p| p.starts_with(OPEN_E_SAMPA) || p.starts_with(OPEN_E_IPA));
    if ends_with_j && open_e_next {
        let phones = prev.phones();
        if phones.len() >= 2 && !inventory.is_vowel(&phones[phones.len() - 2]) {
            return 2;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound;
    use crate::lexicon::LexicalTables;

    fn syllabified(transcript: &str) -> Vec<String> {
        let inv = PhoneInventory::default();
        let mut entry = PronEntry::new("w", transcript);
        syllabify_entry(&mut entry, &inv);
        entry.syllables().iter().map(|s| s.content()).collect()
    }

    #[test]
    fn moves_a_cluster_to_the_next_onset() {
        // afbrigði: af.prIG.DI
        assert_eq!(syllabified("a v p r I G D I"), vec!["a v", "p r I G", "D I"]);
    }

    #[test]
    fn moves_a_single_consonant_to_the_next_onset() {
        // ferðast: fEr.Dast
        assert_eq!(syllabified("f E r D a s t"), vec!["f E r", "D a s t"]);
    }

    #[test]
    fn fr_cluster_moves_as_a_whole() {
        assert_eq!(syllabified("k a f r ou"), vec!["k a", "f r ou"]);
    }

    #[test]
    fn vowel_final_syllable_gives_nothing_away() {
        assert_eq!(syllabified("k ou a"), vec!["k ou", "a"]);
    }

    #[test]
    fn j_before_open_e_takes_its_onset_consonant_along() {
        assert_eq!(syllabified("a v j E"), vec!["a", "v j E"]);
    }

    #[test]
    fn j_after_a_vowel_moves_alone() {
        assert_eq!(syllabified("a j E"), vec!["a", "j E"]);
    }

    #[test]
    fn j_before_other_vowels_moves_alone() {
        // belja: pEl.ja
        assert_eq!(syllabified("p E l j a"), vec!["p E l", "j a"]);
    }

    #[test]
    fn single_syllable_words_stay_whole() {
        assert_eq!(syllabified("t a: G"), vec!["t a: G"]);
        assert_eq!(syllabified("s t r"), vec!["s t r"]);
    }

    #[test]
    fn empty_transcription_yields_no_syllables() {
        assert_eq!(syllabified(""), Vec::<String>::new());
    }

    #[test]
    fn every_phone_is_preserved_in_order() {
        for transcript in ["a v p r I G D I", "f E r D a s t", "f 9: D Y r a: v I"] {
            let sylls = syllabified(transcript);
            assert_eq!(sylls.join(" "), transcript);
        }
    }

    #[test]
    fn resyllabifying_the_flattened_form_is_stable() {
        let flattened = syllabified("a v p r I G D I").join(" ");
        assert_eq!(syllabified(&flattened), syllabified("a v p r I G D I"));
    }

    #[test]
    fn compound_segmentation_keeps_component_boundaries() {
        let inv = PhoneInventory::default();
        let tables = LexicalTables::new(
            ["afi"],
            ["föður"],
            [
                ("afi".to_string(), "a: v I".to_string()),
                ("föður".to_string(), "f 9: D Y r".to_string()),
            ],
        );

        // without decompounding, the 'r' of föður is pulled across the
        // component boundary into the onset of 'a:'
        assert_eq!(
            syllabified("f 9: D Y r a: v I"),
            vec!["f 9:", "D Y", "r a:", "v I"]
        );

        let tree = compound::segment(
            PronEntry::new("föðurafi", "f 9: D Y r a: v I"),
            &tables,
            &inv,
        );
        let entry = syllabify_tree(tree, &inv);
        let sylls: Vec<String> = entry.syllables().iter().map(|s| s.content()).collect();
        assert_eq!(sylls, vec!["f 9:", "D Y r", "a:", "v I"]);
        assert_eq!(entry.compound_elements(), ["föður", "afi"]);
        assert_eq!(entry.word(), "föðurafi");
    }

    #[test]
    fn non_compound_tree_lists_its_own_word() {
        let inv = PhoneInventory::default();
        let tables = LexicalTables::default();
        let tree = compound::segment(PronEntry::new("föður", "f 9: D Y r"), &tables, &inv);
        let entry = syllabify_tree(tree, &inv);
        assert_eq!(entry.compound_elements(), ["föður"]);
        let sylls: Vec<String> = entry.syllables().iter().map(|s| s.content()).collect();
        assert_eq!(sylls, vec!["f 9:", "D Y r"]);
    }
}
