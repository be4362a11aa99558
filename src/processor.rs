//! The high-level annotation pipeline.
//!
//! A [`Processor`] owns the lexical tables and the phone inventory and runs
//! the full sequence on demand: compound segmentation, per-component
//! syllabification and stress labeling. It is stateless between calls and
//! can be shared by reference across threads.

use std::path::Path;

use derive_builder::Builder;

use crate::compound;
use crate::entry::PronEntry;
use crate::format::{self, Format};
use crate::lexicon::{self, LexicalTables, LexiconError};
use crate::phones::{Alphabet, PhoneInventory};
use crate::stress;
use crate::syllabify;

/// Configuration for a [`Processor`].
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), default)]
pub struct ProcessorOptions {
    /// Phonetic alphabet the transcriptions are written in.
    pub alphabet: Alphabet,
    /// Separator placed between syllables in rendered output.
    pub separator: String,
    /// Separator placed between words when rendering an utterance. Empty
    /// means plain spaces.
    pub word_separator: String,
    /// Rendering used by [`Processor::render`].
    pub format: Format,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Sampa,
            separator: ".".to_string(),
            word_separator: String::new(),
            format: Format::Syllables,
        }
    }
}

/// Runs segmentation, syllabification and stress labeling as one pipeline.
#[derive(Debug, Clone)]
pub struct Processor {
    tables: LexicalTables,
    inventory: PhoneInventory,
    options: ProcessorOptions,
}

impl Processor {
    /// Build a processor around already loaded tables, with the built-in
    /// phone inventory for the configured alphabet.
    pub fn new(tables: LexicalTables, options: ProcessorOptions) -> Self {
        let inventory = PhoneInventory::builtin(options.alphabet);
        Self {
            tables,
            inventory,
            options,
        }
    }

    /// Load the lexical tables (and an optional phone-set override) from a
    /// directory and build a processor on top of them.
    pub fn from_dir(dir: &Path, options: ProcessorOptions) -> Result<Self, LexiconError> {
        let tables = LexicalTables::from_dir(dir)?;
        let inventory = PhoneInventory::load_or_builtin(dir, options.alphabet)?;
        Ok(Self {
            tables,
            inventory,
            options,
        })
    }

    pub fn tables(&self) -> &LexicalTables {
        &self.tables
    }

    pub fn inventory(&self) -> &PhoneInventory {
        &self.inventory
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Annotate a single word: segment, syllabify and label stress.
    pub fn annotate_word(&self, word: &str, transcript: &str) -> PronEntry {
        let mut entry = self.structure(word, transcript);
        stress::label_stress(std::slice::from_mut(&mut entry));
        entry
    }

    /// Annotate a sequence of word and transcript pairs.
    ///
    /// Entries are returned in input order. Stress labeling reuses prefixes
    /// across the whole batch, so feeding an alphabetically sorted
    /// dictionary maximizes reuse; see [`stress::sort_for_stress`].
    pub fn annotate_batch<'a, I>(&self, pairs: I) -> Vec<PronEntry>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries: Vec<PronEntry> = pairs
            .into_iter()
            .map(|(word, transcript)| self.structure(word, transcript))
            .collect();
        stress::label_stress(&mut entries);
        entries
    }

    /// Annotate parallel word and transcript lists, pairing them by index.
    pub fn annotate_lists(&self, words: &[&str], transcripts: &[&str]) -> Vec<PronEntry> {
        if words.len() != transcripts.len() {
            log::warn!(
                "word/transcript count mismatch: {} words, {} transcripts; extra items are ignored",
                words.len(),
                transcripts.len()
            );
        }
        self.annotate_batch(words.iter().copied().zip(transcripts.iter().copied()))
    }

    /// Annotate every entry of a `word<TAB>transcript` dictionary file, in
    /// file order.
    pub fn process_dict_file(&self, path: &Path) -> Result<Vec<PronEntry>, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut pairs = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            pairs.push(lexicon::split_dict_row(path, idx + 1, line)?);
        }
        log::info!("Annotating {} entries from {}", pairs.len(), path.display());
        Ok(self.annotate_batch(pairs))
    }

    /// Render one annotated entry according to the configured format and
    /// separator.
    pub fn render(&self, entry: &PronEntry) -> String {
        format::render(
            entry,
            self.options.format,
            &self.inventory,
            &self.options.separator,
        )
    }

    /// Render a sequence of annotated entries as one utterance, joined by
    /// the configured word separator.
    pub fn render_utterance(&self, entries: &[PronEntry]) -> String {
        let rendered: Vec<String> = entries.iter().map(|e| self.render(e)).collect();
        if self.options.word_separator.is_empty() {
            rendered.join(" ")
        } else {
            rendered.join(&format!(" {} ", self.options.word_separator))
        }
    }

    fn structure(&self, word: &str, transcript: &str) -> PronEntry {
        let entry = PronEntry::new(word, transcript);
        let tree = compound::segment(entry, &self.tables, &self.inventory);
        syllabify::syllabify_tree(tree, &self.inventory)
    }
}
