//! Lexical tables: head words, modifier words and the pronunciation
//! dictionary, loaded from tab-separated resources.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the pronunciation dictionary inside a tables directory.
pub const PRON_DICT_FILE: &str = "pron_dict.tsv";
/// File name of the head-word table inside a tables directory.
pub const HEAD_WORDS_FILE: &str = "head_words.tsv";
/// File name of the modifier-word table inside a tables directory.
pub const MODIFIER_WORDS_FILE: &str = "modifier_words.tsv";

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: malformed row {content:?} (expected word<TAB>transcript)", path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("invalid phone set: {0}")]
    PhoneSet(String),
}

/// Access to known transcriptions by word.
///
/// The compound segmenter only ever asks one question of the dictionary, so
/// it is expressed as a trait; any map-like store can back it.
pub trait PhoneLookup {
    /// The known transcription of `word`, if any.
    fn lookup(&self, word: &str) -> Option<&str>;
}

impl PhoneLookup for HashMap<String, String> {
    fn lookup(&self, word: &str) -> Option<&str> {
        self.get(word).map(String::as_str)
    }
}

/// The three lexical tables driving compound segmentation.
///
/// Immutable once loaded; shared by reference across any number of worker
/// threads.
#[derive(Debug, Clone, Default)]
pub struct LexicalTables {
    heads: HashSet<String>,
    modifiers: HashSet<String>,
    dictionary: HashMap<String, String>,
}

impl LexicalTables {
    /// Build tables from in-memory collections.
    pub fn new<H, M, D>(heads: H, modifiers: M, dictionary: D) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
        D: IntoIterator<Item = (String, String)>,
    {
        Self {
            heads: heads.into_iter().map(Into::into).collect(),
            modifiers: modifiers.into_iter().map(Into::into).collect(),
            dictionary: dictionary.into_iter().collect(),
        }
    }

    /// Load all three tables from a directory containing
    /// [`HEAD_WORDS_FILE`], [`MODIFIER_WORDS_FILE`] and [`PRON_DICT_FILE`].
    pub fn from_dir(dir: &Path) -> Result<Self, LexiconError> {
        let heads = read_word_set(&dir.join(HEAD_WORDS_FILE))?;
        let modifiers = read_word_set(&dir.join(MODIFIER_WORDS_FILE))?;
        let dictionary = read_dictionary(&dir.join(PRON_DICT_FILE))?;
        log::info!(
            "Loaded lexical tables from {}: {} heads, {} modifiers, {} dictionary entries",
            dir.display(),
            heads.len(),
            modifiers.len(),
            dictionary.len()
        );
        Ok(Self {
            heads,
            modifiers,
            dictionary,
        })
    }

    /// Whether `word` is a known compound head.
    pub fn is_head(&self, word: &str) -> bool {
        self.heads.contains(word)
    }

    /// Whether `word` is a known compound modifier.
    pub fn is_modifier(&self, word: &str) -> bool {
        self.modifiers.contains(word)
    }

    pub fn head_count(&self) -> usize {
        self.heads.len()
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    pub fn entry_count(&self) -> usize {
        self.dictionary.len()
    }
}

impl PhoneLookup for LexicalTables {
    fn lookup(&self, word: &str) -> Option<&str> {
        self.dictionary.lookup(word)
    }
}

/// Read the first tab column of every non-blank line into a set. Extra
/// columns (frequency counts and the like) are tolerated and ignored.
fn read_word_set(path: &Path) -> Result<HashSet<String>, LexiconError> {
    let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut words = HashSet::new();
    for line in content.lines() {
        let word = line.split('\t').next().unwrap_or("").trim();
        if !word.is_empty() {
            words.insert(word.to_string());
        }
    }
    Ok(words)
}

/// Read a `word<TAB>transcript` dictionary file. Rows with any other shape
/// fail the load with the offending line identified; a later row for the
/// same word replaces the earlier one.
fn read_dictionary(path: &Path) -> Result<HashMap<String, String>, LexiconError> {
    let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut dictionary = HashMap::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (word, transcript) = split_dict_row(path, idx + 1, line)?;
        dictionary.insert(word.to_string(), transcript.to_string());
    }
    Ok(dictionary)
}

/// Split one dictionary row into word and transcript.
pub(crate) fn split_dict_row<'a>(
    path: &Path,
    line: usize,
    content: &'a str,
) -> Result<(&'a str, &'a str), LexiconError> {
    let malformed = || LexiconError::MalformedRow {
        path: path.to_path_buf(),
        line,
        content: content.to_string(),
    };
    let mut fields = content.split('\t');
    let (Some(word), Some(transcript), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };
    let word = word.trim();
    let transcript = transcript.trim();
    if word.is_empty() || transcript.is_empty() {
        return Err(malformed());
    }
    Ok((word, transcript))
}
