//! # syllab-rs
//!
//! A Rust library for compound-aware syllabification and stress labeling of
//! Icelandic phonetic transcriptions.
//!
//! ## Features
//!
//! - **Compound Segmentation**: Table-driven decomposition of compounds into
//!   modifier and head, recursively, with transcript alignment
//! - **Syllabification**: Onset-rhyme syllabification with protected
//!   consonant clusters, applied per compound component
//! - **Stress Labeling**: First-syllable primary stress plus compound head
//!   stress, derived by prefix reuse over ordered word lists
//! - **Flexible Output**: Plain syllables, stress-annotated syllables or
//!   CMU s-expressions, with configurable separators
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! syllab-rs = "0.3"
//! ```
//!
//! ```
//! use syllab_rs::{LexicalTables, Processor, ProcessorOptions};
//!
//! let tables = LexicalTables::new(
//!     ["afi"],
//!     ["föður"],
//!     [("afi".to_string(), "a: v I".to_string())],
//! );
//! let processor = Processor::new(tables, ProcessorOptions::default());
//!
//! let entry = processor.annotate_word("föðurafi", "f 9: D Y r a: v I");
//! assert_eq!(entry.compound_elements(), ["föður", "afi"]);
//! assert_eq!(processor.render(&entry), "f 9: . D Y r . a: . v I");
//! ```

pub mod compound;
pub mod entry;
pub mod format;
pub mod lexicon;
pub mod phones;
pub mod processor;
pub mod stress;
pub mod syllabify;
pub mod syllable;

pub use entry::PronEntry;
pub use format::Format;
pub use lexicon::{LexicalTables, LexiconError, PhoneLookup};
pub use phones::{Alphabet, PhoneInventory};
pub use processor::{Processor, ProcessorOptions, ProcessorOptionsBuilder};
pub use syllable::{Stress, Syllable};
