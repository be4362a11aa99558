//! Command-line annotation of transcribed Icelandic.
//!
//! Reads a `word<TAB>transcript` dictionary file, or a single word with its
//! transcription, and prints the entries with syllable and stress structure
//! added.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};

use syllab_rs::{Alphabet, Format, Processor, ProcessorOptionsBuilder};

#[derive(Debug, Parser)]
#[command(
    name = "syllab",
    version,
    about = "Syllabify and stress-label phonetic transcriptions of Icelandic"
)]
struct Cli {
    /// Dictionary file to annotate (word<TAB>transcript per line)
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with = "word",
        required_unless_present = "word"
    )]
    infile: Option<PathBuf>,

    /// Single word to annotate
    #[arg(short, long, requires = "transcript")]
    word: Option<String>,

    /// Transcription of --word, phones space separated
    #[arg(short, long, value_name = "PHONES", requires = "word")]
    transcript: Option<String>,

    /// Directory containing the lexical tables
    #[arg(short = 'T', long = "tables", value_name = "DIR")]
    tables: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "syllables")]
    format: OutputFormat,

    /// Phonetic alphabet of the input transcriptions
    #[arg(short, long, value_enum, default_value = "sampa")]
    alphabet: AlphabetArg,

    /// Syllable separator
    #[arg(short, long, default_value = ".")]
    separator: String,

    /// Keep the original word in the first output column
    #[arg(short, long)]
    keep: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Syllables joined by the separator
    Syllables,
    /// Syllables with stress labels on the vowels
    Stress,
    /// Festival-style CMU s-expressions
    Cmu,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Syllables => Format::Syllables,
            OutputFormat::Stress => Format::Stress,
            OutputFormat::Cmu => Format::Cmu,
        }
    }
}

/// Supported phonetic alphabets
#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphabetArg {
    /// X-SAMPA
    Sampa,
    /// IPA
    Ipa,
}

impl From<AlphabetArg> for Alphabet {
    fn from(alphabet: AlphabetArg) -> Self {
        match alphabet {
            AlphabetArg::Sampa => Alphabet::Sampa,
            AlphabetArg::Ipa => Alphabet::Ipa,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ProcessorOptionsBuilder::default()
        .alphabet(Alphabet::from(cli.alphabet))
        .format(Format::from(cli.format))
        .separator(cli.separator.clone())
        .build()
        .context("invalid processor options")?;
    let processor = Processor::from_dir(&cli.tables, options).with_context(|| {
        format!("failed to load lexical tables from {}", cli.tables.display())
    })?;

    let entries = match (&cli.infile, &cli.word, &cli.transcript) {
        (Some(path), _, _) => processor
            .process_dict_file(path)
            .with_context(|| format!("failed to process {}", path.display()))?,
        (None, Some(word), Some(transcript)) => vec![processor.annotate_word(word, transcript)],
        _ => unreachable!("clap enforces either --infile or --word with --transcript"),
    };

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            if cli.keep {
                format!("{}\t{}", entry.word(), processor.render(entry))
            } else {
                processor.render(entry)
            }
        })
        .collect();
    write_lines(&lines, cli.output.as_deref())
}

fn write_lines(lines: &[String], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut body = lines.join("\n");
            if !body.is_empty() {
                body.push('\n');
            }
            std::fs::write(path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {} lines to {}", lines.len(), path.display());
        }
        None => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
