use std::time::Instant;

use syllab_rs::{format, Format, LexicalTables, Processor, ProcessorOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tables = LexicalTables::new(
        ["afi", "dóttir"],
        ["adolfs", "föður"],
        [
            ("afi".to_string(), "a: v I".to_string()),
            ("dóttir".to_string(), "t ou h t I r".to_string()),
            ("föður".to_string(), "f 9: D Y r".to_string()),
        ],
    );
    let processor = Processor::new(tables, ProcessorOptions::default());

    let words = [
        ("afbrigði", "a v p r I G D I"),
        ("ferðast", "f E r D a s t"),
        ("föðurafi", "f 9: D Y r a: v I"),
        ("adolfsdóttir", "a: t O l f s t ou h t I r"),
    ];

    let start = Instant::now();
    let entries = processor.annotate_batch(words);
    println!("Annotated {} words in {:.2?}", entries.len(), start.elapsed());

    for entry in &entries {
        println!();
        println!("{} [{}]", entry.word(), entry.transcript());
        if entry.compound_elements().len() > 1 {
            println!("  compound:  {}", entry.compound_elements().join(" + "));
        }
        println!("  syllables: {}", processor.render(entry));
        println!(
            "  stress:    {}",
            format::render(entry, Format::Stress, processor.inventory(), ".")
        );
        println!(
            "  cmu:       {}",
            format::render(entry, Format::Cmu, processor.inventory(), ".")
        );
    }

    Ok(())
}
