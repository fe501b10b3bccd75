mod report;

use std::fs::File;
use std::path::PathBuf;

use algos::{agreed_match, compare};
use clap::Parser;
use report::{Scenario, render_table, write_csv};

/// Time Boyer-Moore, KMP and Rabin-Karp on every text, once with a
/// substring the text contains and once with one it does not.
///
/// Example:
/// cargo run --release -p bench -- -t data/text_1.txt -t data/text_2.txt --csv results.csv
#[derive(Debug, clap::Parser)]
#[command(name = "bench", about = "Compare substring search algorithms over text files")]
struct Cli {
    #[arg(
        short = 't',
        long = "text",
        value_name = "TEXT",
        default_values = ["data/text_1.txt", "data/text_2.txt"]
    )]
    texts: Vec<PathBuf>,

    /// Substring expected to occur in the texts
    #[arg(long, default_value = "структури даних")]
    existing: String,

    /// Substring expected to be absent from the texts
    #[arg(long, default_value = "неіснуючий рядок")]
    missing: String,

    /// Also write every measurement to this CSV file
    #[arg(long, value_name = "CSV")]
    csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // all I/O happens before anything is timed
    println!("> Loading {} text file(s)...", cli.texts.len());
    let sources = storage::load_texts(&cli.texts)?;

    let patterns = [
        (cli.existing.as_str(), "existing substring"),
        (cli.missing.as_str(), "missing substring"),
    ];

    let mut scenarios = Vec::with_capacity(sources.len() * patterns.len());

    for source in &sources {
        for &(pattern, label) in &patterns {
            let records = compare(&source.text, pattern);
            let found = agreed_match(&records)?;
            log::info!("{} / {:?}: match={:?}", source.name, pattern, found);

            println!();
            println!("{}", render_table(&format!("{} ({})", source.name, label), &records));

            scenarios.push(Scenario {
                text: source.name.clone(),
                pattern: pattern.to_string(),
                records,
            });
        }
    }

    if let Some(path) = cli.csv {
        write_csv(File::create(&path)?, &scenarios)?;
        let rows: usize = scenarios.iter().map(|s| s.records.len()).sum();
        println!("> Wrote {} rows to {}", rows, path.display());
    }

    Ok(())
}
