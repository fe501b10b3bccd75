use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use algos::timing::{self, PRECISION, Stopwatch};
use algos::{BM, KMP, RK, StringSearch, match_index};
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Choice {
    Bm,
    Kmp,
    Rk,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Bm,
    Kmp,
    Rk,
}

impl Choice {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Choice::Bm => &[Algorithm::Bm],
            Choice::Kmp => &[Algorithm::Kmp],
            Choice::Rk => &[Algorithm::Rk],
            Choice::All => &[Algorithm::Bm, Algorithm::Kmp, Algorithm::Rk],
        }
    }
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Bm => BM::NAME,
            Algorithm::Kmp => KMP::NAME,
            Algorithm::Rk => RK::NAME,
        }
    }
}

enum Outcome {
    First(Option<usize>),
    All(Vec<usize>),
}

/// Example:
/// time cargo run --release -p algos -- -t data/text_1.txt -t data/text_2.txt --pattern "структури даних" -a all --measure-time
/// add --find-all to list every (overlapping) match instead of the first one
#[derive(Debug, clap::Parser)]
#[command(
    name = "string-search",
    about = "Run Boyer-Moore, KMP or Rabin-Karp on one pattern and one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "all")]
    algo: Choice,

    /// Text file to search; `-` reads standard input
    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    #[arg(short = 'e', long = "encoding", default_value = "utf8")]
    encoding: String,

    /// Report every match instead of only the first
    #[arg(long)]
    find_all: bool,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let encoding = cli.encoding.to_lowercase();
    if encoding != "utf8" && encoding != "utf-8" {
        return Err(format!(
            "Only UTF-8 encoding is supported at the moment (got {})",
            cli.encoding
        )
        .into());
    }

    let pattern = load_pattern(&cli)?;

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={:?}, encoding={}, pattern-length={}",
        cli.algo,
        encoding,
        pattern.len()
    )?;

    for text_path in &cli.texts {
        let source = storage::load_text(text_path)?;
        writeln!(out, "text={:?}", source.path)?;

        for &algo in cli.algo.algorithms() {
            let (outcome, elapsed) = run_algorithm(&cli, algo, &source.text, &pattern);

            writeln!(out, "algorithm: {}", algo.name())?;
            if let Some(secs) = elapsed {
                writeln!(out, "execution_time: {:.*}s", PRECISION as usize, secs)?;
            }
            match outcome {
                Outcome::First(found) => writeln!(out, "match: {}", match_index(found))?,
                Outcome::All(matches) => writeln!(out, "matches: {:?}", matches)?,
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone())
    } else if let Some(ref path) = cli.pattern_file {
        let source = storage::load_text(path)?;
        // a trailing newline from the editor is not part of the pattern
        Ok(source.text.trim_end_matches(['\r', '\n']).to_string())
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn run_algorithm(cli: &Cli, algo: Algorithm, text: &str, pattern: &str) -> (Outcome, Option<f64>) {
    if !cli.find_all {
        let m = match algo {
            Algorithm::Bm => timing::measure_search::<BM>(text, pattern),
            Algorithm::Kmp => timing::measure_search::<KMP>(text, pattern),
            Algorithm::Rk => timing::measure_search::<RK>(text, pattern),
        };
        let elapsed = cli.measure_time.then_some(m.elapsed_seconds);
        return (Outcome::First(m.found), elapsed);
    }

    let watch = Stopwatch::start(algo.name());
    let matches = match algo {
        Algorithm::Bm => BM::find_all(text, pattern),
        Algorithm::Kmp => KMP::find_all(text, pattern),
        Algorithm::Rk => RK::find_all(text, pattern),
    };
    let elapsed = watch.stop();

    let elapsed = cli
        .measure_time
        .then(|| timing::round_to_precision(elapsed.as_secs_f64(), PRECISION));
    (Outcome::All(matches), elapsed)
}
