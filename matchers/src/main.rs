use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use matchers::{BoyerMoore, Kmp, MatchResult, Matcher, RabinKarp, RabinKarpConfig};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Algorithm {
    Kmp,
    RabinKarp,
    BoyerMoore,
}

/// Example:
/// cargo run --release -- -t data/article1.txt -t data/article2.txt --pattern "the" -a kmp --measure-time
/// cargo run --release -- -t data/article1.txt --pattern "and" -a rabin-karp --prime 101
#[derive(Debug, clap::Parser)]
#[command(
    name = "substring-search",
    about = "Locate the first occurrence of a pattern in one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algorithm,

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

    /// Modulus for the Rabin-Karp rolling hash (only used with --algo rabin-karp)
    #[arg(long, default_value_t = matchers::DEFAULT_PRIME)]
    prime: i64,

    /// Radix for the Rabin-Karp rolling hash (only used with --algo rabin-karp)
    #[arg(long, default_value_t = matchers::DEFAULT_BASE)]
    base: i64,

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

    // Validate the hash parameters before touching any file.
    let rk_config = RabinKarpConfig::new(cli.prime, cli.base)?;

    let pattern = load_pattern(&cli)?;

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={:?}, pattern-length={}",
        cli.algo,
        pattern.len()
    )?;

    for text_path in cli.texts.iter() {
        let text = load_text(text_path)?;

        let (result, duration) = run_algorithm(&cli, rk_config, &text, &pattern);

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        match result.index() {
            Some(index) => writeln!(out, "match: {}", index)?,
            None => writeln!(out, "match: none")?,
        }

        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone())
    } else if let Some(ref path) = cli.pattern_file {
        load_text(path)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn load_text(path: &PathBuf) -> Result<String, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        let mut file = File::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(buf)
    }
}

fn run_algorithm(
    cli: &Cli,
    rk_config: RabinKarpConfig,
    text: &str,
    pattern: &str,
) -> (MatchResult, Option<Duration>) {
    let start = if cli.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let result = match cli.algo {
        Algorithm::Kmp => Kmp::search((), text, pattern),
        Algorithm::RabinKarp => RabinKarp::search(rk_config, text, pattern),
        Algorithm::BoyerMoore => BoyerMoore::search((), text, pattern),
    };

    let duration = start.map(|s| s.elapsed());

    (result, duration)
}
