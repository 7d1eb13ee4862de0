use std::fs;
use std::path::Path;
use std::time::Instant;

use matchers::{MatchResult, bm_find, kmp_find, rabin_karp_find};

// Configuration
const TEXT_FILES: &[&str] = &["data/article1.txt", "data/article2.txt"];

const PATTERNS: &[(&str, &str)] = &[
    ("the", "Common Word"),
    ("and", "Common Word"),
    ("qwertyqwerty", "Not Present"),
    ("asdfghzxcv", "Not Present"),
];

const ALGORITHMS: &[(&str, fn(&[u8], &[u8]) -> MatchResult)] = &[
    ("kmp", kmp_find),
    ("rabin-karp", rabin_karp_find),
    ("boyer-moore", bm_find),
];

const REPEAT: u32 = 5;

#[derive(Debug)]
struct ResultEntry {
    algo: String,
    pattern: String,
    file: String,
    result: MatchResult,
    avg_duration_ns: u128,
}

fn main() {
    println!("--- Starting Benchmark ---");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let files: Vec<String> = if args.is_empty() {
        TEXT_FILES.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    let mut results: Vec<ResultEntry> = Vec::new();

    for file in &files {
        let text = match fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("  ! Skipping {}: {}", file, e);
                continue;
            }
        };

        println!("> Loaded {} ({} bytes)", file, text.len());

        for (pattern, pat_desc) in PATTERNS {
            println!("  > Pattern '{}' ({})", pattern, pat_desc);

            for (algo, find) in ALGORITHMS {
                let (result, avg_ns) = time_search(*find, text.as_bytes(), pattern.as_bytes());

                results.push(ResultEntry {
                    algo: algo.to_string(),
                    pattern: pattern.to_string(),
                    file: file.clone(),
                    result,
                    avg_duration_ns: avg_ns,
                });
            }
        }
    }

    check_agreement(&results);
    print_summary_table(&results);
}

/// Run one matcher `REPEAT` times and average the wall-clock duration.
fn time_search(
    find: fn(&[u8], &[u8]) -> MatchResult,
    text: &[u8],
    pattern: &[u8],
) -> (MatchResult, u128) {
    let mut result = MatchResult::NotFound;
    let start = Instant::now();
    for _ in 0..REPEAT {
        result = find(text, pattern);
    }
    let total = start.elapsed();
    (result, total.as_nanos() / REPEAT as u128)
}

/// Every algorithm must report the same index for the same inputs.
fn check_agreement(results: &[ResultEntry]) {
    for entry in results {
        for other in results {
            if entry.file == other.file
                && entry.pattern == other.pattern
                && entry.result != other.result
            {
                eprintln!(
                    "  ! DISAGREEMENT on file {} pattern '{}': {} -> {:?}, {} -> {:?}",
                    entry.file, entry.pattern, entry.algo, entry.result, other.algo, other.result
                );
            }
        }
    }
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^80}", " RESULTS SUMMARY ");
    println!(
        "{:<12} | {:<15} | {:<20} | {:<10} | {:>12}",
        "Algorithm", "Pattern", "File", "Match", "Time (µs)"
    );
    println!("{:-^80}", "");

    for entry in results {
        let micros = entry.avg_duration_ns as f64 / 1000.0;

        let short_file = Path::new(&entry.file)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        let matched = match entry.result.index() {
            Some(index) => index.to_string(),
            None => "none".to_string(),
        };

        println!(
            "{:<12} | {:<15} | {:<20} | {:<10} | {:>12.2}",
            entry.algo,
            entry.pattern.chars().take(12).collect::<String>(),
            short_file,
            matched,
            micros
        );
    }
    println!("{:=^80}", " END ");
}
