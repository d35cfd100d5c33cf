//! Full-range strategy sweep.
//!
//! Evaluates all 169 starting hands for one scenario in parallel and
//! writes the resulting strategy to JSON.
//!
//! Usage: sweep_range [POSITION] [STACK_BB] [TENDENCY] [--config FILE]

use std::env;
use std::fs::File;
use std::io::Write;
use std::process;
use std::time::Instant;

use indicatif::ProgressBar;

use preflop_advisor::advisor::{sweep_range, RangeEntry};
use preflop_advisor::config::AdvisorConfig;
use preflop_advisor::hands::EquityTable;
use preflop_advisor::logic::OpponentTendency;
use preflop_advisor::sizing::ActionKind;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut position = "Button".to_string();
    let mut stack: u32 = 50;
    let mut tendency = OpponentTendency::Unknown;
    let mut config_path: Option<String> = None;

    let mut positional = 0;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(args[i].clone());
                }
            }
            value => {
                match positional {
                    0 => position = value.to_string(),
                    1 => {
                        stack = match value.parse() {
                            Ok(s) => s,
                            Err(_) => {
                                eprintln!("Invalid stack size: {}", value);
                                process::exit(1);
                            }
                        }
                    }
                    2 => {
                        tendency = match value.parse() {
                            Ok(t) => t,
                            Err(e) => {
                                eprintln!("{}", e);
                                process::exit(1);
                            }
                        }
                    }
                    _ => {
                        eprintln!("Unexpected argument: {}", value);
                        process::exit(1);
                    }
                }
                positional += 1;
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => match AdvisorConfig::from_json_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                process::exit(1);
            }
        },
        None => AdvisorConfig::default(),
    };

    println!("=== Preflop Range Sweep ===\n");
    println!(
        "Scenario: {} with {} BB vs {} opponent | {} search",
        position, stack, tendency, config.search
    );
    println!();

    let equity = EquityTable::builtin();
    let progress = ProgressBar::new(169);

    let start = Instant::now();
    let entries = sweep_range(&position, (stack, stack), tendency, &config, &equity, || {
        progress.inc(1)
    });
    progress.finish_and_clear();

    println!(
        "Evaluated {} hands in {:.2}s\n",
        entries.len(),
        start.elapsed().as_secs_f64()
    );

    print_summary(&entries);

    let json_path = "preflop_strategy.json";
    match serde_json::to_string_pretty(&entries) {
        Ok(json) => {
            match File::create(json_path).and_then(|mut f| f.write_all(json.as_bytes())) {
                Ok(_) => println!("\nSaved JSON: {}", json_path),
                Err(e) => eprintln!("\nError saving JSON: {}", e),
            }
        }
        Err(e) => eprintln!("\nError serializing strategy: {}", e),
    }
}

fn print_summary(entries: &[RangeEntry]) {
    let played: Vec<&RangeEntry> = entries
        .iter()
        .filter(|e| e.action != ActionKind::Fold)
        .collect();
    let folded = entries.len() - played.len();

    println!(
        "Strategy: play {} / fold {} ({:.1}% of range)",
        played.len(),
        folded,
        played.len() as f64 / entries.len() as f64 * 100.0
    );

    if let Some(best) = played.first() {
        println!(
            "Best spot: {} -> {} {:.1} BB (EV {:+.2} BB)",
            best.hand, best.action, best.bet_size, best.expected_value
        );
    }
    if let Some(worst) = played.last() {
        println!(
            "Thinnest play: {} -> {} {:.1} BB (EV {:+.2} BB)",
            worst.hand, worst.action, worst.bet_size, worst.expected_value
        );
    }

    println!("\nRank | Hand | Tier     | Action | Size | EV");
    println!("-----+------+----------+--------+------+------");
    for entry in entries.iter().take(15) {
        println!(
            "{:>4} | {:<4} | {:<8} | {:<6} | {:>4.1} | {:+.2}",
            entry.rank, entry.hand, entry.tier, entry.action, entry.bet_size, entry.expected_value
        );
    }
    if entries.len() > 15 {
        println!("  ... ({} more hands in the JSON output)", entries.len() - 15);
    }
}
