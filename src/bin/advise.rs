//! Single-spot advisory demo.
//!
//! Prints the playability verdict, the inference chain, and the bet
//! recommendation for one scenario. With no hand argument, deals a
//! random matchup.
//!
//! Usage: advise [HAND] [POSITION] [STACK_BB] [TENDENCY] [FACING_BET_BB]

use std::env;
use std::process;

use rand::seq::SliceRandom;

use preflop_advisor::advisor::{recommend_bet, BetRequest};
use preflop_advisor::hands::{EquityTable, HAND_RANK_LIST};
use preflop_advisor::logic::OpponentTendency;
use preflop_advisor::sizing::SearchMethod;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut rng = rand::thread_rng();
    let dealt = args.len() < 2;
    let hand = if dealt {
        HAND_RANK_LIST
            .choose(&mut rng)
            .copied()
            .unwrap_or("AA")
            .to_string()
    } else {
        args[1].clone()
    };
    let position = args.get(2).cloned().unwrap_or_else(|| "Button".to_string());
    let stack: u32 = match args.get(3).map(|s| s.parse()).unwrap_or(Ok(50)) {
        Ok(s) => s,
        Err(_) => {
            eprintln!("Invalid stack size: {}", args[3]);
            process::exit(1);
        }
    };
    let tendency: OpponentTendency = match args
        .get(4)
        .map(|s| s.parse())
        .unwrap_or(Ok(OpponentTendency::Unknown))
    {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let facing_bet: Option<f64> = match args.get(5).map(|s| s.parse()) {
        Some(Ok(b)) => Some(b),
        Some(Err(_)) => {
            eprintln!("Invalid facing bet: {}", args[5]);
            process::exit(1);
        }
        None => None,
    };

    println!("=== Preflop Advisor ===\n");
    if dealt {
        // Echo a full random matchup when nothing was specified.
        let villain_pool: Vec<&str> = HAND_RANK_LIST
            .iter()
            .copied()
            .filter(|&h| h != hand)
            .collect();
        let villain = villain_pool.choose(&mut rng).copied().unwrap_or("KK");
        println!("Dealt: {} (villain holds {})", hand, villain);
    }
    println!(
        "Spot: {} on {} with {} BB vs {} opponent",
        hand, position, stack, tendency
    );
    if let Some(bet) = facing_bet {
        println!("Facing a bet of {:.1} BB", bet);
    }
    println!();

    let equity = EquityTable::builtin();

    let mut request = BetRequest::new(&hand, &position, (stack, stack), tendency);
    if let Some(bet) = facing_bet {
        request = request.with_facing_bet(bet);
    }
    let recommendation = recommend_bet(request, &equity);

    if let Some(playability) = &recommendation.playability_result {
        println!(
            "Playability: {}",
            if playability.playable { "PLAY" } else { "FOLD" }
        );
        println!("  {}", playability.reason);
        println!("\nInference chain:");
        for line in &playability.inference_chain {
            println!("  - {}", line);
        }
        println!();
    }

    println!(
        "Recommendation: {} ({} search)",
        recommendation.action, recommendation.search_algorithm
    );
    println!("  {}", recommendation.reason);
    println!(
        "  bet size: {:.1} BB | EV: {:+.2} BB",
        recommendation.bet_size, recommendation.expected_value
    );

    // Cross-check with the exhaustive oracle.
    let mut oracle_request = BetRequest::new(&hand, &position, (stack, stack), tendency)
        .with_search(SearchMethod::BruteForce);
    if let Some(bet) = facing_bet {
        oracle_request = oracle_request.with_facing_bet(bet);
    }
    let oracle = recommend_bet(oracle_request, &equity);
    if oracle.action == recommendation.action
        && (oracle.expected_value - recommendation.expected_value).abs() < 0.01
    {
        println!("  brute-force oracle agrees");
    } else {
        println!(
            "  WARNING: brute-force oracle disagrees: {} {:.1} BB (EV {:+.2} BB)",
            oracle.action, oracle.bet_size, oracle.expected_value
        );
    }
}
