//! # Preflop Advisor
//!
//! A decision engine for simplified heads-up preflop poker: decides
//! whether a starting hand should be played at all, and if so, what bet
//! size maximizes expected value.
//!
//! ## Features
//!
//! - **Rule-Based Playability**: CNF knowledge base with forward and
//!   backward chaining and a full inference trace
//! - **Bet-Size Optimization**: discrete EV model searched with A*,
//!   validated against brute-force enumeration
//! - **Stateless Decisions**: every call builds its own fact store and
//!   search nodes, so ranges can be evaluated in parallel
//! - **Embedded Equity Data**: immutable 169-hand equity table, loadable
//!   from JSON
//!
//! ## Quick Start
//!
//! ```
//! use preflop_advisor::advisor::{recommend_bet, BetRequest};
//! use preflop_advisor::hands::EquityTable;
//! use preflop_advisor::logic::OpponentTendency;
//!
//! // Load the equity table once per process.
//! let equity = EquityTable::builtin();
//!
//! let request = BetRequest::new("AA", "Button", (50, 50), OpponentTendency::Tight);
//! let recommendation = recommend_bet(request, &equity);
//! assert_eq!(recommendation.action.to_string(), "open");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Unified Entry Point (advisor)              │
//! │  - Playability pre-filter    - Per-action reason text       │
//! └─────────────────────────────────────────────────────────────┘
//!           │                                    │
//!           ▼                                    ▼
//! ┌─────────────────────┐            ┌─────────────────────────┐
//! │  Playability (logic)│            │  Bet Sizing (sizing)    │
//! │  - CNF rules        │            │  - Discretizer          │
//! │  - Fact derivation  │            │  - EV model             │
//! │  - Fwd/bwd chaining │            │  - A* + brute force     │
//! └─────────────────────┘            └─────────────────────────┘
//!           │                                    │
//!           └──────────────┬─────────────────────┘
//!                          ▼
//!            ┌──────────────────────────┐
//!            │   Hand Data (hands)      │
//!            │   - 169-hand ranking     │
//!            │   - Equity table         │
//!            └──────────────────────────┘
//! ```

#![warn(missing_docs)]

/// Unified decision entry point and range sweeps.
pub mod advisor;

/// Advisor configuration loaded from JSON.
pub mod config;

/// Starting-hand ranking and equity data.
pub mod hands;

/// Propositional-logic playability engine.
pub mod logic;

/// Bet-size discretization, EV model, and search.
pub mod sizing;

// Re-export commonly used types at crate root for convenience
pub use advisor::{recommend_bet, sweep_range, BetRequest, Recommendation};
pub use config::AdvisorConfig;
pub use hands::{EquityTable, Tier};
pub use logic::{decide_playability, OpponentTendency, PlayabilityResult, Position};
pub use sizing::{ActionKind, HeuristicKind, SearchMethod};
