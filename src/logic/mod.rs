//! Propositional-logic playability engine.
//!
//! ## Modules
//!
//! - `cnf`: rule representation (clauses of possibly-negated facts)
//! - `facts`: names of the fixed proposition vocabulary
//! - `kb`: knowledge base with forward and backward chaining
//! - `scenario`: derivation of base facts from scenario inputs
//! - `playability`: the ten-rule playability decision

pub mod cnf;
pub mod facts;
pub mod kb;
pub mod playability;
pub mod scenario;

// Re-export commonly used types
pub use cnf::{Clause, CnfRule, Literal, RuleSnapshot};
pub use kb::{KbSnapshot, KnowledgeBase};
pub use playability::{decide_playability, ruleset, PlayabilityResult};
pub use scenario::{derive_facts, HandProfile, OpponentTendency, Position, ScenarioFacts};
