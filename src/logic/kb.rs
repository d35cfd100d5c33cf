//! Knowledge base with forward- and backward-chaining inference.
//!
//! A knowledge base is created fresh per decision call: rules are declared
//! once, facts accumulate monotonically (a fact once set is never
//! retracted within a call), and every derivation is appended to a trace
//! for auditing. Nothing here is shared across calls.

use super::cnf::{Clause, CnfRule, RuleSnapshot};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// Rule store, fact store, and derivation trace for one decision.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    rules: Vec<CnfRule>,
    facts: FxHashMap<String, bool>,
    trace: Vec<String>,
}

impl KnowledgeBase {
    /// Empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule. Rules are immutable once added.
    pub fn add_rule(&mut self, rule: CnfRule) {
        self.rules.push(rule);
    }

    /// Record a fact value.
    pub fn add_fact(&mut self, fact: impl Into<String>, value: bool) {
        self.facts.insert(fact.into(), value);
    }

    /// Value of a fact, or `None` if unknown.
    pub fn get_fact(&self, fact: &str) -> Option<bool> {
        self.facts.get(fact).copied()
    }

    /// True when the fact is known to hold.
    pub fn holds(&self, fact: &str) -> bool {
        self.get_fact(fact) == Some(true)
    }

    /// All declared rules.
    pub fn rules(&self) -> &[CnfRule] {
        &self.rules
    }

    /// Append a line to the trace.
    pub fn push_trace(&mut self, line: impl Into<String>) {
        self.trace.push(line.into());
    }

    /// Append several lines to the trace.
    pub fn extend_trace<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        self.trace.extend(lines);
    }

    /// The accumulated trace.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Truth value of a literal under the current facts, or `None` if the
    /// underlying fact is unknown.
    fn literal_value(&self, literal: &super::cnf::Literal) -> Option<bool> {
        self.facts
            .get(&literal.fact)
            .map(|&v| literal.holds_given(v))
    }

    /// True when every literal of the clause is known false.
    fn clause_falsified(&self, clause: &Clause) -> bool {
        clause
            .iter()
            .all(|lit| self.literal_value(lit) == Some(false))
    }

    /// Forward chaining to a fixed point.
    ///
    /// Repeatedly scans all rules; for a rule none of whose clauses is
    /// currently falsified, any clause with exactly one undetermined
    /// literal and all other literals false forces that literal (a
    /// positive literal sets its fact true, a negated one sets it false).
    /// Terminates because facts are only ever added and the fact domain is
    /// finite. Returns the trace lines produced by this run; they are also
    /// appended to the knowledge-base trace.
    pub fn forward_chain(&mut self) -> Vec<String> {
        let mut produced = Vec::new();
        let mut changed = true;
        while changed {
            changed = false;
            let mut forced: Vec<(String, bool, String)> = Vec::new();
            for rule in &self.rules {
                if rule.clauses.iter().any(|c| self.clause_falsified(c)) {
                    continue;
                }
                for clause in &rule.clauses {
                    let mut undetermined = Vec::new();
                    let mut satisfied = false;
                    for lit in clause {
                        match self.literal_value(lit) {
                            Some(true) => {
                                satisfied = true;
                                break;
                            }
                            Some(false) => {}
                            None => undetermined.push(lit),
                        }
                    }
                    if satisfied || undetermined.len() != 1 {
                        continue;
                    }
                    let lit = undetermined[0];
                    forced.push((lit.fact.clone(), !lit.negated, rule.name.clone()));
                }
            }
            for (fact, value, rule_name) in forced {
                if self.facts.contains_key(&fact) {
                    continue;
                }
                self.facts.insert(fact.clone(), value);
                let line = format!("Applied {}: derived {} = {}", rule_name, fact, value);
                self.trace.push(line.clone());
                produced.push(line);
                changed = true;
            }
        }
        produced
    }

    /// Backward chaining query for a goal fact.
    ///
    /// A known fact answers immediately. Otherwise rules whose clauses
    /// mention the goal as a positive literal are tried: the goal is
    /// proved when every co-literal of such a clause is provable (a
    /// negated co-literal by establishing its underlying fact true, a
    /// positive one by a recursive query). A goal that depends on itself
    /// along the current proof path is reported as a circular dependency
    /// and treated as unprovable. Never panics; an unprovable goal yields
    /// `(false, trace-with-reason)`.
    pub fn query(&mut self, goal: &str) -> (bool, Vec<String>) {
        let visited = FxHashSet::default();
        self.backward(goal, &visited)
    }

    fn backward(&mut self, goal: &str, visited: &FxHashSet<String>) -> (bool, Vec<String>) {
        if let Some(&value) = self.facts.get(goal) {
            return (
                value,
                vec![format!("Goal '{}' is a known fact: {}", goal, value)],
            );
        }
        if visited.contains(goal) {
            return (
                false,
                vec![format!("Circular dependency detected for '{}'", goal)],
            );
        }
        let mut visited = visited.clone();
        visited.insert(goal.to_string());

        let mut chain = vec![format!("Attempting to prove '{}'", goal)];

        let candidates: Vec<(usize, usize)> = self
            .rules
            .iter()
            .enumerate()
            .flat_map(|(ri, rule)| {
                rule.clauses
                    .iter()
                    .enumerate()
                    .filter(|(_, clause)| {
                        clause.iter().any(|lit| !lit.negated && lit.fact == goal)
                    })
                    .map(move |(ci, _)| (ri, ci))
                    .collect::<Vec<_>>()
            })
            .collect();

        for (ri, ci) in candidates {
            let clause = self.rules[ri].clauses[ci].clone();
            let rule_name = self.rules[ri].name.clone();

            let mut premise_chain = Vec::new();
            let mut all_proved = true;
            for lit in &clause {
                if !lit.negated && lit.fact == goal {
                    continue;
                }
                let (proved, sub_chain) = self.backward(&lit.fact, &visited);
                if !proved {
                    all_proved = false;
                    break;
                }
                premise_chain.extend(sub_chain);
            }

            if all_proved {
                self.facts.insert(goal.to_string(), true);
                chain.extend(premise_chain);
                chain.push(format!("Proved '{}' using {}", goal, rule_name));
                return (true, chain);
            }
        }

        chain.push(format!("Cannot prove '{}'", goal));
        (false, chain)
    }

    /// Export rules, facts, and trace for inspection or testing.
    pub fn snapshot(&self) -> KbSnapshot {
        KbSnapshot {
            rules: self.rules.iter().map(CnfRule::snapshot).collect(),
            facts: self
                .facts
                .iter()
                .map(|(k, &v)| (k.clone(), v))
                .collect(),
            inference_chain: self.trace.clone(),
        }
    }
}

/// Exportable view of a knowledge base.
#[derive(Debug, Clone, Serialize)]
pub struct KbSnapshot {
    /// Declared rules.
    pub rules: Vec<RuleSnapshot>,
    /// Current fact values, in stable name order.
    pub facts: BTreeMap<String, bool>,
    /// Derivation trace in the order facts were established.
    pub inference_chain: Vec<String>,
}
