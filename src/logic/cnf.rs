//! CNF rule representation.
//!
//! A rule is a conjunction of clauses; each clause is a disjunction of
//! literals; a literal is a named boolean fact, possibly negated. Rules
//! are declared once per decision call and never mutated.

use serde::Serialize;
use std::fmt;

/// A fact name, optionally negated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Name of the underlying fact.
    pub fact: String,
    /// True when the literal asserts the fact is false.
    pub negated: bool,
}

impl Literal {
    /// Positive literal.
    pub fn pos(fact: impl Into<String>) -> Self {
        Self {
            fact: fact.into(),
            negated: false,
        }
    }

    /// Negated literal.
    pub fn neg(fact: impl Into<String>) -> Self {
        Self {
            fact: fact.into(),
            negated: true,
        }
    }

    /// Truth value of the literal given a known fact value.
    pub fn holds_given(&self, fact_value: bool) -> bool {
        fact_value != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬{}", self.fact)
        } else {
            write!(f, "{}", self.fact)
        }
    }
}

/// A disjunction of literals.
pub type Clause = Vec<Literal>;

/// A propositional rule in conjunctive normal form.
#[derive(Debug, Clone)]
pub struct CnfRule {
    /// Short rule label used in trace output.
    pub name: String,
    /// The clauses, all of which must hold.
    pub clauses: Vec<Clause>,
    /// Human-readable statement of what the rule encodes.
    pub description: String,
}

impl CnfRule {
    /// Build a rule from its clauses.
    pub fn new(
        name: impl Into<String>,
        clauses: Vec<Clause>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            clauses,
            description: description.into(),
        }
    }

    /// Render the rule as CNF text, e.g. `(¬a ∨ b) ∧ (c ∨ d)`.
    pub fn cnf_text(&self) -> String {
        self.clauses
            .iter()
            .map(|clause| {
                let body = clause
                    .iter()
                    .map(Literal::to_string)
                    .collect::<Vec<_>>()
                    .join(" ∨ ");
                format!("({})", body)
            })
            .collect::<Vec<_>>()
            .join(" ∧ ")
    }

    /// Snapshot of the rule for export.
    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            name: self.name.clone(),
            cnf: self.cnf_text(),
            description: self.description.clone(),
        }
    }
}

/// Exportable view of a rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSnapshot {
    /// Rule label.
    pub name: String,
    /// CNF formula as text.
    pub cnf: String,
    /// Rule description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::pos("a").to_string(), "a");
        assert_eq!(Literal::neg("a").to_string(), "¬a");
    }

    #[test]
    fn test_literal_holds_given() {
        assert!(Literal::pos("a").holds_given(true));
        assert!(!Literal::pos("a").holds_given(false));
        assert!(Literal::neg("a").holds_given(false));
        assert!(!Literal::neg("a").holds_given(true));
    }

    #[test]
    fn test_cnf_text() {
        let rule = CnfRule::new(
            "Rule X",
            vec![
                vec![Literal::neg("a"), Literal::pos("b")],
                vec![Literal::pos("c")],
            ],
            "a implies b, and c",
        );
        assert_eq!(rule.cnf_text(), "(¬a ∨ b) ∧ (c)");
    }
}
