//! Refutation by binary resolution.
use log::{debug, info};
use rustc_hash::FxHashSet;

use clausal_formula::Clause;

use crate::config::SolverConfig;
use crate::proof::{ProofStep, ProofTrace};
use crate::unify::Unifier;

/// Outcome of a refutation attempt.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Refutation {
    /// The empty clause was derived.
    Unsat(ProofTrace),
    /// A full round produced no new clause, so the empty clause can't be derived.
    Saturated,
    /// The round bound was reached while new clauses were still being derived.
    Timeout,
}

impl Refutation {
    pub fn is_unsat(&self) -> bool {
        match self {
            Refutation::Unsat(_) => true,
            Refutation::Saturated | Refutation::Timeout => false,
        }
    }

    pub fn trace(&self) -> Option<&ProofTrace> {
        match self {
            Refutation::Unsat(trace) => Some(trace),
            Refutation::Saturated | Refutation::Timeout => None,
        }
    }
}

/// Saturating binary resolution prover.
///
/// Each round resolves every pair of clauses present at the start of the round on every pair of
/// unifiable complementary literals. New resolvents are added right away but only take part in
/// pairs from the next round on. Clauses are not renamed apart, so a variable shared by both
/// parents of a step denotes the same term in both.
#[derive(Clone, Debug)]
pub struct Resolver {
    unifier: Unifier,
    max_rounds: usize,
}

impl Default for Resolver {
    fn default() -> Resolver {
        Resolver::new(&SolverConfig::default())
    }
}

impl Resolver {
    pub fn new(config: &SolverConfig) -> Resolver {
        Resolver {
            unifier: Unifier::new(config),
            max_rounds: config.max_rounds,
        }
    }

    /// Limits the number of rounds.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Resolver {
        self.max_rounds = max_rounds;
        self
    }

    /// Tries to derive the empty clause from the given clauses.
    ///
    /// The input is not modified, duplicated clauses are ignored.
    pub fn refute(&self, input: &[Clause]) -> Refutation {
        let mut known = FxHashSet::default();
        let mut clauses = vec![];
        for clause in input {
            if known.insert(clause.clone()) {
                clauses.push(clause.clone());
            }
        }

        if clauses.iter().any(Clause::is_empty) {
            info!("Input contains the empty clause");
            return Refutation::Unsat(ProofTrace::new());
        }

        let mut trace = ProofTrace::new();

        for round in 0..self.max_rounds {
            let clause_count = clauses.len();
            let mut added = 0;

            for i in 0..clause_count {
                for j in (i + 1)..clause_count {
                    for step in self.resolvents(&clauses[i], &clauses[j]) {
                        if step.resolvent.is_empty() {
                            trace.push(step);
                            info!(
                                "Refuted after {} rounds with {} resolution steps",
                                round + 1,
                                trace.len()
                            );
                            return Refutation::Unsat(trace);
                        }
                        if known.insert(step.resolvent.clone()) {
                            clauses.push(step.resolvent.clone());
                            trace.push(step);
                            added += 1;
                        }
                    }
                }
            }

            debug!(
                "Round {}: {} new clauses, {} in total",
                round + 1,
                added,
                clauses.len()
            );

            if added == 0 {
                info!("Saturated after {} rounds with {} clauses", round + 1, clauses.len());
                return Refutation::Saturated;
            }
        }

        info!(
            "Gave up after {} rounds with {} clauses",
            self.max_rounds,
            clauses.len()
        );
        Refutation::Timeout
    }

    /// All resolvents of two clauses, in literal order.
    pub fn resolvents(&self, left: &Clause, right: &Clause) -> Vec<ProofStep> {
        let mut steps = vec![];
        for left_literal in left {
            for right_literal in right {
                if let Some(unifier) = self.unifier.unify_literals(left_literal, right_literal) {
                    let resolvent = left
                        .without(left_literal)
                        .chain(right.without(right_literal))
                        .map(|lit| unifier.apply_literal(lit))
                        .collect();
                    steps.push(ProofStep {
                        left: left.clone(),
                        right: right.clone(),
                        left_literal: left_literal.clone(),
                        right_literal: right_literal.clone(),
                        unifier,
                        resolvent,
                    });
                }
            }
        }
        steps
    }
}

/// Tries to derive the empty clause within `max_rounds` rounds, without occurs-check.
pub fn refute(clauses: &[Clause], max_rounds: usize) -> Refutation {
    Resolver::default().with_max_rounds(max_rounds).refute(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;

    use clausal_syntax::{parse_clause, parse_clauses, ParserError};

    use crate::checker::check_refutation;

    #[test]
    fn unit_refutation() -> Result<(), ParserError> {
        let clauses = parse_clauses(vec![vec!["P(x)"], vec!["~P(A)"]])?;

        match refute(&clauses, 10) {
            Refutation::Unsat(trace) => {
                assert_eq!(trace.len(), 1);
                let step = &trace.steps()[0];
                assert_eq!(step.parents(), (&clauses[0], &clauses[1]));
                assert!(step.resolvent.is_empty());
                assert_eq!(step.unifier.to_string(), "{x -> A}");
            }
            other => panic!("unexpected {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn lowercase_arguments_are_variables() -> Result<(), ParserError> {
        let clauses = parse_clauses(vec![vec!["P(x)"], vec!["~P(a)"]])?;
        let refutation = refute(&clauses, 10);
        assert_eq!(refutation.trace().map(ProofTrace::len), Some(1));
        Ok(())
    }

    #[test]
    fn saturation() -> Result<(), ParserError> {
        let clauses = parse_clauses(vec![vec!["P(x)"], vec!["Q(a)"]])?;
        assert_eq!(refute(&clauses, 1), Refutation::Saturated);
        assert_eq!(refute(&[], 1), Refutation::Saturated);
        Ok(())
    }

    #[test]
    fn round_bound() -> Result<(), ParserError> {
        // Derives ever deeper terms N(N(..)) without reaching a contradiction.
        let clauses = parse_clauses(vec![vec!["~N(x)", "N(S(x))"], vec!["N(Z)"]])?;
        assert_eq!(refute(&clauses, 3), Refutation::Timeout);
        assert_eq!(refute(&clauses, 0), Refutation::Timeout);
        Ok(())
    }

    #[test]
    fn empty_input_clause() -> Result<(), ParserError> {
        let clauses = vec![parse_clause(vec!["P(x)"])?, Clause::new()];
        assert_eq!(refute(&clauses, 0), Refutation::Unsat(ProofTrace::new()));
        Ok(())
    }

    #[test]
    fn duplicates_are_ignored() -> Result<(), ParserError> {
        let clauses = parse_clauses(vec![
            vec!["P(x)", "P(x)"],
            vec!["P(x)"],
            vec!["Q"],
        ])?;
        assert_eq!(refute(&clauses, 5), Refutation::Saturated);
        assert_eq!(clauses[0].len(), 1);
        Ok(())
    }

    #[test]
    fn two_round_refutation() -> Result<(), anyhow::Error> {
        let clauses = parse_clauses(vec![
            vec!["~Man(x)", "Mortal(x)"],
            vec!["Man(Socrates)"],
            vec!["~Mortal(Socrates)"],
        ])?;

        let refutation = Resolver::default().refute(&clauses);
        let trace = refutation.trace().cloned().unwrap_or_default();

        assert!(refutation.is_unsat());
        assert_eq!(trace.conclusion(), Some(&Clause::new()));
        check_refutation(&clauses, &trace)?;

        Ok(())
    }
}
