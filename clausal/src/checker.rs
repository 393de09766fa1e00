//! Independent checking of refutation proofs.
use rustc_hash::FxHashSet;
use thiserror::Error;

use clausal_formula::Clause;

use crate::proof::{ProofStep, ProofTrace};

/// Possible errors while checking a refutation proof.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckerError {
    #[error("step {}: Checking proof failed: {}", step, msg)]
    CheckFailed { step: usize, msg: String },
    #[error("Proof does not derive the empty clause")]
    ProofIncomplete,
}

impl CheckerError {
    fn check_failed(step: usize, msg: String) -> CheckerError {
        CheckerError::CheckFailed { step, msg }
    }
}

/// Checks that a trace derives the empty clause from the given input clauses.
///
/// Every step is replayed: its parents have to be input clauses or earlier resolvents, the
/// resolved literals have to be complementary after applying the unifier and the recorded
/// resolvent has to match the recomputed one. An empty trace is only accepted if the input
/// contains the empty clause.
pub fn check_refutation(input: &[Clause], trace: &ProofTrace) -> Result<(), CheckerError> {
    let mut known: FxHashSet<&Clause> = input.iter().collect();

    if trace.is_empty() {
        return if known.contains(&Clause::new()) {
            Ok(())
        } else {
            Err(CheckerError::ProofIncomplete)
        };
    }

    for (index, step) in trace.iter().enumerate() {
        check_step(&known, step).map_err(|msg| CheckerError::check_failed(index, msg))?;
        known.insert(&step.resolvent);
    }

    match trace.conclusion() {
        Some(conclusion) if conclusion.is_empty() => Ok(()),
        _ => Err(CheckerError::ProofIncomplete),
    }
}

fn check_step(known: &FxHashSet<&Clause>, step: &ProofStep) -> Result<(), String> {
    for (name, parent, literal) in [
        ("left", &step.left, &step.left_literal),
        ("right", &step.right, &step.right_literal),
    ]
    .iter()
    {
        if !known.contains(*parent) {
            return Err(format!("{} parent {} was not derived", name, parent));
        }
        if !parent.contains(literal) {
            return Err(format!("{} parent {} does not contain {}", name, parent, literal));
        }
    }

    let left_literal = step.unifier.apply_literal(&step.left_literal);
    let right_literal = step.unifier.apply_literal(&step.right_literal);
    if left_literal != right_literal.negated() {
        return Err(format!(
            "unifier {} does not resolve {} with {}",
            step.unifier, step.left_literal, step.right_literal
        ));
    }

    let resolvent: Clause = step
        .left
        .without(&step.left_literal)
        .chain(step.right.without(&step.right_literal))
        .map(|lit| step.unifier.apply_literal(lit))
        .collect();
    if resolvent != step.resolvent {
        return Err(format!(
            "recorded resolvent {} differs from {}",
            step.resolvent, resolvent
        ));
    }

    Ok(())
}
