//! Refutation proofs.
use std::fmt;
use std::slice;

use clausal_formula::{Clause, Literal, Substitution};

/// A single binary resolution step.
///
/// `resolvent` is the union of `left` without `left_literal` and `right` without `right_literal`,
/// with `unifier` applied to every literal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProofStep {
    pub left: Clause,
    pub right: Clause,
    pub left_literal: Literal,
    pub right_literal: Literal,
    /// Most general unifier of the resolved literals.
    pub unifier: Substitution,
    pub resolvent: Clause,
}

impl ProofStep {
    /// The parent clauses.
    pub fn parents(&self) -> (&Clause, &Clause) {
        (&self.left, &self.right)
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} + {} on {} / {} with {} => {}",
            self.left, self.right, self.left_literal, self.right_literal, self.unifier, self.resolvent
        )
    }
}

/// Resolution steps in derivation order.
///
/// The parents of each step are input clauses or resolvents of earlier steps.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ProofTrace {
    steps: Vec<ProofStep>,
}

impl ProofTrace {
    pub fn new() -> ProofTrace {
        ProofTrace::default()
    }

    pub fn push(&mut self, step: ProofStep) {
        self.steps.push(step)
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<ProofStep> {
        self.steps.iter()
    }

    /// The last derived clause, the empty clause for a complete refutation.
    pub fn conclusion(&self) -> Option<&Clause> {
        self.steps.last().map(|step| &step.resolvent)
    }
}

impl<'a> IntoIterator for &'a ProofTrace {
    type Item = &'a ProofStep;
    type IntoIter = slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// One step per line.
impl fmt::Display for ProofTrace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}: {}", index, step)?;
        }
        Ok(())
    }
}
