//! Unit propagation.
use partial_ref::{partial, PartialRef};

use log::trace;

use clausal_formula::Lit;

use crate::context::{parts::*, Context};

pub mod assignment;

pub use assignment::{backtrack, decide, enqueue_assignment, Assignment, Trail};

/// A clause whose literals are all false under the current assignment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    clause: usize,
}

impl Conflict {
    /// Index of the falsified clause in load order.
    pub fn clause(self) -> usize {
        self.clause
    }
}

/// Status of a single clause under a partial assignment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ClauseStatus {
    Satisfied,
    Falsified,
    /// No true literal and exactly one unassigned literal.
    Unit(Lit),
    /// No true literal and at least two unassigned literals.
    Open,
}

/// Evaluates a clause under the current assignment.
pub fn clause_status(assignment: &Assignment, clause: &[Lit]) -> ClauseStatus {
    let mut unassigned = None;
    let mut unassigned_count = 0;
    for &lit in clause {
        match assignment.lit_value(lit) {
            Some(true) => return ClauseStatus::Satisfied,
            Some(false) => (),
            None => {
                unassigned_count += 1;
                unassigned = Some(lit);
            }
        }
    }
    match (unassigned_count, unassigned) {
        (0, _) => ClauseStatus::Falsified,
        (1, Some(lit)) => ClauseStatus::Unit(lit),
        _ => ClauseStatus::Open,
    }
}

/// Propagate all unit clauses until a fixpoint or a conflict is reached.
///
/// Clauses are scanned in load order. A unit literal is assigned as soon as it is found, so later
/// clauses of the same scan already see it.
pub fn propagate(
    mut ctx: partial!(Context, mut AssignmentP, mut StatsP, mut TrailP, ClauseDbP),
) -> Result<(), Conflict> {
    let (clause_db, mut ctx) = ctx.split_part(ClauseDbP);

    loop {
        let mut propagated = false;

        for (index, clause) in clause_db.formula().iter().enumerate() {
            match clause_status(ctx.part(AssignmentP), clause) {
                ClauseStatus::Falsified => return Err(Conflict { clause: index }),
                ClauseStatus::Unit(lit) => {
                    trace!("propagating {:?} from clause {}", lit, index);
                    enqueue_assignment(ctx.borrow(), lit);
                    ctx.part_mut(StatsP).propagations += 1;
                    propagated = true;
                }
                ClauseStatus::Satisfied | ClauseStatus::Open => (),
            }
        }

        if !propagated {
            return Ok(());
        }
    }
}
