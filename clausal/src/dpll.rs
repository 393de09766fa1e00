//! DPLL search.
use partial_ref::{partial, PartialRef};

use log::trace;

use crate::context::{parts::*, Context};
use crate::decision::make_decision;
use crate::prop::{backtrack, propagate};
use crate::pure::eliminate_pure_literals;
use crate::state::SatState;

/// Performs one step of the search.
///
/// A step propagates unit clauses. On a conflict it backtracks into the innermost open branch, or
/// marks the formula unsatisfiable if there is none. Otherwise it assigns pure literals and either
/// branches on a new variable or, when every clause is satisfied, marks the formula satisfiable.
pub fn search_step(
    mut ctx: partial!(
        Context,
        mut AssignmentP,
        mut SolverStateP,
        mut StatsP,
        mut TmpDataP,
        mut TrailP,
        ClauseDbP,
        SolverConfigP,
    ),
) {
    if let Err(conflict) = propagate(ctx.borrow()) {
        ctx.part_mut(StatsP).conflicts += 1;
        trace!(
            "conflict in clause {} at level {}",
            conflict.clause(),
            ctx.part(TrailP).current_level()
        );
        match backtrack(ctx.borrow()) {
            Some(lit) => trace!("backtracked to {:?}", lit),
            None => ctx.part_mut(SolverStateP).sat_state = SatState::Unsat,
        }
        return;
    }

    if ctx.part(SolverConfigP).pure_literals {
        eliminate_pure_literals(ctx.borrow());
    }

    if !make_decision(ctx.borrow()) {
        ctx.part_mut(SolverStateP).sat_state = SatState::Sat;
    }
}

/// Runs search steps until the formula is decided.
pub fn search(
    mut ctx: partial!(
        Context,
        mut AssignmentP,
        mut SolverStateP,
        mut StatsP,
        mut TmpDataP,
        mut TrailP,
        ClauseDbP,
        SolverConfigP,
    ),
) -> SatState {
    while ctx.part(SolverStateP).sat_state == SatState::Unknown {
        search_step(ctx.borrow());
    }
    ctx.part(SolverStateP).sat_state
}
