//! Branching.
use partial_ref::{partial, PartialRef};

use log::trace;

use clausal_formula::Var;

use crate::context::{parts::*, Context};
use crate::prop::{clause_status, decide, ClauseStatus};

/// The branching variable: the smallest unassigned variable of a clause that is not yet satisfied.
///
/// Variables are numbered in name order, so this is also the lexicographically smallest name.
pub fn decision_var(ctx: partial!(Context, AssignmentP, ClauseDbP)) -> Option<Var> {
    let assignment = ctx.part(AssignmentP);
    let mut min_var: Option<Var> = None;

    for clause in ctx.part(ClauseDbP).formula().iter() {
        if clause_status(assignment, clause) == ClauseStatus::Satisfied {
            continue;
        }
        for &lit in clause {
            if assignment.lit_value(lit).is_none() && min_var.map_or(true, |min| lit.var() < min) {
                min_var = Some(lit.var());
            }
        }
    }

    min_var
}

/// Make a decision, trying the positive branch first.
///
/// Returns `false` if no decision was made because no unsatisfied clause has an unassigned
/// variable. After a conflict free propagation this means every clause is satisfied.
pub fn make_decision(
    mut ctx: partial!(Context, mut AssignmentP, mut StatsP, mut TrailP, ClauseDbP),
) -> bool {
    match decision_var(ctx.borrow()) {
        Some(var) => {
            trace!("deciding {:?}", var.positive());
            ctx.part_mut(StatsP).decisions += 1;
            decide(ctx.borrow(), var.positive());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use partial_ref::IntoPartialRefMut;

    use crate::context::set_var_count;
    use crate::load::load_clause;
    use crate::prop::enqueue_assignment;

    #[test]
    fn branches_on_smallest_open_variable() {
        let mut ctx = Context::default();
        let mut ctx = ctx.into_partial_ref_mut();
        set_var_count(ctx.borrow(), 4);

        let v: Vec<_> = (0..4).map(Var::from_index).collect();

        load_clause(ctx.borrow(), &[v[0].positive(), v[3].positive()]);
        load_clause(ctx.borrow(), &[v[2].negative(), v[1].negative()]);

        enqueue_assignment(ctx.borrow(), v[0].negative());
        assert_eq!(decision_var(ctx.borrow()), Some(v[1]));

        enqueue_assignment(ctx.borrow(), v[2].negative());
        assert_eq!(decision_var(ctx.borrow()), Some(v[3]));

        assert!(make_decision(ctx.borrow()));
        assert!(ctx.part(AssignmentP).lit_is_true(v[3].positive()));
        assert_eq!(ctx.part(TrailP).current_level(), 1);

        assert!(!make_decision(ctx.borrow()));
        assert_eq!(ctx.part(StatsP).decisions, 1);
    }
}
