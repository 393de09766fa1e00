//! Pure literal elimination.
use partial_ref::{partial, PartialRef};

use log::trace;

use clausal_formula::Lit;

use crate::context::{parts::*, Context};
use crate::prop::{clause_status, enqueue_assignment, ClauseStatus};

/// Assigns true to every pure literal.
///
/// A literal is pure when it occurs unassigned in a clause that is not yet satisfied while its
/// negation occurs unassigned in none of them. Pure literals are collected in a single pass and
/// assigned in variable order.
pub fn eliminate_pure_literals(
    mut ctx: partial!(
        Context,
        mut AssignmentP,
        mut StatsP,
        mut TmpDataP,
        mut TrailP,
        ClauseDbP,
    ),
) {
    let (tmp_data, mut ctx) = ctx.split_part_mut(TmpDataP);
    let (clause_db, mut ctx) = ctx.split_part(ClauseDbP);

    let flags = &mut tmp_data.flags;
    let pure = &mut tmp_data.lits;
    pure.clear();

    {
        let assignment = ctx.part(AssignmentP);
        for clause in clause_db.formula().iter() {
            if clause_status(assignment, clause) == ClauseStatus::Satisfied {
                continue;
            }
            for &lit in clause {
                if assignment.lit_value(lit).is_none() {
                    flags[lit.code()] = true;
                }
            }
        }
    }

    for code in 0..flags.len() {
        if flags[code] && !flags[code ^ 1] {
            pure.push(Lit::from_code(code));
        }
    }

    for flag in flags.iter_mut() {
        *flag = false;
    }

    for &lit in pure.iter() {
        trace!("pure literal {:?}", lit);
        enqueue_assignment(ctx.borrow(), lit);
    }
    ctx.part_mut(StatsP).pure_literals += pure.len() as u64;
}
