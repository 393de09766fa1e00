//! Loading a formula into the solver.
use partial_ref::{partial, PartialRef};

use clausal_formula::{CnfFormula, Lit};

use crate::context::{parts::*, Context};
use crate::state::SatState;

/// The clauses searched by the solver.
///
/// Clauses are only added while loading. The search evaluates them under the current partial
/// assignment instead of simplifying them, so backtracking only has to undo assignments.
#[derive(Default)]
pub struct ClauseDb {
    formula: CnfFormula,
}

impl ClauseDb {
    /// Update structures for a new variable count.
    pub fn set_var_count(&mut self, count: usize) {
        self.formula.set_var_count(count);
    }

    /// The loaded clauses, without duplicated literals.
    pub fn formula(&self) -> &CnfFormula {
        &self.formula
    }
}

/// Adds a clause to the current formula.
///
/// Removes duplicated literals and handles empty clauses. Tautological clauses (eg. x v -x v y)
/// are kept, so the search still assigns their variables.
pub fn load_clause(
    mut ctx: partial!(Context, mut ClauseDbP, mut SolverStateP, mut TmpDataP),
    lits: &[Lit],
) {
    if ctx.part(SolverStateP).sat_state == SatState::Unsat {
        return;
    }

    let (tmp_data, mut ctx) = ctx.split_part_mut(TmpDataP);

    let sorted = &mut tmp_data.lits;
    sorted.clear();
    sorted.extend_from_slice(lits);
    sorted.sort_unstable();
    sorted.dedup();

    if sorted.is_empty() {
        ctx.part_mut(SolverStateP).sat_state = SatState::Unsat;
        return;
    }

    ctx.part_mut(ClauseDbP).formula.add_clause(sorted.iter());
}

#[cfg(test)]
mod tests {
    use super::*;

    use partial_ref::IntoPartialRefMut;

    use clausal_formula::Var;

    use crate::context::set_var_count;

    #[test]
    fn merges_duplicates_while_loading() {
        let mut ctx = Context::default();
        let mut ctx = ctx.into_partial_ref_mut();
        set_var_count(ctx.borrow(), 3);

        let a = Var::from_index(0);
        let b = Var::from_index(1);
        let c = Var::from_index(2);

        load_clause(ctx.borrow(), &[c.positive(), a.negative(), c.positive()]);
        load_clause(ctx.borrow(), &[b.positive(), a.negative(), b.negative()]);

        let clauses: Vec<_> = ctx.part(ClauseDbP).formula().iter().collect();
        assert_eq!(
            clauses,
            vec![
                &[a.negative(), c.positive()][..],
                &[a.negative(), b.positive(), b.negative()][..],
            ]
        );
        assert_eq!(ctx.part(SolverStateP).sat_state, SatState::Unknown);

        load_clause(ctx.borrow(), &[]);
        assert_eq!(ctx.part(SolverStateP).sat_state, SatState::Unsat);
    }
}
