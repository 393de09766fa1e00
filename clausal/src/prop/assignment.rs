//! Partial assignment and the trail of assigned literals.
use partial_ref::{partial, PartialRef};

use clausal_formula::{Lit, Var};

use crate::context::{AssignmentP, Context, TrailP};

/// Current partial assignment.
#[derive(Default)]
pub struct Assignment {
    assignment: Vec<Option<bool>>,
}

impl Assignment {
    /// Update structures for a new variable count.
    pub fn set_var_count(&mut self, count: usize) {
        self.assignment.resize(count, None);
    }

    /// Current partial assignment as slice.
    pub fn assignment(&self) -> &[Option<bool>] {
        &self.assignment
    }

    pub fn var_value(&self, var: Var) -> Option<bool> {
        self.assignment[var.index()]
    }

    pub fn lit_value(&self, lit: Lit) -> Option<bool> {
        self.assignment[lit.index()].map(|b| b ^ lit.is_negative())
    }

    pub fn lit_is_true(&self, lit: Lit) -> bool {
        self.assignment[lit.index()] == Some(lit.is_positive())
    }

    pub fn assign_lit(&mut self, lit: Lit) {
        self.assignment[lit.index()] = lit.is_positive().into()
    }
}

/// A branching point of the search.
#[derive(Copy, Clone, Debug)]
struct Decision {
    /// The literal assigned when branching.
    lit: Lit,
    /// Length of the trail before `lit` was assigned.
    trail_len: usize,
    /// Whether `lit` is already the second branch.
    flipped: bool,
}

/// Decision and propagation history.
#[derive(Default)]
pub struct Trail {
    /// Stack of all assigned literals.
    trail: Vec<Lit>,
    /// Open decisions, innermost last.
    decisions: Vec<Decision>,
}

impl Trail {
    /// Assigned literals in assignment order.
    pub fn trail(&self) -> &[Lit] {
        &self.trail
    }

    /// Current decision level.
    pub fn current_level(&self) -> usize {
        self.decisions.len()
    }
}

/// Assigns true to a literal and records it on the trail.
///
/// The literal has to be unassigned when calling this.
pub fn enqueue_assignment(mut ctx: partial!(Context, mut AssignmentP, mut TrailP), lit: Lit) {
    let assignment = ctx.part_mut(AssignmentP);
    debug_assert!(assignment.lit_value(lit) == None);

    assignment.assign_lit(lit);
    ctx.part_mut(TrailP).trail.push(lit);
}

/// Starts a new decision level by assigning true to an unassigned literal.
pub fn decide(mut ctx: partial!(Context, mut AssignmentP, mut TrailP), lit: Lit) {
    let trail = ctx.part_mut(TrailP);
    let trail_len = trail.trail.len();
    trail.decisions.push(Decision {
        lit,
        trail_len,
        flipped: false,
    });
    enqueue_assignment(ctx.borrow(), lit);
}

/// Backtracks to the innermost decision whose second branch is still open and takes it.
///
/// Undoes every assignment made since that decision and assigns its literal false instead.
/// Returns the newly assigned literal, or `None` when every branch has been exhausted. Exhausted
/// decisions are removed, assignments made before the first decision are kept.
pub fn backtrack(mut ctx: partial!(Context, mut AssignmentP, mut TrailP)) -> Option<Lit> {
    let (assignment, mut ctx) = ctx.split_part_mut(AssignmentP);
    let trail = ctx.part_mut(TrailP);

    while let Some(decision) = trail.decisions.pop() {
        for &lit in &trail.trail[decision.trail_len..] {
            assignment.assignment[lit.index()] = None;
        }
        trail.trail.truncate(decision.trail_len);

        if !decision.flipped {
            let lit = !decision.lit;
            trail.decisions.push(Decision {
                lit,
                trail_len: decision.trail_len,
                flipped: true,
            });
            assignment.assign_lit(lit);
            trail.trail.push(lit);
            return Some(lit);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use partial_ref::IntoPartialRefMut;

    use crate::context::set_var_count;

    #[test]
    fn backtrack_flips_innermost_open_decision() {
        let mut ctx = Context::default();
        let mut ctx = ctx.into_partial_ref_mut();
        set_var_count(ctx.borrow(), 4);

        let v: Vec<_> = (0..4).map(Var::from_index).collect();

        enqueue_assignment(ctx.borrow(), v[0].negative());
        decide(ctx.borrow(), v[1].positive());
        enqueue_assignment(ctx.borrow(), v[2].positive());
        decide(ctx.borrow(), v[3].positive());

        assert_eq!(ctx.part(TrailP).current_level(), 2);

        assert_eq!(backtrack(ctx.borrow()), Some(v[3].negative()));
        assert_eq!(
            ctx.part(TrailP).trail(),
            &[v[0].negative(), v[1].positive(), v[2].positive(), v[3].negative()]
        );

        // The second branch of v3 is exhausted, so this flips v1.
        assert_eq!(backtrack(ctx.borrow()), Some(v[1].negative()));
        assert_eq!(ctx.part(TrailP).trail(), &[v[0].negative(), v[1].negative()]);
        assert_eq!(ctx.part(TrailP).current_level(), 1);
        assert_eq!(ctx.part(AssignmentP).var_value(v[2]), None);
        assert_eq!(ctx.part(AssignmentP).var_value(v[3]), None);

        assert_eq!(backtrack(ctx.borrow()), None);
        assert_eq!(ctx.part(TrailP).trail(), &[v[0].negative()]);
        assert!(ctx.part(AssignmentP).lit_is_true(v[0].negative()));
    }
}
