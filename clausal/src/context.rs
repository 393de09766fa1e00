//! Central DPLL search data structure.
use partial_ref::{part, partial, PartialRef, PartialRefTarget};

use crate::config::SolverConfig;
use crate::load::ClauseDb;
use crate::prop::{Assignment, Trail};
use crate::state::{SolverState, SolverStats};
use crate::tmp::TmpData;

/// Part declarations for the [`Context`] struct.
pub mod parts {
    use super::*;

    part!(pub AssignmentP: Assignment);
    part!(pub ClauseDbP: ClauseDb);
    part!(pub SolverConfigP: SolverConfig);
    part!(pub SolverStateP: SolverState);
    part!(pub StatsP: SolverStats);
    part!(pub TmpDataP: TmpData);
    part!(pub TrailP: Trail);
}

pub use parts::*;

/// Central DPLL search data structure.
///
/// This struct contains all data kept during a search. Functions operating on multiple fields of
/// the context use partial references provided by the `partial_ref` crate, which documents the
/// data dependencies of each step.
#[derive(PartialRefTarget, Default)]
pub struct Context {
    #[part(AssignmentP)]
    assignment: Assignment,
    #[part(ClauseDbP)]
    clause_db: ClauseDb,
    #[part(SolverConfigP)]
    solver_config: SolverConfig,
    #[part(SolverStateP)]
    solver_state: SolverState,
    #[part(StatsP)]
    stats: SolverStats,
    #[part(TmpDataP)]
    tmp_data: TmpData,
    #[part(TrailP)]
    trail: Trail,
}

/// Update structures for a new variable count.
pub fn set_var_count(
    mut ctx: partial!(Context, mut AssignmentP, mut ClauseDbP, mut TmpDataP),
    count: usize,
) {
    ctx.part_mut(AssignmentP).set_var_count(count);
    ctx.part_mut(ClauseDbP).set_var_count(count);
    ctx.part_mut(TmpDataP).set_var_count(count);
}
