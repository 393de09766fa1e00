//! Clausal reasoning: CNF conversion, DPLL satisfiability checking and first-order refutation by
//! binary resolution.
//!
//! * [`normalize`](normalize::normalize) rewrites a propositional [`Expr`] into an equivalent
//!   list of clauses.
//! * [`Solver`] decides the satisfiability of propositional clauses using the
//!   [DPLL][dpll] procedure: unit propagation, pure literal elimination and chronological
//!   backtracking.
//! * [`Resolver`] searches for a refutation of first-order clauses by saturating them under
//!   binary resolution, using [Robinson unification][unification]. Refutations come with a
//!   [`ProofTrace`] that [`check_refutation`] verifies independently.
//!
//! [dpll]: https://en.wikipedia.org/wiki/DPLL_algorithm
//! [unification]: https://en.wikipedia.org/wiki/Unification_(computer_science)

pub mod checker;
pub mod config;
pub mod model;
pub mod normalize;
pub mod proof;
pub mod resolution;
pub mod solver;
pub mod unify;

mod context;
mod decision;
mod dpll;
mod load;
mod prop;
mod pure;
mod state;
mod tmp;

pub use clausal_formula::{
    Clause, CnfFormula, Expr, Lit, Literal, PropClause, PropLit, Substitution, Term, Var,
};

pub use checker::{check_refutation, CheckerError};
pub use config::{ConfigError, SolverConfig, SolverConfigUpdate};
pub use model::Model;
pub use normalize::{normalize, NormalizeError};
pub use proof::{ProofStep, ProofTrace};
pub use resolution::{refute, Refutation, Resolver};
pub use solver::{decide, decide_strs, Solver, SolverError, Verdict};
pub use state::SolverStats;
pub use unify::{unify_literals, unify_terms, Unifier};

pub mod syntax {
    //! Parser for the string encoding of terms, literals and clauses.
    pub use clausal_syntax::*;
}
