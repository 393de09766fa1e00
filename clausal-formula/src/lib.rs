//! Terms, literals, clauses and formula trees used by the clausal reasoning core.
//!
//! Two families of types live here. First-order [`Term`]s, [`Literal`]s and [`Clause`]s together
//! with [`Substitution`]s are used by unification and resolution. Propositional formula trees
//! ([`Expr`]), named literals ([`PropLit`], [`PropClause`]) and their indexed counterparts
//! ([`Var`], [`Lit`], [`CnfFormula`]) are used by CNF conversion and the DPLL solver.

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! plit {
    ($x:expr) => {
        $crate::test::prop_lit($x)
    };
}

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! pclause {
    ( $( $x:expr ),* $(,)? ) => {
        vec![ $( $crate::plit!( $x ) ),* ]
            .into_iter()
            .collect::<$crate::PropClause>()
    };
}

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! pclauses {
    ( $( $( $x:expr ),* );* ; ) => { vec![ $( $crate::pclause![ $( $x ),* ] ),* ] };
}

pub mod clause;
pub mod cnf;
pub mod expr;
pub mod lit;
pub mod literal;
pub mod names;
pub mod prop;
pub mod subst;
pub mod term;


pub use clause::Clause;
pub use cnf::CnfFormula;
pub use expr::Expr;
pub use lit::{Lit, Var};
pub use literal::Literal;
pub use names::VarNames;
pub use prop::{PropClause, PropLit};
pub use subst::Substitution;
pub use term::{is_variable, Term};
