//! Propositional satisfiability solver.
use partial_ref::{IntoPartialRef, IntoPartialRefMut, PartialRef};

use log::info;
use thiserror::Error;

use clausal_formula::{PropClause, PropLit, Var, VarNames};
use clausal_syntax::{parse_prop_clause, ParserError};

use crate::config::{ConfigError, SolverConfig, SolverConfigUpdate};
use crate::context::{set_var_count, AssignmentP, Context, SolverConfigP, SolverStateP, StatsP};
use crate::dpll::search;
use crate::load::load_clause;
use crate::model::Model;
use crate::state::{SatState, SolverStats};

/// Possible errors while adding clauses to the solver.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Invalid literal: {}", source)]
    Parse {
        #[from]
        source: ParserError,
    },
}

/// Outcome of a satisfiability check.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Verdict {
    Sat(Model),
    Unsat,
}

impl Verdict {
    pub fn is_sat(&self) -> bool {
        match self {
            Verdict::Sat(_) => true,
            Verdict::Unsat => false,
        }
    }

    /// The satisfying assignment, if there is one.
    pub fn model(&self) -> Option<&Model> {
        match self {
            Verdict::Sat(model) => Some(model),
            Verdict::Unsat => None,
        }
    }
}

/// A DPLL satisfiability solver.
///
/// Clauses are copied into the solver when added. Each call to [`solve`](Solver::solve) searches
/// the clauses added so far from scratch.
#[derive(Default)]
pub struct Solver {
    config: SolverConfig,
    clauses: Vec<PropClause>,
    names: VarNames,
    ctx: Box<Context>,
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Solver {
        Solver::default()
    }

    /// Change the solver configuration.
    pub fn config(&mut self, update: &SolverConfigUpdate) -> Result<(), ConfigError> {
        update.apply(&mut self.config)
    }

    /// Add a clause given as literals.
    pub fn add_clause(&mut self, literals: &[PropLit]) {
        self.clauses.push(literals.iter().cloned().collect());
    }

    /// Add clauses.
    pub fn add_clauses(&mut self, clauses: &[PropClause]) {
        self.clauses.extend_from_slice(clauses);
    }

    /// Parses and adds a clause given as literal tokens like `p` or `~q`.
    ///
    /// Nothing is added if a token is malformed.
    pub fn add_clause_strs<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), SolverError> {
        let clause = parse_prop_clause(tokens)?;
        self.clauses.push(clause);
        Ok(())
    }

    /// Check the satisfiability of the clauses added so far.
    pub fn solve(&mut self) -> bool {
        self.names = VarNames::from_names(
            self.clauses
                .iter()
                .flat_map(|clause| clause.iter().map(|lit| lit.name())),
        );
        self.ctx = Box::new(Context::default());

        let names = &self.names;
        let mut ctx = self.ctx.into_partial_ref_mut();
        *ctx.part_mut(SolverConfigP) = self.config.clone();
        set_var_count(ctx.borrow(), names.len());

        let mut lits = vec![];
        for clause in self.clauses.iter() {
            lits.clear();
            lits.extend(clause.iter().flat_map(|lit| names.lit(lit)));
            load_clause(ctx.borrow(), &lits);
        }

        info!(
            "Solving {} clauses over {} variables",
            self.clauses.len(),
            names.len()
        );

        let state = search(ctx.borrow());
        let stats = ctx.part(StatsP);

        info!(
            "{} after {} decisions, {} conflicts, {} propagations and {} pure literals",
            if state == SatState::Sat { "SAT" } else { "UNSAT" },
            stats.decisions,
            stats.conflicts,
            stats.propagations,
            stats.pure_literals
        );

        state == SatState::Sat
    }

    /// Satisfying assignment found by the last call to [`solve`](Solver::solve).
    pub fn model(&self) -> Option<Model> {
        let ctx = self.ctx.into_partial_ref();
        if ctx.part(SolverStateP).sat_state == SatState::Sat {
            Some(
                ctx.part(AssignmentP)
                    .assignment()
                    .iter()
                    .enumerate()
                    .flat_map(|(index, value)| {
                        value.map(|value| (self.names.name(Var::from_index(index)).to_owned(), value))
                    })
                    .collect(),
            )
        } else {
            None
        }
    }

    /// Counters of the last call to [`solve`](Solver::solve).
    pub fn stats(&self) -> SolverStats {
        let ctx = self.ctx.into_partial_ref();
        *ctx.part(StatsP)
    }

    /// Solves and returns the outcome together with the model.
    pub fn verdict(&mut self) -> Verdict {
        if self.solve() {
            Verdict::Sat(self.model().unwrap_or_default())
        } else {
            Verdict::Unsat
        }
    }
}

/// Decides the satisfiability of a clause set.
pub fn decide(clauses: &[PropClause]) -> Verdict {
    let mut solver = Solver::new();
    solver.add_clauses(clauses);
    solver.verdict()
}

/// Decides the satisfiability of clauses given as literal tokens like `p` or `~q`.
///
/// Fails before searching if any token is malformed.
pub fn decide_strs<C, S>(clauses: impl IntoIterator<Item = C>) -> Result<Verdict, SolverError>
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut solver = Solver::new();
    for clause in clauses {
        solver.add_clause_strs(clause.as_ref())?;
    }
    Ok(solver.verdict())
}
