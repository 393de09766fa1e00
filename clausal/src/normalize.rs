//! Conversion of formula trees to conjunctive normal form.
//!
//! The conversion is the textbook rewrite pipeline:
//!
//! 1. [`eliminate_implications`]: `a -> b` becomes `~a | b`.
//! 2. [`push_negation`]: negations are moved inward until they only apply to variables.
//! 3. [`distribute`]: disjunction is distributed over conjunction.
//! 4. [`collect_clauses`]: the conjunction of disjunctions is flattened into clauses.
//!
//! No auxiliary variables are introduced, so the output can be exponentially larger than the
//! input.
use log::debug;
use thiserror::Error;

use clausal_formula::{Expr, PropClause, PropLit};

/// Possible errors while collecting clauses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A disjunct that is neither a variable nor a negated variable.
    #[error("Invalid CNF literal: {}", expr)]
    InvalidLiteral { expr: String },
}

/// Converts a formula to an equivalent list of clauses.
///
/// Clauses are listed in the left to right order of the conjuncts of the distributed formula.
pub fn normalize(formula: &Expr) -> Result<Vec<PropClause>, NormalizeError> {
    let cnf = distribute(push_negation(eliminate_implications(formula.clone())));
    let clauses = collect_clauses(&cnf)?;
    debug!("Normalized {} into {} clauses", formula, clauses.len());
    Ok(clauses)
}

/// Replaces every implication `a -> b` with `~a | b`.
pub fn eliminate_implications(expr: Expr) -> Expr {
    match expr {
        Expr::Var(_) => expr,
        Expr::Not(inner) => Expr::not(eliminate_implications(*inner)),
        Expr::And(left, right) => Expr::and(
            eliminate_implications(*left),
            eliminate_implications(*right),
        ),
        Expr::Or(left, right) => Expr::or(
            eliminate_implications(*left),
            eliminate_implications(*right),
        ),
        Expr::Implies(left, right) => Expr::or(
            Expr::not(eliminate_implications(*left)),
            eliminate_implications(*right),
        ),
    }
}

/// Moves negations inward using De Morgan's laws and removes double negations.
///
/// In the result negations only apply to variables. Implications that were not eliminated before
/// are rewritten on the way.
pub fn push_negation(expr: Expr) -> Expr {
    match expr {
        Expr::Var(_) => expr,
        Expr::Not(inner) => negate(*inner),
        Expr::And(left, right) => Expr::and(push_negation(*left), push_negation(*right)),
        Expr::Or(left, right) => Expr::or(push_negation(*left), push_negation(*right)),
        Expr::Implies(left, right) => Expr::or(negate(*left), push_negation(*right)),
    }
}

/// Negation normal form of `~expr`.
fn negate(expr: Expr) -> Expr {
    match expr {
        Expr::Var(_) => Expr::not(expr),
        Expr::Not(inner) => push_negation(*inner),
        Expr::And(left, right) => Expr::or(negate(*left), negate(*right)),
        Expr::Or(left, right) => Expr::and(negate(*left), negate(*right)),
        Expr::Implies(left, right) => Expr::and(push_negation(*left), negate(*right)),
    }
}

/// Distributes disjunction over conjunction.
///
/// Expects a formula without implications and with negations only applied to variables. The
/// result is a conjunction of disjunctions of literals.
pub fn distribute(expr: Expr) -> Expr {
    match expr {
        Expr::And(left, right) => Expr::and(distribute(*left), distribute(*right)),
        Expr::Or(left, right) => distribute_or(distribute(*left), distribute(*right)),
        _ => expr,
    }
}

/// Disjunction of two distributed formulas.
fn distribute_or(left: Expr, right: Expr) -> Expr {
    match (left, right) {
        (Expr::And(a, b), right) => Expr::and(
            distribute_or(*a, right.clone()),
            distribute_or(*b, right),
        ),
        (left, Expr::And(a, b)) => Expr::and(
            distribute_or(left.clone(), *a),
            distribute_or(left, *b),
        ),
        (left, right) => Expr::or(left, right),
    }
}

/// Flattens a conjunction of disjunctions of literals into clauses.
///
/// Fails if a disjunct is not a variable or a negated variable.
pub fn collect_clauses(expr: &Expr) -> Result<Vec<PropClause>, NormalizeError> {
    let mut conjuncts = vec![];
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        match expr {
            Expr::And(left, right) => {
                stack.push(right);
                stack.push(left);
            }
            _ => conjuncts.push(expr),
        }
    }

    conjuncts
        .into_iter()
        .map(|conjunct| {
            let mut clause = PropClause::new();
            collect_literals(conjunct, &mut clause)?;
            Ok(clause)
        })
        .collect()
}

fn collect_literals(expr: &Expr, clause: &mut PropClause) -> Result<(), NormalizeError> {
    match expr {
        Expr::Var(name) => {
            clause.insert(PropLit::positive(name.clone()));
        }
        Expr::Not(inner) => match &**inner {
            Expr::Var(name) => {
                clause.insert(PropLit::negative(name.clone()));
            }
            _ => return Err(invalid_literal(expr)),
        },
        Expr::Or(left, right) => {
            collect_literals(left, clause)?;
            collect_literals(right, clause)?;
        }
        Expr::And(..) | Expr::Implies(..) => return Err(invalid_literal(expr)),
    }
    Ok(())
}

fn invalid_literal(expr: &Expr) -> NormalizeError {
    NormalizeError::InvalidLiteral {
        expr: expr.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use clausal_formula::expr::strategy::expr;
    use clausal_formula::{pclause, pclauses};

    fn var(name: &str) -> Expr {
        Expr::var(name)
    }

    #[test]
    fn implication() -> Result<(), NormalizeError> {
        let clauses = normalize(&Expr::implies(var("p"), var("q")))?;
        assert_eq!(clauses, vec![pclause!["~p", "q"]]);
        Ok(())
    }

    #[test]
    fn de_morgan() -> Result<(), NormalizeError> {
        let formula = Expr::not(Expr::or(var("p"), Expr::not(Expr::not(var("q")))));
        assert_eq!(normalize(&formula)?, pclauses!["~p"; "~q";]);

        let formula = Expr::not(Expr::and(var("p"), var("q")));
        assert_eq!(normalize(&formula)?, pclauses!["~p", "~q";]);
        Ok(())
    }

    #[test]
    fn distribution_order() -> Result<(), NormalizeError> {
        let formula = Expr::or(
            Expr::and(var("a"), var("b")),
            Expr::and(var("c"), var("d")),
        );
        assert_eq!(
            normalize(&formula)?,
            pclauses![
                "a", "c";
                "a", "d";
                "b", "c";
                "b", "d";
            ]
        );
        Ok(())
    }

    #[test]
    fn negated_implication() {
        let formula = Expr::not(Expr::implies(var("p"), var("q")));
        assert_eq!(
            push_negation(formula.clone()),
            push_negation(eliminate_implications(formula))
        );
    }

    #[test]
    fn rejects_non_literal_disjuncts() {
        let nested = Expr::or(var("p"), Expr::and(var("q"), var("r")));
        assert_eq!(
            collect_clauses(&nested),
            Err(NormalizeError::InvalidLiteral {
                expr: "(q & r)".to_owned()
            })
        );

        let double = Expr::not(Expr::not(var("p")));
        match collect_clauses(&double) {
            Err(NormalizeError::InvalidLiteral { expr }) => assert_eq!(expr, "~~p"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn duplicated_literals_merge() -> Result<(), NormalizeError> {
        let formula = Expr::or(var("p"), Expr::or(var("q"), var("p")));
        assert_eq!(normalize(&formula)?, pclauses!["p", "q";]);
        Ok(())
    }

    proptest! {
        #[test]
        fn stages_preserve_meaning(formula in expr(4, 4), valuation in any::<[bool; 4]>()) {
            let value = |name: &str| valuation[name[1..].parse::<usize>().unwrap()];
            let expected = formula.eval(&value);

            let stage_1 = eliminate_implications(formula);
            prop_assert_eq!(stage_1.eval(&value), expected);
            let stage_2 = push_negation(stage_1);
            prop_assert_eq!(stage_2.eval(&value), expected);
            let stage_3 = distribute(stage_2);
            prop_assert_eq!(stage_3.eval(&value), expected);
        }
    }
}
