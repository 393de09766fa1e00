//! Propositional formula trees.
use std::collections::BTreeSet;
use std::fmt;

/// A propositional formula before conversion to CNF.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    Var(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Expr, right: Expr) -> Expr {
        Expr::Implies(Box::new(left), Box::new(right))
    }

    /// Truth value under a total valuation of the formula's variables.
    pub fn eval(&self, value: &impl Fn(&str) -> bool) -> bool {
        match self {
            Expr::Var(name) => value(name),
            Expr::Not(inner) => !inner.eval(value),
            Expr::And(left, right) => left.eval(value) && right.eval(value),
            Expr::Or(left, right) => left.eval(value) || right.eval(value),
            Expr::Implies(left, right) => !left.eval(value) || right.eval(value),
        }
    }

    /// Names of all variables, sorted and free of duplicates.
    pub fn vars(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Var(name) => {
                    vars.insert(&name[..]);
                }
                Expr::Not(inner) => stack.push(inner),
                Expr::And(left, right) | Expr::Or(left, right) | Expr::Implies(left, right) => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        vars
    }
}

/// Fully parenthesized infix notation.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => f.write_str(name),
            Expr::Not(inner) => write!(f, "~{}", inner),
            Expr::And(left, right) => write!(f, "({} & {})", left, right),
            Expr::Or(left, right) => write!(f, "({} | {})", left, right),
            Expr::Implies(left, right) => write!(f, "({} -> {})", left, right),
        }
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;

    use proptest::prelude::*;

    /// Formula trees over the variables `v0` .. `v{vars - 1}`.
    pub fn expr(vars: usize, depth: u32) -> impl Strategy<Value = Expr> {
        let leaf = (0..vars).prop_map(|index| Expr::var(format!("v{}", index)));
        leaf.prop_recursive(depth, 64, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(Expr::not),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::and(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::or(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| Expr::implies(l, r)),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implication_truth_table() {
        let formula = Expr::implies(Expr::var("p"), Expr::var("q"));

        assert!(formula.eval(&|_| true));
        assert!(formula.eval(&|_| false));
        assert!(formula.eval(&|name| name == "q"));
        assert!(!formula.eval(&|name| name == "p"));
    }

    #[test]
    fn collects_sorted_vars() {
        let formula = Expr::and(
            Expr::or(Expr::var("r"), Expr::not(Expr::var("p"))),
            Expr::implies(Expr::var("p"), Expr::var("q")),
        );

        assert_eq!(formula.vars().into_iter().collect::<Vec<_>>(), vec!["p", "q", "r"]);
        assert_eq!(formula.to_string(), "((r | ~p) & (p -> q))");
    }
}
