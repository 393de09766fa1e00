//! First-order literals.
use std::collections::BTreeSet;
use std::fmt;
use std::ops;

use crate::term::{write_args, Term};

/// A predicate applied to argument terms, with a polarity.
///
/// Literals order by predicate, then arguments, then polarity with the negative literal first.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    predicate: String,
    args: Vec<Term>,
    positive: bool,
}

impl Literal {
    pub fn new(positive: bool, predicate: impl Into<String>, args: Vec<Term>) -> Literal {
        Literal {
            predicate: predicate.into(),
            args,
            positive,
        }
    }

    pub fn positive(predicate: impl Into<String>, args: Vec<Term>) -> Literal {
        Literal::new(true, predicate, args)
    }

    pub fn negative(predicate: impl Into<String>, args: Vec<Term>) -> Literal {
        Literal::new(false, predicate, args)
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The same atom with the opposite polarity.
    pub fn negated(&self) -> Literal {
        Literal::new(!self.positive, self.predicate.clone(), self.args.clone())
    }

    /// Same predicate and arity, different polarity.
    ///
    /// This does not compare arguments, see `unify_literals` for that.
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.positive != other.positive
            && self.predicate == other.predicate
            && self.args.len() == other.args.len()
    }

    /// A literal with the same predicate and polarity and mapped arguments.
    pub fn map_args(&self, f: impl FnMut(&Term) -> Term) -> Literal {
        Literal::new(
            self.positive,
            self.predicate.clone(),
            self.args.iter().map(f).collect(),
        )
    }

    /// Adds the names of all variables in this literal to `vars`.
    pub fn collect_vars<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        for arg in self.args.iter() {
            arg.collect_vars(vars);
        }
    }
}

impl ops::Not for Literal {
    type Output = Literal;

    fn not(mut self) -> Literal {
        self.positive = !self.positive;
        self
    }
}

/// Uses the `~predicate(arg,...)` encoding, omitting the parentheses of nullary predicates.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.positive {
            f.write_str("~")?;
        }
        f.write_str(&self.predicate)?;
        if !self.args.is_empty() {
            write_args(f, &self.args)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
