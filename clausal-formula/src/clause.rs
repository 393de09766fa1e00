//! First-order clauses.
use std::collections::{btree_set, BTreeSet};
use std::fmt;
use std::iter::FromIterator;

use crate::literal::Literal;

/// A disjunction of literals, stored as a set.
///
/// Since the literals are kept in a canonical order, equality and hashing of clauses are
/// independent of the order literals were added in. A clause is its own signature.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The empty clause.
    pub fn new() -> Clause {
        Clause::default()
    }

    /// Adds a literal, returns whether it was not present before.
    pub fn insert(&mut self, lit: Literal) -> bool {
        self.literals.insert(lit)
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.literals.contains(lit)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether this is the empty clause, i.e. a contradiction.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literals in canonical order.
    pub fn iter(&self) -> btree_set::Iter<Literal> {
        self.literals.iter()
    }

    /// Literals other than `lit`, in canonical order.
    pub fn without<'a>(&'a self, lit: &'a Literal) -> impl Iterator<Item = &'a Literal> {
        self.literals.iter().filter(move |other| *other != lit)
    }

    /// Names of all variables occurring in the clause.
    pub fn vars(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        for lit in self.literals.iter() {
            lit.collect_vars(&mut vars);
        }
        vars
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Clause {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = btree_set::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", lit)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.literals.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::term::Term;

    #[test]
    fn order_independent_signature() {
        let p = Literal::positive("P", vec![Term::var("x")]);
        let q = Literal::negative("Q", vec![Term::constant("A")]);

        let a: Clause = vec![p.clone(), q.clone(), p.clone()].into_iter().collect();
        let b: Clause = vec![q.clone(), p.clone()].into_iter().collect();

        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.to_string(), "[P(x), ~Q(A)]");
        assert_eq!(a.without(&p).collect::<Vec<_>>(), vec![&q]);
        assert!(Clause::new().is_empty());
    }
}
