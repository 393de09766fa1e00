//! Named propositional literals and clauses.
use std::collections::{btree_set, BTreeSet};
use std::fmt;
use std::iter::FromIterator;
use std::ops;

/// A propositional variable name together with a polarity.
///
/// Literals order by name first, the negative literal of a name sorting before the positive one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropLit {
    name: String,
    positive: bool,
}

impl PropLit {
    pub fn new(name: impl Into<String>, positive: bool) -> PropLit {
        PropLit {
            name: name.into(),
            positive,
        }
    }

    pub fn positive(name: impl Into<String>) -> PropLit {
        PropLit::new(name, true)
    }

    pub fn negative(name: impl Into<String>) -> PropLit {
        PropLit::new(name, false)
    }

    /// Name of the literal's variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// The complementary literal.
    pub fn negated(&self) -> PropLit {
        PropLit::new(self.name.clone(), !self.positive)
    }
}

impl ops::Not for PropLit {
    type Output = PropLit;

    fn not(mut self) -> PropLit {
        self.positive = !self.positive;
        self
    }
}

/// Uses the `~name` token encoding.
impl fmt::Display for PropLit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.positive {
            f.write_str("~")?;
        }
        f.write_str(&self.name)
    }
}

impl fmt::Debug for PropLit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

/// A disjunction of named propositional literals, stored as a set.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropClause {
    literals: BTreeSet<PropLit>,
}

impl PropClause {
    pub fn new() -> PropClause {
        PropClause::default()
    }

    /// Adds a literal, returns whether it was not present before.
    pub fn insert(&mut self, lit: PropLit) -> bool {
        self.literals.insert(lit)
    }

    pub fn contains(&self, lit: &PropLit) -> bool {
        self.literals.contains(lit)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether this is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the clause contains a literal and its complement.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|lit| lit.is_positive() && self.literals.contains(&lit.negated()))
    }

    /// Literals in ascending order.
    pub fn iter(&self) -> btree_set::Iter<PropLit> {
        self.literals.iter()
    }

    /// Evaluates the clause under a (possibly partial) valuation.
    ///
    /// Returns `None` if no literal is true and some literal is unassigned.
    pub fn eval(&self, mut value: impl FnMut(&str) -> Option<bool>) -> Option<bool> {
        let mut unknown = false;
        for lit in self.literals.iter() {
            match value(lit.name()) {
                Some(v) if v == lit.is_positive() => return Some(true),
                Some(_) => (),
                None => unknown = true,
            }
        }
        if unknown {
            None
        } else {
            Some(false)
        }
    }
}

impl FromIterator<PropLit> for PropClause {
    fn from_iter<I: IntoIterator<Item = PropLit>>(iter: I) -> PropClause {
        PropClause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropClause {
    type Item = &'a PropLit;
    type IntoIter = btree_set::Iter<'a, PropLit>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for PropClause {
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

impl fmt::Debug for PropClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.literals.iter()).finish()
    }
}
