//! Satisfying assignments.
use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::iter::FromIterator;

use clausal_formula::{PropClause, PropLit};

/// A satisfying assignment, mapping variable names to values.
///
/// The assignment may be partial. Variables that were never assigned during the search can take
/// either value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: BTreeMap<String, bool>,
}

impl Model {
    /// Value of a variable, `None` if it is unassigned.
    pub fn value(&self, name: &str) -> Option<bool> {
        self.values.get(name).cloned()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Assignments in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(name, &value)| (&name[..], value))
    }

    pub fn lit_is_true(&self, lit: &PropLit) -> bool {
        self.value(lit.name()) == Some(lit.is_positive())
    }

    /// Whether some literal of the clause is true.
    pub fn satisfies(&self, clause: &PropClause) -> bool {
        clause.iter().any(|lit| self.lit_is_true(lit))
    }
}

impl FromIterator<(String, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Model {
        Model {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Model {
    type Item = (String, bool);
    type IntoIter = btree_map::IntoIter<String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}
