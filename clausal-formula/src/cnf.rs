//! Indexed CNF formulas.
use std::cmp::max;
use std::fmt;
use std::iter::Extend;
use std::ops::Range;

use crate::lit::Lit;

/// Clauses over indexed literals, stored back to back in one buffer.
///
/// Behaves like a `Vec<Vec<Lit>>` that can only grow.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    var_count: usize,
    literals: Vec<Lit>,
    clause_ranges: Vec<Range<usize>>,
}

impl CnfFormula {
    pub fn new() -> CnfFormula {
        CnfFormula::default()
    }

    /// One more than the largest variable index seen, or the count set by `set_var_count`.
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Raises the variable count, never lowers it.
    pub fn set_var_count(&mut self, count: usize) {
        self.var_count = max(self.var_count, count)
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clause_ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clause_ranges.is_empty()
    }

    /// Appends a clause, given as owned or borrowed literals.
    pub fn add_clause<L>(&mut self, literals: impl IntoIterator<Item = L>)
    where
        Vec<Lit>: Extend<L>,
    {
        let begin = self.literals.len();
        self.literals.extend(literals);
        let range = begin..self.literals.len();

        if let Some(largest) = self.literals[range.clone()].iter().map(|lit| lit.index()).max() {
            self.set_var_count(largest + 1);
        }

        self.clause_ranges.push(range);
    }

    /// Clauses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &[Lit]> {
        let literals = &self.literals;
        self.clause_ranges
            .iter()
            .map(move |range| &literals[range.clone()])
    }
}

impl fmt::Debug for CnfFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lit::Var;

    #[test]
    fn var_count_follows_largest_index() {
        let a = Var::from_index(0);
        let g = Var::from_index(6);

        let mut formula = CnfFormula::new();
        formula.add_clause(&[a.positive(), g.negative()]);
        formula.add_clause(&[]);
        formula.add_clause(vec![Var::from_index(2).positive()]);

        assert_eq!(formula.var_count(), 7);
        assert_eq!(formula.len(), 3);
        assert_eq!(formula.iter().nth(1), Some(&[][..]));
        assert_eq!(formula.iter().nth(2), Some(&[Var::from_index(2).positive()][..]));

        formula.set_var_count(3);
        assert_eq!(formula.var_count(), 7);
        assert_eq!(format!("{:?}", formula), "[[v0, ~v6], [], [v2]]");
    }
}
