//! Mapping between propositional variable names and indexed variables.
use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::lit::{Lit, Var};
use crate::prop::PropLit;

/// Bidirectional table between variable names and [`Var`]s.
///
/// Variables are numbered in ascending name order, so comparing variables compares their names.
#[derive(Default, Clone, Debug)]
pub struct VarNames {
    names: Vec<String>,
    vars: FxHashMap<String, Var>,
}

impl VarNames {
    /// Numbers the given names, ignoring duplicates.
    pub fn from_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> VarNames {
        let sorted: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_owned())
            .collect();

        let mut table = VarNames::default();
        for name in sorted {
            let var = Var::from_index(table.names.len());
            table.vars.insert(name.clone(), var);
            table.names.push(name);
        }
        table
    }

    /// Number of named variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn var(&self, name: &str) -> Option<Var> {
        self.vars.get(name).cloned()
    }

    /// Name of an indexed variable.
    ///
    /// Panics if the variable was not created by this table.
    pub fn name(&self, var: Var) -> &str {
        &self.names[var.index()]
    }

    /// Indexed literal for a named literal, if its name is known.
    pub fn lit(&self, lit: &PropLit) -> Option<Lit> {
        self.var(lit.name()).map(|var| var.lit(lit.is_positive()))
    }

    /// Named literal for an indexed literal.
    pub fn prop_lit(&self, lit: Lit) -> PropLit {
        PropLit::new(self.name(lit.var()), lit.is_positive())
    }

    /// Names in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (Var::from_index(index), &name[..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_order_is_name_order() {
        let names = VarNames::from_names(vec!["q", "b", "q", "a"]);

        assert_eq!(names.len(), 3);
        assert_eq!(names.var("a"), Some(Var::from_index(0)));
        assert_eq!(names.var("q"), Some(Var::from_index(2)));
        assert_eq!(names.var("z"), None);

        let lit = names.lit(&PropLit::negative("b")).unwrap();
        assert_eq!(lit, Var::from_index(1).negative());
        assert_eq!(names.prop_lit(lit), PropLit::negative("b"));
    }
}
