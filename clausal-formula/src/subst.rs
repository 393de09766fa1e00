//! Variable substitutions.
use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::iter::FromIterator;

use crate::clause::Clause;
use crate::literal::Literal;
use crate::term::Term;

/// A partial mapping from variable names to terms.
///
/// Bindings are stored as they were made during unification, so a variable may be bound to
/// another bound variable. Lookups go through [`resolve`](Substitution::resolve), which follows
/// such chains.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: BTreeMap<String, Term>,
}

impl Substitution {
    /// The empty substitution.
    pub fn new() -> Substitution {
        Substitution::default()
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The direct binding of a variable, without following chains.
    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Binds a variable, replacing a previous binding.
    pub fn bind(&mut self, var: impl Into<String>, term: Term) {
        self.bindings.insert(var.into(), term);
    }

    /// Bindings in variable name order.
    pub fn iter(&self) -> btree_map::Iter<String, Term> {
        self.bindings.iter()
    }

    /// Follows variable bindings until reaching an unbound variable or a compound term.
    ///
    /// Only the outermost symbol is resolved, arguments of a compound are returned as stored.
    pub fn resolve<'a>(&'a self, mut term: &'a Term) -> &'a Term {
        // Chains can't be longer than the number of bindings.
        let mut steps = 0;
        while let Term::Var(name) = term {
            match self.bindings.get(name) {
                Some(bound) if steps < self.bindings.len() => {
                    term = bound;
                    steps += 1;
                }
                _ => break,
            }
        }
        term
    }

    /// Replaces all bound variables in a term, recursively.
    ///
    /// Without an occurs-check a variable can end up bound to a term containing itself. Such a
    /// variable is left in place when it is reached again while expanding its own binding.
    pub fn apply(&self, term: &Term) -> Term {
        let mut expanding = vec![];
        self.apply_guarded(term, &mut expanding)
    }

    fn apply_guarded<'a>(&'a self, term: &'a Term, expanding: &mut Vec<&'a str>) -> Term {
        match term {
            Term::Var(name) => {
                if expanding.contains(&&name[..]) {
                    return term.clone();
                }
                match self.bindings.get(name) {
                    Some(bound) => {
                        expanding.push(name);
                        let result = self.apply_guarded(bound, expanding);
                        expanding.pop();
                        result
                    }
                    None => term.clone(),
                }
            }
            Term::Compound { functor, args } => Term::compound(
                functor.clone(),
                args.iter()
                    .map(|arg| self.apply_guarded(arg, expanding))
                    .collect(),
            ),
        }
    }

    pub fn apply_literal(&self, lit: &Literal) -> Literal {
        lit.map_args(|arg| self.apply(arg))
    }

    pub fn apply_clause(&self, clause: &Clause) -> Clause {
        clause.iter().map(|lit| self.apply_literal(lit)).collect()
    }
}

impl FromIterator<(String, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (String, Term)>>(iter: I) -> Substitution {
        Substitution {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, (var, term)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} -> {}", var, term)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_chains() {
        let mut subst = Substitution::new();
        subst.bind("x", Term::var("y"));
        subst.bind("y", Term::var("z"));

        assert_eq!(subst.resolve(&Term::var("x")), &Term::var("z"));
        assert_eq!(subst.resolve(&Term::var("w")), &Term::var("w"));

        subst.bind("z", Term::compound("f", vec![Term::var("y")]));
        let f_y = Term::compound("f", vec![Term::var("y")]);
        assert_eq!(subst.resolve(&Term::var("x")), &f_y);
    }

    #[test]
    fn applies_recursively() {
        let mut subst = Substitution::new();
        subst.bind("x", Term::var("y"));
        subst.bind("y", Term::constant("A"));

        let term = Term::compound("g", vec![Term::var("x"), Term::var("u")]);
        assert_eq!(subst.apply(&term).to_string(), "g(A,u)");
    }

    #[test]
    fn self_reference_terminates() {
        let mut subst = Substitution::new();
        subst.bind("x", Term::compound("f", vec![Term::var("x")]));

        assert_eq!(subst.apply(&Term::var("x")).to_string(), "f(x)");
        assert_eq!(subst.to_string(), "{x -> f(x)}");
    }
}
