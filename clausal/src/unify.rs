//! Robinson-style unification.
use clausal_formula::{Literal, Substitution, Term};

use crate::config::SolverConfig;

/// Computes most general unifiers of terms and literals.
///
/// Bindings are added to a [`Substitution`] without applying them to earlier bindings, so lookups
/// have to [`resolve`](Substitution::resolve) chains.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Unifier {
    occurs_check: bool,
}

impl Unifier {
    pub fn new(config: &SolverConfig) -> Unifier {
        Unifier {
            occurs_check: config.occurs_check,
        }
    }

    /// A unifier with the occurs-check enabled or disabled.
    ///
    /// Without the occurs-check, unifying `x` with `f(x)` succeeds and binds `x` to `f(x)`.
    pub fn with_occurs_check(occurs_check: bool) -> Unifier {
        Unifier { occurs_check }
    }

    pub fn occurs_check(&self) -> bool {
        self.occurs_check
    }

    /// Extends `subst` so that it unifies both terms.
    ///
    /// Returns `None` if no such extension exists.
    pub fn unify_terms(&self, a: &Term, b: &Term, mut subst: Substitution) -> Option<Substitution> {
        if self.unify_into(a, b, &mut subst) {
            Some(subst)
        } else {
            None
        }
    }

    /// Unifies the arguments of two complementary literals.
    ///
    /// Returns `None` if the literals have different predicates, arities or equal polarity, or if
    /// their arguments don't unify.
    pub fn unify_literals(&self, a: &Literal, b: &Literal) -> Option<Substitution> {
        if !a.is_complementary(b) {
            return None;
        }
        let mut subst = Substitution::new();
        for (arg_a, arg_b) in a.args().iter().zip(b.args()) {
            if !self.unify_into(arg_a, arg_b, &mut subst) {
                return None;
            }
        }
        Some(subst)
    }

    /// On failure `subst` may contain some of the bindings made so far.
    fn unify_into(&self, a: &Term, b: &Term, subst: &mut Substitution) -> bool {
        let a = subst.resolve(a).clone();
        let b = subst.resolve(b).clone();

        if a == b {
            return true;
        }

        match (&a, &b) {
            (Term::Var(var), other) | (other, Term::Var(var)) => self.bind(var, other, subst),
            (
                Term::Compound {
                    functor: functor_a,
                    args: args_a,
                },
                Term::Compound {
                    functor: functor_b,
                    args: args_b,
                },
            ) => {
                functor_a == functor_b
                    && args_a.len() == args_b.len()
                    && args_a
                        .iter()
                        .zip(args_b)
                        .all(|(arg_a, arg_b)| self.unify_into(arg_a, arg_b, subst))
            }
        }
    }

    fn bind(&self, var: &str, term: &Term, subst: &mut Substitution) -> bool {
        if self.occurs_check && subst.apply(term).occurs(var) {
            return false;
        }
        subst.bind(var, term.clone());
        true
    }
}

/// Unifies two terms under an existing substitution, without occurs-check.
pub fn unify_terms(a: &Term, b: &Term, subst: Substitution) -> Option<Substitution> {
    Unifier::default().unify_terms(a, b, subst)
}

/// Unifies the arguments of two complementary literals, without occurs-check.
pub fn unify_literals(a: &Literal, b: &Literal) -> Option<Substitution> {
    Unifier::default().unify_literals(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{prelude::*, *};

    use clausal_syntax::{parse_literal, parse_term, ParserError};

    fn unify_strs(a: &str, b: &str) -> Result<Option<Substitution>, ParserError> {
        Ok(unify_terms(&parse_term(a)?, &parse_term(b)?, Substitution::new()))
    }

    #[test]
    fn binds_variables_pairwise() -> Result<(), ParserError> {
        let subst = unify_strs("f(x,y)", "f(a,b)")?.unwrap();

        assert_eq!(subst.len(), 2);
        assert_eq!(subst.get("x"), Some(&Term::var("a")));
        assert_eq!(subst.get("y"), Some(&Term::var("b")));

        Ok(())
    }

    #[test]
    fn first_variable_is_bound() -> Result<(), ParserError> {
        let subst = unify_strs("x", "y")?.unwrap();
        assert_eq!(subst.to_string(), "{x -> y}");

        let subst = unify_strs("A", "y")?.unwrap();
        assert_eq!(subst.to_string(), "{y -> A}");

        Ok(())
    }

    #[test]
    fn mismatches() -> Result<(), ParserError> {
        assert_eq!(unify_strs("f(x)", "g(x)")?, None);
        assert_eq!(unify_strs("f(x)", "f(x,y)")?, None);
        assert_eq!(unify_strs("A", "B")?, None);
        assert_eq!(unify_strs("f(x,x)", "f(A,B)")?, None);
        assert_eq!(unify_strs("f(A)", "f(A)")?, Some(Substitution::new()));
        Ok(())
    }

    #[test]
    fn threads_existing_bindings() -> Result<(), ParserError> {
        let mut subst = Substitution::new();
        subst.bind("x", parse_term("G(y)")?);
        subst.bind("y", parse_term("A")?);

        let subst = unify_terms(&parse_term("x")?, &parse_term("G(z)")?, subst).unwrap();
        assert_eq!(subst.apply(&parse_term("z")?), parse_term("A")?);

        let mut failing = Substitution::new();
        failing.bind("x", parse_term("B")?);
        assert_eq!(
            unify_terms(&parse_term("x")?, &parse_term("A")?, failing),
            None
        );

        Ok(())
    }

    #[test]
    fn occurs_check_is_optional() -> Result<(), ParserError> {
        let x = parse_term("x")?;
        let f_x = parse_term("F(x)")?;

        let subst = unify_terms(&x, &f_x, Substitution::new()).unwrap();
        assert_eq!(subst.get("x"), Some(&f_x));

        let strict = Unifier::with_occurs_check(true);
        assert_eq!(strict.unify_terms(&x, &f_x, Substitution::new()), None);

        let chained = parse_term("G(x,F(y))")?;
        let other = parse_term("G(y,x)")?;
        assert_eq!(strict.unify_terms(&chained, &other, Substitution::new()), None);

        Ok(())
    }

    #[test]
    fn literals_need_opposite_polarity() -> Result<(), ParserError> {
        let p_x = parse_literal("P(x,B)")?;
        let not_p = parse_literal("~P(A,y)")?;

        let subst = unify_literals(&p_x, &not_p).unwrap();
        assert_eq!(subst.to_string(), "{x -> A, y -> B}");
        assert_eq!(subst.apply_literal(&p_x), subst.apply_literal(&not_p).negated());

        assert_eq!(unify_literals(&p_x, &p_x), None);
        assert_eq!(unify_literals(&p_x, &parse_literal("~Q(A,y)")?), None);
        assert_eq!(unify_literals(&p_x, &parse_literal("~P(A)")?), None);
        assert_eq!(unify_literals(&p_x, &parse_literal("~P(A,C)")?), None);

        Ok(())
    }

    fn term(depth: u32) -> impl Strategy<Value = Term> {
        let leaf = prop_oneof![
            Just(Term::var("x")),
            Just(Term::var("y")),
            Just(Term::var("z")),
            Just(Term::constant("A")),
            Just(Term::constant("B")),
        ];
        leaf.prop_recursive(depth, 16, 2, |inner| {
            (
                prop_oneof![Just("F"), Just("G")],
                collection::vec(inner, 1..3),
            )
                .prop_map(|(functor, args)| Term::compound(functor, args))
        })
    }

    proptest! {
        #[test]
        fn unifiers_equalize(a in term(3), b in term(3)) {
            let unifier = Unifier::with_occurs_check(true);
            if let Some(subst) = unifier.unify_terms(&a, &b, Substitution::new()) {
                prop_assert_eq!(subst.apply(&a), subst.apply(&b));
            }
        }

        #[test]
        fn terms_unify_with_themselves(a in term(3)) {
            prop_assert_eq!(unify_terms(&a, &a, Substitution::new()), Some(Substitution::new()));
        }
    }
}
