//! First-order terms.
use std::collections::BTreeSet;
use std::fmt;

/// The reserved identifier denoting an anonymous variable.
pub const WILDCARD: &str = "_";

/// Whether an identifier denotes a variable.
///
/// Identifiers starting with a lowercase letter and the wildcard `_` are variables. Everything
/// else names a constant, function or predicate.
pub fn is_variable(name: &str) -> bool {
    name == WILDCARD || name.chars().next().map_or(false, char::is_lowercase)
}

/// A variable or a function symbol applied to argument terms.
///
/// Constants are compounds without arguments.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Var(String),
    Compound { functor: String, args: Vec<Term> },
}

impl Term {
    pub fn var(name: impl Into<String>) -> Term {
        Term::Var(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Term {
        Term::compound(name, vec![])
    }

    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Term {
        Term::Compound {
            functor: functor.into(),
            args,
        }
    }

    /// A bare identifier, classified by [`is_variable`].
    pub fn from_name(name: impl Into<String>) -> Term {
        let name = name.into();
        if is_variable(&name) {
            Term::Var(name)
        } else {
            Term::constant(name)
        }
    }

    pub fn is_var(&self) -> bool {
        match self {
            Term::Var(_) => true,
            Term::Compound { .. } => false,
        }
    }

    /// The variable name if this term is a variable.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Term::Var(name) => Some(name),
            Term::Compound { .. } => None,
        }
    }

    /// Number of arguments, zero for variables.
    pub fn arity(&self) -> usize {
        match self {
            Term::Var(_) => 0,
            Term::Compound { args, .. } => args.len(),
        }
    }

    /// Whether the named variable occurs anywhere in this term.
    pub fn occurs(&self, var: &str) -> bool {
        match self {
            Term::Var(name) => name == var,
            Term::Compound { args, .. } => args.iter().any(|arg| arg.occurs(var)),
        }
    }

    /// Adds the names of all variables in this term to `vars`.
    pub fn collect_vars<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        match self {
            Term::Var(name) => {
                vars.insert(name);
            }
            Term::Compound { args, .. } => {
                for arg in args {
                    arg.collect_vars(vars);
                }
            }
        }
    }

    /// Whether the term contains no variables.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Compound { args, .. } => args.iter().all(Term::is_ground),
        }
    }
}

/// Writes a comma separated argument list in parentheses.
pub(crate) fn write_args(f: &mut fmt::Formatter, args: &[Term]) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", arg)?;
    }
    f.write_str(")")
}

/// Uses the `functor(arg,...)` encoding.
///
/// Constants are written without parentheses unless their name would read back as a variable.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Var(name) => f.write_str(name),
            Term::Compound { functor, args } => {
                f.write_str(functor)?;
                if !args.is_empty() || is_variable(functor) {
                    write_args(f, args)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
