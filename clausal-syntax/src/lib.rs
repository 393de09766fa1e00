//! Parser for the string encoding of terms, literals and clauses.
//!
//! The encoding is
//!
//! * term: `ident` or `ident(term, ...)`,
//! * literal: an optional `~` followed by `ident` or `ident(term, ...)`,
//! * propositional literal: an optional `~` followed by `ident`.
//!
//! Identifiers consist of ASCII alphanumerics and `_`. Whether a bare identifier in term position
//! is a variable is decided by [`is_variable`](clausal_formula::is_variable). Whitespace between
//! tokens is ignored.
//!
//! Writing uses the `Display` implementations of the formula types, which produce text this
//! parser reads back to the same value.
use thiserror::Error;

use clausal_formula::{Clause, Literal, PropClause, PropLit, Term};

/// Possible errors while parsing a term or literal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("column {}: Unexpected character '{}' in '{}'", column, unexpected, input)]
    UnexpectedInput {
        input: String,
        column: usize,
        unexpected: char,
    },
    #[error("Unexpected end of '{}', expected {}", input, expected)]
    UnexpectedEnd {
        input: String,
        expected: &'static str,
    },
}

/// Negation marker of literals.
pub const NEGATION: char = '~';

/// Parses a term.
pub fn parse_term(input: &str) -> Result<Term, ParserError> {
    let mut parser = Parser::new(input);
    let term = parser.term()?;
    parser.finish()?;
    Ok(term)
}

/// Parses a first-order literal.
pub fn parse_literal(input: &str) -> Result<Literal, ParserError> {
    let mut parser = Parser::new(input);
    let positive = !parser.negation();
    let predicate = parser.ident()?;
    let args = if parser.peek() == Some(b'(') {
        parser.args()?
    } else {
        vec![]
    };
    parser.finish()?;
    Ok(Literal::new(positive, predicate, args))
}

/// Parses a propositional literal token.
pub fn parse_prop_lit(input: &str) -> Result<PropLit, ParserError> {
    let mut parser = Parser::new(input);
    let positive = !parser.negation();
    let name = parser.ident()?;
    parser.finish()?;
    Ok(PropLit::new(name, positive))
}

/// Parses the literals of a clause. Duplicated literals are merged.
pub fn parse_clause<S: AsRef<str>>(
    literals: impl IntoIterator<Item = S>,
) -> Result<Clause, ParserError> {
    literals
        .into_iter()
        .map(|lit| parse_literal(lit.as_ref()))
        .collect()
}

/// Parses a list of clauses, keeping their order.
pub fn parse_clauses<C, S>(
    clauses: impl IntoIterator<Item = C>,
) -> Result<Vec<Clause>, ParserError>
where
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    clauses
        .into_iter()
        .map(|clause| parse_clause(clause))
        .collect()
}

/// Parses the literal tokens of a propositional clause. Duplicated literals are merged.
pub fn parse_prop_clause<S: AsRef<str>>(
    literals: impl IntoIterator<Item = S>,
) -> Result<PropClause, ParserError> {
    literals
        .into_iter()
        .map(|lit| parse_prop_lit(lit.as_ref()))
        .collect()
}

/// Parses a list of propositional clauses, keeping their order.
pub fn parse_prop_clauses<C, S>(
    clauses: impl IntoIterator<Item = C>,
) -> Result<Vec<PropClause>, ParserError>
where
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    clauses
        .into_iter()
        .map(|clause| parse_prop_clause(clause))
        .collect()
}

/// Encodes the literals of a clause, in canonical order.
pub fn clause_strings(clause: &Clause) -> Vec<String> {
    clause.iter().map(|lit| lit.to_string()).collect()
}

/// Encodes the literals of a propositional clause, in canonical order.
pub fn prop_clause_strings(clause: &PropClause) -> Vec<String> {
    clause.iter().map(|lit| lit.to_string()).collect()
}

/// Recursive descent over the bytes of a single term or literal.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Parser<'a> {
        Parser { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.input.as_bytes().get(self.pos) {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    /// Next non-whitespace byte, without consuming it.
    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.as_bytes().get(self.pos).cloned()
    }

    fn unexpected(&self, expected: &'static str) -> ParserError {
        match self.input[self.pos..].chars().next() {
            Some(unexpected) => ParserError::UnexpectedInput {
                input: self.input.to_owned(),
                column: self.pos + 1,
                unexpected,
            },
            None => ParserError::UnexpectedEnd {
                input: self.input.to_owned(),
                expected,
            },
        }
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), ParserError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consumes a leading negation marker, returns whether there was one.
    fn negation(&mut self) -> bool {
        if self.peek() == Some(NEGATION as u8) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn ident(&mut self) -> Result<&'a str, ParserError> {
        self.skip_whitespace();
        let begin = self.pos;
        while let Some(&byte) = self.input.as_bytes().get(self.pos) {
            if !(byte.is_ascii_alphanumeric() || byte == b'_') {
                break;
            }
            self.pos += 1;
        }
        if begin == self.pos {
            return Err(self.unexpected("an identifier"));
        }
        Ok(&self.input[begin..self.pos])
    }

    fn term(&mut self) -> Result<Term, ParserError> {
        let name = self.ident()?;
        if self.peek() == Some(b'(') {
            let args = self.args()?;
            Ok(Term::compound(name, args))
        } else {
            Ok(Term::from_name(name))
        }
    }

    /// A parenthesized, comma separated list of terms, possibly empty.
    fn args(&mut self) -> Result<Vec<Term>, ParserError> {
        self.expect(b'(', "'('")?;
        let mut args = vec![];
        if self.peek() == Some(b')') {
            self.pos += 1;
            return Ok(args);
        }
        loop {
            args.push(self.term()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b')') => {
                    self.pos += 1;
                    return Ok(args);
                }
                _ => return Err(self.unexpected("',' or ')'")),
            }
        }
    }

    fn finish(&mut self) -> Result<(), ParserError> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(self.unexpected("end of input")),
        }
    }
}
