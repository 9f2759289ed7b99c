//! Syntactic validation and variable extraction.
//!
//! An expression is accepted when it is built from `variable <cmp> <literal>` atoms,
//! where `<cmp>` is one of [`COMPARATORS`] and `<literal>` is the single digit `0` or `1`,
//! joined by `&&` / `||` and optionally grouped with parentheses.
//!
//! Every variable must be followed by a comparator and a literal, so an atom is never
//! left for the evaluator to reject. Beyond that this is a token-level check, not a
//! parser: parenthesis balance and the placement of atoms relative to combinators are
//! left to the evaluator.

use log::trace;

use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token};

/// Comparators accepted between a variable and its literal.
pub const COMPARATORS: [&str; 4] = ["==", "!=", ">=", "<="];

/// Logical combinators accepted between atoms.
pub const COMBINATORS: [&str; 2] = ["&&", "||"];

/// What the validator expects next.
#[derive(Debug, Copy, Clone)]
enum State<'a> {
    /// A variable, a combinator or a parenthesis.
    Operand,
    /// A comparator after the given variable.
    Comparator(&'a str),
    /// A `0`/`1` literal after the given comparator.
    Literal(&'a str),
}

/// Validates `raw` and returns the variable names in order of appearance, duplicates included.
///
/// # Errors
///
/// - [`Error::Format`] for a malformed comparator (`===`, `>`), a literal that is not a single `0`/`1` digit,
///   or a variable that is not followed by a comparator and a literal.
/// - [`Error::Combinator`] for any `&`/`|` run other than `&&` and `||`.
/// - [`Error::InvalidCharacter`] for characters outside the expression alphabet.
/// - [`Error::EmptyExpression`] if no variable is referenced.
pub fn validate(raw: &str) -> Result<Vec<String>> {
    let format_error = |detail: String| Error::Format {
        expression: raw.to_string(),
        detail,
    };

    let mut names = Vec::new();
    let mut state = State::Operand;

    for item in Lexer::new(raw) {
        let spanned = item.map_err(|e| Error::InvalidCharacter {
            expression: raw.to_string(),
            character: e.character,
            position: e.offset,
        })?;

        match (state, spanned.token) {
            (State::Literal(_), Token::Word("0") | Token::Word("1")) => state = State::Operand,
            (State::Literal(cmp), other) => {
                return Err(format_error(format!(
                    "expected literal 0 or 1 after `{}`, found {} at offset {}",
                    cmp, other, spanned.offset
                )));
            }
            (State::Comparator(_), Token::Comparator(cmp)) => {
                if !COMPARATORS.contains(&cmp) {
                    return Err(format_error(format!(
                        "unsupported comparator `{}` at offset {}",
                        cmp, spanned.offset
                    )));
                }
                state = State::Literal(cmp);
            }
            (State::Comparator(name), other) => {
                return Err(format_error(format!(
                    "expected comparator after `{}`, found {} at offset {}",
                    name, other, spanned.offset
                )));
            }
            (State::Operand, Token::Comparator(cmp)) => {
                return Err(format_error(format!(
                    "comparator `{}` without a variable at offset {}",
                    cmp, spanned.offset
                )));
            }
            (State::Operand, Token::Combinator(op)) => {
                if !COMBINATORS.contains(&op) {
                    return Err(Error::Combinator {
                        expression: raw.to_string(),
                        operator: op.to_string(),
                    });
                }
            }
            (State::Operand, token @ Token::Word(_)) if token.is_numeric() => {
                return Err(format_error(format!(
                    "unexpected literal {} at offset {}",
                    token, spanned.offset
                )));
            }
            (State::Operand, Token::Word(name)) => {
                names.push(name.to_string());
                state = State::Comparator(name);
            }
            (State::Operand, Token::LParen | Token::RParen) => {}
        }
    }

    match state {
        State::Operand => {}
        State::Comparator(name) => {
            return Err(format_error(format!("missing comparator after trailing `{}`", name)));
        }
        State::Literal(cmp) => {
            return Err(format_error(format!("missing literal after trailing `{}`", cmp)));
        }
    }
    if names.is_empty() {
        return Err(Error::EmptyExpression {
            expression: raw.to_string(),
        });
    }

    trace!("validate({:?}) -> {:?}", raw, names);
    Ok(names)
}

/// A validated expression: the raw text together with the variables it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    raw: String,
    variables: Vec<String>,
}

impl Expression {
    pub fn parse(raw: &str) -> Result<Self> {
        let variables = validate(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            variables,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Referenced variables, in order of appearance, duplicates included.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }
}
