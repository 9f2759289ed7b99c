//! Scanner for the rule expression syntax.
//!
//! The scanner only groups characters into runs (`===` is one comparator run, `&&&` is
//! one combinator run); deciding which runs are legal is left to its consumers. Both the
//! validator and the evaluator's parser sit on top of it.

use std::fmt;

/// A lexical token, borrowing from the source string.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token<'a> {
    /// Maximal run of name characters: a variable name or an integer literal.
    Word(&'a str),
    /// Maximal run of comparator symbols (`=`, `!`, `<`, `>`).
    Comparator(&'a str),
    /// Maximal run of combinator symbols (`&`, `|`).
    Combinator(&'a str),
    LParen,
    RParen,
}

impl<'a> Token<'a> {
    /// Whether this is a word that starts like a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Token::Word(w) if w.starts_with(|c: char| c.is_ascii_digit()))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(s) | Token::Comparator(s) | Token::Combinator(s) => write!(f, "`{}`", s),
            Token::LParen => write!(f, "`(`"),
            Token::RParen => write!(f, "`)`"),
        }
    }
}

/// Token together with its byte offset in the source.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub offset: usize,
}

/// A character that cannot start any token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidChar {
    pub character: char,
    pub offset: usize,
}

/// Characters allowed in variable names (and integer literals).
pub fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn is_comparator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>')
}

fn is_combinator_char(c: char) -> bool {
    matches!(c, '&' | '|')
}

pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn take_while(&mut self, pred: fn(char) -> bool) -> &'a str {
        let src: &'a str = self.src;
        let rest = &src[self.pos..];
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<'a>, InvalidChar>;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_while(char::is_whitespace);
        let offset = self.pos;
        let c = self.src[self.pos..].chars().next()?;

        let token = match c {
            '(' => {
                self.pos += 1;
                Token::LParen
            }
            ')' => {
                self.pos += 1;
                Token::RParen
            }
            c if is_comparator_char(c) => Token::Comparator(self.take_while(is_comparator_char)),
            c if is_combinator_char(c) => Token::Combinator(self.take_while(is_combinator_char)),
            c if is_name_char(c) => Token::Word(self.take_while(is_name_char)),
            c => {
                self.pos += c.len_utf8();
                return Some(Err(InvalidChar { character: c, offset }));
            }
        };

        Some(Ok(Spanned { token, offset }))
    }
}
