//! Expression evaluation engine.
//!
//! A small general-purpose evaluator for boolean/comparison expressions over
//! integer-valued variables. It knows nothing about equivalence checking: it
//! [compiles][compile] a string into an [`Expr`] tree and evaluates that tree against
//! any [`Scope`] that can resolve variable names.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! or      := and ("||" and)*
//! and     := cmp ("&&" cmp)*
//! cmp     := primary (("==" | "!=" | ">=" | "<=") primary)*
//! primary := IDENT | INT | "(" or ")"
//! ```
//!
//! `==`/`!=` compare values of the same type, `>=`/`<=` require integers, and
//! `&&`/`||` require booleans and short-circuit, left to right.

use std::collections::HashMap;
use std::fmt;

use crate::ast::{CmpOp, Expr, Value};
use crate::env::Environment;
use crate::lexer::{Lexer, Spanned, Token};

/// Variable lookup used during evaluation.
pub trait Scope {
    fn lookup(&self, name: &str) -> Option<i64>;
}

impl Scope for Environment {
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name).map(i64::from)
    }
}

impl Scope for HashMap<String, i64> {
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}

/// The expression could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub offset: usize,
    pub message: String,
}

impl CompileError {
    fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for CompileError {}

/// Evaluation failed for a particular scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    UnboundVariable(String),
    TypeMismatch {
        op: &'static str,
        lhs: Value,
        rhs: Option<Value>,
    },
    NotBoolean(Value),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable(name) => write!(f, "no value for variable `{}`", name),
            EvalError::TypeMismatch { op, lhs, rhs: Some(rhs) } => write!(
                f,
                "cannot apply `{}` to {} `{}` and {} `{}`",
                op,
                lhs.type_name(),
                lhs,
                rhs.type_name(),
                rhs
            ),
            EvalError::TypeMismatch { op, lhs, rhs: None } => {
                write!(f, "cannot apply `{}` to {} `{}`", op, lhs.type_name(), lhs)
            }
            EvalError::NotBoolean(value) => {
                write!(f, "expression evaluated to {} `{}`, not a bool", value.type_name(), value)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Deepest nesting accepted by [`compile`], both in parentheses and in tree levels.
///
/// Evaluation recurses once per tree level, so the bound also bounds the stack.
pub const MAX_DEPTH: usize = 256;

/// A parsed expression, ready to be evaluated many times.
#[derive(Debug, Clone)]
pub struct Compiled {
    source: String,
    expr: Expr,
    depth: usize,
}

impl Compiled {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Number of operator levels in the tree; a lone variable or literal has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Evaluates the expression; the result must be a boolean.
    pub fn evaluate<S: Scope + ?Sized>(&self, scope: &S) -> Result<bool, EvalError> {
        match eval_expr(&self.expr, scope)? {
            Value::Bool(b) => Ok(b),
            other => Err(EvalError::NotBoolean(other)),
        }
    }
}

/// Parses `source` into a reusable [`Compiled`] expression.
///
/// Chains of `&&` (or `||`) are built as balanced trees, so long flat rules stay shallow.
/// Anything nested deeper than [`MAX_DEPTH`] is rejected.
pub fn compile(source: &str) -> Result<Compiled, CompileError> {
    let tokens = Lexer::new(source)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CompileError::new(e.offset, format!("unexpected character {:?}", e.character)))?;

    let mut parser = Parser {
        tokens,
        pos: 0,
        end: source.len(),
        nesting: 0,
    };
    let Parsed { expr, depth, .. } = parser.parse_or()?;
    if let Some(t) = parser.peek() {
        return Err(CompileError::new(t.offset, format!("unexpected token {}", t.token)));
    }

    Ok(Compiled {
        source: source.to_string(),
        expr,
        depth,
    })
}

/// Compiles and evaluates `source` in one go.
pub fn evaluate<S: Scope + ?Sized>(source: &str, scope: &S) -> crate::error::Result<bool> {
    Ok(compile(source)?.evaluate(scope)?)
}

/// A subtree together with its height and the offset it starts at.
struct Parsed {
    expr: Expr,
    depth: usize,
    offset: usize,
}

impl Parsed {
    fn leaf(expr: Expr, offset: usize) -> Self {
        Self { expr, depth: 0, offset }
    }

    fn join(self, rhs: Parsed, node: impl FnOnce(Expr, Expr) -> Expr) -> Result<Parsed, CompileError> {
        let depth = 1 + self.depth.max(rhs.depth);
        if depth > MAX_DEPTH {
            return Err(CompileError::new(self.offset, "expression nested too deeply"));
        }
        Ok(Parsed {
            expr: node(self.expr, rhs.expr),
            depth,
            offset: self.offset,
        })
    }
}

/// Folds `operands` pairwise, level by level, keeping their left-to-right order.
fn balanced(operands: Vec<Parsed>, node: fn(Expr, Expr) -> Expr) -> Result<Parsed, CompileError> {
    let mut level = operands;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut it = level.into_iter();
        while let Some(lhs) = it.next() {
            match it.next() {
                Some(rhs) => next.push(lhs.join(rhs, node)?),
                None => next.push(lhs),
            }
        }
        level = next;
    }
    level
        .pop()
        .ok_or_else(|| CompileError::new(0, "empty operand list"))
}

struct Parser<'a> {
    tokens: Vec<Spanned<'a>>,
    pos: usize,
    end: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Spanned<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Spanned<'a>> {
        let t = self.peek();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn eat_combinator(&mut self, symbol: &str) -> bool {
        match self.peek() {
            Some(Spanned {
                token: Token::Combinator(op),
                ..
            }) if op == symbol => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn parse_or(&mut self) -> Result<Parsed, CompileError> {
        let mut operands = vec![self.parse_and()?];
        while self.eat_combinator("||") {
            operands.push(self.parse_and()?);
        }
        balanced(operands, Expr::or)
    }

    fn parse_and(&mut self) -> Result<Parsed, CompileError> {
        let mut operands = vec![self.parse_cmp()?];
        while self.eat_combinator("&&") {
            operands.push(self.parse_cmp()?);
        }
        balanced(operands, Expr::and)
    }

    fn parse_cmp(&mut self) -> Result<Parsed, CompileError> {
        let mut lhs = self.parse_primary()?;
        while let Some(Spanned {
            token: Token::Comparator(symbol),
            offset,
        }) = self.peek()
        {
            let op = CmpOp::from_symbol(symbol)
                .ok_or_else(|| CompileError::new(offset, format!("unknown comparator `{}`", symbol)))?;
            self.pos += 1;
            let rhs = self.parse_primary()?;
            lhs = lhs.join(rhs, |l, r| Expr::cmp(op, l, r))?;
        }
        Ok(lhs)
    }

    fn parse_primary(&mut self) -> Result<Parsed, CompileError> {
        let Some(Spanned { token, offset }) = self.bump() else {
            return Err(CompileError::new(self.end, "unexpected end of expression"));
        };

        match token {
            Token::Word(word) if token.is_numeric() => word
                .parse::<i64>()
                .map(|n| Parsed::leaf(Expr::int(n), offset))
                .map_err(|_| CompileError::new(offset, format!("invalid integer literal `{}`", word))),
            Token::Word(name) => Ok(Parsed::leaf(Expr::var(name), offset)),
            Token::LParen => {
                self.nesting += 1;
                if self.nesting > MAX_DEPTH {
                    return Err(CompileError::new(offset, "parentheses nested too deeply"));
                }
                let mut inner = self.parse_or()?;
                self.nesting -= 1;
                inner.offset = offset;
                match self.bump() {
                    Some(Spanned {
                        token: Token::RParen, ..
                    }) => Ok(inner),
                    Some(t) => Err(CompileError::new(t.offset, format!("expected `)`, found {}", t.token))),
                    None => Err(CompileError::new(
                        self.end,
                        format!("unclosed `(` opened at offset {}", offset),
                    )),
                }
            }
            other => Err(CompileError::new(offset, format!("unexpected token {}", other))),
        }
    }
}

fn eval_expr<S: Scope + ?Sized>(expr: &Expr, scope: &S) -> Result<Value, EvalError> {
    match expr {
        Expr::Var(name) => scope
            .lookup(name)
            .map(Value::Int)
            .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
        Expr::Int(n) => Ok(Value::Int(*n)),
        Expr::Cmp(op, l, r) => {
            let lhs = eval_expr(l, scope)?;
            let rhs = eval_expr(r, scope)?;
            compare(*op, lhs, rhs).map(Value::Bool)
        }
        Expr::And(l, r) => {
            if !as_bool("&&", eval_expr(l, scope)?)? {
                return Ok(Value::Bool(false));
            }
            as_bool("&&", eval_expr(r, scope)?).map(Value::Bool)
        }
        Expr::Or(l, r) => {
            if as_bool("||", eval_expr(l, scope)?)? {
                return Ok(Value::Bool(true));
            }
            as_bool("||", eval_expr(r, scope)?).map(Value::Bool)
        }
    }
}

fn as_bool(op: &'static str, value: Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(EvalError::TypeMismatch {
            op,
            lhs: other,
            rhs: None,
        }),
    }
}

fn compare(op: CmpOp, lhs: Value, rhs: Value) -> Result<bool, EvalError> {
    match (op, lhs, rhs) {
        (CmpOp::Eq, Value::Int(a), Value::Int(b)) => Ok(a == b),
        (CmpOp::Eq, Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (CmpOp::Ne, Value::Int(a), Value::Int(b)) => Ok(a != b),
        (CmpOp::Ne, Value::Bool(a), Value::Bool(b)) => Ok(a != b),
        (CmpOp::Ge, Value::Int(a), Value::Int(b)) => Ok(a >= b),
        (CmpOp::Le, Value::Int(a), Value::Int(b)) => Ok(a <= b),
        _ => Err(EvalError::TypeMismatch {
            op: op.symbol(),
            lhs,
            rhs: Some(rhs),
        }),
    }
}
