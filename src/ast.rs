use std::fmt;

/// Runtime value produced while evaluating an [`Expr`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Ge,
    Le,
}

impl CmpOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(CmpOp::Eq),
            "!=" => Some(CmpOp::Ne),
            ">=" => Some(CmpOp::Ge),
            "<=" => Some(CmpOp::Le),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Ge => ">=",
            CmpOp::Le => "<=",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Var(String),
    Int(i64),
    Cmp(CmpOp, Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn int(value: i64) -> Self {
        Expr::Int(value)
    }

    pub fn cmp(op: CmpOp, lhs: Self, rhs: Self) -> Self {
        Expr::Cmp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Int(n) => write!(f, "{}", n),
            Expr::Cmp(op, l, r) => write!(f, "({} {} {})", l, op.symbol(), r),
            Expr::And(l, r) => write!(f, "({} && {})", l, r),
            Expr::Or(l, r) => write!(f, "({} || {})", l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn atom(name: &str, value: i64) -> Expr {
        Expr::cmp(CmpOp::Eq, Expr::var(name), Expr::int(value))
    }

    #[test]
    fn test_cmp_symbols() {
        for op in [CmpOp::Eq, CmpOp::Ne, CmpOp::Ge, CmpOp::Le] {
            assert_eq!(CmpOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(CmpOp::from_symbol("==="), None);
        assert_eq!(CmpOp::from_symbol(">"), None);
    }

    #[test]
    fn test_display() {
        let e = Expr::or(atom("a", 1), Expr::and(atom("b", 0), Expr::var("c")));
        assert_eq!(e.to_string(), "((a == 1) || ((b == 0) && c))");
    }
}
