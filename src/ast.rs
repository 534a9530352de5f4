use std::fmt;

use crate::token::Token;

// Expression nodes own their children exclusively; trees are built once by
// the parser and never mutated afterward.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr<'a> {
    Binary(Box<Expr<'a>>, Token<'a>, Box<Expr<'a>>),
    Grouping(Box<Expr<'a>>),
    Literal(Option<LiteralValue<'a>>),
    Unary(Token<'a>, Box<Expr<'a>>),
}

// A literal's value.  The absent case (Lox's nil) is Literal(None) rather
// than a variant here.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue<'a> {
    Bool(bool),
    Number(f64),
    String(&'a str),
}

impl<'a> fmt::Display for LiteralValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::LiteralValue::*;
        match self {
            Bool(false) => write!(f, "false"),
            Bool(true) => write!(f, "true"),
            Number(x) => write!(f, "{}", x),
            String(s) => write!(f, "{}", s),
        }
    }
}
