use crate::ast::Expr::{self, *};
use crate::ast::LiteralValue;
use crate::parser::parse_expression;
use crate::rpn;
use crate::token::{Token, TokenType};

fn number(x: f64) -> Expr<'static> {
    Literal(Some(LiteralValue::Number(x)))
}

fn op(token_type: TokenType, lexeme: &'static str) -> Token<'static> {
    Token::new(token_type, lexeme, None, None, 1, 1)
}

#[test]
fn test_format_literals() {
    assert_eq!(rpn::format(&number(5.0)), "5");
    assert_eq!(rpn::format(&number(2.5)), "2.5");
    assert_eq!(rpn::format(&Literal(Some(LiteralValue::Bool(true)))), "true");
    assert_eq!(rpn::format(&Literal(Some(LiteralValue::Bool(false)))), "false");
    assert_eq!(rpn::format(&Literal(Some(LiteralValue::String("hello")))), "hello");
    assert_eq!(rpn::format(&Literal(None)), "nil");
}

#[test]
fn test_format_binary_is_postfix() {
    let expr = Binary(Box::new(number(40.0)),
                      op(TokenType::Plus, "+"),
                      Box::new(number(2.0)));
    assert_eq!(rpn::format(&expr), "40 2 +");
}

#[test]
fn test_format_grouping_is_transparent() {
    assert_eq!(rpn::format(&Grouping(Box::new(number(40.0)))), "40");

    let inner = Binary(Box::new(number(40.0)),
                       op(TokenType::Minus, "-"),
                       Box::new(number(2.0)));
    assert_eq!(rpn::format(&Grouping(Box::new(inner.clone()))), rpn::format(&inner));
}

#[test]
fn test_format_unary_is_empty() {
    let negation = Unary(op(TokenType::Minus, "-"), Box::new(number(42.0)));
    assert_eq!(rpn::format(&negation), "");

    let not = Unary(op(TokenType::Bang, "!"),
                    Box::new(Literal(Some(LiteralValue::Bool(true)))));
    assert_eq!(rpn::format(&not), "");

    // The empty rendering carries through a parent binary node.
    let expr = Binary(Box::new(negation),
                      op(TokenType::Plus, "+"),
                      Box::new(number(2.0)));
    assert_eq!(rpn::format(&expr), " 2 +");
}

#[test]
fn test_format_is_idempotent() {
    let expr = Binary(Box::new(Grouping(Box::new(number(1.0)))),
                      op(TokenType::Star, "*"),
                      Box::new(number(2.0)));
    assert_eq!(rpn::format(&expr), rpn::format(&expr));
}

#[test]
fn test_format_nested_groupings() {
    // (1 + 2) * (4 - 3), built the way the parser would build it.
    let expr = Binary(
        Box::new(Grouping(Box::new(Binary(Box::new(number(1.0)),
                                          op(TokenType::Plus, "+"),
                                          Box::new(number(2.0)))))),
        op(TokenType::Star, "*"),
        Box::new(Grouping(Box::new(Binary(Box::new(number(4.0)),
                                          op(TokenType::Minus, "-"),
                                          Box::new(number(3.0)))))),
    );
    assert_eq!(rpn::format(&expr), "1 2 + 4 3 - *");
}

#[test]
fn test_format_parsed_expressions() {
    let ast = parse_expression("(1 + 2) * (4 - 3)").unwrap();
    assert_eq!(rpn::format(&ast), "1 2 + 4 3 - *");

    let ast = parse_expression("1 + 2 * 3").unwrap();
    assert_eq!(rpn::format(&ast), "1 2 3 * +");

    let ast = parse_expression("1 + 2 == 6 / 2").unwrap();
    assert_eq!(rpn::format(&ast), "1 2 + 6 2 / ==");
}
