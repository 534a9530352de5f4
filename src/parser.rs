use crate::ast::*;
use crate::error::*;
use crate::scanner::Scanner;
use crate::token::*;

// Scans and parses a single expression.  The whole input must be consumed.
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens()?;
    let mut parser = Parser::new(tokens);

    parser.parse()
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Parser<'a> {
        Parser {
            tokens,
            current: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Expr<'a>, ParseError> {
        let expr = self.expression().map_err(ParseError::from)?;

        match self.peek() {
            Some(token) if token.token_type != TokenType::Eof => {
                let cause = ParseErrorCause::new_with_token(SourceLoc::from(token),
                                                            token.lexeme,
                                                            "Expected end of expression");
                Err(ParseError::from(cause))
            }
            _ => Ok(expr),
        }
    }

    fn expression(&mut self) -> Result<Expr<'a>, ParseErrorCause> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr<'a>, ParseErrorCause> {
        let mut expr = self.comparison()?;

        while let Some(operator) = self.matches(&[TokenType::BangEqual,
                                                  TokenType::EqualEqual]) {
            let right = self.comparison()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr<'a>, ParseErrorCause> {
        let mut expr = self.addition()?;

        while let Some(operator) = self.matches(&[TokenType::Less,
                                                  TokenType::LessEqual,
                                                  TokenType::Greater,
                                                  TokenType::GreaterEqual]) {
            let right = self.addition()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }

        Ok(expr)
    }

    fn addition(&mut self) -> Result<Expr<'a>, ParseErrorCause> {
        let mut expr = self.multiplication()?;

        while let Some(operator) = self.matches(&[TokenType::Minus, TokenType::Plus]) {
            let right = self.multiplication()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }

        Ok(expr)
    }

    fn multiplication(&mut self) -> Result<Expr<'a>, ParseErrorCause> {
        let mut expr = self.unary()?;

        while let Some(operator) = self.matches(&[TokenType::Slash, TokenType::Star]) {
            let right = self.unary()?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr<'a>, ParseErrorCause> {
        match self.matches(&[TokenType::Bang, TokenType::Minus]) {
            None => self.primary(),
            Some(operator) => {
                let right = self.unary()?;

                Ok(Expr::Unary(operator, Box::new(right)))
            }
        }
    }

    fn primary(&mut self) -> Result<Expr<'a>, ParseErrorCause> {
        let token = match self.peek() {
            None => return Err(ParseErrorCause::new(SourceLoc::default(),
                                                    "Unexpected end of input")),
            Some(token) => token.clone(),
        };

        match token.token_type {
            TokenType::False => {
                self.advance();
                Ok(Expr::Literal(Some(LiteralValue::Bool(false))))
            }
            TokenType::True => {
                self.advance();
                Ok(Expr::Literal(Some(LiteralValue::Bool(true))))
            }
            TokenType::Nil => {
                self.advance();
                Ok(Expr::Literal(None))
            }
            TokenType::Number => {
                self.advance();
                match token.float_literal {
                    None => Err(ParseErrorCause::new_with_token(SourceLoc::from(&token),
                                                                token.lexeme,
                                                                "Number token without a parsed value")),
                    Some(x) => Ok(Expr::Literal(Some(LiteralValue::Number(x)))),
                }
            }
            TokenType::String => {
                self.advance();
                match token.string_literal {
                    None => Err(ParseErrorCause::new_with_token(SourceLoc::from(&token),
                                                                token.lexeme,
                                                                "String token without a parsed value")),
                    Some(s) => Ok(Expr::Literal(Some(LiteralValue::String(s)))),
                }
            }
            TokenType::LeftParen => {
                self.advance();
                let expr = self.expression()?;

                match self.matches(&[TokenType::RightParen]) {
                    Some(_) => Ok(Expr::Grouping(Box::new(expr))),
                    None => Err(ParseErrorCause::new(SourceLoc::from(&token),
                                                     "Missing close parenthesis")),
                }
            }
            _ => Err(ParseErrorCause::new_with_token(SourceLoc::from(&token),
                                                     token.lexeme,
                                                     "Unexpected token")),
        }
    }

    // Conditionally advance past the next token if its type is one of the
    // expected ones.  Returns the matched token.
    fn matches(&mut self, token_types: &[TokenType]) -> Option<Token<'a>> {
        let token: Option<_> = match self.peek() {
            None => None,
            Some(token) => {
                if token_types.contains(&token.token_type) {
                    Some(token.clone())
                }
                else {
                    None
                }
            }
        };

        if token.is_some() {
            self.advance();
        }

        token
    }

    fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.current += 1;
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.current)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}
