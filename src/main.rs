#[macro_use]
extern crate lazy_static;
extern crate unicode_segmentation;

mod ast;
mod error;
mod parser;
mod rpn;
mod scanner;
mod token;
mod util;

#[cfg(test)]
mod tests {
    mod parser_test;
    mod rpn_test;
    mod scanner_test;
}

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::process;

use argparse::{ArgumentParser, Print, Store, StoreTrue};

use crate::ast::{Expr, LiteralValue};
use crate::error::ParseError;
use crate::token::{Token, TokenType};

fn main() {
    let mut expr_filename = "".to_string();
    let mut demo = false;
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Prints Lox expressions in reverse Polish notation");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut demo)
            .add_option(&["--demo"], StoreTrue,
                        "Print the built-in example expression and exit.");
        ap.refer(&mut expr_filename)
            .add_argument("expr_filename", Store,
                          "File containing a single expression.  Omit to run an interactive prompt.");
        ap.parse_args_or_exit();
    }

    if demo {
        println!("{}", rpn::format(&example_expression()));
    }
    else if ! expr_filename.is_empty() {
        if run_file(&expr_filename).is_err() {
            process::exit(65);
        }
    }
    else {
        run_repl();
    }
}

fn run_repl() {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().expect("run_repl: unable to flush stdout");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break, // End of input.
            Ok(_) => {
                let source = input.trim();
                if source.is_empty() {
                    continue;
                }
                print_result(&run(source));
            }
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

fn run_file(file_path: &str) -> Result<(), ParseError> {
    let mut file = File::open(file_path).unwrap_or_else(|_| panic!("source file not found: {}", file_path));
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap_or_else(|_| panic!("unable to read file: {}", file_path));

    let result = run(contents.trim());
    print_result(&result);

    result.map(|_| ())
}

fn run(source: &str) -> Result<String, ParseError> {
    let ast = parser::parse_expression(source)?;

    Ok(rpn::format(&ast))
}

fn print_result(result: &Result<String, ParseError>) {
    match result {
        Ok(output) => println!("{}", output),
        Err(err) => {
            // Print all causes.
            for cause in err.causes.iter() {
                util::error(&cause.source_loc, &cause.to_string());
            }
        }
    }
}

// The tree for "(1 + 2) * (4 - 3)", the parser's work done by hand.
fn example_expression() -> Expr<'static> {
    Expr::Binary(
        Box::new(Expr::Grouping(Box::new(Expr::Binary(
            Box::new(Expr::Literal(Some(LiteralValue::Number(1.0)))),
            Token::new(TokenType::Plus, "+", None, None, 1, 4),
            Box::new(Expr::Literal(Some(LiteralValue::Number(2.0)))),
        )))),
        Token::new(TokenType::Star, "*", None, None, 1, 9),
        Box::new(Expr::Grouping(Box::new(Expr::Binary(
            Box::new(Expr::Literal(Some(LiteralValue::Number(4.0)))),
            Token::new(TokenType::Minus, "-", None, None, 1, 14),
            Box::new(Expr::Literal(Some(LiteralValue::Number(3.0)))),
        )))),
    )
}
