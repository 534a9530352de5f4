use crate::ast::Expr;

// Renders an expression tree in reverse Polish notation.  Total over the
// Expr variants; any well-formed tree produces some string.
pub fn format(expr: &Expr) -> String {
    match expr {
        Expr::Binary(left, operator, right) => {
            let mut out = String::new();
            out.push_str(&format(left));
            out.push(' ');
            out.push_str(&format(right));
            out.push(' ');
            out.push_str(operator.lexeme);

            out
        }
        // RPN needs no parentheses, so groupings disappear.
        Expr::Grouping(inner) => format(inner),
        Expr::Literal(None) => "nil".to_string(),
        Expr::Literal(Some(value)) => value.to_string(),
        // Unary expressions are not rendered.
        Expr::Unary(_, _) => String::new(),
    }
}
