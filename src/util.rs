use crate::error::SourceLoc;

pub fn error(loc: &SourceLoc, message: &str) {
    eprintln!("[line {}:{}] Error: {}", loc.line, loc.column, message);
}
