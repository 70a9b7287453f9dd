use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in template source text.
///
/// `index` is a byte offset into the source. `line` is 1-indexed, `column`
/// is a 0-indexed character count within the line (UTF-8 codepoints, not
/// bytes), matching how editors report positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open source range `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// A Go code fragment extracted from template source, together with the
/// range it occupies in the caller's coordinate system.
///
/// `expr` is always a prefix of the content the caller handed in, starting
/// at its cursor: advancing the cursor by exactly `expr.len()` bytes lands
/// immediately after the extracted fragment. Positions never refer to any
/// synthetic wrapper text used during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub expr: String,
    pub range: Range,
}

impl Expression {
    pub fn new(expr: impl Into<String>, from: Position, to: Position) -> Self {
        Self {
            expr: expr.into(),
            range: Range::new(from, to),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display() {
        let p = Position::new(14, 3, 5);
        assert_eq!(format!("{p}"), "3:5");
    }

    #[test]
    fn position_ordering_follows_offset() {
        let a = Position::new(0, 1, 0);
        let b = Position::new(4, 2, 0);
        assert!(a < b);
    }

    #[test]
    fn expression_advances_by_len() {
        let content = "x > 3 {\n<div></div>\n}";
        let e = Expression::new("x > 3", Position::new(0, 1, 0), Position::new(5, 1, 5));
        assert_eq!(&content[..e.expr.len()], "x > 3");
        assert_eq!(e.range.to.index - e.range.from.index, e.expr.len());
    }
}
