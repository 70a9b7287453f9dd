//! Literal-aware brace-depth scanning for raw expression spans.
//!
//! Used for the template positions where an expression is delimited only
//! by braces (attribute expressions, script bodies, spread children) and
//! no keyword prefix exists for the boundary extractor to dispatch on.

use crate::combinator::close_brace_with_optional_padding;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::expression::Expression;
use crate::literals;

/// Scans the interior of a brace-delimited expression, treating string and
/// rune literals and comments as opaque so the braces inside them never
/// count toward nesting depth.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionScanner {
    /// Number of braces already open when scanning starts. The default of
    /// one matches a cursor positioned just after the opening `{`.
    pub start_depth: usize,
}

impl Default for ExpressionScanner {
    fn default() -> Self {
        Self { start_depth: 1 }
    }
}

impl ExpressionScanner {
    /// Scan up to, but not including, the closing brace that balances the
    /// opening depth. The closer is left unconsumed, with the cursor
    /// positioned immediately before it (before its padding space, if it
    /// had one).
    pub fn scan(&self, input: &mut Cursor<'_>) -> Result<Expression, ParseError> {
        let from = input.position();
        let mut depth = self.start_depth;
        let mut expr = String::new();

        loop {
            if let Some(text) = literals::line_comment(input) {
                expr.push_str(text);
                continue;
            }
            if let Some(text) = literals::block_comment(input) {
                expr.push_str(text);
                continue;
            }
            if let Some(text) = literals::string_lit(input) {
                expr.push_str(text);
                continue;
            }
            if let Some(text) = literals::rune_lit(input) {
                expr.push_str(text);
                continue;
            }
            if input.rest().starts_with('{') {
                input.take(1);
                depth += 1;
                expr.push('{');
                continue;
            }
            let before_closer = input.index();
            if let Some(text) = close_brace_with_optional_padding(input) {
                if depth == 0 {
                    return Err(ParseError::UnbalancedClosing {
                        position: input.position(),
                    });
                }
                depth -= 1;
                if depth == 0 {
                    input.seek(before_closer);
                    break;
                }
                expr.push_str(text);
                continue;
            }
            match input.take(1) {
                None => break,
                // The replacement character signals invalid or exhausted
                // input; it is consumed but never part of the expression.
                Some("\u{FFFD}") => break,
                Some(c) => expr.push_str(c),
            }
        }

        if depth != 0 {
            return Err(ParseError::UnbalancedBrace {
                position: input.position(),
            });
        }
        Ok(Expression::new(expr, from, input.position()))
    }
}
