//! Small composable matchers over [`Cursor`].
//!
//! Matchers consume on success and leave the cursor untouched on failure;
//! combining them never requires cleanup on abandoned branches because
//! backtracking is a single `seek`.

use crate::cursor::Cursor;
use crate::expression::Expression;

/// Zero or more space characters. Always succeeds.
pub fn optional_spaces<'a>(input: &mut Cursor<'a>) -> &'a str {
    let start = input.index();
    let len = input
        .rest()
        .bytes()
        .take_while(|&b| b == b' ')
        .count();
    input.seek(start + len);
    input.slice(start, start + len)
}

/// Spaces, tabs, carriage returns, and newlines. Always succeeds.
pub fn optional_whitespace<'a>(input: &mut Cursor<'a>) -> &'a str {
    let start = input.index();
    let len = input
        .rest()
        .bytes()
        .take_while(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .count();
    input.seek(start + len);
    input.slice(start, start + len)
}

/// An opening brace with optional space padding on either side.
pub fn open_brace_with_optional_padding<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    let start = input.index();
    optional_spaces(input);
    if input.take(1) != Some("{") {
        input.seek(start);
        return None;
    }
    optional_spaces(input);
    Some(input.slice(start, input.index()))
}

/// A closing brace, optionally preceded by exactly one space.
pub fn close_brace_with_optional_padding<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    for pat in [" }", "}"] {
        if input.rest().starts_with(pat) {
            let start = input.index();
            input.seek(start + pat.len());
            return Some(input.slice(start, start + pat.len()));
        }
    }
    None
}

/// A closing bracket, optionally preceded by spaces.
pub fn close_bracket_with_optional_padding<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    let start = input.index();
    optional_spaces(input);
    if input.take(1) != Some(")") {
        input.seek(start);
        return None;
    }
    Some(input.slice(start, input.index()))
}

/// Everything up to, but not including, the next newline (or end of
/// input). Always succeeds, possibly with an empty match.
pub fn until_newline_or_eof<'a>(input: &mut Cursor<'a>) -> &'a str {
    let start = input.index();
    let len = input.rest().find('\n').unwrap_or(input.rest().len());
    input.seek(start + len);
    input.slice(start, start + len)
}

/// Wrap a text-producing matcher so it produces an [`Expression`], with
/// the span recorded around the underlying match.
pub fn expression_of<'a, F>(input: &mut Cursor<'a>, matcher: F) -> Option<Expression>
where
    F: FnOnce(&mut Cursor<'a>) -> Option<String>,
{
    let from = input.position();
    let expr = matcher(input)?;
    Some(Expression::new(expr, from, input.position()))
}

/// A type-erased success/failure matcher, for alternations over
/// heterogeneous matchers whose produced values don't matter.
pub type Matcher<'m> = Box<dyn for<'c> Fn(&mut Cursor<'c>) -> bool + 'm>;

/// Erase a text-producing matcher down to success/failure.
pub fn erased<'m, F>(f: F) -> Matcher<'m>
where
    F: for<'c> Fn(&mut Cursor<'c>) -> Option<&'c str> + 'm,
{
    Box::new(move |input| f(input).is_some())
}

/// An alternation of erased matchers used as a lookahead: `matches`
/// reports whether any alternative matches at the cursor, always
/// restoring the cursor afterwards.
pub struct StopPredicate<'m> {
    matchers: Vec<Matcher<'m>>,
}

impl<'m> StopPredicate<'m> {
    pub fn any(matchers: Vec<Matcher<'m>>) -> Self {
        Self { matchers }
    }

    pub fn matches(&self, input: &mut Cursor<'_>) -> bool {
        let start = input.index();
        for matcher in &self.matchers {
            let hit = matcher(input);
            input.seek(start);
            if hit {
                return true;
            }
        }
        false
    }
}
