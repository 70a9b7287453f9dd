//! Assembles a `switch` template node from its subject expression and
//! ordered case clauses.
//!
//! The composer owns only the skeleton: subject header, clause headers,
//! and the closing brace. Whatever sits between a clause header and the
//! next clause (or the closing brace) belongs to the external child-node
//! parser, which receives a lookahead-only stop predicate so the stopping
//! text is left for the composer to consume.

use crate::combinator::{self, StopPredicate, erased};
use crate::cursor::Cursor;
use crate::diagnostic::Diagnostic;
use crate::error::ParseError;
use crate::expression::Expression;
use crate::gocode;

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchNode<N> {
    /// The subject header, e.g. `switch x {`.
    pub expression: Expression,
    pub clauses: Vec<CaseClause<N>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause<N> {
    /// The clause header including its colon, e.g. `case 1:` or `default:`.
    pub expression: Expression,
    pub children: Vec<N>,
    pub diagnostics: Vec<Diagnostic>,
}

/// What a child-node parser hands back for one clause body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedChildren<N> {
    pub nodes: Vec<N>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The external template-node parser the composer delegates clause bodies
/// to. Implementations consume zero or more nodes until `stop` matches,
/// without consuming the matched stopping text, and report their own
/// failures as errors.
pub trait ChildNodeParser {
    type Node;

    fn parse_children(
        &mut self,
        input: &mut Cursor<'_>,
        stop: &StopPredicate<'_>,
    ) -> Result<ParsedChildren<Self::Node>, ParseError>;
}

/// Parse a switch block at the cursor.
///
/// Returns `Ok(None)` without consuming anything when the input does not
/// start with `switch `, a soft non-match the caller can backtrack from.
/// Once the prefix is seen the construct is committed: any later failure,
/// including a missing closing brace (`UnterminatedBlock`), is fatal.
pub fn switch_node<P: ChildNodeParser>(
    input: &mut Cursor<'_>,
    children: &mut P,
) -> Result<Option<SwitchNode<P::Node>>, ParseError> {
    if !input.rest().starts_with("switch ") {
        return Ok(None);
    }

    // The subject extraction consumes the whole header through its `{`.
    let expression = gocode::go_expression("switch", input)?;

    let mut clauses = Vec::new();
    while let Some(clause) = case_clause(input, children)? {
        clauses.push(clause);
    }

    combinator::optional_whitespace(input);
    if combinator::close_brace_with_optional_padding(input).is_none() {
        return Err(ParseError::UnterminatedBlock {
            position: input.position(),
        });
    }

    Ok(Some(SwitchNode {
        expression,
        clauses,
    }))
}

/// The start of a case/default clause: optional whitespace, then the
/// clause header through its colon. A soft non-match restores the cursor,
/// including any whitespace consumed while looking.
fn case_start(input: &mut Cursor<'_>) -> Result<Option<Expression>, ParseError> {
    let start = input.index();
    combinator::optional_whitespace(input);

    let ahead = input.peek(9);
    if !ahead.starts_with("case") && !ahead.starts_with("default") {
        input.seek(start);
        return Ok(None);
    }

    let expression = gocode::go_expression("case expression", input)?;

    // Eat the terminating newline.
    if input.rest().starts_with('\n') {
        input.take(1);
    }
    Ok(Some(expression))
}

fn case_clause<P: ChildNodeParser>(
    input: &mut Cursor<'_>,
    children: &mut P,
) -> Result<Option<CaseClause<P::Node>>, ParseError> {
    let Some(expression) = case_start(input)? else {
        return Ok(None);
    };

    // Children run until the block's closing brace or the next clause,
    // neither of which they consume.
    let stop = StopPredicate::any(vec![
        erased(combinator::close_brace_with_optional_padding),
        Box::new(|c: &mut Cursor<'_>| {
            combinator::optional_whitespace(c);
            let ahead = c.peek(9);
            ahead.starts_with("case") || ahead.starts_with("default")
        }),
    ]);
    let parsed = children.parse_children(input, &stop)?;

    combinator::optional_whitespace(input);
    Ok(Some(CaseClause {
        expression,
        children: parsed.nodes,
        diagnostics: parsed.diagnostics,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects everything before the stop as a single text node, the way
    /// the real template-node parser would return markup children.
    struct TextChildren;

    impl ChildNodeParser for TextChildren {
        type Node = String;

        fn parse_children(
            &mut self,
            input: &mut Cursor<'_>,
            stop: &StopPredicate<'_>,
        ) -> Result<ParsedChildren<String>, ParseError> {
            let mut text = String::new();
            while !input.is_eof() && !stop.matches(input) {
                if let Some(c) = input.take(1) {
                    text.push_str(c);
                }
            }
            let nodes = if text.trim().is_empty() {
                Vec::new()
            } else {
                vec![text]
            };
            Ok(ParsedChildren {
                nodes,
                diagnostics: Vec::new(),
            })
        }
    }

    fn parse(src: &str) -> Result<Option<SwitchNode<String>>, ParseError> {
        let mut input = Cursor::new(src);
        switch_node(&mut input, &mut TextChildren)
    }

    #[test]
    fn missing_prefix_is_a_soft_non_match() {
        let mut input = Cursor::new("<div></div>");
        let r = switch_node(&mut input, &mut TextChildren).unwrap();
        assert!(r.is_none());
        assert_eq!(input.index(), 0);

        // `switch` without the trailing space is also a non-match
        let mut input = Cursor::new("switch{\n}");
        assert!(switch_node(&mut input, &mut TextChildren).unwrap().is_none());
        assert_eq!(input.index(), 0);
    }

    #[test]
    fn composes_subject_and_ordered_clauses() {
        let node = parse("switch x {\ncase 1:\n<div>\ncase 2:\n<div>\ndefault:\n<div>\n</div>}")
            .unwrap()
            .expect("switch should match");

        assert_eq!(node.expression.expr, "switch x {");
        let headers: Vec<&str> = node
            .clauses
            .iter()
            .map(|c| c.expression.expr.as_str())
            .collect();
        assert_eq!(headers, vec!["case 1:", "case 2:", "default:"]);
        for clause in &node.clauses {
            assert_eq!(clause.children.len(), 1, "clause {}", clause.expression.expr);
        }
    }

    #[test]
    fn clause_headers_have_caller_coordinates() {
        let src = "switch x {\ncase 1:\n<div></div>\n}";
        let node = parse(src).unwrap().unwrap();
        let clause = &node.clauses[0];
        assert_eq!(clause.expression.range.from.index, src.find("case").unwrap());
        assert_eq!(clause.expression.range.from.line, 2);
    }

    #[test]
    fn empty_switch_block() {
        let node = parse("switch x {\n}").unwrap().unwrap();
        assert_eq!(node.expression.expr, "switch x {");
        assert!(node.clauses.is_empty());
    }

    #[test]
    fn type_switch_subject() {
        let node = parse("switch x := x.(type) {\ncase bool:\n<div></div>\n}")
            .unwrap()
            .unwrap();
        assert_eq!(node.expression.expr, "switch x := x.(type) {");
        assert_eq!(node.clauses[0].expression.expr, "case bool:");
    }

    #[test]
    fn padded_closing_brace() {
        let node = parse("switch x {\ncase 1:\n<div></div>\n }").unwrap().unwrap();
        assert_eq!(node.clauses.len(), 1);
    }

    #[test]
    fn invalid_subject_is_fatal() {
        let err = parse("switch <div> {\n}").unwrap_err();
        assert!(matches!(err, ParseError::Go { .. }));
    }

    #[test]
    fn missing_close_is_unterminated() {
        let err = parse("switch x {\ncase 1:\n<div>").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedBlock { .. }));
    }

    #[test]
    fn consumes_exactly_the_block() {
        let src = "switch x {\ncase 1:\n<div></div>\n} <p>after</p>";
        let mut input = Cursor::new(src);
        let node = switch_node(&mut input, &mut TextChildren).unwrap().unwrap();
        assert_eq!(node.clauses.len(), 1);
        assert_eq!(input.rest(), " <p>after</p>");
    }
}
