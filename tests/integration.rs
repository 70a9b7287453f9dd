//! Integration tests for the templar extraction pipeline.
//!
//! These exercise the public API the way the template parser does: a
//! cursor over full template source, boundary extraction for declarations
//! and control flow, the brace scanner for attribute-style expressions,
//! and switch composition with a child-node parser implementation.

use templar::combinator::{self, StopPredicate};
use templar::cursor::Cursor;
use templar::error::ParseError;
use templar::expression::Position;
use templar::gocode;
use templar::scanner::ExpressionScanner;
use templar::switch_block::{self, ChildNodeParser, ParsedChildren};

/// A stand-in for the template-node parser: one node per non-blank line.
struct LineNodes;

impl ChildNodeParser for LineNodes {
    type Node = String;

    fn parse_children(
        &mut self,
        input: &mut Cursor<'_>,
        stop: &StopPredicate<'_>,
    ) -> Result<ParsedChildren<String>, ParseError> {
        let mut nodes = Vec::new();
        let mut line = String::new();
        while !input.is_eof() && !stop.matches(input) {
            match input.take(1) {
                Some("\n") | None => {
                    if !line.trim().is_empty() {
                        nodes.push(line.trim().to_string());
                    }
                    line.clear();
                }
                Some(c) => line.push_str(c),
            }
        }
        if !line.trim().is_empty() {
            nodes.push(line.trim().to_string());
        }
        Ok(ParsedChildren {
            nodes,
            diagnostics: Vec::new(),
        })
    }
}

#[test]
fn template_with_switch_parses_in_sequence() {
    let src = "templ StatusPage(s Status) {\nswitch s.Kind() {\ncase \"ok\":\nAll good.\ndefault:\nProblem!\n}\n}";
    let mut input = Cursor::new(src);

    let decl = gocode::go_template_decl(&mut input).expect("declaration");
    assert_eq!(decl.expr, "templ StatusPage(s Status) ");

    assert!(combinator::open_brace_with_optional_padding(&mut input).is_some());
    combinator::optional_whitespace(&mut input);

    let node = switch_block::switch_node(&mut input, &mut LineNodes)
        .expect("switch should parse")
        .expect("switch should match");
    assert_eq!(node.expression.expr, "switch s.Kind() {");
    assert_eq!(node.clauses.len(), 2);
    assert_eq!(node.clauses[0].expression.expr, "case \"ok\":");
    assert_eq!(node.clauses[0].children, vec!["All good.".to_string()]);
    assert_eq!(node.clauses[1].expression.expr, "default:");
    assert_eq!(node.clauses[1].children, vec!["Problem!".to_string()]);

    // only the outer template close remains
    combinator::optional_whitespace(&mut input);
    assert_eq!(input.rest(), "}");
}

#[test]
fn if_else_chain_advances_the_cursor_headers_only() {
    let src = "if p.Ok {\n<b>yes</b>\n} else if p.Alt {\n<i>alt</i>\n} else {\n<u>no</u>\n}";
    let mut input = Cursor::new(src);

    let head = gocode::go_expression("if", &mut input).unwrap();
    assert_eq!(head.expr, "if p.Ok {");

    // the template parser consumes the body and the `} ` before asking
    // for the else header
    let idx = src.find("else if").unwrap();
    input.seek(idx);
    let else_if = gocode::go_expression("if", &mut input).unwrap();
    assert_eq!(else_if.expr, "else if p.Alt {");

    let idx = src.rfind("else {").unwrap();
    input.seek(idx);
    let tail = gocode::go_expression("if", &mut input).unwrap();
    assert_eq!(tail.expr, "else {");
}

#[test]
fn attribute_expression_via_scanner() {
    // <div data={ strings.Join(items, "}") }>
    let src = "{ strings.Join(items, \"}\") }>";
    let mut input = Cursor::new(src);

    assert!(combinator::open_brace_with_optional_padding(&mut input).is_some());
    let expr = ExpressionScanner::default().scan(&mut input).unwrap();
    assert_eq!(expr.expr, "strings.Join(items, \"}\")");
    assert!(combinator::close_brace_with_optional_padding(&mut input).is_some());
    assert_eq!(input.rest(), ">");
}

#[test]
fn spread_children_expression() {
    let src = "{ children... }</div>";
    let mut input = Cursor::new(src);

    assert!(combinator::open_brace_with_optional_padding(&mut input).is_some());
    let expr = gocode::go_expression("children", &mut input).unwrap();
    assert_eq!(expr.expr, "children...");
    assert!(combinator::close_brace_with_optional_padding(&mut input).is_some());
    assert_eq!(input.rest(), "</div>");
}

#[test]
fn diagnostics_flow_through_clauses() {
    struct Diagnosing;

    impl ChildNodeParser for Diagnosing {
        type Node = String;

        fn parse_children(
            &mut self,
            input: &mut Cursor<'_>,
            stop: &StopPredicate<'_>,
        ) -> Result<ParsedChildren<String>, ParseError> {
            let from = input.position();
            while !input.is_eof() && !stop.matches(input) {
                input.take(1);
            }
            let range = templar::Range::new(from, input.position());
            Ok(ParsedChildren {
                nodes: vec!["node".to_string()],
                diagnostics: vec![templar::diagnostic::Diagnostic::new("unclosed element", range)],
            })
        }
    }

    let mut input = Cursor::new("switch x {\ncase 1:\n<div>\n}");
    let node = switch_block::switch_node(&mut input, &mut Diagnosing)
        .unwrap()
        .unwrap();
    assert_eq!(node.clauses.len(), 1);
    assert_eq!(node.clauses[0].diagnostics.len(), 1);
    assert_eq!(node.clauses[0].diagnostics[0].message, "unclosed element");
}

#[test]
fn failure_reports_template_coordinates() {
    let src = "<html>\nswitch p.Kind {\ncase 1:\noops";
    let mut input = Cursor::new(src);
    input.seek(src.find("switch").unwrap());

    let err = switch_block::switch_node(&mut input, &mut LineNodes).unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedBlock { .. }));
    // the failure position is at the end of the template, in template
    // coordinates, never in scaffolded ones
    assert_eq!(err.position(), Position::new(src.len(), 4, 4));
}

#[test]
fn extraction_failure_does_not_consume_input() {
    let src = "switch <div></div>";
    let mut input = Cursor::new(src);
    // prefix matches, so the construct commits and the subject must parse
    let err = switch_block::switch_node(&mut input, &mut LineNodes).unwrap_err();
    assert!(matches!(err, ParseError::Go { .. }));
    assert_eq!(err.position().index, 0);
}
