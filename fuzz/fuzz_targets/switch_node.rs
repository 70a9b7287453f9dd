#![no_main]

use libfuzzer_sys::fuzz_target;
use templar::combinator::StopPredicate;
use templar::cursor::Cursor;
use templar::error::ParseError;
use templar::switch_block::{self, ChildNodeParser, ParsedChildren};

struct SkipChildren;

impl ChildNodeParser for SkipChildren {
    type Node = ();

    fn parse_children(
        &mut self,
        input: &mut Cursor<'_>,
        stop: &StopPredicate<'_>,
    ) -> Result<ParsedChildren<()>, ParseError> {
        while !input.is_eof() && !stop.matches(input) {
            input.take(1);
        }
        Ok(ParsedChildren {
            nodes: Vec::new(),
            diagnostics: Vec::new(),
        })
    }
}

fuzz_target!(|data: &str| {
    let mut input = Cursor::new(data);
    let _ = switch_block::switch_node(&mut input, &mut SkipChildren);
});
