use serde::{Deserialize, Serialize};

use crate::expression::Range;

/// A parse-time note attached to a template node rather than aborting the
/// parse. The composer carries these through from the child-node parser
/// untouched; rendering them is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub range: Range,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: Range) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Position;

    #[test]
    fn diagnostic_preserves_message_and_range() {
        let range = Range::new(Position::new(0, 1, 0), Position::new(3, 1, 3));
        let d = Diagnostic::new("void element must not have children", range);
        assert_eq!(d.message, "void element must not have children");
        assert_eq!(d.range.to.index, 3);
    }
}
