use thiserror::Error;

use crate::expression::Position;
use crate::goexpr::ExtractError;

/// Failures surfaced to template-parser callers, each carrying the cursor
/// position at which parsing stopped.
///
/// Two outcomes are deliberately not represented here because they are soft
/// non-matches rather than failures: the `switch ` prefix check and the
/// case/default lookahead both return `Ok(None)` so the caller can backtrack
/// and try an alternative parse path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The boundary extractor rejected an embedded Go fragment. `name` is
    /// the construct being parsed when it happened ("if", "switch",
    /// "case expression", ...).
    #[error("{name}: invalid go expression: {source} at {position}")]
    Go {
        name: String,
        source: ExtractError,
        position: Position,
    },

    /// The scanner saw more closing braces than opening ones.
    #[error("expression: too many closing braces at {position}")]
    UnbalancedClosing { position: Position },

    /// The scanner ran out of input with braces still open.
    #[error("expression: unexpected brace count at {position}")]
    UnbalancedBrace { position: Position },

    /// A switch block was never closed.
    #[error("switch: missing end (expected '}}') at {position}")]
    UnterminatedBlock { position: Position },
}

impl ParseError {
    /// The position parsing had reached when the failure was raised.
    pub fn position(&self) -> Position {
        match self {
            ParseError::Go { position, .. }
            | ParseError::UnbalancedClosing { position }
            | ParseError::UnbalancedBrace { position }
            | ParseError::UnterminatedBlock { position } => *position,
        }
    }
}
