//! Parser core for templ HTML templates with embedded Go expressions.
//!
//! Two extraction engines do the real work. The boundary extractor
//! ([`goexpr`]) finds the exact span of keyword-prefixed Go fragments
//! (if/for/switch headers, case clauses, bare expressions) by scaffolding
//! them into a parseable unit and slicing on parse-tree offsets. The brace
//! scanner ([`scanner`]) handles spans delimited only by braces, counting
//! depth while treating literals and comments as opaque. On top of them,
//! [`switch_block`] composes a switch construct with its ordered clauses,
//! delegating clause bodies to an external template-node parser.

pub mod combinator;
pub mod cursor;
pub mod diagnostic;
pub mod error;
pub mod expression;
pub mod gocode;
pub mod goexpr;
pub mod literals;
pub mod scanner;
pub mod switch_block;

pub use cursor::Cursor;
pub use error::ParseError;
pub use expression::{Expression, Position, Range};
