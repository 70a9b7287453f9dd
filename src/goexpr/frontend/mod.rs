//! The embedded-Go front end: a minimal, error-tolerant parser for exactly
//! the construct subset the boundary extractor slices. There is no
//! embeddable Go compiler to lean on from Rust, so the relevant parts of
//! the Go grammar are implemented directly, including automatic semicolon
//! insertion and the composite-literal restriction in control-flow
//! headers.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Block, CaseClauseNode, FuncDecl, SourceUnit, Stmt};
pub use parser::{SyntaxDiag, parse_unit};
