//! Parse-tree nodes for the embedded-Go front end.
//!
//! Nodes carry byte offsets into the scaffolded source rather than full
//! expression trees: boundary extraction only ever needs where a construct
//! starts, where its body's opening brace sits, or where an expression
//! statement ends.

/// A parsed compilation unit. May be partial: statement parsing stops at
/// the first statement-level error, and anything unparseable inside a
/// function body surfaces as a [`Stmt::Bad`] node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub funcs: Vec<FuncDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Offset of the `func` keyword.
    pub start: usize,
    pub name: String,
    /// `None` for a declaration without a body.
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Offset of the opening `{`.
    pub lbrace: usize,
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `if [init;] cond {`: offsets of `if` and the body `{`.
    If { start: usize, lbrace: usize },
    /// `for [clauses] {`: plain, condition, or three-clause form.
    For { start: usize, lbrace: usize },
    /// `for ... range expr {`.
    Range { start: usize, lbrace: usize },
    /// `switch [init;] [tag] {` with its leading case/default clause, if
    /// one parsed. Only the first clause is recorded; iterating clauses
    /// belongs to the caller re-invoking extraction per clause.
    Switch {
        start: usize,
        lbrace: usize,
        clauses: Vec<CaseClauseNode>,
    },
    /// `switch [init;] x := y.(type) {`.
    TypeSwitch { start: usize, lbrace: usize },
    /// An expression statement; `start..end` is its full source span.
    Expr { start: usize, end: usize },
    /// Assignment, inc/dec, or channel send. Parseable but never
    /// extractable, so kind dispatch can report a mismatch.
    Simple { start: usize, end: usize },
    /// A region that failed to parse as any statement.
    Bad { start: usize, end: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseClauseNode {
    /// Offset of the `case` or `default` keyword.
    pub start: usize,
    /// Offset of the trailing `:`.
    pub colon: usize,
    pub is_default: bool,
}
