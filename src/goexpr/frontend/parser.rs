//! Recursive-descent parser for the embedded-Go subset.
//!
//! Only constructs whose boundaries the extractor slices are parsed in
//! detail: function declarations, if/for/range/switch headers, the leading
//! case clause of a switch body, and expression statements. Block bodies
//! are skipped by token-level balanced-brace scanning; strings and
//! comments are atomic at the token level, so a brace inside a literal
//! never unbalances the skip. Statement parsing stops after the first
//! statement of the container body, leaving interleaved markup unparsed.

use std::fmt;

use super::ast::{Block, CaseClauseNode, FuncDecl, SourceUnit, Stmt};
use super::lexer::{self, Token, TokenKind};

/// The front end rejected the unit outright, with no usable tree at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiag {
    pub message: String,
    pub offset: usize,
}

impl fmt::Display for SyntaxDiag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for SyntaxDiag {}

/// Parse a compilation unit, tolerating garbage after the constructs of
/// interest. Returns `Err` only when not even a partial tree can be built
/// (a malformed package clause).
pub fn parse_unit(src: &str) -> Result<SourceUnit, SyntaxDiag> {
    Parser::new(src).unit()
}

struct ExprInfo {
    start: usize,
    end: usize,
    /// A `.(type)` assertion was seen: this expression is a type-switch
    /// guard, not a value.
    type_guard: bool,
    /// The operand is explicit literal-type syntax (`[]T`, `map[K]V`,
    /// `struct{...}`), whose composite braces are unambiguous even inside
    /// a control-flow header.
    literal_type: bool,
}

struct SimpleInfo {
    start: usize,
    end: usize,
    kind: SimpleKind,
    type_guard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimpleKind {
    Expr,
    Assign,
    IncDec,
    Send,
    /// `[list :=|=] range expr`, only valid in a for header.
    RangeHeader,
}

/// Statement-level parse failure; the caller converts it to a `Bad` node.
struct StmtError;

struct Parser<'a> {
    src: &'a str,
    toks: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            toks: lexer::tokenize(src),
            pos: 0,
        }
    }

    fn tok(&self) -> Token {
        self.toks[self.pos.min(self.toks.len() - 1)]
    }

    fn kind(&self) -> TokenKind {
        self.tok().kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    fn bump(&mut self) -> Token {
        let t = self.tok();
        if self.pos < self.toks.len() - 1 {
            self.pos += 1;
        }
        t
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.at(kind).then(|| self.bump())
    }

    fn text(&self, t: Token) -> &'a str {
        &self.src[t.start..t.end]
    }

    fn skip_semis(&mut self) {
        while self.at(TokenKind::Semi) {
            self.bump();
        }
    }

    // --- unit & declarations ---

    fn unit(mut self) -> Result<SourceUnit, SyntaxDiag> {
        if self.eat(TokenKind::Package).is_none() {
            return Err(SyntaxDiag {
                message: "expected package clause".to_string(),
                offset: self.tok().start,
            });
        }
        if self.eat(TokenKind::Ident).is_none() {
            return Err(SyntaxDiag {
                message: "expected package name".to_string(),
                offset: self.tok().start,
            });
        }
        self.skip_semis();

        let mut funcs = Vec::new();
        while self.at(TokenKind::Func) {
            funcs.push(self.func_decl());
            self.skip_semis();
        }
        Ok(SourceUnit { funcs })
    }

    fn func_decl(&mut self) -> FuncDecl {
        let start = self.bump().start; // func
        if self.at(TokenKind::LParen) {
            // method receiver
            self.skip_balanced(TokenKind::LParen, TokenKind::RParen);
        }
        let name = match self.eat(TokenKind::Ident) {
            Some(t) => self.text(t).to_string(),
            None => String::new(),
        };
        if self.at(TokenKind::LParen) {
            self.skip_balanced(TokenKind::LParen, TokenKind::RParen);
        }
        self.scan_result_type();
        let body = self.at(TokenKind::LBrace).then(|| self.block());
        FuncDecl { start, name, body }
    }

    /// Consume a (possibly absent) result type, stopping at the `{` that
    /// opens the body, a statement boundary, or end of input.
    fn scan_result_type(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::LBrace if depth == 0 => return,
                TokenKind::Semi | TokenKind::Eof if depth == 0 => return,
                TokenKind::LParen | TokenKind::LBracket => {
                    depth += 1;
                    self.bump();
                }
                TokenKind::RParen | TokenKind::RBracket => {
                    depth = depth.saturating_sub(1);
                    self.bump();
                }
                TokenKind::Struct | TokenKind::Interface => {
                    self.bump();
                    if self.at(TokenKind::LBrace) {
                        self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace);
                    }
                }
                TokenKind::Eof => return,
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// Parse a function body: record the `{` offset and the first
    /// statement, then skip to the matching `}`. Extraction dispatches on
    /// the first statement only; the rest of the body is never parsed.
    fn block(&mut self) -> Block {
        let lbrace = self.bump().start; // {
        self.skip_semis();

        let mut stmts = Vec::new();
        if !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let first = self.tok().start;
            match self.stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(StmtError) => stmts.push(Stmt::Bad {
                    start: first,
                    end: self.src.len(),
                }),
            }
        }
        self.skip_into_depth(1);
        Block { lbrace, stmts }
    }

    /// Consume tokens until the brace depth, starting at `depth`, returns
    /// to zero or input ends.
    fn skip_into_depth(&mut self, mut depth: usize) {
        while depth > 0 && !self.at(TokenKind::Eof) {
            match self.bump().kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
        }
    }

    /// With the cursor on `open`, consume through the matching `close`.
    /// Returns the end offset of the close token (end of input when
    /// unterminated).
    fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) -> usize {
        debug_assert!(self.at(open));
        let mut depth = 0usize;
        loop {
            let t = self.bump();
            if t.kind == open {
                depth += 1;
            } else if t.kind == close {
                depth -= 1;
                if depth == 0 {
                    return t.end;
                }
            } else if t.kind == TokenKind::Eof {
                return self.src.len();
            }
        }
    }

    // --- statements ---

    fn stmt(&mut self) -> Result<Stmt, StmtError> {
        match self.kind() {
            TokenKind::If => self.if_stmt(),
            TokenKind::For => self.for_stmt(),
            TokenKind::Switch => self.switch_stmt(),
            _ => {
                let s = self.simple_stmt(false, false)?;
                Ok(match s.kind {
                    SimpleKind::Expr => Stmt::Expr {
                        start: s.start,
                        end: s.end,
                    },
                    _ => Stmt::Simple {
                        start: s.start,
                        end: s.end,
                    },
                })
            }
        }
    }

    fn if_stmt(&mut self) -> Result<Stmt, StmtError> {
        let start = self.bump().start; // if
        let first = self.simple_stmt(true, false)?;
        if self.eat(TokenKind::Semi).is_some() {
            // `first` was the init statement; the condition follows.
            self.expr(true)?;
        } else if first.kind != SimpleKind::Expr {
            return Err(StmtError);
        }
        let lbrace = self.expect_body()?;
        Ok(Stmt::If { start, lbrace })
    }

    fn for_stmt(&mut self) -> Result<Stmt, StmtError> {
        let start = self.bump().start; // for

        if self.at(TokenKind::LBrace) {
            let lbrace = self.expect_body()?;
            return Ok(Stmt::For { start, lbrace });
        }
        if self.eat(TokenKind::Range).is_some() {
            self.expr(true)?;
            let lbrace = self.expect_body()?;
            return Ok(Stmt::Range { start, lbrace });
        }

        let first = if self.at(TokenKind::Semi) {
            None
        } else {
            Some(self.simple_stmt(true, true)?)
        };
        if first.as_ref().is_some_and(|s| s.kind == SimpleKind::RangeHeader) {
            let lbrace = self.expect_body()?;
            return Ok(Stmt::Range { start, lbrace });
        }

        if self.eat(TokenKind::Semi).is_some() {
            // three-clause form
            if !self.at(TokenKind::Semi) {
                self.expr(true)?;
            }
            if self.eat(TokenKind::Semi).is_none() {
                return Err(StmtError);
            }
            if !self.at(TokenKind::LBrace) {
                self.simple_stmt(true, false)?;
            }
        } else if first.as_ref().is_none_or(|s| s.kind != SimpleKind::Expr) {
            // condition form requires a bare expression
            return Err(StmtError);
        }
        let lbrace = self.expect_body()?;
        Ok(Stmt::For { start, lbrace })
    }

    fn switch_stmt(&mut self) -> Result<Stmt, StmtError> {
        let start = self.bump().start; // switch
        let mut type_switch = false;

        if !self.at(TokenKind::LBrace) {
            let first = self.simple_stmt(true, false)?;
            type_switch |= first.type_guard;
            if self.eat(TokenKind::Semi).is_some() && !self.at(TokenKind::LBrace) {
                let guard = self.simple_stmt(true, false)?;
                type_switch |= guard.type_guard;
            }
        }
        if !self.at(TokenKind::LBrace) {
            return Err(StmtError);
        }
        let lbrace = self.bump().start;

        if type_switch {
            self.skip_into_depth(1);
            return Ok(Stmt::TypeSwitch { start, lbrace });
        }

        // Only the leading clause is parsed; the composer re-invokes
        // extraction for each subsequent clause.
        self.skip_semis();
        let mut clauses = Vec::new();
        if let Some(clause) = self.leading_clause() {
            clauses.push(clause);
        }
        self.skip_into_depth(1);
        Ok(Stmt::Switch {
            start,
            lbrace,
            clauses,
        })
    }

    fn leading_clause(&mut self) -> Option<CaseClauseNode> {
        match self.kind() {
            TokenKind::Case => {
                let start = self.bump().start;
                self.expr(false).ok()?;
                while self.eat(TokenKind::Comma).is_some() {
                    self.expr(false).ok()?;
                }
                let colon = self.eat(TokenKind::Colon)?.start;
                Some(CaseClauseNode {
                    start,
                    colon,
                    is_default: false,
                })
            }
            TokenKind::Default => {
                let start = self.bump().start;
                let colon = self.eat(TokenKind::Colon)?.start;
                Some(CaseClauseNode {
                    start,
                    colon,
                    is_default: true,
                })
            }
            _ => None,
        }
    }

    fn expect_body(&mut self) -> Result<usize, StmtError> {
        if !self.at(TokenKind::LBrace) {
            return Err(StmtError);
        }
        let lbrace = self.tok().start;
        self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace);
        Ok(lbrace)
    }

    fn simple_stmt(&mut self, restricted: bool, allow_range: bool) -> Result<SimpleInfo, StmtError> {
        let first = self.expr(restricted)?;
        let start = first.start;
        let mut end = first.end;
        let mut type_guard = first.type_guard;
        let mut count = 1usize;
        while self.eat(TokenKind::Comma).is_some() {
            let e = self.expr(restricted)?;
            end = e.end;
            count += 1;
        }

        if is_assign_op(self.kind()) {
            self.bump();
            if allow_range && self.eat(TokenKind::Range).is_some() {
                let e = self.expr(restricted)?;
                return Ok(SimpleInfo {
                    start,
                    end: e.end,
                    kind: SimpleKind::RangeHeader,
                    type_guard: false,
                });
            }
            let mut rhs = self.expr(restricted)?;
            type_guard = rhs.type_guard;
            while self.eat(TokenKind::Comma).is_some() {
                rhs = self.expr(restricted)?;
                type_guard |= rhs.type_guard;
            }
            return Ok(SimpleInfo {
                start,
                end: rhs.end,
                kind: SimpleKind::Assign,
                type_guard,
            });
        }

        if matches!(self.kind(), TokenKind::Inc | TokenKind::Dec) {
            let t = self.bump();
            return Ok(SimpleInfo {
                start,
                end: t.end,
                kind: SimpleKind::IncDec,
                type_guard: false,
            });
        }

        if self.at(TokenKind::Arrow) {
            self.bump();
            let e = self.expr(restricted)?;
            return Ok(SimpleInfo {
                start,
                end: e.end,
                kind: SimpleKind::Send,
                type_guard: false,
            });
        }

        if count != 1 {
            return Err(StmtError);
        }
        Ok(SimpleInfo {
            start,
            end,
            kind: SimpleKind::Expr,
            type_guard,
        })
    }

    // --- expressions ---

    fn expr(&mut self, restricted: bool) -> Result<ExprInfo, StmtError> {
        self.binary_expr(restricted, 1)
    }

    fn binary_expr(&mut self, restricted: bool, min_prec: u8) -> Result<ExprInfo, StmtError> {
        let mut left = self.unary_expr(restricted)?;
        loop {
            let prec = binary_prec(self.kind());
            if prec < min_prec {
                return Ok(left);
            }
            self.bump();
            let right = self.binary_expr(restricted, prec + 1)?;
            left = ExprInfo {
                start: left.start,
                end: right.end,
                type_guard: false,
                literal_type: false,
            };
        }
    }

    fn unary_expr(&mut self, restricted: bool) -> Result<ExprInfo, StmtError> {
        use TokenKind::*;
        if matches!(self.kind(), Plus | Minus | Not | Caret | Star | Amp | Arrow) {
            let start = self.bump().start;
            let operand = self.unary_expr(restricted)?;
            return Ok(ExprInfo {
                start,
                end: operand.end,
                type_guard: false,
                literal_type: false,
            });
        }
        self.primary_expr(restricted)
    }

    fn primary_expr(&mut self, restricted: bool) -> Result<ExprInfo, StmtError> {
        let mut info = self.operand()?;
        loop {
            match self.kind() {
                TokenKind::Dot => {
                    self.bump();
                    if let Some(t) = self.eat(TokenKind::Ident) {
                        info.end = t.end;
                    } else if self.at(TokenKind::LParen) {
                        // type assertion, possibly the `.(type)` guard
                        let save = self.pos;
                        self.bump();
                        if self.eat(TokenKind::Type).is_some() && self.at(TokenKind::RParen) {
                            info.end = self.bump().end;
                            info.type_guard = true;
                        } else {
                            self.pos = save;
                            info.end = self.skip_balanced(TokenKind::LParen, TokenKind::RParen);
                        }
                    } else {
                        return Err(StmtError);
                    }
                    info.literal_type = false;
                }
                TokenKind::LParen => {
                    info.end = self.skip_balanced(TokenKind::LParen, TokenKind::RParen);
                    info.literal_type = false;
                }
                TokenKind::LBracket => {
                    info.end = self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket);
                }
                TokenKind::LBrace if !restricted || info.literal_type => {
                    info.end = self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace);
                    info.literal_type = false;
                }
                _ => return Ok(info),
            }
        }
    }

    /// An operand is parsed the same way in restricted and unrestricted
    /// contexts; the brace restriction only gates the composite-literal
    /// suffix in [`Self::primary_expr`]. Parentheses always lift it.
    fn operand(&mut self) -> Result<ExprInfo, StmtError> {
        use TokenKind::*;
        let t = self.tok();
        let plain = |start, end| ExprInfo {
            start,
            end,
            type_guard: false,
            literal_type: false,
        };
        match t.kind {
            Ident | Int | Float | Imag | StringLit | RuneLit => {
                self.bump();
                Ok(plain(t.start, t.end))
            }
            LParen => {
                self.bump();
                self.expr(false)?;
                match self.eat(RParen) {
                    Some(close) => Ok(plain(t.start, close.end)),
                    None => Err(StmtError),
                }
            }
            Func => {
                self.bump();
                if self.at(LParen) {
                    self.skip_balanced(LParen, RParen);
                }
                self.scan_result_type();
                if self.at(LBrace) {
                    let end = self.skip_balanced(LBrace, RBrace);
                    Ok(plain(t.start, end))
                } else {
                    Ok(plain(t.start, self.tok().start))
                }
            }
            LBracket => {
                self.skip_balanced(LBracket, RBracket);
                let end = self.type_expr()?;
                Ok(ExprInfo {
                    start: t.start,
                    end,
                    type_guard: false,
                    literal_type: true,
                })
            }
            Map => {
                self.bump();
                if !self.at(LBracket) {
                    return Err(StmtError);
                }
                self.skip_balanced(LBracket, RBracket);
                let end = self.type_expr()?;
                Ok(ExprInfo {
                    start: t.start,
                    end,
                    type_guard: false,
                    literal_type: true,
                })
            }
            Struct | Interface => {
                self.bump();
                if !self.at(LBrace) {
                    return Err(StmtError);
                }
                let end = self.skip_balanced(LBrace, RBrace);
                Ok(ExprInfo {
                    start: t.start,
                    end,
                    type_guard: false,
                    literal_type: true,
                })
            }
            Chan => {
                self.bump();
                self.eat(Arrow);
                let end = self.type_expr()?;
                Ok(plain(t.start, end))
            }
            _ => Err(StmtError),
        }
    }

    /// A type expression in element/value position (after `[]` or
    /// `map[...]`). Returns its end offset.
    fn type_expr(&mut self) -> Result<usize, StmtError> {
        use TokenKind::*;
        loop {
            match self.kind() {
                Star => {
                    self.bump();
                }
                LBracket => {
                    self.skip_balanced(LBracket, RBracket);
                }
                Chan => {
                    self.bump();
                    self.eat(Arrow);
                }
                _ => break,
            }
        }
        match self.kind() {
            Ident => {
                let mut end = self.bump().end;
                while self.at(Dot) {
                    let save = self.pos;
                    self.bump();
                    match self.eat(Ident) {
                        Some(t) => end = t.end,
                        None => {
                            self.pos = save;
                            break;
                        }
                    }
                }
                Ok(end)
            }
            Map => {
                self.bump();
                if !self.at(LBracket) {
                    return Err(StmtError);
                }
                self.skip_balanced(LBracket, RBracket);
                self.type_expr()
            }
            Struct | Interface => {
                self.bump();
                if !self.at(LBrace) {
                    return Err(StmtError);
                }
                Ok(self.skip_balanced(LBrace, RBrace))
            }
            Func => {
                self.bump();
                if !self.at(LParen) {
                    return Err(StmtError);
                }
                Ok(self.skip_balanced(LParen, RParen))
            }
            LParen => Ok(self.skip_balanced(LParen, RParen)),
            _ => Err(StmtError),
        }
    }
}

fn is_assign_op(kind: TokenKind) -> bool {
    use TokenKind::*;
    matches!(
        kind,
        Assign
            | Define
            | PlusAssign
            | MinusAssign
            | StarAssign
            | SlashAssign
            | PercentAssign
            | AmpAssign
            | PipeAssign
            | CaretAssign
            | AndNotAssign
            | ShlAssign
            | ShrAssign
    )
}

fn binary_prec(kind: TokenKind) -> u8 {
    use TokenKind::*;
    match kind {
        LOr => 1,
        LAnd => 2,
        Eq | Neq | Lt | Le | Gt | Ge => 3,
        Plus | Minus | Pipe | Caret => 4,
        Star | Slash | Percent | Shl | Shr | Amp | AndNot => 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(src: &str) -> SourceUnit {
        parse_unit(src).expect("unit should parse")
    }

    fn first_stmt(body: &str) -> Stmt {
        let src = format!("package main\nfunc templ_container() {{\n{body}");
        let u = unit(&src);
        let f = u.funcs.first().expect("function");
        f.body
            .as_ref()
            .expect("body")
            .stmts
            .first()
            .expect("statement")
            .clone()
    }

    const PREFIX: usize = "package main\nfunc templ_container() {\n".len();

    #[test]
    fn missing_package_clause_is_fatal() {
        assert!(parse_unit("func f() {}").is_err());
    }

    #[test]
    fn finds_container_function() {
        let u = unit("package main\nfunc templ_container() {\nx\n}");
        assert_eq!(u.funcs.len(), 1);
        assert_eq!(u.funcs[0].name, "templ_container");
        assert_eq!(u.funcs[0].start, "package main\n".len());
    }

    #[test]
    fn empty_body_has_no_statements() {
        let u = unit("package main\nfunc templ_container() {\n}");
        assert!(u.funcs[0].body.as_ref().unwrap().stmts.is_empty());
    }

    #[test]
    fn if_header_ends_at_body_brace() {
        let src = "if x && y && (!z) {\n<div></div>\n}";
        match first_stmt(src) {
            Stmt::If { start, lbrace } => {
                assert_eq!(start, PREFIX);
                assert_eq!(lbrace, PREFIX + src.find('{').unwrap());
            }
            s => panic!("expected if, got {s:?}"),
        }
    }

    #[test]
    fn if_with_init_statement() {
        match first_stmt("if x := val(); x > 3 {\n}") {
            Stmt::If { start, lbrace } => {
                assert_eq!(start, PREFIX);
                assert_eq!(lbrace, PREFIX + "if x := val(); x > 3 ".len());
            }
            s => panic!("expected if, got {s:?}"),
        }
    }

    #[test]
    fn condition_brace_is_not_a_composite_literal() {
        // `m {` must terminate the header, not start a literal `m{...}`.
        match first_stmt("if m {\n}") {
            Stmt::If { lbrace, .. } => assert_eq!(lbrace, PREFIX + 3),
            s => panic!("expected if, got {s:?}"),
        }
    }

    #[test]
    fn for_forms() {
        assert!(matches!(first_stmt("for {\n}"), Stmt::For { .. }));
        assert!(matches!(first_stmt("for n < 5 {\n}"), Stmt::For { .. }));
        assert!(matches!(
            first_stmt("for i := 0; i < 100; i++ {\n}"),
            Stmt::For { .. }
        ));
        assert!(matches!(first_stmt("for ; ; i++ {\n}"), Stmt::For { .. }));
        assert!(matches!(
            first_stmt("for k, v := range m {\n}"),
            Stmt::Range { .. }
        ));
        assert!(matches!(first_stmt("for range ch {\n}"), Stmt::Range { .. }));
    }

    #[test]
    fn switch_forms() {
        assert!(matches!(first_stmt("switch {\n}"), Stmt::Switch { .. }));
        assert!(matches!(first_stmt("switch x {\n}"), Stmt::Switch { .. }));
        assert!(matches!(
            first_stmt("switch pkg.Func() {\n}"),
            Stmt::Switch { .. }
        ));
        assert!(matches!(
            first_stmt("switch x := x.(type) {\n}"),
            Stmt::TypeSwitch { .. }
        ));
    }

    #[test]
    fn switch_records_leading_clause_colon() {
        let src = "switch {\ncase x > 3, x < 4:\n<div></div>\n}";
        match first_stmt(src) {
            Stmt::Switch { clauses, .. } => {
                let c = clauses.first().expect("clause");
                assert_eq!(c.start, PREFIX + src.find("case").unwrap());
                assert_eq!(c.colon, PREFIX + src.find(':').unwrap());
                assert!(!c.is_default);
            }
            s => panic!("expected switch, got {s:?}"),
        }
    }

    #[test]
    fn switch_records_default_clause() {
        match first_stmt("switch {\ndefault:\n<div></div>\n}") {
            Stmt::Switch { clauses, .. } => assert!(clauses[0].is_default),
            s => panic!("expected switch, got {s:?}"),
        }
    }

    #[test]
    fn expression_statement_spans_whole_call() {
        let body = "components[\"name\"].Other(func() bool { return true })}";
        match first_stmt(body) {
            Stmt::Expr { start, end } => {
                assert_eq!(start, PREFIX);
                assert_eq!(end, PREFIX + body.len() - 1); // excludes the closing }
            }
            s => panic!("expected expr, got {s:?}"),
        }
    }

    #[test]
    fn multiline_composite_argument() {
        let body = "component(map[string]string{\n\"namea\": \"name_a\",\n\"nameb\": \"name_b\",\n})}";
        match first_stmt(body) {
            Stmt::Expr { start, end } => {
                assert_eq!(start, PREFIX);
                assert_eq!(end, PREFIX + body.len() - 1);
            }
            s => panic!("expected expr, got {s:?}"),
        }
    }

    #[test]
    fn trailing_ellipsis_is_not_part_of_the_expression() {
        match first_stmt("children... }") {
            Stmt::Expr { start, end } => {
                assert_eq!(start, PREFIX);
                assert_eq!(end, PREFIX + "children".len());
            }
            s => panic!("expected expr, got {s:?}"),
        }
    }

    #[test]
    fn assignment_is_not_an_expression_statement() {
        assert!(matches!(first_stmt("x := 5\n}"), Stmt::Simple { .. }));
        assert!(matches!(first_stmt("x++\n}"), Stmt::Simple { .. }));
    }

    #[test]
    fn markup_garbage_is_a_bad_statement() {
        assert!(matches!(first_stmt("<div></div>"), Stmt::Bad { .. }));
    }

    #[test]
    fn case_outside_switch_is_a_bad_statement() {
        assert!(matches!(first_stmt("case 1:\n"), Stmt::Bad { .. }));
    }
}
