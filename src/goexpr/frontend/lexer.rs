//! Tokenizer for the embedded-Go front end.
//!
//! Tolerant by construction: every input byte produces a token or is
//! skipped as trivia, so markup garbage after the construct of interest
//! lexes into `Illegal`/operator tokens instead of aborting. Semicolons are
//! inserted at newlines under the Go rule (after an identifier, literal,
//! `++`/`--`, `)`, `]`, `}`, or the keywords `break`/`continue`/
//! `fallthrough`/`return`).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    // keywords
    Package,
    Func,
    If,
    Else,
    For,
    Range,
    Switch,
    Case,
    Default,
    Type,
    Map,
    Chan,
    Struct,
    Interface,
    Go,
    Defer,
    Return,
    Break,
    Continue,
    Fallthrough,
    Select,
    Const,
    Var,
    Goto,
    Import,
    // literals
    Int,
    Float,
    Imag,
    StringLit,
    RuneLit,
    // delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semi,
    Colon,
    Dot,
    Ellipsis,
    // operators
    Assign,
    Define,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    AndNot,
    Shl,
    Shr,
    LAnd,
    LOr,
    Not,
    Arrow,
    Inc,
    Dec,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AmpAssign,
    PipeAssign,
    CaretAssign,
    AndNotAssign,
    ShlAssign,
    ShrAssign,
    Tilde,
    Illegal,
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// Tokenize the whole input. The returned vector always ends with an `Eof`
/// token.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer {
        src: src.as_bytes(),
        pos: 0,
    }
    .run()
}

struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
}

impl Lexer<'_> {
    fn run(mut self) -> Vec<Token> {
        let mut toks: Vec<Token> = Vec::new();
        loop {
            let newline = self.skip_trivia();
            if newline && asi_eligible(toks.last().map(|t| t.kind)) {
                toks.push(Token::new(TokenKind::Semi, self.pos, self.pos));
            }
            if self.pos >= self.src.len() {
                if asi_eligible(toks.last().map(|t| t.kind)) {
                    toks.push(Token::new(TokenKind::Semi, self.pos, self.pos));
                }
                toks.push(Token::new(TokenKind::Eof, self.pos, self.pos));
                return toks;
            }
            toks.push(self.next_token());
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.src.get(self.pos + ahead).copied()
    }

    /// Skip whitespace and comments. Returns whether a newline was crossed
    /// (a general comment containing one counts, as in the Go scanner).
    fn skip_trivia(&mut self) -> bool {
        let mut newline = false;
        loop {
            match (self.peek(0), self.peek(1)) {
                (Some(b' ' | b'\t' | b'\r'), _) => self.pos += 1,
                (Some(b'\n'), _) => {
                    newline = true;
                    self.pos += 1;
                }
                (Some(b'/'), Some(b'/')) => {
                    while self.peek(0).is_some_and(|b| b != b'\n') {
                        self.pos += 1;
                    }
                }
                (Some(b'/'), Some(b'*')) => {
                    self.pos += 2;
                    loop {
                        match (self.peek(0), self.peek(1)) {
                            (Some(b'*'), Some(b'/')) => {
                                self.pos += 2;
                                break;
                            }
                            (Some(b), _) => {
                                if b == b'\n' {
                                    newline = true;
                                }
                                self.pos += 1;
                            }
                            (None, _) => break,
                        }
                    }
                }
                _ => return newline,
            }
        }
    }

    fn next_token(&mut self) -> Token {
        let start = self.pos;
        let b = self.src[self.pos];
        match b {
            b'"' => self.quoted(TokenKind::StringLit, b'"', start),
            b'\'' => self.quoted(TokenKind::RuneLit, b'\'', start),
            b'`' => {
                self.pos += 1;
                while self.peek(0).is_some_and(|c| c != b'`') {
                    self.pos += 1;
                }
                if self.peek(0).is_some() {
                    self.pos += 1;
                }
                Token::new(TokenKind::StringLit, start, self.pos)
            }
            b'0'..=b'9' => self.number(start),
            b'.' if self.peek(1).is_some_and(|c| c.is_ascii_digit()) => self.number(start),
            _ if is_ident_start(b) => {
                while self.peek(0).is_some_and(is_ident_continue) {
                    self.pos += 1;
                }
                let kind = keyword_or_ident(&self.src[start..self.pos]);
                Token::new(kind, start, self.pos)
            }
            _ => self.operator(start),
        }
    }

    /// A `"` or `'` delimited literal. Backslash escapes the next byte;
    /// the token ends at the closing quote, or tolerantly at end of line /
    /// end of input when unterminated.
    fn quoted(&mut self, kind: TokenKind, quote: u8, start: usize) -> Token {
        self.pos += 1;
        loop {
            match self.peek(0) {
                None | Some(b'\n') => break,
                Some(b'\\') => self.pos += if self.peek(1).is_some() { 2 } else { 1 },
                Some(c) => {
                    self.pos += 1;
                    if c == quote {
                        break;
                    }
                }
            }
        }
        Token::new(kind, start, self.pos)
    }

    fn number(&mut self, start: usize) -> Token {
        let mut kind = TokenKind::Int;
        if self.peek(0) == Some(b'0') && matches!(self.peek(1), Some(b'x' | b'X' | b'o' | b'O' | b'b' | b'B')) {
            self.pos += 2;
            while self.peek(0).is_some_and(|c| c.is_ascii_hexdigit() || c == b'_') {
                self.pos += 1;
            }
        } else {
            while self.peek(0).is_some_and(|c| c.is_ascii_digit() || c == b'_') {
                self.pos += 1;
            }
            if self.peek(0) == Some(b'.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
                kind = TokenKind::Float;
                self.pos += 1;
                while self.peek(0).is_some_and(|c| c.is_ascii_digit() || c == b'_') {
                    self.pos += 1;
                }
            } else if self.peek(0) == Some(b'.') {
                kind = TokenKind::Float;
                self.pos += 1;
            }
            if matches!(self.peek(0), Some(b'e' | b'E')) {
                let skip = if matches!(self.peek(1), Some(b'+' | b'-')) { 2 } else { 1 };
                if self.peek(skip).is_some_and(|c| c.is_ascii_digit()) {
                    kind = TokenKind::Float;
                    self.pos += skip;
                    while self.peek(0).is_some_and(|c| c.is_ascii_digit() || c == b'_') {
                        self.pos += 1;
                    }
                }
            }
        }
        if self.peek(0) == Some(b'i') {
            kind = TokenKind::Imag;
            self.pos += 1;
        }
        Token::new(kind, start, self.pos)
    }

    fn operator(&mut self, start: usize) -> Token {
        use TokenKind::*;
        let rest = &self.src[self.pos..];
        let table: &[(&[u8], TokenKind)] = &[
            (b"...", Ellipsis),
            (b"<<=", ShlAssign),
            (b">>=", ShrAssign),
            (b"&^=", AndNotAssign),
            (b":=", Define),
            (b"==", Eq),
            (b"!=", Neq),
            (b"<=", Le),
            (b">=", Ge),
            (b"&&", LAnd),
            (b"||", LOr),
            (b"<-", Arrow),
            (b"++", Inc),
            (b"--", Dec),
            (b"+=", PlusAssign),
            (b"-=", MinusAssign),
            (b"*=", StarAssign),
            (b"/=", SlashAssign),
            (b"%=", PercentAssign),
            (b"&=", AmpAssign),
            (b"|=", PipeAssign),
            (b"^=", CaretAssign),
            (b"<<", Shl),
            (b">>", Shr),
            (b"&^", AndNot),
            (b"(", LParen),
            (b")", RParen),
            (b"[", LBracket),
            (b"]", RBracket),
            (b"{", LBrace),
            (b"}", RBrace),
            (b",", Comma),
            (b";", Semi),
            (b":", Colon),
            (b".", Dot),
            (b"=", Assign),
            (b"+", Plus),
            (b"-", Minus),
            (b"*", Star),
            (b"/", Slash),
            (b"%", Percent),
            (b"&", Amp),
            (b"|", Pipe),
            (b"^", Caret),
            (b"!", Not),
            (b"<", Lt),
            (b">", Gt),
            (b"~", Tilde),
        ];
        for &(text, kind) in table {
            if rest.starts_with(text) {
                self.pos += text.len();
                return Token::new(kind, start, self.pos);
            }
        }
        // Unknown byte; consume the whole UTF-8 sequence so we never split
        // a character.
        self.pos += 1;
        while self.peek(0).is_some_and(|c| (c & 0xC0) == 0x80) {
            self.pos += 1;
        }
        Token::new(Illegal, start, self.pos)
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

fn keyword_or_ident(word: &[u8]) -> TokenKind {
    use TokenKind::*;
    match word {
        b"package" => Package,
        b"func" => Func,
        b"if" => If,
        b"else" => Else,
        b"for" => For,
        b"range" => Range,
        b"switch" => Switch,
        b"case" => Case,
        b"default" => Default,
        b"type" => Type,
        b"map" => Map,
        b"chan" => Chan,
        b"struct" => Struct,
        b"interface" => Interface,
        b"go" => Go,
        b"defer" => Defer,
        b"return" => Return,
        b"break" => Break,
        b"continue" => Continue,
        b"fallthrough" => Fallthrough,
        b"select" => Select,
        b"const" => Const,
        b"var" => Var,
        b"goto" => Goto,
        b"import" => Import,
        _ => Ident,
    }
}

fn asi_eligible(last: Option<TokenKind>) -> bool {
    use TokenKind::*;
    matches!(
        last,
        Some(
            Ident
                | Int
                | Float
                | Imag
                | StringLit
                | RuneLit
                | Inc
                | Dec
                | RParen
                | RBracket
                | RBrace
                | Break
                | Continue
                | Fallthrough
                | Return
        )
    )
}
