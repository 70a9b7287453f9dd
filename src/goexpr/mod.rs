//! Boundary extraction for embedded Go fragments.
//!
//! Rather than guessing where an expression or control-flow header ends,
//! the fragment is wrapped in just enough scaffolding to form a parseable
//! compilation unit, handed to the Go front end, and the resulting node
//! offsets are used to slice the original text. The scaffold prefix sits
//! entirely before the caller's content, so every returned string is a
//! prefix of that content and the caller can advance its cursor by the
//! returned length.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub mod frontend;

use frontend::{Stmt, parse_unit};

/// Reserved name for the synthetic function that receives the fragment.
const CONTAINER_FUNC: &str = "templ_container";

const STMT_PREFIX: &str = "package main\nfunc templ_container() {\n";
const FILE_PREFIX: &str = "package main\n";

static ELSE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^else\s+\{").unwrap());
static ELSE_IF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(else\s+)if").unwrap());
static PREFIXED: LazyLock<[(Regex, Kind); 4]> = LazyLock::new(|| {
    [
        (Regex::new("^if").unwrap(), Kind::If),
        (Regex::new("^for").unwrap(), Kind::For),
        (Regex::new("^switch").unwrap(), Kind::Switch),
        (Regex::new("^(case|default)").unwrap(), Kind::Case),
    ]
});

/// What the boundary extractor can fail with. Positions are deliberately
/// absent: extraction works in a scaffolded coordinate system that callers
/// never see, so the cursor layer attaches its own position when wrapping
/// one of these into a [`crate::error::ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The front end could not produce even a partial tree.
    #[error("parser error: {0}")]
    Syntax(String),
    /// The synthetic container function was missing after an otherwise
    /// successful parse.
    #[error("parser error: templ container function not found")]
    ContainerNotFound,
    /// The fragment parsed, but not as the construct the rule requires.
    #[error("parser error: expected node not found")]
    StructureMismatch,
    /// The container body held no statements at all.
    #[error("parser error: empty body")]
    EmptyBody,
}

/// The closed set of extraction rules. Each variant slices one construct
/// shape; type switches satisfy [`Kind::Switch`] alongside expression
/// switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    If,
    For,
    Switch,
    /// Extracts the *first* case/default clause only. Iterating a block's
    /// remaining clauses is the switch composer's job, one call per clause.
    Case,
    Expr,
}

impl Kind {
    fn slice(self, src: &str, stmts: &[Stmt]) -> Result<String, ExtractError> {
        let text = match (self, &stmts[0]) {
            (Kind::If, Stmt::If { start, lbrace }) => &src[*start..lbrace + 1],
            (
                Kind::For,
                Stmt::For { start, lbrace } | Stmt::Range { start, lbrace },
            ) => &src[*start..lbrace + 1],
            (
                Kind::Switch,
                Stmt::Switch { start, lbrace, .. } | Stmt::TypeSwitch { start, lbrace },
            ) => &src[*start..lbrace + 1],
            (Kind::Case, Stmt::Switch { clauses, .. }) => {
                let clause = clauses.first().ok_or(ExtractError::StructureMismatch)?;
                &src[clause.start..clause.colon + 1]
            }
            (Kind::Expr, Stmt::Expr { start, end }) => &src[*start..*end],
            _ => return Err(ExtractError::StructureMismatch),
        };
        Ok(text.to_string())
    }
}

/// Extract the leading Go fragment from `content`.
///
/// Dispatches on the content's prefix: `else`/`else if` forms, case and
/// default clause headers, the `if`/`for`/`switch` keywords, and finally a
/// bare expression. The returned string is always a prefix of `content`.
pub fn extract_expression(content: &str) -> Result<String, ExtractError> {
    // `else {` is pure punctuation: there is no expression to validate, so
    // the literal match is the whole check.
    if let Some(m) = ELSE_BLOCK.find(content) {
        return Ok(m.as_str().to_string());
    }

    if let Some(caps) = ELSE_IF.captures(content) {
        let prefix = &caps[1];
        let expr = extract(Kind::If, &content[prefix.len()..])?;
        return Ok(format!("{prefix}{expr}"));
    }

    if content.starts_with("case") || content.starts_with("default") {
        return extract(Kind::Case, &format!("switch {{\n{content}\n}}"));
    }

    for (re, kind) in PREFIXED.iter() {
        if re.is_match(content) {
            return extract(*kind, content);
        }
    }

    let expr = extract(Kind::Expr, content)?;
    // A `...` suffix marks a child-spread expression.
    let suffix = content.get(expr.len()..).unwrap_or_default();
    if suffix.starts_with("...") {
        return Ok(format!("{expr}..."));
    }
    Ok(expr)
}

/// Extract a function signature: everything from `func` up to, but not
/// including, the `{` that opens its body. The first function declaration
/// in the fragment is used, whatever its name.
pub fn extract_func(content: &str) -> Result<String, ExtractError> {
    let padded = format!("{FILE_PREFIX}{content}");
    let unit = parse_unit(&padded).map_err(|e| ExtractError::Syntax(e.to_string()))?;
    let func = unit.funcs.first().ok_or(ExtractError::StructureMismatch)?;
    let body = func.body.as_ref().ok_or(ExtractError::StructureMismatch)?;
    Ok(padded[func.start..body.lbrace].to_string())
}

/// Run a single extraction rule against `content`.
pub fn extract(kind: Kind, content: &str) -> Result<String, ExtractError> {
    let padded = format!("{STMT_PREFIX}{content}");
    let unit = parse_unit(&padded).map_err(|e| ExtractError::Syntax(e.to_string()))?;
    let func = unit.funcs.first().ok_or(ExtractError::ContainerNotFound)?;
    if func.name != CONTAINER_FUNC {
        return Err(ExtractError::ContainerNotFound);
    }
    let body = func.body.as_ref().ok_or(ExtractError::EmptyBody)?;
    if body.stmts.is_empty() {
        return Err(ExtractError::EmptyBody);
    }
    kind.slice(&padded, &body.stmts)
}
