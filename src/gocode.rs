//! Glue between the cursor layer and the boundary extractor.
//!
//! The extractor works on plain strings in a private scaffolded coordinate
//! system; these wrappers feed it the remaining input, advance the cursor
//! by exactly the extracted length, and report positions in the caller's
//! coordinates.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::expression::Expression;
use crate::goexpr;

/// Extract the Go expression or control-flow header at the cursor.
/// `name` labels the enclosing construct in error messages.
pub fn go_expression(name: &str, input: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    let from = input.position();
    let src = input.rest();
    let expr = goexpr::extract_expression(src).map_err(|source| ParseError::Go {
        name: name.to_string(),
        source,
        position: from,
    })?;
    input.seek(from.index + expr.len());
    Ok(Expression::new(expr, from, input.position()))
}

/// Extract a template function signature at the cursor: `templ Name(args)`
/// is validated by scaffolding it as a Go `func` declaration, then the
/// original `templ ...` text through the byte before the opening brace is
/// consumed and returned.
pub fn go_template_decl(input: &mut Cursor<'_>) -> Result<Expression, ParseError> {
    const TEMPL_KW: &str = "templ ";
    const FUNC_KW: &str = "func ";

    let from = input.position();
    let src = input.rest();
    let err = |source| ParseError::Go {
        name: "template declaration".to_string(),
        source,
        position: from,
    };

    let Some(stripped) = src.strip_prefix(TEMPL_KW) else {
        return Err(err(goexpr::ExtractError::Syntax(
            "expected 'templ' keyword".to_string(),
        )));
    };
    let extracted = goexpr::extract_func(&format!("{FUNC_KW}{stripped}")).map_err(err)?;

    let consumed = extracted.len() + TEMPL_KW.len() - FUNC_KW.len();
    let text = &src[..consumed];
    input.seek(from.index + consumed);
    Ok(Expression::new(text, from, input.position()))
}
