//! Container fragments for REPL blocks.
//!
//! Each builder escapes the block body and wraps it in the `<div>` that the
//! client-side widget (see [`crate::manifest`]) upgrades into an interactive
//! REPL. The `show-types` variant also displays the inferred type of each
//! evaluated expression.

use crate::block::Block;

use super::escape::escape_text;

/// Render a plain REPL block.
pub fn repl(block: &Block) -> String {
    fragment("elm-repl", &block.body)
}

/// Render a REPL block with inferred-type annotations enabled.
pub fn repl_with_types(block: &Block) -> String {
    fragment("elm-repl show-types", &block.body)
}

fn fragment(class: &str, body: &str) -> String {
    let escaped = escape_text(body);
    let mut out =
        String::with_capacity("<div class=\"\"></div>".len() + class.len() + escaped.len());
    out.push_str("<div class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&escaped);
    out.push_str("</div>");
    out
}
