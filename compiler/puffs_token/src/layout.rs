//! Token layout decisions driven by the tight and implicit-semicolon flags.
//!
//! These are the two questions a pretty-printer asks about adjacent tokens:
//! is there a space between them, and does a line break end the statement.

use crate::{Id, Key};

/// Whether a space separates `prev` and `next` when printed on one line.
///
/// No space after a token that is tight on its right (`(`, `.`), before a
/// token that is tight on its left (`)`, `,`), or after unary `+` and `-`
/// (`-x`). Unary `not` is a word and keeps its space.
pub fn needs_space(prev: Id, next: Id) -> bool {
    if prev.is_tight_right() || next.is_tight_left() {
        return false;
    }
    let key = prev.key();
    !(key == Key::X_UNARY_PLUS || key == Key::X_UNARY_MINUS)
}

/// Whether a line break after `last` synthesizes a statement terminator.
#[inline]
pub fn ends_statement(last: Id) -> bool {
    last.is_implicit_semicolon()
}
