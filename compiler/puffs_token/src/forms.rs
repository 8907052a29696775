//! Disambiguation tables.
//!
//! The scanner cannot know whether `-` is prefix or infix, so it always
//! returns the ambiguous identity. The parser later asks for the unary,
//! binary or associative view through [`Id::unary_form`] and friends, and
//! the pretty-printer goes back through [`Id::ambiguous_form`].
//!
//! All four tables are indexed by the low byte of a key and built at
//! compile time from the pair lists below. The ambiguous table is derived as
//! the inverse of the three forward lists, so the two directions cannot
//! disagree.

use crate::{Id, Key};

type FormTable = [Id; 256];

/// `(ambiguous, unary form)`.
const UNARY: &[(Id, Id)] = &[
    (Id::PLUS, Id::X_UNARY_PLUS),
    (Id::MINUS, Id::X_UNARY_MINUS),
    (Id::NOT, Id::X_UNARY_NOT),
];

/// `(ambiguous, binary form)`.
const BINARY: &[(Id, Id)] = &[
    (Id::PLUS, Id::X_BINARY_PLUS),
    (Id::MINUS, Id::X_BINARY_MINUS),
    (Id::STAR, Id::X_BINARY_STAR),
    (Id::SLASH, Id::X_BINARY_SLASH),
    (Id::SHIFT_L, Id::X_BINARY_SHIFT_L),
    (Id::SHIFT_R, Id::X_BINARY_SHIFT_R),
    (Id::AMP, Id::X_BINARY_AMP),
    (Id::AMP_HAT, Id::X_BINARY_AMP_HAT),
    (Id::PIPE, Id::X_BINARY_PIPE),
    (Id::HAT, Id::X_BINARY_HAT),
    (Id::NOT_EQ, Id::X_BINARY_NOT_EQ),
    (Id::LESS_THAN, Id::X_BINARY_LESS_THAN),
    (Id::LESS_EQ, Id::X_BINARY_LESS_EQ),
    (Id::EQ_EQ, Id::X_BINARY_EQ_EQ),
    (Id::GREATER_EQ, Id::X_BINARY_GREATER_EQ),
    (Id::GREATER_THAN, Id::X_BINARY_GREATER_THAN),
    (Id::AND, Id::X_BINARY_AND),
    (Id::OR, Id::X_BINARY_OR),
    (Id::AS, Id::X_BINARY_AS),
];

/// `(compound assignment, bare operator)`. A compound assignment binarizes
/// to its bare operator's binary form.
const COMPOUND_ASSIGN: &[(Id, Id)] = &[
    (Id::PLUS_EQ, Id::PLUS),
    (Id::MINUS_EQ, Id::MINUS),
    (Id::STAR_EQ, Id::STAR),
    (Id::SLASH_EQ, Id::SLASH),
    (Id::SHIFT_L_EQ, Id::SHIFT_L),
    (Id::SHIFT_R_EQ, Id::SHIFT_R),
    (Id::AMP_EQ, Id::AMP),
    (Id::AMP_HAT_EQ, Id::AMP_HAT),
    (Id::PIPE_EQ, Id::PIPE),
    (Id::HAT_EQ, Id::HAT),
];

/// `(ambiguous, associative form)`: operators where `(a op b) op c` equals
/// `a op (b op c)`.
const ASSOCIATIVE: &[(Id, Id)] = &[
    (Id::PLUS, Id::X_ASSOCIATIVE_PLUS),
    (Id::STAR, Id::X_ASSOCIATIVE_STAR),
    (Id::AMP, Id::X_ASSOCIATIVE_AMP),
    (Id::PIPE, Id::X_ASSOCIATIVE_PIPE),
    (Id::HAT, Id::X_ASSOCIATIVE_HAT),
    (Id::AND, Id::X_ASSOCIATIVE_AND),
    (Id::OR, Id::X_ASSOCIATIVE_OR),
];

const fn fill_forward(mut table: FormTable, pairs: &[(Id, Id)]) -> FormTable {
    let mut i = 0;
    while i < pairs.len() {
        let (ambiguous, form) = pairs[i];
        assert!(!ambiguous.key().is_form(), "ambiguous operator in the form band");
        assert!(form.key().is_form(), "form outside the form band");
        assert!(table[ambiguous.key().index()].raw() == 0, "duplicate form");
        table[ambiguous.key().index()] = form;
        i += 1;
    }
    table
}

const fn build_binary() -> FormTable {
    let mut table = fill_forward([Id::INVALID; 256], BINARY);
    let mut i = 0;
    while i < COMPOUND_ASSIGN.len() {
        let (assign, op) = COMPOUND_ASSIGN[i];
        let form = table[op.key().index()];
        assert!(form.raw() != 0, "compound assignment over a non-binary operator");
        assert!(table[assign.key().index()].raw() == 0, "duplicate form");
        table[assign.key().index()] = form;
        i += 1;
    }
    table
}

const fn fill_inverse(mut table: FormTable, pairs: &[(Id, Id)]) -> FormTable {
    let mut i = 0;
    while i < pairs.len() {
        let (ambiguous, form) = pairs[i];
        assert!(table[form.key().index()].raw() == 0, "form key used twice");
        table[form.key().index()] = ambiguous;
        i += 1;
    }
    table
}

const fn build_ambiguous() -> FormTable {
    let table = fill_inverse([Id::INVALID; 256], UNARY);
    let table = fill_inverse(table, BINARY);
    fill_inverse(table, ASSOCIATIVE)
}

pub(crate) static UNARY_FORMS: FormTable = fill_forward([Id::INVALID; 256], UNARY);
pub(crate) static BINARY_FORMS: FormTable = build_binary();
pub(crate) static ASSOCIATIVE_FORMS: FormTable = fill_forward([Id::INVALID; 256], ASSOCIATIVE);
pub(crate) static AMBIGUOUS_FORMS: FormTable = build_ambiguous();

// Every disambiguation key must fit the 8-bit table index.
const _: () = assert!(Key::MAX_FORM < 256);

#[cfg(test)]
mod tests;
