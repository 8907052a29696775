//! Packed token identity: a [`Key`] in the high 16 bits, [`Flags`] in the low 16.

use std::fmt;

use crate::forms;
use crate::{Flags, Key};

/// A token identity.
///
/// Layout: 32-bit value split into key (16 bits) + flags (16 bits)
/// - Bits 31-16: [`Key`]
/// - Bits 15-0: [`Flags`]
///
/// Identities are plain values: copied freely and compared by equality.
/// Zero is [`Id::INVALID`]; every valid identity has at least one flag set.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Id(u32);

// Flag combinations shared by several built-ins.
const TIGHT: Flags = Flags::TIGHT_LEFT.union(Flags::TIGHT_RIGHT);
const BIN: Flags = Flags::BINARY_OP;
const BIN_ASSOC: Flags = Flags::BINARY_OP.union(Flags::ASSOCIATIVE_OP);
const KEYWORD_ENDS: Flags = Flags::OTHER.union(Flags::IMPLICIT_SEMICOLON);
const LITERAL: Flags = Flags::LITERAL.union(Flags::IMPLICIT_SEMICOLON);
const IDENT: Flags = Flags::IDENT.union(Flags::IMPLICIT_SEMICOLON);
const NUM_TYPE: Flags = IDENT.union(Flags::NUM_TYPE);

impl Id {
    pub const INVALID: Id = Id(0);

    // === Punctuation ===
    pub const OPEN_PAREN: Id = Id::new(
        Key::OPEN_PAREN,
        Flags::OPEN.union(Flags::TIGHT_RIGHT),
    );
    pub const CLOSE_PAREN: Id = Id::new(
        Key::CLOSE_PAREN,
        Flags::CLOSE
            .union(Flags::TIGHT_LEFT)
            .union(Flags::IMPLICIT_SEMICOLON),
    );
    pub const OPEN_BRACKET: Id = Id::new(Key::OPEN_BRACKET, Flags::OPEN.union(TIGHT));
    pub const CLOSE_BRACKET: Id = Id::new(
        Key::CLOSE_BRACKET,
        Flags::CLOSE
            .union(Flags::TIGHT_LEFT)
            .union(Flags::IMPLICIT_SEMICOLON),
    );
    pub const OPEN_CURLY: Id = Id::new(Key::OPEN_CURLY, Flags::OPEN);
    pub const CLOSE_CURLY: Id = Id::new(
        Key::CLOSE_CURLY,
        Flags::CLOSE.union(Flags::IMPLICIT_SEMICOLON),
    );

    pub const DOT: Id = Id::new(Key::DOT, TIGHT);
    pub const DOT_DOT: Id = Id::new(Key::DOT_DOT, TIGHT);
    pub const COMMA: Id = Id::new(Key::COMMA, Flags::TIGHT_LEFT);
    pub const EXCLAM: Id = Id::new(Key::EXCLAM, TIGHT);
    pub const QUESTION: Id = Id::new(Key::QUESTION, TIGHT);
    pub const COLON: Id = Id::new(Key::COLON, TIGHT);
    pub const SEMICOLON: Id = Id::new(Key::SEMICOLON, Flags::TIGHT_LEFT);

    // === Assignments ===
    pub const EQ: Id = Id::new(Key::EQ, Flags::ASSIGN);
    pub const PLUS_EQ: Id = Id::new(Key::PLUS_EQ, Flags::ASSIGN);
    pub const MINUS_EQ: Id = Id::new(Key::MINUS_EQ, Flags::ASSIGN);
    pub const STAR_EQ: Id = Id::new(Key::STAR_EQ, Flags::ASSIGN);
    pub const SLASH_EQ: Id = Id::new(Key::SLASH_EQ, Flags::ASSIGN);
    pub const SHIFT_L_EQ: Id = Id::new(Key::SHIFT_L_EQ, Flags::ASSIGN);
    pub const SHIFT_R_EQ: Id = Id::new(Key::SHIFT_R_EQ, Flags::ASSIGN);
    pub const AMP_EQ: Id = Id::new(Key::AMP_EQ, Flags::ASSIGN);
    pub const AMP_HAT_EQ: Id = Id::new(Key::AMP_HAT_EQ, Flags::ASSIGN);
    pub const PIPE_EQ: Id = Id::new(Key::PIPE_EQ, Flags::ASSIGN);
    pub const HAT_EQ: Id = Id::new(Key::HAT_EQ, Flags::ASSIGN);

    // === Operators ===
    pub const PLUS: Id = Id::new(Key::PLUS, BIN_ASSOC.union(Flags::UNARY_OP));
    pub const MINUS: Id = Id::new(Key::MINUS, BIN.union(Flags::UNARY_OP));
    pub const STAR: Id = Id::new(Key::STAR, BIN_ASSOC);
    pub const SLASH: Id = Id::new(Key::SLASH, BIN);
    pub const SHIFT_L: Id = Id::new(Key::SHIFT_L, BIN);
    pub const SHIFT_R: Id = Id::new(Key::SHIFT_R, BIN);
    pub const AMP: Id = Id::new(Key::AMP, BIN_ASSOC);
    pub const AMP_HAT: Id = Id::new(Key::AMP_HAT, BIN);
    pub const PIPE: Id = Id::new(Key::PIPE, BIN_ASSOC);
    pub const HAT: Id = Id::new(Key::HAT, BIN_ASSOC);

    pub const NOT_EQ: Id = Id::new(Key::NOT_EQ, BIN);
    pub const LESS_THAN: Id = Id::new(Key::LESS_THAN, BIN);
    pub const LESS_EQ: Id = Id::new(Key::LESS_EQ, BIN);
    pub const EQ_EQ: Id = Id::new(Key::EQ_EQ, BIN);
    pub const GREATER_EQ: Id = Id::new(Key::GREATER_EQ, BIN);
    pub const GREATER_THAN: Id = Id::new(Key::GREATER_THAN, BIN);

    pub const AND: Id = Id::new(Key::AND, BIN_ASSOC);
    pub const OR: Id = Id::new(Key::OR, BIN_ASSOC);
    pub const NOT: Id = Id::new(Key::NOT, Flags::UNARY_OP);
    pub const AS: Id = Id::new(Key::AS, BIN);

    // === Keywords ===
    pub const FUNC: Id = Id::new(Key::FUNC, Flags::OTHER);
    pub const PTR: Id = Id::new(Key::PTR, Flags::OTHER);
    pub const ASSERT: Id = Id::new(Key::ASSERT, Flags::OTHER);
    pub const WHILE: Id = Id::new(Key::WHILE, Flags::OTHER);
    pub const IF: Id = Id::new(Key::IF, Flags::OTHER);
    pub const ELSE: Id = Id::new(Key::ELSE, Flags::OTHER);
    pub const RETURN: Id = Id::new(Key::RETURN, KEYWORD_ENDS);
    pub const BREAK: Id = Id::new(Key::BREAK, KEYWORD_ENDS);
    pub const CONTINUE: Id = Id::new(Key::CONTINUE, KEYWORD_ENDS);
    pub const STRUCT: Id = Id::new(Key::STRUCT, Flags::OTHER);
    pub const USE: Id = Id::new(Key::USE, Flags::OTHER);
    pub const VAR: Id = Id::new(Key::VAR, Flags::OTHER);
    pub const IDEAL: Id = Id::new(Key::IDEAL, Flags::OTHER);
    pub const PRE: Id = Id::new(Key::PRE, Flags::OTHER);
    pub const POST: Id = Id::new(Key::POST, Flags::OTHER);
    pub const VIA: Id = Id::new(Key::VIA, Flags::OTHER);

    // === Literals ===
    pub const FALSE: Id = Id::new(Key::FALSE, LITERAL);
    pub const TRUE: Id = Id::new(Key::TRUE, LITERAL);

    // === Built-in identifiers ===
    pub const I8: Id = Id::new(Key::I8, NUM_TYPE);
    pub const I16: Id = Id::new(Key::I16, NUM_TYPE);
    pub const I32: Id = Id::new(Key::I32, NUM_TYPE);
    pub const I64: Id = Id::new(Key::I64, NUM_TYPE);
    pub const U8: Id = Id::new(Key::U8, NUM_TYPE);
    pub const U16: Id = Id::new(Key::U16, NUM_TYPE);
    pub const U32: Id = Id::new(Key::U32, NUM_TYPE);
    pub const U64: Id = Id::new(Key::U64, NUM_TYPE);
    pub const USIZE: Id = Id::new(Key::USIZE, NUM_TYPE);
    pub const BOOL: Id = Id::new(Key::BOOL, IDENT);
    pub const BUF1: Id = Id::new(Key::BUF1, IDENT);
    pub const BUF2: Id = Id::new(Key::BUF2, IDENT);

    pub const UNDERSCORE: Id = Id::new(Key::UNDERSCORE, IDENT);
    pub const THIS: Id = Id::new(Key::THIS, IDENT);
    pub const IN: Id = Id::new(Key::IN, IDENT);
    pub const OUT: Id = Id::new(Key::OUT, IDENT);

    // === Disambiguation forms ===
    //
    // Never produced by scanning. The parser converts an ambiguous operator
    // into one of these once it knows how the operator is used.
    pub const X_UNARY_PLUS: Id = Id::new(Key::X_UNARY_PLUS, Flags::UNARY_OP);
    pub const X_UNARY_MINUS: Id = Id::new(Key::X_UNARY_MINUS, Flags::UNARY_OP);
    pub const X_UNARY_NOT: Id = Id::new(Key::X_UNARY_NOT, Flags::UNARY_OP);

    pub const X_BINARY_PLUS: Id = Id::new(Key::X_BINARY_PLUS, BIN);
    pub const X_BINARY_MINUS: Id = Id::new(Key::X_BINARY_MINUS, BIN);
    pub const X_BINARY_STAR: Id = Id::new(Key::X_BINARY_STAR, BIN);
    pub const X_BINARY_SLASH: Id = Id::new(Key::X_BINARY_SLASH, BIN);
    pub const X_BINARY_SHIFT_L: Id = Id::new(Key::X_BINARY_SHIFT_L, BIN);
    pub const X_BINARY_SHIFT_R: Id = Id::new(Key::X_BINARY_SHIFT_R, BIN);
    pub const X_BINARY_AMP: Id = Id::new(Key::X_BINARY_AMP, BIN);
    pub const X_BINARY_AMP_HAT: Id = Id::new(Key::X_BINARY_AMP_HAT, BIN);
    pub const X_BINARY_PIPE: Id = Id::new(Key::X_BINARY_PIPE, BIN);
    pub const X_BINARY_HAT: Id = Id::new(Key::X_BINARY_HAT, BIN);
    pub const X_BINARY_NOT_EQ: Id = Id::new(Key::X_BINARY_NOT_EQ, BIN);
    pub const X_BINARY_LESS_THAN: Id = Id::new(Key::X_BINARY_LESS_THAN, BIN);
    pub const X_BINARY_LESS_EQ: Id = Id::new(Key::X_BINARY_LESS_EQ, BIN);
    pub const X_BINARY_EQ_EQ: Id = Id::new(Key::X_BINARY_EQ_EQ, BIN);
    pub const X_BINARY_GREATER_EQ: Id = Id::new(Key::X_BINARY_GREATER_EQ, BIN);
    pub const X_BINARY_GREATER_THAN: Id = Id::new(Key::X_BINARY_GREATER_THAN, BIN);
    pub const X_BINARY_AND: Id = Id::new(Key::X_BINARY_AND, BIN);
    pub const X_BINARY_OR: Id = Id::new(Key::X_BINARY_OR, BIN);
    pub const X_BINARY_AS: Id = Id::new(Key::X_BINARY_AS, BIN);

    pub const X_ASSOCIATIVE_PLUS: Id = Id::new(Key::X_ASSOCIATIVE_PLUS, Flags::ASSOCIATIVE_OP);
    pub const X_ASSOCIATIVE_STAR: Id = Id::new(Key::X_ASSOCIATIVE_STAR, Flags::ASSOCIATIVE_OP);
    pub const X_ASSOCIATIVE_AMP: Id = Id::new(Key::X_ASSOCIATIVE_AMP, Flags::ASSOCIATIVE_OP);
    pub const X_ASSOCIATIVE_PIPE: Id = Id::new(Key::X_ASSOCIATIVE_PIPE, Flags::ASSOCIATIVE_OP);
    pub const X_ASSOCIATIVE_HAT: Id = Id::new(Key::X_ASSOCIATIVE_HAT, Flags::ASSOCIATIVE_OP);
    pub const X_ASSOCIATIVE_AND: Id = Id::new(Key::X_ASSOCIATIVE_AND, Flags::ASSOCIATIVE_OP);
    pub const X_ASSOCIATIVE_OR: Id = Id::new(Key::X_ASSOCIATIVE_OR, Flags::ASSOCIATIVE_OP);

    /// Combine a key and flags.
    #[inline]
    pub const fn new(key: Key, flags: Flags) -> Self {
        Id(((key.raw() as u32) << Key::SHIFT) | flags.bits() as u32)
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Id(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn key(self) -> Key {
        Key::new((self.0 >> Key::SHIFT) as u16)
    }

    #[inline]
    pub const fn flags(self) -> Flags {
        Flags::from_bits_retain((self.0 & Flags::MASK) as u16)
    }

    /// Whether this identity has at least one flag set.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 & Flags::MASK != 0
    }

    #[inline]
    pub const fn is_built_in(self) -> bool {
        (self.0 >> Key::SHIFT) < Key::NUM_BUILT_IN as u32
    }

    /// Low byte of the key, the index into the disambiguation tables.
    #[inline]
    const fn form_index(self) -> usize {
        ((self.0 >> Key::SHIFT) & 0xFF) as usize
    }

    /// The plain built-in operator a disambiguation form was derived from.
    ///
    /// Returns [`Id::INVALID`] for identities that are not a form.
    #[inline]
    pub fn ambiguous_form(self) -> Id {
        forms::AMBIGUOUS_FORMS[self.form_index()]
    }

    /// The unary use of an operator, e.g. `-x`.
    ///
    /// Returns [`Id::INVALID`] when the operator has no unary use.
    #[inline]
    pub fn unary_form(self) -> Id {
        forms::UNARY_FORMS[self.form_index()]
    }

    /// The binary use of an operator, e.g. `x - y`.
    ///
    /// Compound assignments map to the binary form of their bare operator:
    /// `+=` and `+` share [`Id::X_BINARY_PLUS`].
    #[inline]
    pub fn binary_form(self) -> Id {
        forms::BINARY_FORMS[self.form_index()]
    }

    /// The associative-chain use of an operator, e.g. `x + y + z`.
    #[inline]
    pub fn associative_form(self) -> Id {
        forms::ASSOCIATIVE_FORMS[self.form_index()]
    }

    #[inline]
    const fn has(self, flag: Flags) -> bool {
        self.0 & flag.bits() as u32 != 0
    }

    #[inline]
    pub const fn is_unary_op(self) -> bool {
        self.has(Flags::UNARY_OP)
    }

    #[inline]
    pub const fn is_binary_op(self) -> bool {
        self.has(Flags::BINARY_OP)
    }

    #[inline]
    pub const fn is_associative_op(self) -> bool {
        self.has(Flags::ASSOCIATIVE_OP)
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        self.has(Flags::LITERAL)
    }

    #[inline]
    pub const fn is_num_literal(self) -> bool {
        self.has(Flags::NUM_LITERAL)
    }

    #[inline]
    pub const fn is_str_literal(self) -> bool {
        self.has(Flags::STR_LITERAL)
    }

    #[inline]
    pub const fn is_ident(self) -> bool {
        self.has(Flags::IDENT)
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        self.has(Flags::OPEN)
    }

    #[inline]
    pub const fn is_close(self) -> bool {
        self.has(Flags::CLOSE)
    }

    #[inline]
    pub const fn is_tight_left(self) -> bool {
        self.has(Flags::TIGHT_LEFT)
    }

    #[inline]
    pub const fn is_tight_right(self) -> bool {
        self.has(Flags::TIGHT_RIGHT)
    }

    #[inline]
    pub const fn is_assign(self) -> bool {
        self.has(Flags::ASSIGN)
    }

    #[inline]
    pub const fn is_implicit_semicolon(self) -> bool {
        self.has(Flags::IMPLICIT_SEMICOLON)
    }

    #[inline]
    pub const fn is_num_type(self) -> bool {
        self.has(Flags::NUM_TYPE)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id(key=0x{:02X}, flags=0x{:04X})",
            self.key().raw(),
            self.flags().bits()
        )
    }
}
