//! Stable, array-indexable identity of a lexeme kind.

use std::fmt;

/// The high 16 bits of an [`Id`](crate::Id).
///
/// Keys below [`Key::NUM_BUILT_IN`] are fixed by the language; everything
/// above is handed out by the name registry. Zero is never assigned.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Key(u16);

/// Lexical category implied by a [`Key`]'s numeric band.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeyCategory {
    Invalid,
    /// `(`, `;`, `..` and friends.
    Punctuation,
    /// `=` and the compound assignments such as `+=` and `&^=`.
    Assignment,
    /// `+`, `==`, `not`, ...
    Operator,
    Keyword,
    Literal,
    /// Built-in identifiers and type names such as `bool`, `u32` and `_`.
    Ident,
    /// Unary, binary and associative disambiguation forms.
    Form,
    /// Allocated by the name registry (`0x100` and above).
    User,
}

impl Key {
    /// Number of bits of an [`Id`](crate::Id) holding the key.
    pub const BITS: u32 = 16;

    /// Shift from an [`Id`](crate::Id) to its key.
    pub const SHIFT: u32 = 16;

    /// Exclusive upper bound of built-in keys.
    pub const NUM_BUILT_IN: u16 = 256;

    /// First key reserved for disambiguation forms.
    pub const MIN_FORM: u16 = 0xC0;

    /// Last key reserved for disambiguation forms.
    pub const MAX_FORM: u16 = 0xFF;

    pub const INVALID: Key = Key(0);

    // === Punctuation ===
    pub const OPEN_PAREN: Key = Key(0x10);
    pub const CLOSE_PAREN: Key = Key(0x11);
    pub const OPEN_BRACKET: Key = Key(0x12);
    pub const CLOSE_BRACKET: Key = Key(0x13);
    pub const OPEN_CURLY: Key = Key(0x14);
    pub const CLOSE_CURLY: Key = Key(0x15);

    pub const DOT: Key = Key(0x20);
    pub const DOT_DOT: Key = Key(0x21);
    pub const COMMA: Key = Key(0x22);
    pub const EXCLAM: Key = Key(0x23);
    pub const QUESTION: Key = Key(0x24);
    pub const COLON: Key = Key(0x25);
    pub const SEMICOLON: Key = Key(0x26);

    // === Assignments ===
    pub const EQ: Key = Key(0x30);
    pub const PLUS_EQ: Key = Key(0x31);
    pub const MINUS_EQ: Key = Key(0x32);
    pub const STAR_EQ: Key = Key(0x33);
    pub const SLASH_EQ: Key = Key(0x34);
    pub const SHIFT_L_EQ: Key = Key(0x35);
    pub const SHIFT_R_EQ: Key = Key(0x36);
    pub const AMP_EQ: Key = Key(0x37);
    pub const AMP_HAT_EQ: Key = Key(0x38);
    pub const PIPE_EQ: Key = Key(0x39);
    pub const HAT_EQ: Key = Key(0x3A);

    // === Operators ===
    pub const PLUS: Key = Key(0x41);
    pub const MINUS: Key = Key(0x42);
    pub const STAR: Key = Key(0x43);
    pub const SLASH: Key = Key(0x44);
    pub const SHIFT_L: Key = Key(0x45);
    pub const SHIFT_R: Key = Key(0x46);
    pub const AMP: Key = Key(0x47);
    pub const AMP_HAT: Key = Key(0x48);
    pub const PIPE: Key = Key(0x49);
    pub const HAT: Key = Key(0x4A);

    pub const NOT_EQ: Key = Key(0x50);
    pub const LESS_THAN: Key = Key(0x51);
    pub const LESS_EQ: Key = Key(0x52);
    pub const EQ_EQ: Key = Key(0x53);
    pub const GREATER_EQ: Key = Key(0x54);
    pub const GREATER_THAN: Key = Key(0x55);

    pub const AND: Key = Key(0x58);
    pub const OR: Key = Key(0x59);
    pub const NOT: Key = Key(0x5A);
    pub const AS: Key = Key(0x5B);

    // === Keywords ===
    pub const FUNC: Key = Key(0x60);
    pub const PTR: Key = Key(0x61);
    pub const ASSERT: Key = Key(0x62);
    pub const WHILE: Key = Key(0x63);
    pub const IF: Key = Key(0x64);
    pub const ELSE: Key = Key(0x65);
    pub const RETURN: Key = Key(0x66);
    pub const BREAK: Key = Key(0x67);
    pub const CONTINUE: Key = Key(0x68);
    pub const STRUCT: Key = Key(0x69);
    pub const USE: Key = Key(0x6A);
    pub const VAR: Key = Key(0x6B);
    pub const IDEAL: Key = Key(0x6C);
    pub const PRE: Key = Key(0x6D);
    pub const POST: Key = Key(0x6E);
    pub const VIA: Key = Key(0x6F);

    // === Literals ===
    pub const FALSE: Key = Key(0x90);
    pub const TRUE: Key = Key(0x91);

    // === Built-in identifiers ===
    pub const I8: Key = Key(0xA0);
    pub const I16: Key = Key(0xA1);
    pub const I32: Key = Key(0xA2);
    pub const I64: Key = Key(0xA3);
    pub const U8: Key = Key(0xA4);
    pub const U16: Key = Key(0xA5);
    pub const U32: Key = Key(0xA6);
    pub const U64: Key = Key(0xA7);
    pub const USIZE: Key = Key(0xA8);
    pub const BOOL: Key = Key(0xA9);
    pub const BUF1: Key = Key(0xAA);
    pub const BUF2: Key = Key(0xAB);

    pub const UNDERSCORE: Key = Key(0xB0);
    pub const THIS: Key = Key(0xB1);
    pub const IN: Key = Key(0xB2);
    pub const OUT: Key = Key(0xB3);

    // === Disambiguation forms ===
    pub const X_UNARY_PLUS: Key = Key(0xC0);
    pub const X_UNARY_MINUS: Key = Key(0xC1);
    pub const X_UNARY_NOT: Key = Key(0xC2);

    pub const X_BINARY_PLUS: Key = Key(0xD0);
    pub const X_BINARY_MINUS: Key = Key(0xD1);
    pub const X_BINARY_STAR: Key = Key(0xD2);
    pub const X_BINARY_SLASH: Key = Key(0xD3);
    pub const X_BINARY_SHIFT_L: Key = Key(0xD4);
    pub const X_BINARY_SHIFT_R: Key = Key(0xD5);
    pub const X_BINARY_AMP: Key = Key(0xD6);
    pub const X_BINARY_AMP_HAT: Key = Key(0xD7);
    pub const X_BINARY_PIPE: Key = Key(0xD8);
    pub const X_BINARY_HAT: Key = Key(0xD9);
    pub const X_BINARY_NOT_EQ: Key = Key(0xDA);
    pub const X_BINARY_LESS_THAN: Key = Key(0xDB);
    pub const X_BINARY_LESS_EQ: Key = Key(0xDC);
    pub const X_BINARY_EQ_EQ: Key = Key(0xDD);
    pub const X_BINARY_GREATER_EQ: Key = Key(0xDE);
    pub const X_BINARY_GREATER_THAN: Key = Key(0xDF);
    pub const X_BINARY_AND: Key = Key(0xE0);
    pub const X_BINARY_OR: Key = Key(0xE1);
    pub const X_BINARY_AS: Key = Key(0xE2);

    pub const X_ASSOCIATIVE_PLUS: Key = Key(0xF0);
    pub const X_ASSOCIATIVE_STAR: Key = Key(0xF1);
    pub const X_ASSOCIATIVE_AMP: Key = Key(0xF2);
    pub const X_ASSOCIATIVE_PIPE: Key = Key(0xF3);
    pub const X_ASSOCIATIVE_HAT: Key = Key(0xF4);
    pub const X_ASSOCIATIVE_AND: Key = Key(0xF5);
    pub const X_ASSOCIATIVE_OR: Key = Key(0xF6);

    #[inline]
    pub const fn new(raw: u16) -> Self {
        Key(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The key as a table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this key lies in the built-in key space (forms included).
    #[inline]
    pub const fn is_built_in(self) -> bool {
        self.0 < Self::NUM_BUILT_IN
    }

    /// Whether this key lies in the disambiguation-form band.
    #[inline]
    pub const fn is_form(self) -> bool {
        self.0 >= Self::MIN_FORM && self.0 <= Self::MAX_FORM
    }

    /// Lexical category implied by the key's numeric band.
    pub const fn category(self) -> KeyCategory {
        match self.0 {
            0 => KeyCategory::Invalid,
            0x01..=0x2F => KeyCategory::Punctuation,
            0x30..=0x3F => KeyCategory::Assignment,
            0x40..=0x5F => KeyCategory::Operator,
            0x60..=0x8F => KeyCategory::Keyword,
            0x90..=0x9F => KeyCategory::Literal,
            0xA0..=0xBF => KeyCategory::Ident,
            0xC0..=0xFF => KeyCategory::Form,
            _ => KeyCategory::User,
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(0x{:02X})", self.0)
    }
}
