//! Grammatical property flags carried in the low 16 bits of an [`Id`](crate::Id).

use bitflags::bitflags;

bitflags! {
    /// Grammatical properties of a token identity.
    ///
    /// The flags are not exclusive. For example, `+` is a unary operator, a
    /// binary operator, and associative: `(a + b) + c` equals `a + (b + c)`.
    ///
    /// A valid identity has non-zero flags. If none of the other flags
    /// apply, [`Flags::OTHER`] is set.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u16 {
        /// None of the other flags apply (keywords).
        const OTHER = 0x0001;
        const UNARY_OP = 0x0002;
        const BINARY_OP = 0x0004;
        /// `(a op b) op c` equals `a op (b op c)`.
        const ASSOCIATIVE_OP = 0x0008;
        const LITERAL = 0x0010;
        const NUM_LITERAL = 0x0020;
        const STR_LITERAL = 0x0040;
        const IDENT = 0x0080;
        /// Opening bracket: `(`, `[` or `{`.
        const OPEN = 0x0100;
        /// Closing bracket: `)`, `]` or `}`.
        const CLOSE = 0x0200;
        /// No whitespace is printed before this token.
        const TIGHT_LEFT = 0x0400;
        /// No whitespace is printed after this token.
        const TIGHT_RIGHT = 0x0800;
        const ASSIGN = 0x1000;
        /// A line break after this token ends the statement.
        const IMPLICIT_SEMICOLON = 0x2000;
        /// Identifier naming a built-in numeric type, such as `u32`.
        const NUM_TYPE = 0x4000;
        // 0x8000: unused
    }
}

impl Flags {
    /// Number of bits an [`Id`](crate::Id) reserves for flags.
    pub const BITS: u32 = 16;

    /// Mask selecting the flag bits of a raw identity.
    pub const MASK: u32 = (1 << Self::BITS) - 1;

    /// Names of the set flags (e.g. `"UNARY_OP"`), in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        self.iter_names().map(|(name, _)| name)
    }
}
