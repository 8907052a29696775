//! Lexeme records and qualified identities.

use std::fmt;

use crate::{Flags, Id, Key};

/// A qualified identity, such as `foo.bar`.
///
/// Element 0 is the package (`foo`), element 1 the name (`bar`). The
/// package is [`Id::INVALID`] for a plain `bar`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Qid(pub [Id; 2]);

impl Qid {
    #[inline]
    pub const fn unqualified(name: Id) -> Self {
        Qid([Id::INVALID, name])
    }

    #[inline]
    pub const fn qualified(package: Id, name: Id) -> Self {
        Qid([package, name])
    }

    /// The package, or `None` for an unqualified name.
    #[inline]
    pub fn package(self) -> Option<Id> {
        let [package, _] = self.0;
        (package != Id::INVALID).then_some(package)
    }

    #[inline]
    pub const fn name(self) -> Id {
        self.0[1]
    }

    #[inline]
    pub fn is_qualified(self) -> bool {
        self.0[0] != Id::INVALID
    }
}

/// An identity and the 1-based line it was seen on.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub id: Id,
    pub line: u32,
}

impl Token {
    #[inline]
    pub const fn new(id: Id, line: u32) -> Self {
        Token { id, line }
    }

    #[inline]
    pub const fn key(self) -> Key {
        self.id.key()
    }

    #[inline]
    pub const fn flags(self) -> Flags {
        self.id.flags()
    }

    #[inline]
    pub const fn is_built_in(self) -> bool {
        self.id.is_built_in()
    }

    #[inline]
    pub const fn is_unary_op(self) -> bool {
        self.id.is_unary_op()
    }

    #[inline]
    pub const fn is_binary_op(self) -> bool {
        self.id.is_binary_op()
    }

    #[inline]
    pub const fn is_associative_op(self) -> bool {
        self.id.is_associative_op()
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        self.id.is_literal()
    }

    #[inline]
    pub const fn is_num_literal(self) -> bool {
        self.id.is_num_literal()
    }

    #[inline]
    pub const fn is_str_literal(self) -> bool {
        self.id.is_str_literal()
    }

    #[inline]
    pub const fn is_ident(self) -> bool {
        self.id.is_ident()
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        self.id.is_open()
    }

    #[inline]
    pub const fn is_close(self) -> bool {
        self.id.is_close()
    }

    #[inline]
    pub const fn is_tight_left(self) -> bool {
        self.id.is_tight_left()
    }

    #[inline]
    pub const fn is_tight_right(self) -> bool {
        self.id.is_tight_right()
    }

    #[inline]
    pub const fn is_assign(self) -> bool {
        self.id.is_assign()
    }

    #[inline]
    pub const fn is_implicit_semicolon(self) -> bool {
        self.id.is_implicit_semicolon()
    }

    #[inline]
    pub const fn is_num_type(self) -> bool {
        self.id.is_num_type()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ line {}", self.id, self.line)
    }
}
