//! Puffs token identities.
//!
//! Every lexeme the Puffs front end deals with (punctuation, operators,
//! keywords, literals and identifiers) is represented by a single [`Id`]: a
//! 32-bit value whose high 16 bits are a stable [`Key`] and whose low 16 bits
//! are a [`Flags`] bitset describing its grammatical role.
//!
//! This crate contains:
//! - The identity encoding ([`Id`], [`Key`], [`Flags`], [`Qid`], [`Token`])
//! - The built-in symbol table ([`lookup_builtin_name`], [`spelling_of`])
//! - The disambiguation tables behind [`Id::unary_form`] and friends
//! - The seam to the external name registry ([`NameRegistry`])
//! - Layout helpers driven by the tight and implicit-semicolon flags
//!
//! # Design Philosophy
//!
//! - **Classify in O(1)**: every predicate is a single mask test
//! - **Static tables**: built at compile time or once on first use, never
//!   mutated afterwards
//! - **No allocation on hot paths**: identities are `Copy` values
//!
//! # Key Layout
//!
//! | Key range   | Category                        |
//! |-------------|---------------------------------|
//! | 0x01-0x2F   | Punctuation                     |
//! | 0x30-0x3F   | Assignments                     |
//! | 0x40-0x5F   | Operators                       |
//! | 0x60-0x8F   | Keywords                        |
//! | 0x90-0x9F   | Literals                        |
//! | 0xA0-0xBF   | Built-in identifiers            |
//! | 0xC0-0xFF   | Disambiguation forms            |
//!
//! Keys at or above 0x100 belong to the name registry.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod builtins;
mod flags;
mod forms;
mod id;
mod key;
pub mod layout;
mod registry;
mod token;

pub use builtins::{
    builtin_id_of_key, built_ins, lookup_builtin_name, spelling_of, try_spelling_of, BuiltIn,
};
pub use flags::Flags;
pub use id::Id;
pub use key::{Key, KeyCategory};
pub use registry::{intern, resolve, IdDisplay, NameRegistry, QidDisplay, RegistryError};
pub use token::{Qid, Token};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Id, Key, Qid, Token};
    crate::static_assert_size!(Key, 2);
    crate::static_assert_size!(Id, 4);
    // Qid: two Ids, no padding
    crate::static_assert_size!(Qid, 8);
    // Token: Id (4 bytes) + line (4 bytes)
    crate::static_assert_size!(Token, 8);
}
