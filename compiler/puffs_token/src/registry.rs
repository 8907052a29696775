//! Seam to the name registry.
//!
//! The registry that interns user identifiers lives outside this crate. It
//! hands out identities with keys at or above [`Key::NUM_BUILT_IN`] and
//! resolves them back to text. This module routes built-ins through the
//! built-in table and everything else through the registry.

use std::fmt;

use crate::builtins::{lookup_builtin_name, try_spelling_of};
use crate::{Id, Key, Qid};

/// Error when allocating a name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("cannot intern an empty spelling")]
    EmptySpelling,
    /// Every key in `0x100..=0xFFFF` is taken.
    #[error("name registry exhausted its key space at key 0x{next:X}")]
    KeySpaceExhausted { next: u32 },
    /// The spelling belongs to a built-in and must not get a second identity.
    #[error("`{spelling}` is a built-in and cannot be allocated")]
    Reserved { spelling: String },
}

/// External name registry.
pub trait NameRegistry {
    /// Spelling of a non-built-in identity, or `None` if it was never
    /// allocated.
    fn resolve_user(&self, id: Id) -> Option<&str>;

    /// Intern a non-built-in spelling, returning its identity.
    ///
    /// Repeated calls with the same spelling return the same identity.
    fn allocate(&mut self, spelling: &str) -> Result<Id, RegistryError>;
}

/// Spelling of any identity, built-in or user-defined.
pub fn resolve<R: NameRegistry + ?Sized>(registry: &R, id: Id) -> Option<&str> {
    if id.is_built_in() {
        try_spelling_of(id.key())
    } else {
        registry.resolve_user(id)
    }
}

/// Identity of a spelling: the built-in table first, then the registry.
pub fn intern<R: NameRegistry + ?Sized>(
    registry: &mut R,
    spelling: &str,
) -> Result<Id, RegistryError> {
    if let Some(id) = lookup_builtin_name(spelling) {
        return Ok(id);
    }
    if spelling.is_empty() {
        return Err(RegistryError::EmptySpelling);
    }
    let id = registry.allocate(spelling)?;
    debug_assert!(
        id.key().raw() >= Key::NUM_BUILT_IN,
        "registry allocated {id:?} inside the built-in key space"
    );
    tracing::trace!(spelling, key = id.key().raw(), "interned user name");
    Ok(id)
}

/// [`fmt::Display`] adapter for an [`Id`].
pub struct IdDisplay<'a, R: ?Sized> {
    id: Id,
    registry: &'a R,
}

/// [`fmt::Display`] adapter for a [`Qid`], rendering `pkg.name` or `name`.
pub struct QidDisplay<'a, R: ?Sized> {
    qid: Qid,
    registry: &'a R,
}

fn write_id<R: NameRegistry + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    registry: &R,
    id: Id,
) -> fmt::Result {
    match resolve(registry, id) {
        Some(name) => f.write_str(name),
        None if id == Id::INVALID => f.write_str("<invalid>"),
        None => write!(f, "<unknown:0x{:08X}>", id.raw()),
    }
}

impl<R: NameRegistry + ?Sized> fmt::Display for IdDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_id(f, self.registry, self.id)
    }
}

impl<R: NameRegistry + ?Sized> fmt::Display for QidDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = self.qid.package() {
            write_id(f, self.registry, package)?;
            f.write_str(".")?;
        }
        write_id(f, self.registry, self.qid.name())
    }
}

impl Id {
    /// Render this identity through `registry`.
    pub fn display<R: NameRegistry + ?Sized>(self, registry: &R) -> IdDisplay<'_, R> {
        IdDisplay { id: self, registry }
    }
}

impl Qid {
    /// Render this qualified identity through `registry`.
    pub fn display<R: NameRegistry + ?Sized>(self, registry: &R) -> QidDisplay<'_, R> {
        QidDisplay { qid: self, registry }
    }
}

#[cfg(test)]
mod tests;
