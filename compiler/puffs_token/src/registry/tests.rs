use super::*;
use crate::Flags;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

/// Minimal registry handing out sequential keys from 0x100.
#[derive(Default)]
struct TestRegistry {
    by_name: FxHashMap<String, Id>,
    names: Vec<String>,
}

impl TestRegistry {
    fn first_key() -> u32 {
        u32::from(Key::NUM_BUILT_IN)
    }
}

impl NameRegistry for TestRegistry {
    fn resolve_user(&self, id: Id) -> Option<&str> {
        let index = u32::from(id.key().raw()).checked_sub(Self::first_key())?;
        self.names.get(index as usize).map(String::as_str)
    }

    fn allocate(&mut self, spelling: &str) -> Result<Id, RegistryError> {
        if let Some(&id) = self.by_name.get(spelling) {
            return Ok(id);
        }
        let next = Self::first_key() + u32::try_from(self.names.len()).unwrap_or(u32::MAX);
        let raw = u16::try_from(next).map_err(|_| RegistryError::KeySpaceExhausted { next })?;
        let id = Id::new(Key::new(raw), Flags::IDENT | Flags::IMPLICIT_SEMICOLON);
        self.names.push(spelling.to_owned());
        self.by_name.insert(spelling.to_owned(), id);
        Ok(id)
    }
}

#[test]
fn intern_prefers_built_ins() {
    let mut registry = TestRegistry::default();
    assert_eq!(intern(&mut registry, "u32"), Ok(Id::U32));
    assert_eq!(intern(&mut registry, "<<="), Ok(Id::SHIFT_L_EQ));
    assert!(registry.names.is_empty());
}

#[test]
fn intern_allocates_user_names_once() {
    let mut registry = TestRegistry::default();
    let first = intern(&mut registry, "width");
    let again = intern(&mut registry, "width");
    assert_eq!(first, again);
    assert_eq!(registry.names.len(), 1);
    let Ok(id) = first else {
        panic!("allocation failed: {first:?}");
    };
    assert!(!id.is_built_in());
    assert!(id.is_ident());
}

#[test]
fn intern_rejects_empty_spelling() {
    let mut registry = TestRegistry::default();
    assert_eq!(intern(&mut registry, ""), Err(RegistryError::EmptySpelling));
}

#[test]
fn resolve_routes_by_key_space() {
    let mut registry = TestRegistry::default();
    let Ok(height) = intern(&mut registry, "height") else {
        panic!("allocation failed");
    };
    assert_eq!(resolve(&registry, Id::RETURN), Some("return"));
    assert_eq!(resolve(&registry, height), Some("height"));
    assert_eq!(resolve(&registry, Id::X_BINARY_PLUS), None);
    assert_eq!(resolve(&registry, Id::new(Key::new(0x9999), Flags::IDENT)), None);
}

#[test]
fn display_renders_ids() {
    let registry = TestRegistry::default();
    assert_eq!(Id::AMP_HAT.display(&registry).to_string(), "&^");
    assert_eq!(Id::INVALID.display(&registry).to_string(), "<invalid>");
    assert_eq!(
        Id::new(Key::new(0x0300), Flags::IDENT).display(&registry).to_string(),
        "<unknown:0x03000080>"
    );
}

#[test]
fn display_renders_qualified_names() {
    let mut registry = TestRegistry::default();
    let (Ok(pkg), Ok(name)) = (intern(&mut registry, "base"), intern(&mut registry, "status")) else {
        panic!("allocation failed");
    };
    assert_eq!(Qid::qualified(pkg, name).display(&registry).to_string(), "base.status");
    assert_eq!(Qid::unqualified(name).display(&registry).to_string(), "status");
    assert_eq!(Qid::qualified(pkg, Id::U8).display(&registry).to_string(), "base.u8");
}

#[test]
fn error_messages() {
    assert_eq!(
        RegistryError::EmptySpelling.to_string(),
        "cannot intern an empty spelling"
    );
    assert_eq!(
        RegistryError::KeySpaceExhausted { next: 0x10000 }.to_string(),
        "name registry exhausted its key space at key 0x10000"
    );
    assert_eq!(
        RegistryError::Reserved {
            spelling: "if".to_owned()
        }
        .to_string(),
        "`if` is a built-in and cannot be allocated"
    );
}
