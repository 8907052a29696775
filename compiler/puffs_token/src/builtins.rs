//! Built-in symbol table.
//!
//! A single authoritative list of `(spelling, identity)` entries feeds both
//! lookup directions:
//! - a dense `[BuiltIn; 256]` array indexed by [`Key`], built at compile
//!   time. Duplicate keys, key zero and keys in the disambiguation
//!   band fail the build.
//! - a spelling-to-identity map, built once on first use.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::{Id, Key};

/// A built-in spelling and its identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuiltIn {
    pub name: &'static str,
    pub id: Id,
}

impl BuiltIn {
    const EMPTY: BuiltIn = BuiltIn::new("", Id::INVALID);

    const fn new(name: &'static str, id: Id) -> Self {
        BuiltIn { name, id }
    }
}

const ENTRIES: &[BuiltIn] = &[
    BuiltIn::new("(", Id::OPEN_PAREN),
    BuiltIn::new(")", Id::CLOSE_PAREN),
    BuiltIn::new("[", Id::OPEN_BRACKET),
    BuiltIn::new("]", Id::CLOSE_BRACKET),
    BuiltIn::new("{", Id::OPEN_CURLY),
    BuiltIn::new("}", Id::CLOSE_CURLY),
    BuiltIn::new(".", Id::DOT),
    BuiltIn::new("..", Id::DOT_DOT),
    BuiltIn::new(",", Id::COMMA),
    BuiltIn::new("!", Id::EXCLAM),
    BuiltIn::new("?", Id::QUESTION),
    BuiltIn::new(":", Id::COLON),
    BuiltIn::new(";", Id::SEMICOLON),
    BuiltIn::new("=", Id::EQ),
    BuiltIn::new("+=", Id::PLUS_EQ),
    BuiltIn::new("-=", Id::MINUS_EQ),
    BuiltIn::new("*=", Id::STAR_EQ),
    BuiltIn::new("/=", Id::SLASH_EQ),
    BuiltIn::new("<<=", Id::SHIFT_L_EQ),
    BuiltIn::new(">>=", Id::SHIFT_R_EQ),
    BuiltIn::new("&=", Id::AMP_EQ),
    BuiltIn::new("&^=", Id::AMP_HAT_EQ),
    BuiltIn::new("|=", Id::PIPE_EQ),
    BuiltIn::new("^=", Id::HAT_EQ),
    BuiltIn::new("+", Id::PLUS),
    BuiltIn::new("-", Id::MINUS),
    BuiltIn::new("*", Id::STAR),
    BuiltIn::new("/", Id::SLASH),
    BuiltIn::new("<<", Id::SHIFT_L),
    BuiltIn::new(">>", Id::SHIFT_R),
    BuiltIn::new("&", Id::AMP),
    BuiltIn::new("&^", Id::AMP_HAT),
    BuiltIn::new("|", Id::PIPE),
    BuiltIn::new("^", Id::HAT),
    BuiltIn::new("!=", Id::NOT_EQ),
    BuiltIn::new("<", Id::LESS_THAN),
    BuiltIn::new("<=", Id::LESS_EQ),
    BuiltIn::new("==", Id::EQ_EQ),
    BuiltIn::new(">=", Id::GREATER_EQ),
    BuiltIn::new(">", Id::GREATER_THAN),
    BuiltIn::new("and", Id::AND),
    BuiltIn::new("or", Id::OR),
    BuiltIn::new("not", Id::NOT),
    BuiltIn::new("as", Id::AS),
    BuiltIn::new("func", Id::FUNC),
    BuiltIn::new("ptr", Id::PTR),
    BuiltIn::new("assert", Id::ASSERT),
    BuiltIn::new("while", Id::WHILE),
    BuiltIn::new("if", Id::IF),
    BuiltIn::new("else", Id::ELSE),
    BuiltIn::new("return", Id::RETURN),
    BuiltIn::new("break", Id::BREAK),
    BuiltIn::new("continue", Id::CONTINUE),
    BuiltIn::new("struct", Id::STRUCT),
    BuiltIn::new("use", Id::USE),
    BuiltIn::new("var", Id::VAR),
    BuiltIn::new("ideal", Id::IDEAL),
    BuiltIn::new("pre", Id::PRE),
    BuiltIn::new("post", Id::POST),
    BuiltIn::new("via", Id::VIA),
    BuiltIn::new("false", Id::FALSE),
    BuiltIn::new("true", Id::TRUE),
    BuiltIn::new("i8", Id::I8),
    BuiltIn::new("i16", Id::I16),
    BuiltIn::new("i32", Id::I32),
    BuiltIn::new("i64", Id::I64),
    BuiltIn::new("u8", Id::U8),
    BuiltIn::new("u16", Id::U16),
    BuiltIn::new("u32", Id::U32),
    BuiltIn::new("u64", Id::U64),
    BuiltIn::new("usize", Id::USIZE),
    BuiltIn::new("bool", Id::BOOL),
    BuiltIn::new("buf1", Id::BUF1),
    BuiltIn::new("buf2", Id::BUF2),
    BuiltIn::new("_", Id::UNDERSCORE),
    BuiltIn::new("this", Id::THIS),
    BuiltIn::new("in", Id::IN),
    BuiltIn::new("out", Id::OUT),
];

const fn build_by_key(entries: &[BuiltIn]) -> [BuiltIn; Key::NUM_BUILT_IN as usize] {
    let mut table = [BuiltIn::EMPTY; Key::NUM_BUILT_IN as usize];
    let mut i = 0;
    while i < entries.len() {
        let entry = entries[i];
        let key = entry.id.key();
        assert!(key.raw() != 0, "built-in with key zero");
        assert!(key.raw() < Key::MIN_FORM, "built-in key in the form band");
        assert!(!entry.name.is_empty(), "built-in with empty spelling");
        assert!(entry.id.is_valid(), "built-in with no flags");
        assert!(table[key.index()].name.is_empty(), "duplicate built-in key");
        table[key.index()] = entry;
        i += 1;
    }
    table
}

/// Built-in entries indexed by key. Unassigned slots hold an empty spelling
/// and [`Id::INVALID`].
static BY_KEY: [BuiltIn; Key::NUM_BUILT_IN as usize] = build_by_key(ENTRIES);

static BY_NAME: OnceLock<FxHashMap<&'static str, Id>> = OnceLock::new();

fn by_name() -> &'static FxHashMap<&'static str, Id> {
    BY_NAME.get_or_init(|| {
        let mut map = FxHashMap::default();
        map.reserve(ENTRIES.len());
        for entry in BY_KEY.iter().filter(|e| !e.name.is_empty()) {
            map.insert(entry.name, entry.id);
        }
        tracing::debug!(count = map.len(), "built-in name map initialized");
        map
    })
}

/// Look up the identity of a built-in spelling.
///
/// Exact match only. Callers check this before falling back to the name
/// registry for user identifiers.
#[inline]
pub fn lookup_builtin_name(spelling: &str) -> Option<Id> {
    by_name().get(spelling).copied()
}

/// Spelling of a built-in key.
///
/// Unassigned built-in keys (including the disambiguation band) have an
/// empty spelling.
///
/// # Panics
/// Panics if `key` is outside the built-in key space. Asking for one is a
/// bug in the caller, not bad source text.
#[inline]
pub fn spelling_of(key: Key) -> &'static str {
    assert!(key.is_built_in(), "spelling_of: {key:?} is not a built-in key");
    BY_KEY[key.index()].name
}

/// Spelling of a built-in key, or `None` if the key is unassigned or
/// outside the built-in key space.
#[inline]
pub fn try_spelling_of(key: Key) -> Option<&'static str> {
    BY_KEY
        .get(key.index())
        .map(|entry| entry.name)
        .filter(|name| !name.is_empty())
}

/// The identity assigned to a built-in key, or [`Id::INVALID`].
#[inline]
pub fn builtin_id_of_key(key: Key) -> Id {
    BY_KEY.get(key.index()).map_or(Id::INVALID, |entry| entry.id)
}

/// Every assigned built-in entry, in key order.
pub fn built_ins() -> impl Iterator<Item = &'static BuiltIn> {
    BY_KEY.iter().filter(|entry| !entry.name.is_empty())
}
