//! Greedy squiggle scanner.
//!
//! A squiggle is a run of non-alphanumeric bytes such as `+` or `&^=`. Two
//! tables, both indexed by the leading byte, drive the scan:
//! - `SINGLES`: bytes that never start a longer squiggle (`(`, `,`, ...),
//!   resolved directly.
//! - `LEXERS`: bytes that may, with an ordered list of suffix candidates.
//!   The first candidate whose suffix matches the following bytes wins, so
//!   longer suffixes come first and every list ends with the empty suffix.

use puffs_token::Id;

/// A squiggle found at the cursor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Squiggle {
    pub id: Id,
    /// Bytes consumed, leading byte included.
    pub len: u32,
}

#[derive(Copy, Clone)]
struct SuffixLexer {
    suffix: &'static [u8],
    id: Id,
}

const fn sl(suffix: &'static [u8], id: Id) -> SuffixLexer {
    SuffixLexer { suffix, id }
}

const SINGLE_LIST: &[(u8, Id)] = &[
    (b'(', Id::OPEN_PAREN),
    (b')', Id::CLOSE_PAREN),
    (b'[', Id::OPEN_BRACKET),
    (b']', Id::CLOSE_BRACKET),
    (b'{', Id::OPEN_CURLY),
    (b'}', Id::CLOSE_CURLY),
    (b',', Id::COMMA),
    (b'?', Id::QUESTION),
    (b':', Id::COLON),
    (b';', Id::SEMICOLON),
];

// Order matters: the first match wins.
const DOT: &[SuffixLexer] = &[sl(b".", Id::DOT_DOT), sl(b"", Id::DOT)];
const EXCLAM: &[SuffixLexer] = &[sl(b"=", Id::NOT_EQ), sl(b"", Id::EXCLAM)];
const AMP: &[SuffixLexer] = &[
    sl(b"^=", Id::AMP_HAT_EQ),
    sl(b"^", Id::AMP_HAT),
    sl(b"=", Id::AMP_EQ),
    sl(b"", Id::AMP),
];
const PIPE: &[SuffixLexer] = &[sl(b"=", Id::PIPE_EQ), sl(b"", Id::PIPE)];
const HAT: &[SuffixLexer] = &[sl(b"=", Id::HAT_EQ), sl(b"", Id::HAT)];
const PLUS: &[SuffixLexer] = &[sl(b"=", Id::PLUS_EQ), sl(b"", Id::PLUS)];
const MINUS: &[SuffixLexer] = &[sl(b"=", Id::MINUS_EQ), sl(b"", Id::MINUS)];
const STAR: &[SuffixLexer] = &[sl(b"=", Id::STAR_EQ), sl(b"", Id::STAR)];
const SLASH: &[SuffixLexer] = &[sl(b"=", Id::SLASH_EQ), sl(b"", Id::SLASH)];
const EQ: &[SuffixLexer] = &[sl(b"=", Id::EQ_EQ), sl(b"", Id::EQ)];
const LESS: &[SuffixLexer] = &[
    sl(b"<=", Id::SHIFT_L_EQ),
    sl(b"<", Id::SHIFT_L),
    sl(b"=", Id::LESS_EQ),
    sl(b"", Id::LESS_THAN),
];
const GREATER: &[SuffixLexer] = &[
    sl(b">=", Id::SHIFT_R_EQ),
    sl(b">", Id::SHIFT_R),
    sl(b"=", Id::GREATER_EQ),
    sl(b"", Id::GREATER_THAN),
];

const LEXER_LIST: &[(u8, &[SuffixLexer])] = &[
    (b'.', DOT),
    (b'!', EXCLAM),
    (b'&', AMP),
    (b'|', PIPE),
    (b'^', HAT),
    (b'+', PLUS),
    (b'-', MINUS),
    (b'*', STAR),
    (b'/', SLASH),
    (b'=', EQ),
    (b'<', LESS),
    (b'>', GREATER),
];

const fn build_singles() -> [Id; 256] {
    let mut table = [Id::INVALID; 256];
    let mut i = 0;
    while i < SINGLE_LIST.len() {
        let (byte, id) = SINGLE_LIST[i];
        table[byte as usize] = id;
        i += 1;
    }
    table
}

const fn build_lexers() -> [&'static [SuffixLexer]; 256] {
    let singles = build_singles();
    let mut table: [&'static [SuffixLexer]; 256] = [&[]; 256];
    let mut i = 0;
    while i < LEXER_LIST.len() {
        let (byte, lexers) = LEXER_LIST[i];
        assert!(singles[byte as usize].raw() == 0, "byte in both tables");
        assert!(!lexers.is_empty(), "empty suffix list");
        assert!(
            lexers[lexers.len() - 1].suffix.is_empty(),
            "suffix list without an empty fallback"
        );
        table[byte as usize] = lexers;
        i += 1;
    }
    table
}

static SINGLES: [Id; 256] = build_singles();
static LEXERS: [&[SuffixLexer]; 256] = build_lexers();

/// Classify the squiggle starting with `leading`, followed by `rest`.
///
/// Returns the longest built-in squiggle that matches, or `None` if no
/// squiggle starts with `leading`.
#[inline]
pub fn classify(leading: u8, rest: &[u8]) -> Option<Squiggle> {
    let single = SINGLES[usize::from(leading)];
    if single != Id::INVALID {
        return Some(Squiggle { id: single, len: 1 });
    }
    LEXERS[usize::from(leading)]
        .iter()
        .find(|lexer| rest.starts_with(lexer.suffix))
        .map(|lexer| Squiggle {
            id: lexer.id,
            // Suffixes are at most two bytes.
            len: 1 + lexer.suffix.len() as u32,
        })
}

/// Classify the squiggle at the start of `src`.
#[inline]
pub fn scan_squiggle(src: &[u8]) -> Option<Squiggle> {
    let (&leading, rest) = src.split_first()?;
    classify(leading, rest)
}

/// Whether `byte` starts a squiggle.
#[inline]
pub fn is_squiggle_start(byte: u8) -> bool {
    SINGLES[usize::from(byte)] != Id::INVALID || !LEXERS[usize::from(byte)].is_empty()
}

#[cfg(test)]
mod tests;
