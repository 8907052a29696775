//! Inspector commands.

use std::fmt::Write as _;

use puffs_lexer_core::scan_squiggle;
use puffs_token::{built_ins, lookup_builtin_name, try_spelling_of, Id};

/// Which recognizer produced an identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The greedy squiggle scanner.
    Scanner,
    /// The built-in name table.
    NameTable,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub id: Id,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("`{lexeme}` is not a built-in")]
    NotBuiltIn { lexeme: String },
    /// The scanner matched a squiggle shorter than the whole lexeme.
    #[error("`{lexeme}` is not one squiggle: the longest match is `{matched}`")]
    TrailingBytes { lexeme: String, matched: String },
}

/// Classify one isolated lexeme.
///
/// Squiggles go through the greedy scanner and must be consumed whole;
/// everything else goes through the built-in name table.
#[tracing::instrument(level = "trace")]
pub fn classify_lexeme(lexeme: &str) -> Result<Classified, ClassifyError> {
    if let Some(found) = scan_squiggle(lexeme.as_bytes()) {
        let len = found.len as usize;
        if len != lexeme.len() {
            return Err(ClassifyError::TrailingBytes {
                lexeme: lexeme.to_owned(),
                matched: lexeme[..len].to_owned(),
            });
        }
        tracing::trace!(len, "matched by scanner");
        return Ok(Classified {
            id: found.id,
            origin: Origin::Scanner,
        });
    }
    lookup_builtin_name(lexeme)
        .map(|id| Classified {
            id,
            origin: Origin::NameTable,
        })
        .ok_or_else(|| ClassifyError::NotBuiltIn {
            lexeme: lexeme.to_owned(),
        })
}

fn write_form(out: &mut String, label: &str, form: Id) {
    if form != Id::INVALID {
        let _ = write!(out, " {label}=0x{:02X}", form.key().raw());
    }
}

/// One-line description: key, flags, flag names and disambiguation forms.
pub fn describe(found: &Classified) -> String {
    let id = found.id;
    let mut out = format!(
        "key=0x{:02X} flags=0x{:04X} [{}]",
        id.key().raw(),
        id.flags().bits(),
        id.flags().names().collect::<Vec<_>>().join("|"),
    );
    write_form(&mut out, "unary", id.unary_form());
    write_form(&mut out, "binary", id.binary_form());
    write_form(&mut out, "associative", id.associative_form());
    if found.origin == Origin::Scanner {
        out.push_str(" (scanned)");
    }
    out
}

/// One line per built-in, in key order.
pub fn list_built_ins() -> Vec<String> {
    built_ins()
        .map(|entry| {
            let key = entry.id.key();
            debug_assert_eq!(try_spelling_of(key), Some(entry.name));
            format!(
                "0x{:02X} {:<10} {:?} flags=0x{:04X}",
                key.raw(),
                entry.name,
                key.category(),
                entry.id.flags().bits()
            )
        })
        .collect()
}
