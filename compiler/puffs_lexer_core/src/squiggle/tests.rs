use super::*;
use pretty_assertions::assert_eq;
use puffs_token::{built_ins, spelling_of};

/// Helper: scan `src` and return `(id, len)`.
fn scan(src: &str) -> Option<(Id, u32)> {
    scan_squiggle(src.as_bytes()).map(|s| (s.id, s.len))
}

// ─── Greedy Resolution ─────────────────────────────────────────

#[test]
fn less_than_family_is_greedy() {
    assert_eq!(scan("<<="), Some((Id::SHIFT_L_EQ, 3)));
    assert_eq!(scan("<<x"), Some((Id::SHIFT_L, 2)));
    assert_eq!(scan("<="), Some((Id::LESS_EQ, 2)));
    assert_eq!(scan("<x"), Some((Id::LESS_THAN, 1)));
    assert_eq!(scan("<"), Some((Id::LESS_THAN, 1)));
    // "<=<" is "<=" followed by something else.
    assert_eq!(scan("<=<"), Some((Id::LESS_EQ, 2)));
}

#[test]
fn greater_than_family_is_greedy() {
    assert_eq!(scan(">>="), Some((Id::SHIFT_R_EQ, 3)));
    assert_eq!(scan(">>"), Some((Id::SHIFT_R, 2)));
    assert_eq!(scan(">="), Some((Id::GREATER_EQ, 2)));
    assert_eq!(scan("> 1"), Some((Id::GREATER_THAN, 1)));
    assert_eq!(scan(">>>"), Some((Id::SHIFT_R, 2)));
}

#[test]
fn ampersand_family_is_greedy() {
    assert_eq!(scan("&^="), Some((Id::AMP_HAT_EQ, 3)));
    assert_eq!(scan("&^x"), Some((Id::AMP_HAT, 2)));
    assert_eq!(scan("&="), Some((Id::AMP_EQ, 2)));
    assert_eq!(scan("&&"), Some((Id::AMP, 1)));
    assert_eq!(scan("&"), Some((Id::AMP, 1)));
}

#[test]
fn dot_and_exclam() {
    assert_eq!(scan(".."), Some((Id::DOT_DOT, 2)));
    assert_eq!(scan("..."), Some((Id::DOT_DOT, 2)));
    assert_eq!(scan(".x"), Some((Id::DOT, 1)));
    assert_eq!(scan("!="), Some((Id::NOT_EQ, 2)));
    assert_eq!(scan("!!"), Some((Id::EXCLAM, 1)));
}

#[test]
fn equals_family() {
    assert_eq!(scan("=="), Some((Id::EQ_EQ, 2)));
    assert_eq!(scan("==="), Some((Id::EQ_EQ, 2)));
    assert_eq!(scan("= 3"), Some((Id::EQ, 1)));
}

#[test]
fn arithmetic_with_assignment() {
    let cases = [
        ("+", Id::PLUS, Id::PLUS_EQ),
        ("-", Id::MINUS, Id::MINUS_EQ),
        ("*", Id::STAR, Id::STAR_EQ),
        ("/", Id::SLASH, Id::SLASH_EQ),
        ("|", Id::PIPE, Id::PIPE_EQ),
        ("^", Id::HAT, Id::HAT_EQ),
    ];
    for (op, bare, assign) in cases {
        assert_eq!(scan(&format!("{op}=")), Some((assign, 2)), "{op}=");
        assert_eq!(scan(&format!("{op}{op}")), Some((bare, 1)), "{op}{op}");
        assert_eq!(scan(op), Some((bare, 1)), "{op}");
    }
}

#[test]
fn single_byte_punctuation() {
    let cases = [
        ("(", Id::OPEN_PAREN),
        (")", Id::CLOSE_PAREN),
        ("[", Id::OPEN_BRACKET),
        ("]", Id::CLOSE_BRACKET),
        ("{", Id::OPEN_CURLY),
        ("}", Id::CLOSE_CURLY),
        (",", Id::COMMA),
        ("?", Id::QUESTION),
        (":", Id::COLON),
        (";", Id::SEMICOLON),
    ];
    for (src, id) in cases {
        assert_eq!(scan(src), Some((id, 1)), "{src}");
        // Followed by anything, still a single byte.
        assert_eq!(scan(&format!("{src}=")), Some((id, 1)), "{src}=");
    }
}

// ─── Fall-through ──────────────────────────────────────────────

#[test]
fn non_squiggles_fall_through() {
    for src in ["", "a", "Z", "_", "0", "\"", "'", " ", "\n", "#", "@", "%", "~", "$", "`"] {
        assert_eq!(scan(src), None, "{src:?}");
    }
    assert_eq!(scan_squiggle(&[0xFF, b'=']), None);
}

#[test]
fn classify_takes_leading_and_rest_separately() {
    assert_eq!(
        classify(b'<', b"<="),
        Some(Squiggle {
            id: Id::SHIFT_L_EQ,
            len: 3
        })
    );
    assert_eq!(classify(b'<', b""), Some(Squiggle { id: Id::LESS_THAN, len: 1 }));
    assert_eq!(classify(b'a', b"<="), None);
}

#[test]
fn squiggle_start_bytes() {
    let starts: Vec<u8> = (0..=u8::MAX).filter(|&b| is_squiggle_start(b)).collect();
    assert_eq!(starts, b"!&()*+,-./:;<=>?[]^{|}".to_vec());
}

// ─── Table Consistency ─────────────────────────────────────────

#[test]
fn every_squiggly_built_in_scans_to_itself() {
    for entry in built_ins() {
        let bytes = entry.name.as_bytes();
        if !is_squiggle_start(bytes[0]) {
            continue;
        }
        let found = scan_squiggle(bytes);
        assert_eq!(
            found.map(|s| (s.id, s.len as usize)),
            Some((entry.id, bytes.len())),
            "{}",
            entry.name
        );
    }
}

#[test]
fn scanned_spelling_matches_consumed_bytes() {
    for src in ["<<=", "<<", "<=", "&^=", "..", "!=", "==", "+=", ")"] {
        let Some(found) = scan_squiggle(src.as_bytes()) else {
            panic!("{src} did not scan");
        };
        assert_eq!(spelling_of(found.id.key()), &src[..found.len as usize]);
    }
}

#[test]
fn scanned_ids_are_never_forms() {
    let rests: [&[u8]; 9] = [b"", b"=", b"^=", b"<=", b">=", b".", b"<", b">", b"^"];
    for leading in 0..=u8::MAX {
        for rest in rests {
            if let Some(found) = classify(leading, rest) {
                assert!(!found.id.key().is_form(), "{leading} {rest:?}");
                assert!(found.id.is_valid());
            }
        }
    }
}

mod proptest_scan {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_consumes_past_input(bytes in proptest::collection::vec(any::<u8>(), 0..8)) {
            if let Some(found) = scan_squiggle(&bytes) {
                prop_assert!(found.len as usize <= bytes.len());
                prop_assert!(found.len >= 1);
            }
        }

        #[test]
        fn consumed_bytes_spell_the_id(
            bytes in proptest::collection::vec(
                prop_oneof![
                    Just(b'<'), Just(b'>'), Just(b'='), Just(b'&'),
                    Just(b'^'), Just(b'.'), Just(b'!'), Just(b'x'),
                ],
                1..6,
            )
        ) {
            if let Some(found) = scan_squiggle(&bytes) {
                let consumed = &bytes[..found.len as usize];
                prop_assert_eq!(spelling_of(found.id.key()).as_bytes(), consumed);
            }
        }
    }
}
