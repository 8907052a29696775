use super::*;
use crate::{builtin_id_of_key, built_ins, lookup_builtin_name};
use pretty_assertions::assert_eq;

fn id_of(name: &str) -> Id {
    lookup_builtin_name(name).unwrap_or(Id::INVALID)
}

fn all_keys() -> impl Iterator<Item = Key> {
    (0..Key::NUM_BUILT_IN).map(Key::new)
}

#[test]
fn unary_forms_round_trip() {
    let mut count = 0;
    for key in all_keys() {
        let id = builtin_id_of_key(key);
        let form = id.unary_form();
        if form != Id::INVALID {
            count += 1;
            assert!(form.is_unary_op());
            assert_eq!(form.ambiguous_form(), id, "{key:?}");
        }
    }
    assert_eq!(count, 3);
}

#[test]
fn binary_forms_round_trip_for_operators() {
    let mut count = 0;
    for entry in built_ins().filter(|e| !e.id.is_assign()) {
        let form = entry.id.binary_form();
        if form != Id::INVALID {
            count += 1;
            assert!(form.is_binary_op());
            assert_eq!(form.ambiguous_form(), entry.id, "{}", entry.name);
        }
    }
    assert_eq!(count, 19);
}

#[test]
fn associative_forms_round_trip() {
    let mut count = 0;
    for entry in built_ins() {
        let form = entry.id.associative_form();
        if form != Id::INVALID {
            count += 1;
            assert!(form.is_associative_op());
            assert_eq!(form.ambiguous_form(), entry.id, "{}", entry.name);
        }
    }
    assert_eq!(count, 7);
}

#[test]
fn associative_flag_matches_associative_form() {
    for entry in built_ins() {
        let has_form = entry.id.associative_form() != Id::INVALID;
        assert_eq!(entry.id.is_associative_op(), has_form, "{}", entry.name);
    }
}

#[test]
fn unary_and_binary_flags_match_their_forms() {
    for entry in built_ins().filter(|e| !e.id.is_assign()) {
        assert_eq!(
            entry.id.is_unary_op(),
            entry.id.unary_form() != Id::INVALID,
            "{}",
            entry.name
        );
        assert_eq!(
            entry.id.is_binary_op(),
            entry.id.binary_form() != Id::INVALID,
            "{}",
            entry.name
        );
    }
}

#[test]
fn compound_assignments_binarize_to_their_operator() {
    let pairs = [
        ("+=", "+"),
        ("-=", "-"),
        ("*=", "*"),
        ("/=", "/"),
        ("<<=", "<<"),
        (">>=", ">>"),
        ("&=", "&"),
        ("&^=", "&^"),
        ("|=", "|"),
        ("^=", "^"),
    ];
    for (assign, op) in pairs {
        let form = id_of(assign).binary_form();
        assert_ne!(form, Id::INVALID, "{assign}");
        assert_eq!(form, id_of(op).binary_form(), "{assign}");
        // The inverse goes back to the bare operator, not the assignment.
        assert_eq!(form.ambiguous_form(), id_of(op), "{assign}");
    }
    assert_eq!(Id::EQ.binary_form(), Id::INVALID);
}

#[test]
fn plus_has_every_form() {
    assert_eq!(Id::PLUS.unary_form(), Id::X_UNARY_PLUS);
    assert_eq!(Id::PLUS.binary_form(), Id::X_BINARY_PLUS);
    assert_eq!(Id::PLUS.associative_form(), Id::X_ASSOCIATIVE_PLUS);
    assert_eq!(Id::PLUS_EQ.binary_form(), Id::X_BINARY_PLUS);
}

#[test]
fn forms_are_not_built_in_spellings() {
    for key in all_keys().filter(|k| k.is_form()) {
        assert_eq!(builtin_id_of_key(key), Id::INVALID, "{key:?}");
    }
}

#[test]
fn ambiguous_table_only_covers_the_form_band() {
    for key in all_keys() {
        let ambiguous = AMBIGUOUS_FORMS[key.index()];
        if !key.is_form() {
            assert_eq!(ambiguous, Id::INVALID, "{key:?}");
        }
    }
}

#[test]
fn forms_do_not_round_trip_further() {
    // A form has no forms of its own.
    for key in all_keys().filter(|k| k.is_form()) {
        let form = Id::new(key, crate::Flags::BINARY_OP);
        assert_eq!(form.unary_form(), Id::INVALID);
        assert_eq!(form.binary_form(), Id::INVALID);
        assert_eq!(form.associative_form(), Id::INVALID);
    }
}
