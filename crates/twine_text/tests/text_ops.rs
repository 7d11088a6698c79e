use twine_text::{Text, TextError};

#[test]
fn new_and_default_are_empty() {
    assert_eq!(Text::new().len(), 0);
    assert!(Text::default().is_empty());
}

#[test]
fn from_str_copies_characters() {
    let t = Text::from_str("héllo");
    assert_eq!(t.len(), 5);
    assert_eq!(t, "héllo");
}

#[test]
fn from_chars_is_a_defensive_copy() {
    let source = ['a', 'b', 'c'];
    let t = Text::from_chars(&source);
    assert_eq!(t.as_chars(), &source);
}

#[test]
fn char_at_reads_within_bounds() {
    let t = Text::from_str("abc");
    assert_eq!(t.char_at(0).unwrap(), 'a');
    assert_eq!(t.char_at(2).unwrap(), 'c');
    assert_eq!(
        t.char_at(3).unwrap_err(),
        TextError::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn concat_appends_and_sums_lengths() {
    let hello = Text::from_str("Hello");
    let world = Text::from_str(" World");
    let joined = hello.concat(&world);
    assert_eq!(joined, "Hello World");
    assert_eq!(joined.len(), hello.len() + world.len());
}

#[test]
fn concat_with_empty_is_identity() {
    let t = Text::from_str("abc");
    assert_eq!(t.concat(&Text::new()), t);
    assert_eq!(Text::new().concat(&t), t);
}

#[test]
fn substring_copies_the_requested_range() {
    let t = Text::from_str("abcdef");
    assert_eq!(t.substring(1, 3).unwrap(), "bcd");
    assert_eq!(t.substring(0, 0).unwrap(), "");
    assert_eq!(t.substring(0, 6).unwrap(), "abcdef");
}

#[test]
fn substring_rejects_ranges_outside_the_value() {
    let t = Text::from_str("abc");
    assert_eq!(
        t.substring(3, 0).unwrap_err(),
        TextError::RangeOutOfRange {
            start: 3,
            count: 0,
            len: 3
        }
    );
    assert!(t.substring(1, 3).is_err());
    assert!(Text::new().substring(0, 0).is_err());
}

#[test]
fn case_mapping_preserves_length() {
    let t = Text::from_str("Grüße 123");
    assert_eq!(t.to_upper(), "GRÜßE 123");
    assert_eq!(t.to_upper().len(), t.len());
    assert_eq!(t.to_lower(), "grüße 123");
}

#[test]
fn replace_char_touches_every_occurrence() {
    let t = Text::from_str("banana");
    assert_eq!(t.replace_char('a', 'o'), "bonono");
    assert_eq!(t.replace_char('z', 'o'), "banana");
}

#[test]
fn trim_strips_both_ends() {
    assert_eq!(Text::from_str("  hi  ").trim(), "hi");
    assert_eq!(Text::from_str("   ").trim(), "");
    assert_eq!(Text::from_str("hi").trim(), "hi");
    assert_eq!(Text::new().trim(), "");
}

#[test]
fn trim_start_and_end_strip_one_side() {
    let t = Text::from_str("\t hi \n");
    assert_eq!(t.trim_start(), "hi \n");
    assert_eq!(t.trim_end(), "\t hi");
}

#[test]
fn insert_splices_at_any_valid_position() {
    let t = Text::from_str("ad");
    assert_eq!(t.insert(1, &Text::from_str("bc")).unwrap(), "abcd");
    assert_eq!(t.insert(0, &Text::from_str("x")).unwrap(), "xad");
    assert_eq!(t.insert(2, &Text::from_str("x")).unwrap(), "adx");
    assert!(t.insert(3, &Text::from_str("x")).is_err());
}

#[test]
fn remove_from_truncates() {
    let t = Text::from_str("abcdef");
    assert_eq!(t.remove_from(2).unwrap(), "ab");
    assert_eq!(t.remove_from(0).unwrap(), "");
    assert!(t.remove_from(6).is_err());
}

#[test]
fn remove_excises_a_range() {
    let t = Text::from_str("abcdef");
    assert_eq!(t.remove(1, 3).unwrap(), "aef");
    assert_eq!(t.remove(0, 6).unwrap(), "");
    assert!(t.remove(4, 3).is_err());
}

#[test]
fn split_drops_empty_runs() {
    let segments = Text::from_str("a,b,,c").split(&[',']);
    assert_eq!(
        segments,
        [Text::from_str("a"), Text::from_str("b"), Text::from_str("c")]
    );
}

#[test]
fn split_accepts_multiple_separators() {
    let segments = Text::from_str(";a,b;").split(&[',', ';']);
    assert_eq!(segments, [Text::from_str("a"), Text::from_str("b")]);
}

#[test]
fn split_of_separators_only_is_empty() {
    assert!(Text::from_str(",,,").split(&[',']).is_empty());
    assert!(Text::new().split(&[',']).is_empty());
}

#[test]
fn pad_left_pads_to_width() {
    let t = Text::from_str("42");
    assert_eq!(t.pad_left(5, '0'), "00042");
    assert_eq!(t.pad_left(2, '0'), "42");
    assert_eq!(t.pad_left(1, '0'), "42");
}

#[test]
fn blank_and_whitespace_helpers() {
    assert!(Text::new().is_blank());
    assert!(Text::from_str(" \t\n").is_blank());
    assert!(!Text::from_str(" a ").is_blank());
    assert_eq!(Text::from_str(" a b\tc ").remove_whitespace(), "abc");
}

#[test]
fn display_and_debug_render_content() {
    let t = Text::from_str("hi \"there\"");
    assert_eq!(t.to_string(), "hi \"there\"");
    assert_eq!(format!("{t:?}"), "\"hi \\\"there\\\"\"");
}

#[test]
fn errors_render_readable_messages() {
    let t = Text::from_str("abc");
    let err = t.char_at(9).unwrap_err();
    assert_eq!(err.to_string(), "Index 9 out of range for text of length 3");
}
