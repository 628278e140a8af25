use super::*;

// ─── Keywords ────────────────────────────────────────────────────────

/// Every reserved word, for exhaustive checks.
const ALL_KEYWORDS: [&str; 72] = [
    "alignof", "asm", "auto", "bool",
    "break", "case", "catch", "char",
    "char16_t", "char32_t", "class", "const",
    "constexpr", "const_cast", "continue", "decltype",
    "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit",
    "export", "extern", "false", "float",
    "for", "friend", "goto", "if",
    "inline", "int", "long", "mutable",
    "namespace", "new", "noexcept", "nullptr",
    "operator", "private", "protected", "public",
    "register", "reinterpret_cast", "return", "short",
    "signed", "sizeof", "static", "static_assert",
    "static_cast", "struct", "switch", "template",
    "this", "thread_local", "throw", "true",
    "try", "typedef", "typeid", "typename",
    "union", "unsigned", "using", "virtual",
    "void", "volatile", "wchar_t", "while",
];

#[test]
fn all_72_reserved_words_match() {
    for kw in ALL_KEYWORDS {
        assert!(is_keyword(kw.as_bytes()), "{kw} not recognized");
    }
}

#[test]
fn near_misses_are_not_keywords() {
    for text in ["in", "ints", "Int", "INT", "classe", "wchar", "nullpt", "x", ""] {
        assert!(!is_keyword(text.as_bytes()), "{text} wrongly recognized");
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert!(is_keyword(b"while"));
    assert!(!is_keyword(b"While"));
    assert!(!is_keyword(b"WHILE"));
}

#[test]
fn non_ascii_is_never_a_keyword() {
    assert!(!is_keyword(b"\xCE\xBB"));
    assert!(!is_keyword(b"\xFF\xFE"));
}

// ─── Operators ───────────────────────────────────────────────────────

#[test]
fn single_char_operators_resolve() {
    // Exactly one spelling, no longer entry: Equal
    let ops: [&[u8]; 10] = [b"{", b"}", b"[", b"]", b"(", b")", b";", b"?", b"~", b","];
    for op in ops {
        assert_eq!(check_operator(op), PrefixMatch::Equal, "{op:?}");
    }
}

#[test]
fn extensible_operators_stay_open() {
    // Equal to an entry but a prefix of a longer one: Maybe
    let ops: [&[u8]; 15] = [
        b"<", b">", b"+", b"-", b"*", b"/", b"%", b"^", b"&", b"|", b"!", b"=", b":", b".",
        b"#",
    ];
    for op in ops {
        assert_eq!(check_operator(op), PrefixMatch::Maybe, "{op:?}");
    }
    assert_eq!(check_operator(b"<<"), PrefixMatch::Maybe); // <<=
    assert_eq!(check_operator(b">>"), PrefixMatch::Maybe); // >>=
    assert_eq!(check_operator(b"->"), PrefixMatch::Maybe); // ->*
    assert_eq!(check_operator(b".."), PrefixMatch::Maybe); // ...
}

#[test]
fn longest_spellings_close() {
    let ops: [&[u8]; 7] = [b"<<=", b">>=", b"...", b"->*", b"%:%:", b"##", b"=="];
    for op in ops {
        assert_eq!(check_operator(op), PrefixMatch::Equal, "{op:?}");
    }
}

#[test]
fn digraphs_are_recognized() {
    assert_eq!(check_operator(b"<:"), PrefixMatch::Equal);
    assert_eq!(check_operator(b":>"), PrefixMatch::Equal);
    assert_eq!(check_operator(b"<%"), PrefixMatch::Equal);
    assert_eq!(check_operator(b"%>"), PrefixMatch::Equal);
    // %: is itself a prefix of %:%:
    assert_eq!(check_operator(b"%:"), PrefixMatch::Maybe);
    assert_eq!(check_operator(b"%:%"), PrefixMatch::Maybe);
    assert_eq!(check_operator(b"%:%:"), PrefixMatch::Equal);
}

#[test]
fn compound_assignments_close() {
    let ops: [&[u8]; 8] = [b"+=", b"-=", b"*=", b"/=", b"%=", b"^=", b"&=", b"|="];
    for op in ops {
        assert_eq!(check_operator(op), PrefixMatch::Equal, "{op:?}");
    }
}

#[test]
fn non_operators_are_rejected() {
    let ops: [&[u8]; 8] = [b"@", b"$", b"`", b"\\", b"ab", b"+-", b"..x", b"\0"];
    for op in ops {
        assert_eq!(check_operator(op), PrefixMatch::NotEqual, "{op:?}");
    }
}

// ─── Integer suffixes ────────────────────────────────────────────────

#[test]
fn suffix_set_membership() {
    let singles: [&[u8]; 4] = [b"l", b"u", b"L", b"U"];
    for s in singles {
        assert_ne!(check_integer_suffix(s), PrefixMatch::NotEqual, "{s:?}");
    }
    assert_eq!(check_integer_suffix(b"ll"), PrefixMatch::Equal);
    assert_eq!(check_integer_suffix(b"ull"), PrefixMatch::Equal);
    assert_eq!(check_integer_suffix(b"LL"), PrefixMatch::Equal);
    assert_eq!(check_integer_suffix(b"ULL"), PrefixMatch::Equal);
    assert_eq!(check_integer_suffix(b"Ull"), PrefixMatch::Equal);
    // ul extends to ull
    assert_eq!(check_integer_suffix(b"ul"), PrefixMatch::Maybe);
    assert_eq!(check_integer_suffix(b"UL"), PrefixMatch::Maybe);
    assert_eq!(check_integer_suffix(b"Ul"), PrefixMatch::Maybe);
}

#[test]
fn suffix_set_is_case_asymmetric() {
    // The mixed-case spellings outside the table are rejected.
    let rejected: [&[u8]; 5] = [b"uL", b"uLL", b"lL", b"Lu", b"ull2"];
    for s in rejected {
        assert_eq!(check_integer_suffix(s), PrefixMatch::NotEqual, "{s:?}");
    }
}

#[test]
fn suffix_start_characters() {
    assert!(is_integer_suffix_start(b'l'));
    assert!(is_integer_suffix_start(b'L'));
    assert!(is_integer_suffix_start(b'u'));
    assert!(is_integer_suffix_start(b'U'));
    assert!(!is_integer_suffix_start(b'x'));
    assert!(!is_integer_suffix_start(b'0'));
    assert!(!is_integer_suffix_start(0));
}

// ─── Escapes and byte classes ────────────────────────────────────────

#[test]
fn simple_escape_set() {
    for c in *b"'\"?\\abfnrtve" {
        assert!(is_simple_escape(c), "{}", c as char);
    }
    for c in *b"cdghijklmopqsuwxyz012 \n" {
        assert!(!is_simple_escape(c), "{}", c as char);
    }
}

#[test]
fn octal_digit_class() {
    for c in *b"01234567" {
        assert!(is_oct_digit(c));
    }
    assert!(!is_oct_digit(b'8'));
    assert!(!is_oct_digit(b'9'));
    assert!(!is_oct_digit(b'a'));
}

#[test]
fn identifier_classes() {
    assert!(is_identifier_start(b'a'));
    assert!(is_identifier_start(b'Z'));
    assert!(is_identifier_start(b'_'));
    assert!(!is_identifier_start(b'0'));
    assert!(!is_identifier_start(b'-'));

    assert!(is_identifier_char(b'0'));
    assert!(is_identifier_char(b'9'));
    assert!(is_identifier_char(b'_'));
    assert!(!is_identifier_char(b' '));
    assert!(!is_identifier_char(0));
    assert!(!is_identifier_char(0xCE)); // non-ASCII bytes never continue an identifier
}
