//! Character classes and string tables driving the state machine.
//!
//! Three string sets matter here: the C++ reserved words, the
//! operator/punctuator spellings, and the integer suffixes. Keywords are
//! matched by exact equality; the other two sets use the tri-valued
//! prefix test of [`PrefixMatch`], which is what lets the scanner extend
//! an operator or suffix greedily and stop exactly where the table says
//! no longer spelling exists.

/// Outcome of testing a candidate against a string set.
///
/// The scanner extends the current token while the answer is `Maybe`,
/// finishes it on `Equal`, and on `NotEqual` emits what it had accumulated
/// before the current character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixMatch {
    /// The candidate matches no entry and is a prefix of none.
    NotEqual,
    /// The candidate is a proper prefix of at least one entry (it may
    /// additionally equal a shorter entry).
    Maybe,
    /// The candidate equals exactly one entry and extends none.
    Equal,
}

/// The 57 operator and punctuator spellings, digraphs included.
///
/// Word-like operators (`new`, `delete`, `sizeof`, ...) are absent: they
/// lex as keywords. `?:` is not a single token; `?` and `:` are listed
/// separately.
const OPERATORS: [&[u8]; 57] = [
    b"{", b"}", b"[", b"]", b"#", b"##", b"(", b")",
    b"<:", b":>", b"<%", b"%>", b"%:", b"%:%:", b";", b":", b"...",
    b"?", b"::", b".", b".*",
    b"+", b"-", b"*", b"/", b"%", b"^", b"&", b"|", b"~",
    b"!", b"=", b"<", b">", b"+=", b"-=", b"*=", b"/=", b"%=",
    b"^=", b"&=", b"|=", b"<<", b">>", b">>=", b"<<=", b"==", b"!=",
    b"<=", b">=", b"&&", b"||", b"++", b"--", b",", b"->*", b"->",
];

/// Integer literal suffixes. The set is deliberately not case-symmetric:
/// `ull` and `ULL` are accepted, `uLL` is not.
const INTEGER_SUFFIXES: [&[u8]; 12] = [
    b"l", b"ll", b"u", b"ul", b"ull",
    b"L", b"LL", b"U", b"UL", b"ULL",
    b"Ul", b"Ull",
];

/// Test a candidate against one entry.
///
/// A candidate longer than the entry, or differing anywhere in its
/// prefix, cannot be that entry. Equal length means an exact hit; a
/// shorter matching candidate could still grow into the entry.
fn prefix_match(entry: &[u8], candidate: &[u8]) -> PrefixMatch {
    if entry.len() < candidate.len() || entry[..candidate.len()] != *candidate {
        PrefixMatch::NotEqual
    } else if entry.len() == candidate.len() {
        PrefixMatch::Equal
    } else {
        PrefixMatch::Maybe
    }
}

/// Test a candidate against a whole set.
///
/// `Maybe` wins over `Equal`: a candidate that equals one entry while
/// prefixing a longer one (`<` vs `<<=`, `ul` vs `ull`) must keep the
/// scanner extending, otherwise maximal munch breaks.
fn check_against(set: &[&[u8]], candidate: &[u8]) -> PrefixMatch {
    let mut maybe = false;
    let mut equal = false;
    for entry in set {
        match prefix_match(entry, candidate) {
            PrefixMatch::Maybe => maybe = true,
            PrefixMatch::Equal => equal = true,
            PrefixMatch::NotEqual => {}
        }
    }
    if maybe {
        PrefixMatch::Maybe
    } else if equal {
        PrefixMatch::Equal
    } else {
        PrefixMatch::NotEqual
    }
}

/// Tri-valued test of a candidate against the operator/punctuator table.
pub fn check_operator(candidate: &[u8]) -> PrefixMatch {
    check_against(&OPERATORS, candidate)
}

/// Tri-valued test of a candidate against the integer-suffix table.
pub fn check_integer_suffix(candidate: &[u8]) -> PrefixMatch {
    check_against(&INTEGER_SUFFIXES, candidate)
}

/// Returns `true` if `c` can open an integer suffix (`l`, `u`, `L`, `U`).
pub fn is_integer_suffix_start(c: u8) -> bool {
    check_integer_suffix(&[c]) != PrefixMatch::NotEqual
}

/// Returns `true` for the single-character escapes accepted after `\` in
/// string and character literals. `\e` is a GCC extension.
pub fn is_simple_escape(c: u8) -> bool {
    matches!(
        c,
        b'\'' | b'"' | b'?' | b'\\' | b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'e'
    )
}

/// Returns `true` for octal digits `0`-`7`.
pub fn is_oct_digit(c: u8) -> bool {
    (b'0'..=b'7').contains(&c)
}

/// 256-byte lookup table for identifier bytes: a-z, A-Z, 0-9, underscore.
/// A table lookup replaces the multi-range `matches!`, and the EOF
/// sentinel (`0x00`) maps to `false`, terminating identifier scans.
static IS_IDENT_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `c` may start an identifier (letter or underscore).
#[inline]
pub fn is_identifier_start(c: u8) -> bool {
    IS_IDENT_TABLE[c as usize] && !c.is_ascii_digit()
}

/// Returns `true` if `c` may continue an identifier.
#[inline]
pub fn is_identifier_char(c: u8) -> bool {
    IS_IDENT_TABLE[c as usize]
}

/// Exact-match test against the 72 C++ reserved words.
///
/// Length-bucketed: the candidate's length rejects most identifiers
/// before any string comparison. Identifier lexemes are pure ASCII by
/// construction, so the UTF-8 conversion cannot fail for them.
pub fn is_keyword(text: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(text) else {
        return false;
    };
    match text.len() {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "asm" | "for" | "int" | "new" | "try"),
        4 => matches!(
            text,
            "auto" | "bool" | "case" | "char" | "else" | "enum" | "goto" | "long" | "this"
                | "true" | "void"
        ),
        5 => matches!(
            text,
            "break" | "catch" | "class" | "const" | "false" | "float" | "short" | "throw"
                | "union" | "using" | "while"
        ),
        6 => matches!(
            text,
            "delete" | "double" | "export" | "extern" | "friend" | "inline" | "public"
                | "return" | "signed" | "sizeof" | "static" | "struct" | "switch" | "typeid"
        ),
        7 => matches!(
            text,
            "alignof" | "default" | "mutable" | "nullptr" | "private" | "typedef" | "virtual"
                | "wchar_t"
        ),
        8 => matches!(
            text,
            "char16_t" | "char32_t" | "continue" | "decltype" | "explicit" | "noexcept"
                | "operator" | "register" | "template" | "typename" | "unsigned" | "volatile"
        ),
        9 => matches!(text, "constexpr" | "namespace" | "protected"),
        10 => text == "const_cast",
        11 => text == "static_cast",
        12 => matches!(text, "dynamic_cast" | "thread_local"),
        13 => text == "static_assert",
        16 => text == "reinterpret_cast",
        _ => false,
    }
}

#[cfg(test)]
mod tests;
