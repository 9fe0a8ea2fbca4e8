//! Single-character membership tests for pattern atoms.

use super::ast::Atom;

impl Atom {
    /// Test whether `ch` satisfies this atom.
    pub fn matches(&self, ch: char) -> bool {
        match self {
            Atom::Literal(c) => *c == ch,
            Atom::Digit => ch.is_ascii_digit(),
            Atom::Word => is_word_char(ch),
            Atom::Wildcard => true,
            Atom::PositiveGroup(set) => set.contains(&ch),
            Atom::NegativeGroup(set) => !set.contains(&ch),
        }
    }
}

/// `_`, an ASCII digit, or a cased letter.
pub fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_digit() || ch.is_uppercase() || ch.is_lowercase()
}
