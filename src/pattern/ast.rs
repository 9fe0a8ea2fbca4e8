//! Compiled form of a pattern.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

/// A compiled pattern, ready to be run against any number of lines.
///
/// `"^ab+$"` compiles to anchored=true, nodes=[a, b+, EndOfLine].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Pattern began with `^`; only offset 0 is tried.
    pub anchored: bool,
    pub nodes: Vec<Node>,
}

impl Program {
    /// The empty program matches every line at offset 0.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Item(Item),
    /// `$` — zero-width, holds only at end of line.
    EndOfLine,
}

/// One atom together with the quantifier written after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub atom: Atom,
    pub quantifier: Quantifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Once,
    OneOrMore, // +
    ZeroOrOne, // ?
}

/// A predicate over a single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Literal(char),
    Digit,    // \d
    Word,     // \w
    Wildcard, // .
    PositiveGroup(BTreeSet<char>),
    NegativeGroup(BTreeSet<char>),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal('\\') => write!(f, r"\\"),
            Self::Literal(c) => write!(f, "{c}"),
            Self::Digit => write!(f, r"\d"),
            Self::Word => write!(f, r"\w"),
            Self::Wildcard => write!(f, "."),
            Self::PositiveGroup(set) => write!(f, "[{}]", set.iter().join("")),
            Self::NegativeGroup(set) => write!(f, "[^{}]", set.iter().join("")),
        }
    }
}

impl fmt::Display for Program {
    /// Renders the program back into pattern syntax, normalising group order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anchored {
            write!(f, "^")?;
        }
        for node in &self.nodes {
            match node {
                Node::EndOfLine => write!(f, "$")?,
                Node::Item(item) => {
                    write!(f, "{}", item.atom)?;
                    match item.quantifier {
                        Quantifier::Once => {}
                        Quantifier::OneOrMore => write!(f, "+")?,
                        Quantifier::ZeroOrOne => write!(f, "?")?,
                    }
                }
            }
        }
        Ok(())
    }
}
