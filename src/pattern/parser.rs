//! Compiles pattern strings into a [`Program`].

use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

use phf::{Map, phf_map};
use tracing::debug;

use super::ast::*;

/// Errors that can occur while interpreting a pattern.
///
/// These are structural: the same pattern fails the same way on every line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("empty character group in pattern")]
    EmptyGroup,
    #[error("unterminated character group '[' in pattern")]
    UnterminatedGroup,
    #[error("pattern ends with an incomplete escape '\\'")]
    IncompleteEscape,
    #[error("unknown escape '\\{0}' in pattern")]
    UnknownEscape(char),
    #[error("quantifier '{0}' has nothing to repeat")]
    DanglingQuantifier(char),
}

#[derive(Debug, Clone, Copy)]
enum Escape {
    Digit,
    Word,
    Backslash,
}

/// Characters that may follow a `\`.
const ESCAPES: Map<char, Escape> = phf_map! {
    'd' => Escape::Digit,
    'w' => Escape::Word,
    '\\' => Escape::Backslash,
};

/// Parse a pattern string into a [`Program`].
pub fn parse(input: &str) -> Result<Program, MatchError> {
    let program = Parser {
        chars: input.chars().peekable(),
    }
    .parse_program()?;
    debug!(pattern = input, compiled = %program, nodes = program.nodes.len(), "compiled pattern");
    Ok(program)
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn parse_program(&mut self) -> Result<Program, MatchError> {
        // Only a leading '^' anchors; anywhere else it is a literal.
        let anchored = self.chars.next_if_eq(&'^').is_some();
        let mut nodes = Vec::new();
        while let Some(c) = self.chars.next() {
            match c {
                '$' => nodes.push(Node::EndOfLine),
                '+' | '?' => return Err(MatchError::DanglingQuantifier(c)),
                _ => {
                    let atom = self.parse_atom(c)?;
                    let quantifier = self.parse_quantifier();
                    nodes.push(Node::Item(Item { atom, quantifier }));
                }
            }
        }
        Ok(Program { anchored, nodes })
    }

    /// Parse the atom introduced by `first` (already consumed).
    fn parse_atom(&mut self, first: char) -> Result<Atom, MatchError> {
        match first {
            '.' => Ok(Atom::Wildcard),
            '\\' => self.parse_escape(),
            '[' => self.parse_group(),
            c => Ok(Atom::Literal(c)),
        }
    }

    /// At most one quantifier binds to an atom; a second one is dangling.
    fn parse_quantifier(&mut self) -> Quantifier {
        match self.chars.next_if(|&c| c == '+' || c == '?') {
            Some('+') => Quantifier::OneOrMore,
            Some(_) => Quantifier::ZeroOrOne,
            None => Quantifier::Once,
        }
    }

    fn parse_escape(&mut self) -> Result<Atom, MatchError> {
        let c = self.chars.next().ok_or(MatchError::IncompleteEscape)?;
        match ESCAPES.get(&c) {
            Some(Escape::Digit) => Ok(Atom::Digit),
            Some(Escape::Word) => Ok(Atom::Word),
            Some(Escape::Backslash) => Ok(Atom::Literal('\\')),
            None => Err(MatchError::UnknownEscape(c)),
        }
    }

    /// Parse `[...]` or `[^...]` (the `[` has already been consumed).
    ///
    /// Members are taken literally up to the first `]`.
    fn parse_group(&mut self) -> Result<Atom, MatchError> {
        let negated = self.chars.next_if_eq(&'^').is_some();
        let mut members = BTreeSet::new();
        loop {
            match self.chars.next() {
                None => return Err(MatchError::UnterminatedGroup),
                Some(']') => break,
                Some(c) => {
                    members.insert(c);
                }
            }
        }
        if members.is_empty() {
            return Err(MatchError::EmptyGroup);
        }
        Ok(if negated {
            Atom::NegativeGroup(members)
        } else {
            Atom::PositiveGroup(members)
        })
    }
}
