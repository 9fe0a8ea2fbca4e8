//! Backtracking matcher: run a [`Program`] against a line of text.
//!
//! All positions are **character** (not byte) indices into the line.

use tracing::trace;

use super::ast::*;
use super::parser::{MatchError, parse};

/// Span of a successful match, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ─── Public API ─────────────────────────────────────────────────────────────

/// Decide whether `pattern` matches somewhere in `line`.
///
/// Pattern errors are reported even when the line would never reach the
/// offending part of the pattern.
pub fn match_line(line: &str, pattern: &str) -> Result<bool, MatchError> {
    Ok(find(line, pattern)?.is_some())
}

/// Find the leftmost match of `pattern` in `line`.
pub fn find(line: &str, pattern: &str) -> Result<Option<Match>, MatchError> {
    let program = parse(pattern)?;
    let chars: Vec<char> = line.chars().collect();
    Ok(program.find(&chars))
}

impl Program {
    /// Leftmost match in `line`.
    ///
    /// Anchored programs only try offset 0; others try every offset from 0
    /// to `line.len()` inclusive and stop at the first success.
    pub fn find(&self, line: &[char]) -> Option<Match> {
        let last_start = if self.anchored { 0 } else { line.len() };
        (0..=last_start).find_map(|start| {
            trace!(start, "attempting match");
            match_nodes(&self.nodes, line, start).map(|end| Match { start, end })
        })
    }

    pub fn is_match(&self, line: &[char]) -> bool {
        self.find(line).is_some()
    }
}

// ─── Core matching functions ─────────────────────────────────────────────────

/// Match `nodes` starting at `pos`. Returns the end position of the first
/// successful alignment, or `None`.
///
/// Each call consumes one node, so recursion depth is bounded by the
/// pattern length.
fn match_nodes(nodes: &[Node], line: &[char], pos: usize) -> Option<usize> {
    let Some((node, rest)) = nodes.split_first() else {
        return Some(pos);
    };
    let Node::Item(item) = node else {
        // `$` is zero-width.
        return if pos == line.len() {
            match_nodes(rest, line, pos)
        } else {
            None
        };
    };
    // Every atom, quantified or not, needs a character to look at.
    if pos == line.len() {
        return None;
    }
    match item.quantifier {
        Quantifier::Once => {
            match_atom_once(&item.atom, line, pos).and_then(|end| match_nodes(rest, line, end))
        }
        // A mismatch skips the atom; a match commits to it.
        Quantifier::ZeroOrOne => match match_atom_once(&item.atom, line, pos) {
            Some(end) => match_nodes(rest, line, end),
            None => match_nodes(rest, line, pos),
        },
        Quantifier::OneOrMore => {
            let longest = run_end(&item.atom, line, pos);
            (pos + 1..=longest)
                .rev()
                .find_map(|end| match_nodes(rest, line, end))
        }
    }
}

/// End of the run of characters satisfying `atom` that begins at `start`.
fn run_end(atom: &Atom, line: &[char], start: usize) -> usize {
    line[start..]
        .iter()
        .position(|&ch| !atom.matches(ch))
        .map_or(line.len(), |len| start + len)
}

/// Try to match `atom` at `pos`. Returns the new position if successful.
fn match_atom_once(atom: &Atom, line: &[char], pos: usize) -> Option<usize> {
    let ch = *line.get(pos)?;
    atom.matches(ch).then_some(pos + 1)
}
