//! A minimal regular-expression line matcher.
//!
//! # Example
//!
//! ```rust
//! use mygrep::{Match, MatchError, find, match_line};
//!
//! assert_eq!(match_line("caats", "ca+ts"), Ok(true));
//! assert_eq!(match_line("abc", "^b"), Ok(false));
//! assert_eq!(find("log: 404", r"\d+$"), Ok(Some(Match { start: 5, end: 8 })));
//!
//! // Pattern errors are distinct from a clean non-match.
//! assert_eq!(match_line("abc", "[abc"), Err(MatchError::UnterminatedGroup));
//! ```

pub mod pattern;

pub use pattern::{Atom, Match, MatchError, Program, Quantifier, find, match_line, parse};
