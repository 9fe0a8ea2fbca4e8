//! Line pattern matching engine.
//!
//! A pattern is compiled once into a [`Program`] and then searched for in a
//! single line. Unanchored patterns are tried at every offset, leftmost
//! first.
//!
//! # Pattern syntax
//!
//! | Token     | Meaning                                         |
//! |-----------|-------------------------------------------------|
//! | `c`       | The literal character `c`                       |
//! | `.`       | Any character                                   |
//! | `\d`      | One ASCII digit                                 |
//! | `\w`      | One word character (`_`, digit, letter)         |
//! | `\\`      | A literal backslash                             |
//! | `[abc]`   | One of the listed characters                    |
//! | `[^abc]`  | Any character not listed                        |
//! | `X+`      | One or more `X`                                 |
//! | `X?`      | Zero or one `X`                                 |
//! | `^`       | Start of line (first pattern character only)    |
//! | `$`       | End of line                                     |

pub mod ast;
pub mod char_class;
pub mod matcher;
pub mod parser;

pub use ast::{Atom, Item, Node, Program, Quantifier};
pub use matcher::{Match, find, match_line};
pub use parser::{MatchError, parse};
