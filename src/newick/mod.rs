//! Newick format parser and writer for label-only trees.
//!
//! This module ties the crate's layers together: the
//! [tokenizer](crate::tokenizer) feeds [parser::parse_tokens], and
//! [writer::to_newick] renders trees back to text.
//!
//! # Quick API
//! * [`parse_str`] - parses a single string into a [Tree]
//! * [`parse_tokens`] - parses an explicit token sequence
//! * [`to_newick`] - renders a [Tree] to its canonical string
//!
//! # Format
//! The accepted grammar is the label-only core of Newick:
//! * `tree ::= leaf | branch`
//! * `branch ::= '(' (tree (separator tree)*)? ')'`
//! * `leaf ::= word-characters+`
//! * `separator ::= any run of non-structural, non-word characters`
//!
//! Labels are maximal runs of `[A-Za-z0-9_]`. Commas and whitespace are
//! pure separators with no semantic weight; they may appear anywhere
//! between tokens and are discarded. Branch lengths, comments, quoted
//! labels, and the trailing `;` of extended Newick dialects are not
//! part of this grammar.

pub mod parser;
pub mod parsing_error;
pub mod writer;

pub use parser::parse_tokens;
pub use parsing_error::ParseError;
pub use writer::to_newick;

use crate::model::Tree;
use crate::tokenizer::Tokenizer;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single label-only Newick string into a [Tree].
///
/// Tokens are streamed lazily from the input; nothing is collected up
/// front. A bare label with no parentheses at all (e.g. `"A"`) is a
/// valid tree and yields a [Leaf](Tree::Leaf).
///
/// # Arguments
/// * `newick` - The Newick string to parse
///
/// # Returns
/// * `Ok(Tree)` - The tree described by the string
/// * `Err(ParseError)` - If the string is not a well-formed single tree
///
/// # Example
/// ```
/// use rewick::newick::parse_str;
///
/// let tree = parse_str("(Fratercula_arctica,(Fratercula_corniculata,Fratercula_cirrhata))")?;
/// assert_eq!(tree.children().map(|c| c.len()), Some(2));
/// # Ok::<(), rewick::ParseError>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParseError> {
    parser::parse_tokens(Tokenizer::new(newick.as_ref()))
}
