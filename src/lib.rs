//! Rewick is a library to parse label-only Newick strings into trees
//! and render trees back to text.
//!
//! The crate covers the compact parenthesized core of the Newick
//! notation: labeled leaves, arbitrarily nested branches, and nothing
//! else. Core functionality provided:
//! - Tokenizer: Scan raw text into `(`, `)`, and label tokens; commas,
//!   whitespace, and all other punctuation are separators and dropped.
//!   Never fails. See [crate::tokenizer].
//! - Parser: Reduce the token stream to exactly one [Tree] in a single
//!   pass over an explicit stack, or fail with a [ParseError]. See
//!   [crate::newick].
//! - Writer: Render a [Tree] to its canonical comma-joined string, the
//!   inverse of parsing up to separator formatting.
//! - Tree model: [Tree] is a plain owned sum type of leaf and branch,
//!   also constructible directly. See [crate::model].
//!
//! Limitations (by design):
//! - No branch lengths, bootstrap values, comments, or quoted labels
//!   as found in extended Newick dialects
//! - No file I/O; input and output are in-memory strings
//! - No traversal or comparison utilities beyond equality and rendering
//!
//! All functions are pure: no shared state, nothing to configure, safe
//! to call from any number of threads.
//!
//! # Example
//!
//! Parse a Newick string and render it back:
//! ```
//! use rewick::{Tree, parse_newick_str};
//!
//! let tree = parse_newick_str("(A, (B, C))")?;
//! assert_eq!(
//!     tree,
//!     Tree::branch(vec![
//!         Tree::leaf("A"),
//!         Tree::branch(vec![Tree::leaf("B"), Tree::leaf("C")]),
//!     ])
//! );
//! assert_eq!(tree.to_newick(), "(A,(B,C))");
//! # Ok::<(), rewick::ParseError>(())
//! ```
//!
//! Malformed input is rejected, never patched up:
//! ```
//! use rewick::{ParseError, parse_newick_str};
//!
//! assert_eq!(parse_newick_str(""), Err(ParseError::EmptyInput));
//! assert!(matches!(
//!     parse_newick_str("(A,B"),
//!     Err(ParseError::UnbalancedParen { .. })
//! ));
//! ```

pub mod model;
pub mod newick;
pub mod tokenizer;

pub use model::Tree;
pub use newick::ParseError;
pub use tokenizer::Token;

// ============================================================================
// Quick Newick API
// ============================================================================
/// Parses a single label-only Newick string into a [Tree].
///
/// See [`newick::parse_str`] for full documentation of this convenience
/// function.
pub fn parse_newick_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParseError> {
    newick::parse_str(newick)
}

/// Renders a [Tree] to its canonical Newick string.
///
/// See [`newick::to_newick`] for full documentation of this convenience
/// function.
pub fn to_newick_str(tree: &Tree) -> String {
    newick::to_newick(tree)
}
