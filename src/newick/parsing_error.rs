//! Error type for the Newick parser.
//!
//! This module provides [ParseError] for representing and reporting
//! errors that occur while reducing a token sequence to a tree. All
//! kinds are deterministic functions of the input: a malformed input
//! always yields the same error, never a partial or best-effort tree.

use thiserror::Error;

// =#========================================================================#=
// PARSE ERROR
// =#========================================================================#=
/// Errors that can occur while parsing a label-only Newick string.
///
/// Positions are token indices into the parsed token sequence (the
/// tokenizer itself never fails, so there is nothing to report in
/// character offsets).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` with no matching `(` on the stack, or a `(` that is never
    /// closed. For a stray `)` the position is its own token index; for
    /// an unclosed `(` it is the token index of that `(`, detected once
    /// the whole input has been consumed.
    #[error("unbalanced parenthesis at token {position}")]
    UnbalancedParen {
        /// Token index of the offending parenthesis.
        position: usize,
    },

    /// The input yielded no tree at all, e.g. it was empty or contained
    /// only separators.
    #[error("input contains no tree")]
    EmptyInput,

    /// The input described more than one top-level tree, e.g. `A B`
    /// with no enclosing parentheses.
    #[error("input describes {roots} top-level trees instead of one")]
    MultipleRootTrees {
        /// How many root values were left at end of input.
        roots: usize,
    },
}
