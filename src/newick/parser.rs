//! Stack-based parser reducing a token sequence to a [Tree].
//!
//! The parser makes a single left-to-right pass over the tokens with an
//! explicit auxiliary stack:
//! * `(` pushes a sentinel marker,
//! * a label pushes a finished leaf,
//! * `)` pops values back to the nearest marker and pushes the branch
//!   built from them.
//!
//! After the last token, exactly one value must remain on the stack;
//! anything else is reported as a [ParseError]. There is no recovery —
//! a malformed input always yields an error, never a partial tree.

use crate::model::Tree;
use crate::newick::parsing_error::ParseError;
use crate::tokenizer::Token;
use tracing::instrument;

// =#========================================================================#=
// STACK ENTRY
// =#========================================================================#=
/// An in-progress item on the parse stack.
///
/// Keeping the sentinel a variant of its own (rather than a magic
/// value) makes the "pop until marker" reduction exhaustive: on
/// malformed input the stack simply runs dry, which is an error case,
/// not an undefined state.
#[derive(Debug)]
enum StackEntry {
    /// Sentinel for a `(`; remembers the token index it was seen at.
    Marker { position: usize },
    /// A completed tree value reduced from earlier tokens.
    Value(Tree),
}

// ============================================================================
// Parsing (pub)
// ============================================================================
/// Parses a token sequence into a single [Tree].
///
/// Accepts any token source, not just [Tokenizer](crate::tokenizer::Tokenizer)
/// output; the parser makes no assumption beyond the token variants
/// themselves (e.g. hand-built sequences with consecutive labels are
/// handled and rejected as multiple roots).
///
/// # Arguments
/// * `tokens` - The token sequence, in source order
///
/// # Returns
/// * `Ok(Tree)` - The single tree the sequence describes
/// * `Err(ParseError)` - If parentheses are unbalanced, the sequence is
///   empty, or more than one top-level tree remains
#[instrument(level = "trace", skip(tokens))]
pub fn parse_tokens<I>(tokens: I) -> Result<Tree, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    let mut stack: Vec<StackEntry> = Vec::new();

    for (position, token) in tokens.into_iter().enumerate() {
        match token {
            Token::OpenParen => stack.push(StackEntry::Marker { position }),
            Token::Label(label) => stack.push(StackEntry::Value(Tree::Leaf(label))),
            Token::CloseParen => reduce_branch(&mut stack, position)?,
        }
    }

    finish(stack)
}

// ============================================================================
// Reduction steps
// ============================================================================
/// Reduces the stack on a `)` at token index `position`: pops values
/// until the matching marker and pushes the branch built from them.
///
/// Children come off the stack in reverse, so they are flipped once to
/// restore source order. Running past the bottom of the stack means the
/// `)` has no matching `(`.
fn reduce_branch(stack: &mut Vec<StackEntry>, position: usize) -> Result<(), ParseError> {
    let mut children = Vec::new();
    loop {
        match stack.pop() {
            Some(StackEntry::Marker { .. }) => break,
            Some(StackEntry::Value(tree)) => children.push(tree),
            None => return Err(ParseError::UnbalancedParen { position }),
        }
    }

    children.reverse();
    stack.push(StackEntry::Value(Tree::Branch(children)));
    Ok(())
}

/// Checks the stack after the last token and extracts the result.
///
/// A leftover marker is an unclosed `(` and outranks the value-count
/// checks; with several leftover markers the earliest one is reported.
fn finish(stack: Vec<StackEntry>) -> Result<Tree, ParseError> {
    let mut roots: Vec<Tree> = Vec::with_capacity(1);
    for entry in stack {
        match entry {
            StackEntry::Marker { position } => {
                return Err(ParseError::UnbalancedParen { position });
            }
            StackEntry::Value(tree) => roots.push(tree),
        }
    }

    match roots.len() {
        0 => Err(ParseError::EmptyInput),
        1 => Ok(roots.remove(0)),
        n => Err(ParseError::MultipleRootTrees { roots: n }),
    }
}
