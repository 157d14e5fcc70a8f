//! Scanner turning raw text into a stream of [Token]s.
//!
//! This is the lowest layer of the crate: a single left-to-right pass
//! over the input that classifies characters into the two structural
//! parentheses and maximal word-character runs, dropping everything
//! else as separators. Scanning never fails; any input, including the
//! empty string, yields a (possibly empty) token sequence.

use crate::tokenizer::token::Token;
use std::str::CharIndices;

// =#========================================================================#=
// TOKENIZER
// =#========================================================================#=
/// Lazy tokenizer over a Newick string.
///
/// Yields [Token]s in source order without allocating the whole
/// sequence up front. For the eager counterpart see [tokenize].
///
/// # Example
/// ```
/// use rewick::tokenizer::{Token, Tokenizer};
///
/// let mut tokens = Tokenizer::new("(A,B)");
/// assert_eq!(tokens.next(), Some(Token::OpenParen));
/// assert_eq!(tokens.next(), Some(Token::label("A")));
/// ```
pub struct Tokenizer<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given text.
    ///
    /// No precondition on length or character set; characters outside
    /// `(`, `)`, and `[A-Za-z0-9_]` are treated as separators.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
        }
    }

    /// Consumes the maximal word-character run starting at `start` and
    /// returns it as a label token. The first non-word character is
    /// left unconsumed.
    fn scan_label(&mut self, start: usize) -> Token {
        // Word characters are ASCII, so the run start is one byte wide.
        let mut end = start + 1;
        loop {
            let mut ahead = self.chars.clone();
            match ahead.next() {
                Some((index, c)) if is_word_char(c) => {
                    end = index + c.len_utf8();
                    self.chars = ahead;
                }
                _ => break,
            }
        }

        Token::Label(self.text[start..end].to_string())
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // Separators are skipped here, so every loop iteration either
        // returns a token or exhausts the input.
        loop {
            let (index, c) = self.chars.next()?;
            match c {
                '(' => return Some(Token::OpenParen),
                ')' => return Some(Token::CloseParen),
                c if is_word_char(c) => return Some(self.scan_label(index)),
                _ => continue,
            }
        }
    }
}

/// Checks whether a character may appear in a label.
///
/// The label alphabet is ASCII `[A-Za-z0-9_]`; everything else,
/// including `,` and whitespace, is a separator.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// ============================================================================
// Eager API (pub)
// ============================================================================
/// Extracts all tokens from the text representation of a tree.
///
/// This is the eager counterpart of [Tokenizer]: the whole input is
/// scanned once and the tokens are collected in source order.
///
/// # Arguments
/// * `text` - Arbitrary input text; never rejected
///
/// # Returns
/// The ordered token sequence, empty if the input holds no parentheses
/// or word characters.
///
/// # Example
/// ```
/// use rewick::tokenizer::{Token, tokenize};
///
/// let tokens = tokenize("(A, (B, C))");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::OpenParen,
///         Token::label("A"),
///         Token::OpenParen,
///         Token::label("B"),
///         Token::label("C"),
///         Token::CloseParen,
///         Token::CloseParen,
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).collect()
}
