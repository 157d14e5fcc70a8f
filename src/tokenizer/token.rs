//! Token type produced by the scanner.

// =#========================================================================#=
// TOKEN
// =#========================================================================#=
/// A single token of a label-only Newick string.
///
/// The notation only has two structural symbols, the parentheses, plus
/// labels. Separators (commas, whitespace, any other punctuation) carry
/// no meaning and are dropped during scanning, so they never appear as
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The structural symbol `(`, opening a branch.
    OpenParen,
    /// The structural symbol `)`, closing a branch.
    CloseParen,
    /// A maximal run of word characters (`[A-Za-z0-9_]`), i.e. a leaf label.
    Label(String),
}

impl Token {
    /// Creates a label token from anything string-like.
    ///
    /// Mainly a convenience for composing token sequences by hand,
    /// e.g. when feeding [parse_tokens](crate::newick::parse_tokens)
    /// from a source other than [Tokenizer](crate::tokenizer::Tokenizer).
    pub fn label<S: Into<String>>(label: S) -> Self {
        Token::Label(label.into())
    }
}
