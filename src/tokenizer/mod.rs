//! Lexical layer turning Newick text into [Token]s.
pub mod scanner;
pub mod token;

pub use scanner::{Tokenizer, tokenize};
pub use token::Token;
