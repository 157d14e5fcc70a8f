use rewick::tokenizer::{Token, Tokenizer, tokenize};
use rstest::rstest;

// --- TESTS TOKEN CLASSIFICATION ---
#[test]
fn test_single_label() {
    assert_eq!(tokenize("A"), vec![Token::label("A")]);
}

#[test]
fn test_structural_symbols_and_labels() {
    let tokens = tokenize("(A, (B, C))");
    assert_eq!(
        tokens,
        vec![
            Token::OpenParen,
            Token::label("A"),
            Token::OpenParen,
            Token::label("B"),
            Token::label("C"),
            Token::CloseParen,
            Token::CloseParen,
        ]
    );
}

#[test]
fn test_label_is_maximal_word_run() {
    // Letters, digits, and underscores form one token.
    assert_eq!(tokenize("Larus_argentatus_2"), vec![Token::label("Larus_argentatus_2")]);
}

#[test]
fn test_labels_split_at_non_word_characters() {
    assert_eq!(
        tokenize("A1-B2.C3"),
        vec![Token::label("A1"), Token::label("B2"), Token::label("C3")]
    );
}

#[test]
fn test_token_order_matches_source_order() {
    assert_eq!(
        tokenize(")B)A("),
        vec![
            Token::CloseParen,
            Token::label("B"),
            Token::CloseParen,
            Token::label("A"),
            Token::OpenParen,
        ]
    );
}

// --- TESTS SEPARATOR HANDLING ---
#[rstest]
#[case::empty("")]
#[case::whitespace("  \t\n\r ")]
#[case::commas(",,,")]
#[case::punctuation(";:!?.[]' ")]
#[case::non_ascii("äöü é λ")]
fn test_separator_only_input_yields_no_tokens(#[case] input: &str) {
    assert_eq!(tokenize(input), vec![]);
}

#[rstest]
#[case::spaces("( A , B )")]
#[case::no_separators("(A,B)")]
#[case::exotic_separators("(A;B)")]
#[case::newlines("(\nA\n,\nB\n)")]
fn test_separators_are_interchangeable(#[case] input: &str) {
    assert_eq!(
        tokenize(input),
        vec![
            Token::OpenParen,
            Token::label("A"),
            Token::label("B"),
            Token::CloseParen,
        ]
    );
}

#[test]
fn test_non_ascii_characters_split_labels() {
    // The label alphabet is ASCII; anything else separates.
    assert_eq!(tokenize("Aé B"), vec![Token::label("A"), Token::label("B")]);
}

// --- TESTS LAZY TOKENIZER ---
#[test]
fn test_tokenizer_yields_lazily() {
    let mut tokens = Tokenizer::new(" (Apteryx_owenii ");
    assert_eq!(tokens.next(), Some(Token::OpenParen));
    assert_eq!(tokens.next(), Some(Token::label("Apteryx_owenii")));
    assert_eq!(tokens.next(), None);
    // Exhausted tokenizer stays exhausted.
    assert_eq!(tokens.next(), None);
}

#[test]
fn test_tokenizer_and_tokenize_agree() {
    let input = "((A,B),(C,(D,E)))";
    let lazy: Vec<Token> = Tokenizer::new(input).collect();
    assert_eq!(lazy, tokenize(input));
}
