use crate::report::{Tokenization, TokenizeError, split_quoted, split_whitespace};
use pretty_assertions::assert_eq;

fn tokens(line: &str) -> Vec<String> {
    split_quoted(line).unwrap()
}

#[test]
fn splits_on_runs_of_whitespace() {
    assert_eq!(tokens("  a \t b\r\nc  "), vec!["a", "b", "c"]);
}

#[test]
fn double_quoted_run_is_one_token() {
    assert_eq!(
        tokens(r#"200 "GET /bucket/key HTTP/1.1" 765"#),
        vec!["200", "GET /bucket/key HTTP/1.1", "765"]
    );
}

#[test]
fn single_quotes_are_literal() {
    assert_eq!(tokens(r#"'a \" b' c"#), vec![r#"a \" b"#, "c"]);
}

#[test]
fn adjacent_quoted_and_bare_parts_join() {
    assert_eq!(tokens(r#"a"b c"d e"#), vec!["ab cd", "e"]);
}

#[test]
fn empty_quotes_yield_empty_token() {
    assert_eq!(tokens(r#"a "" b"#), vec!["a", "", "b"]);
}

#[test]
fn backslash_outside_quotes_escapes_next_char() {
    assert_eq!(tokens(r"a\ b c\\d"), vec!["a b", r"c\d"]);
}

#[test]
fn backslash_inside_double_quotes_only_escapes_quote_and_backslash() {
    assert_eq!(
        tokens(r#""say \"hi\" \\ \n""#),
        vec![r#"say "hi" \ \n"#]
    );
}

#[test]
fn unterminated_quote_is_an_error() {
    assert_eq!(
        split_quoted(r#"a "b c"#),
        Err(TokenizeError::UnterminatedQuote)
    );
    assert_eq!(split_quoted("a 'b"), Err(TokenizeError::UnterminatedQuote));
}

#[test]
fn trailing_backslash_is_an_error() {
    assert_eq!(split_quoted(r"a b\"), Err(TokenizeError::TrailingEscape));
    assert_eq!(split_quoted(r#""a\"#), Err(TokenizeError::TrailingEscape));
}

#[test]
fn empty_line_has_no_tokens() {
    assert!(tokens("").is_empty());
    assert!(tokens(" \n").is_empty());
}

#[test]
fn whitespace_split_keeps_quotes() {
    assert_eq!(
        split_whitespace(r#"a "b c" d"#),
        vec!["a", "\"b", "c\"", "d"]
    );
}

#[test]
fn tokenization_dispatches_to_the_right_splitter() {
    let line = r#"x "y z""#;

    assert_eq!(Tokenization::Quoted.split(line).unwrap(), vec!["x", "y z"]);
    assert_eq!(
        Tokenization::Whitespace.split(line).unwrap(),
        vec!["x", "\"y", "z\""]
    );
    // Unbalanced quotes only matter to the quote-aware splitter.
    assert!(Tokenization::Quoted.split(r#"a "b"#).is_err());
    assert_eq!(
        Tokenization::Whitespace.split(r#"a "b"#).unwrap(),
        vec!["a", "\"b"]
    );
}
