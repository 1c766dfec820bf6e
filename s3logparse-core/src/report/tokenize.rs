use thiserror::Error;

/// Characters that separate tokens outside of quotes.
const SEPARATORS: [char; 4] = [' ', '\t', '\r', '\n'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("no closing quotation")]
    UnterminatedQuote,

    #[error("no escaped character")]
    TrailingEscape,
}

/// How a raw line is cut into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenization {
    /// Shell-style splitting: quoted runs stay one token.
    Quoted,
    /// Plain whitespace splitting, quotes are ordinary characters.
    Whitespace,
}

impl Tokenization {
    pub fn split(self, line: &str) -> Result<Vec<String>, TokenizeError> {
        match self {
            Tokenization::Quoted => split_quoted(line),
            Tokenization::Whitespace => Ok(split_whitespace(line)),
        }
    }
}

/// Splits a line using POSIX shell word rules.
///
/// - single quotes preserve everything up to the closing quote
/// - inside double quotes only `\"` and `\\` are escapes, any other
///   backslash is kept as-is
/// - outside quotes a backslash makes the next character literal
/// - quoted and unquoted runs that touch are joined into one token, and an
///   empty pair of quotes still produces an (empty) token
pub fn split_quoted(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            Some(_) => match c {
                '"' => quote = None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => return Err(TokenizeError::TrailingEscape),
                },
                _ => current.push(c),
            },
            None => match c {
                c if SEPARATORS.contains(&c) => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                '\\' => {
                    let next = chars.next().ok_or(TokenizeError::TrailingEscape)?;
                    current.push(next);
                    in_token = true;
                }
                _ => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(TokenizeError::UnterminatedQuote);
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

pub fn split_whitespace(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
