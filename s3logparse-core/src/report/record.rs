use crate::report::tokenize::{Tokenization, TokenizeError};

/// Log convention for "not applicable".
pub const PLACEHOLDER: &str = "-";

/// Logical fields of an S3 server access log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SourceIp,
    /// Verb, path and protocol, e.g. `GET /bucket/key HTTP/1.1`.
    Request,
    BytesSent,
    ObjectKey,
    UserAgent,
}

impl Field {
    pub const fn index(self) -> usize {
        match self {
            Field::SourceIp => 4,
            Field::ObjectKey => 8,
            Field::Request => 9,
            Field::BytesSent => 12,
            Field::UserAgent => 17,
        }
    }

    /// The object key column never carries spaces, so it is read from a
    /// plain whitespace split. Everything else needs quote handling.
    pub const fn tokenization(self) -> Tokenization {
        match self {
            Field::ObjectKey => Tokenization::Whitespace,
            _ => Tokenization::Quoted,
        }
    }
}

/// One tokenized log line with named access to its fields.
///
/// Accessors return `None` when the line is too short to hold the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    tokens: Vec<String>,
}

impl LogRecord {
    pub fn parse(line: &str, tokenization: Tokenization) -> Result<Self, TokenizeError> {
        Ok(Self {
            tokens: tokenization.split(line)?,
        })
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.tokens.get(field.index()).map(String::as_str)
    }

    pub fn source_ip(&self) -> Option<&str> {
        self.field(Field::SourceIp)
    }

    pub fn request(&self) -> Option<&str> {
        self.field(Field::Request)
    }

    pub fn bytes_sent(&self) -> Option<&str> {
        self.field(Field::BytesSent)
    }

    pub fn object_key(&self) -> Option<&str> {
        self.field(Field::ObjectKey)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.field(Field::UserAgent)
    }
}

/// Parses a byte count column. Only plain ASCII digits are accepted; `-`
/// and anything that overflows `u64` yield `None`.
pub fn parse_bytes(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
