//! Scheme tokens: a kind plus the literal text it was read from.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LexError;

/// The closed set of token kinds.
///
/// Several delimiter kinds (`Backquote`, `Comma`, `BytevecLParen`, ...) are never
/// produced by the tokenizer, but are legal in externally supplied token sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // Delimiters
    /// `(`
    #[serde(rename = "lparen")]
    LParen,
    /// `)`
    #[serde(rename = "rparen")]
    RParen,
    /// `#(`
    #[serde(rename = "vec_lparen")]
    VecLParen,
    /// `#u8(`
    #[serde(rename = "bytevec_lparen")]
    BytevecLParen,
    /// `'`
    Quotation,
    /// `` ` `` (aka quasiquote)
    Backquote,
    /// `,`
    Comma,
    /// `,@`
    CommaAt,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `#|`
    #[serde(rename = "comment_lparen")]
    CommentLParen,
    /// `|#`
    #[serde(rename = "comment_rparen")]
    CommentRParen,

    // Values
    Identifier,
    Boolean,
    Number,
    Character,
    String,

    /// Bare operator (`+`, `<=`, ...), from earlier revisions of the grammar.
    OpProc,

    Illegal,
}

impl TokenKind {
    pub const ALL: [TokenKind; 19] = [
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::VecLParen,
        TokenKind::BytevecLParen,
        TokenKind::Quotation,
        TokenKind::Backquote,
        TokenKind::Comma,
        TokenKind::CommaAt,
        TokenKind::Dot,
        TokenKind::Semicolon,
        TokenKind::CommentLParen,
        TokenKind::CommentRParen,
        TokenKind::Identifier,
        TokenKind::Boolean,
        TokenKind::Number,
        TokenKind::Character,
        TokenKind::String,
        TokenKind::OpProc,
        TokenKind::Illegal,
    ];

    /// The external name of this kind, as used in the mapping and JSON representations.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::VecLParen => "vec_lparen",
            TokenKind::BytevecLParen => "bytevec_lparen",
            TokenKind::Quotation => "quotation",
            TokenKind::Backquote => "backquote",
            TokenKind::Comma => "comma",
            TokenKind::CommaAt => "comma_at",
            TokenKind::Dot => "dot",
            TokenKind::Semicolon => "semicolon",
            TokenKind::CommentLParen => "comment_lparen",
            TokenKind::CommentRParen => "comment_rparen",
            TokenKind::Identifier => "identifier",
            TokenKind::Boolean => "boolean",
            TokenKind::Number => "number",
            TokenKind::Character => "character",
            TokenKind::String => "string",
            TokenKind::OpProc => "op_proc",
            TokenKind::Illegal => "illegal",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = LexError;

    /// Accepts the external name, with or without a leading `:` (as the CSV form writes it).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix(':').unwrap_or(s);
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| LexError::UnknownTokenKind(s.to_owned()))
    }
}

/// A classified lexeme.
///
/// The literal is only ever `None` when a token was built from an external
/// mapping or JSON value carrying a null literal; tokenizing always fills it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub literal: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: Some(literal.into()),
        }
    }

    /// A token with no literal text.
    pub fn nil(kind: TokenKind) -> Self {
        Token {
            kind,
            literal: None,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Render as a CSV row: `":kind","literal"`, with `nil` for a missing literal.
    pub fn to_csv(&self) -> String {
        let literal = self.literal().unwrap_or("nil");
        format!("\":{}\",\"{}\"", self.kind, literal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal().unwrap_or(""))
    }
}
