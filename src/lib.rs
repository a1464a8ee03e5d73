//! Lexical analyzer for Scheme source.
//!
//! Source text is split into lexemes (whitespace-separated, with string literals
//! kept whole), and each lexeme is classified into a `TokenKind`. The resulting
//! token sequence sits behind a `Lexer` cursor with `next`/`peek`/`skip`/`rewind`,
//! for a parser to consume.
//!
//! Tokens can be handed out as `Token` records, as key-value mappings, or as JSON
//! text; a lexer can also be built from a token sequence in any of those forms.
//!
//! Limitations:
//! - No nested-structure checking; this only classifies flat lexemes.
//! - Numbers are recognized by shape only.
//! - Block comments (`#| |#`) and `|...|` identifiers are lexed as `illegal`.

pub mod error;
pub mod lexer;
pub mod represent;
pub mod token;

pub use error::{LexError, LexResult};
pub use lexer::{tokenize, DelimiterPadding, Lexer, LexerConfig};
pub use represent::{Representation, TokenMap, TokenValue};
pub use token::{Token, TokenKind};

/// Tokenize `source` with the default configuration.
pub fn lexer(source: &str) -> Lexer {
    Lexer::new(source)
}
