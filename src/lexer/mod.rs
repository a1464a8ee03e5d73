//! The lexer: a fixed token sequence and a cursor over it.
//!
//! A `Lexer` is built once, either by tokenizing source text or by converting an
//! existing token sequence, and is read-only afterwards apart from its cursor.
//! The cursor is a pair of indices: `current_pos` (the token last yielded) and
//! `next_pos` (the token the next advance yields). Before the first advance both are 0.

use std::sync::Arc;

use crate::error::{LexError, LexResult};
use crate::represent::{Representation, TokenValue};
use crate::token::Token;

mod classify;
mod ident;
mod split;

pub use classify::classify;
pub use ident::is_identifier;
pub use split::{lexemes, DelimiterPadding};

#[cfg(test)]
mod scenario_test;

/// Construction-time settings for a `Lexer`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Representation of the tokens the lexer hands out.
    /// If unset: records for source text, or the detected input representation
    /// for a token sequence.
    pub representation: Option<Representation>,
    pub padding: DelimiterPadding,
}

impl LexerConfig {
    pub fn representation(self, representation: Representation) -> Self {
        LexerConfig {
            representation: Some(representation),
            ..self
        }
    }

    pub fn padding(self, padding: DelimiterPadding) -> Self {
        LexerConfig { padding, ..self }
    }
}

/// Split the input into its constituent tokens; one token per lexeme.
pub fn tokenize(source: &str, padding: DelimiterPadding) -> Vec<Token> {
    let lexemes = lexemes(source, padding);
    tracing::trace!("split {} bytes of source into {} lexemes", source.len(), lexemes.len());
    lexemes.into_iter().map(classify::to_token).collect()
}

#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Arc<[Token]>,
    representation: Representation,
    current_pos: usize,
    next_pos: usize,
}

impl Lexer {
    /// Tokenize `source` with the default configuration.
    pub fn new(source: &str) -> Self {
        Lexer::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &str, config: LexerConfig) -> Self {
        let tokens = tokenize(source, config.padding);
        Lexer::from_parts(tokens, config.representation.unwrap_or_default())
    }

    /// Build a lexer over an existing token sequence.
    ///
    /// The representation of the whole sequence is taken from its first element;
    /// every element must then be in that representation.
    pub fn from_values<I>(values: I) -> LexResult<Self>
    where
        I: IntoIterator<Item = TokenValue>,
    {
        Lexer::from_values_with_config(values, LexerConfig::default())
    }

    /// As `from_values`. The padding setting is irrelevant here.
    pub fn from_values_with_config<I>(values: I, config: LexerConfig) -> LexResult<Self>
    where
        I: IntoIterator<Item = TokenValue>,
    {
        let mut values = values.into_iter().peekable();
        let detected = match values.peek() {
            Some(first) => Some(Representation::detect(first)?),
            None => None,
        };
        let tokens = match detected {
            Some(representation) => {
                tracing::debug!("converting token sequence from {} representation", representation);
                values
                    .map(|value| representation.convert(value))
                    .collect::<LexResult<Vec<_>>>()?
            }
            None => Vec::new(),
        };
        let representation = config.representation.or(detected).unwrap_or_default();
        Ok(Lexer::from_parts(tokens, representation))
    }

    /// Build a lexer over token records, yielding them in `representation`.
    pub fn from_tokens(tokens: Vec<Token>, representation: Representation) -> Self {
        Lexer::from_parts(tokens, representation)
    }

    fn from_parts(tokens: Vec<Token>, representation: Representation) -> Self {
        Lexer {
            tokens: tokens.into(),
            representation,
            current_pos: 0,
            next_pos: 0,
        }
    }

    pub fn version() -> String {
        format!("(scheme-lexer :version {})", env!("CARGO_PKG_VERSION"))
    }

    /// A new cursor over the same token sequence, at the start.
    pub fn cursor(&self) -> Lexer {
        Lexer {
            tokens: Arc::clone(&self.tokens),
            representation: self.representation,
            current_pos: 0,
            next_pos: 0,
        }
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// All tokens, in this lexer's representation.
    pub fn to_values(&self) -> Vec<TokenValue> {
        self.tokens
            .iter()
            .map(|token| self.representation.render(token))
            .collect()
    }

    pub fn current_pos(&self) -> usize {
        self.current_pos
    }

    pub fn next_pos(&self) -> usize {
        self.next_pos
    }

    fn render(&self, index: usize) -> Option<TokenValue> {
        self.tokens
            .get(index)
            .map(|token| self.representation.render(token))
    }

    /// The token most recently yielded.
    ///
    /// Before the first advance this is the first token (if any).
    pub fn current_token(&self) -> Option<TokenValue> {
        self.render(self.current_pos)
    }

    /// Advance past `offset` tokens and yield the one after them.
    pub fn next_token(&mut self, offset: usize) -> LexResult<TokenValue> {
        let index = self.advance(offset)?;
        self.render(index).ok_or(LexError::EndOfStream)
    }

    /// Look at the token `offset` places after the next one, without moving.
    ///
    /// Fails only if no tokens remain at all; a lookahead that runs off the end
    /// while tokens remain yields `None`.
    pub fn peek_token(&self, offset: usize) -> LexResult<Option<TokenValue>> {
        if self.next_pos >= self.tokens.len() {
            return Err(LexError::EndOfStream);
        }
        Ok(self
            .next_pos
            .checked_add(offset)
            .and_then(|index| self.render(index)))
    }

    /// As `next_token`, without yielding the token.
    pub fn skip_token(&mut self, offset: usize) -> LexResult<()> {
        self.advance(offset).map(|_| ())
    }

    /// Reset the cursor to before the first token.
    pub fn rewind(&mut self) -> &mut Self {
        self.current_pos = 0;
        self.next_pos = 0;
        self
    }

    fn advance(&mut self, offset: usize) -> LexResult<usize> {
        let index = self
            .next_pos
            .checked_add(offset)
            .filter(|&index| index < self.tokens.len())
            .ok_or(LexError::EndOfStream)?;
        self.current_pos = index;
        self.next_pos = index + 1;
        Ok(index)
    }
}

impl<'a> IntoIterator for &'a Lexer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
