//! Token representations.
//!
//! A token can be handed out (and taken in) in one of three forms:
//! - a `Token` record,
//! - a key-value mapping `{"type": <kind>, "literal": <string or null>}`,
//! - the JSON text of that mapping.
//!
//! A lexer fixes one form at construction and yields every token in it.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// The key-value form of a token.
pub type TokenMap = serde_json::Map<String, Value>;

const TYPE_KEY: &str = "type";
const LITERAL_KEY: &str = "literal";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    #[default]
    Record,
    Mapping,
    JsonText,
}

/// A token in one of the supported representations.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Record(Token),
    Mapping(TokenMap),
    JsonText(String),
}

impl Representation {
    pub fn name(self) -> &'static str {
        match self {
            Representation::Record => "record",
            Representation::Mapping => "mapping",
            Representation::JsonText => "json-text",
        }
    }

    /// Produce `token` in this representation.
    pub fn render(self, token: &Token) -> TokenValue {
        match self {
            Representation::Record => TokenValue::Record(token.clone()),
            Representation::Mapping => TokenValue::Mapping(token.to_mapping()),
            Representation::JsonText => TokenValue::JsonText(token.to_json()),
        }
    }

    /// Work out which representation a token sequence uses, from one of its elements.
    pub fn detect(sample: &TokenValue) -> LexResult<Representation> {
        match sample {
            TokenValue::Record(_) => Ok(Representation::Record),
            TokenValue::Mapping(map) if map.contains_key(TYPE_KEY) && map.contains_key(LITERAL_KEY) => {
                Ok(Representation::Mapping)
            }
            TokenValue::Mapping(map) => Err(LexError::InvalidConversionTarget(format!(
                "mapping without {TYPE_KEY:?} and {LITERAL_KEY:?} keys: {}",
                Value::Object(map.clone())
            ))),
            TokenValue::JsonText(text) => match serde_json::from_str::<Value>(text) {
                Ok(_) => Ok(Representation::JsonText),
                Err(_) => Err(LexError::InvalidConversionTarget(format!(
                    "string is not JSON: {text:?}"
                ))),
            },
        }
    }

    /// Convert a value that is expected to be in this representation into a token record.
    pub fn convert(self, value: TokenValue) -> LexResult<Token> {
        match (self, value) {
            (Representation::Record, TokenValue::Record(token)) => Ok(token),
            (Representation::Mapping, TokenValue::Mapping(map)) => Token::from_mapping(&map),
            (Representation::JsonText, TokenValue::JsonText(text)) => Token::from_json(&text),
            (_, other) => Err(LexError::InvalidConversionTarget(format!(
                "expected a {} token, found a {} token",
                self,
                other.representation()
            ))),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "record" | "token" => Ok(Representation::Record),
            "mapping" | "hash" => Ok(Representation::Mapping),
            "json-text" | "json" => Ok(Representation::JsonText),
            _ => Err(LexError::InvalidConversionTarget(format!(
                "unsupported representation {s:?}"
            ))),
        }
    }
}

impl TokenValue {
    pub fn representation(&self) -> Representation {
        match self {
            TokenValue::Record(_) => Representation::Record,
            TokenValue::Mapping(_) => Representation::Mapping,
            TokenValue::JsonText(_) => Representation::JsonText,
        }
    }

    /// Read this value back as a token record, whatever its representation.
    pub fn to_token(&self) -> LexResult<Token> {
        self.representation().convert(self.clone())
    }

    pub fn as_record(&self) -> Option<&Token> {
        match self {
            TokenValue::Record(token) => Some(token),
            _ => None,
        }
    }
}

impl From<Token> for TokenValue {
    fn from(value: Token) -> Self {
        TokenValue::Record(value)
    }
}

impl From<TokenMap> for TokenValue {
    fn from(value: TokenMap) -> Self {
        TokenValue::Mapping(value)
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::JsonText(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::JsonText(value.to_owned())
    }
}

impl Token {
    pub fn to_mapping(&self) -> TokenMap {
        let mut map = TokenMap::new();
        map.insert(TYPE_KEY.to_owned(), Value::from(self.kind.name()));
        let literal = match &self.literal {
            Some(s) => Value::from(s.as_str()),
            None => Value::Null,
        };
        map.insert(LITERAL_KEY.to_owned(), literal);
        map
    }

    /// Build a token from its mapping form. Both keys are required; the literal may be null.
    pub fn from_mapping(map: &TokenMap) -> LexResult<Token> {
        let kind = match map.get(TYPE_KEY) {
            Some(Value::String(name)) => name.parse::<TokenKind>()?,
            Some(other) => {
                return Err(LexError::InvalidMapping(format!(
                    "{TYPE_KEY:?} must be a string, found {other}"
                )))
            }
            None => return Err(LexError::InvalidMapping(format!("missing {TYPE_KEY:?} key"))),
        };
        let literal = match map.get(LITERAL_KEY) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) => None,
            Some(other) => {
                return Err(LexError::InvalidMapping(format!(
                    "{LITERAL_KEY:?} must be a string or null, found {other}"
                )))
            }
            None => {
                return Err(LexError::InvalidMapping(format!(
                    "missing {LITERAL_KEY:?} key"
                )))
            }
        };
        Ok(Token { kind, literal })
    }

    /// JSON text of the mapping form, `type` first.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| Value::Object(self.to_mapping()).to_string())
    }

    pub fn from_json(text: &str) -> LexResult<Token> {
        let invalid = |reason: String| LexError::InvalidJsonText {
            text: text.to_owned(),
            reason,
        };
        let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(invalid("not a JSON object".to_owned()));
        };
        Token::from_mapping(&map).map_err(|err| match err {
            LexError::InvalidMapping(reason) => invalid(reason),
            other => other,
        })
    }
}
