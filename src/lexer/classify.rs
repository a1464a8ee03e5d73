//! Assigning a kind to each lexeme.

use ::regex::Regex;

use super::ident::is_identifier;
use crate::token::{Token, TokenKind};

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    // Non-negative real: no leading zero (other than "0" itself), optional fraction.
    const REAL: &str = r"(?:[1-9][0-9]*|0)(?:\.[0-9]+)?";

    fn rational_pattern() -> String {
        format!("{REAL}/{REAL}")
    }

    // Either part of a complex number.
    fn complex_part_pattern() -> String {
        format!("(?:{}|{REAL})", rational_pattern())
    }

    pub(super) fn boolean() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A#(?:f(?:alse)?|t(?:rue)?)\z")
                .expect("could not compile regex for boolean")
        })
    }

    pub(super) fn character() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A#\\(?:.|space|newline)\z")
                .expect("could not compile regex for character")
        })
    }

    pub(super) fn string() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // Quote, then any run of escaped characters or non-quote characters,
            // then the closing quote.
            Regex::new(r#"\A(?s)"(?:[^"\\]|\\.)*"\z"#)
                .expect("could not compile regex for string")
        })
    }

    pub(super) fn real() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(&format!(r"\A[+-]?{REAL}\z")).expect("could not compile regex for real")
        })
    }

    pub(super) fn rational() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(&format!(r"\A[+-]?{}\z", rational_pattern()))
                .expect("could not compile regex for rational")
        })
    }

    pub(super) fn complex() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            let part = complex_part_pattern();
            Regex::new(&format!(r"\A[+-]?{part}[+-]{part}i\z"))
                .expect("could not compile regex for complex")
        })
    }

    pub(super) fn pure_imaginary() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(&format!(r"\A[+-]{}?i\z", complex_part_pattern()))
                .expect("could not compile regex for pure imaginary")
        })
    }
}

enum Pattern {
    Exact(&'static str),
    Regex(fn() -> &'static Regex),
}

impl Pattern {
    fn matches(&self, lexeme: &str) -> bool {
        match self {
            Pattern::Exact(s) => lexeme == *s,
            Pattern::Regex(get) => get().is_match(lexeme),
        }
    }
}

/// Classification rules; the first match wins.
/// Anything that matches no rule is an identifier if it is spelled like one.
const RULES: &[(Pattern, TokenKind)] = &[
    (Pattern::Exact("("), TokenKind::LParen),
    (Pattern::Exact(")"), TokenKind::RParen),
    (Pattern::Exact("."), TokenKind::Dot),
    (Pattern::Exact("'"), TokenKind::Quotation),
    (Pattern::Exact("#("), TokenKind::VecLParen),
    // `|...|` identifiers are unsupported.
    (Pattern::Exact("|"), TokenKind::Illegal),
    (Pattern::Regex(regex::boolean), TokenKind::Boolean),
    (Pattern::Regex(regex::character), TokenKind::Character),
    (Pattern::Regex(regex::string), TokenKind::String),
    (Pattern::Regex(regex::real), TokenKind::Number),
    (Pattern::Regex(regex::rational), TokenKind::Number),
    (Pattern::Regex(regex::complex), TokenKind::Number),
    (Pattern::Regex(regex::pure_imaginary), TokenKind::Number),
];

/// The kind of a single lexeme.
pub fn classify(lexeme: &str) -> TokenKind {
    let kind = RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(lexeme))
        .map(|(_, kind)| *kind)
        .unwrap_or_else(|| {
            if is_identifier(lexeme) {
                TokenKind::Identifier
            } else {
                TokenKind::Illegal
            }
        });
    if kind == TokenKind::Illegal {
        tracing::debug!("illegal lexeme {:?}", lexeme);
    }
    kind
}

pub fn to_token(lexeme: String) -> Token {
    Token::new(classify(&lexeme), lexeme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_kind(lexemes: &[&str], want: TokenKind) {
        for lexeme in lexemes {
            assert_eq!(classify(lexeme), want, "unexpected kind for {lexeme:?}");
        }
    }

    #[test]
    fn delimiters() {
        assert_eq!(classify("("), TokenKind::LParen);
        assert_eq!(classify(")"), TokenKind::RParen);
        assert_eq!(classify("."), TokenKind::Dot);
        assert_eq!(classify("'"), TokenKind::Quotation);
        assert_eq!(classify("#("), TokenKind::VecLParen);
    }

    #[test]
    fn booleans() {
        assert_kind(&["#f", "#t", "#false", "#true"], TokenKind::Boolean);
        assert_kind(&["#fals", "#tru", "#F"], TokenKind::Illegal);
    }

    #[test]
    fn characters() {
        assert_kind(
            &["#\\a", "#\\space", "#\\newline", "#\\(", "#\\λ"],
            TokenKind::Character,
        );
        assert_kind(&["#\\", "#\\ab", "#\\tab"], TokenKind::Illegal);
    }

    #[test]
    fn strings() {
        assert_kind(
            &[
                r#""foo""#,
                r#""bar-hoge""#,
                r#""""#,
                r#""with space""#,
                r#""say \"hi\"""#,
                r#""back\\""#,
            ],
            TokenKind::String,
        );
        assert_kind(&[r#""unterminated"#, r#""a"b""#, r#""a\""#], TokenKind::Illegal);
    }

    #[test]
    fn integers_and_decimals() {
        assert_kind(
            &["123456", "0", "123456789012345678901234567890", "-3.14", "0.101", "+0.0001"],
            TokenKind::Number,
        );
        assert_kind(&["01", "1.", "1.2.3", "00"], TokenKind::Illegal);
    }

    #[test]
    fn rationals() {
        assert_kind(&["1/2", "-2/3", "3.14/6.28", "0.9/0.001"], TokenKind::Number);
        assert_eq!(classify("1/"), TokenKind::Illegal);
        assert_eq!(classify("/2"), TokenKind::Identifier);
    }

    #[test]
    fn complex_numbers() {
        assert_kind(
            &["1+2i", "-2+3i", "4-5i", "-6-7i", "+8.9i", "-10.11i", "2/3+4/5i", "+i", "-i"],
            TokenKind::Number,
        );
        assert_kind(&["1+i2", "8.9i"], TokenKind::Illegal);
    }

    #[test]
    fn identifiers_and_operators() {
        assert_kind(
            &["foo", "if", "define", "+", "-", "*", "/", "<=", "=", "...", "->string", "<=?"],
            TokenKind::Identifier,
        );
    }

    #[test]
    fn unsupported_syntax_is_illegal() {
        assert_kind(
            &["|", "|foo|", "#|", "|#", "#u8(", "`", ",", ",@", "123,456"],
            TokenKind::Illegal,
        );
    }
}
