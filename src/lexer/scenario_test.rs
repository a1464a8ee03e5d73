//! Whole-program tokenizing tests.
use super::*;
use crate::represent::TokenMap;
use crate::token::TokenKind;

fn kinds(lexer: &Lexer) -> Vec<TokenKind> {
    lexer.iter().map(|t| t.kind).collect()
}

fn single(source: &str) -> Token {
    let tokens = Lexer::new(source).tokens().to_vec();
    assert_eq!(tokens.len(), 1, "expected one token from {source:?}: {tokens:?}");
    tokens.into_iter().next().unwrap()
}

#[test]
fn lambda_with_lookahead() -> LexResult<()> {
    use TokenKind::*;
    let lexer = Lexer::new("(lambda (x y) (+ x y))");
    assert_eq!(
        kinds(&lexer),
        [
            LParen, Identifier, LParen, Identifier, Identifier, RParen, LParen, Identifier,
            Identifier, Identifier, RParen, RParen,
        ]
    );

    let token = lexer.peek_token(3)?.unwrap();
    assert_eq!(token.as_record(), Some(&Token::new(Identifier, "x")));
    let token = lexer.peek_token(4)?.unwrap();
    assert_eq!(token.as_record(), Some(&Token::new(Identifier, "y")));
    let token = lexer.peek_token(7)?.unwrap();
    assert_eq!(token.as_record(), Some(&Token::new(Identifier, "+")));
    assert_eq!(lexer.current_pos(), 0);
    Ok(())
}

#[test]
fn factorial() -> LexResult<()> {
    use TokenKind::*;
    let mut lexer = Lexer::new("(define (fact n) (if (= n 0) 1 (* n (fact (- n 1)))))");
    let want = [
        LParen, Identifier, LParen, Identifier, Identifier, RParen, LParen, Identifier, LParen,
        Identifier, Identifier, Number, RParen, Number, LParen, Identifier, Identifier, LParen,
        Identifier, LParen, Identifier, Identifier, Number, RParen, RParen, RParen, RParen,
        RParen,
    ];
    for kind in want {
        assert_eq!(lexer.next_token(0)?.to_token()?.kind, kind);
    }
    assert_eq!(lexer.next_token(0), Err(LexError::EndOfStream));
    Ok(())
}

#[test]
fn single_lexemes() {
    for (source, kind) in [
        ("#f", TokenKind::Boolean),
        ("#\\space", TokenKind::Character),
        ("1/2", TokenKind::Number),
        ("-2+3i", TokenKind::Number),
        ("->string", TokenKind::Identifier),
        ("...", TokenKind::Identifier),
        ("  123456   ", TokenKind::Number),
        ("\"bar-hoge\"", TokenKind::String),
        ("#(", TokenKind::VecLParen),
    ] {
        assert_eq!(single(source), Token::new(kind, source.trim()), "source {source:?}");
    }
}

#[test]
fn quoted_list() {
    use TokenKind::*;
    let lexer = Lexer::new("'(1 . 2)");
    assert_eq!(kinds(&lexer), [Quotation, LParen, Number, Dot, Number, RParen]);
}

#[test]
fn vector_literal() {
    use TokenKind::*;
    let lexer = Lexer::new("#(#t #\\a \"s\")");
    assert_eq!(kinds(&lexer), [VecLParen, Boolean, Character, String, RParen]);
}

#[test]
fn string_with_delimiters_inside() {
    let lexer = Lexer::new(r#"(display "(it's)")"#);
    assert_eq!(lexer.tokens()[2], Token::new(TokenKind::String, r#""(it's)""#));
    assert_eq!(lexer.len(), 4);

    let config = LexerConfig::default().padding(DelimiterPadding::Everywhere);
    let lexer = Lexer::with_config(r#"(display "(it's)")"#, config);
    assert_eq!(lexer.tokens()[2], Token::new(TokenKind::String, r#""( it ' s ) ""#));
}

#[test]
fn unsupported_syntax_is_kept_verbatim() {
    let lexer = Lexer::new("#| |# |x| | #u8(");
    for token in &lexer {
        assert_eq!(token.kind, TokenKind::Illegal, "{token:?}");
    }
    let literals: Vec<_> = lexer.iter().filter_map(Token::literal).collect();
    assert_eq!(literals, ["#|", "|#", "|x|", "|", "#u8("]);
}

#[test]
fn one_token_per_lexeme() {
    for source in [
        "",
        "(a b c)",
        "  (define x \"a b\")  ; comment",
        "#(1 2) '(3 . 4) `(,x ,@y)",
        "((()))",
    ] {
        let padding = DelimiterPadding::default();
        assert_eq!(
            tokenize(source, padding).len(),
            lexemes(source, padding).len(),
            "source {source:?}"
        );
    }
}

#[test]
fn retokenizing_literals_keeps_kinds() {
    let source = "(define (f x) (if (<= x 1/2) #t (list 'a #\\b \"c\" 3.14 -2+3i ...)))";
    let first = Lexer::new(source);
    let joined: Vec<&str> = first.iter().filter_map(Token::literal).collect();
    let second = Lexer::new(&joined.join(" "));
    assert_eq!(kinds(&first), kinds(&second));
}

#[test]
fn from_mappings_matches_source() -> LexResult<()> {
    let values: Vec<TokenValue> = [("lparen", "("), ("identifier", "list"), ("rparen", ")")]
        .into_iter()
        .map(|(kind, literal)| {
            let mut map = TokenMap::new();
            map.insert("type".to_owned(), kind.into());
            map.insert("literal".to_owned(), literal.into());
            TokenValue::Mapping(map)
        })
        .collect();
    let lexer = Lexer::from_values(values)?;
    assert_eq!(kinds(&lexer), kinds(&Lexer::new("(list)")));
    Ok(())
}

#[test]
fn from_json_text_matches_source() -> LexResult<()> {
    let values = [
        r#"{"type":"lparen","literal":"("}"#,
        r#"{"type":"identifier","literal":"list"}"#,
        r#"{"type":"number","literal":"1"}"#,
        r#"{"type":"number","literal":"2"}"#,
        r#"{"type":"number","literal":"3"}"#,
        r#"{"type":"rparen","literal":")"}"#,
    ];
    let mut lexer = Lexer::from_values(values.map(TokenValue::from))?;
    assert_eq!(kinds(&lexer), kinds(&Lexer::new("(list 1 2 3)")));
    assert_eq!(lexer.next_token(1)?, TokenValue::from(values[1]));
    Ok(())
}

#[test]
fn op_proc_from_external_sequence() -> LexResult<()> {
    let values = [r#"{"type":"op_proc","literal":"+"}"#, r#"{"type":"comma_at","literal":null}"#];
    let lexer = Lexer::from_values(values.map(TokenValue::from))?;
    assert_eq!(
        lexer.tokens(),
        [Token::new(TokenKind::OpProc, "+"), Token::nil(TokenKind::CommaAt)]
    );
    Ok(())
}
