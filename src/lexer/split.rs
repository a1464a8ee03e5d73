//! Splitting source text into lexemes.
//!
//! Lexemes are separated by whitespace, except inside a double-quoted string.
//! Before splitting, `(`, `)` and `'` are padded with spaces so they always
//! come out as lexemes of their own. `(` only gets a trailing space, so that
//! `#(` and `#\(` stay in one piece.

/// Where delimiter padding applies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterPadding {
    /// Pad only outside string literals.
    #[default]
    OutsideStrings,
    /// Pad every occurrence, including inside string literals.
    /// This rewrites the content of strings like `"a(b"`; kept for compatibility.
    Everywhere,
}

/// Tracks whether we're inside a string literal.
///
/// A backslash only escapes inside a string; an escaped quote does not end the string.
#[derive(Debug, Default)]
struct Quoting {
    in_string: bool,
    escaped: bool,
}

impl Quoting {
    fn step(&mut self, ch: char) {
        match ch {
            '\\' if self.in_string => self.escaped = !self.escaped,
            '"' => {
                if !self.escaped {
                    self.in_string = !self.in_string;
                }
                self.escaped = false;
            }
            _ => self.escaped = false,
        }
    }
}

fn padding_for(ch: char) -> Option<&'static str> {
    match ch {
        '(' => Some("( "),
        ')' => Some(" ) "),
        '\'' => Some(" ' "),
        _ => None,
    }
}

/// Surround the delimiter characters with spaces.
pub fn pad_delimiters(source: &str, padding: DelimiterPadding) -> String {
    let mut padded = String::with_capacity(source.len() + source.len() / 4);
    let mut quoting = Quoting::default();
    for ch in source.chars() {
        let outside = padding == DelimiterPadding::Everywhere || !quoting.in_string;
        match padding_for(ch) {
            Some(pad) if outside => padded.push_str(pad),
            _ => padded.push(ch),
        }
        quoting.step(ch);
    }
    padded
}

/// Split already-padded text on whitespace outside of string literals.
///
/// Runs of whitespace separate lexemes; no empty lexemes are produced.
/// An unterminated string runs to the end of the input.
pub fn split(text: &str) -> Vec<String> {
    let mut lexemes = Vec::new();
    let mut slice = String::new();
    let mut quoting = Quoting::default();
    let mut after_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() && !quoting.in_string {
            if !after_space && !slice.is_empty() {
                lexemes.push(std::mem::take(&mut slice));
            }
            after_space = true;
            continue;
        }
        after_space = false;
        quoting.step(ch);
        slice.push(ch);
    }
    if !slice.is_empty() {
        lexemes.push(slice);
    }
    lexemes
}

/// Pad and split `source` into lexemes.
pub fn lexemes(source: &str, padding: DelimiterPadding) -> Vec<String> {
    split(&pad_delimiters(source, padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<String> {
        lexemes(source, DelimiterPadding::default())
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(lex("  foo \t\n bar   baz  "), ["foo", "bar", "baz"]);
        assert!(lex("").is_empty());
        assert!(lex(" \n\t ").is_empty());
    }

    #[test]
    fn delimiters_stand_alone() {
        assert_eq!(
            lex("(lambda (x y) (+ x y))"),
            ["(", "lambda", "(", "x", "y", ")", "(", "+", "x", "y", ")", ")"]
        );
        assert_eq!(lex("'(a)"), ["'", "(", "a", ")"]);
    }

    #[test]
    fn open_paren_prefixes_survive() {
        assert_eq!(lex("#(1 2)"), ["#(", "1", "2", ")"]);
        assert_eq!(lex("#\\( x"), ["#\\(", "x"]);
    }

    #[test]
    fn strings_keep_their_whitespace() {
        assert_eq!(
            lex(r#"(display "hello,  world")"#),
            ["(", "display", r#""hello,  world""#, ")"]
        );
        assert_eq!(lex("\"a\nb\" c"), ["\"a\nb\"", "c"]);
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        assert_eq!(
            lex(r#""say \"hi there\"" next"#),
            [r#""say \"hi there\"""#, "next"]
        );
        // An escaped backslash does not escape the quote after it.
        assert_eq!(lex(r#""a\\" b"#), [r#""a\\""#, "b"]);
    }

    #[test]
    fn padding_modes() {
        assert_eq!(lex(r#""a(b" c"#), [r#""a(b""#, "c"]);
        assert_eq!(
            lexemes(r#""a(b)" c"#, DelimiterPadding::Everywhere),
            [r#""a( b ) ""#, "c"]
        );
        assert_eq!(lex(r#""it's""#), [r#""it's""#]);
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        assert_eq!(lex(r#"foo "bar baz"#), ["foo", r#""bar baz"#]);
    }
}
