//! Identifier syntax, as a small DFA.
//!
//! ```text
//! <identifier> ::= <initial> <subsequent>*
//!                | <explicit sign>
//!                | <explicit sign> <sign subsequent> <subsequent>*
//!                | <explicit sign> . <dot subsequent> <subsequent>*
//!                | . <dot subsequent> <subsequent>*
//!                | .
//! ```
//!
//! `|...|` identifiers are not supported.

const INITIAL_SPECIALS: &[char] = &[
    '!', '$', '%', '&', '*', '/', ':', '<', '=', '>', '?', '^', '_', '~',
];
const EXPLICIT_SIGNS: &[char] = &['+', '-'];
const SUBSEQUENT_SPECIALS: &[char] = &['+', '-', '.', '@'];

fn is_initial(c: char) -> bool {
    c.is_ascii_alphabetic() || INITIAL_SPECIALS.contains(&c)
}

fn is_explicit_sign(c: char) -> bool {
    EXPLICIT_SIGNS.contains(&c)
}

fn is_subsequent(c: char) -> bool {
    is_initial(c) || c.is_ascii_digit() || SUBSEQUENT_SPECIALS.contains(&c)
}

fn is_sign_subsequent(c: char) -> bool {
    is_initial(c) || is_explicit_sign(c) || c == '@'
}

fn is_dot_subsequent(c: char) -> bool {
    is_sign_subsequent(c) || c == '.'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    /// Just read a leading `+` or `-`.
    AfterSign,
    /// Just read a `.` at the start, or right after a leading sign.
    AfterDot,
    /// In the run of subsequent characters that ends every longer identifier.
    Subsequent,
    Reject,
}

impl State {
    fn step(self, c: char) -> State {
        match self {
            State::Start if is_initial(c) => State::Subsequent,
            State::Start if is_explicit_sign(c) => State::AfterSign,
            State::Start if c == '.' => State::AfterDot,
            State::AfterSign if c == '.' => State::AfterDot,
            State::AfterSign if is_sign_subsequent(c) => State::Subsequent,
            State::AfterDot if is_dot_subsequent(c) => State::Subsequent,
            State::Subsequent if is_subsequent(c) => State::Subsequent,
            _ => State::Reject,
        }
    }

    fn accepts(self) -> bool {
        matches!(self, State::AfterSign | State::AfterDot | State::Subsequent)
    }
}

/// Whether `lexeme` is a legal identifier, peculiar identifiers (`+`, `...`, `->x`) included.
pub fn is_identifier(lexeme: &str) -> bool {
    let mut state = State::Start;
    for c in lexeme.chars() {
        state = state.step(c);
        if state == State::Reject {
            return false;
        }
    }
    state.accepts()
}
