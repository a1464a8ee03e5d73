//! Tokenize Scheme source from stdin and print one token per line.
//!
//! The optional argument picks the output form: `record` (the default, as CSV rows),
//! `mapping`, or `json`.
//!
//! ```ignore
//! <input.scm scheme_tokens json
//! ```
//!
//! Set `RUST_LOG=schemelex=trace` for lexer logging on stderr.

use std::io::{Read, Write};

use schemelex::{Lexer, LexerConfig, Representation, TokenValue};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let representation: Representation = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => Representation::Record,
    };

    let mut source = String::new();
    std::io::stdin().lock().read_to_string(&mut source)?;

    let config = LexerConfig::default().representation(representation);
    let mut lexer = Lexer::with_config(&source, config);
    let mut stdout = std::io::stdout().lock();
    while lexer.peek_token(0).is_ok() {
        match lexer.next_token(0)? {
            TokenValue::Record(token) => writeln!(stdout, "{}", token.to_csv())?,
            TokenValue::Mapping(map) => {
                let fields: Vec<String> = map.iter().map(|(k, v)| format!("{k}={v}")).collect();
                writeln!(stdout, "{}", fields.join(" "))?
            }
            TokenValue::JsonText(text) => writeln!(stdout, "{text}")?,
        }
    }
    Ok(())
}
