//! Tokenizer for the `m` / `z` subset of the SVG path mini-language.
//!
//! Splitting and classification are two separate passes: the string is first
//! cut into raw substrings, then each substring is classified by its leading
//! character.

use std::fmt;

use log::trace;

/// A path command recognised by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `m`, sets the first absolute point.
    MoveTo,
    /// `z`, returns to the first point.
    ClosePath,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Command(Command),
    Number(f64),
    /// Raw text that is neither a known command nor a valid number.
    Other(String),
}

impl Token {
    pub fn is_command(&self, command: Command) -> bool {
        matches!(self, Token::Command(c) if *c == command)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Command(Command::MoveTo) => f.write_str("m"),
            Token::Command(Command::ClosePath) => f.write_str("z"),
            Token::Number(n) => write!(f, "{}", n),
            Token::Other(s) => f.write_str(s),
        }
    }
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == ','
}

/// Cut a path expression into raw token substrings.
fn split(expr: &str) -> Vec<&str> {
    let mut raw = Vec::new();
    // Byte offset where the current token starts, if one is being buffered.
    let mut start: Option<usize> = None;
    let mut last_alpha = false;

    for (idx, c) in expr.char_indices() {
        let alpha = c.is_alphabetic();
        let boundary = is_separator(c) || c == '-' || (start.is_some() && alpha != last_alpha);
        if boundary {
            if let Some(s) = start.take() {
                raw.push(&expr[s..idx]);
            }
        }
        if !is_separator(c) && start.is_none() {
            start = Some(idx);
        }
        last_alpha = alpha;
    }
    if let Some(s) = start {
        raw.push(&expr[s..]);
    }
    raw
}

/// Classify a single raw substring.
fn classify(raw: &str) -> Token {
    match raw.chars().next() {
        Some(c) if c.is_alphabetic() => match raw {
            "m" => Token::Command(Command::MoveTo),
            "z" => Token::Command(Command::ClosePath),
            _ => Token::Other(raw.to_string()),
        },
        _ => match raw.parse::<svgtypes::Number>() {
            Ok(n) => Token::Number(n.0),
            Err(_) => Token::Other(raw.to_string()),
        },
    }
}

/// Turn a path expression into an ordered token sequence.
///
/// Spaces and commas separate tokens, a minus sign always starts a new token
/// and a token ends wherever letters and non-letters meet. Unknown tokens are
/// passed through as [`Token::Other`].
pub fn tokenize(expr: &str) -> Vec<Token> {
    trace!("tokenize");
    let tokens: Vec<Token> = split(expr).into_iter().map(classify).collect();
    trace!("tokenize: {} tokens", tokens.len());
    tokens
}
