use crate::token::Token;

/// Failures while turning a token sequence into a path.
///
/// `at` is the index of the offending token in the sequence handed to the
/// interpreter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Format error: missing moveto")]
    MissingMoveTo,
    #[error("Format error: incomplete coordinate pair at token {at}")]
    IncompletePair { at: usize },
    #[error("Format error: unexpected token {token} at token {at}, expected a number")]
    UnexpectedToken { at: usize, token: Token },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("SVG parse error: {0}")]
    XmlParse(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
