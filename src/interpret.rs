//! Interpretation of a token sequence into absolute points.

use log::trace;

use crate::error::FormatError;
use crate::token::{Command, Token};
use crate::{CoordinatePair, Path};

/// Read position in an immutable token slice.
///
/// Tokens are never removed, so after a failure the full sequence and the
/// failing index are still available for diagnostics.
#[derive(Debug)]
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume one number token.
    fn number(&mut self) -> Result<f64, FormatError> {
        let at = self.pos;
        match self.peek() {
            Some(Token::Number(n)) => {
                self.pos += 1;
                Ok(*n)
            }
            None | Some(Token::Command(Command::ClosePath)) => {
                Err(FormatError::IncompletePair { at })
            }
            Some(other) => Err(FormatError::UnexpectedToken {
                at,
                token: other.clone(),
            }),
        }
    }

    /// Consume two number tokens.
    fn pair(&mut self) -> Result<CoordinatePair, FormatError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(CoordinatePair::new(x, y))
    }
}

/// Build a path from a token sequence.
///
/// The sequence must start with `m` followed by an absolute point. Every
/// following pair is an offset from the previous point. A `z` appends a copy
/// of the first point and ends the path; anything after it is ignored.
pub fn interpret(tokens: &[Token]) -> Result<Path, FormatError> {
    trace!("interpret");
    let mut cursor = Cursor::new(tokens);

    match cursor.advance() {
        Some(token) if token.is_command(Command::MoveTo) => {}
        _ => return Err(FormatError::MissingMoveTo),
    }

    let first = cursor.pair()?;
    let mut path: Path = vec![first];
    let mut last = first;

    while let Some(token) = cursor.peek() {
        if token.is_command(Command::ClosePath) {
            trace!("interpret: ClosePath at token {}", cursor.pos);
            path.push(first);
            break;
        }
        let delta = cursor.pair()?;
        last = CoordinatePair::new(last.x + delta.x, last.y + delta.y);
        path.push(last);
    }

    trace!("interpret: {} points", path.len());
    Ok(path)
}
