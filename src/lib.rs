//! Convert a single SVG path into an ordered, origin-centered list of points,
//! e.g. for embedding the outline of a shape as literal coordinate data in a
//! C or C++ program.
//!
//! Only a small subset of the path mini-language is understood: a relative
//! `m` followed by any number of relative coordinate pairs and an optional
//! `z`. Curves, arcs, absolute commands and multiple subpaths are not
//! supported.
//!
//! The conversion runs in three stages:
//!
//! 1. [`token::tokenize`] splits the path expression into tokens,
//! 2. [`interpret::interpret`] turns the tokens into absolute points,
//! 3. [`normalize::center`] moves the bounding box center to the origin.
//!
//! [`emit::Initializer`] renders the result as an initializer list.
//!
//! You can optionally get serde 1 support by enabling the `serde` feature.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

use std::convert;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod emit;
pub mod error;
pub mod interpret;
pub mod normalize;
pub mod svg;
pub mod token;

pub use crate::emit::Initializer;
pub use crate::error::{Error, FormatError};

/// A `CoordinatePair` consists of an x and y coordinate.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinatePair {
    pub x: f64,
    pub y: f64,
}

impl CoordinatePair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl convert::From<(f64, f64)> for CoordinatePair {
    fn from(val: (f64, f64)) -> Self {
        Self { x: val.0, y: val.1 }
    }
}

/// A path is an ordered vector of `CoordinatePair` instances.
pub type Path = Vec<CoordinatePair>;

/// Convert a path expression (the value of a `d` attribute) into a centered
/// path.
pub fn parse_path_data(expr: &str) -> Result<Path, Error> {
    trace!("parse_path_data");
    let tokens = token::tokenize(expr);
    let path = interpret::interpret(&tokens)?;
    Ok(normalize::center(&path))
}

/// Parse an SVG document and convert the path of its shape into a centered
/// path.
///
/// See [`svg::find_path_data`] for how the path element is located.
pub fn parse(svg: &str) -> Result<Path, Error> {
    trace!("parse");
    let expr = svg::find_path_data(svg)?;
    trace!("parse: Path expression {:?}", expr);
    parse_path_data(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(pairs: &[(f64, f64)]) -> Path {
        pairs.iter().map(|&pair| pair.into()).collect()
    }

    #[test]
    fn test_parse_path_data_diamond() {
        let _ = env_logger::try_init();
        let result = parse_path_data("m0,0 -1,1 1,1 1,-1 z").unwrap();
        assert_eq!(
            result,
            points(&[(0., -1.), (-1., 0.), (0., 1.), (1., 0.), (0., -1.)])
        );
    }

    #[test]
    fn test_parse_path_data_centering() {
        let _ = env_logger::try_init();
        let result = parse_path_data("m 113.5,35.25 -73.125,0 -39.0625,14.5 40,-2.75 z").unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.first(), result.last());
        let bbox = normalize::bounding_box(&result);
        assert!((bbox.max.x + bbox.min.x).abs() < 1e-9);
        assert!((bbox.max.y + bbox.min.y).abs() < 1e-9);
    }

    #[test]
    fn test_parse_path_data_errors() {
        assert!(matches!(
            parse_path_data("10,20 1,1"),
            Err(Error::Format(FormatError::MissingMoveTo))
        ));
        assert!(matches!(
            parse_path_data("m0,0 -1"),
            Err(Error::Format(FormatError::IncompletePair { .. }))
        ));
        assert_eq!(
            parse_path_data("").unwrap_err().to_string(),
            "Format error: missing moveto"
        );
    }

    #[test]
    fn test_parse_simple_closed() {
        let _ = env_logger::try_init();
        let input = r#"
            <?xml version="1.0" encoding="UTF-8" standalone="no"?>
            <svg xmlns="http://www.w3.org/2000/svg" version="1.1">
                <g id="layer1">
                    <path d="m 10,10 10,5 -10,5 z" />
                </g>
            </svg>
        "#;
        let result = parse(input).unwrap();
        assert_eq!(
            result,
            points(&[(-5., -5.), (5., 0.), (-5., 5.), (-5., -5.)])
        );
    }

    #[test]
    fn test_parse_multiline_path_data() {
        let _ = env_logger::try_init();
        let input = r#"
            <svg xmlns="http://www.w3.org/2000/svg" version="1.1">
                <g>
                    <path d="m 0,0
                             -1,1
                             1,1
                             1,-1
                             z" />
                </g>
            </svg>
        "#;
        let result = parse(input).unwrap();
        assert_eq!(
            result,
            points(&[(0., -1.), (-1., 0.), (0., 1.), (1., 0.), (0., -1.)])
        );
    }

    #[test]
    fn test_parse_not_found() {
        let input = r#"
            <svg xmlns="http://www.w3.org/2000/svg" version="1.1">
                <path d="m 10,10 10,5 -10,5 z" />
            </svg>
        "#;
        let err = parse(input).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().starts_with("Not found"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let cp = CoordinatePair::new(10.0, 20.0);
        let cp_json = serde_json::to_string(&cp).unwrap();
        let cp2 = serde_json::from_str(&cp_json).unwrap();
        assert_eq!(cp, cp2);
    }
}
