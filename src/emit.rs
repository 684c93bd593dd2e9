//! Rendering of a path as a C/C++ initializer list of 3D vectors.

use std::io;

use log::trace;

use crate::error::Error;
use crate::CoordinatePair;

pub const DEFAULT_SCALE: f64 = 0.0028;
pub const DEFAULT_OFFSET: CoordinatePair = CoordinatePair { x: 0.0, y: 0.05 };

/// Scale and offset applied to every point when writing the initializer.
///
/// Each point becomes `{ x*scale + offset.x, y*scale + offset.x, 0.0 }`.
/// Note that the y coordinate is shifted by `offset.x` as well: `offset.y` is
/// accepted but currently unused. This matches the output existing consumers
/// were generated with, so it is kept as a known discrepancy.
///
/// Numbers use Rust's shortest round-trip formatting, so very small or large
/// values get an unpadded exponent (`2.8e-6f`, `2.8e17f`) rather than the
/// two-digit, signed form some generators print (`2.8e-06f`, `2.8e+17f`).
/// Both are valid C float literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Initializer {
    pub scale: f64,
    pub offset: CoordinatePair,
}

impl Default for Initializer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Initializer {
    pub fn new(scale: f64, offset: CoordinatePair) -> Self {
        Self { scale, offset }
    }

    fn entry(&self, point: &CoordinatePair) -> String {
        let x = point.x * self.scale + self.offset.x;
        let y = point.y * self.scale + self.offset.x;
        format!("  {{ {:?}f, {:?}f, 0.0f }}", x, y)
    }

    /// Render the initializer block, including the trailing newline.
    pub fn render(&self, points: &[CoordinatePair]) -> String {
        trace!("render: {} points", points.len());
        let entries: Vec<String> = points.iter().map(|p| self.entry(p)).collect();
        format!("{{\n{}\n}};\n", entries.join(",\n"))
    }

    /// Write the initializer block to `out`.
    pub fn write_to<W: io::Write>(&self, points: &[CoordinatePair], out: &mut W) -> Result<(), Error> {
        out.write_all(self.render(points).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
