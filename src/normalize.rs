//! Centering of a path around the origin.

use log::trace;
use lyon_geom::euclid::default::{Box2D, Point2D, Vector2D};

use crate::{CoordinatePair, Path};

/// Axis-aligned bounding box of all points.
///
/// An empty slice yields a zero-sized box at the origin.
pub fn bounding_box(points: &[CoordinatePair]) -> Box2D<f64> {
    Box2D::from_points(points.iter().map(|p| Point2D::new(p.x, p.y)))
}

/// Translate a path so that the center of its bounding box lies at the origin.
///
/// Returns a new path with the same length and order. Callers are expected to
/// pass a non-empty path; an empty one simply yields an empty path.
pub fn center(points: &[CoordinatePair]) -> Path {
    trace!("center");
    let bbox = bounding_box(points);
    let offset = Vector2D::new(
        -((bbox.max.x - bbox.min.x) / 2.0 + bbox.min.x),
        -((bbox.max.y - bbox.min.y) / 2.0 + bbox.min.y),
    );
    trace!("center: offset ({}, {})", offset.x, offset.y);

    points
        .iter()
        .map(|p| CoordinatePair::new(p.x + offset.x, p.y + offset.y))
        .collect()
}
