//! Hit-testing: element bounding boxes and topmost-wins point queries.
//!
//! Everything here is read-only. Containment is tested against the
//! axis-aligned bounding box, not the drawn outline, so a click anywhere
//! inside a stroke's extent selects it.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{Document, Element, ElementId};
use crate::geom::{Bounds, Point};

/// Bounding box of an element.
///
/// Strokes span the min/max of their points. Shapes are normalized so a
/// negative width or height still yields non-negative extents. Returns
/// `None` only for a stroke with no points, which a `DocStore` never holds.
#[must_use]
pub fn bounds(el: &Element) -> Option<Bounds> {
    match el {
        Element::Stroke(s) => Bounds::from_points(s.points()),
        Element::Shape(s) => {
            let origin = s.origin();
            let corner = Point::new(s.x + s.width, s.y + s.height);
            Some(Bounds::from_corners(origin, corner))
        }
    }
}

/// The topmost element whose bounding box contains `pt`.
///
/// Later elements in document order win ties, matching paint order.
#[must_use]
pub fn hit_test(pt: Point, doc: &Document) -> Option<ElementId> {
    doc.elements()
        .iter()
        .rev()
        .find(|el| bounds(el).is_some_and(|b| b.contains(pt)))
        .map(Element::id)
}
