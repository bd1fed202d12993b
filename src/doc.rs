//! Document model: sketch elements, the document value, and the owning store.
//!
//! This module defines what is on the canvas (`Element` and its two variants,
//! `Stroke` and `Shape`), the ordered `Document` value that history snapshots
//! are taken of, and the runtime store (`DocStore`) that owns the live
//! document together with its id generator.
//!
//! Document order is paint order: later elements draw on top of earlier ones.
//! Elements are appended at the end and only ever leave through an explicit
//! remove or clear. All mutation goes through `DocStore`, which never hands
//! out `&mut Document`, so a stored snapshot cannot be edited through the
//! live store.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::Serialize;

use crate::geom::Point;

/// Unique identifier for an element, issued by a [`DocStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// The raw numeric value, for hosts that key UI state by id.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A freehand stroke: an ordered, never-empty polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    id: ElementId,
    points: Vec<Point>,
    /// Stroke color as a CSS color string.
    pub color: String,
    /// Line width in canvas units. Always positive.
    pub width: f64,
}

impl Stroke {
    pub(crate) fn new(id: ElementId, start: Point, color: String, width: f64) -> Self {
        Self { id, points: vec![start], color, width }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Points in drawing order. Never empty.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn push_point(&mut self, pt: Point) {
        self.points.push(pt);
    }
}

/// An axis-aligned rectangle.
///
/// `width` and `height` are signed: a negative value extends the rectangle
/// left/up from the origin, which is what a drag up-and-left produces while
/// the shape is being drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color as a CSS color string.
    pub fill: String,
}

impl Shape {
    pub(crate) fn new(id: ElementId, origin: Point, fill: String) -> Self {
        Self { id, x: origin.x, y: origin.y, width: 0.0, height: 0.0, fill }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One drawable unit in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Stroke(Stroke),
    Shape(Shape),
}

impl Element {
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Stroke(s) => s.id,
            Self::Shape(s) => s.id,
        }
    }

    /// The element's color: stroke color or shape fill.
    #[must_use]
    pub fn color(&self) -> &str {
        match self {
            Self::Stroke(s) => &s.color,
            Self::Shape(s) => &s.fill,
        }
    }

    pub(crate) fn set_color(&mut self, color: &str) {
        match self {
            Self::Stroke(s) => color.clone_into(&mut s.color),
            Self::Shape(s) => color.clone_into(&mut s.fill),
        }
    }

    /// Move every point of a stroke, or the origin of a shape, by `delta`.
    pub(crate) fn translate(&mut self, delta: Point) {
        match self {
            Self::Stroke(s) => {
                for p in &mut s.points {
                    *p = *p + delta;
                }
            }
            Self::Shape(s) => {
                s.x += delta.x;
                s.y += delta.y;
            }
        }
    }
}

/// An ordered sequence of elements. Order is z-order, bottom first.
///
/// `Document` is a plain value: cloning it produces an independent deep copy,
/// which is exactly what history snapshots store.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Owner of the live document and its id generator.
///
/// Ids come from a per-store counter that only moves forward. Restoring an
/// older document (undo) does not rewind it, so an id is never issued twice
/// even when the element that carried it has been undone away.
pub struct DocStore {
    doc: Document,
    next_id: u64,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { doc: Document::default(), next_id: 1 }
    }

    /// Read-only view of the live document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.doc.get(id)
    }

    fn issue_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a one-point stroke at the top of the z-order.
    pub fn append_stroke(&mut self, start: Point, color: &str, width: f64) -> ElementId {
        let id = self.issue_id();
        self.doc.elements.push(Element::Stroke(Stroke::new(id, start, color.to_owned(), width)));
        id
    }

    /// Append a zero-size shape at the top of the z-order.
    pub fn append_shape(&mut self, origin: Point, fill: &str) -> ElementId {
        let id = self.issue_id();
        self.doc.elements.push(Element::Shape(Shape::new(id, origin, fill.to_owned())));
        id
    }

    /// Apply `f` to the element with `id`. Returns false, without calling
    /// `f`, if no such element exists.
    pub fn update<F>(&mut self, id: ElementId, f: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        let Some(el) = self.doc.elements.iter_mut().find(|e| e.id() == id) else {
            return false;
        };
        f(el);
        true
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let idx = self.doc.elements.iter().position(|e| e.id() == id)?;
        Some(self.doc.elements.remove(idx))
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.doc.elements.clear();
    }

    /// Replace the live document with `doc`, typically a history snapshot.
    ///
    /// The id counter is bumped past every id in `doc` so that later appends
    /// can never collide with a restored element.
    pub fn restore(&mut self, doc: Document) {
        if let Some(max) = doc.elements.iter().map(|e| e.id().0).max() {
            self.next_id = self.next_id.max(max + 1);
        }
        self.doc = doc;
    }

    /// Number of elements currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doc.len()
    }

    /// Returns `true` if the store contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
