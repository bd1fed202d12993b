#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::DocStore;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn add_rect(store: &mut DocStore, x: f64, y: f64, w: f64, h: f64) -> ElementId {
    let id = store.append_shape(pt(x, y), "#f00");
    store.update(id, |el| {
        if let Element::Shape(s) = el {
            s.width = w;
            s.height = h;
        }
    });
    id
}

fn add_stroke(store: &mut DocStore, points: &[Point]) -> ElementId {
    let id = store.append_stroke(points[0], "#000", 2.0);
    store.update(id, |el| {
        if let Element::Stroke(s) = el {
            for p in &points[1..] {
                s.push_point(*p);
            }
        }
    });
    id
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn shape_bounds_positive_extent() {
    let mut store = DocStore::new();
    let id = add_rect(&mut store, 10.0, 10.0, 40.0, 30.0);
    let b = bounds(store.get(id).unwrap()).unwrap();
    assert_eq!(b, Bounds { min_x: 10.0, min_y: 10.0, max_x: 50.0, max_y: 40.0 });
}

#[test]
fn shape_bounds_negative_extent_is_normalized() {
    let mut store = DocStore::new();
    let id = add_rect(&mut store, 50.0, 40.0, -40.0, -30.0);
    let b = bounds(store.get(id).unwrap()).unwrap();
    assert_eq!(b, Bounds { min_x: 10.0, min_y: 10.0, max_x: 50.0, max_y: 40.0 });
    assert!(b.width() >= 0.0);
    assert!(b.height() >= 0.0);
}

#[test]
fn shape_bounds_zero_size_is_a_point() {
    let mut store = DocStore::new();
    let id = add_rect(&mut store, 5.0, 5.0, 0.0, 0.0);
    let b = bounds(store.get(id).unwrap()).unwrap();
    assert_eq!(b.width(), 0.0);
    assert_eq!(b.height(), 0.0);
}

#[test]
fn stroke_bounds_span_points() {
    let mut store = DocStore::new();
    let id = add_stroke(&mut store, &[pt(5.0, 5.0), pt(20.0, -3.0), pt(12.0, 9.0)]);
    let b = bounds(store.get(id).unwrap()).unwrap();
    assert_eq!(b, Bounds { min_x: 5.0, min_y: -3.0, max_x: 20.0, max_y: 9.0 });
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_document_hits_nothing() {
    let store = DocStore::new();
    assert!(hit_test(pt(0.0, 0.0), store.document()).is_none());
}

#[test]
fn miss_returns_none() {
    let mut store = DocStore::new();
    add_rect(&mut store, 10.0, 10.0, 40.0, 30.0);
    assert!(hit_test(pt(100.0, 100.0), store.document()).is_none());
}

#[test]
fn hit_inside_shape() {
    let mut store = DocStore::new();
    let id = add_rect(&mut store, 10.0, 10.0, 40.0, 30.0);
    assert_eq!(hit_test(pt(30.0, 25.0), store.document()), Some(id));
}

#[test]
fn hit_on_shape_edge() {
    let mut store = DocStore::new();
    let id = add_rect(&mut store, 10.0, 10.0, 40.0, 30.0);
    assert_eq!(hit_test(pt(50.0, 40.0), store.document()), Some(id));
}

#[test]
fn hit_inside_negative_shape() {
    let mut store = DocStore::new();
    let id = add_rect(&mut store, 50.0, 40.0, -40.0, -30.0);
    assert_eq!(hit_test(pt(30.0, 25.0), store.document()), Some(id));
}

#[test]
fn overlapping_shapes_topmost_wins() {
    let mut store = DocStore::new();
    let _a = add_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    let b = add_rect(&mut store, 50.0, 50.0, 100.0, 100.0);
    assert_eq!(hit_test(pt(75.0, 75.0), store.document()), Some(b));
}

#[test]
fn lower_shape_hit_outside_overlap() {
    let mut store = DocStore::new();
    let a = add_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    let _b = add_rect(&mut store, 50.0, 50.0, 100.0, 100.0);
    assert_eq!(hit_test(pt(10.0, 10.0), store.document()), Some(a));
}

#[test]
fn stroke_hit_inside_bounding_box() {
    let mut store = DocStore::new();
    let id = add_stroke(&mut store, &[pt(0.0, 0.0), pt(20.0, 20.0)]);
    // Off the drawn line but inside the box.
    assert_eq!(hit_test(pt(18.0, 2.0), store.document()), Some(id));
}

#[test]
fn stroke_over_shape_wins() {
    let mut store = DocStore::new();
    let _shape = add_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    let stroke = add_stroke(&mut store, &[pt(10.0, 10.0), pt(30.0, 30.0)]);
    assert_eq!(hit_test(pt(20.0, 20.0), store.document()), Some(stroke));
}
