#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Ids
// =============================================================

#[test]
fn ids_are_issued_in_increasing_order() {
    let mut store = DocStore::new();
    let a = store.append_stroke(pt(0.0, 0.0), "#000", 2.0);
    let b = store.append_shape(pt(1.0, 1.0), "#f00");
    let c = store.append_stroke(pt(2.0, 2.0), "#000", 2.0);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn ids_are_not_reused_after_remove() {
    let mut store = DocStore::new();
    let a = store.append_shape(pt(0.0, 0.0), "#f00");
    store.remove(a);
    let b = store.append_shape(pt(0.0, 0.0), "#f00");
    assert_ne!(a, b);
}

#[test]
fn ids_are_not_reused_after_restoring_older_document() {
    let mut store = DocStore::new();
    let empty = store.document().clone();
    let a = store.append_shape(pt(0.0, 0.0), "#f00");
    store.restore(empty);
    let b = store.append_shape(pt(0.0, 0.0), "#f00");
    assert_ne!(a, b);
}

#[test]
fn restore_bumps_counter_past_restored_ids() {
    let mut source = DocStore::new();
    for _ in 0..5 {
        source.append_shape(pt(0.0, 0.0), "#f00");
    }
    let mut store = DocStore::new();
    store.restore(source.document().clone());
    let fresh = store.append_shape(pt(0.0, 0.0), "#f00");
    assert!(source.document().elements().iter().all(|e| e.id() != fresh));
}

#[test]
fn element_id_display() {
    let mut store = DocStore::new();
    let id = store.append_shape(pt(0.0, 0.0), "#f00");
    assert_eq!(id.to_string(), "#1");
    assert_eq!(id.get(), 1);
}

// =============================================================
// Append
// =============================================================

#[test]
fn append_places_element_on_top() {
    let mut store = DocStore::new();
    let a = store.append_shape(pt(0.0, 0.0), "#f00");
    let b = store.append_stroke(pt(5.0, 5.0), "#000", 2.0);
    let ids: Vec<_> = store.document().elements().iter().map(Element::id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn append_stroke_has_single_point() {
    let mut store = DocStore::new();
    let id = store.append_stroke(pt(3.0, 4.0), "#123", 5.0);
    let Some(Element::Stroke(s)) = store.get(id) else {
        panic!("expected stroke");
    };
    assert_eq!(s.points(), &[pt(3.0, 4.0)]);
    assert_eq!(s.color, "#123");
    assert_eq!(s.width, 5.0);
}

#[test]
fn append_shape_has_zero_size() {
    let mut store = DocStore::new();
    let id = store.append_shape(pt(10.0, 10.0), "#abc");
    let Some(Element::Shape(s)) = store.get(id) else {
        panic!("expected shape");
    };
    assert_eq!(s.origin(), pt(10.0, 10.0));
    assert_eq!(s.width, 0.0);
    assert_eq!(s.height, 0.0);
    assert_eq!(s.fill, "#abc");
}

// =============================================================
// Update / remove
// =============================================================

#[test]
fn update_missing_id_is_noop() {
    let mut store = DocStore::new();
    let id = store.append_shape(pt(0.0, 0.0), "#f00");
    store.remove(id);
    let mut called = false;
    assert!(!store.update(id, |_| called = true));
    assert!(!called);
}

#[test]
fn update_applies_closure() {
    let mut store = DocStore::new();
    let id = store.append_stroke(pt(0.0, 0.0), "#000", 2.0);
    assert!(store.update(id, |el| {
        if let Element::Stroke(s) = el {
            s.push_point(Point::new(1.0, 1.0));
        }
    }));
    let Some(Element::Stroke(s)) = store.get(id) else {
        panic!("expected stroke");
    };
    assert_eq!(s.points().len(), 2);
}

#[test]
fn remove_missing_id_is_noop() {
    let mut store = DocStore::new();
    let a = store.append_shape(pt(0.0, 0.0), "#f00");
    store.remove(a);
    assert!(store.remove(a).is_none());
    assert!(store.is_empty());
}

#[test]
fn remove_keeps_remaining_order() {
    let mut store = DocStore::new();
    let a = store.append_shape(pt(0.0, 0.0), "#f00");
    let b = store.append_shape(pt(0.0, 0.0), "#0f0");
    let c = store.append_shape(pt(0.0, 0.0), "#00f");
    assert_eq!(store.remove(b).map(|e| e.id()), Some(b));
    let ids: Vec<_> = store.document().elements().iter().map(Element::id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn clear_empties_store() {
    let mut store = DocStore::new();
    store.append_shape(pt(0.0, 0.0), "#f00");
    store.append_stroke(pt(0.0, 0.0), "#000", 1.0);
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

// =============================================================
// Element behavior
// =============================================================

#[test]
fn translate_stroke_moves_every_point() {
    let mut store = DocStore::new();
    let id = store.append_stroke(pt(0.0, 0.0), "#000", 2.0);
    store.update(id, |el| {
        if let Element::Stroke(s) = el {
            s.push_point(pt(10.0, 5.0));
        }
        el.translate(pt(3.0, -2.0));
    });
    let Some(Element::Stroke(s)) = store.get(id) else {
        panic!("expected stroke");
    };
    assert_eq!(s.points(), &[pt(3.0, -2.0), pt(13.0, 3.0)]);
}

#[test]
fn translate_shape_keeps_size() {
    let mut store = DocStore::new();
    let id = store.append_shape(pt(10.0, 10.0), "#f00");
    store.update(id, |el| {
        if let Element::Shape(s) = el {
            s.width = 40.0;
            s.height = 30.0;
        }
        el.translate(pt(10.0, -5.0));
    });
    let Some(Element::Shape(s)) = store.get(id) else {
        panic!("expected shape");
    };
    assert_eq!(s.origin(), pt(20.0, 5.0));
    assert_eq!(s.width, 40.0);
    assert_eq!(s.height, 30.0);
}

#[test]
fn set_color_targets_stroke_color_and_shape_fill() {
    let mut store = DocStore::new();
    let a = store.append_stroke(pt(0.0, 0.0), "#000", 2.0);
    let b = store.append_shape(pt(0.0, 0.0), "#000");
    store.update(a, |el| el.set_color("#f00"));
    store.update(b, |el| el.set_color("#0f0"));
    assert_eq!(store.get(a).map(Element::color), Some("#f00"));
    assert_eq!(store.get(b).map(Element::color), Some("#0f0"));
}

// =============================================================
// Snapshots
// =============================================================

#[test]
fn cloned_document_is_independent_of_live_store() {
    let mut store = DocStore::new();
    let id = store.append_shape(pt(0.0, 0.0), "#f00");
    let snapshot = store.document().clone();
    store.update(id, |el| el.translate(pt(50.0, 50.0)));
    let Some(Element::Shape(s)) = snapshot.get(id) else {
        panic!("expected shape");
    };
    assert_eq!(s.origin(), pt(0.0, 0.0));
}

#[test]
fn element_serializes_with_kind_tag() {
    let mut store = DocStore::new();
    store.append_shape(pt(1.0, 2.0), "#f00");
    let json = serde_json::to_value(store.document()).unwrap();
    let first = &json["elements"][0];
    assert_eq!(first["kind"], "shape");
    assert_eq!(first["id"], 1);
    assert_eq!(first["fill"], "#f00");
}
