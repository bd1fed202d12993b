//! Rendering: projects the document and selection onto a 2D surface.
//!
//! Rendering is split in two. [`scene`] is a pure function from
//! `(Document, selection)` to a display list of [`DrawOp`]s; it never mutates
//! anything and returns identical output for identical input. [`paint`] is the
//! only place that touches [`web_sys::CanvasRenderingContext2d`] and simply
//! replays a display list.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) converts them to
//! [`RenderError`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::EngineConfig;
use crate::consts::{SELECTION_DASH, SELECTION_LINE_WIDTH};
use crate::doc::{Document, Element, ElementId};
use crate::geom::{Bounds, Point};
use crate::hit;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("2d drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("canvas call failed: {0}")]
    Canvas(String),
}

impl From<JsValue> for RenderError {
    fn from(err: JsValue) -> Self {
        Self::Canvas(format!("{err:?}"))
    }
}

/// One drawing instruction, in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// An open polyline with round caps and joins. A single point draws a dot.
    Polyline { id: ElementId, points: Vec<Point>, color: String, width: f64 },
    /// A filled rectangle. Width and height keep their sign.
    FillRect { id: ElementId, x: f64, y: f64, width: f64, height: f64, fill: String },
    /// Dashed highlight around the selected element.
    SelectionOutline { id: ElementId, bounds: Bounds, color: String },
}

/// Build the display list for a document and selection.
///
/// Elements are emitted in document order. If `selected` names a live
/// element, its outline (bounds expanded by the configured margin) is the
/// last instruction. A selection id that no longer exists draws nothing.
#[must_use]
pub fn scene(doc: &Document, selected: Option<ElementId>, config: &EngineConfig) -> Vec<DrawOp> {
    let mut ops: Vec<DrawOp> = doc.elements().iter().map(element_op).collect();

    let outline = selected
        .and_then(|id| doc.get(id))
        .and_then(|el| hit::bounds(el).map(|b| (el.id(), b)));
    if let Some((id, b)) = outline {
        ops.push(DrawOp::SelectionOutline {
            id,
            bounds: b.expand(config.selection_margin),
            color: config.selection_color.clone(),
        });
    }

    ops
}

fn element_op(el: &Element) -> DrawOp {
    match el {
        Element::Stroke(s) => DrawOp::Polyline {
            id: s.id(),
            points: s.points().to_vec(),
            color: s.color.clone(),
            width: s.width,
        },
        Element::Shape(s) => DrawOp::FillRect {
            id: s.id(),
            x: s.x,
            y: s.y,
            width: s.width,
            height: s.height,
            fill: s.fill.clone(),
        },
    }
}

/// Replay a display list onto a 2D context.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(
    ctx: &CanvasRenderingContext2d,
    ops: &[DrawOp],
    background: &str,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(background);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    for op in ops {
        match op {
            DrawOp::Polyline { points, color, width, .. } => draw_polyline(ctx, points, color, *width),
            DrawOp::FillRect { x, y, width, height, fill, .. } => {
                ctx.set_fill_style_str(fill);
                ctx.fill_rect(*x, *y, *width, *height);
            }
            DrawOp::SelectionOutline { bounds, color, .. } => draw_selection(ctx, bounds, color)?,
        }
    }

    Ok(())
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, points: &[Point], color: &str, width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        // Zero-length segment so round caps leave a dot.
        ctx.line_to(first.x, first.y);
    }
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_selection(ctx: &CanvasRenderingContext2d, bounds: &Bounds, color: &str) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(SELECTION_LINE_WIDTH);
    let dash_array = js_sys::Array::new();
    dash_array.push(&SELECTION_DASH.into());
    dash_array.push(&SELECTION_DASH.into());
    ctx.set_line_dash(&dash_array)?;

    ctx.stroke_rect(bounds.min_x, bounds.min_y, bounds.width(), bounds.height());
    ctx.set_line_dash(&js_sys::Array::new())?;

    ctx.restore();
    Ok(())
}
