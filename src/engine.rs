//! Engine: the gesture interpreter and command surface of the sketch canvas.
//!
//! DESIGN
//! ======
//! `EngineCore` owns the document store, the history, the UI state and the
//! active gesture. Every host input (pointer, keyboard, toolbar command) goes
//! through one of its methods, runs to completion synchronously, and returns
//! the list of [`Action`]s the host should react to. The host never gets
//! mutable access to the document, so every committed state passes through
//! [`History::snapshot`].
//!
//! Pointer-move mutates the live document directly; history is only touched
//! when a gesture completes (pointer-up or pointer-leave) or when a command
//! such as clear or delete runs. Every completed gesture takes a snapshot,
//! even one that left the document as it was (a click-select), so any
//! completed gesture after an undo discards the redo stack. A gesture that
//! never completes is visible but uncommitted, and is folded into the next
//! commit.
//!
//! `Engine` wraps `EngineCore` together with the browser canvas element so
//! the core can be tested without WASM/browser dependencies.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EngineConfig;
use crate::doc::{DocStore, Document, Element, ElementId};
use crate::geom::Point;
use crate::history::History;
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState};
use crate::render::{self, DrawOp, RenderError};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Document or selection changed; repaint.
    RenderNeeded,
    /// A new element was appended by a draw or shape gesture.
    ElementCreated(ElementId),
    /// An element was removed by delete-selected.
    ElementDeleted(ElementId),
    /// The selection changed to the given id (or to nothing).
    SelectionChanged(Option<ElementId>),
    /// History moved; refresh undo/redo controls.
    HistoryChanged { can_undo: bool, can_redo: bool },
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    store: DocStore,
    history: History,
    ui: UiState,
    input: InputState,
    config: EngineConfig,
    viewport_width: f64,
    viewport_height: f64,
    dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an empty document and the given defaults.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let store = DocStore::new();
        let history = History::new(store.document().clone(), config.history_limit);
        let ui = UiState { color: config.color.clone(), stroke_width: config.stroke_width, ..UiState::default() };
        Self {
            store,
            history,
            ui,
            input: InputState::Idle,
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Tool / style ---

    /// Switch tools. An active gesture is finalized first.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_gesture(&mut actions);
        self.ui.tool = tool;
        actions
    }

    /// Switch tools by host-side name (`"draw"`, `"shape"`, `"select"`).
    /// Unknown names are ignored.
    pub fn set_tool_named(&mut self, name: &str) -> Vec<Action> {
        let Some(tool) = Tool::from_name(name) else {
            tracing::debug!(name, "unknown tool name ignored");
            return Vec::new();
        };
        self.set_tool(tool)
    }

    /// Color for elements created from now on. Existing elements keep theirs.
    pub fn set_color(&mut self, color: &str) {
        color.clone_into(&mut self.ui.color);
    }

    /// Width for strokes created from now on. Non-positive or non-finite
    /// widths are ignored; returns whether the width was accepted.
    pub fn set_stroke_width(&mut self, width: f64) -> bool {
        if !(width.is_finite() && width > 0.0) {
            return false;
        }
        self.ui.stroke_width = width;
        true
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Pointer input ---

    /// Begin a gesture according to the active tool.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        let mut actions = Vec::new();
        if button != Button::Primary {
            return actions;
        }
        // Events are serialized per gesture, but a lost pointer-up must not
        // leave the previous gesture dangling.
        self.finish_gesture(&mut actions);

        match self.ui.tool {
            Tool::Draw => {
                let id = self.store.append_stroke(pt, &self.ui.color, self.ui.stroke_width);
                self.input = InputState::DrawingStroke { id };
                tracing::debug!(%id, x = pt.x, y = pt.y, "stroke started");
                actions.push(Action::ElementCreated(id));
                actions.push(Action::RenderNeeded);
            }
            Tool::Shape => {
                let id = self.store.append_shape(pt, &self.ui.color);
                self.input = InputState::DrawingShape { id, anchor: pt };
                tracing::debug!(%id, x = pt.x, y = pt.y, "shape started");
                actions.push(Action::ElementCreated(id));
                actions.push(Action::RenderNeeded);
            }
            Tool::Select => self.begin_select(pt, &mut actions),
        }
        actions
    }

    fn begin_select(&mut self, pt: Point, actions: &mut Vec<Action>) {
        let hit = crate::hit::hit_test(pt, self.store.document());
        self.set_selection(hit, actions);

        let Some(id) = hit else {
            return;
        };
        let Some(orig) = self.store.get(id).map(element_origin) else {
            return;
        };
        self.input = InputState::Dragging { id, start: pt, last: pt, orig };
        tracing::debug!(%id, x = pt.x, y = pt.y, "drag started");
    }

    /// Continue the active gesture. Hover moves with no gesture do nothing.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => return Vec::new(),
            InputState::DrawingStroke { id } => {
                self.store.update(id, |el| {
                    if let Element::Stroke(s) = el {
                        s.push_point(pt);
                    }
                });
            }
            InputState::DrawingShape { id, anchor } => {
                self.store.update(id, |el| {
                    if let Element::Shape(s) = el {
                        s.width = pt.x - anchor.x;
                        s.height = pt.y - anchor.y;
                    }
                });
            }
            InputState::Dragging { id, start, last, orig } => {
                let delta = pt - last;
                self.store.update(id, |el| el.translate(delta));
                self.input = InputState::Dragging { id, start, last: pt, orig };
            }
        }
        tracing::trace!(x = pt.x, y = pt.y, "gesture moved");
        vec![Action::RenderNeeded]
    }

    /// Complete the active gesture and commit it to history.
    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        let mut actions = Vec::new();
        if button != Button::Primary {
            return actions;
        }
        tracing::trace!(x = pt.x, y = pt.y, "pointer up");
        self.finish_gesture(&mut actions);
        actions
    }

    /// The pointer left the canvas. Finalizes like pointer-up rather than
    /// aborting, so in-progress work is kept.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_gesture(&mut actions);
        actions
    }

    // --- Keyboard ---

    /// Keyboard shortcuts: Delete/Backspace, Escape, Ctrl/Cmd+Z, Ctrl/Cmd+Shift+Z, Ctrl/Cmd+Y.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selected(),
            "Escape" => {
                let mut actions = Vec::new();
                self.set_selection(None, &mut actions);
                actions
            }
            "z" | "Z" if modifiers.command() && modifiers.shift => self.redo(),
            "z" | "Z" if modifiers.command() => self.undo(),
            "y" | "Y" if modifiers.command() => self.redo(),
            _ => Vec::new(),
        }
    }

    // --- Commands ---

    /// Restore the previous snapshot. No-op at the history floor.
    pub fn undo(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_gesture(&mut actions);
        if !self.history.can_undo() {
            return actions;
        }
        let doc = self.history.undo().clone();
        tracing::debug!(depth = self.history.undo_depth(), "undo");
        self.restore(doc, &mut actions);
        actions
    }

    /// Re-apply the most recently undone snapshot. No-op with nothing to redo.
    pub fn redo(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_gesture(&mut actions);
        if !self.history.can_redo() {
            return actions;
        }
        let doc = self.history.redo().clone();
        tracing::debug!(depth = self.history.undo_depth(), "redo");
        self.restore(doc, &mut actions);
        actions
    }

    /// Remove every element. Recorded in history, so it can be undone.
    pub fn clear(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_gesture(&mut actions);
        let removed = self.store.len();
        self.store.clear();
        self.set_selection(None, &mut actions);
        tracing::info!(removed, "document cleared");
        self.commit(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove the selected element. No-op with nothing selected.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_gesture(&mut actions);
        let Some(id) = self.ui.selected_id else {
            return actions;
        };
        if self.store.remove(id).is_some() {
            tracing::debug!(%id, "element deleted");
            actions.push(Action::ElementDeleted(id));
        }
        self.set_selection(None, &mut actions);
        self.commit(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Recolor the selected element (stroke color or shape fill) and commit.
    /// No-op with nothing selected.
    pub fn set_selected_color(&mut self, color: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_gesture(&mut actions);
        let Some(id) = self.ui.selected_id else {
            return actions;
        };
        if self.store.update(id, |el| el.set_color(color)) {
            self.commit(&mut actions);
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Internals ---

    /// Return to idle and commit if a gesture was in progress.
    fn finish_gesture(&mut self, actions: &mut Vec<Action>) {
        let finished = std::mem::take(&mut self.input);
        if let Some(id) = finished.target() {
            tracing::debug!(%id, "gesture finished");
            self.commit(actions);
        }
    }

    /// Snapshot the live document. This discards the redo stack.
    fn commit(&mut self, actions: &mut Vec<Action>) {
        self.history.snapshot(self.store.document());
        tracing::debug!(depth = self.history.undo_depth(), elements = self.store.len(), "snapshot committed");
        actions.push(self.history_changed());
    }

    /// Make `doc` the live document, dropping a selection it no longer contains.
    fn restore(&mut self, doc: Document, actions: &mut Vec<Action>) {
        self.store.restore(doc);
        if let Some(id) = self.ui.selected_id {
            if !self.store.document().contains(id) {
                self.set_selection(None, actions);
            }
        }
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
    }

    fn set_selection(&mut self, id: Option<ElementId>, actions: &mut Vec<Action>) {
        if self.ui.selected_id == id {
            return;
        }
        self.ui.selected_id = id;
        actions.push(Action::SelectionChanged(id));
        actions.push(Action::RenderNeeded);
    }

    fn history_changed(&self) -> Action {
        Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() }
    }

    // --- Queries ---

    /// The live document, read-only.
    #[must_use]
    pub fn document(&self) -> &Document {
        self.store.document()
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    /// Persistent UI state: tool, selection, current color and width.
    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether a draw, shape or drag gesture is in progress.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.input.is_active()
    }

    /// Where the dragged element started, for hosts that draw a ghost at
    /// its original position. `None` when no drag is in progress.
    #[must_use]
    pub fn drag_origin(&self) -> Option<Point> {
        self.input.drag_origin()
    }

    /// Pointer travel since the drag began, for hosts that show a move
    /// readout. `None` when no drag is in progress.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Point> {
        self.input.drag_offset()
    }

    /// Renderer output for the current document and selection. Hosts use
    /// this to export or to paint onto their own surface.
    #[must_use]
    pub fn scene(&self) -> Vec<DrawOp> {
        render::scene(self.store.document(), self.ui.selected_id, &self.config)
    }
}

/// Anchor used to record where a dragged element started: shape origin or
/// first stroke point.
fn element_origin(el: &Element) -> Point {
    match el {
        Element::Shape(s) => s.origin(),
        Element::Stroke(s) => s.points().first().copied().unwrap_or_default(),
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self::with_config(canvas, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(canvas: HtmlCanvasElement, config: EngineConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let dpr = self.core.dpr;
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Delegated toolbar commands ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn set_tool_named(&mut self, name: &str) -> Vec<Action> {
        self.core.set_tool_named(name)
    }

    pub fn set_color(&mut self, color: &str) {
        self.core.set_color(color);
    }

    pub fn set_stroke_width(&mut self, width: f64) -> bool {
        self.core.set_stroke_width(width)
    }

    pub fn set_selected_color(&mut self, color: &str) -> Vec<Action> {
        self.core.set_selected_color(color)
    }

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        self.core.redo()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        self.core.delete_selected()
    }

    // --- Render ---

    /// Draw the current state to the bound canvas.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the canvas has no 2D context and
    /// `Canvas` if a drawing call fails.
    pub fn render(&self) -> Result<(), RenderError> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or(RenderError::SurfaceUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::SurfaceUnavailable)?;
        self.render_to(&ctx)
    }

    /// Draw the current state onto a host-supplied context, such as an
    /// offscreen canvas used for export.
    ///
    /// # Errors
    ///
    /// Returns `Canvas` if a drawing call fails.
    pub fn render_to(&self, ctx: &CanvasRenderingContext2d) -> Result<(), RenderError> {
        let core = &self.core;
        render::paint(
            ctx,
            &core.scene(),
            &core.config.background,
            core.viewport_width,
            core.viewport_height,
            core.dpr,
        )?;
        Ok(())
    }
}
