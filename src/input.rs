//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! This module defines the types consumed by the gesture interpreter. `Tool`
//! and `Modifiers` capture the user's intent at the time of a pointer event.
//! `UiState` is the persistent, non-undoable editor state the renderer and
//! host read. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up, carrying the context needed to apply
//! incremental updates and to know what to commit on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH};
use crate::doc::ElementId;
use crate::geom::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand stroke (default).
    #[default]
    Draw,
    /// Axis-aligned rectangle.
    Shape,
    /// Select and drag existing elements.
    Select,
}

impl Tool {
    /// Parse a host-side tool name (`"draw"`, `"shape"`, `"select"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "draw" => Some(Self::Draw),
            "shape" => Some(Self::Shape),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button, pen contact, or single-finger touch.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the renderer and the host.
///
/// None of this is part of undoable history.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The id of the currently selected element, if any.
    pub selected_id: Option<ElementId>,
    /// Color given to newly created strokes and shapes.
    pub color: String,
    /// Width given to newly created strokes.
    pub stroke_width: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            selected_id: None,
            color: DEFAULT_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Internal state for the gesture state machine.
///
/// Each active variant carries the context needed to apply pointer-move
/// updates; pointer-up or pointer-leave from any active variant returns to
/// `Idle` and commits the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is drawing a freehand stroke.
    DrawingStroke {
        /// Id of the stroke receiving points.
        id: ElementId,
    },
    /// The user is sizing a new shape by dragging away from its origin.
    DrawingShape {
        /// Id of the shape being sized.
        id: ElementId,
        /// Where the drag started; the shape's origin.
        anchor: Point,
    },
    /// The user is moving an existing element.
    Dragging {
        /// Id of the element being dragged.
        id: ElementId,
        /// Pointer position at pointer-down.
        start: Point,
        /// Pointer position at the previous event; deltas are taken from here.
        last: Point,
        /// Element origin at pointer-down (shape corner or first stroke point).
        orig: Point,
    },
}

impl InputState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// For a drag, the element's origin at pointer-down.
    #[must_use]
    pub fn drag_origin(&self) -> Option<Point> {
        match self {
            Self::Dragging { orig, .. } => Some(*orig),
            _ => None,
        }
    }

    /// For a drag, total pointer travel since pointer-down.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Point> {
        match self {
            Self::Dragging { start, last, .. } => Some(*last - *start),
            _ => None,
        }
    }

    /// The element the active gesture is working on, if any.
    #[must_use]
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::DrawingStroke { id } | Self::DrawingShape { id, .. } | Self::Dragging { id, .. } => Some(*id),
        }
    }
}
