//! Shared numeric and color constants for the sketch engine.

// ── Drawing defaults ────────────────────────────────────────────

/// Initial color for new strokes and shapes (CSS color string).
pub const DEFAULT_COLOR: &str = "#1F1A17";

/// Initial stroke width for freehand strokes, in canvas units.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Surface clear color.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

// ── Selection ───────────────────────────────────────────────────

/// Distance the selection outline sits outside the element's bounds.
pub const SELECTION_MARGIN: f64 = 6.0;

/// Selection outline color.
pub const SELECTION_COLOR: &str = "#1E90FF";

/// Selection dash segment length in canvas units.
pub const SELECTION_DASH: f64 = 4.0;

/// Selection outline width in canvas units.
pub const SELECTION_LINE_WIDTH: f64 = 1.0;
