//! Shared constants for barline rendering (all in surface pixels).

// ── Strokes ─────────────────────────────────────────────────────────
pub(crate) const THIN_BAR_WIDTH: f64 = 1.0;
pub(crate) const THICK_BAR_WIDTH: f64 = 3.0;
pub(crate) const DOUBLE_BAR_GAP: f64 = 3.0; // second thin stroke sits this far left
pub(crate) const END_THIN_OFFSET: f64 = -5.0;
pub(crate) const THICK_BAR_OFFSET: f64 = -2.0; // thick stroke spans x-2 .. x+1

// ── Repeat glyph ────────────────────────────────────────────────────
pub(crate) const REPEAT_BEGIN_THIN_OFFSET: f64 = 3.0;
pub(crate) const REPEAT_END_THIN_OFFSET: f64 = -5.0;
pub(crate) const REPEAT_DOT_SHIFT: f64 = 4.0;
pub(crate) const REPEAT_DOT_RADIUS: f64 = 2.0;

// ── Stave defaults ──────────────────────────────────────────────────
pub(crate) const DEFAULT_NUM_LINES: usize = 5;
pub(crate) const DEFAULT_LINE_SPACING: f64 = 10.0;
pub(crate) const DEFAULT_SPACE_ABOVE_STAFF_LN: f64 = 4.0;

// ── Page ────────────────────────────────────────────────────────────
pub(crate) const DEFAULT_PAGE_WIDTH: f64 = 820.0;
pub(crate) const PAGE_MARGIN_BOTTOM: f64 = 30.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const BARLINE_COLOR: &str = "#333333";
