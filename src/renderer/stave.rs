//! Stave geometry and the drawing surface attached to it.

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::DrawingSurface;
use crate::error::ParseError;

/// Per-stave layout options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaveOptions {
    /// Number of horizontal lines
    pub num_lines: usize,
    /// Distance between adjacent lines
    pub spacing_between_lines_px: f64,
    /// Headroom above the top line, in line spaces
    pub space_above_staff_ln: f64,
}

impl Default for StaveOptions {
    fn default() -> Self {
        Self {
            num_lines: DEFAULT_NUM_LINES,
            spacing_between_lines_px: DEFAULT_LINE_SPACING,
            space_above_staff_ln: DEFAULT_SPACE_ABOVE_STAFF_LN,
        }
    }
}

impl StaveOptions {
    /// Read options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A stave as seen by the barline renderer.
///
/// Connected staves are the staves joined below this one (e.g. the bass
/// stave of a grand staff). Only the surface of the stave being drawn on is
/// used; connected staves contribute geometry.
pub struct Stave<'s> {
    y: f64,
    options: StaveOptions,
    connected: Vec<Stave<'s>>,
    context: Option<&'s mut dyn DrawingSurface>,
}

impl<'s> Stave<'s> {
    pub fn new(y: f64) -> Self {
        Self::with_options(y, StaveOptions::default())
    }

    pub fn with_options(y: f64, mut options: StaveOptions) -> Self {
        if options.num_lines == 0 {
            log::warn!("stave at y={y} configured with zero lines, using one");
            options.num_lines = 1;
        }
        Self {
            y,
            options,
            connected: Vec::new(),
            context: None,
        }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn options(&self) -> &StaveOptions {
        &self.options
    }

    pub fn num_lines(&self) -> usize {
        self.options.num_lines
    }

    pub fn line_spacing(&self) -> f64 {
        self.options.spacing_between_lines_px
    }

    /// y-coordinate of the given line, counted from the top line (0).
    pub fn y_for_line(&self, line: usize) -> f64 {
        let spacing = self.options.spacing_between_lines_px;
        self.y + line as f64 * spacing + self.options.space_above_staff_ln * spacing
    }

    /// y-coordinate of the bottom line.
    pub fn bottom_line_y(&self) -> f64 {
        self.y_for_line(self.options.num_lines - 1)
    }

    /// Join `stave` below this one. Order matters: the last connected stave
    /// sets the bottom of any barline drawn here.
    pub fn connect(&mut self, stave: Stave<'s>) -> &mut Self {
        self.connected.push(stave);
        self
    }

    pub fn connected_staves(&self) -> &[Stave<'s>] {
        &self.connected
    }

    /// The last connected stave, or this stave when nothing is connected.
    pub fn last_stave(&self) -> &Stave<'s> {
        self.connected.last().unwrap_or(self)
    }

    pub fn set_context(&mut self, context: &'s mut dyn DrawingSurface) -> &mut Self {
        self.context = Some(context);
        self
    }

    pub fn take_context(&mut self) -> Option<&'s mut dyn DrawingSurface> {
        self.context.take()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn context_mut(&mut self) -> Option<&mut (dyn DrawingSurface + 's)> {
        self.context.as_deref_mut()
    }
}

impl std::fmt::Debug for Stave<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stave")
            .field("y", &self.y)
            .field("options", &self.options)
            .field("connected", &self.connected)
            .field("has_context", &self.context.is_some())
            .finish()
    }
}
