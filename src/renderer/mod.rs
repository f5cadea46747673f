//! Barline renderer — turns barline descriptors into drawing commands.
//!
//! Drawing goes through the [`DrawingSurface`] trait, so the same geometry
//! feeds an SVG document ([`SvgSurface`]) or a command log
//! ([`RecordingSurface`]).

mod barline;
mod constants;
mod recording;
mod stave;
mod svg_builder;

pub use recording::{DrawCommand, RecordingSurface};
pub use stave::{Stave, StaveOptions};
pub use svg_builder::SvgSurface;

use crate::error::RenderError;
use crate::model::Barline;
use constants::*;

/// The primitives a barline needs from a 2D raster surface.
///
/// Commands must be applied in call order; later fills may cover earlier
/// ones.
pub trait DrawingSurface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Start a new path, discarding any unfilled one.
    fn begin_path(&mut self);

    /// Append an arc to the current path. Angles are in radians, measured
    /// clockwise from the positive x-axis (y grows downwards).
    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );

    /// Fill the current path.
    fn fill(&mut self);
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Draw `barlines` across a stack of connected staves and return the SVG.
///
/// `stave_tops` holds the y of each stave, top to bottom; the first stave is
/// drawn on and the rest are connected to it. `page_width` defaults to 820
/// when `None` or not positive.
pub fn render_barlines_to_svg(
    barlines: &[Barline],
    stave_tops: &[f64],
    options: &StaveOptions,
    page_width: Option<f64>,
) -> Result<String, RenderError> {
    let page_width = match page_width {
        Some(w) if w > 0.0 => w,
        _ => DEFAULT_PAGE_WIDTH,
    };

    let (&first_y, rest) = stave_tops
        .split_first()
        .ok_or_else(|| RenderError::InvalidSystem("no staves to draw on".into()))?;

    let bottom = Stave::with_options(*stave_tops.last().unwrap_or(&first_y), options.clone())
        .bottom_line_y();
    let mut svg = SvgSurface::new(page_width, bottom + PAGE_MARGIN_BOTTOM);

    {
        let mut stave = Stave::with_options(first_y, options.clone());
        for &y in rest {
            stave.connect(Stave::with_options(y, options.clone()));
        }
        stave.set_context(&mut svg);

        for barline in barlines {
            barline.draw(&mut stave, 0.0)?;
        }
    }

    log::debug!("rendered {} barlines on {} staves", barlines.len(), stave_tops.len());
    Ok(svg.build())
}
