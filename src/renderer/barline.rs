//! Barline geometry: plain, double, final and repeat bars.

use std::f64::consts::PI;

use super::constants::*;
use super::stave::Stave;
use super::DrawingSurface;
use crate::error::RenderError;
use crate::model::{Barline, BarlineType};

/// Vertical extent of a barline: from the top line of the stave it is drawn
/// on to the bottom line of the last stave connected to it.
#[derive(Debug, Clone, Copy)]
struct Span {
    top: f64,
    bottom: f64,
}

impl Span {
    fn of(stave: &Stave<'_>) -> Self {
        Self {
            top: stave.y_for_line(0),
            bottom: stave.last_stave().bottom_line_y(),
        }
    }

    fn height(self) -> f64 {
        self.bottom - self.top + 1.0
    }
}

impl Barline {
    /// Draw this barline on `stave`.
    ///
    /// `x_shift` is the room taken by clef, key or time signature at the
    /// start of the stave. It only moves repeat-begin bars; when positive a
    /// plain bar is also drawn at the barline's own x.
    pub fn draw(&self, stave: &mut Stave<'_>, x_shift: f64) -> Result<(), RenderError> {
        if self.barline_type == BarlineType::None {
            return Ok(());
        }
        if !stave.has_context() {
            log::warn!(
                "{:?} barline at x={} skipped: no drawing surface",
                self.barline_type,
                self.x
            );
            return Err(RenderError::NoDrawingSurface);
        }
        log::debug!(
            "drawing {:?} barline at x={} (shift {})",
            self.barline_type,
            self.x,
            x_shift
        );

        match self.barline_type {
            BarlineType::Single => draw_vertical_bar(stave, self.x, false),
            BarlineType::Double => draw_vertical_bar(stave, self.x, true),
            BarlineType::End => draw_vertical_end_bar(stave, self.x),
            BarlineType::RepeatBegin => {
                // Not at the start of the stave: close the previous measure too
                if x_shift > 0.0 {
                    draw_vertical_bar(stave, self.x, false)?;
                }
                draw_repeat_bar(stave, self.x + x_shift, true)
            }
            BarlineType::RepeatEnd => draw_repeat_bar(stave, self.x, false),
            BarlineType::None => Ok(()),
        }
    }
}

fn context<'a, 's>(
    stave: &'a mut Stave<'s>,
) -> Result<&'a mut (dyn DrawingSurface + 's), RenderError> {
    stave.context_mut().ok_or(RenderError::NoDrawingSurface)
}

fn draw_vertical_bar(stave: &mut Stave<'_>, x: f64, double_bar: bool) -> Result<(), RenderError> {
    let span = Span::of(stave);
    let ctx = context(stave)?;
    ctx.fill_rect(x, span.top, THIN_BAR_WIDTH, span.height());
    if double_bar {
        ctx.fill_rect(x - DOUBLE_BAR_GAP, span.top, THIN_BAR_WIDTH, span.height());
    }
    Ok(())
}

fn draw_vertical_end_bar(stave: &mut Stave<'_>, x: f64) -> Result<(), RenderError> {
    let span = Span::of(stave);
    let ctx = context(stave)?;
    ctx.fill_rect(x + END_THIN_OFFSET, span.top, THIN_BAR_WIDTH, span.height());
    ctx.fill_rect(x + THICK_BAR_OFFSET, span.top, THICK_BAR_WIDTH, span.height());
    Ok(())
}

/// Centre of the upper repeat dot on `stave`, and the gap to the lower one.
///
/// The pair straddles the middle line: on a one-line stave the dots sit half
/// a space above and below that line.
fn repeat_dot_y(stave: &Stave<'_>) -> (f64, f64) {
    let spacing = stave.line_spacing();
    let y_offset = (stave.num_lines() - 1) as f64 * spacing / 2.0 - spacing / 2.0;
    (stave.y_for_line(0) + y_offset + REPEAT_DOT_RADIUS / 2.0, spacing)
}

fn draw_repeat_bar(stave: &mut Stave<'_>, x: f64, begin: bool) -> Result<(), RenderError> {
    let span = Span::of(stave);

    // One dot pair per physical stave
    let dots: Vec<(f64, f64)> = std::iter::once(&*stave)
        .chain(stave.connected_staves())
        .map(repeat_dot_y)
        .collect();

    let mut x_shift = if begin { REPEAT_BEGIN_THIN_OFFSET } else { REPEAT_END_THIN_OFFSET };

    let ctx = context(stave)?;
    ctx.fill_rect(x + x_shift, span.top, THIN_BAR_WIDTH, span.height());
    ctx.fill_rect(x + THICK_BAR_OFFSET, span.top, THICK_BAR_WIDTH, span.height());

    x_shift += if begin { REPEAT_DOT_SHIFT } else { -REPEAT_DOT_SHIFT };
    let dot_x = x + x_shift + REPEAT_DOT_RADIUS / 2.0;

    for (dot_y, spacing) in dots {
        ctx.begin_path();
        ctx.arc(dot_x, dot_y, REPEAT_DOT_RADIUS, 0.0, PI * 2.0, false);
        ctx.arc(dot_x, dot_y + spacing, REPEAT_DOT_RADIUS, 0.0, PI * 2.0, false);
        ctx.fill();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface, StaveOptions};
    use pretty_assertions::assert_eq;

    fn rects(commands: &[DrawCommand]) -> Vec<(f64, f64, f64, f64)> {
        commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillRect { x, y, width, height } => Some((x, y, width, height)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn span_reaches_last_connected_stave() {
        let mut stave = Stave::new(0.0);
        stave.connect(Stave::new(80.0)).connect(Stave::new(200.0));
        let span = Span::of(&stave);
        assert_eq!(span.top, 40.0);
        assert_eq!(span.bottom, 280.0);
        assert_eq!(span.height(), 241.0);
    }

    #[test]
    fn dots_centre_on_five_line_stave() {
        let stave = Stave::new(0.0);
        // top line at 40, y_offset = 20 - 5 = 15, + radius/2
        assert_eq!(repeat_dot_y(&stave), (56.0, 10.0));
    }

    #[test]
    fn dots_straddle_single_line() {
        let options = StaveOptions { num_lines: 1, ..Default::default() };
        let stave = Stave::with_options(0.0, options);
        let (top, gap) = repeat_dot_y(&stave);
        assert_eq!(top, 36.0);
        assert_eq!(top + gap, 46.0);
    }

    #[test]
    fn end_bar_thin_then_thick() {
        let mut surface = RecordingSurface::new();
        {
            let mut stave = Stave::new(0.0);
            stave.set_context(&mut surface);
            Barline::new(BarlineType::End, 100.0).draw(&mut stave, 0.0).unwrap();
        }
        assert_eq!(
            rects(surface.commands()),
            vec![(95.0, 40.0, 1.0, 41.0), (98.0, 40.0, 3.0, 41.0)]
        );
    }

    #[test]
    fn repeat_begin_dots_to_the_right() {
        let mut surface = RecordingSurface::new();
        {
            let mut stave = Stave::new(0.0);
            stave.set_context(&mut surface);
            Barline::new(BarlineType::RepeatBegin, 50.0).draw(&mut stave, 0.0).unwrap();
        }
        let arcs: Vec<(f64, f64)> = surface
            .commands()
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Arc { cx, cy, .. } => Some((cx, cy)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs, vec![(58.0, 56.0), (58.0, 66.0)]);
    }
}
