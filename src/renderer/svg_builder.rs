//! SVG surface — accumulates SVG elements and produces the final string.
//!
//! Canvas-style path calls are translated to SVG path data: each arc
//! becomes one or two `A` segments, and `fill` closes the current path out
//! into a `<path>` element.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use super::constants::*;
use super::DrawingSurface;

// ═══════════════════════════════════════════════════════════════════════
// SvgSurface
// ═══════════════════════════════════════════════════════════════════════

pub struct SvgSurface {
    elements: Vec<String>,
    width: f64,
    height: f64,
    fill_color: String,
    path: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            fill_color: BARLINE_COLOR.to_string(),
            path: String::new(),
        }
    }

    /// Colour used by subsequent fills.
    pub fn set_fill_color(&mut self, color: &str) -> &mut Self {
        self.fill_color = color.to_string();
        self
    }

    /// Elements emitted so far, one per fill.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn move_or_line_to(&mut self, x: f64, y: f64) {
        let cmd = if self.path.is_empty() { 'M' } else { 'L' };
        // Writing to a String cannot fail
        let _ = write!(self.path, "{cmd}{x:.1},{y:.1}");
    }
}

impl DrawingSurface for SvgSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, width, height, self.fill_color
        ));
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        let point = |angle: f64| (cx + radius * angle.cos(), cy + radius * angle.sin());

        let raw = if counterclockwise {
            start_angle - end_angle
        } else {
            end_angle - start_angle
        };
        let sweep = if raw >= TAU { TAU } else { raw.rem_euclid(TAU) };
        let sweep_flag = if counterclockwise { 0 } else { 1 };
        let direction = if counterclockwise { -1.0 } else { 1.0 };

        let (sx, sy) = point(start_angle);
        self.move_or_line_to(sx, sy);

        if sweep >= TAU {
            // A single SVG arc cannot close on itself; go round in two halves
            let (mx, my) = point(start_angle + direction * PI);
            let _ = write!(
                self.path,
                "A{r:.1},{r:.1} 0 0 {sweep_flag} {mx:.1},{my:.1}A{r:.1},{r:.1} 0 0 {sweep_flag} {sx:.1},{sy:.1}",
                r = radius
            );
        } else if sweep > 0.0 {
            let (ex, ey) = point(start_angle + direction * sweep);
            let large_arc = if sweep > PI { 1 } else { 0 };
            let _ = write!(
                self.path,
                "A{r:.1},{r:.1} 0 {large_arc} {sweep_flag} {ex:.1},{ey:.1}",
                r = radius
            );
        }
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}Z" fill="{}"/>"#,
            self.path, self.fill_color
        ));
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rect_uses_fill_colour() {
        let mut svg = SvgSurface::new(100.0, 50.0);
        svg.set_fill_color("black");
        svg.fill_rect(10.0, 5.0, 1.0, 41.0);
        assert_eq!(
            svg.elements(),
            &[r#"<rect x="10.0" y="5.0" width="1.0" height="41.0" fill="black"/>"#.to_string()]
        );
    }

    #[test]
    fn full_circles_split_into_two_halves() {
        let mut svg = SvgSurface::new(100.0, 50.0);
        svg.begin_path();
        svg.arc(10.0, 20.0, 2.0, 0.0, TAU, false);
        svg.arc(10.0, 30.0, 2.0, 0.0, TAU, false);
        svg.fill();
        assert_eq!(
            svg.elements()[0],
            format!(
                r#"<path d="M12.0,20.0A2.0,2.0 0 0 1 8.0,20.0A2.0,2.0 0 0 1 12.0,20.0L12.0,30.0A2.0,2.0 0 0 1 8.0,30.0A2.0,2.0 0 0 1 12.0,30.0Z" fill="{}"/>"#,
                BARLINE_COLOR
            )
        );
    }

    #[test]
    fn fill_without_path_emits_nothing() {
        let mut svg = SvgSurface::new(100.0, 50.0);
        svg.begin_path();
        svg.fill();
        assert!(svg.elements().is_empty());
        let out = svg.build();
        assert!(out.starts_with("<svg"));
        assert!(out.ends_with("</svg>\n"));
    }
}
