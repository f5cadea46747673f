//! stavebar — barline rendering for single and connected music staves.
//!
//! Draws plain, double, final and repeat barlines onto any surface that
//! implements [`DrawingSurface`]. A barline drawn on the top stave of a
//! system spans down through every stave connected below it; repeat dots
//! are placed on each stave separately.
//!
//! # Example
//! ```
//! use stavebar::{Barline, BarlineType, RecordingSurface, Stave};
//!
//! let mut surface = RecordingSurface::new();
//! {
//!     let mut treble = Stave::new(0.0);
//!     treble.connect(Stave::new(100.0));
//!     treble.set_context(&mut surface);
//!     Barline::new(BarlineType::RepeatEnd, 300.0)
//!         .draw(&mut treble, 0.0)
//!         .unwrap();
//! }
//! println!("{}", surface.to_json().unwrap());
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod renderer;

pub use error::{ParseError, RenderError};
pub use model::*;
pub use parser::{parse_barlines, MeasureBarlines, PartBarlines};
pub use renderer::{
    render_barlines_to_svg, DrawCommand, DrawingSurface, RecordingSurface, Stave, StaveOptions,
    SvgSurface,
};

/// Parse MusicXML and return the barlines of every part as pretty JSON,
/// one object per part with its measures' left and right barline types.
pub fn barlines_to_json(xml: &str) -> Result<String, ParseError> {
    let parts = parse_barlines(xml)?;
    Ok(serde_json::to_string_pretty(&parts)?)
}
