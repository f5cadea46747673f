//! Data model for barline descriptors.
//!
//! A [`Barline`] is created once per measure boundary by the layout engine,
//! positioned with [`Barline::set_x`] once layout settles, and drawn on every
//! render pass.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::renderer::Stave;

/// Category tag shared by every barline modifier.
pub const BARLINE_CATEGORY: &str = "barlines";

/// Visual variant of a barline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarlineType {
    /// Plain thin stroke
    Single,
    /// Two thin strokes
    Double,
    /// Thin stroke followed by a thick one (final bar)
    End,
    /// Repeat sign opening a repeated section
    RepeatBegin,
    /// Repeat sign closing a repeated section
    RepeatEnd,
    /// Draws nothing
    None,
}

impl BarlineType {
    /// Stable numeric code of this variant (1..=6).
    pub fn code(self) -> u8 {
        match self {
            BarlineType::Single => 1,
            BarlineType::Double => 2,
            BarlineType::End => 3,
            BarlineType::RepeatBegin => 4,
            BarlineType::RepeatEnd => 5,
            BarlineType::None => 6,
        }
    }

    /// Look up a variant by numeric code. Unknown codes map to `None`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => BarlineType::Single,
            2 => BarlineType::Double,
            3 => BarlineType::End,
            4 => BarlineType::RepeatBegin,
            5 => BarlineType::RepeatEnd,
            _ => BarlineType::None,
        }
    }
}

impl From<u8> for BarlineType {
    fn from(code: u8) -> Self {
        BarlineType::from_code(code)
    }
}

/// Something attached to a stave and drawn alongside it.
///
/// Lets layout code keep barlines in the same collection as other stave
/// decorations and tell them apart by category.
pub trait StaveModifier {
    fn category(&self) -> &'static str;

    /// Left-most x reserved for this modifier.
    fn x(&self) -> f64;

    fn draw(&self, stave: &mut Stave<'_>, x_shift: f64) -> Result<(), RenderError>;
}

/// A barline positioned on a stave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barline {
    /// Visual variant
    pub barline_type: BarlineType,
    /// Left-most x for the stave
    pub x: f64,
}

impl Barline {
    pub fn new(barline_type: BarlineType, x: f64) -> Self {
        Self { barline_type, x }
    }

    /// Move the barline. Returns `self` for chaining.
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }
}

impl StaveModifier for Barline {
    fn category(&self) -> &'static str {
        BARLINE_CATEGORY
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn draw(&self, stave: &mut Stave<'_>, x_shift: f64) -> Result<(), RenderError> {
        Barline::draw(self, stave, x_shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_round_trip_and_unknown_codes_draw_nothing() {
        for t in [
            BarlineType::Single,
            BarlineType::Double,
            BarlineType::End,
            BarlineType::RepeatBegin,
            BarlineType::RepeatEnd,
            BarlineType::None,
        ] {
            assert_eq!(BarlineType::from_code(t.code()), t);
        }
        assert_eq!(BarlineType::from(0), BarlineType::None);
        assert_eq!(BarlineType::from(42), BarlineType::None);
    }

    #[test]
    fn set_x_chains() {
        let mut barline = Barline::new(BarlineType::Single, 10.0);
        let x = barline.set_x(40.0).set_x(55.0).x;
        assert_eq!(x, 55.0);
        assert_eq!(barline.category(), "barlines");
    }

    #[test]
    fn barline_type_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&BarlineType::RepeatBegin).unwrap();
        assert_eq!(json, "\"REPEAT_BEGIN\"");
        let parsed: Barline =
            serde_json::from_str(r#"{"barline_type":"END","x":120.0}"#).unwrap();
        assert_eq!(parsed, Barline::new(BarlineType::End, 120.0));
    }
}
