//! MusicXML barline import — reads the barlines of every measure.

use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::model::BarlineType;

/// Barlines of one part, in measure order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartBarlines {
    /// Part identifier (e.g., "P1")
    pub id: String,
    pub measures: Vec<MeasureBarlines>,
}

/// The barlines written at either edge of a measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureBarlines {
    /// Measure number
    pub number: i32,
    /// Barline at the left edge, if one is written
    pub left: Option<BarlineType>,
    /// Barline at the right edge, if one is written
    pub right: Option<BarlineType>,
}

/// Parse a MusicXML string and collect the barlines of every part.
pub fn parse_barlines(xml: &str) -> Result<Vec<PartBarlines>, ParseError> {
    // MusicXML files include a DOCTYPE declaration, so we must allow DTDs
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let root = doc.root_element();

    if root.tag_name().name() != "score-partwise" {
        return Err(ParseError::UnsupportedRoot(root.tag_name().name().to_string()));
    }

    Ok(root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "part")
        .map(|part| parse_part(&part))
        .collect())
}

fn parse_part(node: &Node) -> PartBarlines {
    let id = node.attribute("id").unwrap_or("").to_string();
    let measures = node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "measure")
        .map(|m| parse_measure(&m))
        .collect();
    PartBarlines { id, measures }
}

fn parse_measure(node: &Node) -> MeasureBarlines {
    let number = node
        .attribute("number")
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);
    let mut measure = MeasureBarlines { number, left: None, right: None };

    for barline in node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "barline")
    {
        let barline_type = parse_barline(&barline);
        match barline.attribute("location").unwrap_or("right") {
            "left" => measure.left = Some(barline_type),
            "right" => measure.right = Some(barline_type),
            _ => {}
        }
    }

    measure
}

// ─── Barline ─────────────────────────────────────────────────────────

fn parse_barline(node: &Node) -> BarlineType {
    let mut bar_style: Option<String> = None;
    let mut repeat: Option<BarlineType> = None;

    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "bar-style" => {
                bar_style = child.text().map(|t| t.trim().to_string());
            }
            "repeat" => {
                repeat = match child.attribute("direction").unwrap_or("forward") {
                    "backward" => Some(BarlineType::RepeatEnd),
                    _ => Some(BarlineType::RepeatBegin),
                };
            }
            _ => {}
        }
    }

    if let Some(repeat) = repeat {
        return repeat;
    }

    match bar_style.as_deref() {
        Some("light-light") => BarlineType::Double,
        Some("light-heavy") => BarlineType::End,
        Some("none") => BarlineType::None,
        None | Some("regular") => BarlineType::Single,
        Some(other) => {
            log::debug!("bar-style '{other}' drawn as a single barline");
            BarlineType::Single
        }
    }
}
