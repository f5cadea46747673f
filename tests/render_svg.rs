//! Rendering tests — draw barlines across a system and check the SVG.

use stavebar::{render_barlines_to_svg, Barline, BarlineType, RenderError, StaveOptions};

#[test]
fn render_grand_staff_svg() {
    let barlines = vec![
        Barline::new(BarlineType::RepeatBegin, 60.0),
        Barline::new(BarlineType::Single, 200.0),
        Barline::new(BarlineType::RepeatEnd, 400.0),
        Barline::new(BarlineType::None, 500.0),
        Barline::new(BarlineType::End, 780.0),
    ];
    let svg = render_barlines_to_svg(&barlines, &[0.0, 100.0], &StaveOptions::default(), None)
        .expect("Failed to render grand staff");

    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    // bottom line of the lower stave (180) plus margin
    assert!(svg.contains(r#"viewBox="0 0 820 210""#), "unexpected size: {svg}");

    // 2 strokes per repeat, 1 single, 2 for the end bar
    assert_eq!(svg.matches("<rect").count(), 7);
    // one dot path per stave per repeat sign
    assert_eq!(svg.matches("<path").count(), 4);
    // every stroke spans both staves
    assert_eq!(svg.matches(r#"height="141.0""#).count(), 7);
}

#[test]
fn render_respects_page_width() {
    let barlines = [Barline::new(BarlineType::Double, 100.0)];
    let options = StaveOptions::default();
    let svg = render_barlines_to_svg(&barlines, &[0.0], &options, Some(375.0)).unwrap();
    assert!(svg.contains(r#"width="375""#));
    assert_eq!(svg.matches("<rect").count(), 2);

    let fallback = render_barlines_to_svg(&barlines, &[0.0], &options, Some(0.0)).unwrap();
    assert!(fallback.contains(r#"width="820""#));
}

#[test]
fn render_needs_a_stave() {
    let barlines = [Barline::new(BarlineType::Single, 100.0)];
    let err = render_barlines_to_svg(&barlines, &[], &StaveOptions::default(), None).unwrap_err();
    assert!(matches!(err, RenderError::InvalidSystem(_)));
}
