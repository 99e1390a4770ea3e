use crate::{BASS_CLEF, TREBLE_CLEF};
use pathmask::algorithms::path_bounds;
use pathmask::geom::euclid::approxeq::ApproxEq;
use pathmask::math::point;
use pathmask::path::*;

fn count(segments: &[Segment], kind: SegmentKind) -> usize {
    segments.iter().filter(|s| s.kind() == kind).count()
}

#[test]
fn parse_treble_clef() {
    let segments = parse_path(TREBLE_CLEF).unwrap();
    assert_eq!(segments.len(), 48);
    assert_eq!(count(&segments, SegmentKind::Cubic), 34);
    assert_eq!(count(&segments, SegmentKind::Close), 4);

    assert_eq!(segments[0], Segment::Move { to: point(278.89, 840.5) });
    match segments[1] {
        Segment::Cubic { ctrl1, ctrl2, to } => {
            assert!(ctrl1.approx_eq_eps(&point(278.89, 864.311), &point(1e-9, 1e-9)));
            assert!(ctrl2.approx_eq_eps(&point(306.034, 891.633), &point(1e-9, 1e-9)));
            assert!(to.approx_eq_eps(&point(327.083, 895.608), &point(1e-9, 1e-9)));
        }
        ref other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn implicit_coordinates_after_move() {
    // The treble clef has two moves followed by more coordinates.
    let repeated = parse_path(TREBLE_CLEF).unwrap();
    assert_eq!(count(&repeated, SegmentKind::Move), 6);
    assert_eq!(count(&repeated, SegmentKind::Line), 4);

    let options = ParserOptions::DEFAULT.with_implicit_line_after_move(true);
    let lines = parse_path_with_options(TREBLE_CLEF, &options).unwrap();
    assert_eq!(lines.len(), repeated.len());
    assert_eq!(count(&lines, SegmentKind::Move), 4);
    assert_eq!(count(&lines, SegmentKind::Line), 6);

    // The pen follows the same positions until the first of those sub-paths is
    // closed. Repeated moves start a new sub-path, lines extend the current one,
    // so the two readings close to different points and diverge from there.
    let first_close = 35;
    for (a, b) in repeated[..first_close].iter().zip(&lines[..first_close]) {
        assert_eq!(a.to(), b.to());
    }
    assert_eq!(repeated[first_close].kind(), SegmentKind::Close);
    assert_eq!(lines[first_close].kind(), SegmentKind::Close);
    assert!(repeated[first_close]
        .to()
        .approx_eq_eps(&point(379.3953, 499.994), &point(1e-6, 1e-6)));
    assert!(lines[first_close]
        .to()
        .approx_eq_eps(&point(369.865, 431.36), &point(1e-6, 1e-6)));
}

#[test]
fn parse_bass_clef() {
    let segments = parse_path(BASS_CLEF).unwrap();
    assert_eq!(segments.len(), 25);
    assert_eq!(count(&segments, SegmentKind::Move), 3);
    assert_eq!(count(&segments, SegmentKind::Cubic), 19);
    assert_eq!(count(&segments, SegmentKind::Close), 3);
    assert_eq!(segments[0], Segment::Move { to: point(190.85, 451.25) });

    // Every sub-path is closed back to where it started.
    let mut start = point(0.0, 0.0);
    for segment in &segments {
        match *segment {
            Segment::Move { to } => start = to,
            Segment::Close { to } => assert_eq!(to, start),
            _ => {}
        }
    }
}

#[test]
fn serialized_clefs_round_trip() {
    for src in &[TREBLE_CLEF, BASS_CLEF] {
        let segments = parse_path(src).unwrap();
        let normalized = to_svg_string(&segments);
        assert!(!normalized.contains(|c: char| c.is_ascii_lowercase()));
        assert_eq!(parse_path(&normalized).unwrap(), segments);
    }
}

#[test]
fn clefs_have_no_arcs() {
    for src in &[TREBLE_CLEF, BASS_CLEF] {
        let segments = parse_path(src).unwrap();
        assert_eq!(approximate_arcs(&segments), segments);
    }
}

#[test]
fn clef_bounds() {
    let segments = parse_path(TREBLE_CLEF).unwrap();
    let bounds = path_bounds(&segments);

    assert!(!bounds.is_degenerate());
    for segment in &segments {
        let p = segment.to();
        assert!(p.x >= bounds.min.x && p.x <= bounds.max.x);
        assert!(p.y >= bounds.min.y && p.y <= bounds.max.y);
    }

    // Taller than wide.
    assert!(bounds.height_for_width(100.0) > 200.0);
    assert!(bounds.width_for_height(100.0) < 50.0);
}
