use crate::commands::{CliError, OutputFormat, RenderCmd};
use pathmask::algorithms::{path_bounds, Bounds};
use pathmask::math::int_rect;
use pathmask::path::approximate_arcs;
use pathmask::raster::{render_mask_with, AlphaMask, Rasterizer};
use std::io::Write;

use log::info;

/// Used when neither the width nor the height are specified.
pub const DEFAULT_HEIGHT: i32 = 32;

pub fn render(cmd: RenderCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let segments = if cmd.approximate_arcs {
        approximate_arcs(&cmd.segments)
    } else {
        cmd.segments
    };

    // Measured after the arcs are replaced so that the curves fit in the mask.
    let bounds = path_bounds(&segments);
    let (width, height) = target_size(&bounds, cmd.width, cmd.height)?;

    info!("rendering {} segment(s) into {}x{} pixels", segments.len(), width, height);

    let mut rasterizer = Rasterizer::new();
    rasterizer.set_anti_alias(cmd.anti_alias);
    let mask = render_mask_with(
        &mut rasterizer,
        &segments,
        &bounds,
        &int_rect(0, 0, width, height),
    );

    match cmd.format {
        OutputFormat::Ascii => write_ascii(&mask, output)?,
        OutputFormat::Pgm => write_pgm(&mask, output)?,
    }

    Ok(())
}

/// Fills in a missing dimension so that the mask keeps the aspect ratio of the bounds.
pub fn target_size(
    bounds: &Bounds,
    width: Option<i32>,
    height: Option<i32>,
) -> Result<(i32, i32), CliError> {
    if let (Some(w), Some(h)) = (width, height) {
        return Ok((w, h));
    }

    if bounds.is_degenerate() {
        return Err(CliError::DegenerateBounds);
    }

    let size = |v: f64| (v.round() as i32).max(1);
    Ok(match (width, height) {
        (Some(w), _) => (w, size(bounds.height_for_width(w as f64))),
        (_, Some(h)) => (size(bounds.width_for_height(h as f64)), h),
        (None, None) => (
            size(bounds.width_for_height(DEFAULT_HEIGHT as f64)),
            DEFAULT_HEIGHT,
        ),
    })
}

pub fn write_ascii(mask: &AlphaMask, output: &mut dyn Write) -> std::io::Result<()> {
    let mut line = String::with_capacity(mask.width());
    for y in mask.rect().min.y..mask.rect().max.y {
        line.clear();
        for &alpha in mask.row(y) {
            let tenths = (alpha as u32 * 10 / 255).min(9);
            line.push(std::char::from_digit(tenths, 10).unwrap_or('9'));
        }
        writeln!(output, "{}", line)?;
    }

    Ok(())
}

pub fn write_pgm(mask: &AlphaMask, output: &mut dyn Write) -> std::io::Result<()> {
    write!(output, "P5\n{} {}\n255\n", mask.width(), mask.height())?;
    output.write_all(mask.pixels())
}

#[cfg(test)]
fn square() -> Vec<pathmask::path::Segment> {
    pathmask::path::parse_path("M0 0h10v5h-10z").unwrap()
}

#[test]
fn derived_sizes() {
    let bounds = path_bounds(&square());
    assert_eq!(target_size(&bounds, Some(7), Some(3)).unwrap(), (7, 3));
    assert_eq!(target_size(&bounds, Some(20), None).unwrap(), (20, 10));
    assert_eq!(target_size(&bounds, None, Some(4)).unwrap(), (8, 4));
    assert_eq!(
        target_size(&bounds, None, None).unwrap(),
        (2 * DEFAULT_HEIGHT, DEFAULT_HEIGHT)
    );

    let line = path_bounds(&pathmask::path::parse_path("M0 0h10").unwrap());
    assert!(matches!(
        target_size(&line, Some(10), None),
        Err(CliError::DegenerateBounds)
    ));
    assert_eq!(target_size(&line, Some(10), Some(2)).unwrap(), (10, 2));
}

#[test]
fn ascii_output() {
    let cmd = RenderCmd {
        segments: pathmask::path::parse_path("M0 0h2v2h-1v-1h-1z").unwrap(),
        width: Some(2),
        height: Some(2),
        anti_alias: true,
        approximate_arcs: false,
        format: OutputFormat::Ascii,
    };

    let mut out = Vec::new();
    render(cmd, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "99\n09\n");
}

#[test]
fn pgm_output() {
    let cmd = RenderCmd {
        segments: square(),
        width: Some(4),
        height: None,
        anti_alias: true,
        approximate_arcs: false,
        format: OutputFormat::Pgm,
    };

    let mut out = Vec::new();
    render(cmd, &mut out).unwrap();
    let header = b"P5\n4 2\n255\n";
    assert_eq!(&out[..header.len()], &header[..]);
    assert_eq!(&out[header.len()..], &[255; 8][..]);
}

#[test]
fn arcs_fit_in_the_mask() {
    // A half disc above its base line.
    let segments = pathmask::path::parse_path("M0 0A5 5 0 0 1 10 0z").unwrap();
    let cmd = |approximate_arcs| RenderCmd {
        segments: segments.clone(),
        width: Some(10),
        height: None,
        anti_alias: true,
        approximate_arcs,
        format: OutputFormat::Ascii,
    };

    // The end points alone have no height.
    assert!(matches!(
        render(cmd(false), &mut Vec::new()),
        Err(CliError::DegenerateBounds)
    ));

    let mut out = Vec::new();
    render(cmd(true), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.len() == 10));
    assert_eq!(&rows[0][..1], "0");
    assert_eq!(&rows[4][4..6], "99");
}
