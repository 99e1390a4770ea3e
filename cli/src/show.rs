use crate::commands::{BoundsCmd, CliError, NormalizeCmd};
use pathmask::algorithms::path_bounds;
use pathmask::path::{approximate_arcs, to_svg_string};
use std::io::Write;

pub fn bounds(cmd: BoundsCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let bounds = path_bounds(&cmd.segments);
    if bounds.is_empty() {
        writeln!(output, "empty")?;
        return Ok(());
    }

    writeln!(
        output,
        "{} {} {} {}",
        bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
    )?;

    Ok(())
}

pub fn normalize(cmd: NormalizeCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let svg = if cmd.approximate_arcs {
        to_svg_string(&approximate_arcs(&cmd.segments))
    } else {
        to_svg_string(&cmd.segments)
    };
    writeln!(output, "{}", svg)?;

    Ok(())
}

#[test]
fn print_bounds() {
    use pathmask::path::parse_path;

    let mut out = Vec::new();
    let segments = parse_path("M1 2L-3 4.5").unwrap();
    bounds(BoundsCmd { segments }, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "-3 2 1 4.5\n");

    let mut out = Vec::new();
    bounds(BoundsCmd { segments: Vec::new() }, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "empty\n");
}

#[test]
fn print_normalized() {
    use pathmask::path::parse_path;

    let mut out = Vec::new();
    let segments = parse_path("m1 1h2v2z").unwrap();
    normalize(
        NormalizeCmd {
            segments,
            approximate_arcs: false,
        },
        &mut out,
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "M 1 1 L 3 1 L 3 3 Z\n");

    let mut out = Vec::new();
    let segments = parse_path("M0 0A1 1 0 0 1 2 0").unwrap();
    normalize(
        NormalizeCmd {
            segments,
            approximate_arcs: true,
        },
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("M 0 0 Q "));
    assert!(text.trim_end().ends_with(" 2 0"));
}
