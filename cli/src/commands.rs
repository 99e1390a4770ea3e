use pathmask::path::{ParseError, Segment};
use std::io;
use thiserror::Error;

pub struct BoundsCmd {
    pub segments: Vec<Segment>,
}

pub struct NormalizeCmd {
    pub segments: Vec<Segment>,
    pub approximate_arcs: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One digit per pixel, the coverage in tenths.
    Ascii,
    /// Binary portable graymap.
    Pgm,
}

pub struct RenderCmd {
    pub segments: Vec<Segment>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub anti_alias: bool,
    pub approximate_arcs: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error("no input, pass a path or --input FILE")]
    NoInput,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid value for --{name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },
    #[error("the path has no extent along one axis, pass both --width and --height")]
    DegenerateBounds,
    #[error(transparent)]
    Io(#[from] io::Error),
}
