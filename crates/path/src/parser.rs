//! A parser for the SVG path-data syntax.
//!
//! Supported commands are `M L H V Z C S Q T A` in their absolute (upper case)
//! and relative (lower case) forms. Numbers are an optional `-` followed by digits
//! with at most one decimal separator, and do not need to be separated from each
//! other when the next one starts with `-` or `.` (`"0-1"` reads as `0` and `-1`).
//! Exponents are not supported.

use crate::math::{point, vector, Point};
use crate::{ArcFlags, Segment};

use std::fmt;
use thiserror::Error;

/// What went wrong while parsing, see [`ParseError`](struct.ParseError.html).
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    #[error("unrecognized command {0:?}")]
    UnknownCommand(char),
    #[error("expected number, got {0:?}")]
    InvalidNumber(String),
    #[error("expected a command")]
    MissingCommand,
}

/// A parse failure, with enough of the input to point at the problem.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    src: String,
    index: usize,
    kind: ParseErrorKind,
    context_chars: usize,
}

impl ParseError {
    pub fn new(src: &str, index: usize, kind: ParseErrorKind) -> Self {
        ParseError {
            src: src.to_string(),
            index,
            kind,
            context_chars: ParserOptions::DEFAULT.context_chars,
        }
    }

    /// The entire string that failed to parse.
    pub fn source_str(&self) -> &str {
        &self.src
    }

    /// Byte offset of the offending character in the source string.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the input around the failure, up to `chars` characters on each side.
    ///
    /// The offending character is wrapped as `¡x!` and `…` marks the places where
    /// the input was cut.
    pub fn context(&self, chars: usize) -> String {
        let (head, tail) = self.src.split_at(self.index);
        let mut result = String::new();

        let head_len = head.chars().count();
        if head_len > chars {
            result.push('…');
            result.extend(head.chars().skip(head_len - chars));
        } else {
            result.push_str(head);
        }

        let mut tail = tail.chars();
        result.push('¡');
        if let Some(c) = tail.next() {
            result.push(c);
        }
        result.push('!');

        let rest = tail.as_str();
        if rest.chars().count() > chars {
            result.extend(rest.chars().take(chars));
            result.push('…');
        } else {
            result.push_str(rest);
        }

        result
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at index {}: {}: {}",
            self.index,
            self.context(self.context_chars),
            self.kind
        )
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Number of characters shown on each side of the failure in error messages.
    pub context_chars: usize,
    /// Treat coordinates implicitly following a move-to as line-to commands, like
    /// SVG renderers do. Otherwise every command, including move-to, repeats as
    /// itself.
    pub implicit_line_after_move: bool,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions {
        context_chars: 20,
        implicit_line_after_move: false,
    };

    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    pub fn with_implicit_line_after_move(mut self, enabled: bool) -> Self {
        self.implicit_line_after_move = enabled;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses a path with the default options.
pub fn parse_path(src: &str) -> Result<Vec<Segment>, ParseError> {
    parse_path_with_options(src, &ParserOptions::DEFAULT)
}

/// Parses a path into a sequence of segments with absolute coordinates.
///
/// Parsing is all-or-nothing, no segment is returned on failure.
pub fn parse_path_with_options(
    src: &str,
    options: &ParserOptions,
) -> Result<Vec<Segment>, ParseError> {
    let mut parser = PathParser::new(src, options);
    let mut segments = Vec::new();
    while let Some(segment) = parser.next_segment()? {
        segments.push(segment);
    }

    Ok(segments)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    Close,
    Quadratic,
    SmoothQuadratic,
    Cubic,
    SmoothCubic,
    Arc,
}

impl Command {
    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_lowercase() {
            'm' => Command::Move,
            'l' => Command::Line,
            'h' => Command::HorizontalLine,
            'v' => Command::VerticalLine,
            'z' => Command::Close,
            'q' => Command::Quadratic,
            't' => Command::SmoothQuadratic,
            'c' => Command::Cubic,
            's' => Command::SmoothCubic,
            'a' => Command::Arc,
            _ => {
                return None;
            }
        })
    }

    /// Number of numeric arguments the command reads.
    fn arity(self) -> usize {
        match self {
            Command::Close => 0,
            Command::HorizontalLine | Command::VerticalLine => 1,
            Command::Move | Command::Line | Command::SmoothQuadratic => 2,
            Command::Quadratic | Command::SmoothCubic => 4,
            Command::Cubic => 6,
            Command::Arc => 7,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CurveKind {
    Quadratic,
    Cubic,
}

const MAX_ARGS: usize = 7;

struct PathParser<'l> {
    src: &'l str,
    position: usize,
    options: &'l ParserOptions,
    // The active command and whether it is relative.
    command: Option<(Command, bool)>,
    args: [f64; MAX_ARGS],
    current_position: Point,
    first_position: Point,
    // Last control point of the previous segment, if it was a bézier curve.
    last_ctrl: Option<(CurveKind, Point)>,
}

impl<'l> PathParser<'l> {
    fn new(src: &'l str, options: &'l ParserOptions) -> Self {
        PathParser {
            src,
            position: 0,
            options,
            command: None,
            args: [0.0; MAX_ARGS],
            current_position: point(0.0, 0.0),
            first_position: point(0.0, 0.0),
            last_ctrl: None,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.position..].chars().next()
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() && c != ',' {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    fn error(&self, index: usize, kind: ParseErrorKind) -> ParseError {
        ParseError {
            src: self.src.to_string(),
            index,
            kind,
            context_chars: self.options.context_chars,
        }
    }

    fn next_segment(&mut self) -> Result<Option<Segment>, ParseError> {
        self.skip_separators();

        let cmd_position = self.position;
        let current = match self.peek() {
            Some(c) => c,
            None => {
                return Ok(None);
            }
        };

        let (command, is_relative) = if current.is_alphabetic() {
            let command = Command::from_letter(current)
                .ok_or_else(|| self.error(cmd_position, ParseErrorKind::UnknownCommand(current)))?;
            self.position += current.len_utf8();
            (command, current.is_lowercase())
        } else {
            match self.command {
                None | Some((Command::Close, _)) => {
                    return Err(self.error(cmd_position, ParseErrorKind::MissingCommand));
                }
                Some((Command::Move, is_relative)) if self.options.implicit_line_after_move => {
                    (Command::Line, is_relative)
                }
                Some(cmd) => cmd,
            }
        };
        self.command = Some((command, is_relative));

        for i in 0..command.arity() {
            self.args[i] = self.parse_number()?;
        }

        Ok(Some(self.make_segment(command, is_relative)))
    }

    fn parse_number(&mut self) -> Result<f64, ParseError> {
        self.skip_separators();

        let start = self.position;
        let bytes = self.src.as_bytes();
        let mut end = start;

        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        while bytes.get(end).map_or(false, u8::is_ascii_digit) {
            end += 1;
        }
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            while bytes.get(end).map_or(false, u8::is_ascii_digit) {
                end += 1;
            }
        }

        let token = &self.src[start..end];
        match token.parse::<f64>() {
            Ok(value) => {
                self.position = end;
                Ok(value)
            }
            Err(_) => {
                // Nothing looked like a number, show what was found instead.
                let found = if token.is_empty() {
                    self.peek().map(String::from).unwrap_or_default()
                } else {
                    token.to_string()
                };
                Err(self.error(start, ParseErrorKind::InvalidNumber(found)))
            }
        }
    }

    fn resolve(&self, is_relative: bool, x: f64, y: f64) -> Point {
        if is_relative {
            self.current_position + vector(x, y)
        } else {
            point(x, y)
        }
    }

    // Reflection of the previous curve's last control point about the current
    // position, or the current position if the previous segment is not a curve
    // of the same kind.
    fn smooth_ctrl(&self, kind: CurveKind) -> Point {
        match self.last_ctrl {
            Some((prev_kind, ctrl)) if prev_kind == kind => {
                self.current_position + (self.current_position - ctrl)
            }
            _ => self.current_position,
        }
    }

    fn make_segment(&mut self, command: Command, is_relative: bool) -> Segment {
        let a = self.args;
        let segment = match command {
            Command::Move => {
                let to = self.resolve(is_relative, a[0], a[1]);
                self.first_position = to;
                Segment::Move { to }
            }
            Command::Line => Segment::Line {
                to: self.resolve(is_relative, a[0], a[1]),
            },
            Command::HorizontalLine => {
                let mut x = a[0];
                if is_relative {
                    x += self.current_position.x;
                }
                Segment::Line {
                    to: point(x, self.current_position.y),
                }
            }
            Command::VerticalLine => {
                let mut y = a[0];
                if is_relative {
                    y += self.current_position.y;
                }
                Segment::Line {
                    to: point(self.current_position.x, y),
                }
            }
            Command::Close => Segment::Close {
                to: self.first_position,
            },
            Command::Quadratic => Segment::Quadratic {
                ctrl: self.resolve(is_relative, a[0], a[1]),
                to: self.resolve(is_relative, a[2], a[3]),
            },
            Command::SmoothQuadratic => Segment::Quadratic {
                ctrl: self.smooth_ctrl(CurveKind::Quadratic),
                to: self.resolve(is_relative, a[0], a[1]),
            },
            Command::Cubic => Segment::Cubic {
                ctrl1: self.resolve(is_relative, a[0], a[1]),
                ctrl2: self.resolve(is_relative, a[2], a[3]),
                to: self.resolve(is_relative, a[4], a[5]),
            },
            Command::SmoothCubic => Segment::Cubic {
                ctrl1: self.smooth_ctrl(CurveKind::Cubic),
                ctrl2: self.resolve(is_relative, a[0], a[1]),
                to: self.resolve(is_relative, a[2], a[3]),
            },
            Command::Arc => Segment::Arc {
                radii: vector(a[0], a[1]),
                x_rotation: a[2],
                flags: ArcFlags {
                    large_arc: a[3] != 0.0,
                    sweep: a[4] != 0.0,
                },
                to: self.resolve(is_relative, a[5], a[6]),
            },
        };

        self.current_position = segment.to();
        self.last_ctrl = match segment {
            Segment::Quadratic { ctrl, .. } => Some((CurveKind::Quadratic, ctrl)),
            Segment::Cubic { ctrl2, .. } => Some((CurveKind::Cubic, ctrl2)),
            _ => None,
        };

        segment
    }
}

#[test]
fn empty() {
    assert_eq!(parse_path(""), Ok(Vec::new()));
    assert_eq!(parse_path("  , \n"), Ok(Vec::new()));
}

#[test]
fn simple_path() {
    assert_eq!(
        parse_path("M1 2L2 3l0-1z"),
        Ok(vec![
            Segment::Move { to: point(1.0, 2.0) },
            Segment::Line { to: point(2.0, 3.0) },
            Segment::Line { to: point(2.0, 2.0) },
            Segment::Close { to: point(1.0, 2.0) },
        ])
    );
}

#[test]
fn relative_triangle() {
    assert_eq!(
        parse_path("m33 33h33l-16.7 33z"),
        Ok(vec![
            Segment::Move { to: point(33.0, 33.0) },
            Segment::Line { to: point(66.0, 33.0) },
            Segment::Line { to: point(49.3, 66.0) },
            Segment::Close { to: point(33.0, 33.0) },
        ])
    );
}

#[test]
fn horizontal_and_vertical() {
    assert_eq!(
        parse_path("M 1 1 H 5 V 7 h -2 v -3"),
        Ok(vec![
            Segment::Move { to: point(1.0, 1.0) },
            Segment::Line { to: point(5.0, 1.0) },
            Segment::Line { to: point(5.0, 7.0) },
            Segment::Line { to: point(3.0, 7.0) },
            Segment::Line { to: point(3.0, 4.0) },
        ])
    );
}

#[test]
fn implicit_repetition() {
    assert_eq!(
        parse_path("M 0 0 L 1 1 2 2, 3 3"),
        Ok(vec![
            Segment::Move { to: point(0.0, 0.0) },
            Segment::Line { to: point(1.0, 1.0) },
            Segment::Line { to: point(2.0, 2.0) },
            Segment::Line { to: point(3.0, 3.0) },
        ])
    );

    // Repeated relative commands resolve against the updated pen position.
    assert_eq!(
        parse_path("m 1 1 l 1 0 0 1"),
        Ok(vec![
            Segment::Move { to: point(1.0, 1.0) },
            Segment::Line { to: point(2.0, 1.0) },
            Segment::Line { to: point(2.0, 2.0) },
        ])
    );
}

#[test]
fn implicit_move() {
    assert_eq!(
        parse_path("M 0 0 5 5"),
        Ok(vec![
            Segment::Move { to: point(0.0, 0.0) },
            Segment::Move { to: point(5.0, 5.0) },
        ])
    );

    let options = ParserOptions::DEFAULT.with_implicit_line_after_move(true);
    assert_eq!(
        parse_path_with_options("m 1 1 2 2 3 3", &options),
        Ok(vec![
            Segment::Move { to: point(1.0, 1.0) },
            Segment::Line { to: point(3.0, 3.0) },
            Segment::Line { to: point(6.0, 6.0) },
        ])
    );
}

#[test]
fn numbers() {
    assert_eq!(
        parse_path("M0-1L.5.25L-.5-1.5L3.,4"),
        Ok(vec![
            Segment::Move { to: point(0.0, -1.0) },
            Segment::Line { to: point(0.5, 0.25) },
            Segment::Line { to: point(-0.5, -1.5) },
            Segment::Line { to: point(3.0, 4.0) },
        ])
    );

    // A second decimal separator starts a new number.
    assert_eq!(
        parse_path("M 0.6.5"),
        Ok(vec![Segment::Move { to: point(0.6, 0.5) }])
    );
}

#[test]
fn smooth_quadratic() {
    let segments = parse_path("Q10 10 20 20T30 30").unwrap();
    assert_eq!(
        segments,
        vec![
            Segment::Quadratic {
                ctrl: point(10.0, 10.0),
                to: point(20.0, 20.0),
            },
            Segment::Quadratic {
                ctrl: point(30.0, 30.0),
                to: point(30.0, 30.0),
            },
        ]
    );

    // Chained smooth curves keep reflecting.
    let segments = parse_path("M0 0Q1 2 2 0T4 0T6 0").unwrap();
    assert_eq!(
        segments[2],
        Segment::Quadratic {
            ctrl: point(3.0, -2.0),
            to: point(4.0, 0.0),
        }
    );
    assert_eq!(
        segments[3],
        Segment::Quadratic {
            ctrl: point(5.0, 2.0),
            to: point(6.0, 0.0),
        }
    );
}

#[test]
fn smooth_without_previous_curve() {
    // The implied control point is the pen position when the previous segment
    // is not a curve of the matching kind.
    assert_eq!(
        parse_path("M 5 5 T 10 10")
            .unwrap()
            .last()
            .cloned(),
        Some(Segment::Quadratic {
            ctrl: point(5.0, 5.0),
            to: point(10.0, 10.0),
        })
    );
    assert_eq!(
        parse_path("M 0 0 Q 1 1 2 0 S 3 3 4 0")
            .unwrap()
            .last()
            .cloned(),
        Some(Segment::Cubic {
            ctrl1: point(2.0, 0.0),
            ctrl2: point(3.0, 3.0),
            to: point(4.0, 0.0),
        })
    );
    assert_eq!(
        parse_path("M 0 0 C 0 1 1 1 1 0 T 2 0")
            .unwrap()
            .last()
            .cloned(),
        Some(Segment::Quadratic {
            ctrl: point(1.0, 0.0),
            to: point(2.0, 0.0),
        })
    );
}

#[test]
fn smooth_cubic() {
    assert_eq!(
        parse_path("M 0 0 C 0 1 1 2 2 2 s 2 -1 2 -2"),
        Ok(vec![
            Segment::Move { to: point(0.0, 0.0) },
            Segment::Cubic {
                ctrl1: point(0.0, 1.0),
                ctrl2: point(1.0, 2.0),
                to: point(2.0, 2.0),
            },
            Segment::Cubic {
                ctrl1: point(3.0, 2.0),
                ctrl2: point(4.0, 1.0),
                to: point(4.0, 0.0),
            },
        ])
    );
}

#[test]
fn relative_curves() {
    assert_eq!(
        parse_path("M 10 10 c 1 1 2 2 3 3 q 1 0 2 2"),
        Ok(vec![
            Segment::Move { to: point(10.0, 10.0) },
            Segment::Cubic {
                ctrl1: point(11.0, 11.0),
                ctrl2: point(12.0, 12.0),
                to: point(13.0, 13.0),
            },
            Segment::Quadratic {
                ctrl: point(14.0, 13.0),
                to: point(15.0, 15.0),
            },
        ])
    );
}

#[test]
fn arcs() {
    assert_eq!(
        parse_path("M 1 1 a 5 6 30 1 0 10 0 A 2 2 0 0 1 0 0"),
        Ok(vec![
            Segment::Move { to: point(1.0, 1.0) },
            Segment::Arc {
                radii: vector(5.0, 6.0),
                x_rotation: 30.0,
                flags: ArcFlags {
                    large_arc: true,
                    sweep: false,
                },
                to: point(11.0, 1.0),
            },
            Segment::Arc {
                radii: vector(2.0, 2.0),
                x_rotation: 0.0,
                flags: ArcFlags {
                    large_arc: false,
                    sweep: true,
                },
                to: point(0.0, 0.0),
            },
        ])
    );
}

#[test]
fn close_moves_the_pen() {
    assert_eq!(
        parse_path("m 0 0 l 10 0 l 0 10 z l 5 5 Z"),
        Ok(vec![
            Segment::Move { to: point(0.0, 0.0) },
            Segment::Line { to: point(10.0, 0.0) },
            Segment::Line { to: point(10.0, 10.0) },
            Segment::Close { to: point(0.0, 0.0) },
            Segment::Line { to: point(5.0, 5.0) },
            Segment::Close { to: point(0.0, 0.0) },
        ])
    );
}

#[test]
fn long_path() {
    let src = "m190.85 451.25c11.661 14.719 32.323 24.491 55.844 24.491 36.401 0 65.889-23.372 \
               65.889-52.214s-29.488-52.214-65.889-52.214c-20.314 4.1522-28.593 9.0007-33.143-2.9091z\
               m328.1-89.88c0 17.852 14.471 32.323 32.323 32.323s32.323-14.471 32.323-32.323z";
    let segments = parse_path(src).unwrap();
    assert_eq!(segments.len(), 10);
    assert_eq!(segments[0], Segment::Move { to: point(190.85, 451.25) });
    assert_eq!(segments[5], Segment::Close { to: point(190.85, 451.25) });
    match segments[6] {
        Segment::Move { to } => {
            assert!((to.x - 518.95).abs() < 1e-9);
            assert!((to.y - 361.37).abs() < 1e-9);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn unknown_command() {
    let err = parse_path("M 0 0 x 1 1").unwrap_err();
    assert_eq!(err.index(), 6);
    assert_eq!(err.kind(), &ParseErrorKind::UnknownCommand('x'));

    // Exponents are not supported.
    let err = parse_path("M 1 0e5").unwrap_err();
    assert_eq!(err.index(), 5);
    assert_eq!(err.kind(), &ParseErrorKind::UnknownCommand('e'));

    let err = parse_path("M 1e5 0").unwrap_err();
    assert_eq!(err.index(), 3);
    assert_eq!(err.kind(), &ParseErrorKind::InvalidNumber("e".to_string()));
}

#[test]
fn missing_command() {
    let err = parse_path("  1 2").unwrap_err();
    assert_eq!(err.index(), 2);
    assert_eq!(err.kind(), &ParseErrorKind::MissingCommand);

    let err = parse_path("M 0 0 z 1 1").unwrap_err();
    assert_eq!(err.index(), 8);
    assert_eq!(err.kind(), &ParseErrorKind::MissingCommand);
}

#[test]
fn bad_numbers() {
    let err = parse_path("M1 2L3 -").unwrap_err();
    assert_eq!(err.index(), 7);
    assert_eq!(err.kind(), &ParseErrorKind::InvalidNumber("-".to_string()));

    let err = parse_path("M 1").unwrap_err();
    assert_eq!(err.index(), 3);
    assert_eq!(err.kind(), &ParseErrorKind::InvalidNumber(String::new()));

    let err = parse_path("M 0 --1").unwrap_err();
    assert_eq!(err.index(), 4);

    let err = parse_path("M 0 +1").unwrap_err();
    assert_eq!(err.index(), 4);
    assert_eq!(err.kind(), &ParseErrorKind::InvalidNumber("+".to_string()));

    let err = parse_path("C 0 0 1 1 2").unwrap_err();
    assert_eq!(err.index(), 11);
}

#[test]
fn error_offset_in_source_string() {
    let err = parse_path("M 0 0 L 1 1 L 2 2 2 2 L 3 *").unwrap_err();
    assert_eq!(err.index(), 26);
    assert_eq!(&err.source_str()[err.index()..], "*");
}

#[test]
fn error_context() {
    let err = parse_path("M1 2L3 -").unwrap_err();
    assert_eq!(err.context(3), "…L3 ¡-!");
    assert_eq!(err.context(20), "M1 2L3 ¡-!");

    let err = parse_path("M 0 0 x 1 1 2 2").unwrap_err();
    assert_eq!(err.context(2), "…0 ¡x! 1…");
    assert_eq!(err.context(100), "M 0 0 ¡x! 1 1 2 2");

    let err = parse_path("M 1").unwrap_err();
    assert_eq!(err.context(2), "… 1¡!");

    // Context is measured in characters, not bytes.
    let err = parse_path("M 0\u{a0}0é").unwrap_err();
    assert_eq!(err.index(), 6);
    assert_eq!(err.context(1), "…0¡é!");
}

#[test]
fn error_display() {
    let err = parse_path("M 0 0 x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error at index 6: M 0 0 ¡x!: unrecognized command 'x'"
    );

    let options = ParserOptions::DEFAULT.with_context_chars(2);
    let err = parse_path_with_options("M 0 0 L 1 1 Q", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error at index 13: … Q¡!: expected number, got \"\""
    );
}

#[test]
fn error_built_by_hand() {
    let err = ParseError::new("M 0 0 x", 6, ParseErrorKind::UnknownCommand('x'));
    assert_eq!(err.index(), 6);
    assert_eq!(err.source_str(), "M 0 0 x");
    assert_eq!(err.kind(), &ParseErrorKind::UnknownCommand('x'));
    assert_eq!(err, parse_path("M 0 0 x").unwrap_err());
}
