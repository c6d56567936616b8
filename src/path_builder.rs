//! Representation of parsed path data, and the walk that turns it into line segments.
//!
//! * The path parser pushes commands into a [`PathBuilder`].  This is a mutable,
//! temporary storage for path data.
//!
//! * Then, the [`PathBuilder`] gets turned into a long-term, immutable [`Path`].  A
//! `Path` can be hit-tested against any number of points without parsing the path
//! data again.
//!
//! Commands are stored exactly as they were written, with relative coordinates still
//! relative.  The pen position is only tracked when walking the path with
//! [`Path::segments`], so that a path is a faithful record of its source data.
//!
//! Most region outlines have fewer than 32 commands, so the builder keeps them in a
//! [`TinyVec`] that only spills to the heap for larger paths.

use tinyvec::TinyVec;

use std::slice;

use crate::geometry::{Point, Segment};
use crate::path_parser::PathParser;

/// Whether a command's coordinates are absolute, or relative to the current pen position.
///
/// Uppercase command letters are absolute; lowercase ones are relative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Coordinates {
    Absolute,
    Relative,
}

impl Coordinates {
    pub fn from_letter(letter: u8) -> Coordinates {
        if letter.is_ascii_uppercase() {
            Coordinates::Absolute
        } else {
            Coordinates::Relative
        }
    }
}

/// The SVG curve commands, which are recognized but not traced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CurveKind {
    /// `C`/`c`
    Cubic,
    /// `S`/`s`
    SmoothCubic,
    /// `Q`/`q`
    Quadratic,
    /// `T`/`t`
    SmoothQuadratic,
    /// `A`/`a`
    Arc,
}

impl CurveKind {
    /// Maps a command letter to its curve kind, ignoring case.
    pub fn from_letter(letter: u8) -> Option<CurveKind> {
        match letter.to_ascii_uppercase() {
            b'C' => Some(CurveKind::Cubic),
            b'S' => Some(CurveKind::SmoothCubic),
            b'Q' => Some(CurveKind::Quadratic),
            b'T' => Some(CurveKind::SmoothQuadratic),
            b'A' => Some(CurveKind::Arc),
            _ => None,
        }
    }

    /// Number of operands taken by one repetition of the command.
    ///
    /// The last two operands are always the end point of the curve.
    pub fn num_operands(self) -> usize {
        match self {
            CurveKind::Cubic => 6,
            CurveKind::SmoothCubic => 4,
            CurveKind::Quadratic => 4,
            CurveKind::SmoothQuadratic => 2,
            CurveKind::Arc => 7,
        }
    }
}

/// What to do with curve commands, which hit testing does not trace.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum CurveHandling {
    /// Skip only the command letter.
    ///
    /// The curve's operands are then read by whichever command came before it, which
    /// usually misplaces the rest of the path.  This reproduces what older versions of
    /// the hit tester did.
    Legacy,

    /// Consume the curve's operands and move the pen to its end point, without tracing
    /// anything.  Regions that contain curves are left open where the curves are.
    #[default]
    SkipOperands,

    /// Like `SkipOperands`, but trace a straight line from the start of the curve to its
    /// end point.
    Chord,
}

/// A single command from path data.
///
/// Numeric operands that could not be parsed are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M`/`m`: start a new subpath.
    MoveTo(Coordinates, f64, f64),
    /// `L`/`l`
    LineTo(Coordinates, f64, f64),
    /// `H`/`h`: only the x coordinate changes.
    HorizontalLineTo(Coordinates, f64),
    /// `V`/`v`: only the y coordinate changes.
    VerticalLineTo(Coordinates, f64),
    /// `Z`/`z`: line back to the start of the subpath.
    ClosePath,
    /// A curve whose operands were consumed; only its end point is kept.
    Curve(CurveKind, Coordinates, f64, f64),
    /// A command letter that was skipped without consuming operands.
    Skipped(u8),
}

// TinyVec requires its item type to implement Default.  There is no default path
// command in SVG; this is only an implementation detail.
impl Default for PathCommand {
    fn default() -> PathCommand {
        PathCommand::ClosePath
    }
}

/// Constructs a path out of commands.
///
/// Create this with `PathBuilder::default`; you can then add commands to it or call the
/// `parse` method.  When you are finished, turn it into a `Path` with `into_path`.
#[derive(Default)]
pub struct PathBuilder {
    path_commands: TinyVec<[PathCommand; 32]>,
    curves: CurveHandling,
}

impl PathBuilder {
    pub fn new(curves: CurveHandling) -> PathBuilder {
        PathBuilder {
            path_commands: TinyVec::default(),
            curves,
        }
    }

    /// Parses path data and appends its commands.
    ///
    /// This never fails; see the [`crate::path_parser`] module for how malformed data
    /// is handled.
    pub fn parse(&mut self, path_str: &str) {
        let curves = self.curves;
        let mut parser = PathParser::new(self, path_str, curves);
        parser.parse();
    }

    pub fn push(&mut self, command: PathCommand) {
        self.path_commands.push(command);
    }

    /// Consumes the `PathBuilder` and returns an immutable `Path`.
    pub fn into_path(self) -> Path {
        Path {
            commands: self.path_commands.iter().copied().collect(),
            curves: self.curves,
        }
    }
}

/// An immutable, parsed path.
///
/// This struct implements `Default`, and it yields an empty path.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Path {
    commands: Box<[PathCommand]>,
    curves: CurveHandling,
}

impl Path {
    /// Parses path data with the default [`CurveHandling`].
    pub fn parse(path_str: &str) -> Path {
        Path::parse_with_curves(path_str, CurveHandling::default())
    }

    pub fn parse_with_curves(path_str: &str, curves: CurveHandling) -> Path {
        let mut builder = PathBuilder::new(curves);
        builder.parse(path_str);
        builder.into_path()
    }

    /// Returns an iterator over the path's commands, in source order.
    pub fn iter(&self) -> slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn curve_handling(&self) -> CurveHandling {
        self.curves
    }

    /// Number of commands that did not contribute to the outline.
    pub fn num_untraced(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| match cmd {
                PathCommand::Skipped(_) => true,
                PathCommand::Curve(..) => self.curves != CurveHandling::Chord,
                _ => false,
            })
            .count()
    }

    /// Walks the path and yields the line segments that it draws.
    ///
    /// Each `ClosePath` yields a segment back to the start of the current subpath, even
    /// if the pen is already there.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            commands: self.commands.iter(),
            emit_chords: self.curves == CurveHandling::Chord,
            pen: Point::default(),
            subpath_start: Point::default(),
        }
    }
}

/// Iterator over the line segments of a [`Path`].
///
/// Created with [`Path::segments`].
pub struct Segments<'a> {
    commands: slice::Iter<'a, PathCommand>,
    emit_chords: bool,

    // Current point; adjusted at every command
    pen: Point,

    // Start point of current subpath (i.e. position of last moveto);
    // used for closepath.
    subpath_start: Point,
}

impl Segments<'_> {
    fn resolve(&self, coords: Coordinates, x: f64, y: f64) -> Point {
        match coords {
            Coordinates::Absolute => Point::new(x, y),
            Coordinates::Relative => Point::new(self.pen.x + x, self.pen.y + y),
        }
    }

    fn line_to(&mut self, to: Point) -> Segment {
        let segment = Segment::new(self.pen, to);
        self.pen = to;
        segment
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            match *self.commands.next()? {
                PathCommand::MoveTo(coords, x, y) => {
                    self.pen = self.resolve(coords, x, y);
                    self.subpath_start = self.pen;
                }

                PathCommand::LineTo(coords, x, y) => {
                    let to = self.resolve(coords, x, y);
                    return Some(self.line_to(to));
                }

                PathCommand::HorizontalLineTo(coords, x) => {
                    let to = Point::new(self.resolve(coords, x, 0.0).x, self.pen.y);
                    return Some(self.line_to(to));
                }

                PathCommand::VerticalLineTo(coords, y) => {
                    let to = Point::new(self.pen.x, self.resolve(coords, 0.0, y).y);
                    return Some(self.line_to(to));
                }

                PathCommand::ClosePath => {
                    let start = self.subpath_start;
                    return Some(self.line_to(start));
                }

                PathCommand::Curve(_, coords, x, y) => {
                    let to = self.resolve(coords, x, y);
                    if self.emit_chords {
                        return Some(self.line_to(to));
                    }
                    self.pen = to;
                }

                PathCommand::Skipped(_) => (),
            }
        }
    }
}
