//! Parser for SVG path data.
//!
//! This is a tolerant parser: it never returns an error.  Path data for map regions
//! often comes from hand-edited or machine-exported files, and a hit test on slightly
//! broken data is still useful for deciding which region a finger landed on.
//!
//! * Whitespace and commas separate tokens.  Bytes that cannot start a token are
//! skipped.
//!
//! * Every ASCII letter is a command token; numbers follow the SVG grammar for
//! coordinates.  Numeric text that does not parse as a float (like `1e` or a lone
//! `-`) yields NaN when it is consumed as an operand.
//!
//! * An operand that is missing, because the data ends or because a command letter
//! appears where a number was expected, is NaN.  The letter is not consumed.
//!
//! * Operands after a command's own operands repeat the command; after a moveto, they
//! are implicit linetos.  Numbers with no command to repeat are dropped.
//!
//! * The two flags of an elliptical arc are single `0` or `1` characters and need no
//! separators, so `A5 5 0 01 10 10` has a large-arc flag of 0 and a sweep flag of 1.

use std::iter::Enumerate;
use std::str::Bytes;

use crate::path_builder::*;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Token<'a> {
    // pub to allow benchmarking
    /// The text of a numeric literal; it is parsed only when consumed.
    Number(&'a str),
    Flag(bool),
    Command(u8),
}

use crate::path_parser::Token::{Command, Flag, Number};

#[derive(Debug)]
pub struct Lexer<'a> {
    // pub to allow benchmarking
    input: &'a str,
    ci: Enumerate<Bytes<'a>>,
    current: Option<(usize, u8)>,
    flags_required: u8,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        let mut ci = input.bytes().enumerate();
        let current = ci.next();
        Lexer {
            input,
            ci,
            current,
            flags_required: 0,
        }
    }

    // Digits are numbers unless the parser has just read the x-axis rotation of an
    // arc.  It calls this before advancing past the rotation, and the lexer then
    // returns the next two '0' or '1' characters as Flag tokens.  Anything else in
    // their place goes back to the usual lexing.
    pub fn require_flags(&mut self) {
        self.flags_required = 2;
    }

    fn current_pos(&self) -> usize {
        match self.current {
            None => self.input.len(),
            Some((pos, _)) => pos,
        }
    }

    fn advance(&mut self) {
        self.current = self.ci.next();
    }

    fn advance_over_separators(&mut self) {
        while let Some((_, c)) = self.current {
            if c.is_ascii_whitespace() || c == b',' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn advance_over_optional(&mut self, needle: u8) -> bool {
        match self.current {
            Some((_, c)) if c == needle => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn advance_over_digits(&mut self) {
        while let Some((_, c)) = self.current {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
    }

    // A number is [+-]? digits? ('.' digits?)? ([eE] [+-]? digits?)?, matched greedily.
    // A second '.' or a sign after the first character starts the next number, so
    // "M.1.2" and "M1-2" are both two numbers.
    fn match_number(&mut self, start_pos: usize) -> Token<'a> {
        let _ = self.advance_over_optional(b'-') || self.advance_over_optional(b'+');
        self.advance_over_digits();
        if self.advance_over_optional(b'.') {
            self.advance_over_digits();
        }
        if self.advance_over_optional(b'e') || self.advance_over_optional(b'E') {
            let _ = self.advance_over_optional(b'-') || self.advance_over_optional(b'+');
            self.advance_over_digits();
        }

        // All the bytes in a number are ASCII, so both ends are on char boundaries.
        Number(&self.input[start_pos..self.current_pos()])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.advance_over_separators();

            match self.current {
                // alphabetic chars are commands
                Some((pos, c)) if c.is_ascii_alphabetic() => {
                    self.flags_required = 0;
                    self.advance();
                    return Some((pos, Command(c)));
                }

                Some((pos, c)) if self.flags_required > 0 && (c == b'0' || c == b'1') => {
                    self.flags_required -= 1;
                    self.advance();
                    return Some((pos, Flag(c == b'1')));
                }

                Some((pos, c)) if c.is_ascii_digit() || c == b'-' || c == b'+' || c == b'.' => {
                    self.flags_required = 0;
                    return Some((pos, self.match_number(pos)));
                }

                // anything else is garbage; skip it
                Some(_) => self.advance(),

                None => return None,
            }
        }
    }
}

/// A command that is repeated when bare operands follow it.
#[derive(Debug, Copy, Clone)]
enum Repeat {
    LineTo(Coordinates),
    HorizontalLineTo(Coordinates),
    VerticalLineTo(Coordinates),
    Curve(CurveKind, Coordinates),
}

pub struct PathParser<'b> {
    tokens: Lexer<'b>,
    current_token: Option<Token<'b>>,

    builder: &'b mut PathBuilder,
    curves: CurveHandling,

    // Command to repeat when a number shows up where a command letter was expected.
    repeat: Option<Repeat>,
}

// This is a single-pass interpreter over the token stream, following the command
// grammar in https://www.w3.org/TR/SVG/paths.html#PathDataBNF loosely enough that it
// never has to give up.  Like the SVG grammar, it allows optional commas and
// whitespace anywhere between operands.  These are equivalent:
//
//     M 10 20 30 40
//     M 10, 20 30, 40
//     M10,20,30,40
//
// as are these:
//
//     M-10,20-30-40
//     M -10 20 -30 -40
//
//     M.1-2,3E2-4
//     M 0.1 -2 300 -4
impl<'b> PathParser<'b> {
    pub fn new(
        builder: &'b mut PathBuilder,
        path_str: &'b str,
        curves: CurveHandling,
    ) -> PathParser<'b> {
        let mut lexer = Lexer::new(path_str);
        let current_token = lexer.next().map(|(_pos, token)| token);
        PathParser {
            tokens: lexer,
            current_token,
            builder,
            curves,
            repeat: None,
        }
    }

    fn advance(&mut self) {
        self.current_token = self.tokens.next().map(|(_pos, token)| token);
    }

    /// Consumes a number and returns its value, or NaN if the current token is not a
    /// valid number.  Command tokens are not consumed.
    fn operand(&mut self) -> f64 {
        match self.current_token {
            Some(Number(s)) => {
                self.advance();
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
            Some(Flag(f)) => {
                self.advance();
                if f {
                    1.0
                } else {
                    0.0
                }
            }
            _ => f64::NAN,
        }
    }

    /// Like `operand`, but the lexer is switched to flags before advancing, so that
    /// the two tokens after this one are read as arc flags.
    fn operand_before_flags(&mut self) -> f64 {
        match self.current_token {
            Some(Number(s)) => {
                self.tokens.require_flags();
                self.advance();
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
            _ => self.operand(),
        }
    }

    fn coordinate_pair(&mut self) -> (f64, f64) {
        let x = self.operand();
        let y = self.operand();
        (x, y)
    }

    /// Consumes the whole token stream, pushing commands into the builder.
    pub fn parse(&mut self) {
        while let Some(token) = self.current_token {
            match token {
                Command(c) => {
                    self.advance();
                    self.command(c);
                }

                Number(_) | Flag(_) => match self.repeat {
                    Some(repeat) => self.arguments(repeat),
                    None => self.advance(),
                },
            }
        }
    }

    fn command(&mut self, letter: u8) {
        let coords = Coordinates::from_letter(letter);

        match letter.to_ascii_uppercase() {
            b'M' => {
                let (x, y) = self.coordinate_pair();
                self.builder.push(PathCommand::MoveTo(coords, x, y));
                self.repeat = Some(Repeat::LineTo(coords));
            }

            b'L' => self.arguments(Repeat::LineTo(coords)),
            b'H' => self.arguments(Repeat::HorizontalLineTo(coords)),
            b'V' => self.arguments(Repeat::VerticalLineTo(coords)),

            b'Z' => {
                self.builder.push(PathCommand::ClosePath);
                self.repeat = None;
            }

            _ => match (CurveKind::from_letter(letter), self.curves) {
                (Some(kind), CurveHandling::SkipOperands | CurveHandling::Chord) => {
                    self.arguments(Repeat::Curve(kind, coords));
                }

                // Legacy handling skips the letter and keeps repeating the previous
                // command, both for curves and for letters that are not commands.
                (_, CurveHandling::Legacy) => {
                    self.builder.push(PathCommand::Skipped(letter));
                }

                (None, _) => {
                    self.builder.push(PathCommand::Skipped(letter));
                    self.repeat = None;
                }
            },
        }
    }

    /// Consumes one set of operands for `repeat` and pushes the resulting command.
    fn arguments(&mut self, repeat: Repeat) {
        let command = match repeat {
            Repeat::LineTo(coords) => {
                let (x, y) = self.coordinate_pair();
                PathCommand::LineTo(coords, x, y)
            }

            Repeat::HorizontalLineTo(coords) => {
                PathCommand::HorizontalLineTo(coords, self.operand())
            }

            Repeat::VerticalLineTo(coords) => PathCommand::VerticalLineTo(coords, self.operand()),

            Repeat::Curve(CurveKind::Arc, coords) => {
                // rx ry x-axis-rotation large-arc-flag sweep-flag x y
                let _radii = self.coordinate_pair();
                let _rotation = self.operand_before_flags();
                let _flags = self.coordinate_pair();
                let (x, y) = self.coordinate_pair();
                PathCommand::Curve(CurveKind::Arc, coords, x, y)
            }

            Repeat::Curve(kind, coords) => {
                // Control points, radii and flags are not needed; only the end point is.
                for _ in 0..kind.num_operands() - 2 {
                    let _ = self.operand();
                }
                let (x, y) = self.coordinate_pair();
                PathCommand::Curve(kind, coords, x, y)
            }
        };

        self.builder.push(command);
        self.repeat = Some(repeat);
    }
}
