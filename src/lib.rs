//! Hit testing for regions described by SVG path data.
//!
//! Given path data like `M0,0 L10,0 L10,10 L0,10 Z` and a point, this crate decides
//! whether the point is inside the region that the path outlines, and if not, how far
//! the point is from the region's boundary.  It is meant for tap handling on
//! interactive maps, where each region is an SVG path and a finger is rarely precise.
//!
//! # Supported path data
//!
//! Only straight lines are traced: the `M`, `L`, `H`, `V`, and `Z` commands, in both
//! their absolute (uppercase) and relative (lowercase) forms.  The curve commands `C`,
//! `S`, `Q`, `T`, and `A` are recognized but not traced; see [`CurveHandling`] for the
//! available approximations.
//!
//! Parsing never fails.  Malformed numbers are treated as NaN, unknown commands are
//! skipped, and segments with NaN coordinates do not take part in the test.
//!
//! # Basic usage
//!
//! ```
//! use svghit::{hit_test, is_inside};
//!
//! let square = "M0,0 L10,0 L10,10 L0,10 Z";
//!
//! assert!(is_inside(square, 5.0, 5.0));
//!
//! let miss = hit_test(square, 15.0, 5.0);
//! assert!(!miss.inside);
//! assert_eq!(miss.distance, 5.0);
//! ```
//!
//! To test many points against the same path, parse it once into a [`Path`]:
//!
//! ```
//! use svghit::{Path, Point};
//!
//! let path = Path::parse("M0,0 h10 v10 h-10 z");
//! assert!(path.contains(Point::new(1.0, 1.0)));
//! ```
//!
//! For a whole map, a [`RegionMap`] picks the region that a tap selects.
//!
//! # Logging
//!
//! Setting the `SVGHIT_LOG` environment variable makes [`RegionMap`] print what it
//! loads and which regions it selects.  The hit test itself never logs.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(nonstandard_style, rust_2018_idioms, unused)]
// Some lints no longer exist
#![warn(renamed_and_removed_lints)]
// Standalone lints
#![warn(trivial_casts, trivial_numeric_casts)]

pub use crate::error::LoadingError;
pub use crate::geometry::{Point, Segment};
pub use crate::hit_test::{
    hit_test, hit_test_segments, hit_test_with_options, is_inside, HitTestOptions,
    HitTestResult,
};
pub use crate::path_builder::{
    Coordinates, CurveHandling, CurveKind, Path, PathCommand, Segments,
};
pub use crate::regions::{RegionHit, RegionMap};
pub use crate::session::Session;

mod error;
mod geometry;
mod hit_test;
mod log;
mod path_builder;
mod path_parser;
mod regions;
mod session;

#[doc(hidden)]
pub mod bench_only {
    pub use crate::path_builder::PathBuilder;
    pub use crate::path_parser::{Lexer, Token};
}

#[doc(hidden)]
pub mod svghit_cli_only {
    pub use crate::log::LOG_ENV_VAR;
}
