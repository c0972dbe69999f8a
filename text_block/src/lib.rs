// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-broken, measured text that can be split to fit a width.
//!
//! This crate defines the [`TextBlock`] contract consumed by text formatters: an ordered
//! sequence of lines, each made of shaped segments, whose pixel extents can be measured
//! against an opaque metrics context and whose lines can be split in place at a target width.
//!
//! [`RunText`] is a reference implementation made of styled text runs, measured by any
//! [`Measure`] implementation such as [`Monospace`] or [`AdvanceTable`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! ## Example
//!
//! ```
//! use text_block::{Monospace, RunStyle, RunText, TextBlock};
//!
//! let measure = Monospace::new(10.0, 20.0);
//! let mut text = RunText::from_plain("hello world", RunStyle::default());
//! assert_eq!(text.line_extent(0, &measure).width, 110.0);
//!
//! let split = text.split_line(0, &measure, 60.0);
//! assert!(split.remainder && !split.forced);
//! assert_eq!(text.line_text(0), "hello");
//! assert_eq!(text.line_text(1), "world");
//! ```
//!
//! [libm]: https://crates.io/crates/libm
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("text_block requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod block;
mod error;
mod measure;
mod run;
mod run_text;

pub use peniko;

pub use crate::block::{Extent, LineSplit, TextBlock};
pub use crate::error::{Error, ErrorKind};
pub use crate::measure::{AdvanceTable, FontId, Measure, Monospace};
pub use crate::run::{OverflowWrap, Run, RunStyle, WRAP_DELIMITERS};
pub use crate::run_text::RunText;
