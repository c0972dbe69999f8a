// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line Format aligns, justifies and word wraps line-broken text for rendering.
//!
//! Formatting takes a [`TextBlock`], whose lines are already broken and measured, and an area
//! size, and produces a placement for every line. Every formatter implements
//! [`FormattedText`], so drawing code does not need to know whether wrapping is active:
//!
//! - [`AlignedText`] places each line of the block with one [`Alignment`].
//! - [`WrappedText`] first splits lines wider than the area, then aligns the pieces. The last
//!   line of justified text is left aligned.
//! - [`Formatter`] picks either at runtime from a [`HorizontalFormatting`].
//!
//! Formatted text is drawn by emitting geometry through a [`GeometrySink`], once per segment
//! of every line.
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
//! use line_format::{Alignment, FormattedText, WrappedText};
//! use text_block::{Extent, Monospace, RunStyle, RunText};
//!
//! let measure = Monospace::new(10.0, 20.0);
//! let text = RunText::from_plain("hello big world", RunStyle::default());
//!
//! let mut wrapped = WrappedText::new(Alignment::Right);
//! wrapped.format(&text, &measure, Extent::new(100.0, 0.0));
//!
//! assert_eq!(wrapped.formatted_line_count(), 2);
//! assert_eq!(wrapped.original_line_count(), 1);
//! assert_eq!(wrapped.vertical_extent(), 40.0);
//! assert_eq!(wrapped.lines()[1].formatter().placement().offset, 50.0);
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
compile_error!("line_format requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod aligned;
mod alignment;
mod formatted;
mod sink;
mod wrap;

pub use peniko;
pub use text_block;

pub use text_block::{Extent, TextBlock};

pub use crate::aligned::AlignedText;
pub use crate::alignment::{Alignment, AlignmentOptions, LineFormatter, LinePlacement};
pub use crate::formatted::{
    FormattedText, Formatter, HorizontalFormatting, MetricsOf, ParseFormattingError, SegmentOf,
};
pub use crate::sink::{GeometrySink, SegmentDraw, modulate};
pub use crate::wrap::{FormattedLine, WrapOptions, WrappedText};
