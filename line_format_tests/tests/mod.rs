// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `line_format`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the helpers in `util` can be shared.
//! - Tests are grouped by topic; put the topic at the start of the test name
//!   (`wrap_zero_width` rather than `zero_width_wrap`).

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod draw;
mod util;
