#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set lives on the complex plane: a point belongs to
//! the set when repeatedly applying `z = z * z + c` never sends `z`
//! off to infinity.  Points outside the set escape, and the number of
//! iterations it takes them to do so is a "velocity" we can paint
//! with.  This crate maps a rectangular window of the plane onto a
//! pixel grid, iterates every pixel's point, and colors the escapees
//! with a hue-rotated rainbow keyed to that velocity.  Points that
//! never escape stay at the black background, which is what gives the
//! set its familiar black heart.
//!
//! The output is an in-memory row-major RGB buffer; encoding it to a
//! bitmap file is the business of the `mandel` binary, not of this
//! library.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate num;

pub mod color;
pub mod error;
pub mod escape;
pub mod render;
pub mod viewport;

pub use color::{ColorMap, Rgb, DEFAULT_HUE_FACTOR};
pub use error::ConfigError;
pub use escape::{evaluate, EscapeParams, EscapeResult};
pub use render::Renderer;
pub use viewport::Viewport;
