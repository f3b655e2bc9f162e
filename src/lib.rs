#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Chaos game renderer
//!
//! Put a few anchors down on a surface and pick a point anywhere.
//! Now, over and over: choose one of the anchors at random, move the
//! point some fixed fraction of the way toward it, and plot where it
//! lands.  Whatever the starting point, the trail soon settles onto an
//! attractor fixed by the anchors and the fraction.  Three anchors and
//! a fraction of one half give the Sierpinski triangle; other shapes
//! and ratios give other fractals.
//!
//! On top of the classic game we allow a sideways nudge on every jump,
//! perpendicular to the direction of travel.  That twists the
//! attractor into spirals, and, if pushed too far, sends the point off
//! to infinity.  The engine notices and drops the point somewhere new.
//!
//! The engine draws through the `Surface` trait.  `Canvas` is an
//! in-memory raster implementation that can be written out as a PNM
//! file; anything else that can erase a rectangle and stamp a dot will
//! do.  Points are generated in batches, either on demand or driven by
//! a recurring timer.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;
extern crate rand;

pub mod canvas;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod parse;
pub mod point;
pub mod surface;
pub mod ticker;

pub use canvas::Canvas;
pub use command::{parse_script, run_script, Command};
pub use config::EngineSettings;
pub use engine::FractalEngine;
pub use error::ChaosError;
pub use point::Point;
pub use surface::Surface;
