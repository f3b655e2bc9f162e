// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The FractalEngine plays the chaos game.  It owns a handful of
//! anchors and a single moving point, and on every step jumps the
//! point part of the way toward an anchor picked at random, plotting
//! wherever it lands.  With three anchors and a ratio of one half the
//! trail fills in a Sierpinski triangle.
//!
//! An optional lateral term nudges each jump sideways, perpendicular
//! to the line toward the anchor.  Small values twist the attractor;
//! large ones make the point fly off to infinity.  Every step checks
//! for that and reseeds the point somewhere on the surface when it
//! happens, so the engine never gets stuck drawing NaNs.

use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::config::EngineSettings;
use crate::point::Point;
use crate::surface::Surface;
use crate::ticker::{Firing, Ticker};

/// The chaos game, bound to the surface it draws on and the source of
/// randomness it plays with.
pub struct FractalEngine<S: Surface, R: Rng = ThreadRng> {
    surface: S,
    rng: R,
    anchors: Vec<Point>,
    position: Option<Point>,
    settings: EngineSettings,
    ticker: Ticker,
    reseeds: usize,
}

impl<S: Surface> FractalEngine<S, ThreadRng> {
    /// An engine with default settings that draws its randomness from
    /// the thread-local generator.
    pub fn new(surface: S) -> Self {
        FractalEngine::with_rng(surface, rand::thread_rng())
    }
}

impl<S: Surface, R: Rng> FractalEngine<S, R> {
    /// An engine with default settings and the given randomness.
    /// Handing in a seeded generator makes runs reproducible.
    pub fn with_rng(surface: S, rng: R) -> Self {
        FractalEngine {
            surface,
            rng,
            anchors: vec![],
            position: None,
            settings: EngineSettings::default(),
            ticker: Ticker::new(),
            reseeds: 0,
        }
    }

    /// Append an anchor and draw it straight away.
    pub fn add_anchor(&mut self, anchor: Point) {
        self.anchors.push(anchor);
        self.surface.draw_dot(anchor);
    }

    /// Forget every anchor and the moving point, and wipe the surface.
    /// A running timer keeps running; ticks are no-ops until anchors
    /// come back.
    pub fn reset(&mut self) {
        info!("reset: dropping {} anchors", self.anchors.len());
        self.anchors.clear();
        self.position = None;
        self.surface.clear_all();
    }

    /// Wipe the surface and redraw the anchors.  The moving point and
    /// its trail are not redrawn.
    pub fn clear(&mut self) {
        self.surface.clear_all();
        for anchor in &self.anchors {
            self.surface.draw_dot(*anchor);
        }
    }

    /// Start the recurring timer at the current tick interval.
    /// Calling this while already running changes nothing.
    pub fn start(&mut self) {
        let interval = Duration::from_millis(self.settings.tick_interval);
        if self.ticker.start(interval) {
            info!("started, ticking every {:?}", interval);
        }
    }

    /// Cancel the recurring timer, if there is one.
    pub fn stop(&mut self) {
        if self.ticker.stop() {
            info!("stopped");
        }
    }

    /// True while the recurring timer is live.
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// The period the live timer was started with.  This can differ
    /// from `tick_interval()` if the interval was changed while
    /// running; only a stop and a fresh start picks the new one up.
    pub fn timer_interval(&self) -> Option<Duration> {
        self.ticker.interval()
    }

    /// One batch: `iterations_per_tick` steps back to back.  Does
    /// nothing with fewer than two anchors.
    pub fn tick(&mut self) {
        if self.anchors.len() < 2 {
            return;
        }
        trace!("tick of {} steps", self.settings.iterations_per_tick);
        for _ in 0..self.settings.iterations_per_tick {
            self.advance();
        }
    }

    /// A single step.  Does nothing with fewer than two anchors.
    pub fn step(&mut self) {
        if self.anchors.len() < 2 {
            return;
        }
        self.advance();
    }

    /// Run one batch if the timer has a firing waiting.  Never
    /// blocks.  Returns whether a batch ran.
    pub fn run_pending(&mut self) -> bool {
        if self.ticker.try_fire() {
            self.tick();
            true
        } else {
            false
        }
    }

    /// Service the timer for `duration`, running one whole batch per
    /// firing.  Returns at once if the engine is stopped.  Returns the
    /// number of batches run.
    pub fn run_for(&mut self, duration: Duration) -> usize {
        let deadline = Instant::now() + duration;
        let mut batches = 0;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match self.ticker.wait(deadline - now) {
                Firing::Fired => {
                    self.tick();
                    batches += 1;
                }
                Firing::TimedOut | Firing::Stopped => break,
            }
        }
        batches
    }

    fn advance(&mut self) {
        let position = match self.position {
            Some(p) if !p.is_nan() && !p.is_infinite() => p,
            stale => {
                self.reseed(stale);
                return;
            }
        };

        let anchor = match self.anchors.choose(&mut self.rng) {
            Some(anchor) => *anchor,
            None => return,
        };

        let ratio = self.settings.interpolation_ratio;
        let lateral = self.settings.lateral_step * ratio;
        let sideways = (anchor - position).rotate_quarter().scale(lateral, lateral);
        let next = Point::lerp(position, anchor, ratio) + sideways;

        self.position = Some(next);
        self.surface.draw_dot(next);
    }

    // Drop the point somewhere on the surface.  Unit-square randomness
    // is stretched to the surface's current size.
    fn reseed(&mut self, stale: Option<Point>) {
        if let Some(stale) = stale {
            debug!("position {} diverged, reseeding", stale);
        }
        let fresh = Point::random_with(&mut self.rng)
            .scale(self.surface.width(), self.surface.height());
        self.reseeds += 1;
        self.position = Some(fresh);
        self.surface.draw_dot(fresh);
    }

    /// The anchors, in the order they were added.
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// Where the moving point currently is.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Put the moving point somewhere specific, or take it away so the
    /// next step reseeds.  Nothing is drawn.
    pub fn set_position(&mut self, position: Option<Point>) {
        self.position = position;
    }

    /// How many times the moving point has been dropped onto a fresh
    /// random spot, the first placement included.
    pub fn reseeds(&self) -> usize {
        self.reseeds
    }

    /// All four parameters at once.
    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Replace all four parameters.  Like the individual setters, this
    /// does not touch a running timer.
    pub fn apply(&mut self, settings: EngineSettings) {
        self.settings = settings;
    }

    /// Fraction of the way to the chosen anchor moved each step.
    pub fn interpolation_ratio(&self) -> f64 {
        self.settings.interpolation_ratio
    }

    /// Takes effect on the next step.
    pub fn set_interpolation_ratio(&mut self, ratio: f64) {
        self.settings.interpolation_ratio = ratio;
    }

    /// Coefficient of the sideways offset.
    pub fn lateral_step(&self) -> f64 {
        self.settings.lateral_step
    }

    /// Takes effect on the next step.
    pub fn set_lateral_step(&mut self, lateral: f64) {
        self.settings.lateral_step = lateral;
    }

    /// Steps per batch.
    pub fn iterations_per_tick(&self) -> usize {
        self.settings.iterations_per_tick
    }

    /// Takes effect on the next tick.
    pub fn set_iterations_per_tick(&mut self, iterations: usize) {
        self.settings.iterations_per_tick = iterations;
    }

    /// Milliseconds between timer firings.
    pub fn tick_interval(&self) -> u64 {
        self.settings.tick_interval
    }

    /// Takes effect the next time the engine is started.
    pub fn set_tick_interval(&mut self, millis: u64) {
        self.settings.tick_interval = millis;
    }

    /// The surface being drawn on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for drivers that draw on it
    /// themselves or wipe it behind the engine's back.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, dropping the engine.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
