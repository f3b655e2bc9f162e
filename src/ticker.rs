// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A recurring, cancellable timer.  Firings queue up on a crossbeam
//! tick channel and are consumed by whoever is pumping the engine, so
//! everything still happens on one thread, one firing at a time.
//! Dropping the channel is the cancellation.

use crossbeam::channel::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// What happened while waiting on the timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Firing {
    /// The timer went off.
    Fired,
    /// Nothing happened before the timeout.
    TimedOut,
    /// There is no timer to wait on.
    Stopped,
}

/// Holds at most one live timer.
#[derive(Debug, Default)]
pub struct Ticker {
    interval: Duration,
    timer: Option<Receiver<Instant>>,
}

impl Ticker {
    /// A stopped ticker.
    pub fn new() -> Self {
        Ticker::default()
    }

    /// Begin firing every `interval`.  Does nothing, and returns
    /// false, if a timer is already live; the existing one keeps its
    /// period and phase.
    pub fn start(&mut self, interval: Duration) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.interval = interval;
        self.timer = Some(channel::tick(interval));
        true
    }

    /// Cancel the live timer.  Returns false if there was none.
    pub fn stop(&mut self) -> bool {
        self.timer.take().is_some()
    }

    /// True while a timer is live.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The period of the live timer, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.timer.as_ref().map(|_| self.interval)
    }

    /// Consume a firing if one is already due.  Never blocks.
    pub fn try_fire(&self) -> bool {
        match self.timer {
            Some(ref timer) => timer.try_recv().is_ok(),
            None => false,
        }
    }

    /// Block until the timer fires or `timeout` passes.
    pub fn wait(&self, timeout: Duration) -> Firing {
        match self.timer {
            Some(ref timer) => match timer.recv_timeout(timeout) {
                Ok(_) => Firing::Fired,
                Err(RecvTimeoutError::Timeout) => Firing::TimedOut,
                Err(RecvTimeoutError::Disconnected) => Firing::Stopped,
            },
            None => Firing::Stopped,
        }
    }
}
