// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised at the edges of the crate.  The engine itself never
//! fails; only the things that talk to people and files do.

use failure::Fail;
use std::io;

/// Everything that can go wrong while driving the engine or writing
/// out what it drew.
#[derive(Debug, Fail)]
pub enum ChaosError {
    /// Input text did not have the expected shape.
    #[fail(display = "could not parse {} from {:?}", what, input)]
    Parse {
        /// What we were trying to read.
        what: String,
        /// The offending text.
        input: String,
    },

    /// A value parsed, but the engine has no sensible use for it.
    #[fail(display = "invalid {}: {}", name, reason)]
    InvalidParameter {
        /// The parameter being set.
        name: String,
        /// Why it was turned down.
        reason: String,
    },

    /// A command script named something we do not understand.
    #[fail(display = "unknown command {:?} on line {}", command, line)]
    UnknownCommand {
        /// The command word.
        command: String,
        /// One-based line number in the script.
        line: usize,
    },

    /// Reading a script or writing an image failed.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for ChaosError {
    fn from(err: io::Error) -> Self {
        ChaosError::Io(err)
    }
}

impl ChaosError {
    /// Shorthand for a `Parse` error.
    pub fn parse(what: &str, input: &str) -> Self {
        ChaosError::Parse {
            what: what.to_string(),
            input: input.to_string(),
        }
    }

    /// Shorthand for an `InvalidParameter` error.
    pub fn invalid(name: &str, reason: &str) -> Self {
        ChaosError::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
