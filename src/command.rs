// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A tiny line-oriented language for driving the engine, so that a
//! session can be written down in a file and replayed.  One command
//! per line; `#` starts a comment.
//!
//! ```text
//! # Sierpinski
//! anchor 320,20
//! anchor 20,460
//! anchor 620,460
//! ratio 0.5
//! tick 200
//! ```
//!
//! This is where driver-side checking happens.  The engine accepts
//! any number it is handed; the parser refuses non-finite ratios, an
//! empty batch, and anything that does not parse at all.

use rand::Rng;
use std::str::FromStr;
use std::time::Duration;

use crate::config::{finite, nonzero};
use crate::engine::FractalEngine;
use crate::error::ChaosError;
use crate::point::Point;
use crate::surface::Surface;

/// One thing a driver can ask of the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `anchor X,Y`
    Anchor(Point),
    /// `reset`
    Reset,
    /// `start`
    Start,
    /// `stop`
    Stop,
    /// `tick [N]`: N manual batches, one if N is missing.
    Tick(usize),
    /// `run MS`: service the timer for that many milliseconds.
    Run(u64),
    /// `clear`
    Clear,
    /// `ratio F`
    Ratio(f64),
    /// `lateral F`
    Lateral(f64),
    /// `batch N`
    Batch(usize),
    /// `interval MS`
    Interval(u64),
}

fn number<T: FromStr>(what: &str, arg: Option<&str>) -> Result<T, ChaosError> {
    let arg = arg.ok_or_else(|| ChaosError::parse(what, ""))?;
    T::from_str(arg).map_err(|_| ChaosError::parse(what, arg))
}

fn bare(command: Command, word: &str, arg: Option<&str>) -> Result<Command, ChaosError> {
    match arg {
        None => Ok(command),
        Some(arg) => Err(ChaosError::parse(word, arg)),
    }
}

impl Command {
    /// Parse a single line.  Blank lines and comments give `None`.
    /// `line` is only used for error messages.
    pub fn parse_line(text: &str, line: usize) -> Result<Option<Command>, ChaosError> {
        let text = match text.find('#') {
            Some(index) => &text[..index],
            None => text,
        }
        .trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut parts = text.splitn(2, char::is_whitespace);
        let word = parts.next().unwrap_or("");
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        let command = match word {
            "anchor" => Command::Anchor(arg.unwrap_or("").parse()?),
            "reset" => bare(Command::Reset, word, arg)?,
            "start" => bare(Command::Start, word, arg)?,
            "stop" => bare(Command::Stop, word, arg)?,
            "clear" => bare(Command::Clear, word, arg)?,
            "tick" => match arg {
                None => Command::Tick(1),
                Some(_) => Command::Tick(number("tick count", arg)?),
            },
            "run" => Command::Run(number("run time", arg)?),
            "ratio" => Command::Ratio(finite(
                "interpolation ratio",
                number("interpolation ratio", arg)?,
            )?),
            "lateral" => Command::Lateral(finite("lateral step", number("lateral step", arg)?)?),
            "batch" => Command::Batch(nonzero(
                "iterations per tick",
                number("iterations per tick", arg)?,
            )?),
            "interval" => Command::Interval(number("tick interval", arg)?),
            _ => {
                return Err(ChaosError::UnknownCommand {
                    command: word.to_string(),
                    line,
                })
            }
        };
        Ok(Some(command))
    }

    /// Carry the command out.
    pub fn apply<S: Surface, R: Rng>(&self, engine: &mut FractalEngine<S, R>) {
        match *self {
            Command::Anchor(point) => engine.add_anchor(point),
            Command::Reset => engine.reset(),
            Command::Start => engine.start(),
            Command::Stop => engine.stop(),
            Command::Tick(count) => {
                for _ in 0..count {
                    engine.tick();
                }
            }
            Command::Run(millis) => {
                engine.run_for(Duration::from_millis(millis));
            }
            Command::Clear => engine.clear(),
            Command::Ratio(ratio) => engine.set_interpolation_ratio(ratio),
            Command::Lateral(lateral) => engine.set_lateral_step(lateral),
            Command::Batch(iterations) => engine.set_iterations_per_tick(iterations),
            // A live timer keeps its old period, so bounce it.
            Command::Interval(millis) => {
                let running = engine.is_running();
                if running {
                    engine.stop();
                }
                engine.set_tick_interval(millis);
                if running {
                    engine.start();
                }
            }
        }
    }
}

/// Parse a whole script.  Stops at the first bad line.
pub fn parse_script(script: &str) -> Result<Vec<Command>, ChaosError> {
    let mut commands = vec![];
    for (index, text) in script.lines().enumerate() {
        if let Some(command) = Command::parse_line(text, index + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse a script and, only if every line is good, play it against
/// the engine.  Returns the number of commands applied.
pub fn run_script<S: Surface, R: Rng>(
    engine: &mut FractalEngine<S, R>,
    script: &str,
) -> Result<usize, ChaosError> {
    let commands = parse_script(script)?;
    for command in &commands {
        command.apply(engine);
    }
    Ok(commands.len())
}
