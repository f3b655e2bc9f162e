// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate chaosgame;
extern crate clap;
extern crate env_logger;
extern crate rand;

use chaosgame::parse::parse_pair;
use chaosgame::point::regular_polygon;
use chaosgame::{run_script, Canvas, ChaosError, EngineSettings, FractalEngine, Point};
use clap::{App, Arg, ArgMatches};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::str::FromStr;
use std::time::Duration;

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ANCHOR: &str = "anchor";
const POLYGON: &str = "polygon";
const RATIO: &str = "ratio";
const LATERAL: &str = "lateral";
const BATCH: &str = "batch";
const INTERVAL: &str = "interval";
const TICKS: &str = "ticks";
const DURATION: &str = "duration";
const SCRIPT: &str = "script";
const SEED: &str = "seed";

fn args<'a>() -> ArgMatches<'a> {
    App::new("chaos")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Chaos game renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (binary PGM)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<u32>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ANCHOR)
                .long(ANCHOR)
                .short("a")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse anchor point"))
                .help("Anchor point in pixels, x,y; repeat for more anchors"),
        )
        .arg(
            Arg::with_name(POLYGON)
                .long(POLYGON)
                .short("p")
                .takes_value(true)
                .default_value("3")
                .validator(|s| {
                    validate_range(
                        &s,
                        2,
                        64,
                        "Could not parse polygon size",
                        "Polygon must have between 2 and 64 corners",
                    )
                })
                .help("Place anchors on a regular polygon when none are given"),
        )
        .arg(
            Arg::with_name(RATIO)
                .long(RATIO)
                .short("r")
                .takes_value(true)
                .default_value("0.5")
                .validator(|s| {
                    validate_range(
                        &s,
                        -10.0,
                        10.0,
                        "Could not parse interpolation ratio",
                        "Interpolation ratio must be between -10 and 10",
                    )
                })
                .help("Fraction of the way toward the anchor moved each step"),
        )
        .arg(
            Arg::with_name(LATERAL)
                .long(LATERAL)
                .short("l")
                .takes_value(true)
                .default_value("0")
                .validator(|s| {
                    validate_range(
                        &s,
                        -100.0,
                        100.0,
                        "Could not parse lateral step",
                        "Lateral step must be between -100 and 100",
                    )
                })
                .help("Sideways step coefficient"),
        )
        .arg(
            Arg::with_name(BATCH)
                .long(BATCH)
                .short("b")
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        10_000_000,
                        "Could not parse batch size",
                        "Batch size must be between 1 and 10000000",
                    )
                })
                .help("Points drawn per tick"),
        )
        .arg(
            Arg::with_name(INTERVAL)
                .long(INTERVAL)
                .short("i")
                .takes_value(true)
                .default_value("10")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        60_000,
                        "Could not parse tick interval",
                        "Tick interval must be between 1 and 60000 milliseconds",
                    )
                })
                .help("Milliseconds between ticks when running on the timer"),
        )
        .arg(
            Arg::with_name(TICKS)
                .long(TICKS)
                .short("t")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        1_000_000,
                        "Could not parse tick count",
                        "Tick count must be between 0 and 1000000",
                    )
                })
                .help("Number of ticks to run by hand"),
        )
        .arg(
            Arg::with_name(DURATION)
                .long(DURATION)
                .short("d")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        3_600_000,
                        "Could not parse duration",
                        "Duration must be between 0 and 3600000 milliseconds",
                    )
                })
                .help("Run on the timer for this many milliseconds instead of a tick count"),
        )
        .arg(
            Arg::with_name(SCRIPT)
                .long(SCRIPT)
                .takes_value(true)
                .help("Command script to play before rendering"),
        )
        .arg(
            Arg::with_name(SEED)
                .long(SEED)
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        u64::max_value(),
                        "Could not parse seed",
                        "Seed out of range",
                    )
                })
                .help("Seed for reproducible output"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, ChaosError> {
    let raw = matches.value_of(name).unwrap_or("");
    T::from_str(raw).map_err(|_| ChaosError::parse(name, raw))
}

fn render(matches: &ArgMatches) -> Result<Canvas, ChaosError> {
    let size = matches.value_of(SIZE).unwrap_or("");
    let (width, height) =
        parse_pair::<u32>(size, 'x').ok_or_else(|| ChaosError::parse(SIZE, size))?;

    let rng = match matches.value_of(SEED) {
        Some(_) => StdRng::seed_from_u64(value(matches, SEED)?),
        None => StdRng::from_entropy(),
    };

    let settings = EngineSettings {
        interpolation_ratio: value(matches, RATIO)?,
        lateral_step: value(matches, LATERAL)?,
        iterations_per_tick: value(matches, BATCH)?,
        tick_interval: value(matches, INTERVAL)?,
    };
    settings.validate()?;

    let mut engine = FractalEngine::with_rng(Canvas::try_new(width, height)?, rng);
    engine.apply(settings);

    match matches.values_of(ANCHOR) {
        Some(anchors) => {
            for anchor in anchors {
                engine.add_anchor(anchor.parse::<Point>()?);
            }
        }
        None => {
            let (w, h) = (f64::from(width), f64::from(height));
            let centre = Point::new(w / 2.0, h / 2.0);
            let radius = 0.45 * w.min(h);
            for anchor in regular_polygon(value(matches, POLYGON)?, centre, radius) {
                engine.add_anchor(anchor);
            }
        }
    }

    if let Some(path) = matches.value_of(SCRIPT) {
        let script = fs::read_to_string(path)?;
        let applied = run_script(&mut engine, &script)?;
        info!("played {} commands from {}", applied, path);
    }

    match matches.value_of(DURATION) {
        Some(_) => {
            let millis: u64 = value(matches, DURATION)?;
            engine.start();
            let batches = engine.run_for(Duration::from_millis(millis));
            engine.stop();
            info!("timer ran {} ticks in {}ms", batches, millis);
        }
        None => {
            let ticks: usize = value(matches, TICKS)?;
            for _ in 0..ticks {
                engine.tick();
            }
        }
    }

    let canvas = engine.into_surface();
    info!("drew {} dots", canvas.dots());
    Ok(canvas)
}

fn main() {
    env_logger::init();
    let matches = args();

    let result = render(&matches)
        .and_then(|canvas| canvas.write_pnm(matches.value_of(OUTPUT).unwrap_or("chaos.pgm")));

    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
