// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Point struct, an immutable coordinate on the drawing
//! plane.  Every operation hands back a new Point; nothing here ever
//! mutates in place.

use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::ChaosError;
use crate::parse::parse_pair;

/// An x, y pair on the drawing plane.  Surface pixel space and the
/// unit square are both just Points; the engine maps one to the other
/// with `scale`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// A point somewhere in the unit square, each coordinate drawn
    /// uniformly from [0, 1) out of the supplied source.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Point {
            x: rng.gen::<f64>(),
            y: rng.gen::<f64>(),
        }
    }

    /// As `random_with`, using the thread-local generator.
    pub fn random() -> Self {
        Point::random_with(&mut rand::thread_rng())
    }

    /// Multiply each coordinate by its own factor.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Point {
            x: self.x * sx,
            y: self.y * sy,
        }
    }

    /// The point `mix` of the way from `a` to `b`.  The mix is not
    /// clamped: values outside [0, 1] overshoot, which changes the
    /// shape of the attractor, and callers are allowed to want that.
    pub fn lerp(a: Point, b: Point, mix: f64) -> Self {
        a + (b + a.scale(-1.0, -1.0)).scale(mix, mix)
    }

    /// This point turned a quarter turn clockwise about the origin:
    /// (x, y) becomes (y, -x).
    pub fn rotate_quarter(self) -> Self {
        Point {
            x: self.y,
            y: -self.x,
        }
    }

    /// True if either coordinate is NaN.
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// True if either coordinate is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.x.is_infinite() || self.y.is_infinite()
    }
}

/// The corners of a regular polygon, centred on `centre`, with the
/// first corner straight above the centre (y grows downward) and the
/// rest following clockwise.
pub fn regular_polygon(sides: usize, centre: Point, radius: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = -FRAC_PI_2 + 2.0 * PI * (i as f64) / (sides as f64);
            centre + Point::new(angle.cos(), angle.sin()).scale(radius, radius)
        })
        .collect()
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.scale(-1.0, -1.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses "x,y".
impl FromStr for Point {
    type Err = ChaosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_pair::<f64>(s, ',') {
            Some((x, y)) => Ok(Point { x, y }),
            None => Err(ChaosError::parse("point", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lerp_of_a_point_with_itself_is_itself() {
        let a = Point::new(3.5, -7.25);
        for t in &[-2.0, -0.5, 0.0, 0.3, 0.5, 1.0, 4.0] {
            assert_eq!(Point::lerp(a, a, *t), a);
        }
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(9.0, -6.0);
        assert_eq!(Point::lerp(a, b, 0.0), a);
        assert_eq!(Point::lerp(a, b, 1.0), b);
        assert_eq!(Point::lerp(a, b, 0.5), Point::new(5.0, -2.0));
    }

    #[test]
    fn lerp_is_not_clamped() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 4.0);
        assert_eq!(Point::lerp(a, b, 2.0), Point::new(20.0, 8.0));
        assert_eq!(Point::lerp(a, b, -1.0), Point::new(-10.0, -4.0));
    }

    #[test]
    fn scale_add_and_sub() {
        let p = Point::new(2.0, 3.0);
        assert_eq!(p.scale(10.0, -1.0), Point::new(20.0, -3.0));
        assert_eq!(p + Point::new(1.0, 1.0), Point::new(3.0, 4.0));
        assert_eq!(p - Point::new(1.0, 5.0), Point::new(1.0, -2.0));
        assert_eq!(-p, Point::new(-2.0, -3.0));
        // Operations hand back new values; the original is untouched.
        assert_eq!(p, Point::new(2.0, 3.0));
    }

    #[test]
    fn rotate_quarter_swaps_and_negates() {
        assert_eq!(Point::new(3.0, 4.0).rotate_quarter(), Point::new(4.0, -3.0));
    }

    #[test]
    fn validity_predicates() {
        assert!(!Point::new(0.0, 0.0).is_nan());
        assert!(Point::new(std::f64::NAN, 0.0).is_nan());
        assert!(Point::new(0.0, std::f64::NAN).is_nan());
        assert!(!Point::new(1e300, -1e300).is_infinite());
        assert!(Point::new(std::f64::INFINITY, 0.0).is_infinite());
        assert!(Point::new(0.0, std::f64::NEG_INFINITY).is_infinite());
        assert!(!Point::new(std::f64::NAN, 0.0).is_infinite());
    }

    #[test]
    fn random_points_land_in_the_unit_square() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Point::random_with(&mut rng);
            assert!(p.x >= 0.0 && p.x < 1.0);
            assert!(p.y >= 0.0 && p.y < 1.0);
        }
    }

    #[test]
    fn polygon_corners_sit_on_the_circle() {
        let centre = Point::new(100.0, 50.0);
        let square = regular_polygon(4, centre, 10.0);
        let expected = [(100.0, 40.0), (110.0, 50.0), (100.0, 60.0), (90.0, 50.0)];
        assert_eq!(square.len(), 4);
        for (corner, (x, y)) in square.iter().zip(expected.iter()) {
            assert!((corner.x - x).abs() < 1e-9 && (corner.y - y).abs() < 1e-9);
        }
        assert!(regular_polygon(0, centre, 10.0).is_empty());
    }

    #[test]
    fn parses_comma_pairs() {
        assert_eq!("12.5,-3".parse::<Point>().unwrap(), Point::new(12.5, -3.0));
        assert!("12.5".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let p = Point::new(0.25, 640.0);
        assert_eq!(p.to_string().parse::<Point>().unwrap(), p);
    }
}
