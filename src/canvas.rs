// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A grayscale raster that implements `Surface`, so the engine can
//! paint into memory and we can write the result out as a PNM file.
//!
//! Pixel (column, row) covers the unit square whose top-left corner is
//! (column, row); its centre sits at (column + 0.5, row + 0.5).  A dot
//! lights every pixel whose centre lies within `DOT_RADIUS` of the
//! dot's centre.  Anything that falls off the edge of the canvas is
//! silently clipped.

use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::{ColorType, GrayImage, ImageBuffer, Luma};
use itertools::iproduct;
use num::clamp;
use std::fs::File;
use std::ops::Range;
use std::path::Path;

use crate::error::ChaosError;
use crate::point::Point;
use crate::surface::Surface;

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);
const DOT_RADIUS: f64 = 1.0;

/// The largest canvas `try_new` will allocate, in pixels.
pub const MAX_PIXELS: u64 = 1 << 28;

/// An in-memory drawing surface: black dots on white paper.
pub struct Canvas {
    image: GrayImage,
    dots: usize,
}

/// The run of pixel indices along one axis touched by [lo, hi),
/// clipped to [0, limit).  NaN endpoints give an empty run.
fn span(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    let top = f64::from(limit);
    let start = clamp(lo.floor(), 0.0, top);
    let end = clamp(hi.ceil(), 0.0, top);
    if start.is_nan() || end.is_nan() {
        return 0..0;
    }
    (start as u32)..(end as u32)
}

impl Canvas {
    /// A blank canvas of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            image: ImageBuffer::from_pixel(width, height, PAPER),
            dots: 0,
        }
    }

    /// As `new`, but refuses sizes too large to allocate instead of
    /// aborting.
    pub fn try_new(width: u32, height: u32) -> Result<Self, ChaosError> {
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(ChaosError::invalid(
                "size",
                &format!("{}x{} is more than {} pixels", width, height, MAX_PIXELS),
            ));
        }
        Ok(Canvas::new(width, height))
    }

    /// How many dots have been drawn since the canvas was made.
    /// Clearing does not reset the count.
    pub fn dots(&self) -> usize {
        self.dots
    }

    /// True if the pixel at (column, row) carries ink.  Out-of-range
    /// pixels are never inked.
    pub fn is_inked(&self, column: u32, row: u32) -> bool {
        column < self.image.width()
            && row < self.image.height()
            && *self.image.get_pixel(column, row) == INK
    }

    /// Number of inked pixels.
    pub fn inked(&self) -> usize {
        self.image.pixels().filter(|p| **p == INK).count()
    }

    /// Write the canvas out as a binary PGM (PNM graymap).
    pub fn write_pnm<P: AsRef<Path>>(&self, path: P) -> Result<(), ChaosError> {
        let output = File::create(path.as_ref())?;
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
        encoder.encode(
            &*self.image,
            self.image.width(),
            self.image.height(),
            ColorType::Gray(8),
        )?;
        Ok(())
    }
}

impl Surface for Canvas {
    fn clear_area(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let columns = span(x, x + width, self.image.width());
        let rows = span(y, y + height, self.image.height());
        for (column, row) in iproduct!(columns, rows) {
            self.image.put_pixel(column, row, PAPER);
        }
    }

    fn draw_dot(&mut self, point: Point) {
        self.dots += 1;
        let columns = span(point.x - DOT_RADIUS, point.x + DOT_RADIUS, self.image.width());
        let rows = span(point.y - DOT_RADIUS, point.y + DOT_RADIUS, self.image.height());
        for (column, row) in iproduct!(columns, rows) {
            let centre = Point::new(f64::from(column) + 0.5, f64::from(row) + 0.5);
            let d = centre - point;
            if d.x * d.x + d.y * d.y <= DOT_RADIUS * DOT_RADIUS {
                self.image.put_pixel(column, row, INK);
            }
        }
    }

    fn width(&self) -> f64 {
        f64::from(self.image.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.image.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn a_new_canvas_is_blank() {
        let canvas = Canvas::new(8, 4);
        assert_eq!(canvas.width(), 8.0);
        assert_eq!(canvas.height(), 4.0);
        assert_eq!(canvas.inked(), 0);
    }

    #[test]
    fn try_new_refuses_enormous_sizes() {
        match Canvas::try_new(4_294_967_295, 4_294_967_295) {
            Err(ChaosError::InvalidParameter { name, .. }) => assert_eq!(name, "size"),
            Err(other) => panic!("unexpected {:?}", other),
            Ok(_) => panic!("allocated an enormous canvas"),
        }
        assert!(Canvas::try_new(1 << 16, 1 << 13).is_err());
        let canvas = Canvas::try_new(800, 600).unwrap();
        assert_eq!(canvas.width(), 800.0);
    }

    #[test]
    fn a_dot_on_a_pixel_corner_inks_the_four_neighbours() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_dot(Point::new(5.0, 5.0));
        assert_eq!(canvas.inked(), 4);
        for (column, row) in iproduct!(4..6, 4..6) {
            assert!(canvas.is_inked(column, row));
        }
        assert_eq!(canvas.dots(), 1);
    }

    #[test]
    fn a_dot_on_a_pixel_centre_inks_a_plus() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_dot(Point::new(5.5, 5.5));
        assert_eq!(canvas.inked(), 5);
        assert!(canvas.is_inked(5, 5));
        assert!(canvas.is_inked(4, 5));
        assert!(canvas.is_inked(6, 5));
        assert!(canvas.is_inked(5, 4));
        assert!(canvas.is_inked(5, 6));
        assert!(!canvas.is_inked(4, 4));
    }

    #[test]
    fn dots_off_the_edge_are_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_dot(Point::new(0.0, 0.0));
        assert_eq!(canvas.inked(), 1);
        canvas.draw_dot(Point::new(-50.0, 2.0));
        canvas.draw_dot(Point::new(std::f64::NAN, 2.0));
        canvas.draw_dot(Point::new(std::f64::INFINITY, 2.0));
        assert_eq!(canvas.inked(), 1);
        assert_eq!(canvas.dots(), 4);
    }

    #[test]
    fn clear_area_only_touches_its_rectangle() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_dot(Point::new(2.0, 2.0));
        canvas.draw_dot(Point::new(8.0, 8.0));
        assert_eq!(canvas.inked(), 8);
        canvas.clear_area(0.0, 0.0, 5.0, 5.0);
        assert_eq!(canvas.inked(), 4);
        canvas.clear_all();
        assert_eq!(canvas.inked(), 0);
    }

    #[test]
    fn writes_a_binary_graymap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pgm");
        let mut canvas = Canvas::new(3, 2);
        canvas.draw_dot(Point::new(0.5, 0.5));
        canvas.write_pnm(&path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P5"));
        // Header, then one byte per pixel.
        assert_eq!(&bytes[bytes.len() - 6..], &[0, 0, 255, 0, 255, 255]);
    }
}
