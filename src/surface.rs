// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The drawing surface the engine paints on.  The engine only ever
//! erases rectangles and stamps dots; how those turn into pixels is
//! the surface's business.

use crate::point::Point;

/// A 2D surface with a fixed drawing colour.
pub trait Surface {
    /// Erase everything inside the rectangle whose top-left corner is
    /// (x, y).
    fn clear_area(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Paint a small filled circle, radius about one unit, centred on
    /// `point`, at full opacity on top of whatever is already there.
    fn draw_dot(&mut self, point: Point);

    /// Current drawable width.
    fn width(&self) -> f64;

    /// Current drawable height.
    fn height(&self) -> f64;

    /// Erase the whole drawable area.
    fn clear_all(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_area(0.0, 0.0, width, height);
    }
}
