//! Coordinate conversion utilities for canvas interactions.
//!
//! This module provides centralized coordinate conversion functions so the
//! screen-to-canvas formula and grid quantization live in exactly one place.

use crate::constants::{DOCK_WIDTH, HEADER_HEIGHT};
use gpui::{Pixels, Point};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a window-relative pointer position to the canvas-local
    /// position of a dragged block's top-left corner.
    ///
    /// The canvas area is offset by the dock on the left and the header on
    /// top; subtracting the grab offset keeps the point under the pointer
    /// fixed relative to the block, so the block does not jump at drag
    /// start. No rounding; this runs on every move event for smooth
    /// feedback.
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point<Pixels>, grab_offset: Point<Pixels>) -> (f32, f32) {
        (
            f32::from(screen_pos.x) - DOCK_WIDTH - f32::from(grab_offset.x),
            f32::from(screen_pos.y) - HEADER_HEIGHT - f32::from(grab_offset.y),
        )
    }

    /// Convert a window-relative pointer position to canvas-local
    /// coordinates (no grab offset), for hit testing.
    #[inline]
    pub fn screen_point_to_canvas(screen_pos: Point<Pixels>) -> (f32, f32) {
        (
            f32::from(screen_pos.x) - DOCK_WIDTH,
            f32::from(screen_pos.y) - HEADER_HEIGHT,
        )
    }

    /// Quantize a canvas-local position to the nearest multiple of
    /// `grid_size`, each axis independently. Uses `f32::round`, i.e.
    /// half-away-from-zero. Applied once, at drag release.
    #[inline]
    pub fn snap_to_grid(pos: (f32, f32), grid_size: f32) -> (f32, f32) {
        (
            (pos.0 / grid_size).round() * grid_size,
            (pos.1 / grid_size).round() * grid_size,
        )
    }
}
