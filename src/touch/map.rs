//! Raw panel coordinates → display pixels.
//!
//! The touch panel is mounted rotated a quarter turn relative to the TFT,
//! so the raw axes swap: the raw Y reading drives the display X coordinate
//! and vice versa, each rescaled linearly across its calibration window.
//! Both input windows run high-to-low, which folds the panel's mirroring
//! into the same transform. No clamping: a contact outside the calibration
//! window legitimately maps off-screen and callers must tolerate that.

use embedded_graphics::geometry::Point;

use crate::board;

use super::TouchSample;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchCalibration {
    pub min_x: u16,
    pub max_x: u16,
    pub min_y: u16,
    pub max_y: u16,
}

impl TouchCalibration {
    pub const fn for_board() -> Self {
        Self {
            min_x: board::TOUCH_MIN_X,
            max_x: board::TOUCH_MAX_X,
            min_y: board::TOUCH_MIN_Y,
            max_y: board::TOUCH_MAX_Y,
        }
    }
}

impl Default for TouchCalibration {
    fn default() -> Self {
        Self::for_board()
    }
}

/// Linear integer rescale, truncating toward zero. Input ranges may run
/// high-to-low; inputs outside the range extrapolate.
fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

pub fn map_to_display(
    sample: TouchSample,
    cal: &TouchCalibration,
    width: i32,
    height: i32,
) -> Point {
    // The X calibration window applies to the raw Y axis (and vice versa)
    // because the windows are measured in display orientation.
    let x = map_range(sample.y as i32, cal.max_x as i32, cal.min_x as i32, 0, width);
    let y = map_range(sample.x as i32, cal.max_y as i32, cal.min_y as i32, 0, height);
    Point::new(x, y)
}
