//! The hardware facade the UI core is written against.
//!
//! Everything the controller and the screens touch (display, touch panel,
//! accelerometer, battery, identity, restart) goes through one [`Board`]
//! value owned by the UI task. There is no global hardware singleton; tests
//! substitute a scripted implementation.

use embedded_graphics::{draw_target::DrawTarget, geometry::OriginDimensions, pixelcolor::Rgb565};

use crate::touch::TouchSample;

/// One accelerometer reading, in m/s² per axis, display orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccelReading {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

pub trait Board {
    type Display: DrawTarget<Color = Rgb565> + OriginDimensions;

    fn display(&mut self) -> &mut Self::Display;

    /// Whether the touch controller currently reports contact.
    fn touched(&mut self) -> bool;

    /// Read one raw sample. Only meaningful right after [`Board::touched`]
    /// returned true; the pair is polled at most once per tick.
    fn read_point(&mut self) -> TouchSample;

    fn accel(&mut self) -> AccelReading;

    fn battery_millivolts(&mut self) -> u16;

    fn mac_address(&self) -> [u8; 6];

    /// Ask the platform to reboot. May return; the caller keeps running
    /// until the reset takes effect.
    fn request_restart(&mut self);
}
