//! tactus: firmware core for a hand-held ESP32-S3 touch device.
//!
//! The device is a 320×480 TFT with a resistive touch panel in front of it,
//! an accelerometer, and a small set of demo screens switched through an
//! on-screen menu. This library is the portable half of the firmware: the
//! touch accept/reject pipeline, the raw→display coordinate mapping, the
//! screens themselves and the mode controller that owns them. It has no
//! platform dependencies and tests on any host with `cargo test`; the
//! binary (behind the `firmware` feature) provides peripherals, the
//! executor and the serial console.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod console;
pub mod hal;
pub mod telemetry;
pub mod touch;
pub mod ui;
