//! Per-revision hardware constants.
//!
//! Each board revision ("spin") selects one `hw` module at compile time via
//! feature flags. Host builds pick up the spin 9 values so tests exercise
//! the production thresholds.

#[cfg(feature = "spin7")]
mod hw {
    pub const HARDWARE_SPIN: u8 = 7;
    pub const BOARD_NAME: &str = "tactus_spin7";

    /// Spin 7 panels do not exhibit the powered-ghost-touch band.
    pub const TOUCH_PRESSURE_FLOOR: Option<u16> = None;

    /// Accelerometer X axis reads in display orientation on this spin.
    pub const ACCEL_INVERT_X: bool = false;
}

#[cfg(all(feature = "spin9", not(feature = "spin7")))]
mod hw {
    pub const HARDWARE_SPIN: u8 = 9;
    pub const BOARD_NAME: &str = "tactus_spin9";

    /// On USB power, spin 9 panels report spurious contacts with pressure
    /// around 300; anything below this floor is discarded by the filter.
    pub const TOUCH_PRESSURE_FLOOR: Option<u16> = Some(400);

    /// The spin 9 accelerometer is mounted rotated; its X axis is mirrored
    /// relative to the display.
    pub const ACCEL_INVERT_X: bool = true;
}

// Host builds (tests, tooling) mirror the current production spin.
#[cfg(not(any(feature = "spin7", feature = "spin9")))]
mod hw {
    pub const HARDWARE_SPIN: u8 = 9;
    pub const BOARD_NAME: &str = "tactus_host";
    pub const TOUCH_PRESSURE_FLOOR: Option<u16> = Some(400);
    pub const ACCEL_INVERT_X: bool = true;
}

pub use hw::*;

/// Raw touch-panel calibration bounds, identical across spins: the panel
/// reports 12-bit coordinates but only this window maps onto the glass.
pub const TOUCH_MIN_X: u16 = 300;
pub const TOUCH_MAX_X: u16 = 3800;
pub const TOUCH_MIN_Y: u16 = 500;
pub const TOUCH_MAX_Y: u16 = 3750;
