//! The concrete [`Board`] wiring the drivers together. Transient bus
//! errors from the touch path degrade to "no contact this poll"; the
//! filter's history makes that self-healing.

use embedded_hal::{digital::OutputPin, i2c::I2c, spi::SpiDevice};

use tactus::hal::{AccelReading, Board};
use tactus::touch::TouchSample;

use super::hx8357::Hx8357;
use super::lsm6ds3::Lsm6ds3;
use super::xpt2046::Xpt2046;

pub(crate) struct HandsetBoard<DSPI, DC, RST, TSPI, I2C> {
    display: Hx8357<DSPI, DC, RST>,
    touch: Xpt2046<TSPI>,
    accel: Option<Lsm6ds3<I2C>>,
    mac: [u8; 6],
}

impl<DSPI, DC, RST, TSPI, I2C> HandsetBoard<DSPI, DC, RST, TSPI, I2C>
where
    DSPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    TSPI: SpiDevice,
    I2C: I2c,
{
    pub(crate) fn new(
        display: Hx8357<DSPI, DC, RST>,
        touch: Xpt2046<TSPI>,
        accel: Option<Lsm6ds3<I2C>>,
        mac: [u8; 6],
    ) -> Self {
        Self {
            display,
            touch,
            accel,
            mac,
        }
    }
}

impl<DSPI, DC, RST, TSPI, I2C> Board for HandsetBoard<DSPI, DC, RST, TSPI, I2C>
where
    DSPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    TSPI: SpiDevice,
    I2C: I2c,
{
    type Display = Hx8357<DSPI, DC, RST>;

    fn display(&mut self) -> &mut Self::Display {
        &mut self.display
    }

    fn touched(&mut self) -> bool {
        self.touch.touched().unwrap_or(false)
    }

    fn read_point(&mut self) -> TouchSample {
        // A read error mid-contact maps far off-screen after calibration,
        // so it falls out of every hot-zone on its own.
        self.touch.read_point().unwrap_or_default()
    }

    fn accel(&mut self) -> AccelReading {
        match self.accel.as_mut() {
            Some(accel) => accel.read().unwrap_or_default(),
            None => AccelReading::default(),
        }
    }

    fn battery_millivolts(&mut self) -> u16 {
        self.touch.read_vbat_millivolts().unwrap_or(0)
    }

    fn mac_address(&self) -> [u8; 6] {
        self.mac
    }

    fn request_restart(&mut self) {
        log::warn!("restart requested from the test rig screen");
        esp_hal::system::software_reset()
    }
}
