//! XPT2046 resistive touch controller over SPI.
//!
//! Each conversion is one 3-byte transfer: a control byte selecting the
//! channel, then 12 result bits. Power-down bits are left at zero so the
//! pen interrupt stays armed between conversions. Contact pressure is
//! derived from the two cross-plate measurements; the battery rail hangs
//! off the chip's VBAT auxiliary input behind an internal 4:1 divider.

use embedded_hal::spi::SpiDevice;

use tactus::touch::TouchSample;

// Control bytes: start bit, channel, 12-bit mode, differential reference
// for the position/pressure channels, single-ended for VBAT.
const CTRL_READ_Y: u8 = 0b1001_0000;
const CTRL_READ_X: u8 = 0b1101_0000;
const CTRL_READ_Z1: u8 = 0b1011_0000;
const CTRL_READ_Z2: u8 = 0b1100_0000;
const CTRL_READ_VBAT: u8 = 0b1010_0100;

/// Minimum derived pressure that counts as contact. Deliberately light:
/// pressure policy (including the spin-9 ghost band) belongs to the UI
/// touch filter, not the driver.
const CONTACT_MIN: u16 = 100;

/// VBAT full scale: 2.5 V reference behind the 4:1 divider.
const VBAT_FULL_SCALE_MV: u32 = 10_000;

pub(crate) struct Xpt2046<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Xpt2046<SPI> {
    pub(crate) fn new(spi: SPI) -> Self {
        Self { spi }
    }

    fn read12(&mut self, control: u8) -> Result<u16, SPI::Error> {
        let mut frame = [control, 0, 0];
        self.spi.transfer_in_place(&mut frame)?;
        Ok((((frame[1] as u16) << 8) | frame[2] as u16) >> 3)
    }

    pub(crate) fn pressure(&mut self) -> Result<u16, SPI::Error> {
        let z1 = self.read12(CTRL_READ_Z1)? as i32;
        let z2 = self.read12(CTRL_READ_Z2)? as i32;
        Ok((z1 + 4_095 - z2).clamp(0, 4_095) as u16)
    }

    pub(crate) fn touched(&mut self) -> Result<bool, SPI::Error> {
        Ok(self.pressure()? >= CONTACT_MIN)
    }

    pub(crate) fn read_point(&mut self) -> Result<TouchSample, SPI::Error> {
        let z = self.pressure()?;
        let x = self.read12(CTRL_READ_X)?;
        let y = self.read12(CTRL_READ_Y)?;
        Ok(TouchSample::new(x, y, z))
    }

    pub(crate) fn read_vbat_millivolts(&mut self) -> Result<u16, SPI::Error> {
        let raw = self.read12(CTRL_READ_VBAT)? as u32;
        Ok((raw * VBAT_FULL_SCALE_MV / 4_095) as u16)
    }
}
