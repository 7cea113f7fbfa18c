//! TCA9555 I2C IO expander. Several slow control lines hang off it; the
//! UI path only needs the backlight enable. Output and direction registers
//! are cached so each pin change is a single register write.

use embedded_hal::i2c::I2c;

const ADDR: u8 = 0x26;

const REG_OUTPUT0: u8 = 0x02;
const REG_CONFIG0: u8 = 0x06;

pub(crate) const EXPANDER_BACKLIGHT_PIN: u8 = 2;

pub(crate) struct Tca9555<I2C> {
    i2c: I2C,
    output: [u8; 2],
    config: [u8; 2],
}

impl<I2C: I2c> Tca9555<I2C> {
    pub(crate) fn new(i2c: I2C) -> Self {
        // Power-on defaults: all pins inputs, outputs latched high.
        Self {
            i2c,
            output: [0xFF; 2],
            config: [0xFF; 2],
        }
    }

    /// Sync the register cache with the chip's current state.
    pub(crate) fn begin(&mut self) -> Result<(), I2C::Error> {
        let mut output = [0u8; 2];
        self.i2c.write_read(ADDR, &[REG_OUTPUT0], &mut output)?;
        let mut config = [0u8; 2];
        self.i2c.write_read(ADDR, &[REG_CONFIG0], &mut config)?;
        self.output = output;
        self.config = config;
        Ok(())
    }

    /// Drive a pin as an output at the given level.
    pub(crate) fn set_output(&mut self, pin: u8, level: bool) -> Result<(), I2C::Error> {
        let port = (pin / 8) as usize;
        let bit = 1u8 << (pin % 8);

        if level {
            self.output[port] |= bit;
        } else {
            self.output[port] &= !bit;
        }
        self.i2c
            .write(ADDR, &[REG_OUTPUT0 + port as u8, self.output[port]])?;

        if self.config[port] & bit != 0 {
            self.config[port] &= !bit;
            self.i2c
                .write(ADDR, &[REG_CONFIG0 + port as u8, self.config[port]])?;
        }
        Ok(())
    }
}
