//! LSM6DS3TR-C accelerometer over I2C. Only the accelerometer half is
//! used; the gyro stays powered down.

use embedded_hal::i2c::I2c;

use tactus::hal::AccelReading;

const ADDR: u8 = 0x6A;

const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL1_XL: u8 = 0x10;
const REG_OUTX_L_XL: u8 = 0x28;

const WHO_AM_I: u8 = 0x6A;
/// 104 Hz, ±2 g.
const CTRL1_XL_104HZ_2G: u8 = 0x40;

/// m/s² per LSB at ±2 g (0.061 mg/LSB).
const SCALE: f32 = 0.061e-3 * 9.806_65;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AccelError<E> {
    Bus(E),
    WrongChip(u8),
}

pub(crate) struct Lsm6ds3<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Lsm6ds3<I2C> {
    pub(crate) fn new(mut i2c: I2C) -> Result<Self, AccelError<I2C::Error>> {
        let mut id = [0u8; 1];
        i2c.write_read(ADDR, &[REG_WHO_AM_I], &mut id)
            .map_err(AccelError::Bus)?;
        if id[0] != WHO_AM_I {
            return Err(AccelError::WrongChip(id[0]));
        }

        i2c.write(ADDR, &[REG_CTRL1_XL, CTRL1_XL_104HZ_2G])
            .map_err(AccelError::Bus)?;
        Ok(Self { i2c })
    }

    pub(crate) fn read(&mut self) -> Result<AccelReading, I2C::Error> {
        let mut raw = [0u8; 6];
        self.i2c.write_read(ADDR, &[REG_OUTX_L_XL], &mut raw)?;

        let x = i16::from_le_bytes([raw[0], raw[1]]);
        let y = i16::from_le_bytes([raw[2], raw[3]]);
        let z = i16::from_le_bytes([raw[4], raw[5]]);
        Ok(AccelReading {
            x: x as f32 * SCALE,
            y: y as f32 * SCALE,
            z: z as f32 * SCALE,
        })
    }
}
