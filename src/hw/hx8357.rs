//! HX8357-D TFT driver, 320×480 RGB565 over SPI.
//!
//! Command/data framing uses the usual shared-bus arrangement: the DC pin
//! selects between command and parameter bytes inside one chip-select
//! window. Pixels are streamed straight to the panel; there is no
//! framebuffer.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    Pixel,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

pub(crate) const WIDTH: u16 = 320;
pub(crate) const HEIGHT: u16 = 480;

const CMD_SWRESET: u8 = 0x01;
const CMD_SLPOUT: u8 = 0x11;
const CMD_DISPON: u8 = 0x29;
const CMD_CASET: u8 = 0x2A;
const CMD_PASET: u8 = 0x2B;
const CMD_RAMWR: u8 = 0x2C;
const CMD_TEON: u8 = 0x35;
const CMD_MADCTL: u8 = 0x36;
const CMD_COLMOD: u8 = 0x3A;
const CMD_TEARLINE: u8 = 0x44;
const CMD_SETOSC: u8 = 0xB0;
const CMD_SETPWR1: u8 = 0xB1;
const CMD_SETRGB: u8 = 0xB3;
const CMD_SETCYC: u8 = 0xB4;
const CMD_SETCOM: u8 = 0xB6;
const CMD_SETC: u8 = 0xB9;
const CMD_SETSTBA: u8 = 0xC0;
const CMD_SETPANEL: u8 = 0xCC;
const CMD_SETGAMMA: u8 = 0xE0;

// Portrait, column order flipped to put the origin at the top-left with
// the connector at the bottom.
const MADCTL_PORTRAIT: u8 = 0xC0;

const GAMMA: [u8; 34] = [
    0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08, 0x09,
    0x03, 0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08,
    0x09, 0x03, 0x00, 0x01,
];

/// How many pixels are buffered per SPI write while filling.
const FILL_CHUNK: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DisplayError {
    Spi,
    Pin,
}

pub(crate) struct Hx8357<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST> Hx8357<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    pub(crate) fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    pub(crate) fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        self.rst.set_low().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(120);

        self.command(CMD_SWRESET, &[])?;
        delay.delay_ms(10);
        // Enable extended commands before anything else will stick.
        self.command(CMD_SETC, &[0xFF, 0x83, 0x57])?;
        delay.delay_ms(300);

        self.command(CMD_SETRGB, &[0x80, 0x00, 0x06, 0x06])?;
        self.command(CMD_SETCOM, &[0x25])?;
        self.command(CMD_SETOSC, &[0x68])?;
        self.command(CMD_SETPANEL, &[0x05])?;
        self.command(CMD_SETPWR1, &[0x00, 0x15, 0x1C, 0x1C, 0x83, 0xAA])?;
        self.command(CMD_SETSTBA, &[0x50, 0x50, 0x01, 0x3C, 0x1E, 0x08])?;
        self.command(CMD_SETCYC, &[0x02, 0x40, 0x00, 0x2A, 0x2A, 0x0D, 0x78])?;
        self.command(CMD_SETGAMMA, &GAMMA)?;
        self.command(CMD_COLMOD, &[0x55])?;
        self.command(CMD_MADCTL, &[MADCTL_PORTRAIT])?;
        self.command(CMD_TEON, &[0x00])?;
        self.command(CMD_TEARLINE, &[0x00, 0x02])?;

        self.command(CMD_SLPOUT, &[])?;
        delay.delay_ms(150);
        self.command(CMD_DISPON, &[])?;
        delay.delay_ms(50);
        Ok(())
    }

    fn command(&mut self, command: u8, args: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.spi.write(&[command]).map_err(|_| DisplayError::Spi)?;
        self.dc.set_high().map_err(|_| DisplayError::Pin)?;
        if !args.is_empty() {
            self.spi.write(args).map_err(|_| DisplayError::Spi)?;
        }
        Ok(())
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        self.command(CMD_CASET, &[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8])?;
        self.command(CMD_PASET, &[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8])?;
        self.command(CMD_RAMWR, &[])
    }

    fn push_pixels(&mut self, color: Rgb565, count: u32) -> Result<(), DisplayError> {
        let raw = color.into_storage().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&raw);
        }

        let mut remaining = count as usize;
        while remaining > 0 {
            let pixels = remaining.min(FILL_CHUNK);
            self.spi
                .write(&chunk[..pixels * 2])
                .map_err(|_| DisplayError::Spi)?;
            remaining -= pixels;
        }
        Ok(())
    }

    fn fill_clipped(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), DisplayError> {
        let clipped = area.intersection(&self.bounding_box());
        let Some(bottom_right) = clipped.bottom_right() else {
            return Ok(());
        };
        self.set_window(
            clipped.top_left.x as u16,
            clipped.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;
        self.push_pixels(color, clipped.size.width * clipped.size.height)
    }
}

impl<SPI, DC, RST> OriginDimensions for Hx8357<SPI, DC, RST> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI, DC, RST> DrawTarget for Hx8357<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= WIDTH as i32 || point.y >= HEIGHT as i32 {
                continue;
            }
            self.set_window(
                point.x as u16,
                point.y as u16,
                point.x as u16,
                point.y as u16,
            )?;
            let raw = color.into_storage().to_be_bytes();
            self.spi.write(&raw).map_err(|_| DisplayError::Spi)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_clipped(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_clipped(
            &Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32)),
            color,
        )
    }
}
