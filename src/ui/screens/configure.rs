//! Device info page: identity, battery, hardware revision. The switcher
//! hint (and the switcher itself) only appear once the device has been
//! provisioned, since before that there is nowhere sensible to go back to.

use core::fmt::Write as _;

use embedded_graphics::{geometry::Point, pixelcolor::Rgb565, prelude::*};
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::board::HARDWARE_SPIN;
use crate::config::{BODY_FONT, TITLE_FONT};
use crate::hal::Board;
use crate::ui::widgets::{draw_switcher, format_mac, show_line, switcher_hit};
use crate::ui::{Screen, ScreenEnv};

const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct ConfigureScreen;

impl ConfigureScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigureScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ConfigureScreen {
    fn draw<B: Board>(&mut self, board: &mut B, env: &ScreenEnv) {
        let mac = board.mac_address();
        let battery_mv = board.battery_millivolts();

        let display = board.display();
        let _ = TITLE_FONT.render_aligned(
            "Welcome to tactus!",
            Point::new(4, 24),
            VerticalPosition::Baseline,
            HorizontalAlignment::Left,
            FontColor::Transparent(Rgb565::GREEN),
            display,
        );

        let mut y = 30;
        if env.provisioned {
            show_line(display, &BODY_FONT, "(where you see the arrow,", Rgb565::BLUE, &mut y);
            show_line(display, &BODY_FONT, "  press for menu)", Rgb565::BLUE, &mut y);
            draw_switcher(display);
        } else {
            show_line(display, &BODY_FONT, "setting up...", Rgb565::RED, &mut y);
            y += 20;
        }

        y += 20;
        let mut line: heapless::String<48> = heapless::String::new();
        let _ = write!(&mut line, "MAC addr: {}", format_mac(mac));
        show_line(display, &BODY_FONT, line.as_str(), Rgb565::BLUE, &mut y);

        line.clear();
        let _ = write!(&mut line, "Firmware: {FIRMWARE_VERSION}");
        show_line(display, &BODY_FONT, line.as_str(), Rgb565::BLUE, &mut y);

        line.clear();
        let _ = write!(&mut line, "VBAT: {} mV", battery_mv);
        show_line(display, &BODY_FONT, line.as_str(), Rgb565::BLUE, &mut y);

        line.clear();
        let _ = write!(&mut line, "Hardware version: {HARDWARE_SPIN}");
        show_line(display, &BODY_FONT, line.as_str(), Rgb565::BLUE, &mut y);
    }

    fn handle_touch<B: Board>(&mut self, _board: &mut B, point: Point) -> bool {
        switcher_hit(point)
    }

    fn run_each_turn<B: Board>(&mut self, _board: &mut B) {}
}
