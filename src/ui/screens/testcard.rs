//! Static display test pattern: color bars, a bullseye, and a border.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
};
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TITLE_FONT};
use crate::hal::Board;
use crate::ui::widgets::{draw_switcher, switcher_hit};
use crate::ui::{Screen, ScreenEnv};

const BARS: [Rgb565; 8] = [
    Rgb565::WHITE,
    Rgb565::YELLOW,
    Rgb565::CYAN,
    Rgb565::GREEN,
    Rgb565::MAGENTA,
    Rgb565::RED,
    Rgb565::BLUE,
    Rgb565::BLACK,
];

pub struct TestcardScreen;

impl TestcardScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TestcardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TestcardScreen {
    fn draw<B: Board>(&mut self, board: &mut B, _env: &ScreenEnv) {
        let display = board.display();

        let bar_width = SCREEN_WIDTH / BARS.len() as i32;
        for (index, color) in BARS.iter().enumerate() {
            let _ = Rectangle::new(
                Point::new(index as i32 * bar_width, 120),
                Size::new(bar_width as u32, 200),
            )
            .into_styled(PrimitiveStyle::with_fill(*color))
            .draw(display);
        }

        // Bullseye below the bars.
        for (diameter, color) in [(120_u32, Rgb565::WHITE), (80, Rgb565::RED), (40, Rgb565::WHITE)]
        {
            let _ = Circle::with_center(Point::new(SCREEN_WIDTH / 2, 400), diameter)
                .into_styled(PrimitiveStyle::with_stroke(color, 4))
                .draw(display);
        }

        let _ = Rectangle::new(
            Point::zero(),
            Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
        )
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
        .draw(display);

        let _ = TITLE_FONT.render_aligned(
            "testcard",
            Point::new(SCREEN_WIDTH / 2, 80),
            VerticalPosition::Baseline,
            HorizontalAlignment::Center,
            FontColor::Transparent(Rgb565::YELLOW),
            display,
        );

        draw_switcher(display);
    }

    fn handle_touch<B: Board>(&mut self, _board: &mut B, point: Point) -> bool {
        switcher_hit(point)
    }

    fn run_each_turn<B: Board>(&mut self, _board: &mut B) {}
}
