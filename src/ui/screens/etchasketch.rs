//! Tilt-to-draw. Every turn samples the accelerometer and nudges the pen
//! one pixel per sufficiently tilted axis, leaving a green trail inside a
//! blue border.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    Pixel,
};

use crate::board::ACCEL_INVERT_X;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::hal::Board;
use crate::ui::widgets::{draw_switcher, switcher_hit};
use crate::ui::{Screen, ScreenEnv};

/// Tilt below this magnitude (m/s²) does not move the pen.
const TILT_DEADBAND: f32 = 2.0;

pub struct EtchASketchScreen {
    pen: Point,
}

impl EtchASketchScreen {
    pub fn new() -> Self {
        Self {
            pen: Point::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2),
        }
    }

    pub fn pen(&self) -> Point {
        self.pen
    }

    fn step(value: f32) -> i32 {
        if value > TILT_DEADBAND {
            1
        } else if value < -TILT_DEADBAND {
            -1
        } else {
            0
        }
    }
}

impl Default for EtchASketchScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for EtchASketchScreen {
    fn draw<B: Board>(&mut self, board: &mut B, _env: &ScreenEnv) {
        self.pen = Point::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);

        let display = board.display();
        let _ = Rectangle::new(
            Point::zero(),
            Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
        )
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::BLUE, 1))
        .draw(display);
        draw_switcher(display);
    }

    fn handle_touch<B: Board>(&mut self, _board: &mut B, point: Point) -> bool {
        switcher_hit(point)
    }

    fn run_each_turn<B: Board>(&mut self, board: &mut B) {
        let reading = board.accel();
        let tilt_x = if ACCEL_INVERT_X { -reading.x } else { reading.x };

        self.pen.x = (self.pen.x + Self::step(tilt_x)).clamp(1, SCREEN_WIDTH - 2);
        self.pen.y = (self.pen.y + Self::step(reading.y)).clamp(1, SCREEN_HEIGHT - 2);

        let _ = Pixel(self.pen, Rgb565::GREEN).draw(board.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::AccelReading;
    use crate::ui::testing::TestBoard;

    #[test]
    fn tilt_moves_the_pen_and_the_deadband_holds_it() {
        let mut board = TestBoard::new();
        let mut etch = EtchASketchScreen::new();
        let start = etch.pen();

        board.accel = AccelReading {
            x: 0.5,
            y: 3.0,
            z: 9.8,
        };
        etch.run_each_turn(&mut board);
        assert_eq!(etch.pen(), Point::new(start.x, start.y + 1));

        board.accel = AccelReading {
            x: 0.0,
            y: 0.0,
            z: 9.8,
        };
        etch.run_each_turn(&mut board);
        assert_eq!(etch.pen(), Point::new(start.x, start.y + 1));
    }

    #[test]
    fn pen_clamps_inside_the_border() {
        let mut board = TestBoard::new();
        let mut etch = EtchASketchScreen::new();

        board.accel = AccelReading {
            x: 0.0,
            y: -3.0,
            z: 9.8,
        };
        for _ in 0..SCREEN_HEIGHT {
            etch.run_each_turn(&mut board);
        }
        assert_eq!(etch.pen().y, 1);
    }
}
