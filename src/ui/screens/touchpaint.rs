//! Finger painting. The top row is a palette (the switcher keeps the last
//! cell); everywhere else an accepted touch paints a dot in the current
//! color. The controller runs this mode with a much shorter touch time
//! gate so strokes repeat quickly.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
};

use crate::config::{BOX_SIZE, PEN_RADIUS, SWITCHER_COLUMN};
use crate::hal::Board;
use crate::ui::widgets::{draw_switcher, switcher_hit};
use crate::ui::{Screen, ScreenEnv};

const PALETTE: [Rgb565; 6] = [
    Rgb565::RED,
    Rgb565::YELLOW,
    Rgb565::GREEN,
    Rgb565::CYAN,
    Rgb565::BLUE,
    Rgb565::MAGENTA,
];

pub struct TouchpaintScreen {
    current: usize,
}

impl TouchpaintScreen {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current_color(&self) -> Rgb565 {
        PALETTE[self.current]
    }

    fn draw_palette<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) {
        for (index, color) in PALETTE.iter().enumerate() {
            let _ = Rectangle::new(
                Point::new(index as i32 * BOX_SIZE, 0),
                Size::new(BOX_SIZE as u32, BOX_SIZE as u32),
            )
            .into_styled(PrimitiveStyle::with_fill(*color))
            .draw(display);
        }
        // Outline the active cell.
        let _ = Rectangle::new(
            Point::new(self.current as i32 * BOX_SIZE, 0),
            Size::new(BOX_SIZE as u32, BOX_SIZE as u32),
        )
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 3))
        .draw(display);
    }
}

impl Default for TouchpaintScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TouchpaintScreen {
    fn draw<B: Board>(&mut self, board: &mut B, _env: &ScreenEnv) {
        let display = board.display();
        self.draw_palette(display);
        draw_switcher(display);
    }

    fn handle_touch<B: Board>(&mut self, board: &mut B, point: Point) -> bool {
        if switcher_hit(point) {
            return true;
        }

        let display = board.display();
        if point.y < BOX_SIZE {
            let cell = point.x / BOX_SIZE;
            if (0..SWITCHER_COLUMN).contains(&cell) && (cell as usize) < PALETTE.len() {
                self.current = cell as usize;
                self.draw_palette(display);
            }
            return false;
        }

        if point.y > BOX_SIZE + PEN_RADIUS as i32 {
            let _ = Circle::with_center(point, PEN_RADIUS * 2)
                .into_styled(PrimitiveStyle::with_fill(PALETTE[self.current]))
                .draw(display);
        }
        false
    }

    fn run_each_turn<B: Board>(&mut self, _board: &mut B) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::TestBoard;

    #[test]
    fn palette_touch_selects_color_without_switching_modes() {
        let mut board = TestBoard::new();
        let mut paint = TouchpaintScreen::new();

        assert!(!paint.handle_touch(&mut board, Point::new(BOX_SIZE * 4 + 5, 10)));
        assert_eq!(paint.current_color(), Rgb565::BLUE);
    }

    #[test]
    fn canvas_touches_and_switcher_touches_are_distinguished() {
        let mut board = TestBoard::new();
        let mut paint = TouchpaintScreen::new();

        assert!(!paint.handle_touch(&mut board, Point::new(160, 240)));
        assert!(paint.handle_touch(&mut board, Point::new(300, 10)));
        // Painting never changes the selected color.
        assert_eq!(paint.current_color(), Rgb565::RED);
    }
}
