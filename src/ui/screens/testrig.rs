//! Factory test rig entry screen: instructions plus a restart button. The
//! actual rig runs from a cold boot with all three buttons held.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::config::{BUTTON_FONT, TITLE_FONT};
use crate::hal::Board;
use crate::ui::widgets::{draw_switcher, switcher_hit};
use crate::ui::{Screen, ScreenEnv};

const RESTART_BUTTON: Rectangle = Rectangle::new(Point::new(35, 200), Size::new(250, 70));

fn restart_hit(point: Point) -> bool {
    point.x > 25 && point.x < 280 && point.y > 215 && point.y < 280
}

pub struct TestRigScreen;

impl TestRigScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TestRigScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TestRigScreen {
    fn draw<B: Board>(&mut self, board: &mut B, _env: &ScreenEnv) {
        let display = board.display();
        let lines = [
            "to enter factory",
            "test mode please",
            "restart with all 3",
            "buttons pressed",
        ];
        for (index, line) in lines.iter().enumerate() {
            let _ = TITLE_FONT.render_aligned(
                *line,
                Point::new(15, 45 + index as i32 * 35),
                VerticalPosition::Baseline,
                HorizontalAlignment::Left,
                FontColor::Transparent(Rgb565::YELLOW),
                display,
            );
        }

        let _ = RESTART_BUTTON
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::MAGENTA, 1))
            .draw(display);
        let _ = BUTTON_FONT.render_aligned(
            "restart now",
            Point::new(160, 240),
            VerticalPosition::Center,
            HorizontalAlignment::Center,
            FontColor::Transparent(Rgb565::CYAN),
            display,
        );

        draw_switcher(display);
    }

    fn handle_touch<B: Board>(&mut self, board: &mut B, point: Point) -> bool {
        if restart_hit(point) {
            let _ = BUTTON_FONT.render_aligned(
                "restarting...",
                Point::new(15, 300),
                VerticalPosition::Baseline,
                HorizontalAlignment::Left,
                FontColor::Transparent(Rgb565::RED),
                board.display(),
            );
            board.request_restart();
        }
        switcher_hit(point)
    }

    fn run_each_turn<B: Board>(&mut self, _board: &mut B) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::TestBoard;

    #[test]
    fn restart_button_requests_a_reboot_without_switching_modes() {
        let mut board = TestBoard::new();
        let mut rig = TestRigScreen::new();

        assert!(!rig.handle_touch(&mut board, Point::new(160, 240)));
        assert!(board.restart_requested);
    }

    #[test]
    fn switcher_still_works() {
        let mut board = TestBoard::new();
        let mut rig = TestRigScreen::new();

        assert!(rig.handle_touch(&mut board, Point::new(300, 10)));
        assert!(!board.restart_requested);
    }
}
