//! The mode menu. Touching a row records that mode as the pending target
//! and counts as a switch request; the controller reads the selection once,
//! at the moment it leaves menu mode.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::config::{
    BODY_FONT, MENU_MARGIN, MENU_ROW_HEIGHT, MENU_TOP, SCREEN_WIDTH, TITLE_FONT,
};
use crate::hal::Board;
use crate::ui::{Screen, ScreenEnv, UiMode};

const MENU_ITEMS: [UiMode; 6] = [
    UiMode::Configure,
    UiMode::Testcard,
    UiMode::Touchpaint,
    UiMode::TextPage,
    UiMode::EtchASketch,
    UiMode::TestRig,
];

const ITEM_LABELS: [&str; 6] = [
    "Configure",
    "Testcard: basic graphics",
    "Touchpaint",
    "Predictive text",
    "Etch-a-sketch",
    "Factory test rig",
];

pub struct MenuScreen {
    selected: Option<UiMode>,
    last_selected: Option<UiMode>,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            selected: None,
            last_selected: None,
        }
    }

    /// Consume the pending selection. Unset means the menu was left without
    /// a row touch registering, which the controller treats as "stay".
    pub fn take_selected(&mut self) -> Option<UiMode> {
        self.selected.take()
    }

    /// The most recent selection ever made; survives mode round-trips.
    pub fn last_selected(&self) -> Option<UiMode> {
        self.last_selected
    }

    fn row_at(point: Point) -> Option<usize> {
        if point.x < MENU_MARGIN || point.x >= SCREEN_WIDTH - MENU_MARGIN {
            return None;
        }
        if point.y < MENU_TOP {
            return None;
        }
        let row = (point.y - MENU_TOP) / MENU_ROW_HEIGHT;
        if (row as usize) < MENU_ITEMS.len() {
            Some(row as usize)
        } else {
            None
        }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn draw<B: Board>(&mut self, board: &mut B, _env: &ScreenEnv) {
        let display = board.display();
        let _ = TITLE_FONT.render_aligned(
            "tactus",
            Point::new(SCREEN_WIDTH / 2, 40),
            VerticalPosition::Baseline,
            HorizontalAlignment::Center,
            FontColor::Transparent(Rgb565::GREEN),
            display,
        );

        for (index, label) in ITEM_LABELS.iter().enumerate() {
            let top = MENU_TOP + index as i32 * MENU_ROW_HEIGHT;
            let outline = if self.last_selected == Some(MENU_ITEMS[index]) {
                Rgb565::YELLOW
            } else {
                Rgb565::BLUE
            };
            let _ = Rectangle::new(
                Point::new(MENU_MARGIN, top),
                Size::new(
                    (SCREEN_WIDTH - 2 * MENU_MARGIN) as u32,
                    (MENU_ROW_HEIGHT - 8) as u32,
                ),
            )
            .into_styled(PrimitiveStyle::with_stroke(outline, 2))
            .draw(display);
            let _ = BODY_FONT.render_aligned(
                *label,
                Point::new(MENU_MARGIN + 10, top + MENU_ROW_HEIGHT / 2),
                VerticalPosition::Center,
                HorizontalAlignment::Left,
                FontColor::Transparent(Rgb565::WHITE),
                display,
            );
        }
    }

    fn handle_touch<B: Board>(&mut self, _board: &mut B, point: Point) -> bool {
        match Self::row_at(point) {
            Some(row) => {
                let mode = MENU_ITEMS[row];
                self.selected = Some(mode);
                self.last_selected = Some(mode);
                true
            }
            None => false,
        }
    }

    fn run_each_turn<B: Board>(&mut self, _board: &mut B) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::TestBoard;

    #[test]
    fn row_touch_records_selection_and_requests_switch() {
        let mut board = TestBoard::new();
        let mut menu = MenuScreen::new();

        let second_row = Point::new(SCREEN_WIDTH / 2, MENU_TOP + MENU_ROW_HEIGHT + 10);
        assert!(menu.handle_touch(&mut board, second_row));
        assert_eq!(menu.take_selected(), Some(UiMode::Testcard));
        // The selection is read-once.
        assert_eq!(menu.take_selected(), None);
        // But the last selection survives for highlighting.
        assert_eq!(menu.last_selected(), Some(UiMode::Testcard));
    }

    #[test]
    fn touches_outside_the_rows_do_nothing() {
        let mut board = TestBoard::new();
        let mut menu = MenuScreen::new();

        assert!(!menu.handle_touch(&mut board, Point::new(SCREEN_WIDTH / 2, 10)));
        assert!(!menu.handle_touch(
            &mut board,
            Point::new(2, MENU_TOP + 10)
        ));
        assert!(!menu.handle_touch(
            &mut board,
            Point::new(SCREEN_WIDTH / 2, MENU_TOP + 6 * MENU_ROW_HEIGHT + 1)
        ));
        assert_eq!(menu.take_selected(), None);
    }
}
