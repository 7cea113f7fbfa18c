//! Nine-key text entry demo. Each key carries a letter group; a tap appends
//! the group's first letter to a bounded history line drawn above the keys.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::config::{BODY_FONT, BUTTON_FONT, SCREEN_WIDTH};
use crate::hal::Board;
use crate::ui::widgets::{draw_switcher, switcher_hit};
use crate::ui::{Screen, ScreenEnv};

const KEY_GROUPS: [&str; 9] = [
    "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz", " ",
];

const KEYS_TOP: i32 = 220;
const KEY_SIZE: i32 = 80;
const KEY_GAP: i32 = 4;
const HISTORY_MAX: usize = 24;

pub struct TextPageScreen {
    history: heapless::String<HISTORY_MAX>,
}

impl TextPageScreen {
    pub fn new() -> Self {
        Self {
            history: heapless::String::new(),
        }
    }

    pub fn history(&self) -> &str {
        self.history.as_str()
    }

    fn key_at(point: Point) -> Option<usize> {
        if point.y < KEYS_TOP {
            return None;
        }
        let col = point.x / (KEY_SIZE + KEY_GAP);
        let row = (point.y - KEYS_TOP) / (KEY_SIZE + KEY_GAP);
        if (0..3).contains(&col) && (0..3).contains(&row) {
            Some((row * 3 + col) as usize)
        } else {
            None
        }
    }

    fn draw_history<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) {
        let _ = Rectangle::new(Point::new(0, 80), Size::new(SCREEN_WIDTH as u32, 40))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::BLACK))
            .draw(display);
        let _ = BODY_FONT.render_aligned(
            self.history.as_str(),
            Point::new(8, 108),
            VerticalPosition::Baseline,
            HorizontalAlignment::Left,
            FontColor::Transparent(Rgb565::GREEN),
            display,
        );
    }
}

impl Default for TextPageScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TextPageScreen {
    fn draw<B: Board>(&mut self, board: &mut B, _env: &ScreenEnv) {
        let display = board.display();
        let _ = BODY_FONT.render_aligned(
            "tap keys to type",
            Point::new(8, 40),
            VerticalPosition::Baseline,
            HorizontalAlignment::Left,
            FontColor::Transparent(Rgb565::WHITE),
            display,
        );

        for (index, group) in KEY_GROUPS.iter().enumerate() {
            let col = (index % 3) as i32;
            let row = (index / 3) as i32;
            let origin = Point::new(col * (KEY_SIZE + KEY_GAP) + 6, KEYS_TOP + row * (KEY_SIZE + KEY_GAP));
            let _ = Rectangle::new(origin, Size::new(KEY_SIZE as u32 - 12, KEY_SIZE as u32 - 8))
                .into_styled(PrimitiveStyle::with_stroke(Rgb565::BLUE, 2))
                .draw(display);
            let _ = BUTTON_FONT.render_aligned(
                *group,
                origin + Point::new(KEY_SIZE / 2 - 6, KEY_SIZE / 2),
                VerticalPosition::Center,
                HorizontalAlignment::Center,
                FontColor::Transparent(Rgb565::WHITE),
                display,
            );
        }

        self.draw_history(display);
        draw_switcher(display);
    }

    fn handle_touch<B: Board>(&mut self, board: &mut B, point: Point) -> bool {
        if switcher_hit(point) {
            return true;
        }
        if let Some(key) = Self::key_at(point) {
            if self.history.len() == HISTORY_MAX {
                self.history.clear();
            }
            if let Some(letter) = KEY_GROUPS[key].chars().next() {
                let _ = self.history.push(letter);
            }
            self.draw_history(board.display());
        }
        false
    }

    fn run_each_turn<B: Board>(&mut self, _board: &mut B) {}
}
