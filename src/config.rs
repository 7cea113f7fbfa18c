use u8g2_fonts::{fonts, FontRenderer};

pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 480;

// Touch filter defaults; all runtime-tunable over the serial console.
pub const DEFAULT_TIME_SENSITIVITY_MS: u64 = 150;
pub const DEFAULT_DIST_SENSITIVITY: u16 = 200;
pub const DEFAULT_TREAT_AS_NEW_MS: u64 = 600;
pub const DEFAULT_MODE_CHANGE_VOTES: u8 = 1;

/// Touchpaint wants quick stroke repeats, so it runs with a much shorter
/// time gate than every other screen.
pub const TOUCHPAINT_TIME_SENSITIVITY_MS: u64 = 25;

// The screen grid: 40 px cells, 8 across. The top-right cell is the mode
// switcher hot-zone on every screen that shows one.
pub const BOX_SIZE: i32 = 40;
pub const HALF_BOX: i32 = BOX_SIZE / 2;
pub const SWITCHER_COLUMN: i32 = 7;

pub const PEN_RADIUS: u32 = 3;

pub const MENU_TOP: i32 = 84;
pub const MENU_ROW_HEIGHT: i32 = 56;
pub const MENU_MARGIN: i32 = 10;

pub const TITLE_FONT: FontRenderer = FontRenderer::new::<fonts::u8g2_font_helvB14_tf>();
pub const BODY_FONT: FontRenderer = FontRenderer::new::<fonts::u8g2_font_helvB10_tf>();
pub const BUTTON_FONT: FontRenderer = FontRenderer::new::<fonts::u8g2_font_helvB12_tf>();

pub const UI_TICK_MS: u64 = 10;
pub const CONSOLE_LINE_MAX: usize = 64;
pub const CONSOLE_BAUD: u32 = 115_200;
