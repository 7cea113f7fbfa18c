//! The screen set and the mode controller.

mod controller;
pub mod screens;
mod widgets;

pub use controller::UiController;
pub use widgets::{draw_switcher, switcher_hit};

use embedded_graphics::geometry::Point;

use crate::hal::Board;

use screens::{
    ConfigureScreen, EtchASketchScreen, TestRigScreen, TestcardScreen, TextPageScreen,
    TouchpaintScreen,
};

/// The closed set of UI modes. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiMode {
    Menu,
    Configure,
    Testcard,
    Touchpaint,
    TextPage,
    EtchASketch,
    TestRig,
}

impl UiMode {
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Menu => 0,
            Self::Configure => 1,
            Self::Testcard => 2,
            Self::Touchpaint => 3,
            Self::TextPage => 4,
            Self::EtchASketch => 5,
            Self::TestRig => 6,
        }
    }

    /// The entry point for untrusted numeric mode values (serial console).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Menu),
            1 => Some(Self::Configure),
            2 => Some(Self::Testcard),
            3 => Some(Self::Touchpaint),
            4 => Some(Self::TextPage),
            5 => Some(Self::EtchASketch),
            6 => Some(Self::TestRig),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Configure => "configure",
            Self::Testcard => "testcard",
            Self::Touchpaint => "touchpaint",
            Self::TextPage => "textpage",
            Self::EtchASketch => "etchasketch",
            Self::TestRig => "testrig",
        }
    }
}

/// Controller-owned state screens may consult while drawing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenEnv {
    pub provisioned: bool,
}

/// What every screen can do. `handle_touch` reports whether the contact
/// landed in the screen's mode-switch hot-zone; screens are free to react
/// to other touches for their own purposes, but only that boolean reaches
/// the controller.
pub trait Screen {
    fn draw<B: Board>(&mut self, board: &mut B, env: &ScreenEnv);

    fn handle_touch<B: Board>(&mut self, board: &mut B, point: Point) -> bool;

    /// One unit of continuous behavior, run every tick whether or not a
    /// touch arrived.
    fn run_each_turn<B: Board>(&mut self, board: &mut B);
}

/// The non-menu screens as a closed sum. The controller keeps at most one
/// of these alive; the menu screen lives separately for the controller's
/// whole lifetime.
pub enum ActiveScreen {
    Configure(ConfigureScreen),
    Testcard(TestcardScreen),
    Touchpaint(TouchpaintScreen),
    TextPage(TextPageScreen),
    EtchASketch(EtchASketchScreen),
    TestRig(TestRigScreen),
}

impl ActiveScreen {
    /// Build the screen for a mode; `None` for [`UiMode::Menu`], which is
    /// never constructed here.
    pub fn for_mode(mode: UiMode) -> Option<Self> {
        match mode {
            UiMode::Menu => None,
            UiMode::Configure => Some(Self::Configure(ConfigureScreen::new())),
            UiMode::Testcard => Some(Self::Testcard(TestcardScreen::new())),
            UiMode::Touchpaint => Some(Self::Touchpaint(TouchpaintScreen::new())),
            UiMode::TextPage => Some(Self::TextPage(TextPageScreen::new())),
            UiMode::EtchASketch => Some(Self::EtchASketch(EtchASketchScreen::new())),
            UiMode::TestRig => Some(Self::TestRig(TestRigScreen::new())),
        }
    }
}

impl Screen for ActiveScreen {
    fn draw<B: Board>(&mut self, board: &mut B, env: &ScreenEnv) {
        match self {
            Self::Configure(s) => s.draw(board, env),
            Self::Testcard(s) => s.draw(board, env),
            Self::Touchpaint(s) => s.draw(board, env),
            Self::TextPage(s) => s.draw(board, env),
            Self::EtchASketch(s) => s.draw(board, env),
            Self::TestRig(s) => s.draw(board, env),
        }
    }

    fn handle_touch<B: Board>(&mut self, board: &mut B, point: Point) -> bool {
        match self {
            Self::Configure(s) => s.handle_touch(board, point),
            Self::Testcard(s) => s.handle_touch(board, point),
            Self::Touchpaint(s) => s.handle_touch(board, point),
            Self::TextPage(s) => s.handle_touch(board, point),
            Self::EtchASketch(s) => s.handle_touch(board, point),
            Self::TestRig(s) => s.handle_touch(board, point),
        }
    }

    fn run_each_turn<B: Board>(&mut self, board: &mut B) {
        match self {
            Self::Configure(s) => s.run_each_turn(board),
            Self::Testcard(s) => s.run_each_turn(board),
            Self::Touchpaint(s) => s.run_each_turn(board),
            Self::TextPage(s) => s.run_each_turn(board),
            Self::EtchASketch(s) => s.run_each_turn(board),
            Self::TestRig(s) => s.run_each_turn(board),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A scripted board for exercising the controller and screens off-target.

    use core::convert::Infallible;

    use embedded_graphics::{
        draw_target::DrawTarget,
        geometry::{OriginDimensions, Size},
        pixelcolor::Rgb565,
        Pixel,
    };

    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::hal::{AccelReading, Board};
    use crate::touch::TouchSample;

    /// Discards every pixel; only the dimensions matter to the core.
    pub(crate) struct NullDisplay;

    impl OriginDimensions for NullDisplay {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        }
    }

    impl DrawTarget for NullDisplay {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            pixels.into_iter().for_each(drop);
            Ok(())
        }
    }

    pub(crate) struct TestBoard {
        pub(crate) display: NullDisplay,
        pub(crate) sample: Option<TouchSample>,
        pub(crate) accel: AccelReading,
        pub(crate) restart_requested: bool,
    }

    impl TestBoard {
        pub(crate) fn new() -> Self {
            Self {
                display: NullDisplay,
                sample: None,
                accel: AccelReading::default(),
                restart_requested: false,
            }
        }
    }

    impl Board for TestBoard {
        type Display = NullDisplay;

        fn display(&mut self) -> &mut Self::Display {
            &mut self.display
        }

        fn touched(&mut self) -> bool {
            self.sample.is_some()
        }

        fn read_point(&mut self) -> TouchSample {
            self.sample.unwrap_or_default()
        }

        fn accel(&mut self) -> AccelReading {
            self.accel
        }

        fn battery_millivolts(&mut self) -> u16 {
            3_700
        }

        fn mac_address(&self) -> [u8; 6] {
            [0x24, 0x6F, 0x28, 0x00, 0x00, 0x01]
        }

        fn request_restart(&mut self) {
            self.restart_requested = true;
        }
    }
}
