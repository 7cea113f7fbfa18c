//! One screen per UI mode. Screens own their private interaction state and
//! share nothing with each other.

mod configure;
mod etchasketch;
mod menu;
mod testcard;
mod testrig;
mod textpage;
mod touchpaint;

pub use configure::ConfigureScreen;
pub use etchasketch::EtchASketchScreen;
pub use menu::MenuScreen;
pub use testcard::TestcardScreen;
pub use testrig::TestRigScreen;
pub use textpage::TextPageScreen;
pub use touchpaint::TouchpaintScreen;
