//! Drawing helpers shared by the screens.

use core::fmt::Write as _;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, Triangle},
};
use u8g2_fonts::{
    types::{FontColor, HorizontalAlignment, VerticalPosition},
    FontRenderer,
};

use crate::config::{BOX_SIZE, HALF_BOX, SWITCHER_COLUMN};

/// True when a display-space contact lands in the mode-switch hot-zone:
/// the top-right grid cell.
pub fn switcher_hit(point: Point) -> bool {
    point.y < BOX_SIZE && point.x > BOX_SIZE * SWITCHER_COLUMN
}

/// The switcher affordance: a white tab with a right-pointing arrow, drawn
/// inside the hot-zone cell.
pub fn draw_switcher<D: DrawTarget<Color = Rgb565>>(display: &mut D) {
    let left = BOX_SIZE * SWITCHER_COLUMN + 8;
    let _ = Rectangle::new(
        Point::new(left, 15),
        Size::new((BOX_SIZE - 15) as u32, (HALF_BOX - 10) as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
    .draw(display);
    let _ = Triangle::new(
        Point::new(left + 15, 35),
        Point::new(left + 15, 5),
        Point::new(left + 30, 20),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
    .draw(display);
}

/// Render one line of text and advance the caller's y cursor, the shared
/// idiom of the text-heavy screens.
pub fn show_line<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    font: &FontRenderer,
    text: &str,
    color: Rgb565,
    y_cursor: &mut i32,
) {
    *y_cursor += 20;
    let _ = font.render_aligned(
        text,
        Point::new(4, *y_cursor),
        VerticalPosition::Baseline,
        HorizontalAlignment::Left,
        FontColor::Transparent(color),
        display,
    );
}

/// `aa:bb:cc:dd:ee:ff` formatting for the configure screen.
pub fn format_mac(mac: [u8; 6]) -> heapless::String<18> {
    let mut out = heapless::String::new();
    for (index, byte) in mac.iter().enumerate() {
        if index > 0 {
            let _ = out.push(':');
        }
        let _ = write!(&mut out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_zone_is_the_top_right_cell() {
        assert!(switcher_hit(Point::new(300, 10)));
        assert!(switcher_hit(Point::new(281, 39)));
        // On the column boundary or below the top row: not a hit.
        assert!(!switcher_hit(Point::new(280, 10)));
        assert!(!switcher_hit(Point::new(300, 40)));
        assert!(!switcher_hit(Point::new(10, 10)));
    }

    #[test]
    fn mac_formats_as_colon_separated_hex() {
        let text = format_mac([0x24, 0x6F, 0x28, 0xAB, 0x00, 0x01]);
        assert_eq!(text.as_str(), "24:6f:28:ab:00:01");
    }
}
