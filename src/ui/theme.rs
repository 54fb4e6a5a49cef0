use ratatui::style::Color;

use crate::artwork::Rgb;

pub const TITLE_BLUE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const TITLE_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SPINNER: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_LABEL: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

/// Card fill; artwork transparency is flattened onto this colour.
pub const CARD_BACKGROUND: Rgb = Rgb(0x1c, 0x1c, 0x1c);
pub const CARD_BG: Color = rgb(CARD_BACKGROUND);

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
