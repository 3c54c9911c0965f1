use smart_leds::RGB8;

pub type Color = RGB8;

/// Color of lit cells: a dim blue.
pub const LED_COLOR: Color = RGB8 { r: 0, g: 0, b: 20 };

/// Word that switches a pixel off.
pub const OFF: u32 = 0;

/// Packs a color into the 24-bit GRB word the strip shifts in, green in the top byte.
pub const fn color_word(color: Color) -> u32 {
    ((color.r as u32) << 8) | ((color.g as u32) << 16) | (color.b as u32)
}
