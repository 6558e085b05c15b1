//! Built-in 5x5 glyph patterns
//!
//! These are the glyphs the built-in atlas is painted from. Each glyph is five
//! rows, bit 4 is the leftmost column (1 = ink, 0 = paper).

/// Every character the atlas has a cell for, in cell order
pub const CHARSET: &str = "abcdefghijklmnopqrstuvwxyz0123456789!?# ()[].,-_:;+=";

/// Drawn for characters that are not in [`CHARSET`]
pub const FALLBACK: [u8; 5] = [0b00000, 0b01110, 0b01010, 0b01110, 0b00000];

/// Returns the 5x5 pattern for a character of [`CHARSET`]
pub fn pattern(c: char) -> Option<[u8; 5]> {
    let rows = match c {
        'a' => [0b01110, 0b10001, 0b11111, 0b10001, 0b10001],
        'b' => [0b11110, 0b10001, 0b11110, 0b10001, 0b11110],
        'c' => [0b01111, 0b10000, 0b10000, 0b10000, 0b01111],
        'd' => [0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'e' => [0b11111, 0b10000, 0b11110, 0b10000, 0b11111],
        'f' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000],
        'g' => [0b01111, 0b10000, 0b10011, 0b10001, 0b01111],
        'h' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
        'i' => [0b11111, 0b00100, 0b00100, 0b00100, 0b11111],
        'j' => [0b00111, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'm' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001],
        'n' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001],
        'o' => [0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'q' => [0b01110, 0b10001, 0b10101, 0b10010, 0b01101],
        'r' => [0b11110, 0b10001, 0b11110, 0b10100, 0b10010],
        's' => [0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100],
        'u' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'v' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'x' => [0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'z' => [0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '0' => [0b01110, 0b10011, 0b10101, 0b11001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b01110],
        '2' => [0b11110, 0b00001, 0b01110, 0b10000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00110, 0b00001, 0b11110],
        '4' => [0b10010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b11110],
        '6' => [0b01110, 0b10000, 0b11110, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b00100],
        '8' => [0b01110, 0b10001, 0b01110, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b01111, 0b00001, 0b01110],
        '!' => [0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00110, 0b00000, 0b00100],
        '#' => [0b01010, 0b11111, 0b01010, 0b11111, 0b01010],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '(' => [0b00010, 0b00100, 0b00100, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00100, 0b00100, 0b01000],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b01110],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b01110, 0b00000, 0b00000],
        '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        ':' => [0b00000, 0b00100, 0b00000, 0b00100, 0b00000],
        ';' => [0b00000, 0b00100, 0b00000, 0b00100, 0b01000],
        '+' => [0b00000, 0b00100, 0b01110, 0b00100, 0b00000],
        '=' => [0b00000, 0b01110, 0b00000, 0b01110, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Whether the pattern has ink at column `x` (0 = left) of `row`
#[inline]
pub fn is_set(row: u8, x: u32) -> bool {
    (row >> (4 - x)) & 1 == 1
}
