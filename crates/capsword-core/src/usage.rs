// Capsword Usage Tables
// HID usage pages and keyboard-page usage ids referenced by the engine

/// Usage page for the standard keyboard/keypad block.
pub const PAGE_KEYBOARD: u16 = 0x07;
/// Usage page for consumer controls (volume keys and friends).
pub const PAGE_CONSUMER: u16 = 0x0C;

pub const KEY_A: u16 = 0x04;
pub const KEY_B: u16 = 0x05;
pub const KEY_C: u16 = 0x06;
pub const KEY_D: u16 = 0x07;
pub const KEY_E: u16 = 0x08;
pub const KEY_F: u16 = 0x09;
pub const KEY_G: u16 = 0x0A;
pub const KEY_H: u16 = 0x0B;
pub const KEY_I: u16 = 0x0C;
pub const KEY_J: u16 = 0x0D;
pub const KEY_K: u16 = 0x0E;
pub const KEY_L: u16 = 0x0F;
pub const KEY_M: u16 = 0x10;
pub const KEY_N: u16 = 0x11;
pub const KEY_O: u16 = 0x12;
pub const KEY_P: u16 = 0x13;
pub const KEY_Q: u16 = 0x14;
pub const KEY_R: u16 = 0x15;
pub const KEY_S: u16 = 0x16;
pub const KEY_T: u16 = 0x17;
pub const KEY_U: u16 = 0x18;
pub const KEY_V: u16 = 0x19;
pub const KEY_W: u16 = 0x1A;
pub const KEY_X: u16 = 0x1B;
pub const KEY_Y: u16 = 0x1C;
pub const KEY_Z: u16 = 0x1D;

pub const KEY_1: u16 = 0x1E;
pub const KEY_2: u16 = 0x1F;
pub const KEY_3: u16 = 0x20;
pub const KEY_4: u16 = 0x21;
pub const KEY_5: u16 = 0x22;
pub const KEY_6: u16 = 0x23;
pub const KEY_7: u16 = 0x24;
pub const KEY_8: u16 = 0x25;
pub const KEY_9: u16 = 0x26;
pub const KEY_0: u16 = 0x27;

pub const KEY_ENTER: u16 = 0x28;
pub const KEY_ESC: u16 = 0x29;
pub const KEY_BACKSPACE: u16 = 0x2A;
pub const KEY_TAB: u16 = 0x2B;
pub const KEY_SPACE: u16 = 0x2C;
pub const KEY_MINUS: u16 = 0x2D;
pub const KEY_EQUAL: u16 = 0x2E;
pub const KEY_LEFT_BRACKET: u16 = 0x2F;
pub const KEY_RIGHT_BRACKET: u16 = 0x30;
pub const KEY_BACKSLASH: u16 = 0x31;
pub const KEY_SEMICOLON: u16 = 0x33;
pub const KEY_APOSTROPHE: u16 = 0x34;
pub const KEY_GRAVE: u16 = 0x35;
pub const KEY_COMMA: u16 = 0x36;
pub const KEY_DOT: u16 = 0x37;
pub const KEY_SLASH: u16 = 0x38;

pub const KEY_LEFT_CTRL: u16 = 0xE0;
pub const KEY_LEFT_SHIFT: u16 = 0xE1;
pub const KEY_LEFT_ALT: u16 = 0xE2;
pub const KEY_LEFT_META: u16 = 0xE3;
pub const KEY_RIGHT_CTRL: u16 = 0xE4;
pub const KEY_RIGHT_SHIFT: u16 = 0xE5;
pub const KEY_RIGHT_ALT: u16 = 0xE6;
pub const KEY_RIGHT_META: u16 = 0xE7;

/// Resolve a symbolic key name from a configuration file to its usage id
/// on the keyboard page.
///
/// Single letters and digits resolve arithmetically; everything else goes
/// through the name table. Names are case-insensitive.
pub fn usage_from_name(name: &str) -> Option<u16> {
    let upper = name.trim().to_ascii_uppercase();
    if upper.len() == 1 {
        let c = upper.as_bytes()[0];
        if c.is_ascii_uppercase() {
            return Some(KEY_A + u16::from(c - b'A'));
        }
        if c == b'0' {
            return Some(KEY_0);
        }
        if c.is_ascii_digit() {
            return Some(KEY_1 + u16::from(c - b'1'));
        }
    }
    let id = match upper.as_str() {
        "ENTER" => KEY_ENTER,
        "ESC" | "ESCAPE" => KEY_ESC,
        "BACKSPACE" => KEY_BACKSPACE,
        "TAB" => KEY_TAB,
        "SPACE" => KEY_SPACE,
        "MINUS" => KEY_MINUS,
        "EQUAL" => KEY_EQUAL,
        "LEFT_BRACKET" => KEY_LEFT_BRACKET,
        "RIGHT_BRACKET" => KEY_RIGHT_BRACKET,
        "BACKSLASH" => KEY_BACKSLASH,
        "SEMICOLON" => KEY_SEMICOLON,
        "APOSTROPHE" => KEY_APOSTROPHE,
        "GRAVE" => KEY_GRAVE,
        "COMMA" => KEY_COMMA,
        "DOT" | "PERIOD" => KEY_DOT,
        "SLASH" => KEY_SLASH,
        "LEFT_CTRL" => KEY_LEFT_CTRL,
        "LEFT_SHIFT" => KEY_LEFT_SHIFT,
        "LEFT_ALT" => KEY_LEFT_ALT,
        "LEFT_META" => KEY_LEFT_META,
        "RIGHT_CTRL" => KEY_RIGHT_CTRL,
        "RIGHT_SHIFT" => KEY_RIGHT_SHIFT,
        "RIGHT_ALT" => KEY_RIGHT_ALT,
        "RIGHT_META" => KEY_RIGHT_META,
        _ => return None,
    };
    Some(id)
}
