// Capsword Modifier Mask
// Held-modifier bitmask in HID boot-report bit order

use bitflags::bitflags;

use crate::usage;

bitflags! {
    /// A set of modifier keys as the report protocol encodes them, one
    /// bit per side-specific modifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mods: u8 {
        const LCTL = 1 << 0;
        const LSFT = 1 << 1;
        const LALT = 1 << 2;
        const LGUI = 1 << 3;
        const RCTL = 1 << 4;
        const RSFT = 1 << 5;
        const RALT = 1 << 6;
        const RGUI = 1 << 7;
    }
}

impl Mods {
    /// Modifier involvement that ends a word run: any Ctrl/Alt/GUI, either
    /// side. Shift in either form is never disallowed.
    pub const DISALLOWED: Mods = Mods::LCTL
        .union(Mods::RCTL)
        .union(Mods::LALT)
        .union(Mods::RALT)
        .union(Mods::LGUI)
        .union(Mods::RGUI);

    /// The flag for a modifier key's usage, if the pair names one.
    pub fn from_usage(usage_page: u16, usage_id: u16) -> Option<Mods> {
        if usage_page != usage::PAGE_KEYBOARD {
            return None;
        }
        match usage_id {
            usage::KEY_LEFT_CTRL => Some(Mods::LCTL),
            usage::KEY_LEFT_SHIFT => Some(Mods::LSFT),
            usage::KEY_LEFT_ALT => Some(Mods::LALT),
            usage::KEY_LEFT_META => Some(Mods::LGUI),
            usage::KEY_RIGHT_CTRL => Some(Mods::RCTL),
            usage::KEY_RIGHT_SHIFT => Some(Mods::RSFT),
            usage::KEY_RIGHT_ALT => Some(Mods::RALT),
            usage::KEY_RIGHT_META => Some(Mods::RGUI),
            _ => None,
        }
    }

    /// Parse a single modifier name from a configuration file.
    ///
    /// Accepts the side-specific names with their common aliases
    /// (e.g. LShift/LSft, RMeta/RGui), case-insensitively.
    pub fn from_name(name: &str) -> Option<Mods> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lctrl" | "lctl" => Some(Mods::LCTL),
            "lshift" | "lsft" => Some(Mods::LSFT),
            "lalt" => Some(Mods::LALT),
            "lmeta" | "lgui" => Some(Mods::LGUI),
            "rctrl" | "rctl" => Some(Mods::RCTL),
            "rshift" | "rsft" => Some(Mods::RSFT),
            "ralt" => Some(Mods::RALT),
            "rmeta" | "rgui" => Some(Mods::RGUI),
            _ => None,
        }
    }
}
