// Capsword Key Classification
// Pure predicates over a usage-page/usage-id pair

use crate::usage;

/// Punctuation usages that carry letters on the common Russian layout,
/// where US punctuation positions produce alphabetic characters:
/// [ -> Х, ] -> Ъ, ; -> Ж, ' -> Э, , -> Б, . -> Ю
const CYRILLIC_LETTER_USAGES: &[u16] = &[
    usage::KEY_LEFT_BRACKET,
    usage::KEY_RIGHT_BRACKET,
    usage::KEY_SEMICOLON,
    usage::KEY_APOSTROPHE,
    usage::KEY_COMMA,
    usage::KEY_DOT,
];

/// Check if a key produces a letter: the A-Z block plus the fixed
/// Cyrillic punctuation set.
pub const fn is_alpha(usage_page: u16, usage_id: u16) -> bool {
    if usage_page != usage::PAGE_KEYBOARD {
        return false;
    }
    if usage_id >= usage::KEY_A && usage_id <= usage::KEY_Z {
        return true;
    }
    let mut i = 0;
    while i < CYRILLIC_LETTER_USAGES.len() {
        if CYRILLIC_LETTER_USAGES[i] == usage_id {
            return true;
        }
        i += 1;
    }
    false
}

/// Check if a key is a digit (the contiguous 1-through-0 usage block)
pub const fn is_numeric(usage_page: u16, usage_id: u16) -> bool {
    usage_page == usage::PAGE_KEYBOARD && usage_id >= usage::KEY_1 && usage_id <= usage::KEY_0
}

/// Check if a key is left or right Shift on the keyboard page
pub const fn is_shift(usage_page: u16, usage_id: u16) -> bool {
    usage_page == usage::PAGE_KEYBOARD
        && (usage_id == usage::KEY_LEFT_SHIFT || usage_id == usage::KEY_RIGHT_SHIFT)
}

/// Check if a key is any modifier (Ctrl/Shift/Alt/GUI, left or right)
pub const fn is_modifier(usage_page: u16, usage_id: u16) -> bool {
    usage_page == usage::PAGE_KEYBOARD
        && usage_id >= usage::KEY_LEFT_CTRL
        && usage_id <= usage::KEY_RIGHT_META
}
