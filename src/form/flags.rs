//! Bit indices into the `/Ff` field flags entry.
//!
//! Indices are 0-based: ISO 32000 numbers bit positions from 1, so its "bit position 1"
//! (`ReadOnly`) is index 0 here.

/// The mask selecting bit `bit` of `/Ff`, or `None` if `bit` is beyond the 32-bit field.
pub fn mask(bit: u32) -> Option<u32> {
    let mask = 1u32.checked_shl(bit);
    if mask.is_none() {
        log::warn!("Flag bit {bit} out of range, ignoring");
    }
    mask
}

/// The user may not change the value of the field.
pub const READ_ONLY: u32 = 0;
/// The field shall have a value at the time it is exported by a submit-form action.
pub const REQUIRED: u32 = 1;
/// The field shall not be exported by a submit-form action.
pub const NO_EXPORT: u32 = 2;

/// Flags specific to button fields (`/FT /Btn`).
pub mod button {
    pub const NO_TOGGLE_TO_OFF: u32 = 14;
    pub const RADIO: u32 = 15;
    pub const PUSHBUTTON: u32 = 16;
    pub const RADIOS_IN_UNISON: u32 = 25;
}

/// Flags specific to text fields (`/FT /Tx`).
pub mod text {
    pub const MULTILINE: u32 = 12;
    pub const PASSWORD: u32 = 13;
    pub const FILE_SELECT: u32 = 20;
    pub const DO_NOT_SPELL_CHECK: u32 = 22;
    pub const DO_NOT_SCROLL: u32 = 23;
    pub const COMB: u32 = 24;
    pub const RICH_TEXT: u32 = 25;
}

/// Flags specific to choice fields (`/FT /Ch`).
pub mod choice {
    pub const COMBO: u32 = 17;
    pub const EDIT: u32 = 18;
    pub const SORT: u32 = 19;
    pub const MULTI_SELECT: u32 = 21;
    pub const DO_NOT_SPELL_CHECK: u32 = 22;
    pub const COMMIT_ON_SEL_CHANGE: u32 = 26;
}
