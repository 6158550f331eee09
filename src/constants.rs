//! Application-wide constants
//!
//! File names, X11 protocol values and validation ranges used by the
//! configuration loader, kept in one place.

/// Config file location and identity
pub mod config {
    /// Config file name, looked up in the home directory when no path is given
    pub const FILENAME: &str = ".awesomerc";

    /// Prefix of the initial status bar text (followed by the crate version)
    pub const STATUS_PREFIX: &str = "awesome";
}

/// X11 core protocol values
pub mod x11 {
    pub const SHIFT_MASK: u16 = 1 << 0;
    pub const LOCK_MASK: u16 = 1 << 1;
    pub const CONTROL_MASK: u16 = 1 << 2;
    pub const MOD1_MASK: u16 = 1 << 3;
    pub const MOD2_MASK: u16 = 1 << 4;
    pub const MOD3_MASK: u16 = 1 << 5;
    pub const MOD4_MASK: u16 = 1 << 6;
    pub const MOD5_MASK: u16 = 1 << 7;

    /// Number of modifier slots in the core modifier mapping (Shift..Mod5)
    pub const MODIFIER_SLOTS: usize = 8;
}

/// Keysym codes referenced directly by the loader
pub mod keysym {
    /// NoSymbol
    pub const NO_SYMBOL: u32 = 0;

    /// XK_Num_Lock
    pub const NUM_LOCK: u32 = 0xff7f;

    /// Offset added to a Unicode code point to form a keysym (`U+XXXX` form)
    pub const UNICODE_OFFSET: u32 = 0x0100_0000;
}

/// Clamping ranges applied after the config file is read
pub mod validation {
    /// Upper bound of `general.opacity_unfocused` (percent)
    pub const MAX_OPACITY_PERCENT: u8 = 100;

    /// Fallback master width factor when the configured one is out of range
    pub const DEFAULT_MWFACT: f64 = 0.5;
}
