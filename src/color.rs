//! Color specification parsing
//!
//! `#`-prefixed hex colors are decoded on the client side; any other string is
//! treated as a color name for the server's color database.

/// 16-bit-per-channel RGB value, as used by the X11 color requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl RgbColor {
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#RGB`, `#RRGGBB`, `#RRRGGGBBB` or `#RRRRGGGGBBBB`
    ///
    /// Each channel is scaled to 16 bits by shifting left, so `#111111`
    /// yields `0x1100` per channel. Returns None for names and malformed input.
    pub fn parse(spec: &str) -> Option<Self> {
        let hex = spec.strip_prefix('#')?;
        if hex.is_empty() || hex.len() % 3 != 0 || hex.len() > 12 {
            return None;
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let digits = hex.len() / 3;
        let shift = 16 - 4 * digits as u32;
        let channel = |i: usize| -> Option<u16> {
            let raw = u16::from_str_radix(&hex[i * digits..(i + 1) * digits], 16).ok()?;
            Some(raw << shift)
        };

        Some(Self {
            red: channel(0)?,
            green: channel(1)?,
            blue: channel(2)?,
        })
    }
}

/// A color allocated in the screen's default colormap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedColor {
    pub pixel: u32,
    pub rgb: RgbColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(RgbColor::parse("#111111"), Some(RgbColor::new(0x1100, 0x1100, 0x1100)));
        assert_eq!(RgbColor::parse("#6666ff"), Some(RgbColor::new(0x6600, 0x6600, 0xff00)));
        assert_eq!(RgbColor::parse("#EEEEEE"), Some(RgbColor::new(0xee00, 0xee00, 0xee00)));
    }

    #[test]
    fn test_parse_other_widths() {
        assert_eq!(RgbColor::parse("#f00"), Some(RgbColor::new(0xf000, 0, 0)));
        assert_eq!(RgbColor::parse("#fff000fff"), Some(RgbColor::new(0xfff0, 0, 0xfff0)));
        assert_eq!(
            RgbColor::parse("#ffff00000000"),
            Some(RgbColor::new(0xffff, 0, 0))
        );
    }

    #[test]
    fn test_parse_rejects_names_and_garbage() {
        assert_eq!(RgbColor::parse("red"), None);
        assert_eq!(RgbColor::parse("#"), None);
        assert_eq!(RgbColor::parse("#12345"), None);
        assert_eq!(RgbColor::parse("#gggggg"), None);
        assert_eq!(RgbColor::parse("#1111111111111111"), None);
    }
}
