use anyhow::{Context, Result};
use tracing::debug;
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::xinerama::{self, ConnectionExt as XineramaExt};
use x11rb::protocol::xproto::*;
use x11rb::rust_connection::RustConnection;

use crate::color::{AllocatedColor, RgbColor};
use crate::constants::{keysym, x11};
use crate::font::{self, FontDescriptor, LoadedFont};

/// Display-side resources the loader resolves names against
pub trait Platform {
    /// Logical screen being configured
    fn screen(&self) -> usize;

    /// Screen whose colormap and root hold the resources
    fn phys_screen(&self) -> usize;

    fn alloc_color(&self, spec: &str) -> Result<AllocatedColor>;

    fn open_font(&self, descriptor: &FontDescriptor) -> Result<LoadedFont>;

    /// Modifier bit currently bound to Num Lock, 0 when none is
    fn numlock_mask(&self) -> Result<u16>;
}

/// X11 server backed platform
pub struct X11Platform<'a> {
    conn: &'a RustConnection,
    screen: usize,
    phys_screen: usize,
    colormap: Colormap,
}

impl<'a> X11Platform<'a> {
    pub fn new(conn: &'a RustConnection, screen: usize, default_screen: usize) -> Result<Self> {
        let phys_screen = if xinerama_active(conn)? {
            default_screen
        } else {
            screen
        };
        let colormap = conn
            .setup()
            .roots
            .get(phys_screen)
            .with_context(|| format!("Screen {} does not exist", phys_screen))?
            .default_colormap;

        debug!(screen, phys_screen, colormap, "Initialized X11 platform");
        Ok(Self {
            conn,
            screen,
            phys_screen,
            colormap,
        })
    }
}

impl Platform for X11Platform<'_> {
    fn screen(&self) -> usize {
        self.screen
    }

    fn phys_screen(&self) -> usize {
        self.phys_screen
    }

    fn alloc_color(&self, spec: &str) -> Result<AllocatedColor> {
        if let Some(rgb) = RgbColor::parse(spec) {
            let reply = self
                .conn
                .alloc_color(self.colormap, rgb.red, rgb.green, rgb.blue)
                .context("Failed to send AllocColor request")?
                .reply()
                .with_context(|| format!("Server refused to allocate color {}", spec))?;
            Ok(AllocatedColor {
                pixel: reply.pixel,
                rgb: RgbColor::new(reply.red, reply.green, reply.blue),
            })
        } else {
            let reply = self
                .conn
                .alloc_named_color(self.colormap, spec.as_bytes())
                .context("Failed to send AllocNamedColor request")?
                .reply()
                .with_context(|| format!("Unknown color name {}", spec))?;
            Ok(AllocatedColor {
                pixel: reply.pixel,
                rgb: RgbColor::new(reply.visual_red, reply.visual_green, reply.visual_blue),
            })
        }
    }

    fn open_font(&self, descriptor: &FontDescriptor) -> Result<LoadedFont> {
        font::load_font(descriptor)
    }

    fn numlock_mask(&self) -> Result<u16> {
        let setup = self.conn.setup();
        let min_keycode = setup.min_keycode;
        let count = setup.max_keycode - min_keycode + 1;

        let mapping = self
            .conn
            .get_keyboard_mapping(min_keycode, count)
            .context("Failed to send GetKeyboardMapping request")?
            .reply()
            .context("Failed to get reply for GetKeyboardMapping")?;
        let numlock = keysym_to_keycode(
            &mapping.keysyms,
            mapping.keysyms_per_keycode,
            min_keycode,
            keysym::NUM_LOCK,
        );

        let modmap = self
            .conn
            .get_modifier_mapping()
            .context("Failed to send GetModifierMapping request")?
            .reply()
            .context("Failed to get reply for GetModifierMapping")?;
        let per_modifier = modmap.keycodes.len() / x11::MODIFIER_SLOTS;

        Ok(numlock_mask(&modmap.keycodes, per_modifier, numlock))
    }
}

fn xinerama_active(conn: &RustConnection) -> Result<bool> {
    if conn
        .extension_information(xinerama::X11_EXTENSION_NAME)
        .context("Failed to query Xinerama extension")?
        .is_none()
    {
        return Ok(false);
    }
    let reply = conn
        .xinerama_is_active()
        .context("Failed to send Xinerama IsActive request")?
        .reply()
        .context("Failed to get reply for Xinerama IsActive")?;
    Ok(reply.state != 0)
}

/// First keycode producing `target`, searching column by column
pub fn keysym_to_keycode(
    keysyms: &[Keysym],
    keysyms_per_keycode: u8,
    min_keycode: Keycode,
    target: Keysym,
) -> Option<Keycode> {
    let per = usize::from(keysyms_per_keycode);
    if per == 0 {
        return None;
    }
    (0..per).find_map(|column| {
        keysyms
            .chunks_exact(per)
            .position(|row| row[column] == target)
            .and_then(|index| u8::try_from(index).ok())
            .and_then(|index| min_keycode.checked_add(index))
    })
}

/// Modifier bit whose slot holds the Num Lock keycode
///
/// `modifier_keycodes` is the core modifier map: eight slots of
/// `keycodes_per_modifier` keycodes each. The last matching slot wins.
pub fn numlock_mask(
    modifier_keycodes: &[Keycode],
    keycodes_per_modifier: usize,
    numlock: Option<Keycode>,
) -> u16 {
    let Some(numlock) = numlock else {
        return 0;
    };
    if keycodes_per_modifier == 0 {
        return 0;
    }

    let mut mask = 0;
    for (slot, keycodes) in modifier_keycodes
        .chunks_exact(keycodes_per_modifier)
        .take(x11::MODIFIER_SLOTS)
        .enumerate()
    {
        if keycodes.contains(&numlock) {
            mask = 1 << slot;
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keysym_to_keycode_first_column() {
        // keycodes 8, 9, 10 with two keysyms each
        let keysyms = [0x61, 0x41, 0xff7f, 0xffb7, 0x62, 0x42];
        assert_eq!(keysym_to_keycode(&keysyms, 2, 8, 0xff7f), Some(9));
        assert_eq!(keysym_to_keycode(&keysyms, 2, 8, 0x42), Some(10));
    }

    #[test]
    fn test_keysym_to_keycode_prefers_earlier_column() {
        // 0x61 is in column 1 of keycode 8 and column 0 of keycode 9
        let keysyms = [0x31, 0x61, 0x61, 0x41];
        assert_eq!(keysym_to_keycode(&keysyms, 2, 8, 0x61), Some(9));
    }

    #[test]
    fn test_keysym_to_keycode_missing() {
        let keysyms = [0x61, 0x41];
        assert_eq!(keysym_to_keycode(&keysyms, 2, 8, 0xff7f), None);
        assert_eq!(keysym_to_keycode(&keysyms, 0, 8, 0x61), None);
    }

    #[test]
    fn test_numlock_on_mod2() {
        // two keycodes per modifier; Num Lock (77) bound to Mod2 (slot 4)
        let modmap = [
            50, 62, // Shift
            66, 0, // Lock
            37, 105, // Control
            64, 108, // Mod1
            77, 0, // Mod2
            0, 0, // Mod3
            133, 134, // Mod4
            92, 0, // Mod5
        ];
        assert_eq!(numlock_mask(&modmap, 2, Some(77)), 1 << 4);
    }

    #[test]
    fn test_numlock_unbound_or_unknown() {
        let modmap = [50, 0, 66, 0, 37, 0, 64, 0, 0, 0, 0, 0, 133, 0, 0, 0];
        assert_eq!(numlock_mask(&modmap, 2, Some(77)), 0);
        assert_eq!(numlock_mask(&modmap, 2, None), 0);
        assert_eq!(numlock_mask(&[], 0, Some(77)), 0);
    }
}
