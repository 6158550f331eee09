//! Symbolic name tables
//!
//! Fixed, closed mappings from the identifiers allowed in the config file to
//! modifier bits, layout algorithms and bindable commands.

use crate::constants::x11::*;

/// Modifier names accepted in `modkey` fields
const MODIFIERS: &[(&str, u16)] = &[
    ("Shift", SHIFT_MASK),
    ("Lock", LOCK_MASK),
    ("Control", CONTROL_MASK),
    ("Mod1", MOD1_MASK),
    ("Mod2", MOD2_MASK),
    ("Mod3", MOD3_MASK),
    ("Mod4", MOD4_MASK),
    ("Mod5", MOD5_MASK),
    ("None", 0),
];

/// Resolve a modifier name to its mask bit
///
/// Unknown or missing names resolve to 0 (no modifier).
pub fn modifier_mask(name: Option<&str>) -> u16 {
    name.and_then(|name| MODIFIERS.iter().find(|(n, _)| *n == name))
        .map_or(0, |(_, mask)| *mask)
}

/// OR together every modifier in a list
pub fn modifier_list_mask<S: AsRef<str>>(names: &[S]) -> u16 {
    names
        .iter()
        .fold(0, |mask, name| mask | modifier_mask(Some(name.as_ref())))
}

/// Window arrangement algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Tile,
    TileLeft,
    Max,
    Floating,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Tile,
        LayoutKind::TileLeft,
        LayoutKind::Max,
        LayoutKind::Floating,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::Tile => "tile",
            LayoutKind::TileLeft => "tileleft",
            LayoutKind::Max => "max",
            LayoutKind::Floating => "floating",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Actions that can be bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // process
    Spawn,
    Exec,
    // client
    KillClient,
    MoveResize,
    SetTrans,
    SetBorder,
    SwapNext,
    SwapPrev,
    // tag
    Tag,
    ToggleFloating,
    ToggleView,
    ToggleTag,
    View,
    ViewTagPrevSelected,
    ViewTagPrevious,
    ViewTagNext,
    // layout
    SetLayout,
    FocusNext,
    FocusPrev,
    ToggleMax,
    ToggleVerticalMax,
    ToggleHorizontalMax,
    Zoom,
    // tiling parameters
    SetMwfact,
    SetNmaster,
    SetNcol,
    // screen
    FocusNextScreen,
    FocusPrevScreen,
    MoveToScreen,
    // session
    Quit,
    // status bar
    ToggleBar,
}

impl Command {
    pub const ALL: [Command; 31] = [
        Command::Spawn,
        Command::Exec,
        Command::KillClient,
        Command::MoveResize,
        Command::SetTrans,
        Command::SetBorder,
        Command::SwapNext,
        Command::SwapPrev,
        Command::Tag,
        Command::ToggleFloating,
        Command::ToggleView,
        Command::ToggleTag,
        Command::View,
        Command::ViewTagPrevSelected,
        Command::ViewTagPrevious,
        Command::ViewTagNext,
        Command::SetLayout,
        Command::FocusNext,
        Command::FocusPrev,
        Command::ToggleMax,
        Command::ToggleVerticalMax,
        Command::ToggleHorizontalMax,
        Command::Zoom,
        Command::SetMwfact,
        Command::SetNmaster,
        Command::SetNcol,
        Command::FocusNextScreen,
        Command::FocusPrevScreen,
        Command::MoveToScreen,
        Command::Quit,
        Command::ToggleBar,
    ];

    /// Identifier used for this command in the config file
    pub fn name(self) -> &'static str {
        match self {
            Command::Spawn => "spawn",
            Command::Exec => "exec",
            Command::KillClient => "killclient",
            Command::MoveResize => "moveresize",
            Command::SetTrans => "settrans",
            Command::SetBorder => "setborder",
            Command::SwapNext => "swapnext",
            Command::SwapPrev => "swapprev",
            Command::Tag => "tag",
            Command::ToggleFloating => "togglefloating",
            Command::ToggleView => "toggleview",
            Command::ToggleTag => "toggletag",
            Command::View => "view",
            Command::ViewTagPrevSelected => "view_tag_prev_selected",
            Command::ViewTagPrevious => "view_tag_previous",
            Command::ViewTagNext => "view_tag_next",
            Command::SetLayout => "setlayout",
            Command::FocusNext => "focusnext",
            Command::FocusPrev => "focusprev",
            Command::ToggleMax => "togglemax",
            Command::ToggleVerticalMax => "toggleverticalmax",
            Command::ToggleHorizontalMax => "togglehorizontalmax",
            Command::Zoom => "zoom",
            Command::SetMwfact => "setmwfact",
            Command::SetNmaster => "setnmaster",
            Command::SetNcol => "setncol",
            Command::FocusNextScreen => "focusnextscreen",
            Command::FocusPrevScreen => "focusprevscreen",
            Command::MoveToScreen => "movetoscreen",
            Command::Quit => "quit",
            Command::ToggleBar => "togglebar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}
