//! Materialized runtime configuration
//!
//! Value objects handed to the window manager core, the layout engine and the
//! input dispatcher. Everything is owned; nothing borrows from the config file.

use regex::Regex;

use crate::color::{AllocatedColor, RgbColor};
use crate::font::LoadedFont;
use crate::keysym::Keysym;
use crate::names::{Command, LayoutKind};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSettings {
    pub border_px: u16,
    pub snap: u16,
    pub resize_hints: bool,
    /// Percent, 0-100
    pub opacity_unfocused: u8,
    pub focus_move_pointer: bool,
    pub font: String,
}

/// Pixels for one focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    pub border: u32,
    pub bg: u32,
    pub fg: u32,
}

/// The six resolved colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub normal_border: AllocatedColor,
    pub normal_bg: AllocatedColor,
    pub normal_fg: AllocatedColor,
    pub focus_border: AllocatedColor,
    pub focus_bg: AllocatedColor,
    pub focus_fg: AllocatedColor,
}

impl ColorTheme {
    pub fn normal(&self) -> ColorSet {
        ColorSet {
            border: self.normal_border.pixel,
            bg: self.normal_bg.pixel,
            fg: self.normal_fg.pixel,
        }
    }

    pub fn focused(&self) -> ColorSet {
        ColorSet {
            border: self.focus_border.pixel,
            bg: self.focus_bg.pixel,
            fg: self.focus_fg.pixel,
        }
    }
}

/// Everything the drawing code needs, applied by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct DrawTheme {
    pub font: LoadedFont,
    pub normal: ColorSet,
    pub focused: ColorSet,
    pub text_normal: RgbColor,
    pub text_focused: RgbColor,
}

impl DrawTheme {
    pub fn new(font: LoadedFont, colors: &ColorTheme) -> Self {
        Self {
            font,
            normal: colors.normal(),
            focused: colors.focused(),
            text_normal: colors.normal_fg.rgb,
            text_focused: colors.focus_fg.rgb,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarPosition {
    Top,
    Bottom,
    Off,
}

impl StatusBarPosition {
    /// "off" and "bottom" are recognized; anything else means top
    pub fn from_config(value: &str) -> Self {
        match value {
            "off" => StatusBarPosition::Off,
            "bottom" => StatusBarPosition::Bottom,
            _ => StatusBarPosition::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBar {
    pub default_position: StatusBarPosition,
    pub position: StatusBarPosition,
}

impl StatusBar {
    pub fn new(default_position: StatusBarPosition) -> Self {
        Self {
            default_position,
            position: default_position,
        }
    }
}

/// A configured layout; `arrange` is None for names that did not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: String,
    pub symbol: Option<String>,
    pub arrange: Option<LayoutKind>,
}

impl Layout {
    pub fn is_usable(&self) -> bool {
        self.arrange.is_some()
    }
}

/// Parameters of the tiling layouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    pub mwfact: f64,
    pub nmaster: u32,
    pub ncol: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub selected: bool,
    pub was_selected: bool,
    /// Index into `RuntimeConfig::layouts`
    pub layout: usize,
}

/// Window placement rule
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    /// None when the configured tag pattern is empty
    pub tags: Option<String>,
    pub floating: bool,
    name_regex: Option<Regex>,
    tags_regex: Option<Regex>,
}

impl Rule {
    pub fn new(
        name: String,
        tags: Option<String>,
        floating: bool,
        name_regex: Option<Regex>,
        tags_regex: Option<Regex>,
    ) -> Self {
        Self {
            name,
            tags,
            floating,
            name_regex,
            tags_regex,
        }
    }

    /// Whether a window's class/instance/title matches this rule
    pub fn matches_window(&self, window_name: &str) -> bool {
        self.name_regex
            .as_ref()
            .is_some_and(|re| re.is_match(window_name))
    }

    /// Whether the rule assigns windows to this tag
    pub fn matches_tag(&self, tag_name: &str) -> bool {
        self.tags_regex
            .as_ref()
            .is_some_and(|re| re.is_match(tag_name))
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.tags == other.tags && self.floating == other.floating
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: u16,
    pub keysym: Keysym,
    /// None when the command name is unknown; the binding is then inert
    pub command: Option<Command>,
    pub arg: Option<String>,
}

/// Fully materialized configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub status_text: String,
    pub screen: usize,
    pub phys_screen: usize,
    pub general: GeneralSettings,
    pub colors: ColorTheme,
    pub theme: DrawTheme,
    pub statusbar: StatusBar,
    pub layouts: Vec<Layout>,
    /// Index into `layouts`
    pub current_layout: usize,
    pub tile: TileParams,
    pub rules: Vec<Rule>,
    pub tags: Vec<Tag>,
    pub keys: Vec<KeyBinding>,
    pub modkey: u16,
    pub numlock_mask: u16,
}

impl RuntimeConfig {
    pub fn current_layout(&self) -> &Layout {
        &self.layouts[self.current_layout]
    }

    pub fn selected_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|tag| tag.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statusbar_position_from_config() {
        assert_eq!(StatusBarPosition::from_config("off"), StatusBarPosition::Off);
        assert_eq!(StatusBarPosition::from_config("bottom"), StatusBarPosition::Bottom);
        assert_eq!(StatusBarPosition::from_config("top"), StatusBarPosition::Top);
        assert_eq!(StatusBarPosition::from_config("left"), StatusBarPosition::Top);
        assert_eq!(StatusBarPosition::from_config(""), StatusBarPosition::Top);
    }

    #[test]
    fn test_statusbar_current_seeded_from_default() {
        let bar = StatusBar::new(StatusBarPosition::Bottom);
        assert_eq!(bar.position, StatusBarPosition::Bottom);
        assert_eq!(bar.default_position, StatusBarPosition::Bottom);
    }

    #[test]
    fn test_rule_matching() {
        let rule = Rule::new(
            "Gimp|MPlayer".to_string(),
            Some("^3$".to_string()),
            true,
            Regex::new("Gimp|MPlayer").ok(),
            Regex::new("^3$").ok(),
        );
        assert!(rule.matches_window("gimp:Gimp:GNU Image Manipulation Program"));
        assert!(!rule.matches_window("xterm"));
        assert!(rule.matches_tag("3"));
        assert!(!rule.matches_tag("33"));
    }

    #[test]
    fn test_rule_without_patterns_matches_nothing() {
        let rule = Rule::new("(".to_string(), None, false, None, None);
        assert!(!rule.matches_window("anything"));
        assert!(!rule.matches_tag("1"));
    }
}
