//! Config file to runtime structures
//!
//! A single linear pass: general, colors, statusbar, layouts, rules, tags,
//! keys. Unknown names make individual entries inert; a missing default
//! layout, an empty tag list and unusable fonts or colors are fatal.

use regex::Regex;
use std::path::Path;
use tracing::{info, warn};

use crate::color::AllocatedColor;
use crate::config::{
    ColorsSection, ConfigFile, KeysSection, LayoutsSection, RulesSection, TagsSection,
    resolve_config_path,
};
use crate::constants::keysym::NO_SYMBOL;
use crate::constants::{config, validation, x11};
use crate::error::LoadError;
use crate::font::FontDescriptor;
use crate::keysym::keysym_from_name;
use crate::names::{Command, LayoutKind, modifier_list_mask, modifier_mask};
use crate::platform::Platform;
use crate::runtime::{
    ColorTheme, DrawTheme, GeneralSettings, KeyBinding, Layout, Rule, RuntimeConfig, StatusBar,
    StatusBarPosition, Tag, TileParams,
};

pub struct ConfigLoader<'p, P: Platform> {
    platform: &'p P,
}

impl<'p, P: Platform> ConfigLoader<'p, P> {
    pub fn new(platform: &'p P) -> Self {
        Self { platform }
    }

    /// Load from the explicit path, or from the default file in the home directory
    pub fn load(&self, explicit: Option<&Path>) -> Result<RuntimeConfig, LoadError> {
        let path = resolve_config_path(explicit, dirs::home_dir())?;
        let file = ConfigFile::read(&path);
        self.materialize(&file)
    }

    /// Resolve every section of an already parsed file
    pub fn materialize(&self, file: &ConfigFile) -> Result<RuntimeConfig, LoadError> {
        let general = GeneralSettings {
            border_px: file.general.border,
            snap: file.general.snap,
            resize_hints: file.general.resize_hints,
            opacity_unfocused: u8::try_from(
                file.general
                    .opacity_unfocused
                    .clamp(0, i64::from(validation::MAX_OPACITY_PERCENT)),
            )
            .unwrap_or(validation::MAX_OPACITY_PERCENT),
            focus_move_pointer: file.general.focus_move_pointer,
            font: file.general.font.clone(),
        };
        let descriptor = FontDescriptor::parse(&general.font);
        let font = self
            .platform
            .open_font(&descriptor)
            .map_err(|e| LoadError::Font {
                descriptor: general.font.clone(),
                reason: format!("{:#}", e),
            })?;

        let colors = self.resolve_colors(&file.colors)?;
        let theme = DrawTheme::new(font, &colors);

        let statusbar = StatusBar::new(StatusBarPosition::from_config(&file.statusbar.position));

        let (layouts, current_layout) = resolve_layouts(&file.layouts)?;
        let tile = TileParams {
            mwfact: file.layouts.mwfact,
            nmaster: file.layouts.nmaster,
            ncol: file.layouts.ncol,
        };

        let rules = resolve_rules(&file.rules);
        let tags = resolve_tags(&file.tags, current_layout)?;

        let modkey = match modifier_mask(Some(file.keys.modkey.as_str())) {
            0 => x11::MOD4_MASK,
            mask => mask,
        };
        let numlock_mask = self.platform.numlock_mask().unwrap_or_else(|e| {
            warn!(error = %e, "Cannot query modifier mapping, numlock not tracked");
            0
        });
        let keys = resolve_keys(&file.keys);

        info!(
            layouts = layouts.len(),
            tags = tags.len(),
            rules = rules.len(),
            keys = keys.len(),
            "Configuration loaded"
        );

        Ok(RuntimeConfig {
            status_text: format!("{}-{}", config::STATUS_PREFIX, env!("CARGO_PKG_VERSION")),
            screen: self.platform.screen(),
            phys_screen: self.platform.phys_screen(),
            general,
            colors,
            theme,
            statusbar,
            layouts,
            current_layout,
            tile,
            rules,
            tags,
            keys,
            modkey,
            numlock_mask,
        })
    }

    fn resolve_colors(&self, colors: &ColorsSection) -> Result<ColorTheme, LoadError> {
        Ok(ColorTheme {
            normal_border: self.alloc_color(&colors.normal_border)?,
            normal_bg: self.alloc_color(&colors.normal_bg)?,
            normal_fg: self.alloc_color(&colors.normal_fg)?,
            focus_border: self.alloc_color(&colors.focus_border)?,
            focus_bg: self.alloc_color(&colors.focus_bg)?,
            focus_fg: self.alloc_color(&colors.focus_fg)?,
        })
    }

    fn alloc_color(&self, spec: &str) -> Result<AllocatedColor, LoadError> {
        self.platform
            .alloc_color(spec)
            .map_err(|e| LoadError::Color {
                color: spec.to_string(),
                reason: format!("{:#}", e),
            })
    }
}

/// Build the layout list; the first entry is the default and must resolve
fn resolve_layouts(section: &LayoutsSection) -> Result<(Vec<Layout>, usize), LoadError> {
    let layouts: Vec<Layout> = section
        .layout
        .iter()
        .enumerate()
        .map(|(i, entry)| match LayoutKind::from_name(&entry.title) {
            Some(kind) => Layout {
                name: entry.title.clone(),
                symbol: Some(entry.symbol.clone()),
                arrange: Some(kind),
            },
            None => {
                warn!(index = i, layout = %entry.title, "unknown layout in configuration file");
                Layout {
                    name: entry.title.clone(),
                    symbol: None,
                    arrange: None,
                }
            }
        })
        .collect();

    layouts
        .first()
        .filter(|layout| layout.is_usable())
        .ok_or(LoadError::NoDefaultLayout)?;
    Ok((layouts, 0))
}

fn resolve_rules(section: &RulesSection) -> Vec<Rule> {
    section
        .rule
        .iter()
        .map(|entry| {
            let tags = (!entry.tags.is_empty()).then(|| entry.tags.clone());
            let name_regex = compile_pattern(&entry.name, "name");
            let tags_regex = tags.as_deref().and_then(|t| compile_pattern(t, "tags"));
            Rule::new(entry.name.clone(), tags, entry.float, name_regex, tags_regex)
        })
        .collect()
}

fn compile_pattern(pattern: &str, field: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| warn!(field, pattern, error = %e, "Invalid rule pattern, rule ignored"))
        .ok()
}

/// One tag per entry, all starting on the default layout, the first selected
fn resolve_tags(section: &TagsSection, default_layout: usize) -> Result<Vec<Tag>, LoadError> {
    let mut tags: Vec<Tag> = section
        .tag
        .iter()
        .map(|entry| Tag {
            name: entry.title.clone(),
            selected: false,
            was_selected: false,
            layout: default_layout,
        })
        .collect();

    let first = tags.first_mut().ok_or(LoadError::NoTags)?;
    first.selected = true;
    first.was_selected = true;
    Ok(tags)
}

fn resolve_keys(section: &KeysSection) -> Vec<KeyBinding> {
    section
        .key
        .iter()
        .map(|entry| {
            let command = Command::from_name(&entry.command);
            if command.is_none() && !entry.command.is_empty() {
                warn!(command = %entry.command, key = %entry.key, "unknown command in key binding");
            }
            let keysym = keysym_from_name(&entry.key);
            if keysym == NO_SYMBOL && entry.key != "None" {
                warn!(key = %entry.key, command = %entry.command, "unknown key name in key binding");
            }
            KeyBinding {
                modifiers: modifier_list_mask(entry.modkey.as_slice()),
                keysym,
                command,
                arg: entry.arg.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RgbColor;
    use crate::constants::x11::*;
    use crate::font::LoadedFont;
    use crate::runtime::ColorSet;
    use std::cell::RefCell;
    use std::io::Write;
    use std::path::PathBuf;

    /// Platform that allocates hex colors sequentially and never touches a server
    struct FakePlatform {
        allocated: RefCell<Vec<String>>,
        fail_font: bool,
        numlock: u16,
    }

    impl FakePlatform {
        fn new() -> Self {
            Self {
                allocated: RefCell::new(Vec::new()),
                fail_font: false,
                numlock: 1 << 4,
            }
        }
    }

    impl Platform for FakePlatform {
        fn screen(&self) -> usize {
            0
        }

        fn phys_screen(&self) -> usize {
            0
        }

        fn alloc_color(&self, spec: &str) -> anyhow::Result<AllocatedColor> {
            let rgb = RgbColor::parse(spec)
                .ok_or_else(|| anyhow::anyhow!("Unknown color name {}", spec))?;
            let mut allocated = self.allocated.borrow_mut();
            allocated.push(spec.to_string());
            Ok(AllocatedColor {
                pixel: allocated.len() as u32,
                rgb,
            })
        }

        fn open_font(&self, descriptor: &FontDescriptor) -> anyhow::Result<LoadedFont> {
            if self.fail_font {
                anyhow::bail!("No font file found for '{}'", descriptor.raw);
            }
            Ok(LoadedFont {
                descriptor: descriptor.raw.clone(),
                family: descriptor.primary_family().to_string(),
                path: PathBuf::from("/usr/share/fonts/test.ttf"),
                pixel_size: descriptor.pixel_size(),
                ascent: 12,
                descent: 4,
                height: 16,
            })
        }

        fn numlock_mask(&self) -> anyhow::Result<u16> {
            Ok(self.numlock)
        }
    }

    const MINIMAL: &str = r#"
[[tags.tag]]
title = "1"

[[layouts.layout]]
title = "tile"
symbol = "[]="
"#;

    fn load(contents: &str) -> Result<RuntimeConfig, LoadError> {
        let platform = FakePlatform::new();
        ConfigLoader::new(&platform).materialize(&ConfigFile::parse(contents))
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = load(MINIMAL).unwrap();
        assert_eq!(config.general.border_px, 1);
        assert_eq!(config.general.snap, 8);
        assert!(!config.general.resize_hints);
        assert_eq!(config.general.opacity_unfocused, 100);
        assert!(!config.general.focus_move_pointer);
        assert_eq!(config.general.font, "mono-12");
        assert_eq!(config.theme.font.family, "mono");
        assert_eq!(config.statusbar.default_position, StatusBarPosition::Top);
        assert_eq!(config.statusbar.position, StatusBarPosition::Top);
        assert_eq!(config.tile, TileParams { mwfact: 0.5, nmaster: 1, ncol: 1 });
        assert_eq!(config.modkey, MOD4_MASK);
        assert_eq!(config.numlock_mask, 1 << 4);
        assert!(config.rules.is_empty());
        assert!(config.keys.is_empty());
        assert_eq!(config.status_text, format!("awesome-{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_colors_resolved_in_order() {
        let platform = FakePlatform::new();
        let config = ConfigLoader::new(&platform)
            .materialize(&ConfigFile::parse(MINIMAL))
            .unwrap();
        assert_eq!(
            *platform.allocated.borrow(),
            vec!["#111111", "#111111", "#eeeeee", "#6666ff", "#6666ff", "#ffffff"]
        );
        assert_eq!(config.theme.normal, ColorSet { border: 1, bg: 2, fg: 3 });
        assert_eq!(config.theme.focused, ColorSet { border: 4, bg: 5, fg: 6 });
        assert_eq!(config.theme.text_normal, RgbColor::new(0xee00, 0xee00, 0xee00));
        assert_eq!(config.theme.text_focused, RgbColor::new(0xff00, 0xff00, 0xff00));
    }

    #[test]
    fn test_color_failure_is_fatal_and_names_color() {
        let contents = format!("{}\n[colors]\nfocus_bg = \"chartreuse-ish\"\n", MINIMAL);
        match load(&contents) {
            Err(LoadError::Color { color, .. }) => assert_eq!(color, "chartreuse-ish"),
            other => panic!("expected color error, got {:?}", other),
        }
    }

    #[test]
    fn test_font_failure_is_fatal() {
        let platform = FakePlatform {
            fail_font: true,
            ..FakePlatform::new()
        };
        let result = ConfigLoader::new(&platform).materialize(&ConfigFile::parse(MINIMAL));
        match result {
            Err(LoadError::Font { descriptor, .. }) => assert_eq!(descriptor, "mono-12"),
            other => panic!("expected font error, got {:?}", other),
        }
    }

    #[test]
    fn test_statusbar_positions() {
        for (value, expected) in [
            ("off", StatusBarPosition::Off),
            ("bottom", StatusBarPosition::Bottom),
            ("top", StatusBarPosition::Top),
            ("middle", StatusBarPosition::Top),
        ] {
            let contents = format!("{}\n[statusbar]\nposition = \"{}\"\n", MINIMAL, value);
            let config = load(&contents).unwrap();
            assert_eq!(config.statusbar.default_position, expected);
            assert_eq!(config.statusbar.position, expected);
        }
    }

    #[test]
    fn test_no_tags_is_fatal() {
        let result = load("[[layouts.layout]]\ntitle = \"tile\"\n");
        assert!(matches!(result, Err(LoadError::NoTags)));
    }

    #[test]
    fn test_first_tag_selected_only() {
        let config = load(&format!(
            "{}\n[[tags.tag]]\ntitle = \"2\"\n\n[[tags.tag]]\ntitle = \"3\"\nlayout = \"max\"\n",
            MINIMAL
        ))
        .unwrap();
        let names: Vec<_> = config.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["1", "2", "3"]);
        assert!(config.tags[0].selected && config.tags[0].was_selected);
        assert!(config.tags[1..].iter().all(|t| !t.selected && !t.was_selected));
        assert!(config.tags.iter().all(|t| t.layout == config.current_layout));
        assert_eq!(config.selected_tags().count(), 1);
    }

    #[test]
    fn test_no_layouts_is_fatal() {
        let result = load("[[tags.tag]]\ntitle = \"1\"\n");
        assert!(matches!(result, Err(LoadError::NoDefaultLayout)));
    }

    #[test]
    fn test_only_unknown_layouts_is_fatal() {
        let result = load(
            "[[tags.tag]]\ntitle = \"1\"\n[[layouts.layout]]\ntitle = \"spiral\"\n[[layouts.layout]]\ntitle = \"dwindle\"\n",
        );
        assert!(matches!(result, Err(LoadError::NoDefaultLayout)));
    }

    #[test]
    fn test_unknown_layout_is_inert_placeholder() {
        let config = load(
            r#"
[[tags.tag]]
title = "1"

[[layouts.layout]]
title = "max"
symbol = "[M]"

[[layouts.layout]]
title = "spiral"
symbol = "(@)"

[[layouts.layout]]
title = "floating"
"#,
        )
        .unwrap();
        assert_eq!(config.layouts.len(), 3);
        assert_eq!(
            config.layouts[1],
            Layout {
                name: "spiral".to_string(),
                symbol: None,
                arrange: None,
            }
        );
        assert_eq!(config.current_layout, 0);
        assert_eq!(config.current_layout().arrange, Some(LayoutKind::Max));
        assert_eq!(config.layouts[2].symbol.as_deref(), Some("???"));
        assert_eq!(config.tags[0].layout, 0);
    }

    #[test]
    fn test_unknown_first_layout_is_fatal() {
        let result = load(
            r#"
[[tags.tag]]
title = "1"

[[layouts.layout]]
title = "spiral"

[[layouts.layout]]
title = "max"
"#,
        );
        assert!(matches!(result, Err(LoadError::NoDefaultLayout)));
    }

    #[test]
    fn test_out_of_range_opacity_reaches_runtime_clamped() {
        let config = load(&format!(
            "{}\n[general]\nopacity_unfocused = 300\nborder = 5\n",
            MINIMAL
        ))
        .unwrap();
        assert_eq!(config.general.opacity_unfocused, 100);
        assert_eq!(config.general.border_px, 5);
    }

    #[test]
    fn test_tile_params() {
        let config = load(
            r#"
[[tags.tag]]
title = "1"

[layouts]
mwfact = 0.6
nmaster = 2
ncol = 3

[[layouts.layout]]
title = "tileleft"
"#,
        )
        .unwrap();
        assert_eq!(config.tile, TileParams { mwfact: 0.6, nmaster: 2, ncol: 3 });
        assert_eq!(config.current_layout().arrange, Some(LayoutKind::TileLeft));
    }

    #[test]
    fn test_rules() {
        let config = load(&format!(
            r#"{}
[[rules.rule]]
name = "Gimp"
tags = ""
float = true

[[rules.rule]]
name = "Firefox"
tags = "2"

[[rules.rule]]
name = "(unclosed"
"#,
            MINIMAL
        ))
        .unwrap();
        assert_eq!(config.rules.len(), 3);
        assert_eq!(config.rules[0].tags, None);
        assert!(config.rules[0].floating);
        assert!(config.rules[0].matches_window("Gimp"));
        assert_eq!(config.rules[1].tags.as_deref(), Some("2"));
        assert!(!config.rules[1].floating);
        assert!(config.rules[1].matches_tag("2"));
        assert!(!config.rules[2].matches_window("(unclosed"));
    }

    #[test]
    fn test_keys() {
        let config = load(&format!(
            r#"{}
[keys]
modkey = "Mod1"

[[keys.key]]
modkey = ["Control", "Shift"]
key = "Return"
command = "spawn"
arg = "exec xterm"

[[keys.key]]
key = "j"
command = "focusnext"

[[keys.key]]
modkey = ["Mod4", "Hyper"]
key = "NoSuchKey"
command = "teleport"
"#,
            MINIMAL
        ))
        .unwrap();
        assert_eq!(config.modkey, MOD1_MASK);
        assert_eq!(
            config.keys,
            vec![
                KeyBinding {
                    modifiers: CONTROL_MASK | SHIFT_MASK,
                    keysym: 0xff0d,
                    command: Some(Command::Spawn),
                    arg: Some("exec xterm".to_string()),
                },
                KeyBinding {
                    modifiers: MOD4_MASK,
                    keysym: 0x6a,
                    command: Some(Command::FocusNext),
                    arg: None,
                },
                KeyBinding {
                    modifiers: MOD4_MASK,
                    keysym: 0,
                    command: None,
                    arg: None,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_global_modkey_falls_back_to_mod4() {
        let config = load(&format!("{}\n[keys]\nmodkey = \"None\"\n", MINIMAL)).unwrap();
        assert_eq!(config.modkey, MOD4_MASK);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "{}\n[general]\nborder = 3\n", MINIMAL).unwrap();
        let platform = FakePlatform::new();
        let config = ConfigLoader::new(&platform).load(Some(tmp.path())).unwrap();
        assert_eq!(config.general.border_px, 3);
    }

    #[test]
    fn test_load_missing_file_has_no_default_layout() {
        let dir = tempfile::tempdir().unwrap();
        let platform = FakePlatform::new();
        let result = ConfigLoader::new(&platform).load(Some(&dir.path().join("missing")));
        // every section defaults; the layout check comes first
        assert!(matches!(result, Err(LoadError::NoDefaultLayout)));
    }

    #[test]
    fn test_bundled_sample_config() {
        let config = load(include_str!("../demos/awesomerc.toml")).unwrap();
        assert_eq!(config.tags.len(), 9);
        assert_eq!(config.layouts.len(), 4);
        assert!(config.layouts.iter().all(Layout::is_usable));
        assert!(config.keys.iter().all(|k| k.command.is_some() && k.keysym != 0));
    }
}
