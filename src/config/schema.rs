//! Config file schema
//!
//! One struct per section with the documented defaults. Multi-sections
//! (`tags.tag`, `layouts.layout`, `rules.rule`, `keys.key`) are TOML arrays
//! of tables; titled ones carry their title in a `title` key. The reader in
//! `source` feeds these structs one field at a time.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneralSection {
    #[serde(default = "default_border")]
    pub border: u16,
    #[serde(default = "default_snap")]
    pub snap: u16,
    #[serde(default)]
    pub resize_hints: bool,
    /// Percent; wide so out-of-range values reach the clamp
    #[serde(default = "default_opacity_unfocused")]
    pub opacity_unfocused: i64,
    #[serde(default)]
    pub focus_move_pointer: bool,
    #[serde(default = "default_font")]
    pub font: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorsSection {
    #[serde(default = "default_normal_border")]
    pub normal_border: String,
    #[serde(default = "default_normal_bg")]
    pub normal_bg: String,
    #[serde(default = "default_normal_fg")]
    pub normal_fg: String,
    #[serde(default = "default_focus_border")]
    pub focus_border: String,
    #[serde(default = "default_focus_bg")]
    pub focus_bg: String,
    #[serde(default = "default_focus_fg")]
    pub focus_fg: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusbarSection {
    #[serde(default = "default_position")]
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TagsSection {
    #[serde(default)]
    pub tag: Vec<TagSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagSection {
    pub title: String,
    #[serde(default = "default_tag_layout")]
    pub layout: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutsSection {
    #[serde(default)]
    pub layout: Vec<LayoutSection>,
    #[serde(default = "default_mwfact")]
    pub mwfact: f64,
    #[serde(default = "default_nmaster")]
    pub nmaster: u32,
    #[serde(default = "default_ncol")]
    pub ncol: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutSection {
    pub title: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RulesSection {
    #[serde(default)]
    pub rule: Vec<RuleSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuleSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub float: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeysSection {
    #[serde(default = "default_modkey")]
    pub modkey: String,
    #[serde(default)]
    pub key: Vec<KeySection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeySection {
    /// Accepts a single name or a list of names
    #[serde(default = "default_key_modkeys", deserialize_with = "deserialize_modkeys")]
    pub modkey: Vec<String>,
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub arg: Option<String>,
}

// Default value functions
fn default_border() -> u16 {
    1
}

fn default_snap() -> u16 {
    8
}

fn default_opacity_unfocused() -> i64 {
    100
}

fn default_font() -> String {
    "mono-12".to_string()
}

fn default_normal_border() -> String {
    "#111111".to_string()
}

fn default_normal_bg() -> String {
    "#111111".to_string()
}

fn default_normal_fg() -> String {
    "#eeeeee".to_string()
}

fn default_focus_border() -> String {
    "#6666ff".to_string()
}

fn default_focus_bg() -> String {
    "#6666ff".to_string()
}

fn default_focus_fg() -> String {
    "#ffffff".to_string()
}

fn default_position() -> String {
    "top".to_string()
}

fn default_tag_layout() -> String {
    "tile".to_string()
}

fn default_symbol() -> String {
    "???".to_string()
}

fn default_mwfact() -> f64 {
    crate::constants::validation::DEFAULT_MWFACT
}

fn default_nmaster() -> u32 {
    1
}

fn default_ncol() -> u32 {
    1
}

fn default_modkey() -> String {
    "Mod4".to_string()
}

fn default_key_modkeys() -> Vec<String> {
    vec!["Mod4".to_string()]
}

fn default_key() -> String {
    "None".to_string()
}

/// Custom deserializer that accepts both a string and a list of strings for modkey
fn deserialize_modkeys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => Ok(vec![name]),
        OneOrMany::Many(names) => Ok(names),
    }
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            border: default_border(),
            snap: default_snap(),
            resize_hints: false,
            opacity_unfocused: default_opacity_unfocused(),
            focus_move_pointer: false,
            font: default_font(),
        }
    }
}

impl Default for ColorsSection {
    fn default() -> Self {
        Self {
            normal_border: default_normal_border(),
            normal_bg: default_normal_bg(),
            normal_fg: default_normal_fg(),
            focus_border: default_focus_border(),
            focus_bg: default_focus_bg(),
            focus_fg: default_focus_fg(),
        }
    }
}

impl Default for StatusbarSection {
    fn default() -> Self {
        Self {
            position: default_position(),
        }
    }
}

impl Default for LayoutsSection {
    fn default() -> Self {
        Self {
            layout: Vec::new(),
            mwfact: default_mwfact(),
            nmaster: default_nmaster(),
            ncol: default_ncol(),
        }
    }
}

impl Default for KeysSection {
    fn default() -> Self {
        Self {
            modkey: default_modkey(),
            key: Vec::new(),
        }
    }
}

impl Default for KeySection {
    fn default() -> Self {
        Self {
            modkey: default_key_modkeys(),
            key: default_key(),
            command: String::new(),
            arg: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_modkey_accepts_single_name() {
        let key: KeySection = toml::from_str("modkey = \"Control\"").unwrap();
        assert_eq!(key.modkey, vec!["Control".to_string()]);
    }

    #[test]
    fn test_key_modkey_accepts_list_and_empty_list() {
        let key: KeySection = toml::from_str("modkey = [\"Mod1\", \"Shift\"]").unwrap();
        assert_eq!(key.modkey, vec!["Mod1".to_string(), "Shift".to_string()]);

        let key: KeySection = toml::from_str("modkey = []").unwrap();
        assert!(key.modkey.is_empty());
    }

    #[test]
    fn test_title_is_required() {
        assert!(toml::from_str::<LayoutSection>("symbol = \"[]=\"").is_err());
        assert!(toml::from_str::<TagSection>("layout = \"max\"").is_err());
    }
}
