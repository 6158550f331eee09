//! Locating and reading the config file
//!
//! Reading is best effort: an unreadable file or a syntax error yields
//! defaults for every section. Past that, fields are checked one at a time,
//! so a wrongly typed field falls back to its own default and a broken
//! multi-section entry is skipped on its own. Each case is reported as a
//! warning.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::schema::*;
use crate::constants::{config, validation};
use crate::error::LoadError;

/// Pick the config path: the explicit one verbatim, else `<home>/.awesomerc`
pub fn resolve_config_path(
    explicit: Option<&Path>,
    home: Option<PathBuf>,
) -> Result<PathBuf, LoadError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let mut path = home.ok_or(LoadError::NoHomeDirectory)?;
    path.push(config::FILENAME);
    Ok(path)
}

/// Parsed config file, every section filled in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub general: GeneralSection,
    pub colors: ColorsSection,
    pub statusbar: StatusbarSection,
    pub tags: TagsSection,
    pub layouts: LayoutsSection,
    pub rules: RulesSection,
    pub keys: KeysSection,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                info!(path = %path.display(), "Reading configuration file");
                Self::parse(&contents)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot read configuration file, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Self {
        let table = match toml::from_str::<toml::Table>(contents) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "error parsing configuration file");
                return Self::default();
            }
        };

        let tags = section_table(&table, "tags");
        let layouts = section_table(&table, "layouts");
        let rules = section_table(&table, "rules");
        let keys = section_table(&table, "keys");

        let mut file = Self {
            general: section("general", section_table(&table, "general"), &[]),
            colors: section("colors", section_table(&table, "colors"), &[]),
            statusbar: section("statusbar", section_table(&table, "statusbar"), &[]),
            tags: TagsSection {
                tag: entries("tags", tags, "tag", true),
            },
            layouts: LayoutsSection {
                layout: entries("layouts", layouts, "layout", true),
                ..section("layouts", layouts, &["layout"])
            },
            rules: RulesSection {
                rule: entries("rules", rules, "rule", false),
            },
            keys: KeysSection {
                key: entries("keys", keys, "key", false),
                ..section("keys", keys, &["key"])
            },
        };
        file.validate_and_clamp();
        file
    }

    /// Clamp values that deserialize fine but are out of range
    fn validate_and_clamp(&mut self) {
        let opacity = self.general.opacity_unfocused;
        let max_opacity = i64::from(validation::MAX_OPACITY_PERCENT);
        if !(0..=max_opacity).contains(&opacity) {
            let clamped = opacity.clamp(0, max_opacity);
            warn!(opacity_unfocused = opacity, clamped, "opacity_unfocused out of range, clamping");
            self.general.opacity_unfocused = clamped;
        }

        let mwfact = self.layouts.mwfact;
        if !(mwfact > 0.0 && mwfact <= 1.0) {
            warn!(mwfact, using = validation::DEFAULT_MWFACT, "mwfact out of range, using default");
            self.layouts.mwfact = validation::DEFAULT_MWFACT;
        }
    }
}

fn section_table<'a>(root: &'a toml::Table, name: &str) -> Option<&'a toml::Table> {
    match root.get(name)? {
        toml::Value::Table(table) => Some(table),
        other => {
            warn!(section = name, found = other.type_str(), "Section is not a table, using defaults");
            None
        }
    }
}

/// Scalar fields of a section; `nested` names the multi-section keys read separately
fn section<T: DeserializeOwned + Default>(
    name: &str,
    table: Option<&toml::Table>,
    nested: &[&str],
) -> T {
    let Some(table) = table else {
        return T::default();
    };
    let fields: toml::Table = table
        .iter()
        .filter(|(key, _)| !nested.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    lenient(name, &fields, &[]).unwrap_or_else(|e| {
        warn!(section = name, error = %e, "Invalid section in configuration file, using defaults");
        T::default()
    })
}

/// Entries of a multi-section, each deserialized on its own
///
/// Titled entries without a string `title` are skipped. A single table in
/// place of an array counts as one entry.
fn entries<T: DeserializeOwned>(
    section: &str,
    table: Option<&toml::Table>,
    key: &str,
    titled: bool,
) -> Vec<T> {
    let path = format!("{}.{}", section, key);
    let items: Vec<&toml::Value> = match table.and_then(|t| t.get(key)) {
        None => return Vec::new(),
        Some(toml::Value::Array(items)) => items.iter().collect(),
        Some(value) => vec![value],
    };
    let keep: &[&str] = if titled { &["title"] } else { &[] };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let Some(entry) = item.as_table() else {
                warn!(section = %path, index, found = item.type_str(), "Entry is not a table, skipped");
                return None;
            };
            if titled && !entry.get("title").is_some_and(toml::Value::is_str) {
                warn!(section = %path, index, "Entry without a title, skipped");
                return None;
            }
            lenient(&path, entry, keep)
                .inspect_err(|e| warn!(section = %path, index, error = %e, "Invalid entry, skipped"))
                .ok()
        })
        .collect()
}

/// Deserialize `table`, dropping each field that does not fit its type
///
/// Every field is tried alone (together with the `keep` fields, which the
/// type requires); a field that fails is removed so its default applies.
fn lenient<T: DeserializeOwned>(
    path: &str,
    table: &toml::Table,
    keep: &[&str],
) -> Result<T, toml::de::Error> {
    let required: toml::Table = keep
        .iter()
        .filter_map(|key| table.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect();

    let mut accepted = required.clone();
    for (key, value) in table {
        if accepted.contains_key(key) {
            continue;
        }
        let mut single = required.clone();
        single.insert(key.clone(), value.clone());
        let attempt: Result<T, _> = toml::Value::Table(single).try_into();
        match attempt {
            Ok(_) => {
                accepted.insert(key.clone(), value.clone());
            }
            Err(e) => {
                warn!(section = path, field = %key, error = %e, "Invalid value in configuration file, using default");
            }
        }
    }
    toml::Value::Table(accepted).try_into()
}
