//! Configuration file handling
//!
//! - **schema**: serde section structs with their defaults
//! - **source**: path resolution and best-effort reading

pub mod schema;
pub mod source;

pub use schema::{
    ColorsSection, GeneralSection, KeySection, KeysSection, LayoutSection, LayoutsSection,
    RuleSection, RulesSection, StatusbarSection, TagSection, TagsSection,
};
pub use source::{ConfigFile, resolve_config_path};
