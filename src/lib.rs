#![forbid(unsafe_code)]

//! Window manager configuration loading
//!
//! Reads the TOML config file and materializes it into a [`RuntimeConfig`]:
//! general settings, colors, status bar, layouts, rules, tags and key
//! bindings, with fonts and colors resolved against the display.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod keysym;
pub mod loader;
pub mod names;
pub mod platform;
pub mod runtime;

pub use error::LoadError;
pub use loader::ConfigLoader;
pub use platform::{Platform, X11Platform};
pub use runtime::RuntimeConfig;
