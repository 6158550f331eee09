use thiserror::Error;

/// Unrecoverable configuration errors
///
/// The window manager cannot start when any of these occur. The loader
/// returns them instead of exiting; the entry point decides to terminate.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no configuration path given and no home directory found")]
    NoHomeDirectory,

    #[error("no default layout available")]
    NoDefaultLayout,

    #[error("no tags found in configuration file")]
    NoTags,

    #[error("cannot init font '{descriptor}': {reason}")]
    Font { descriptor: String, reason: String },

    #[error("cannot allocate color '{color}': {reason}")]
    Color { color: String, reason: String },
}
