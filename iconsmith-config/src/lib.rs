//! Project configuration for iconsmith.
//!
//! Reads the optional `iconsmith.toml`:
//!
//! ```toml
//! [source]
//! dir = "assets/icons"
//!
//! [naming]
//! prefix = ""
//! suffix = "Component"
//!
//! [output]
//! dir = "src/components/icons"
//! framework = "vue"
//! preserve_structure = false
//! ```
//!
//! Errors implement [`miette::Diagnostic`] and point at the offending TOML.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, DEFAULT_SUFFIX, NamingSection, OutputSection, SourceSection};
pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, IconsmithToml};
pub use validate::validate_affix;
