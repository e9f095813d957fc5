//! Core types and utilities for the iconsmith component generator.
//!
//! This crate owns everything that does not depend on a target framework's
//! template: scanning an icon tree, deriving component names from relative
//! paths, pulling the drawable markup out of an SVG document, and the
//! filterable view that joins the two.

mod extract;
mod file;
mod framework;
mod naming;
mod scan;
mod source;
mod stamp;
mod view;

// SVG surgery
pub use extract::{DEFAULT_VIEW_BOX, Fallback, SvgContent, extract};
// File operations
pub use file::{GeneratedFile, write_atomic};
pub use framework::Framework;
// Naming
pub use naming::{NamingConfig, derive_name};
// Scanning
pub use scan::{ScanCause, ScanError, scan};
pub use source::{ComponentEntry, SourceFile};
pub use stamp::Stamp;
pub use view::{Collision, FileSetView, filter_entries};
