//! Component generation for iconsmith.
//!
//! Turns [`ComponentEntry`](iconsmith_core::ComponentEntry) selections into
//! Vue or React component files plus an `index.js` export manifest.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building (CodeBuilder, Indent)
//! - [`templates`] - Framework templates (VueTemplate, ReactTemplate)
//! - [`batch`] - Sequential batch generation with progress reporting
//! - [`index`] - Export manifest rendering and writing

pub mod batch;
pub mod builder;
mod error;
pub mod index;
pub mod templates;

pub use batch::{
    BatchGenerator, BatchPreview, FailedEntry, GeneratedComponent, GenerationResult, PreviewFile,
    Progress, render_preview,
};
pub use error::{EntryError, GenerateError, IndexError};
pub use index::{ExportLine, INDEX_FILE_NAME, IndexManifest, IndexWriter};
pub use templates::{ComponentSource, ComponentTemplate, ReactTemplate, VueTemplate, render};
