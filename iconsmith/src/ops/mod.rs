//! Core operations.
//!
//! This module contains the business logic for iconsmith commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod list;
pub mod preview;

pub use generate::generate;
pub use list::list;
pub use preview::preview;
