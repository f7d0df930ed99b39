//! This crate contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Configuration::load_from_default_path`].
//!
//! # Internals
//! The entire configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated ("resolved") configuration
//! structures.
//!
//! Even though callers only ever interact with [`Configuration`], loading
//! internally deserializes the file into an `UnresolvedConfiguration` first
//! and then resolves it, section by section. Any additional validation
//! (e.g. rejecting an invalid tracing filter) happens in that resolution
//! step, before the rest of the application ever sees the value.

mod errors;
mod structure;
mod traits;
mod utilities;

pub use errors::*;
pub use structure::*;
