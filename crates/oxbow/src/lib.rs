//! Oxbow — small general-purpose utilities.
//!
//! Independent helper groups with no shared state:
//!
//! - [`months`]: calendar month names from indices, timestamps, and datetimes
//! - [`duration`]: human-readable duration formatting with fixed units
//! - [`ident`]: process-unique random identifier generation
//! - [`delay`]: suspending and thread-blocking delay primitives
//! - [`walk`]: recursive directory traversal with pluggable unit loading
//! - [`error`]: error types and Result alias

pub mod delay;
pub mod duration;
pub mod error;
pub mod ident;
pub mod months;
pub mod walk;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use ident::IdGenerator;
pub use walk::{JsonLoader, LoadFailure, Loader, NamingFilter, WalkOutcome};

// Convenience re-exports for the common entry points
pub use delay::{blocking_delay, delay};
pub use duration::{DurationParts, duration_to_string};
pub use months::{month_name, month_name_from_timestamp};
pub use walk::{walk, walk_ordered};
