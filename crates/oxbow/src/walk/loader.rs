//! The loading seam between traversal and unit contents.
//!
//! [`Loader`] turns a file path into that unit's primary exported value.
//! The walker stays agnostic about what a unit is; callers pick or write a
//! loader for their format. [`JsonLoader`] is the built-in implementation
//! for JSON-bodied units.

use std::marker::PhantomData;
use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::{Error, Result};

/// Loads the primary exported value of the unit at a path.
///
/// Implementations may fail per unit; the walker aggregates those failures
/// instead of aborting the traversal.
#[async_trait]
pub trait Loader: Send + Sync {
    /// The value a loaded unit exports.
    type Unit: Send;

    /// Load the unit at `path` and return its exported value.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit cannot be read or is malformed.
    async fn load(&self, path: &Path) -> Result<Self::Unit>;
}

/// Loader for units whose body is a JSON document deserializable as `T`.
///
/// # Example
///
/// ```no_run
/// # use oxbow::walk::{JsonLoader, Loader};
/// # use std::path::Path;
/// # async fn example() -> oxbow::Result<()> {
/// let loader: JsonLoader<serde_json::Value> = JsonLoader::new();
/// let value = loader.load(Path::new("plugins/greeter.json")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JsonLoader<T> {
    _unit: PhantomData<fn() -> T>,
}

impl<T> JsonLoader<T> {
    /// Create a JSON loader producing values of type `T`.
    pub fn new() -> Self {
        Self { _unit: PhantomData }
    }
}

impl<T> Default for JsonLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Loader for JsonLoader<T>
where
    T: DeserializeOwned + Send,
{
    type Unit = T;

    async fn load(&self, path: &Path) -> Result<T> {
        let raw = fs::read_to_string(path).await?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::serialization(format!("{}: {}", path.display(), e)))
    }
}
