//! Naming convention for traversal.
//!
//! Entries whose names start with an underscore are private by convention:
//! the walker neither loads them nor descends into them. Files must also
//! carry the filter's unit extension to be considered loadable.

/// Classifies filesystem entries as active (traversed/loaded) or inactive
/// (skipped) based purely on their names. Stateless; recomputed per entry.
///
/// # Example
///
/// ```
/// use oxbow::walk::NamingFilter;
///
/// let filter = NamingFilter::new("json");
/// assert!(filter.is_active_file("plugin.json"));
/// assert!(!filter.is_active_file("_plugin.json"));
/// assert!(!filter.is_active_file("plugin.toml"));
/// assert!(NamingFilter::is_active_dir("plugins"));
/// assert!(!NamingFilter::is_active_dir("_private"));
/// ```
#[derive(Debug, Clone)]
pub struct NamingFilter {
    extension: String,
}

impl NamingFilter {
    /// Create a filter accepting files with the given extension (without the
    /// leading dot).
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// The unit extension this filter accepts.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// A file is active when its name does not start with an underscore,
    /// has a non-empty stem, and carries the filter's extension.
    pub fn is_active_file(&self, name: &str) -> bool {
        if name.starts_with('_') {
            return false;
        }
        match name.rsplit_once('.') {
            Some((stem, ext)) => !stem.is_empty() && ext == self.extension,
            None => false,
        }
    }

    /// A directory is active when its name does not start with an
    /// underscore.
    pub fn is_active_dir(name: &str) -> bool {
        !name.is_empty() && !name.starts_with('_')
    }
}
