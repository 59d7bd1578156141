//! Recursive directory traversal with pluggable unit loading.
//!
//! The walker visits every entry under a root, descends into active
//! subdirectories, and hands each active file to a [`Loader`]. Loaded unit
//! values are delivered through a caller-supplied callback — the
//! auto-registration pattern: any non-underscore file with the unit
//! extension registers itself just by existing in the tree.
//!
//! Two traversal strategies are provided:
//!
//! - [`walk`]: all unit loads run concurrently and the callback fires in
//!   completion order, which is not deterministic across siblings or
//!   subdirectories. Callers must not depend on ordering.
//! - [`walk_ordered`]: discovered paths are sorted and loaded one at a
//!   time, for callers that need reproducible registration order.
//!
//! Per-unit load failures never abort a traversal; they are aggregated in
//! the returned [`WalkOutcome`]. Only directory-listing failures surface as
//! hard errors.

mod filter;
mod loader;

use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use thiserror::Error;
use tokio::fs;

use crate::{Error, Result};

pub use filter::NamingFilter;
pub use loader::{JsonLoader, Loader};

/// A unit that could not be loaded during a traversal.
#[derive(Error, Debug)]
#[error("failed to load {}: {cause}", path.display())]
pub struct LoadFailure {
    /// Path of the unit that failed.
    pub path: PathBuf,
    /// Why the load failed.
    #[source]
    pub cause: Error,
}

/// Result of one traversal: how many units loaded and which ones failed.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Number of units successfully loaded and delivered to the callback.
    pub loaded: usize,
    /// Units that failed to load.
    pub failures: Vec<LoadFailure>,
}

impl WalkOutcome {
    /// True when every discovered unit loaded successfully.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Recursively collect the paths of all active files under `dir`.
///
/// Inactive entries are skipped silently (logged at debug level); inactive
/// directories are not descended into.
fn collect_active<'a>(
    dir: PathBuf,
    filter: &'a NamingFilter,
    out: &'a mut Vec<PathBuf>,
) -> BoxFuture<'a, Result<()>> {
    async move {
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry.file_type().await?;

            if file_type.is_dir() {
                if NamingFilter::is_active_dir(&name) {
                    collect_active(entry.path(), filter, out).await?;
                } else {
                    log::debug!("skipping inactive directory: {}", entry.path().display());
                }
            } else if file_type.is_file() {
                if filter.is_active_file(&name) {
                    out.push(entry.path());
                } else {
                    log::debug!("skipping inactive file: {}", entry.path().display());
                }
            }
        }
        Ok(())
    }
    .boxed()
}

/// Walk the tree under `root`, loading every active file concurrently and
/// invoking `on_unit` with each loaded value as it completes.
///
/// The callback fires exactly once per active file, in completion order.
/// Load failures are collected in the returned [`WalkOutcome`] rather than
/// propagated.
///
/// # Errors
///
/// Returns [`Error::Io`] when a directory cannot be listed.
///
/// # Example
///
/// ```no_run
/// # use oxbow::walk::{walk, JsonLoader, NamingFilter};
/// # use std::path::Path;
/// # async fn example() -> oxbow::Result<()> {
/// let loader: JsonLoader<serde_json::Value> = JsonLoader::new();
/// let outcome = walk(Path::new("plugins"), &NamingFilter::new("json"), &loader, |value| {
///     println!("registered: {value}");
/// })
/// .await?;
/// assert!(outcome.is_clean());
/// # Ok(())
/// # }
/// ```
pub async fn walk<L, F>(
    root: &Path,
    filter: &NamingFilter,
    loader: &L,
    mut on_unit: F,
) -> Result<WalkOutcome>
where
    L: Loader,
    F: FnMut(L::Unit),
{
    let mut paths = Vec::new();
    collect_active(root.to_path_buf(), filter, &mut paths).await?;

    let mut loads = FuturesUnordered::new();
    for path in paths {
        loads.push(async move {
            match loader.load(&path).await {
                Ok(unit) => Ok(unit),
                Err(cause) => Err(LoadFailure { path, cause }),
            }
        });
    }

    let mut outcome = WalkOutcome::default();
    while let Some(result) = loads.next().await {
        match result {
            Ok(unit) => {
                outcome.loaded += 1;
                on_unit(unit);
            }
            Err(failure) => {
                log::debug!("{failure}");
                outcome.failures.push(failure);
            }
        }
    }

    Ok(outcome)
}

/// Like [`walk`], but loads units sequentially in sorted path order, so the
/// callback fires in a reproducible order.
pub async fn walk_ordered<L, F>(
    root: &Path,
    filter: &NamingFilter,
    loader: &L,
    mut on_unit: F,
) -> Result<WalkOutcome>
where
    L: Loader,
    F: FnMut(L::Unit),
{
    let mut paths = Vec::new();
    collect_active(root.to_path_buf(), filter, &mut paths).await?;
    paths.sort();

    let mut outcome = WalkOutcome::default();
    for path in paths {
        match loader.load(&path).await {
            Ok(unit) => {
                outcome.loaded += 1;
                on_unit(unit);
            }
            Err(cause) => {
                let failure = LoadFailure { path, cause };
                log::debug!("{failure}");
                outcome.failures.push(failure);
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use tempfile::TempDir;

    /// Test loader whose exported value is the file's text contents.
    struct TextLoader;

    #[async_trait]
    impl Loader for TextLoader {
        type Unit = String;

        async fn load(&self, path: &Path) -> Result<String> {
            let raw = fs::read_to_string(path).await?;
            if raw.starts_with("!boom") {
                return Err(Error::serialization(format!(
                    "{}: poisoned unit",
                    path.display()
                )));
            }
            Ok(raw)
        }
    }

    async fn write_unit(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).await.unwrap();
    }

    #[tokio::test]
    async fn test_walk_skips_inactive_entries() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "a.ext", "alpha").await;
        write_unit(temp.path(), "_b.ext", "hidden").await;

        let sub = temp.path().join("_sub");
        fs::create_dir(&sub).await.unwrap();
        write_unit(&sub, "c.ext", "buried").await;

        let mut seen = Vec::new();
        let outcome = walk(temp.path(), &NamingFilter::new("ext"), &TextLoader, |unit| {
            seen.push(unit)
        })
        .await
        .unwrap();

        assert_eq!(seen, vec!["alpha".to_string()]);
        assert_eq!(outcome.loaded, 1);
        assert!(outcome.is_clean());
    }

    #[tokio::test]
    async fn test_walk_fires_once_per_active_file_in_nested_tree() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "top.ext", "top").await;

        let inner = temp.path().join("inner");
        fs::create_dir(&inner).await.unwrap();
        write_unit(&inner, "mid.ext", "mid").await;

        let deepest = inner.join("deepest");
        fs::create_dir(&deepest).await.unwrap();
        write_unit(&deepest, "leaf.ext", "leaf").await;

        let mut seen = HashSet::new();
        let outcome = walk(temp.path(), &NamingFilter::new("ext"), &TextLoader, |unit| {
            assert!(seen.insert(unit), "callback fired twice for one unit");
        })
        .await
        .unwrap();

        let expected: HashSet<String> =
            ["top", "mid", "leaf"].iter().map(|s| s.to_string()).collect();
        assert_eq!(seen, expected);
        assert_eq!(outcome.loaded, 3);
    }

    #[tokio::test]
    async fn test_walk_ignores_other_extensions() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "a.ext", "alpha").await;
        write_unit(temp.path(), "b.txt", "not a unit").await;

        let mut seen = Vec::new();
        walk(temp.path(), &NamingFilter::new("ext"), &TextLoader, |unit| {
            seen.push(unit)
        })
        .await
        .unwrap();

        assert_eq!(seen, vec!["alpha".to_string()]);
    }

    #[tokio::test]
    async fn test_walk_aggregates_load_failures() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "good.ext", "fine").await;
        write_unit(temp.path(), "bad.ext", "!boom").await;

        let mut seen = Vec::new();
        let outcome = walk(temp.path(), &NamingFilter::new("ext"), &TextLoader, |unit| {
            seen.push(unit)
        })
        .await
        .unwrap();

        assert_eq!(seen, vec!["fine".to_string()]);
        assert_eq!(outcome.loaded, 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(!outcome.is_clean());

        let failure = &outcome.failures[0];
        assert!(failure.path.ends_with("bad.ext"));
        assert!(failure.to_string().contains("bad.ext"));
    }

    #[tokio::test]
    async fn test_walk_missing_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent");

        let result = walk(&missing, &NamingFilter::new("ext"), &TextLoader, |_: String| {}).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_walk_empty_tree() {
        let temp = TempDir::new().unwrap();
        let outcome = walk(temp.path(), &NamingFilter::new("ext"), &TextLoader, |_: String| {
            panic!("no units expected")
        })
        .await
        .unwrap();
        assert_eq!(outcome.loaded, 0);
        assert!(outcome.is_clean());
    }

    #[tokio::test]
    async fn test_walk_ordered_is_deterministic() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "b.ext", "second").await;
        write_unit(temp.path(), "a.ext", "first").await;

        let nested = temp.path().join("c");
        fs::create_dir(&nested).await.unwrap();
        write_unit(&nested, "d.ext", "third").await;

        let mut seen = Vec::new();
        let outcome = walk_ordered(temp.path(), &NamingFilter::new("ext"), &TextLoader, |unit| {
            seen.push(unit)
        })
        .await
        .unwrap();

        assert_eq!(
            seen,
            vec!["first".to_string(), "second".to_string(), "third".to_string()]
        );
        assert_eq!(outcome.loaded, 3);
    }

    #[tokio::test]
    async fn test_walk_with_json_loader() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "one.json", r#"{"priority": 1}"#).await;
        write_unit(temp.path(), "two.json", r#"{"priority": 2}"#).await;
        write_unit(temp.path(), "_three.json", r#"{"priority": 3}"#).await;

        let loader: JsonLoader<serde_json::Value> = JsonLoader::new();
        let mut priorities = Vec::new();
        let outcome = walk(temp.path(), &NamingFilter::new("json"), &loader, |value| {
            priorities.push(value["priority"].as_u64().unwrap());
        })
        .await
        .unwrap();

        priorities.sort_unstable();
        assert_eq!(priorities, vec![1, 2]);
        assert!(outcome.is_clean());
    }
}
