//! Process-unique identifier generation.
//!
//! [`IdGenerator`] issues random base-36 tokens and remembers every token it
//! has handed out, so no identifier is returned twice within the generator's
//! lifetime. The registry lives in memory only: it is created with the
//! generator, cleared only by [`IdGenerator::reset`], and never persisted,
//! so uniqueness does not hold across process restarts.

use std::collections::HashSet;
use std::sync::Mutex;

use rand::Rng;

/// Alphabet for base-36 identifiers.
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default identifier length in base-36 characters.
pub const DEFAULT_ID_LENGTH: usize = 10;

/// Collisions tolerated at one length before widening the identifier space.
const MAX_RETRIES_PER_LENGTH: usize = 32;

#[derive(Debug)]
struct Registry {
    issued: HashSet<String>,
    length: usize,
}

/// Generator of process-unique random identifiers.
///
/// Collisions are retried; after [`MAX_RETRIES_PER_LENGTH`] consecutive
/// collisions the identifier length grows by one character, so generation
/// always terminates. The issued set is guarded by a mutex, making a shared
/// generator safe to use from multiple threads.
///
/// # Example
///
/// ```
/// use oxbow::ident::IdGenerator;
///
/// let ids = IdGenerator::new();
/// let a = ids.generate();
/// let b = ids.generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    registry: Mutex<Registry>,
}

impl IdGenerator {
    /// Create a generator issuing identifiers of [`DEFAULT_ID_LENGTH`].
    pub fn new() -> Self {
        Self::with_length(DEFAULT_ID_LENGTH)
    }

    /// Create a generator issuing identifiers of `length` base-36 characters.
    /// A length of zero is treated as the default.
    pub fn with_length(length: usize) -> Self {
        let length = if length == 0 { DEFAULT_ID_LENGTH } else { length };
        Self {
            registry: Mutex::new(Registry {
                issued: HashSet::new(),
                length,
            }),
        }
    }

    /// Generate a new identifier, distinct from every identifier this
    /// generator has previously returned.
    pub fn generate(&self) -> String {
        let mut registry = match self.registry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut retries = 0;
        loop {
            let candidate = random_base36(registry.length);
            if !registry.issued.contains(&candidate) {
                registry.issued.insert(candidate.clone());
                return candidate;
            }

            retries += 1;
            if retries >= MAX_RETRIES_PER_LENGTH {
                registry.length += 1;
                retries = 0;
                log::debug!(
                    "identifier space widened to {} characters after repeated collisions",
                    registry.length
                );
            }
        }
    }

    /// Number of identifiers issued so far.
    pub fn issued_count(&self) -> usize {
        match self.registry.lock() {
            Ok(guard) => guard.issued.len(),
            Err(poisoned) => poisoned.into_inner().issued.len(),
        }
    }

    /// True when no identifiers have been issued.
    pub fn is_empty(&self) -> bool {
        self.issued_count() == 0
    }

    /// Forget every issued identifier. Previously returned identifiers may
    /// be issued again after a reset.
    pub fn reset(&self) {
        let mut registry = match self.registry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        registry.issued.clear();
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_base36(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
