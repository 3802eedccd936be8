//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup with thread-safe access via an
//! internal `RwLock`. One interner is shared across every file a resolver
//! scans, so names from different files compare directly.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    #[error("interner exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow {
        /// Number of strings already interned.
        count: usize,
    },
}

struct InternerInner {
    /// Map from string content to index in `strings`.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// Interned strings are leaked to obtain `'static` lifetime, so lookups
/// hand out `&'static str` without holding any lock. Wrap in [`Arc`] (see
/// [`SharedInterner`]) to share across files and threads.
pub struct Interner {
    inner: RwLock<InternerInner>,
}

/// An interner shared between the scanner, resolvers, and source files.
pub type SharedInterner = Arc<Interner>;

impl Interner {
    /// Create a new interner with the empty string pre-interned as
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        Interner {
            inner: RwLock::new(InternerInner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Create a new shared interner.
    pub fn shared() -> SharedInterner {
        Arc::new(Self::new())
    }

    /// Try to intern a string, returning its [`Name`] or an error on
    /// overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(s) {
                return Ok(Name::from_raw(idx));
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock
        if let Some(&idx) = guard.map.get(s) {
            return Ok(Name::from_raw(idx));
        }

        let idx = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);
        Ok(Name::from_raw(idx))
    }

    /// Intern a string, returning its [`Name`].
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use [`Interner::try_intern`] for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the text of an interned name.
    ///
    /// Returns `None` for a name minted by a different interner.
    pub fn lookup(&self, name: Name) -> Option<&'static str> {
        self.inner.read().strings.get(name.raw() as usize).copied()
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Whether the interner holds no strings. Always false in practice.
    pub fn is_empty(&self) -> bool {
        self.inner.read().strings.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
