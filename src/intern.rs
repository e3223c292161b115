//! String interning for architecture names.
//!
//! Every architecture the resolver talks about is a small integer handed out
//! by a [`StringPool`]. Score and classification tables are plain side arrays
//! indexed by that integer, so ids must be stable and issued in increasing
//! order: once `"x86_64"` is `Id(7)` it stays `Id(7)` for the life of the pool.
//!
//! A handful of well-known names are interned up front so that code can refer
//! to them by constant instead of by lookup:
//!
//! ```text
//! 0 noarch   ARCH_NOARCH
//! 1 all      ARCH_ALL
//! 2 any      ARCH_ANY
//! 3 src      ARCH_SRC
//! 4 nosrc    ARCH_NOSRC
//! ```

use std::collections::HashMap;
use std::fmt;

/// Interned string identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// Position of this id in any side array keyed by it.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Id(index as u32)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The rpm-style architecture-independent marker.
pub const ARCH_NOARCH: Id = Id(0);
/// Debian's architecture-independent marker.
pub const ARCH_ALL: Id = Id(1);
/// Arch Linux / Haiku architecture-independent marker.
pub const ARCH_ANY: Id = Id(2);
/// Source packages.
pub const ARCH_SRC: Id = Id(3);
/// Source packages without buildable sources.
pub const ARCH_NOSRC: Id = Id(4);

const KNOWN_ARCHES: [&str; 5] = ["noarch", "all", "any", "src", "nosrc"];

/// Bidirectional `&str` <-> [`Id`] mapping.
#[derive(Debug, Clone)]
pub struct StringPool {
    strings: Vec<Box<str>>,
    index: HashMap<Box<str>, Id>,
}

impl Default for StringPool {
    fn default() -> Self {
        Self::new()
    }
}

impl StringPool {
    /// Create a pool with the well-known architecture names pre-interned.
    pub fn new() -> Self {
        let mut pool = StringPool { strings: Vec::new(), index: HashMap::new() };
        for name in KNOWN_ARCHES {
            pool.intern(name);
        }
        pool
    }

    /// Return the id for `text`, interning it if it has not been seen.
    pub fn intern(&mut self, text: &str) -> Id {
        if let Some(&id) = self.index.get(text) {
            return id;
        }
        let id = Id::from_index(self.strings.len());
        let owned: Box<str> = text.into();
        self.strings.push(owned.clone());
        self.index.insert(owned, id);
        id
    }

    /// Return the id for `text` without interning.
    pub fn lookup(&self, text: &str) -> Option<Id> {
        self.index.get(text).copied()
    }

    /// Resolve `id` back to its string.
    ///
    /// Ids from another pool are a caller bug; they resolve to `""` rather
    /// than panicking.
    pub fn resolve(&self, id: Id) -> &str {
        self.strings.get(id.index()).map(|s| &**s).unwrap_or("")
    }

    /// Number of interned strings (also the next id to be issued).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_arches_have_fixed_ids() {
        let pool = StringPool::new();
        assert_eq!(pool.lookup("noarch"), Some(ARCH_NOARCH));
        assert_eq!(pool.lookup("all"), Some(ARCH_ALL));
        assert_eq!(pool.lookup("any"), Some(ARCH_ANY));
        assert_eq!(pool.lookup("src"), Some(ARCH_SRC));
        assert_eq!(pool.lookup("nosrc"), Some(ARCH_NOSRC));
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn intern_is_stable_and_monotonic() {
        let mut pool = StringPool::new();
        let a = pool.intern("x86_64");
        let b = pool.intern("i686");
        assert_eq!(pool.intern("x86_64"), a);
        assert!(b > a);
        assert_eq!(pool.resolve(a), "x86_64");
        assert_eq!(pool.resolve(b), "i686");
    }

    #[test]
    fn lookup_does_not_intern() {
        let mut pool = StringPool::new();
        assert_eq!(pool.lookup("riscv64"), None);
        assert_eq!(pool.len(), 5);
        let id = pool.intern("riscv64");
        assert_eq!(pool.lookup("riscv64"), Some(id));
    }

    #[test]
    fn foreign_id_resolves_to_empty() {
        let pool = StringPool::new();
        assert_eq!(pool.resolve(Id::from_index(1000)), "");
    }
}
