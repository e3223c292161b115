//! Word-size classification.
//!
//! The resolver refuses to mix 32-bit and 64-bit packages of a multilib
//! install. Which bucket an architecture falls into is decided from its name
//! alone:
//!
//! ```text
//! noarch / all / any   -> ALL      (mixes with anything)
//! "s390x"              -> BITS_64
//! contains "64"        -> BITS_64
//! anything else        -> BITS_32
//! ```
//!
//! This is a naming heuristic, not a hardware probe.
//!
//! Results are cached in a side array sized to the policy table extent when
//! first needed. Ids past the extent were never named by the policy; they are
//! treated as universally compatible and are not cached.

use crate::{ARCH_ALL, ARCH_ANY, ARCH_NOARCH, ArchColor, Id, StringPool};
use log::trace;

/// Lazily filled classification cache.
///
/// An empty [`ArchColor`] marks a slot that has not been computed, so a
/// cached `ALL` and a never-classified slot are told apart.
#[derive(Debug, Clone, Default)]
pub(crate) struct ColorCache {
    colors: Vec<ArchColor>,
}

impl ColorCache {
    pub fn clear(&mut self) {
        self.colors = Vec::new();
    }

    /// Cached class of `id`, without computing anything.
    pub fn peek(&self, id: Id) -> Option<ArchColor> {
        self.colors.get(id.index()).copied().filter(|color| !color.is_empty())
    }

    /// Class of `id`, computed and cached on first use.
    ///
    /// `last_arch` is the extent of the active policy table (`0` without a
    /// policy, which sends every id down the uncached path).
    pub fn classify(&mut self, strings: &StringPool, noarch: Id, last_arch: usize, id: Id) -> ArchColor {
        if let Some(color) = self.peek(id) {
            return color;
        }
        if id.index() >= last_arch {
            return ArchColor::ALL;
        }
        if self.colors.is_empty() {
            self.colors = vec![ArchColor::empty(); last_arch + 1];
        }

        let name = strings.resolve(id);
        let color = if id == noarch { ArchColor::ALL } else { word_size(id, name) };
        trace!("[arch_color] {} '{}' -> {}", id, name, color.label());

        self.colors[id.index()] = color;
        color
    }
}

fn word_size(id: Id, name: &str) -> ArchColor {
    if id == ARCH_NOARCH || id == ARCH_ALL || id == ARCH_ANY {
        ArchColor::ALL
    } else if name == "s390x" || name.contains("64") {
        ArchColor::BITS_64
    } else {
        ArchColor::BITS_32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_size_from_name() {
        let mut strings = StringPool::new();
        let x86_64 = strings.intern("x86_64");
        let i686 = strings.intern("i686");
        let s390x = strings.intern("s390x");
        let aarch64 = strings.intern("aarch64");
        let armv7hl = strings.intern("armv7hl");

        assert_eq!(word_size(x86_64, "x86_64"), ArchColor::BITS_64);
        assert_eq!(word_size(aarch64, "aarch64"), ArchColor::BITS_64);
        assert_eq!(word_size(s390x, "s390x"), ArchColor::BITS_64);
        assert_eq!(word_size(i686, "i686"), ArchColor::BITS_32);
        assert_eq!(word_size(armv7hl, "armv7hl"), ArchColor::BITS_32);
    }

    #[test]
    fn sentinels_are_independent() {
        assert_eq!(word_size(ARCH_NOARCH, "noarch"), ArchColor::ALL);
        assert_eq!(word_size(ARCH_ALL, "all"), ArchColor::ALL);
        assert_eq!(word_size(ARCH_ANY, "any"), ArchColor::ALL);
    }

    #[test]
    fn cache_is_allocated_on_first_use_and_sized_to_extent() {
        let mut strings = StringPool::new();
        let ppc64 = strings.intern("ppc64");
        let mut cache = ColorCache::default();
        assert_eq!(cache.peek(ppc64), None);

        assert_eq!(cache.classify(&strings, ARCH_NOARCH, 300, ppc64), ArchColor::BITS_64);
        assert_eq!(cache.colors.len(), 301);
        assert_eq!(cache.peek(ppc64), Some(ArchColor::BITS_64));

        cache.clear();
        assert_eq!(cache.peek(ppc64), None);
    }

    #[test]
    fn out_of_extent_is_independent_and_not_cached() {
        let mut strings = StringPool::new();
        let sparc = strings.intern("sparc");
        let mut cache = ColorCache::default();

        assert_eq!(cache.classify(&strings, ARCH_NOARCH, 0, sparc), ArchColor::ALL);
        assert_eq!(cache.peek(sparc), None);
        assert!(cache.colors.is_empty());
    }
}
