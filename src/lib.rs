//! Architecture compatibility policies for package resolvers.
//!
//! A [`Pool`] compiles a preference string such as `"x86_64:i686:i586"` into
//! a score table keyed by interned architecture id, and classifies
//! architectures into word-size buckets so 32-bit and 64-bit packages are not
//! mixed.

#[macro_use]
mod macros;
mod aliases;
mod api;
mod error;
mod intern;
mod policy;

pub use aliases::AliasFlavor;
pub use api::{DistType, Options, Pool};
pub use error::ConfigError;
pub use intern::{ARCH_ALL, ARCH_ANY, ARCH_NOARCH, ARCH_NOSRC, ARCH_SRC, Id, StringPool};
pub use policy::{ArchPolicy, CompileStats, Relation};

// --- Scores -----------------------------------------------------------------

/// Preference key of a permitted architecture.
///
/// Scores order lexicographically by `(tier, rank)`; smaller is preferred.
///
/// - `tier` moves on every `:` in a policy. The resolver never changes an
///   installed package's architecture across a tier boundary.
/// - `rank` moves on every `>`. Within a tier, the resolver may fall back
///   from a lower rank to a higher one but not the other way round.
/// - Architectures joined by `=` share both fields.
///
/// The rank is not reset when the tier advances, so `"a>b:c"` gives
/// `a=(1,1)`, `b=(1,2)`, `c=(2,2)`. This matches the packed encoding used by
/// older consumers, see [`ArchScore::packed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchScore {
    pub tier: u32,
    pub rank: u32,
}

impl ArchScore {
    /// Score of the architecture-independent marker: ahead of everything.
    pub const NOARCH: ArchScore = ArchScore { tier: 0, rank: 1 };

    /// Score given to the first architecture of a policy.
    pub(crate) const FIRST: ArchScore = ArchScore { tier: 1, rank: 1 };

    /// Legacy 16/16 encoding: tier in the high half, rank in the low half.
    ///
    /// Arithmetic wraps the same way the packed accumulator did, so a policy
    /// with more than 65535 `>` steps bleeds into the tier half here too.
    pub fn packed(self) -> u32 {
        self.tier.wrapping_shl(16).wrapping_add(self.rank)
    }

    pub fn from_packed(packed: u32) -> Option<ArchScore> {
        if packed == 0 {
            return None;
        }
        Some(ArchScore { tier: packed >> 16, rank: packed & 0xffff })
    }

    /// True if both scores sit in the same `:`-delimited tier.
    pub fn same_tier(self, other: ArchScore) -> bool {
        self.tier == other.tier
    }
}

// --- Word sizes -------------------------------------------------------------

bitflags::bitflags! {
    /// Coarse word-size class of an architecture.
    ///
    /// Two architectures may be mixed when their classes intersect. The
    /// architecture-independent class has every bit set, so it intersects
    /// everything. An empty value is never a classification; caches use it
    /// for "not computed yet".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArchColor: u8 {
        const BITS_32 = 1 << 0;
        const BITS_64 = 1 << 1;
        const ALL     = 0xff;
    }
}

impl ArchColor {
    pub fn label(self) -> &'static str {
        if self == ArchColor::ALL {
            "noarch"
        } else if self == ArchColor::BITS_64 {
            "64-bit"
        } else if self == ArchColor::BITS_32 {
            "32-bit"
        } else {
            "unset"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_order_by_tier_then_rank() {
        let a = ArchScore { tier: 1, rank: 5 };
        let b = ArchScore { tier: 2, rank: 1 };
        let c = ArchScore { tier: 2, rank: 2 };
        assert!(ArchScore::NOARCH < a);
        assert!(a < b);
        assert!(b < c);
        assert!(b.same_tier(c));
        assert!(!a.same_tier(b));
    }

    #[test]
    fn packed_encoding_matches_legacy_layout() {
        assert_eq!(ArchScore::NOARCH.packed(), 1);
        assert_eq!(ArchScore::FIRST.packed(), 0x10001);
        assert_eq!(ArchScore { tier: 3, rank: 2 }.packed(), 0x30002);
        assert_eq!(ArchScore::from_packed(0x30002), Some(ArchScore { tier: 3, rank: 2 }));
        assert_eq!(ArchScore::from_packed(0), None);
    }

    #[test]
    fn colors_intersect_as_expected() {
        assert!(ArchColor::ALL.intersects(ArchColor::BITS_32));
        assert!(ArchColor::ALL.intersects(ArchColor::BITS_64));
        assert!(!ArchColor::BITS_32.intersects(ArchColor::BITS_64));
        assert_eq!(ArchColor::empty().label(), "unset");
    }
}
