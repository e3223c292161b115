//! Shorthand architecture names and their policy expansions.
//!
//! `Pool::set_architecture("i686")` is shorthand for the policy
//! `"i686:i586:i486:i386"`. This module holds that mapping. It is data, not
//! logic: lookup is an exact, linear scan and the first match wins.

use crate::error::ConfigError;
use std::str::FromStr;

/// Which alias list to consult.
///
/// Some distributions ship extra legacy x86 names and slot `athlon` into the
/// x86_64 chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasFlavor {
    #[default]
    Generic,
    Fedora,
}

impl FromStr for AliasFlavor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(AliasFlavor::Generic),
            "fedora" | "mageia" => Ok(AliasFlavor::Fedora),
            other => Err(ConfigError::UnknownFlavor(other.to_string())),
        }
    }
}

const GENERIC_ALIASES: &[(&str, &str)] = &[
    ("x86_64", "x86_64:i686:i586:i486:i386"),
    ("i686", "i686:i586:i486:i386"),
    ("i586", "i586:i486:i386"),
    ("i486", "i486:i386"),
    ("s390x", "s390x:s390"),
    ("ppc64", "ppc64:ppc"),
    ("ppc64p7", "ppc64p7:ppc64:ppc"),
    ("ia64", "ia64:i686:i586:i486:i386"),
    ("armv8hcnl", "armv8hcnl:armv8hnl:armv8hl:armv7hnl:armv7hl:armv6hl"),
    ("armv8hnl", "armv8hnl:armv8hl:armv7hnl:armv7hl:armv6hl"),
    ("armv8hl", "armv8hl:armv7hl:armv6hl"),
    ("armv8l", "armv8l:armv7l:armv6l:armv5tejl:armv5tel:armv5tl:armv5l:armv4tl:armv4l:armv3l"),
    ("armv7hnl", "armv7hnl:armv7hl:armv6hl"),
    ("armv7hl", "armv7hl:armv6hl"),
    ("armv7l", "armv7l:armv6l:armv5tejl:armv5tel:armv5tl:armv5l:armv4tl:armv4l:armv3l"),
    ("armv6l", "armv6l:armv5tejl:armv5tel:armv5tl:armv5l:armv4tl:armv4l:armv3l"),
    ("armv5tejl", "armv5tejl:armv5tel:armv5tl:armv5l:armv4tl:armv4l:armv3l"),
    ("armv5tel", "armv5tel:armv5tl:armv5l:armv4tl:armv4l:armv3l"),
    ("armv5tl", "armv5tl:armv5l:armv4tl:armv4l:armv3l"),
    ("armv5l", "armv5l:armv4tl:armv4l:armv3l"),
    ("armv4tl", "armv4tl:armv4l:armv3l"),
    ("armv4l", "armv4l:armv3l"),
    ("sh4a", "sh4a:sh4"),
    ("sparc64v", "sparc64v:sparc64:sparcv9v:sparcv9:sparcv8:sparc"),
    ("sparc64", "sparc64:sparcv9:sparcv8:sparc"),
    ("sparcv9v", "sparcv9v:sparcv9:sparcv8:sparc"),
    ("sparcv9", "sparcv9:sparcv8:sparc"),
    ("sparcv8", "sparcv8:sparc"),
    ("loongarch64", "loongarch64"),
];

// Scanned before GENERIC_ALIASES, so the x86_64 entry here shadows the generic one.
const FEDORA_ALIASES: &[(&str, &str)] = &[
    ("x86_64", "x86_64:athlon:i686:i586:i486:i386"),
    ("ia32e", "ia32e:x86_64:athlon:i686:i586:i486:i386"),
    ("athlon", "athlon:i686:i586:i486:i386"),
    ("amd64", "amd64:x86_64:athlon:i686:i586:i486:i386"),
    ("geode", "geode:i586:i486:i386"),
    ("ppc64iseries", "ppc64iseries:ppc64:ppc"),
    ("ppc64pseries", "ppc64pseries:ppc64:ppc"),
];

impl AliasFlavor {
    fn tables(self) -> &'static [&'static [(&'static str, &'static str)]] {
        match self {
            AliasFlavor::Generic => &[GENERIC_ALIASES],
            AliasFlavor::Fedora => &[FEDORA_ALIASES, GENERIC_ALIASES],
        }
    }

    /// Return the policy string registered for `arch`, if any.
    pub fn lookup(self, arch: &str) -> Option<&'static str> {
        self.tables().iter().flat_map(|table| table.iter()).find(|(name, _)| *name == arch).map(|(_, policy)| *policy)
    }

    /// Expand `arch` to its policy, or pass it through as a single-entry policy.
    pub fn expand(self, arch: &str) -> &str {
        self.lookup(arch).unwrap_or(arch)
    }
}
