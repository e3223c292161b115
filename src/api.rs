use crate::aliases::AliasFlavor;
use crate::error::ConfigError;
use crate::intern::{ARCH_ALL, ARCH_ANY, ARCH_NOARCH, Id, StringPool};
use crate::policy::{ArchPolicy, ColorCache, compile};
use crate::{ArchColor, ArchScore};
use log::debug;
use std::str::FromStr;

/// Packaging convention of the repositories a pool resolves against.
///
/// Only affects which name marks architecture-independent packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistType {
    #[default]
    Rpm,
    Deb,
    Arch,
    Haiku,
}

impl DistType {
    /// The architecture-independent id used by this convention.
    pub fn noarch_id(self) -> Id {
        match self {
            DistType::Rpm => ARCH_NOARCH,
            DistType::Deb => ARCH_ALL,
            DistType::Arch | DistType::Haiku => ARCH_ANY,
        }
    }
}

impl FromStr for DistType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rpm" => Ok(DistType::Rpm),
            "deb" | "debian" => Ok(DistType::Deb),
            "arch" => Ok(DistType::Arch),
            "haiku" => Ok(DistType::Haiku),
            other => Err(ConfigError::UnknownDistType(other.to_string())),
        }
    }
}

/// Pool configuration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Alias list consulted by [`Pool::set_architecture`].
    pub flavor: AliasFlavor,
    pub dist_type: DistType,
}

/// Resolver-side owner of the architecture tables.
///
/// A pool interns architecture names, holds the active policy table and the
/// word-size cache built on it. Setting a policy replaces both tables
/// together.
///
/// # Example
/// ```
/// use archrank::{ArchColor, Pool};
///
/// let mut pool = Pool::new();
/// pool.set_architecture(Some("x86_64"));
///
/// let x86_64 = pool.intern("x86_64");
/// let i686 = pool.intern("i686");
/// assert!(pool.arch_score(x86_64) < pool.arch_score(i686));
/// assert_eq!(pool.classify(i686), ArchColor::BITS_32);
/// assert!(!pool.color_match(x86_64, i686));
/// ```
#[derive(Debug, Clone)]
pub struct Pool {
    strings: StringPool,
    options: Options,
    noarch: Id,
    policy: Option<ArchPolicy>,
    colors: ColorCache,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        let noarch = options.dist_type.noarch_id();
        Pool { strings: StringPool::new(), options, noarch, policy: None, colors: ColorCache::default() }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn strings(&self) -> &StringPool {
        &self.strings
    }

    pub fn intern(&mut self, name: &str) -> Id {
        self.strings.intern(name)
    }

    pub fn resolve(&self, id: Id) -> &str {
        self.strings.resolve(id)
    }

    /// The architecture-independent id for this pool's [`DistType`].
    pub fn noarch_id(&self) -> Id {
        self.noarch
    }

    /// Set the machine architecture, expanding known shorthand names.
    ///
    /// `"i686"` becomes `"i686:i586:i486:i386"`; unknown names become a
    /// policy that permits only themselves (and noarch). `None` disables the
    /// policy.
    pub fn set_architecture(&mut self, arch: Option<&str>) {
        let policy = arch.map(|name| self.options.flavor.expand(name));
        self.set_architecture_policy(policy);
    }

    /// Compile `policy` and make it the active architecture policy.
    ///
    /// Any previous table and word-size cache are dropped first. `None`
    /// leaves the pool without a policy; score queries then return `None`
    /// and word-size queries fall back to treating everything as noarch.
    pub fn set_architecture_policy(&mut self, policy: Option<&str>) {
        self.policy = None;
        self.colors.clear();
        match policy {
            Some(text) => self.policy = Some(compile(&mut self.strings, self.noarch, text)),
            None => debug!("[arch_policy] cleared"),
        }
    }

    pub fn arch_policy(&self) -> Option<&ArchPolicy> {
        self.policy.as_ref()
    }

    pub fn has_arch_policy(&self) -> bool {
        self.policy.is_some()
    }

    /// Score of `arch` under the active policy.
    ///
    /// `None` if the architecture is not permitted. Without a policy the
    /// answer carries no meaning and is always `None`.
    pub fn arch_score(&self, arch: Id) -> Option<ArchScore> {
        self.policy.as_ref().and_then(|p| p.score(arch))
    }

    /// Word-size class of `arch`, computed on first use and cached.
    pub fn classify(&mut self, arch: Id) -> ArchColor {
        let last_arch = self.policy.as_ref().map_or(0, ArchPolicy::last_arch);
        self.colors.classify(&self.strings, self.noarch, last_arch, arch)
    }

    /// Cached word-size class of `arch`, if it has been classified.
    pub fn peek_arch_color(&self, arch: Id) -> Option<ArchColor> {
        self.colors.peek(arch)
    }

    /// True if packages of `a` and `b` may be installed side by side
    /// without mixing word sizes.
    pub fn color_match(&mut self, a: Id, b: Id) -> bool {
        self.classify(a).intersects(self.classify(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_architecture_expands_aliases() {
        let mut pool = Pool::new();
        pool.set_architecture(Some("i586"));

        assert_eq!(pool.arch_policy().map(ArchPolicy::source), Some("i586:i486:i386"));
        let i386 = pool.intern("i386");
        assert_eq!(pool.arch_score(i386), Some(ArchScore { tier: 3, rank: 1 }));
    }

    #[test]
    fn unknown_architecture_permits_only_itself() {
        let mut pool = Pool::new();
        pool.set_architecture(Some("riscv64"));

        let riscv64 = pool.intern("riscv64");
        let x86_64 = pool.intern("x86_64");
        assert_eq!(pool.arch_score(riscv64), Some(ArchScore::FIRST));
        assert_eq!(pool.arch_score(ARCH_NOARCH), Some(ArchScore::NOARCH));
        assert_eq!(pool.arch_score(x86_64), None);
    }

    #[test]
    fn set_architecture_none_clears_policy() {
        let mut pool = Pool::new();
        pool.set_architecture(Some("x86_64"));
        assert!(pool.has_arch_policy());

        pool.set_architecture(None);
        assert!(!pool.has_arch_policy());
        assert_eq!(pool.arch_score(ARCH_NOARCH), None);
    }

    #[test]
    fn fedora_flavor_slots_athlon() {
        let mut pool = Pool::with_options(Options { flavor: AliasFlavor::Fedora, ..Options::default() });
        pool.set_architecture(Some("x86_64"));

        let athlon = pool.intern("athlon");
        assert_eq!(pool.arch_score(athlon), Some(ArchScore { tier: 2, rank: 1 }));
    }

    #[test]
    fn deb_pool_scores_all_as_noarch() {
        let mut pool = Pool::with_options(Options { dist_type: DistType::Deb, ..Options::default() });
        assert_eq!(pool.noarch_id(), ARCH_ALL);
        pool.set_architecture_policy(Some("amd64"));

        assert_eq!(pool.arch_score(ARCH_ALL), Some(ArchScore::NOARCH));
        assert_eq!(pool.arch_score(ARCH_NOARCH), None);
        assert_eq!(pool.classify(ARCH_ALL), ArchColor::ALL);
    }

    #[test]
    fn color_match_separates_word_sizes() {
        let mut pool = Pool::new();
        pool.set_architecture(Some("x86_64"));
        let x86_64 = pool.intern("x86_64");
        let i686 = pool.intern("i686");

        assert!(!pool.color_match(x86_64, i686));
        assert!(pool.color_match(x86_64, ARCH_NOARCH));
        assert!(pool.color_match(i686, ARCH_NOARCH));
        assert!(pool.color_match(i686, i686));
    }

    #[test]
    fn dist_type_from_str() {
        assert_eq!("deb".parse::<DistType>(), Ok(DistType::Deb));
        assert_eq!("haiku".parse::<DistType>().map(DistType::noarch_id), Ok(ARCH_ANY));
        assert!(matches!("msi".parse::<DistType>(), Err(ConfigError::UnknownDistType(s)) if s == "msi"));
    }
}
