//! Compile statistics.
//!
//! Cheap counters gathered while a policy is compiled. They never influence
//! the resulting table; they exist for the CLI report and for debugging odd
//! policies (why did `i686` land in tier 3?).

use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompileStats {
    /// Non-empty tokens seen, duplicates included.
    pub tokens: usize,
    /// Zero-length tokens from leading or doubled separators.
    pub empty_tokens: usize,
    /// Tokens naming an architecture that already had a score.
    pub duplicates: usize,
    /// Times the table had to be regrown past its headroom.
    pub grows: usize,
    /// Tier boundaries crossed (`:` applied).
    pub tier_steps: usize,
    /// Rank steps taken (`>` applied).
    pub rank_steps: usize,
    pub elapsed: Duration,
}
