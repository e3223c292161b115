//! Policy compiler.
//!
//! Walks the token stream from the lexer and assigns every named
//! architecture a frozen [`ArchScore`]. A running accumulator starts at
//! `(1, 1)`; before an architecture is scored for the first time the
//! accumulator takes one step according to the relation that introduced it
//! (`:` bumps the tier, `>` bumps the rank, `=` leaves it alone).
//!
//! ## Invariants
//!
//! - The noarch id always scores [`ArchScore::NOARCH`], whether or not the
//!   policy names it.
//! - First mention wins. A repeated architecture keeps its score and does
//!   not move the accumulator.
//! - The table always extends at least `TABLE_HEADROOM - 1` slots past the
//!   highest id assigned, and the slot at `last_arch` is always empty.

use super::lexer::{Lexer, Relation};
use super::stats::CompileStats;
use crate::{ArchScore, Id, StringPool};
use log::{debug, trace};
use std::time::Instant;

/// Slots allocated past the highest known id so that ids interned later
/// rarely force a regrow.
pub(crate) const TABLE_HEADROOM: usize = 256;

/// A compiled architecture policy.
#[derive(Debug, Clone)]
pub struct ArchPolicy {
    source: String,
    scores: Vec<Option<ArchScore>>,
    last_arch: usize,
    stats: CompileStats,
}

impl ArchPolicy {
    /// Score of `id`, or `None` if the policy does not permit it.
    pub fn score(&self, id: Id) -> Option<ArchScore> {
        self.scores.get(id.index()).copied().flatten()
    }

    /// Legacy packed score of `id`; `0` means not permitted.
    pub fn packed_score(&self, id: Id) -> u32 {
        self.score(id).map_or(0, ArchScore::packed)
    }

    /// Table extent. Ids at or past this index were never named by the policy.
    pub fn last_arch(&self) -> usize {
        self.last_arch
    }

    /// True if `id` lies inside the table extent.
    pub fn covers(&self, id: Id) -> bool {
        id.index() < self.last_arch
    }

    /// The policy text this table was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn stats(&self) -> &CompileStats {
        &self.stats
    }

    /// All permitted architectures, most preferred first.
    ///
    /// Equal scores are ordered by id, i.e. by first interning.
    pub fn ranked(&self) -> Vec<(Id, ArchScore)> {
        let mut ranked: Vec<(Id, ArchScore)> = self
            .scores
            .iter()
            .enumerate()
            .filter_map(|(index, score)| score.map(|s| (Id::from_index(index), s)))
            .collect();
        ranked.sort_by_key(|&(id, score)| (score, id));
        ranked
    }
}

/// Compile `policy` into a fresh table, interning every architecture it names.
///
/// `noarch` is the pool's architecture-independent id.
pub(crate) fn compile(strings: &mut StringPool, noarch: Id, policy: &str) -> ArchPolicy {
    let started = Instant::now();
    let mut stats = CompileStats::default();

    let mut last_arch = noarch.index() + TABLE_HEADROOM - 1;
    let mut scores: Vec<Option<ArchScore>> = vec![None; last_arch + 1];
    scores[noarch.index()] = Some(ArchScore::NOARCH);

    let mut score = ArchScore::FIRST;

    for segment in Lexer::new(policy) {
        if segment.text.is_empty() {
            stats.empty_tokens += 1;
            continue;
        }
        stats.tokens += 1;

        let id = strings.intern(segment.text);
        if id.index() >= last_arch {
            last_arch = id.index() + TABLE_HEADROOM - 1;
            scores.resize(last_arch + 1, None);
            stats.grows += 1;
            debug!("[arch_policy] grew table to {} slots for '{}' ({})", scores.len(), segment.text, id);
        }

        let slot = &mut scores[id.index()];
        if slot.is_some() {
            stats.duplicates += 1;
            trace!("[arch_policy] '{}' at byte {} already scored, skipped", segment.text, segment.start);
            continue;
        }

        match segment.relation {
            Relation::Tier => {
                score.tier += 1;
                stats.tier_steps += 1;
            }
            Relation::Preferred => {
                score.rank += 1;
                stats.rank_steps += 1;
            }
            Relation::Equivalent => {}
        }
        *slot = Some(score);
        trace!(
            "[arch_policy] {}{} -> tier={} rank={} (0x{:08x})",
            segment.relation,
            segment.text,
            score.tier,
            score.rank,
            score.packed()
        );
    }

    stats.elapsed = started.elapsed();
    debug!(
        "[arch_policy] compiled \"{}\": {} tokens, {} duplicates, {} empty, extent {}",
        policy, stats.tokens, stats.duplicates, stats.empty_tokens, last_arch
    );

    ArchPolicy { source: policy.to_string(), scores, last_arch, stats }
}
