//! The search engine: snapshot ownership, three-tier search, suggestions,
//! trending keywords, and recent-search history.
//!
//! All query paths take `&self`; the only mutable state is the analytics
//! block behind a `parking_lot::Mutex`, locked briefly inside `search` and
//! the analytics readers. A shared `&SearchEngine` can therefore serve
//! concurrent callers without lost updates. The candidate snapshot itself is
//! immutable for the engine's lifetime; `reseed` replaces it wholesale.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::models::ProfileCard;
use crate::query;
use crate::ranking;

/// How many top-ranked cards an empty query lists.
const EMPTY_QUERY_LIMIT: usize = 10;
/// How many top-ranked cards the last-resort fallback returns.
const FALLBACK_LIMIT: usize = 5;
/// Recent-search history depth.
const RECENT_LIMIT: usize = 10;
/// Maximum trending keywords returned.
const TRENDING_LIMIT: usize = 5;
/// Maximum suggestions returned.
const SUGGESTION_LIMIT: usize = 5;
/// Partials shorter than this produce no suggestions.
const MIN_SUGGESTION_PREFIX: usize = 2;

/// One entry of the recent-search history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// The raw query string as the caller issued it — no normalization.
    pub query: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
struct TrendingEntry {
    count: u64,
    /// Insertion sequence; equal counts surface in first-seen order.
    first_seen: u64,
}

#[derive(Debug, Default)]
struct EngineState {
    /// Most-recent-first, truncated to `RECENT_LIMIT`.
    recent: Vec<SearchRecord>,
    /// Keyed by the exact raw query string, so "Design" and "design" are
    /// tracked as distinct terms even though scoring lowercases.
    trending: HashMap<String, TrendingEntry>,
    next_seq: u64,
}

/// In-process search over a snapshot of candidate profiles.
///
/// Search runs three tiers: weighted field scoring, then fuzzy matching if
/// nothing scored, then the editorial top-ranked default — degrading
/// specificity instead of showing a hard "no results" state.
pub struct SearchEngine {
    profiles: Vec<ProfileCard>,
    state: Mutex<EngineState>,
}

impl SearchEngine {
    /// Build an engine over a fully-loaded candidate snapshot. The sequence
    /// is stored as-is; no validation beyond tolerating missing fields.
    pub fn new(profiles: Vec<ProfileCard>) -> Self {
        Self {
            profiles,
            state: Mutex::new(EngineState::default()),
        }
    }

    /// The candidate snapshot, in original order.
    pub fn profiles(&self) -> &[ProfileCard] {
        &self.profiles
    }

    /// Replace the candidate snapshot. Analytics counters survive; the
    /// engine never refreshes candidates on its own.
    pub fn reseed(&mut self, profiles: Vec<ProfileCard>) {
        self.profiles = profiles;
    }

    /// Run a query through the three-tier ranking chain.
    ///
    /// An empty query lists the first `EMPTY_QUERY_LIMIT` top-ranked cards
    /// in original order. Any other query is recorded for analytics first
    /// (even if it tokenizes to nothing), then ranked. Ties keep the
    /// original candidate order — the sort is stable, so repeated identical
    /// calls return identical orderings.
    pub fn search(&self, query: &str) -> Vec<ProfileCard> {
        if query.is_empty() {
            return self.top_ranked(EMPTY_QUERY_LIMIT);
        }

        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        self.track_search(query);
        let tokens = query::tokenize(query);
        let results = self.ranked(&tokens);

        #[cfg(feature = "perf-log")]
        eprintln!(
            "[perf] search tokens={} candidates={} results={} took={:.2}ms",
            tokens.len(),
            self.profiles.len(),
            results.len(),
            t0.elapsed().as_secs_f64() * 1000.0,
        );

        results
    }

    fn ranked(&self, tokens: &[String]) -> Vec<ProfileCard> {
        if !tokens.is_empty() {
            let weighted = self.score_candidates(|p| ranking::weighted_score(p, tokens));
            if !weighted.is_empty() {
                return weighted;
            }

            let fuzzy = self.score_candidates(|p| ranking::fuzzy_score(p, tokens));
            if !fuzzy.is_empty() {
                return fuzzy;
            }
        }

        self.top_ranked(FALLBACK_LIMIT)
    }

    /// Score every candidate, keep positive scores, stable-sort descending.
    fn score_candidates(&self, score: impl Fn(&ProfileCard) -> u32) -> Vec<ProfileCard> {
        let mut scored: Vec<(u32, &ProfileCard)> = self
            .profiles
            .iter()
            .map(|p| (score(p), p))
            .filter(|(s, _)| *s > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, p)| p.clone()).collect()
    }

    fn top_ranked(&self, limit: usize) -> Vec<ProfileCard> {
        self.profiles
            .iter()
            .filter(|p| p.is_top_ranked)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Case-insensitive prefix suggestions across display name, username and
    /// title, deduplicated in first-seen order. Pure read; never touches the
    /// analytics state.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        if partial.chars().count() < MIN_SUGGESTION_PREFIX {
            return Vec::new();
        }
        let prefix = partial.to_lowercase();

        let mut out: Vec<String> = Vec::new();
        for profile in &self.profiles {
            let mut push = |candidate: &str| {
                if candidate.to_lowercase().starts_with(&prefix)
                    && !out.iter().any(|s| s == candidate)
                {
                    out.push(candidate.to_string());
                }
            };
            push(&profile.display_name);
            push(&profile.username);
            if let Some(title) = &profile.title {
                push(title);
            }
        }

        out.truncate(SUGGESTION_LIMIT);
        out
    }

    /// The recent-search history, most recent first (at most 10 entries).
    pub fn recent_searches(&self) -> Vec<SearchRecord> {
        self.state.lock().recent.clone()
    }

    /// Up to 5 raw query strings, highest occurrence count first. Equal
    /// counts are ordered first-inserted-first, so the output is
    /// deterministic.
    pub fn trending(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut entries: Vec<(&String, &TrendingEntry)> = state.trending.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .take(TRENDING_LIMIT)
            .map(|(query, _)| query.clone())
            .collect()
    }

    fn track_search(&self, query: &str) {
        let state = &mut *self.state.lock();

        state.recent.insert(
            0,
            SearchRecord {
                query: query.to_string(),
                at: Utc::now(),
            },
        );
        state.recent.truncate(RECENT_LIMIT);

        match state.trending.entry(query.to_string()) {
            Entry::Occupied(mut occupied) => occupied.get_mut().count += 1,
            Entry::Vacant(vacant) => {
                vacant.insert(TrendingEntry {
                    count: 1,
                    first_seen: state.next_seq,
                });
                state.next_seq += 1;
            }
        }
    }
}
