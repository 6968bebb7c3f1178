//! Hybrid ranking: bag-of-words cosine plus whole-query containment

use crate::cache::VectorCache;
use crate::normalize::normalize;
use crate::vector::{cosine_similarity, TermVector};
use vocab_core::{Field, SearchConfig, VocabEntry};

/// A prepared query
#[derive(Debug, Clone)]
pub struct QueryVector {
    normalized: String,
    vector: TermVector,
}

impl QueryVector {
    /// Returns `None` when the query is blank after trimming.
    ///
    /// A query with no letters still scores: its vector is empty, so only
    /// containment of the normalized form can match.
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = normalize(trimmed);
        let vector = vector_of(&normalized);
        Some(Self { normalized, vector })
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn vector(&self) -> &TermVector {
        &self.vector
    }
}

/// An entry's combined fields, normalized once and vectorized
#[derive(Debug, Clone, PartialEq)]
pub struct EntryVector {
    normalized: String,
    vector: TermVector,
}

impl EntryVector {
    pub fn from_entry(entry: &VocabEntry, config: &SearchConfig) -> Self {
        Self::build(entry, &config.fields, &config.separator)
    }

    pub(crate) fn build(entry: &VocabEntry, fields: &[Field], separator: &str) -> Self {
        let combined = fields
            .iter()
            .map(|&field| entry.field(field))
            .collect::<Vec<_>>()
            .join(separator);
        Self::from_text(&combined)
    }

    pub fn from_text(text: &str) -> Self {
        let normalized = normalize(text);
        let vector = vector_of(&normalized);
        Self { normalized, vector }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn vector(&self) -> &TermVector {
        &self.vector
    }
}

// Input is already normalized; splitting it is equivalent to `tokenize`.
fn vector_of(normalized: &str) -> TermVector {
    let mut vector = TermVector::new();
    for token in normalized.split_whitespace() {
        vector.add(token);
    }
    vector
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredResult<'a> {
    pub entry: &'a VocabEntry,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: SearchConfig,
}

impl Scorer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// max(cosine, containment), in [0, 1]
    pub fn score(&self, query: &QueryVector, entry: &EntryVector) -> f64 {
        let similarity = cosine_similarity(&query.vector, &entry.vector);
        let contains = if entry.normalized.contains(&query.normalized) {
            1.0
        } else {
            0.0
        };
        similarity.max(contains)
    }

    /// Score every entry and keep those above `min_score`, best first.
    ///
    /// The sort is stable: entries with equal scores keep their input order.
    pub fn rank<'a>(&self, query: &str, entries: &'a [VocabEntry]) -> Vec<ScoredResult<'a>> {
        let Some(query) = QueryVector::new(query) else {
            return Vec::new();
        };

        let scored = entries.iter().map(|entry| ScoredResult {
            entry,
            score: self.score(&query, &EntryVector::from_entry(entry, &self.config)),
        });
        self.collect_ranked(scored, entries.len())
    }

    /// Same ranking as [`Scorer::rank`], reusing vectors held in `cache`
    pub fn rank_cached<'a>(
        &self,
        query: &str,
        entries: &'a [VocabEntry],
        cache: &mut VectorCache,
    ) -> Vec<ScoredResult<'a>> {
        let Some(query) = QueryVector::new(query) else {
            return Vec::new();
        };

        if !cache.matches(&self.config) {
            cache.reconfigure(&self.config);
        }

        let scored = entries.iter().map(|entry| ScoredResult {
            entry,
            score: self.score(&query, cache.get_or_build(entry)),
        });
        self.collect_ranked(scored, entries.len())
    }

    pub fn search(&self, query: &str, entries: &[VocabEntry]) -> Vec<VocabEntry> {
        self.rank(query, entries)
            .into_iter()
            .map(|result| result.entry.clone())
            .collect()
    }

    fn collect_ranked<'a>(
        &self,
        scored: impl Iterator<Item = ScoredResult<'a>>,
        candidates: usize,
    ) -> Vec<ScoredResult<'a>> {
        let mut results: Vec<ScoredResult<'a>> = scored
            .filter(|result| result.score > self.config.min_score)
            .collect();
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(candidates, matches = results.len(), "ranked entries");
        results
    }
}

/// Rank `entries` against `query` with the default configuration
pub fn search(query: &str, entries: &[VocabEntry]) -> Vec<VocabEntry> {
    Scorer::default().search(query, entries)
}
