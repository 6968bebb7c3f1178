//! Precomputed entry vectors keyed by entry id

use crate::scorer::EntryVector;
use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use vocab_core::{Field, SearchConfig, VocabEntry};

#[derive(Debug, Clone)]
struct CachedVector {
    updated_at: DateTime<Utc>,
    vector: EntryVector,
}

/// Entry vectors reused across searches.
///
/// A cached vector is only served while the entry's `updated_at` matches the
/// one it was built from, so stale snapshots are rebuilt on access even if
/// nobody called [`VectorCache::invalidate`].
#[derive(Debug, Clone)]
pub struct VectorCache {
    fields: Vec<Field>,
    separator: String,
    vectors: HashMap<String, CachedVector>,
}

impl VectorCache {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            fields: config.fields.clone(),
            separator: config.separator.clone(),
            vectors: HashMap::new(),
        }
    }

    pub fn get_or_build(&mut self, entry: &VocabEntry) -> &EntryVector {
        let fields = &self.fields;
        let separator = &self.separator;
        let build = || CachedVector {
            updated_at: entry.updated_at,
            vector: EntryVector::build(entry, fields, separator),
        };

        match self.vectors.entry(entry.id.clone()) {
            Entry::Occupied(mut slot) => {
                if slot.get().updated_at != entry.updated_at {
                    slot.insert(build());
                }
                &slot.into_mut().vector
            }
            Entry::Vacant(slot) => &slot.insert(build()).vector,
        }
    }

    pub fn invalidate(&mut self, id: &str) -> bool {
        self.vectors.remove(id).is_some()
    }

    /// Drop every id not in `ids`
    pub fn retain_ids<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<&str> = ids.into_iter().collect();
        self.vectors.retain(|id, _| keep.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.vectors.clear();
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub(crate) fn matches(&self, config: &SearchConfig) -> bool {
        self.fields == config.fields && self.separator == config.separator
    }

    pub(crate) fn reconfigure(&mut self, config: &SearchConfig) {
        self.fields = config.fields.clone();
        self.separator = config.separator.clone();
        self.vectors.clear();
    }
}
