//! Sparse term-frequency vectors

use std::collections::HashMap;

/// Token -> occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: HashMap<String, usize>,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    pub fn magnitude(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| (c * c) as f64)
            .sum::<f64>()
            .sqrt()
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        // Keys missing from either side contribute zero
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .map(|(token, count)| (count * large.get(token)) as f64)
            .sum()
    }
}

pub fn build_vector<S: AsRef<str>>(tokens: &[S]) -> TermVector {
    let mut vector = TermVector::new();
    for token in tokens {
        vector.add(token.as_ref());
    }
    vector
}

/// Cosine of the angle between two count vectors; 0 when either is empty
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.magnitude();
    let norm_b = b.magnitude();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}
