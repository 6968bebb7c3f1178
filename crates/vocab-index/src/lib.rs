//! Text normalization and hybrid cosine/containment ranking

mod cache;
mod normalize;
mod scorer;
mod vector;

pub use cache::VectorCache;
pub use normalize::{normalize, normalize_opt, tokenize};
pub use scorer::{search, EntryVector, QueryVector, ScoredResult, Scorer};
pub use vector::{build_vector, cosine_similarity, TermVector};
