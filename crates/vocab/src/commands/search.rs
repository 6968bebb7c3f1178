use super::print_json;
use serde::Serialize;
use vocab_core::{SearchConfig, VocabEntry};
use vocab_index::Scorer;
use vocab_store::VocabDb;

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    score: f64,
    #[serde(flatten)]
    entry: &'a VocabEntry,
}

fn rank<'a>(scorer: &Scorer, query: &str, entries: &'a [VocabEntry]) -> Vec<SearchHit<'a>> {
    scorer
        .rank(query, entries)
        .into_iter()
        .map(|result| SearchHit {
            score: result.score,
            entry: result.entry,
        })
        .collect()
}

pub fn run(db: &VocabDb, config: &SearchConfig, query: &str) -> anyhow::Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("query must not be empty");
    }

    let entries = db.all()?;
    let hits = rank(&Scorer::new(config.clone()), query, &entries);
    if hits.is_empty() {
        tracing::info!(query, "no matches");
    }
    print_json(&hits)
}
