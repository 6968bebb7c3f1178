use super::print_json;
use vocab_core::{EntryPatch, NewEntry, SortOrder};
use vocab_store::VocabDb;

pub fn run_add(db: &VocabDb, new: NewEntry) -> anyhow::Result<()> {
    let entry = db.insert(new)?;
    print_json(&entry)
}

pub fn run_get(db: &VocabDb, id: &str) -> anyhow::Result<()> {
    match db.get(id)? {
        Some(entry) => print_json(&entry),
        None => anyhow::bail!("word {} not found", id),
    }
}

pub fn run_list(db: &VocabDb, sort: &str) -> anyhow::Result<()> {
    let entries = db.list(SortOrder::parse(sort))?;
    print_json(&entries)
}

pub fn run_update(db: &VocabDb, id: &str, patch: EntryPatch) -> anyhow::Result<()> {
    if patch.is_empty() {
        anyhow::bail!("nothing to update; pass --english, --german or --vietnamese");
    }
    let entry = db.update(id, patch)?;
    print_json(&entry)
}

pub fn run_delete(db: &VocabDb, id: &str) -> anyhow::Result<()> {
    if !db.delete(id)? {
        anyhow::bail!("word {} not found", id);
    }
    print_json(&serde_json::json!({
        "message": "Word successfully deleted",
        "_id": id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_get() {
        let db = VocabDb::open_in_memory().unwrap();
        assert!(run_add(&db, NewEntry::new("dog", "Hund", "chó")).is_ok());
        let id = db.all().unwrap()[0].id.clone();
        assert!(run_get(&db, &id).is_ok());
        assert!(run_get(&db, "missing").is_err());
    }

    #[test]
    fn test_add_rejects_blank() {
        let db = VocabDb::open_in_memory().unwrap();
        let err = run_add(&db, NewEntry::new("dog", "", "chó")).unwrap_err();
        assert!(err.to_string().contains("German word is required"));
    }

    #[test]
    fn test_update_requires_a_field() {
        let db = VocabDb::open_in_memory().unwrap();
        let entry = db.insert(NewEntry::new("dog", "Hund", "chó")).unwrap();
        assert!(run_update(&db, &entry.id, EntryPatch::default()).is_err());

        let patch = EntryPatch {
            vietnamese: Some("con chó".to_string()),
            ..Default::default()
        };
        assert!(run_update(&db, &entry.id, patch).is_ok());
        assert_eq!(db.get(&entry.id).unwrap().unwrap().vietnamese, "con chó");
    }

    #[test]
    fn test_delete() {
        let db = VocabDb::open_in_memory().unwrap();
        let entry = db.insert(NewEntry::new("dog", "Hund", "chó")).unwrap();
        assert!(run_delete(&db, &entry.id).is_ok());
        assert!(run_delete(&db, &entry.id).is_err());
        assert!(run_list(&db, "old").is_ok());
    }
}
