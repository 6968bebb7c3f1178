use crate::error::{Result, StoreError};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use vocab_core::{EntryPatch, NewEntry, SortOrder, VocabEntry};

const COLUMNS: &str = "id, english, german, vietnamese, created_at, updated_at";

pub struct VocabDb {
    conn: Connection,
}

impl VocabDb {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(db_path)?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS vocab (
                id TEXT PRIMARY KEY,
                english TEXT NOT NULL,
                german TEXT NOT NULL,
                vietnamese TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_updated_at ON vocab(updated_at);
            ",
        )?;
        Ok(())
    }

    pub fn insert(&self, new: NewEntry) -> Result<VocabEntry> {
        self.insert_at(new, Utc::now())
    }

    /// Insert with an explicit creation time
    pub fn insert_at(&self, new: NewEntry, at: DateTime<Utc>) -> Result<VocabEntry> {
        let new = new.validate()?;
        let at = to_storage_precision(at);
        let entry = VocabEntry {
            id: uuid::Uuid::new_v4().to_string(),
            english: new.english,
            german: new.german,
            vietnamese: new.vietnamese,
            created_at: at,
            updated_at: at,
        };

        self.conn.execute(
            "INSERT INTO vocab (id, english, german, vietnamese, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.id,
                entry.english,
                entry.german,
                entry.vietnamese,
                format_timestamp(&entry.created_at),
                format_timestamp(&entry.updated_at),
            ],
        )?;

        tracing::debug!(id = %entry.id, english = %entry.english, "inserted word");
        Ok(entry)
    }

    pub fn get(&self, id: &str) -> Result<Option<VocabEntry>> {
        let raw = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM vocab WHERE id = ?1"),
                params![id],
                RawEntry::from_row,
            )
            .optional()?;
        raw.map(RawEntry::into_entry).transpose()
    }

    /// All entries ordered by update time; ties fall back to insertion order
    pub fn list(&self, order: SortOrder) -> Result<Vec<VocabEntry>> {
        let direction = if order.is_ascending() { "ASC" } else { "DESC" };
        self.query_all(&format!(
            "SELECT {COLUMNS} FROM vocab ORDER BY updated_at {direction}, rowid {direction}"
        ))
    }

    /// All entries in insertion order
    pub fn all(&self) -> Result<Vec<VocabEntry>> {
        self.query_all(&format!("SELECT {COLUMNS} FROM vocab ORDER BY rowid"))
    }

    pub fn update(&self, id: &str, patch: EntryPatch) -> Result<VocabEntry> {
        self.update_at(id, patch, Utc::now())
    }

    /// Update with an explicit modification time
    pub fn update_at(&self, id: &str, patch: EntryPatch, at: DateTime<Utc>) -> Result<VocabEntry> {
        let patch = patch.validate()?;
        let mut entry = self
            .get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        patch.apply(&mut entry);
        entry.updated_at = to_storage_precision(at);

        self.conn.execute(
            "UPDATE vocab SET english = ?2, german = ?3, vietnamese = ?4, updated_at = ?5
             WHERE id = ?1",
            params![
                entry.id,
                entry.english,
                entry.german,
                entry.vietnamese,
                format_timestamp(&entry.updated_at),
            ],
        )?;

        tracing::debug!(id = %entry.id, "updated word");
        Ok(entry)
    }

    /// Returns whether a row was removed
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM vocab WHERE id = ?1", params![id])?;
        tracing::debug!(id, removed, "deleted word");
        Ok(removed > 0)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM vocab", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn query_all(&self, sql: &str) -> Result<Vec<VocabEntry>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], RawEntry::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.into_entry()?);
        }
        Ok(entries)
    }
}

/// Column values before timestamp parsing
struct RawEntry {
    id: String,
    english: String,
    german: String,
    vietnamese: String,
    created_at: String,
    updated_at: String,
}

impl RawEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            english: row.get(1)?,
            german: row.get(2)?,
            vietnamese: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn into_entry(self) -> Result<VocabEntry> {
        Ok(VocabEntry {
            id: self.id,
            english: self.english,
            german: self.german,
            vietnamese: self.vietnamese,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

// Stored timestamps keep microseconds; returned entries must match them
fn to_storage_precision(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(6)
}

// Fixed-width UTC form so that text order equals time order
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use vocab_core::{Field, ValidationError};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn seeded_db() -> (VocabDb, Vec<VocabEntry>) {
        let db = VocabDb::open_in_memory().unwrap();
        let words = [
            ("dog", "Hund", "chó"),
            ("cat", "Katze", "mèo"),
            ("bird", "Vogel", "chim"),
        ];
        let entries = words
            .iter()
            .enumerate()
            .map(|(i, (en, de, vi))| {
                db.insert_at(
                    NewEntry::new(*en, *de, *vi),
                    base_time() + Duration::minutes(i as i64),
                )
                .unwrap()
            })
            .collect();
        (db, entries)
    }

    fn english(entries: &[VocabEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.english.as_str()).collect()
    }

    #[test]
    fn test_insert_and_get() {
        let db = VocabDb::open_in_memory().unwrap();
        let entry = db.insert(NewEntry::new(" dog ", "Hund", "chó")).unwrap();
        assert_eq!(entry.english, "dog");
        assert_eq!(entry.created_at, entry.updated_at);

        let fetched = db.get(&entry.id).unwrap().unwrap();
        assert_eq!(fetched, entry);
        assert!(db.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_insert_rejects_blank_field() {
        let db = VocabDb::open_in_memory().unwrap();
        let err = db.insert(NewEntry::new("dog", "Hund", "  ")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Invalid(ValidationError::EmptyField(Field::Vietnamese))
        ));
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_list_orders() {
        let (db, _) = seeded_db();
        let recent = db.list(SortOrder::Recent).unwrap();
        assert_eq!(english(&recent), vec!["bird", "cat", "dog"]);
        let old = db.list(SortOrder::Old).unwrap();
        assert_eq!(english(&old), vec!["dog", "cat", "bird"]);
        assert_eq!(english(&db.all().unwrap()), vec!["dog", "cat", "bird"]);
    }

    #[test]
    fn test_update_refreshes_timestamp_and_order() {
        let (db, entries) = seeded_db();
        let dog = &entries[0];

        let patch = EntryPatch {
            english: Some("hound".to_string()),
            ..Default::default()
        };
        let updated = db
            .update_at(&dog.id, patch, base_time() + Duration::hours(1))
            .unwrap();
        assert_eq!(updated.english, "hound");
        assert_eq!(updated.german, "Hund");
        assert_eq!(updated.created_at, dog.created_at);
        assert!(updated.updated_at > dog.updated_at);

        let recent = db.list(SortOrder::Recent).unwrap();
        assert_eq!(english(&recent), vec!["hound", "bird", "cat"]);
        assert_eq!(db.get(&dog.id).unwrap().unwrap(), updated);
    }

    #[test]
    fn test_update_missing_and_invalid() {
        let (db, entries) = seeded_db();
        let err = db.update("missing", EntryPatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));

        let blank = EntryPatch {
            german: Some("".to_string()),
            ..Default::default()
        };
        let err = db.update(&entries[0].id, blank).unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert_eq!(db.get(&entries[0].id).unwrap().unwrap().german, "Hund");
    }

    #[test]
    fn test_delete() {
        let (db, entries) = seeded_db();
        assert!(db.delete(&entries[1].id).unwrap());
        assert!(!db.delete(&entries[1].id).unwrap());
        assert_eq!(db.count().unwrap(), 2);
        assert!(db.get(&entries[1].id).unwrap().is_none());
    }

    #[test]
    fn test_persists_across_connections() {
        let temp = tempfile::TempDir::new().unwrap();
        let db_path = temp.path().join("nested").join("vocab.db");

        let id = {
            let db = VocabDb::open(&db_path).unwrap();
            db.insert(NewEntry::new("dog", "Hund", "chó")).unwrap().id
        };

        let db = VocabDb::open(&db_path).unwrap();
        let entry = db.get(&id).unwrap().unwrap();
        assert_eq!(entry.vietnamese, "chó");
    }

    #[test]
    fn test_returned_entries_match_stored() {
        let db = VocabDb::open_in_memory().unwrap();
        let at = base_time() + Duration::nanoseconds(123_456_789);
        let entry = db.insert_at(NewEntry::new("dog", "Hund", "chó"), at).unwrap();
        assert_eq!(entry.created_at, base_time() + Duration::microseconds(123_456));
        assert_eq!(db.get(&entry.id).unwrap().unwrap(), entry);

        let later = at + Duration::nanoseconds(999);
        let updated = db
            .update_at(&entry.id, EntryPatch::default(), later)
            .unwrap();
        assert_eq!(db.get(&entry.id).unwrap().unwrap(), updated);

        for _ in 0..20 {
            let entry = db.insert(NewEntry::new("cat", "Katze", "mèo")).unwrap();
            assert_eq!(db.get(&entry.id).unwrap().unwrap(), entry);
        }
    }

    #[test]
    fn test_timestamp_format_sorts_lexically() {
        let early = format_timestamp(&base_time());
        let late = format_timestamp(&(base_time() + Duration::microseconds(1)));
        assert!(early < late);
        assert_eq!(parse_timestamp(&early).unwrap(), base_time());
    }
}
