use chrono::{DateTime, Duration, TimeZone, Utc};
use vocab_core::{NewEntry, VocabEntry};
use vocab_store::VocabDb;

pub const WORDS: &[(&str, &str, &str)] = &[
    ("dog", "Hund", "chó"),
    ("hot dog", "Hotdog", "xúc xích"),
    ("cat", "Katze", "mèo"),
    ("water", "Wasser", "nước"),
    ("fire water", "Feuerwasser", "rượu"),
    ("the big red dog", "der große rote Hund", "con chó đỏ lớn"),
];

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// One entry per `WORDS` row, one minute apart
pub fn seeded_db() -> VocabDb {
    let db = VocabDb::open_in_memory().unwrap();
    for (i, (en, de, vi)) in WORDS.iter().enumerate() {
        db.insert_at(
            NewEntry::new(*en, *de, *vi),
            base_time() + Duration::minutes(i as i64),
        )
        .unwrap();
    }
    db
}

pub fn english(entries: &[VocabEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.english.as_str()).collect()
}
