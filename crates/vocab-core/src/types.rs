//! Core types for vocabulary entries

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language field of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    English,
    German,
    Vietnamese,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::English, Field::German, Field::Vietnamese];

    pub fn label(&self) -> &'static str {
        match self {
            Field::English => "English",
            Field::German => "German",
            Field::Vietnamese => "Vietnamese",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored vocabulary entry (wire-compatible with the original JSON records)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    #[serde(rename = "_id")]
    pub id: String,
    // Legacy records may lack a language; those score as empty text.
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub german: String,
    #[serde(default)]
    pub vietnamese: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl VocabEntry {
    /// Build an entry stamped with the current time
    pub fn new(
        id: impl Into<String>,
        english: impl Into<String>,
        german: impl Into<String>,
        vietnamese: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            english: english.into(),
            german: german.into(),
            vietnamese: vietnamese.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::English => &self.english,
            Field::German => &self.german,
            Field::Vietnamese => &self.vietnamese,
        }
    }
}

/// Create payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub german: String,
    #[serde(default)]
    pub vietnamese: String,
}

impl NewEntry {
    pub fn new(
        english: impl Into<String>,
        german: impl Into<String>,
        vietnamese: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            german: german.into(),
            vietnamese: vietnamese.into(),
        }
    }

    /// Trim every field; fails on the first empty one
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            english: required(Field::English, &self.english)?,
            german: required(Field::German, &self.german)?,
            vietnamese: required(Field::Vietnamese, &self.vietnamese)?,
        })
    }
}

/// Partial update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub german: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vietnamese: Option<String>,
}

impl EntryPatch {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            english: optional(Field::English, self.english)?,
            german: optional(Field::German, self.german)?,
            vietnamese: optional(Field::Vietnamese, self.vietnamese)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.english.is_none() && self.german.is_none() && self.vietnamese.is_none()
    }

    pub fn apply(&self, entry: &mut VocabEntry) {
        if let Some(english) = &self.english {
            entry.english = english.clone();
        }
        if let Some(german) = &self.german {
            entry.german = german.clone();
        }
        if let Some(vietnamese) = &self.vietnamese {
            entry.vietnamese = vietnamese.clone();
        }
    }
}

fn required(field: Field, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(field: Field, value: Option<String>) -> Result<Option<String>, ValidationError> {
    value.map(|v| required(field, &v)).transpose()
}

/// Listing order by update timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently updated first
    #[default]
    Recent,
    /// Oldest first
    Old,
}

impl SortOrder {
    /// Unrecognized values fall back to `Recent`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "old" | "old-to-new" | "old_to_new" => SortOrder::Old,
            _ => SortOrder::Recent,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Old)
    }
}
