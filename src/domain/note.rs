// src/domain/note.rs
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::DomainError;

/// Partial field bag used to construct a [`Note`].
///
/// Every field is optional. This is the single normalization point: server
/// JSON and form state both deserialize through it, so a `Note` can never
/// carry a missing `title`/`body` or an empty-string `keywords`/`reference`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFields {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub keywords: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NoteFields")]
pub struct Note {
    /// Server-assigned identifier; `None` until the note has been created
    /// remotely or loaded from an existing record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    pub keywords: Option<String>,
    pub reference: Option<String>,
}

impl From<NoteFields> for Note {
    fn from(fields: NoteFields) -> Self {
        Self {
            id: non_empty(fields.id),
            title: fields.title.unwrap_or_default(),
            body: fields.body.unwrap_or_default(),
            keywords: non_empty(fields.keywords),
            reference: non_empty(fields.reference),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Note {
    /// Create an empty, unsaved note.
    pub fn new() -> Self {
        NoteFields::default().into()
    }

    /// Whether this note exists server-side (has an id).
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Reset all content fields to their defaults. The id is untouched.
    pub fn clear(&mut self) {
        self.title = String::new();
        self.body = String::new();
        self.keywords = None;
        self.reference = None;
    }

    /// Record the server-assigned id after a successful create.
    ///
    /// The id is immutable once set: assigning over an existing id is an
    /// error, as is assigning an empty string.
    pub fn assign_id(&mut self, id: impl Into<String>) -> Result<(), DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::EmptyId);
        }
        if let Some(existing) = &self.id {
            return Err(DomainError::AlreadyPersisted(existing.clone()));
        }
        self.id = Some(id);
        Ok(())
    }

    /// The wire body for create/update requests: every field except `id`.
    ///
    /// `keywords` and `reference` serialize as explicit JSON null when unset.
    pub fn payload(&self) -> Value {
        json!({
            "title": self.title,
            "body": self.body,
            "keywords": self.keywords,
            "reference": self.reference,
        })
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
