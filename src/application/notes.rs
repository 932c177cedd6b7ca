// src/application/notes.rs
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::transport::{bearer_headers, Response, TransportClient};
use crate::constants::{NOTES_PATH, SEARCH_PARAM};
use crate::domain::{DomainError, Note};

/// REST binding of the notes collection.
///
/// Translates [`Note`] lifecycle operations into calls against the remote
/// collection endpoint. Preconditions are checked locally before any request
/// is built; transport failures are returned to the caller unchanged.
pub struct NoteService<T: TransportClient> {
    transport: T,
    collection: String,
}

impl<T: TransportClient> NoteService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_collection(transport, NOTES_PATH)
    }

    /// Bind to a non-default collection path, e.g. `/` on older deployments.
    pub fn with_collection(transport: T, collection: impl Into<String>) -> Self {
        Self {
            transport,
            collection: collection.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create the note server-side.
    ///
    /// The note must not have an id yet. The server assigns one and returns
    /// it in the response body; recording it on the entity is the caller's
    /// job (see [`Note::assign_id`]).
    #[instrument(level = "debug", skip(self, token))]
    pub fn create(&mut self, note: &Note, token: Option<&str>) -> Result<Response, DomainError> {
        if let Some(id) = &note.id {
            return Err(DomainError::AlreadyPersisted(id.clone()));
        }
        debug!(path = %self.collection, "Creating note");
        let response = self
            .transport
            .post(&self.collection, &note.payload(), &bearer_headers(token))?;
        Ok(response)
    }

    /// Fetch the collection, optionally filtered by a server-side search term.
    #[instrument(level = "debug", skip(self, token))]
    pub fn list(&mut self, token: Option<&str>, search: Option<&str>) -> Result<Response, DomainError> {
        let params: Vec<(String, String)> = search
            .map(|term| vec![(SEARCH_PARAM.to_string(), term.to_string())])
            .unwrap_or_default();
        let response = self
            .transport
            .get(&self.collection, &bearer_headers(token), &params)?;
        Ok(response)
    }

    /// Replace the stored record with the note's current fields.
    pub fn update(&mut self, note: &Note, token: Option<&str>) -> Result<Response, DomainError> {
        self.update_fields(note, note.payload(), token)
    }

    /// Patch the stored record with an explicit field set.
    ///
    /// An `id` key in `fields` is stripped: the id travels in the path only.
    #[instrument(level = "debug", skip(self, fields, token))]
    pub fn update_fields(
        &mut self,
        note: &Note,
        mut fields: Value,
        token: Option<&str>,
    ) -> Result<Response, DomainError> {
        let path = self.item_path(require_id(note, "update")?);
        if let Some(map) = fields.as_object_mut() {
            map.remove("id");
        }
        debug!(%path, "Updating note");
        let response = self
            .transport
            .patch(&path, &fields, &bearer_headers(token))?;
        Ok(response)
    }

    /// Delete the stored record. The client-side entity becomes a stale
    /// handle afterwards; this is not enforced beyond the id precondition.
    #[instrument(level = "debug", skip(self, token))]
    pub fn destroy(&mut self, note: &Note, token: Option<&str>) -> Result<Response, DomainError> {
        let path = self.item_path(require_id(note, "destroy")?);
        debug!(%path, "Destroying note");
        let response = self.transport.delete(&path, &bearer_headers(token))?;
        Ok(response)
    }

    /// Path of a single record, always with exactly one separating slash.
    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection.trim_end_matches('/'), id)
    }
}

fn require_id<'a>(note: &'a Note, operation: &'static str) -> Result<&'a str, DomainError> {
    match note.id.as_deref() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(DomainError::MissingId(operation)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteFields;
    use crate::util::testing::{Method, MockTransport};

    fn saved_note(id: &str) -> Note {
        Note::from(NoteFields {
            id: Some(id.to_string()),
            body: Some("content".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn given_unsaved_note_when_creating_then_posts_collection_path() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);
        let note = Note::from(NoteFields {
            body: Some("x".to_string()),
            ..Default::default()
        });

        let result = service.create(&note, Some("tok"));

        assert!(result.is_ok());
        let requests = &service.transport().requests;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/note");
        assert_eq!(requests[0].header("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn given_saved_note_when_creating_then_fails_without_network_call() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);
        let note = saved_note("abc");

        let result = service.create(&note, Some("tok"));

        assert!(matches!(result, Err(DomainError::AlreadyPersisted(id)) if id == "abc"));
        assert!(service.transport().requests.is_empty());
    }

    #[test]
    fn given_unsaved_note_when_updating_then_fails_without_network_call() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);
        let note = Note::new();

        let result = service.update(&note, Some("tok"));

        assert!(matches!(result, Err(DomainError::MissingId("update"))));
        assert!(service.transport().requests.is_empty());
    }

    #[test]
    fn given_saved_note_when_updating_then_patches_item_path_with_single_slash() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);
        let note = saved_note("abc");

        service.update(&note, Some("tok")).unwrap();

        let request = &service.transport().requests[0];
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.path, "/note/abc");
        assert_eq!(request.path.matches("/abc").count(), 1);
    }

    #[test]
    fn given_root_collection_when_updating_then_path_is_still_well_formed() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::with_collection(mock, "/");
        let note = saved_note("abc");

        service.update(&note, None).unwrap();

        assert_eq!(service.transport().requests[0].path, "/abc");
    }

    #[test]
    fn given_override_fields_with_id_when_updating_then_id_is_stripped_from_body() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);
        let note = saved_note("abc");
        let fields = serde_json::json!({ "id": "abc", "body": "patched" });

        service.update_fields(&note, fields, Some("tok")).unwrap();

        let body = service.transport().requests[0].body.clone().unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["body"], "patched");
    }

    #[test]
    fn given_unsaved_note_when_destroying_then_fails_without_network_call() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);
        let note = Note::new();

        let result = service.destroy(&note, Some("tok"));

        assert!(matches!(result, Err(DomainError::MissingId("destroy"))));
        assert!(service.transport().requests.is_empty());
    }

    #[test]
    fn given_no_token_when_listing_then_authorization_header_is_omitted() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);

        service.list(None, None).unwrap();

        let request = &service.transport().requests[0];
        assert_eq!(request.method, Method::Get);
        assert!(request.header("Authorization").is_none());
        assert!(request.params.is_empty());
    }

    #[test]
    fn given_search_term_when_listing_then_search_param_is_attached() {
        let mock = MockTransport::builder().build();
        let mut service = NoteService::new(mock);

        service.list(Some("tok"), Some("gardening")).unwrap();

        let request = &service.transport().requests[0];
        assert_eq!(
            request.params,
            vec![("search".to_string(), "gardening".to_string())]
        );
    }
}
