use notewire::application::NoteService;
use notewire::domain::{Note, NoteFields};
use notewire::util::testing::{MockTransport, MockTransportBuilder};

/// Well-known values used across the integration tests
#[allow(dead_code)]
pub mod fixtures {
    pub const TOKEN: &str = "test-token";
    pub const NOTE_ID: &str = "abc";
}

/// A note as it comes back from the server
#[allow(dead_code)]
pub fn saved_note(id: &str) -> Note {
    Note::from(NoteFields {
        id: Some(id.to_string()),
        title: Some("Groceries".to_string()),
        body: Some("milk, eggs".to_string()),
        keywords: Some("shopping".to_string()),
        reference: None,
    })
}

/// A freshly drafted note that has never been persisted
#[allow(dead_code)]
pub fn draft_note(body: &str) -> Note {
    Note::from(NoteFields {
        body: Some(body.to_string()),
        ..Default::default()
    })
}

/// Note service over a scripted mock transport
#[allow(dead_code)]
pub fn note_service(builder: MockTransportBuilder) -> NoteService<MockTransport> {
    NoteService::new(builder.build())
}
