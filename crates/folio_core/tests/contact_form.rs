use folio_core::{
    ContactField, ContactForm, ContactFormError, ContactRelay, ContactSubmission, RelayError,
    RelayResult,
};

/// Relay that records deliveries and can be told to fail.
#[derive(Default)]
struct RecordingRelay {
    delivered: Vec<ContactSubmission>,
    fail_with: Option<String>,
}

impl ContactRelay for RecordingRelay {
    fn deliver(&mut self, submission: &ContactSubmission) -> RelayResult<()> {
        if let Some(details) = &self.fail_with {
            return Err(RelayError::Unavailable(details.clone()));
        }
        self.delivered.push(submission.clone());
        Ok(())
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set(ContactField::Name, "Ada Lovelace");
    form.set(ContactField::Email, "ada@example.com");
    form.set(ContactField::Message, "Hello there");
    form
}

#[test]
fn empty_email_blocks_submission_and_keeps_other_fields() {
    let mut form = filled_form();
    form.set(ContactField::Email, "");
    let mut relay = RecordingRelay::default();

    let err = form.submit(&mut relay).unwrap_err();

    assert_eq!(err, ContactFormError::MissingField(ContactField::Email));
    assert!(relay.delivered.is_empty());
    assert_eq!(form.name, "Ada Lovelace");
    assert_eq!(form.message, "Hello there");
}

#[test]
fn whitespace_only_message_counts_as_missing() {
    let mut form = filled_form();
    form.set(ContactField::Message, "   \n");
    let mut relay = RecordingRelay::default();

    let err = form.submit(&mut relay).unwrap_err();
    assert_eq!(err, ContactFormError::MissingField(ContactField::Message));
    assert!(relay.delivered.is_empty());
}

#[test]
fn malformed_email_is_rejected_before_delivery() {
    let mut form = filled_form();
    form.set(ContactField::Email, "ada.example.com");
    let mut relay = RecordingRelay::default();

    assert_eq!(
        form.submit(&mut relay).unwrap_err(),
        ContactFormError::InvalidEmail
    );
    assert!(relay.delivered.is_empty());
    assert_eq!(form.email, "ada.example.com");
}

#[test]
fn successful_submit_delivers_once_and_clears_form() {
    let mut form = filled_form();
    let mut relay = RecordingRelay::default();

    let receipt = form.submit(&mut relay).unwrap();

    assert_eq!(relay.delivered.len(), 1);
    assert_eq!(relay.delivered[0].submission_id, receipt.submission_id);
    assert_eq!(relay.delivered[0].email, "ada@example.com");
    assert!(form.is_empty());
}

#[test]
fn relay_failure_keeps_fields() {
    let mut form = filled_form();
    let mut relay = RecordingRelay {
        fail_with: Some("smtp timeout".to_string()),
        ..RecordingRelay::default()
    };

    let err = form.submit(&mut relay).unwrap_err();

    assert_eq!(
        err,
        ContactFormError::Relay(RelayError::Unavailable("smtp timeout".to_string()))
    );
    assert_eq!(form, filled_form());
}

#[test]
fn field_names_follow_input_name_attributes() {
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        assert_eq!(ContactField::parse(field.as_str()), Some(field));
    }
    assert_eq!(ContactField::parse("phone"), None);
}
