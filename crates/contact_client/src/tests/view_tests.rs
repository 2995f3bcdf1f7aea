use super::*;

#[test]
fn idle_form_is_interactive() {
    let view = ContactFormView::new(SubmissionStatus::Idle, None, &FormSchema::canonical());
    assert!(!view.inputs_disabled);
    assert!(!view.submit_disabled);
    assert_eq!(view.button_label, "Send Message");
    assert_eq!(view.button_accessible_label, "Send message");
    assert_eq!(view.notice, None);
    assert_eq!(
        view.classification_options,
        vec!["General Inquiry", "Workout Lab", "Vitamin D Tracker", "Other"]
    );
}

#[test]
fn pending_form_locks_inputs_and_button() {
    let view = ContactFormView::new(SubmissionStatus::Pending, None, &FormSchema::basic());
    assert!(view.inputs_disabled);
    assert!(view.submit_disabled);
    assert_eq!(view.button_label, "Sending...");
    assert_eq!(view.button_accessible_label, "Sending message, please wait");
    assert!(view.classification_options.is_empty());
}

#[test]
fn succeeded_form_shows_polite_status() {
    let view = ContactFormView::new(SubmissionStatus::Succeeded, None, &FormSchema::basic());
    assert!(!view.inputs_disabled);
    assert!(view.submit_disabled);
    assert_eq!(view.button_label, "Sent!");
    let notice = view.notice.expect("notice");
    assert_eq!(notice.role(), "status");
    assert_eq!(notice.text(), SUCCESS_NOTICE);
}

#[test]
fn failed_form_allows_retry_and_raises_alert() {
    let view = ContactFormView::new(
        SubmissionStatus::Failed,
        Some("Failed to send message. Please try again."),
        &FormSchema::canonical(),
    );
    assert!(!view.submit_disabled);
    assert_eq!(view.button_label, "Send Message");
    let notice = view.notice.expect("notice");
    assert_eq!(notice.role(), "alert");
    assert_eq!(notice.text(), "Failed to send message. Please try again.");
}
