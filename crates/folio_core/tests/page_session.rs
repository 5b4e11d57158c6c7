use folio_core::{
    Catalog, ContactField, ContactFormError, ContactRelay, ContactSubmission, OverlayError,
    OverlayState, PageConfig, PageEffect, PageError, PageEvent, PageSession, RecordRef,
    RelayResult, ScrollFrame, SectionBounds, SectionTrackerError,
};

#[derive(Default)]
struct CountingRelay {
    deliveries: usize,
}

impl ContactRelay for CountingRelay {
    fn deliver(&mut self, _submission: &ContactSubmission) -> RelayResult<()> {
        self.deliveries += 1;
        Ok(())
    }
}

fn session() -> PageSession<CountingRelay> {
    PageSession::new(
        Catalog::builtin().clone(),
        PageConfig::default(),
        CountingRelay::default(),
    )
    .unwrap()
}

fn frame(scroll_y: f64, section_id: &str) -> ScrollFrame {
    ScrollFrame::new(
        scroll_y,
        vec![SectionBounds::new(section_id, 0.0, 600.0)],
    )
}

#[test]
fn scroll_events_drive_active_section_and_scrolled_flag() {
    let mut session = session();

    let effects = session
        .dispatch(PageEvent::Scrolled(frame(900.0, "experience")))
        .unwrap();
    assert_eq!(
        effects,
        vec![PageEffect::ActiveSectionChanged("experience".to_string())]
    );

    let snapshot = session.snapshot();
    assert_eq!(snapshot.active_section, "experience");
    assert!(snapshot.scrolled);

    let effects = session
        .dispatch(PageEvent::Scrolled(ScrollFrame::new(0.0, Vec::new())))
        .unwrap();
    assert_eq!(effects, vec![PageEffect::ActiveSectionChanged("home".to_string())]);
    assert!(!session.snapshot().scrolled);
}

#[test]
fn mount_frame_activates_section_under_reference_line() {
    let mut session = session();
    let mount = ScrollFrame::new(
        1800.0,
        vec![
            SectionBounds::new("experience", -400.0, 90.0),
            SectionBounds::new("projects", 90.0, 700.0),
        ],
    );

    let effects = session.dispatch(PageEvent::Mounted(mount)).unwrap();
    assert_eq!(
        effects,
        vec![PageEffect::ActiveSectionChanged("projects".to_string())]
    );
    let snapshot = session.snapshot();
    assert_eq!(snapshot.active_section, "projects");
    assert!(snapshot.scrolled);
}

#[test]
fn nav_selection_requests_scroll_and_closes_menu() {
    let mut session = session();
    let effects = session.dispatch(PageEvent::MenuToggled).unwrap();
    assert_eq!(effects, vec![PageEffect::MenuChanged(true)]);

    let effects = session
        .dispatch(PageEvent::NavItemSelected("projects".to_string()))
        .unwrap();
    assert_eq!(
        effects,
        vec![
            PageEffect::MenuChanged(false),
            PageEffect::ScrollIntoView {
                anchor: "#projects".to_string()
            },
        ]
    );
    // Active section follows scroll events, not the click itself.
    assert_eq!(session.snapshot().active_section, "home");
}

#[test]
fn unknown_nav_target_is_a_session_error() {
    let mut session = session();
    let err = session
        .dispatch(PageEvent::NavItemSelected("blog".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        PageError::Tracker(SectionTrackerError::UnknownSection(_))
    ));
}

#[test]
fn card_click_replace_and_backdrop_close() {
    let mut session = session();

    let effects = session
        .dispatch_all([
            PageEvent::CardClicked(RecordRef::experience(1)),
            PageEvent::CardClicked(RecordRef::project(0)),
        ])
        .unwrap();
    assert_eq!(
        effects,
        vec![
            PageEffect::OverlayOpened(RecordRef::experience(1)),
            PageEffect::OverlayOpened(RecordRef::project(0)),
        ]
    );
    assert_eq!(
        session.overlay_state(),
        OverlayState::Open(RecordRef::project(0))
    );
    assert_eq!(session.snapshot().overlay.unwrap().title, "ISpent");

    let effects = session.dispatch(PageEvent::BackdropClicked).unwrap();
    assert_eq!(effects, vec![PageEffect::OverlayClosed]);
    assert!(session.snapshot().overlay.is_none());

    // Closing again is a no-op.
    assert!(session.dispatch(PageEvent::CloseRequested).unwrap().is_empty());
}

#[test]
fn dispatch_all_stops_at_first_error() {
    let mut session = session();
    let err = session
        .dispatch_all([
            PageEvent::CardClicked(RecordRef::project(7)),
            PageEvent::MenuToggled,
        ])
        .unwrap_err();

    assert!(matches!(
        err,
        PageError::Overlay(OverlayError::RecordOutOfRange { .. })
    ));
    assert!(!session.snapshot().menu_open);
    assert_eq!(session.overlay_state(), OverlayState::Closed);
}

#[test]
fn contact_submit_with_empty_email_is_rejected_without_delivery() {
    let mut session = session();
    let effects = session
        .dispatch_all([
            PageEvent::ContactFieldChanged {
                field: ContactField::Name,
                value: "Ada".to_string(),
            },
            PageEvent::ContactFieldChanged {
                field: ContactField::Message,
                value: "Hi".to_string(),
            },
            PageEvent::ContactSubmitted,
        ])
        .unwrap();

    assert_eq!(
        effects,
        vec![PageEffect::ContactRejected(ContactFormError::MissingField(
            ContactField::Email
        ))]
    );
    assert_eq!(session.relay().deliveries, 0);
    assert_eq!(session.contact().name, "Ada");
    assert_eq!(session.contact().message, "Hi");
}

#[test]
fn contact_submit_delivers_and_clears() {
    let mut session = session();
    let effects = session
        .dispatch_all([
            PageEvent::ContactFieldChanged {
                field: ContactField::Name,
                value: "Ada".to_string(),
            },
            PageEvent::ContactFieldChanged {
                field: ContactField::Email,
                value: "ada@example.com".to_string(),
            },
            PageEvent::ContactFieldChanged {
                field: ContactField::Message,
                value: "Hi".to_string(),
            },
            PageEvent::ContactSubmitted,
        ])
        .unwrap();

    assert!(matches!(effects.as_slice(), [PageEffect::ContactDelivered(_)]));
    assert_eq!(session.relay().deliveries, 1);
    assert!(session.contact().is_empty());
}

#[test]
fn builtin_session_starts_on_first_section() {
    let session = PageSession::builtin().unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.active_section, "home");
    assert!(!snapshot.menu_open);
    assert!(snapshot.overlay.is_none());
    assert!(snapshot.contact.is_empty());
}
