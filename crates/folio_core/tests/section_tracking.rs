use folio_core::{ScrollFrame, Section, SectionBounds, SectionTracker, SectionTrackerError};

/// Document-space layout: (id, top, bottom). A 100px gap sits after `about`.
const LAYOUT: &[(&str, f64, f64)] = &[
    ("home", 0.0, 800.0),
    ("about", 800.0, 1400.0),
    ("projects", 1500.0, 2300.0),
];

fn sections() -> Vec<Section> {
    vec![
        Section::new("home", "Home"),
        Section::new("about", "About"),
        Section::new("projects", "Projects"),
    ]
}

fn tracker() -> SectionTracker {
    SectionTracker::new(sections(), 100.0).unwrap()
}

fn frame_at(scroll_y: f64) -> ScrollFrame {
    let bounds = LAYOUT
        .iter()
        .map(|(id, top, bottom)| SectionBounds::new(*id, top - scroll_y, bottom - scroll_y))
        .collect();
    ScrollFrame::new(scroll_y, bounds)
}

#[test]
fn first_section_is_active_before_any_frame() {
    let tracker = tracker();
    assert_eq!(tracker.active_id(), "home");
}

#[test]
fn scroll_walk_activates_section_under_reference_line() {
    let mut tracker = tracker();

    let update = tracker.observe(&frame_at(750.0));
    assert_eq!(update.active, "about");
    assert!(update.changed);

    let update = tracker.observe(&frame_at(1450.0));
    assert_eq!(update.active, "projects");
    assert!(update.changed);

    let update = tracker.observe(&frame_at(1500.0));
    assert_eq!(update.active, "projects");
    assert!(!update.changed);
}

#[test]
fn scroll_to_top_activates_first_section() {
    let mut tracker = tracker();
    tracker.observe(&frame_at(1600.0));
    assert_eq!(tracker.active_id(), "projects");

    let update = tracker.observe(&frame_at(0.0));
    assert_eq!(update.active, "home");
    assert!(update.changed);
}

#[test]
fn scroll_to_top_wins_even_without_layout() {
    let mut tracker = tracker();
    tracker.observe(&frame_at(900.0));

    let update = tracker.observe(&ScrollFrame::new(0.0, Vec::new()));
    assert_eq!(update.active, "home");
}

#[test]
fn gap_between_sections_keeps_previous_active() {
    let mut tracker = tracker();
    tracker.observe(&frame_at(900.0));
    assert_eq!(tracker.active_id(), "about");

    // Line at document y=1420 falls in the gap between about and projects.
    let update = tracker.observe(&frame_at(1320.0));
    assert_eq!(update.active, "about");
    assert!(!update.changed);
}

#[test]
fn overlap_resolves_to_first_section_in_document_order() {
    let mut tracker = tracker();
    // Reported out of order and overlapping at the line.
    let frame = ScrollFrame::new(
        500.0,
        vec![
            SectionBounds::new("projects", 50.0, 900.0),
            SectionBounds::new("about", 0.0, 600.0),
        ],
    );

    assert_eq!(tracker.observe(&frame).active, "about");
}

#[test]
fn unmounted_sections_are_skipped_without_error() {
    let mut tracker = tracker();
    let frame = ScrollFrame::new(
        1600.0,
        vec![
            SectionBounds::new("projects", -100.0, 700.0),
            SectionBounds::new("not-registered", 0.0, 1000.0),
        ],
    );

    assert_eq!(tracker.observe(&frame).active, "projects");
}

#[test]
fn at_most_one_section_is_active_across_a_scroll_sweep() {
    let mut tracker = tracker();
    let ids: Vec<String> = sections().into_iter().map(|section| section.id).collect();

    let mut offset = 0.0;
    while offset <= 2400.0 {
        tracker.observe(&frame_at(offset));
        let active_count = ids.iter().filter(|id| tracker.is_active(id)).count();
        assert_eq!(active_count, 1, "offset {offset}");
        offset += 37.0;
    }
}

#[test]
fn construction_rejects_empty_and_duplicate_sections() {
    let err = SectionTracker::new(Vec::new(), 100.0).unwrap_err();
    assert_eq!(err, SectionTrackerError::NoSections);

    let err = SectionTracker::new(
        vec![Section::new("about", "About"), Section::new("about", "Again")],
        100.0,
    )
    .unwrap_err();
    assert_eq!(err, SectionTrackerError::DuplicateSectionId("about".to_string()));
}

#[test]
fn construction_rejects_unusable_reference_line() {
    for line in [f64::NAN, f64::INFINITY, -1.0] {
        let err = SectionTracker::new(sections(), line).unwrap_err();
        assert!(matches!(err, SectionTrackerError::InvalidReferenceLine(_)));
    }

    let tracker = SectionTracker::new(sections(), 0.0).unwrap();
    assert_eq!(tracker.reference_line_px(), 0.0);
}

#[test]
fn section_lookup_accepts_anchor_form() {
    let tracker = tracker();
    assert_eq!(tracker.section("#about").unwrap().display_name, "About");
    assert!(matches!(
        tracker.section("blog"),
        Err(SectionTrackerError::UnknownSection(_))
    ));
}
