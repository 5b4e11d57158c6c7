//! FFI use-case API for the Flutter page host.
//!
//! # Responsibility
//! - Expose page session events and snapshots to Dart via FRB.
//! - Flatten core errors into stable response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide page session; `page_reset` replaces it.

use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Catalog, ContactField, ContactFormError, DiscardingRelay, OverlayView, PageConfig,
    PageEffect, PageEvent, PageSession, PageSnapshot, RecordKind, RecordRef, ScrollFrame,
    SectionBounds,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

type HostSession = PageSession<DiscardingRelay>;

static SESSION: Lazy<Mutex<Option<HostSession>>> = Lazy::new(|| Mutex::new(None));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Navigation item for the nav bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section_id: String,
    pub display_name: String,
    pub anchor: String,
}

/// Viewport-relative rectangle of one mounted section anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRect {
    pub section_id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Overlay detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRecord {
    pub kind: String,
    pub index: u32,
    pub title: String,
    pub organization: Option<String>,
    pub period: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub source_url: Option<String>,
    pub demo_url: Option<String>,
    pub narrative_url: Option<String>,
    pub achievements: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
}

/// Render snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub ok: bool,
    pub message: String,
    pub active_section: String,
    pub menu_open: bool,
    pub scrolled: bool,
    pub overlay: Option<OverlayRecord>,
    /// Anchor the host should smooth-scroll to, if any.
    pub scroll_to: Option<String>,
}

/// Profile block for the hero, about and footer areas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

/// Summary card for one record; `kind`/`index` feed `page_open_record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCard {
    pub kind: String,
    pub index: u32,
    pub title: String,
    pub organization: Option<String>,
    pub period: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationItem {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

/// Static page content envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCatalog {
    pub ok: bool,
    pub message: String,
    pub site_title: String,
    pub site_description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub profile: ProfileInfo,
    pub experiences: Vec<RecordCard>,
    pub projects: Vec<RecordCard>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<CertificationItem>,
}

/// Contact form action envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    pub ok: bool,
    pub submission_id: Option<String>,
    /// Offending field name for validation failures.
    pub field: Option<String>,
    pub message: String,
}

impl ContactResponse {
    fn success(message: impl Into<String>, submission_id: Option<String>) -> Self {
        Self {
            ok: true,
            submission_id,
            field: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>, field: Option<ContactField>) -> Self {
        Self {
            ok: false,
            submission_id: None,
            field: field.map(|value| value.as_str().to_string()),
            message: message.into(),
        }
    }
}

/// Replaces the page session.
///
/// Input semantics:
/// - `config_json`: optional `PageConfig` JSON; missing fields use defaults.
/// - `catalog_json`: optional catalog JSON; `None` uses the built-in catalog.
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
/// - On failure the previous session (if any) is kept.
#[flutter_rust_bridge::frb(sync)]
pub fn page_reset(config_json: Option<String>, catalog_json: Option<String>) -> String {
    match build_session(config_json.as_deref(), catalog_json.as_deref()) {
        Ok(session) => {
            *lock_session() = Some(session);
            String::new()
        }
        Err(message) => message,
    }
}

/// Lists nav items in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn page_sections() -> Vec<NavItem> {
    with_session(|session| nav_items(session)).unwrap_or_default()
}

/// Returns the static page content of the current session.
///
/// # FFI contract
/// - `ok=false` with empty content when no session can be built.
#[flutter_rust_bridge::frb(sync)]
pub fn page_catalog() -> PageCatalog {
    match with_session(|session| to_page_catalog(session.catalog())) {
        Ok(catalog) => catalog,
        Err(message) => PageCatalog {
            ok: false,
            message,
            ..PageCatalog::default()
        },
    }
}

/// Reports the first layout pass after the page is mounted.
#[flutter_rust_bridge::frb(sync)]
pub fn page_on_mount(scroll_y: f64, rects: Vec<SectionRect>) -> PageView {
    run_event(PageEvent::Mounted(to_frame(scroll_y, rects)))
}

/// Reports one scroll tick.
#[flutter_rust_bridge::frb(sync)]
pub fn page_on_scroll(scroll_y: f64, rects: Vec<SectionRect>) -> PageView {
    run_event(PageEvent::Scrolled(to_frame(scroll_y, rects)))
}

/// Handles a nav item click.
#[flutter_rust_bridge::frb(sync)]
pub fn page_select_section(section_id: String) -> PageView {
    run_event(PageEvent::NavItemSelected(section_id))
}

/// Handles the mobile menu button.
#[flutter_rust_bridge::frb(sync)]
pub fn page_toggle_menu() -> PageView {
    run_event(PageEvent::MenuToggled)
}

/// Handles a card click; `kind` is `experience|project`.
#[flutter_rust_bridge::frb(sync)]
pub fn page_open_record(kind: String, index: u32) -> PageView {
    match parse_record_ref(kind.as_str(), index) {
        Ok(target) => run_event(PageEvent::CardClicked(target)),
        Err(message) => failure_view(message),
    }
}

/// Handles the overlay close button or a backdrop click.
#[flutter_rust_bridge::frb(sync)]
pub fn page_close_overlay() -> PageView {
    run_event(PageEvent::CloseRequested)
}

/// Returns the current render snapshot without changing state.
#[flutter_rust_bridge::frb(sync)]
pub fn page_snapshot() -> PageView {
    match with_session(|session| session.snapshot()) {
        Ok(snapshot) => to_page_view(snapshot, None),
        Err(message) => failure_view(message),
    }
}

/// Stores one typed field value; `field` is the input name attribute.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_set_field(field: String, value: String) -> ContactResponse {
    let Some(parsed) = ContactField::parse(field.as_str()) else {
        return ContactResponse::failure(format!("unknown contact field `{field}`"), None);
    };
    let event = PageEvent::ContactFieldChanged {
        field: parsed,
        value,
    };
    match with_session(|session| session.dispatch(event).map_err(|err| err.to_string())) {
        Ok(Ok(_)) => ContactResponse::success("", None),
        Ok(Err(message)) | Err(message) => ContactResponse::failure(message, None),
    }
}

/// Submits the contact form.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_submit() -> ContactResponse {
    let outcome = with_session(|session| {
        session
            .dispatch(PageEvent::ContactSubmitted)
            .map_err(|err| err.to_string())
    });
    match outcome {
        Ok(Ok(effects)) => to_contact_response(effects),
        Ok(Err(message)) | Err(message) => ContactResponse::failure(message, None),
    }
}

fn build_session(
    config_json: Option<&str>,
    catalog_json: Option<&str>,
) -> Result<HostSession, String> {
    let config = match config_json {
        Some(raw) => PageConfig::from_json_str(raw).map_err(|err| err.to_string())?,
        None => PageConfig::default(),
    };
    let catalog = match catalog_json {
        Some(raw) => Catalog::from_json_str(raw).map_err(|err| err.to_string())?,
        None => Catalog::builtin().clone(),
    };
    PageSession::new(catalog, config, DiscardingRelay).map_err(|err| err.to_string())
}

fn lock_session() -> MutexGuard<'static, Option<HostSession>> {
    // Poisoning is recovered; FFI calls must not panic.
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `f` on the session, creating the built-in one on first use.
fn with_session<T>(f: impl FnOnce(&mut HostSession) -> T) -> Result<T, String> {
    let mut guard = lock_session();
    if guard.is_none() {
        *guard = Some(build_session(None, None)?);
    }
    match guard.as_mut() {
        Some(session) => Ok(f(session)),
        None => Err("page session unavailable".to_string()),
    }
}

fn run_event(event: PageEvent) -> PageView {
    match with_session(|session| apply_event(session, event)) {
        Ok(view) => view,
        Err(message) => failure_view(message),
    }
}

fn apply_event(session: &mut HostSession, event: PageEvent) -> PageView {
    match session.dispatch(event) {
        Ok(effects) => {
            let scroll_to = effects.into_iter().find_map(|effect| match effect {
                PageEffect::ScrollIntoView { anchor } => Some(anchor),
                _ => None,
            });
            to_page_view(session.snapshot(), scroll_to)
        }
        Err(err) => {
            warn!("event=ffi_dispatch module=ffi status=error error={}", err);
            let mut view = to_page_view(session.snapshot(), None);
            view.ok = false;
            view.message = err.to_string();
            view
        }
    }
}

fn nav_items(session: &HostSession) -> Vec<NavItem> {
    session
        .tracker()
        .sections()
        .iter()
        .map(|section| NavItem {
            section_id: section.id.clone(),
            display_name: section.display_name.clone(),
            anchor: section.anchor(),
        })
        .collect()
}

fn to_page_catalog(catalog: &Catalog) -> PageCatalog {
    let profile = &catalog.profile;
    PageCatalog {
        ok: true,
        message: String::new(),
        site_title: catalog.metadata.title.clone(),
        site_description: catalog.metadata.description.clone(),
        keywords: catalog.metadata.keywords.clone(),
        author: catalog.metadata.author.clone(),
        profile: ProfileInfo {
            name: profile.name.clone(),
            headline: profile.headline.clone(),
            tagline: profile.tagline.clone(),
            about: profile.about.clone(),
            email: profile.email.clone(),
            linkedin_url: profile.linkedin.clone(),
            github_url: profile.github.clone(),
        },
        experiences: record_cards(catalog, RecordKind::Experience),
        projects: record_cards(catalog, RecordKind::Project),
        skills: catalog
            .skills
            .iter()
            .map(|category| SkillGroup {
                title: category.title.clone(),
                skills: category.skills.clone(),
            })
            .collect(),
        certifications: catalog
            .certifications
            .iter()
            .map(|certification| CertificationItem {
                title: certification.title.clone(),
                issuer: certification.issuer.clone(),
                year: certification.year.clone(),
            })
            .collect(),
    }
}

fn record_cards(catalog: &Catalog, kind: RecordKind) -> Vec<RecordCard> {
    catalog
        .records(kind)
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let header = record.header();
            RecordCard {
                kind: kind.as_str().to_string(),
                index: u32::try_from(index).unwrap_or(u32::MAX),
                title: header.title.clone(),
                organization: record.organization().map(str::to_string),
                period: header.period.clone(),
                description: header.description.clone(),
                technologies: header.technologies.clone(),
            }
        })
        .collect()
}

fn parse_record_ref(kind: &str, index: u32) -> Result<RecordRef, String> {
    let kind = RecordKind::parse(kind)
        .ok_or_else(|| format!("unknown record kind `{kind}`; expected experience|project"))?;
    Ok(RecordRef {
        kind,
        index: index as usize,
    })
}

fn to_frame(scroll_y: f64, rects: Vec<SectionRect>) -> ScrollFrame {
    ScrollFrame::new(
        scroll_y,
        rects
            .into_iter()
            .map(|rect| SectionBounds::new(rect.section_id, rect.top, rect.bottom))
            .collect(),
    )
}

fn to_page_view(snapshot: PageSnapshot, scroll_to: Option<String>) -> PageView {
    PageView {
        ok: true,
        message: String::new(),
        active_section: snapshot.active_section,
        menu_open: snapshot.menu_open,
        scrolled: snapshot.scrolled,
        overlay: snapshot.overlay.map(to_overlay_record),
        scroll_to,
    }
}

fn to_overlay_record(view: OverlayView) -> OverlayRecord {
    OverlayRecord {
        kind: view.target.kind.as_str().to_string(),
        index: u32::try_from(view.target.index).unwrap_or(u32::MAX),
        title: view.title,
        organization: view.organization,
        period: view.period,
        description: view.description,
        technologies: view.technologies,
        source_url: view.links.source,
        demo_url: view.links.demo,
        narrative_url: view.links.narrative,
        achievements: view.achievements,
        features: view.features,
        challenges: view.challenges,
    }
}

fn to_contact_response(effects: Vec<PageEffect>) -> ContactResponse {
    for effect in effects {
        match effect {
            PageEffect::ContactDelivered(receipt) => {
                return ContactResponse::success(
                    "Message sent.",
                    Some(receipt.submission_id.to_string()),
                );
            }
            PageEffect::ContactRejected(err) => {
                let field = match &err {
                    ContactFormError::MissingField(field) => Some(*field),
                    ContactFormError::InvalidEmail => Some(ContactField::Email),
                    ContactFormError::Relay(_) => None,
                };
                return ContactResponse::failure(err.to_string(), field);
            }
            _ => {}
        }
    }
    ContactResponse::failure("contact submit produced no outcome", None)
}

fn failure_view(message: String) -> PageView {
    PageView {
        ok: false,
        message,
        active_section: String::new(),
        menu_open: false,
        scrolled: false,
        overlay: None,
        scroll_to: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_event, build_session, core_version, init_logging, parse_record_ref, ping,
        to_contact_response, to_page_catalog, HostSession, SectionRect,
    };
    use folio_core::{ContactField, PageEvent, RecordRef};

    fn session() -> HostSession {
        build_session(None, None).expect("built-in session")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/folio-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn build_session_reports_bad_config() {
        let err = build_session(Some(r#"{"reference_line_px": -5}"#), None)
            .err()
            .expect("negative line must fail");
        assert!(err.contains("reference_line_px"));
    }

    #[test]
    fn parse_record_ref_rejects_unknown_kind() {
        assert_eq!(
            parse_record_ref("project", 1).expect("project ref"),
            RecordRef::project(1)
        );
        assert!(parse_record_ref("certification", 0).is_err());
    }

    #[test]
    fn scroll_event_view_reports_active_section() {
        let mut session = session();
        let frame = super::to_frame(
            1200.0,
            vec![SectionRect {
                section_id: "skills".to_string(),
                top: -20.0,
                bottom: 500.0,
            }],
        );
        let view = apply_event(&mut session, PageEvent::Scrolled(frame));
        assert!(view.ok, "{}", view.message);
        assert_eq!(view.active_section, "skills");
        assert!(view.scrolled);
    }

    #[test]
    fn mount_view_reports_section_under_reference_line() {
        let mut session = session();
        let frame = super::to_frame(
            2400.0,
            vec![
                SectionRect {
                    section_id: "projects".to_string(),
                    top: -300.0,
                    bottom: 80.0,
                },
                SectionRect {
                    section_id: "skills".to_string(),
                    top: 80.0,
                    bottom: 700.0,
                },
            ],
        );
        let view = apply_event(&mut session, PageEvent::Mounted(frame));
        assert!(view.ok, "{}", view.message);
        assert_eq!(view.active_section, "skills");
    }

    #[test]
    fn catalog_view_lists_cards_that_open_records() {
        let mut session = session();
        let catalog = to_page_catalog(session.catalog());
        assert!(catalog.ok);
        assert_eq!(catalog.profile.name, "Srishti Jaiswal");
        assert_eq!(catalog.skills.len(), 4);
        assert_eq!(catalog.certifications.len(), 3);
        assert_eq!(catalog.experiences[0].organization.as_deref(), Some("Cognibiz"));

        let card = &catalog.projects[1];
        assert_eq!(card.title, "Events Portal");
        let target = parse_record_ref(card.kind.as_str(), card.index).expect("card ref");
        let view = apply_event(&mut session, PageEvent::CardClicked(target));
        let overlay = view.overlay.expect("overlay should be open");
        assert_eq!(overlay.title, card.title);
        assert_eq!(overlay.demo_url, None);
    }

    #[test]
    fn nav_selection_view_carries_scroll_target() {
        let mut session = session();
        let view = apply_event(
            &mut session,
            PageEvent::NavItemSelected("contact".to_string()),
        );
        assert_eq!(view.scroll_to.as_deref(), Some("#contact"));
    }

    #[test]
    fn open_record_view_carries_overlay_detail() {
        let mut session = session();
        let view = apply_event(
            &mut session,
            PageEvent::CardClicked(RecordRef::experience(1)),
        );
        let overlay = view.overlay.expect("overlay should be open");
        assert_eq!(overlay.kind, "experience");
        assert_eq!(overlay.index, 1);
        assert_eq!(overlay.title, "Data Analytics Intern");
        assert_eq!(overlay.organization.as_deref(), Some("AICTE OIB-SIP"));

        let view = apply_event(&mut session, PageEvent::CloseRequested);
        assert!(view.overlay.is_none());
    }

    #[test]
    fn out_of_range_record_keeps_snapshot_and_reports_error() {
        let mut session = session();
        let view = apply_event(&mut session, PageEvent::CardClicked(RecordRef::project(99)));
        assert!(!view.ok);
        assert!(view.message.contains("out of range"));
        assert_eq!(view.active_section, "home");
    }

    #[test]
    fn contact_rejection_names_offending_field() {
        let mut session = session();
        session
            .dispatch(PageEvent::ContactFieldChanged {
                field: ContactField::Name,
                value: "Ada".to_string(),
            })
            .expect("field change");
        let effects = session
            .dispatch(PageEvent::ContactSubmitted)
            .expect("submit dispatch");

        let response = to_contact_response(effects);
        assert!(!response.ok);
        assert_eq!(response.field.as_deref(), Some("email"));
        assert_eq!(session.contact().name, "Ada");
    }
}
