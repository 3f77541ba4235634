//! End-to-end controller flows
//!
//! Drives the controllers the way the page does, with a virtual clock in
//! place of real timers.

use std::cell::Cell;
use std::time::Duration;

use folio_core::render::{certification_sections, project_cards, ActionRole};
use folio_core::{
    deliver, Clock, ContactField, ContactForm, ContactMessage, ContentStore, EmailRelay, Key,
    ManualClock, ModalController, ModalTarget, MobileMenu, PreviewController, RelayConfig,
    RelayError, SiteConfig, StatusKind,
};

fn single_project_store() -> ContentStore {
    ContentStore::from_json(
        r#"[{
            "title": "A",
            "image": { "src": "a.png", "alt": "A screenshot" },
            "tech": ["X", "Y"],
            "links": { "repository": "https://example.com/a", "live_demo": null }
        }]"#,
        "[]",
        "[]",
    )
    .unwrap()
}

/// Relay that records calls and answers with a fixed outcome
struct FakeRelay {
    calls: Cell<usize>,
    outcome: Result<(), RelayError>,
}

impl FakeRelay {
    fn new(outcome: Result<(), RelayError>) -> Self {
        Self {
            calls: Cell::new(0),
            outcome,
        }
    }
}

impl EmailRelay for FakeRelay {
    async fn send_form(&self, _config: &RelayConfig, _form: &ContactMessage) -> Result<(), RelayError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

/// Relay that takes a while to answer
struct SlowRelay(Duration);

impl EmailRelay for SlowRelay {
    async fn send_form(&self, _config: &RelayConfig, _form: &ContactMessage) -> Result<(), RelayError> {
        tokio::time::sleep(self.0).await;
        Ok(())
    }
}

// ============================================================================
// Cards and modal
// ============================================================================

#[test]
fn test_single_record_card_to_modal() {
    let store = single_project_store();
    let clock = ManualClock::new();

    let cards = project_cards(store.projects());
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].tags.len(), 2);
    assert_eq!(cards[0].count_actions(ActionRole::LiveDemo), 0);

    let mut modal = ModalController::new(Duration::from_secs(5));
    modal.open(store.projects(), cards[0].index, clock.now()).unwrap();

    let session = modal.session().unwrap();
    assert_eq!(session.content().title, "A");
    let view = session.gallery_view();
    assert_eq!(view.counter(), "1 / 1");
    assert_eq!(view.main.src, "a.png");
    assert_eq!(view.main.alt, "A screenshot");
}

#[test]
fn test_open_close_restores_scroll_and_stops_timer() {
    let store = ContentStore::embedded().unwrap();
    let clock = ManualClock::new();
    let mut modal = ModalController::new(Duration::from_secs(5));

    modal.open(store.projects(), 0, clock.now()).unwrap();
    assert!(modal.locks_scroll());
    clock.advance(Duration::from_secs(5));
    assert!(modal.tick(clock.now()));

    modal.close();
    assert!(!modal.locks_scroll());
    clock.advance(Duration::from_secs(30));
    assert!(!modal.tick(clock.now()));
    assert!(modal.session().is_none());
}

#[test]
fn test_escape_when_closed_is_noop() {
    let mut modal = ModalController::new(Duration::from_secs(5));
    let mut preview = PreviewController::default();
    let before = (modal.clone(), preview.clone());

    assert!(!modal.handle_key(Key::Escape));
    assert!(!preview.handle_key(Key::Escape));
    assert_eq!((modal, preview), before);
}

#[test]
fn test_overlay_click_closes_modal() {
    let store = ContentStore::embedded().unwrap();
    let mut modal = ModalController::new(Duration::from_secs(5));
    modal.open(store.projects(), 1, Duration::ZERO).unwrap();
    assert!(modal.dispatch(ModalTarget::Overlay));
    assert!(!modal.is_open());
}

#[test]
fn test_embedded_certifications_without_pdf_show_placeholder() {
    let store = ContentStore::embedded().unwrap();
    let sections = certification_sections(store.certifications());
    assert!(sections.featured.len() <= 2);
    let all = sections.featured.iter().chain(sections.more.iter());
    for card in all {
        let cert = store.certification(card.index).unwrap();
        assert_eq!(card.action.is_enabled(), cert.pdf.is_some());
        assert_eq!(card.to_html().matches("cert-link").count(), 1);
    }
}

/// The `data-index` a rendered card carries for click delegation
fn data_index(html: &str) -> usize {
    let start = html.find(r#"data-index=""#).unwrap() + r#"data-index=""#.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].parse().unwrap()
}

#[test]
fn test_rendered_cards_open_their_own_record() {
    let store = ContentStore::embedded().unwrap();

    let mut modal = ModalController::new(Duration::from_secs(5));
    for card in project_cards(store.projects()) {
        let html = card.to_html();
        assert!(html.contains(r#"tabindex="0""#));
        modal.open(store.projects(), data_index(&html), Duration::ZERO).unwrap();
        let session = modal.session().unwrap();
        assert_eq!(session.content().record, card.index);
        assert_eq!(session.content().title, card.title);
    }

    let mut preview = PreviewController::default();
    let sections = certification_sections(store.certifications());
    for card in sections.featured.iter().chain(sections.more.iter()) {
        let html = card.to_html();
        assert!(html.contains("thumb-btn"));
        preview.open(store.certifications(), data_index(&html)).unwrap();
        assert_eq!(preview.current().unwrap().record, card.index);
    }
}

#[test]
fn test_menu_and_modal_lock_independently() {
    let store = ContentStore::embedded().unwrap();
    let mut menu = MobileMenu::default();
    let mut modal = ModalController::new(Duration::from_secs(5));

    menu.toggle();
    menu.on_navigate();
    modal.open(store.projects(), 0, Duration::ZERO).unwrap();
    let locked = menu.locks_scroll() || modal.locks_scroll();
    assert!(locked);
    modal.close();
    assert!(!(menu.locks_scroll() || modal.locks_scroll()));
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn test_relay_unavailable_gives_one_error() {
    let config = SiteConfig::default();
    let clock = ManualClock::new();
    let mut form = ContactForm::new(config.timing.status_hide());
    form.set_field(ContactField::Name, "Ada");

    let kind = futures::executor::block_on(form.submit(
        None::<&FakeRelay>,
        &config.relay,
        &clock,
    ))
    .unwrap();

    assert_eq!(kind, StatusKind::Error);
    assert!(form.status().is_some());
    assert!(!form.submit_button().disabled);
    assert_eq!(form.fields().name, "Ada");

    clock.advance(config.timing.status_hide());
    assert!(form.tick(clock.now()));
    assert!(form.status().is_none());
}

#[test]
fn test_relay_failure_then_retry_succeeds() {
    let _ = tracing_subscriber::fmt::try_init();

    let config = SiteConfig::default();
    let clock = ManualClock::new();
    let mut form = ContactForm::new(config.timing.status_hide());
    form.set_field(ContactField::Email, "ada@example.com");

    let failing = FakeRelay::new(Err(RelayError::Delivery("timeout".into())));
    let kind = futures::executor::block_on(form.submit(Some(&failing), &config.relay, &clock)).unwrap();
    assert_eq!(kind, StatusKind::Error);
    assert_eq!(failing.calls.get(), 1);
    assert_eq!(form.fields().email, "ada@example.com");

    clock.advance(Duration::from_secs(2));
    let working = FakeRelay::new(Ok(()));
    let kind = futures::executor::block_on(form.submit(Some(&working), &config.relay, &clock)).unwrap();
    assert_eq!(kind, StatusKind::Success);
    assert_eq!(form.fields(), &ContactMessage::default());

    // The failed attempt's hide time passes; the success status remains
    clock.set(Duration::from_secs(5));
    assert!(!form.tick(clock.now()));
    assert_eq!(form.status().unwrap().kind, StatusKind::Success);
}

#[tokio::test(start_paused = true)]
async fn test_split_submission_with_slow_relay() {
    let _ = tracing_subscriber::fmt::try_init();

    let config = SiteConfig::default();
    let mut form = ContactForm::new(config.timing.status_hide());
    let relay = SlowRelay(Duration::from_secs(2));
    let start = tokio::time::Instant::now();

    let message = form.begin().unwrap();
    assert!(form.submit_button().disabled);

    let outcome = deliver(Some(&relay), &config.relay, &message).await;
    assert!(start.elapsed() >= Duration::from_secs(2));

    form.settle(outcome, Duration::from_secs(2));
    assert!(!form.submit_button().disabled);
    assert_eq!(form.status_hide_at(), Some(Duration::from_secs(7)));
}
