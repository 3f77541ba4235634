//! Project detail modal.
//!
//! ```text
//!            open(i)                       next / prev / jump / tick
//!  Closed ───────────▶ Open(ModalSession) ◀──────────────────────────┐
//!    ▲                      │   │                                    │
//!    └──── close / Escape ──┘   └────────────────────────────────────┘
//! ```
//!
//! Everything that lives only while the modal is open (gallery position,
//! auto-advance schedule) is owned by the [`ModalSession`], so closing the
//! modal drops it and a late timer poll finds nothing to advance.

use std::time::Duration;

use crate::content::{lookup, Markup, Project};
use crate::error::FolioResult;
use crate::gallery::{GalleryState, GalleryView};
use crate::keyboard::Key;
use crate::render::{ActionRole, CardAction};
use crate::timer::Ticker;

/// Clickable parts of the modal, mapped to handlers by [`ModalController::dispatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The dimmed background around the dialog
    Overlay,
    CloseControl,
    Thumbnail(usize),
    Prev,
    Next,
}

/// Text and actions shown in the modal, captured when it opens
#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub record: usize,
    pub title: String,
    pub kind: String,
    pub description: Markup,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    /// `None` hides the challenges section
    pub challenges: Option<String>,
    /// Always shown; disabled when the record has no repository
    pub repository: CardAction,
    /// Hidden when the record has no demo
    pub demo: Option<CardAction>,
}

impl ModalContent {
    fn from_project(record: usize, project: &Project) -> Self {
        let repository = match project.links.repository.as_deref() {
            Some(href) => CardAction::Link {
                role: ActionRole::Repository,
                label: "View Code",
                href: href.to_string(),
            },
            None => CardAction::Disabled {
                role: ActionRole::Repository,
                label: "Code not public",
            },
        };
        let demo = project
            .links
            .live_demo
            .as_deref()
            .map(|href| CardAction::Link {
                role: ActionRole::LiveDemo,
                label: "Live Demo",
                href: href.to_string(),
            });

        Self {
            record,
            title: project.title.clone(),
            kind: project.kind.clone(),
            description: project.detailed_description.clone(),
            tech: project.tech.clone(),
            features: project.features.clone(),
            challenges: project.challenges.clone(),
            repository,
            demo,
        }
    }
}

/// State that exists only while the modal is open
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession {
    id: u64,
    content: ModalContent,
    gallery: GalleryState,
    auto_advance: Ticker,
}

impl ModalSession {
    /// Distinguishes sessions so a timer task can tell its session was replaced
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn gallery_view(&self) -> GalleryView {
        self.gallery.view()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalSession),
}

/// Open/close state machine for the project detail modal
#[derive(Debug, Clone, PartialEq)]
pub struct ModalController {
    state: ModalState,
    auto_advance: Duration,
    sessions: u64,
}

impl ModalController {
    pub fn new(auto_advance: Duration) -> Self {
        Self {
            state: ModalState::Closed,
            auto_advance,
            sessions: 0,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn session(&self) -> Option<&ModalSession> {
        match &self.state {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut ModalSession> {
        match &mut self.state {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Background scrolling is locked exactly while the modal is open
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    /// When the next auto-advance is due, if the modal is open
    pub fn next_deadline(&self) -> Option<Duration> {
        self.session().map(|s| s.auto_advance.next_due())
    }

    /// Open the modal for `projects[index]`.
    ///
    /// An index outside the list is rejected and leaves the state untouched.
    /// Opening while already open replaces the session and its schedule.
    pub fn open(&mut self, projects: &[Project], index: usize, now: Duration) -> FolioResult<()> {
        let project = lookup(projects, index)?;
        self.sessions += 1;
        let session = ModalSession {
            id: self.sessions,
            content: ModalContent::from_project(index, project),
            gallery: GalleryState::for_project(project),
            auto_advance: Ticker::start(self.auto_advance, now),
        };
        tracing::debug!(
            record = index,
            session = session.id,
            images = session.gallery.len(),
            "Project modal opened"
        );
        self.state = ModalState::Open(session);
        Ok(())
    }

    /// Close the modal. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            ModalState::Open(session) => {
                tracing::debug!(session = session.id, "Project modal closed");
                true
            }
            ModalState::Closed => false,
        }
    }

    pub fn next_image(&mut self) -> bool {
        self.with_gallery(GalleryState::next)
    }

    pub fn prev_image(&mut self) -> bool {
        self.with_gallery(GalleryState::prev)
    }

    pub fn change_image(&mut self, index: usize) -> bool {
        self.with_gallery(|g| g.jump(index))
    }

    fn with_gallery(&mut self, f: impl FnOnce(&mut GalleryState)) -> bool {
        match self.session_mut() {
            Some(session) => {
                f(&mut session.gallery);
                true
            }
            None => false,
        }
    }

    /// Advance the gallery by one image if the auto-advance is due.
    ///
    /// A late tick still moves a single image. Manual navigation never
    /// touches the schedule.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(session) = self.session_mut() else {
            return false;
        };
        let fired = session.auto_advance.poll(now);
        if fired {
            session.gallery.next();
        }
        fired
    }

    /// Route a click on one of the modal's controls
    pub fn dispatch(&mut self, target: ModalTarget) -> bool {
        match target {
            ModalTarget::Overlay | ModalTarget::CloseControl => self.close(),
            ModalTarget::Thumbnail(index) => self.change_image(index),
            ModalTarget::Prev => self.prev_image(),
            ModalTarget::Next => self.next_image(),
        }
    }

    /// Keyboard shortcuts; every key is ignored while closed
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev_image(),
            Key::ArrowRight => self.next_image(),
            Key::Tab | Key::Other => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ImageRef, Links};
    use crate::error::FolioError;

    const PERIOD: Duration = Duration::from_secs(5);

    fn project(gallery: usize, demo: bool) -> Project {
        Project {
            title: "Tank Battle".to_string(),
            kind: "Personal".to_string(),
            description: "Game".to_string(),
            detailed_description: Markup::trusted("<p>Tanks</p>"),
            image: ImageRef::new("tank.png", "Tank"),
            gallery: (0..gallery)
                .map(|i| ImageRef::new(format!("{i}.png"), ""))
                .collect(),
            tech: vec!["Godot".to_string()],
            features: vec!["Bosses".to_string()],
            challenges: None,
            links: Links {
                repository: Some("https://example.com/tank".to_string()),
                live_demo: demo.then(|| "https://example.com/play".to_string()),
            },
        }
    }

    fn current(modal: &ModalController) -> usize {
        modal.session().unwrap().gallery().current_index()
    }

    #[test]
    fn test_open_builds_session() {
        let projects = vec![project(3, false)];
        let mut modal = ModalController::new(PERIOD);
        modal.open(&projects, 0, Duration::ZERO).unwrap();

        let session = modal.session().unwrap();
        assert_eq!(session.content().title, "Tank Battle");
        assert!(session.content().challenges.is_none());
        assert!(session.content().demo.is_none());
        assert!(session.content().repository.is_enabled());
        assert_eq!(session.gallery_view().counter(), "1 / 3");
        assert!(modal.locks_scroll());
        assert_eq!(modal.next_deadline(), Some(PERIOD));
    }

    #[test]
    fn test_open_out_of_range_keeps_state() {
        let mut modal = ModalController::new(PERIOD);
        let err = modal.open(&[], 0, Duration::ZERO).unwrap_err();
        assert!(matches!(err, FolioError::RecordOutOfRange { index: 0, len: 0 }));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let projects = vec![project(2, true)];
        let mut modal = ModalController::new(PERIOD);
        modal.open(&projects, 0, Duration::ZERO).unwrap();
        assert!(modal.close());
        assert!(!modal.close());
        assert!(!modal.locks_scroll());
        assert_eq!(modal.next_deadline(), None);
    }

    #[test]
    fn test_tick_advances_on_cadence() {
        let projects = vec![project(3, false)];
        let mut modal = ModalController::new(PERIOD);
        modal.open(&projects, 0, Duration::ZERO).unwrap();

        assert!(!modal.tick(Duration::from_secs(4)));
        assert!(modal.tick(Duration::from_secs(5)));
        assert_eq!(current(&modal), 1);
        // Two periods late: still a single step
        assert!(modal.tick(Duration::from_secs(15)));
        assert_eq!(current(&modal), 2);
        assert_eq!(modal.next_deadline(), Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_manual_navigation_keeps_cadence() {
        let projects = vec![project(4, false)];
        let mut modal = ModalController::new(PERIOD);
        modal.open(&projects, 0, Duration::ZERO).unwrap();

        modal.tick(Duration::from_secs(3));
        modal.next_image();
        assert_eq!(modal.next_deadline(), Some(PERIOD));
        assert!(modal.tick(Duration::from_secs(5)));
        assert_eq!(current(&modal), 2);
    }

    #[test]
    fn test_no_ticks_after_close() {
        let projects = vec![project(3, false)];
        let mut modal = ModalController::new(PERIOD);
        modal.open(&projects, 0, Duration::ZERO).unwrap();
        modal.close();
        assert!(!modal.tick(Duration::from_secs(60)));
        assert!(!modal.next_image());
    }

    #[test]
    fn test_reopen_resets_gallery_and_schedule() {
        let projects = vec![project(3, false), project(2, true)];
        let mut modal = ModalController::new(PERIOD);
        modal.open(&projects, 0, Duration::ZERO).unwrap();
        let first = modal.session().unwrap().id();
        modal.next_image();

        modal.open(&projects, 1, Duration::from_secs(2)).unwrap();
        let session = modal.session().unwrap();
        assert_ne!(session.id(), first);
        assert_eq!(session.gallery().current_index(), 0);
        assert_eq!(session.content().record, 1);
        assert!(session.content().demo.is_some());
        assert_eq!(modal.next_deadline(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_dispatch_targets() {
        let projects = vec![project(3, false)];
        let mut modal = ModalController::new(PERIOD);
        modal.open(&projects, 0, Duration::ZERO).unwrap();

        assert!(modal.dispatch(ModalTarget::Thumbnail(2)));
        assert_eq!(current(&modal), 2);
        modal.dispatch(ModalTarget::Next);
        assert_eq!(current(&modal), 0);
        modal.dispatch(ModalTarget::Prev);
        assert_eq!(current(&modal), 2);
        assert!(modal.dispatch(ModalTarget::Overlay));
        assert!(!modal.is_open());
        assert!(!modal.dispatch(ModalTarget::CloseControl));
    }

    #[test]
    fn test_keys() {
        let projects = vec![project(3, false)];
        let mut modal = ModalController::new(PERIOD);
        assert!(!modal.handle_key(Key::Escape));
        assert!(!modal.handle_key(Key::ArrowRight));

        modal.open(&projects, 0, Duration::ZERO).unwrap();
        assert!(modal.handle_key(Key::ArrowLeft));
        assert_eq!(current(&modal), 2);
        assert!(!modal.handle_key(Key::Tab));
        assert!(modal.handle_key(Key::Escape));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_missing_repository_is_disabled_not_hidden() {
        let mut p = project(0, false);
        p.links.repository = None;
        let mut modal = ModalController::new(PERIOD);
        modal.open(&[p], 0, Duration::ZERO).unwrap();
        let content = modal.session().unwrap().content();
        assert!(!content.repository.is_enabled());
    }
}
