//! Scroll-derived navigation state.
//!
//! Every visual effect tied to scroll position (progress bar, active nav
//! link, header style, back-to-top control) is a pure function of a
//! [`ScrollSnapshot`]. [`ScrollDebounce`] settles bursts of raw events and
//! [`ScrollController`] adds the reveal tracker on top.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ScrollConfig, SiteConfig};
use crate::reveal::{ElementRect, RevealTracker};
use crate::timer::Debounce;

/// Document-space bounds of a page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Page geometry at one scroll position
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSnapshot {
    pub scroll_top: f64,
    pub document_height: f64,
    #[serde(default)]
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Sections in document order
    #[serde(default)]
    pub sections: Vec<SectionBounds>,
    /// Elements still waiting for their reveal animation
    #[serde(default)]
    pub elements: Vec<ElementRect>,
}

/// Derived navigation UI state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    /// Progress bar width, 0..=100
    pub progress: f64,
    pub active_section: Option<String>,
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

/// Progress bar width in percent; 0 when the page cannot scroll
pub fn progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let extent = document_height - viewport_height;
    if extent <= 0.0 || extent.is_nan() {
        return 0.0;
    }
    (scroll_top / extent).clamp(0.0, 1.0) * 100.0
}

/// Last section (document order) spanning `scroll_top`, with the look-ahead
/// applied to its top edge
pub fn active_section(sections: &[SectionBounds], scroll_top: f64, look_ahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - look_ahead;
            scroll_top >= top && scroll_top < top + s.height
        })
        .map(|s| s.id.as_str())
}

pub fn nav_state(snapshot: &ScrollSnapshot, config: &ScrollConfig) -> NavState {
    let y = snapshot.scroll_top;
    NavState {
        progress: progress_percent(y, snapshot.document_height, snapshot.viewport_height),
        active_section: active_section(&snapshot.sections, y, config.nav_look_ahead)
            .map(str::to_string),
        header_scrolled: y > config.header_threshold,
        back_to_top_visible: y > config.back_to_top_threshold,
    }
}

/// Scroll position for an in-page anchor, leaving room for the fixed header
pub fn anchor_target(section_top: f64, config: &ScrollConfig) -> f64 {
    (section_top - config.anchor_offset).max(0.0)
}

/// Trailing-edge debounce for raw scroll events.
///
/// Holds the latest snapshot of a burst until the wait has passed. It is
/// kept apart from [`ScrollController`] so buffering an event never touches
/// the state the page draws from.
#[derive(Debug, Clone)]
pub struct ScrollDebounce {
    debounce: Debounce,
    pending: Option<ScrollSnapshot>,
}

impl ScrollDebounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            debounce: Debounce::new(wait),
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.debounce.wait()
    }

    /// Buffer a snapshot, replacing any older one from the same burst
    pub fn push(&mut self, snapshot: ScrollSnapshot, now: Duration) {
        self.pending = Some(snapshot);
        self.debounce.call(now);
    }

    /// The latest snapshot once the burst has settled, at most once per burst
    pub fn take_due(&mut self, now: Duration) -> Option<ScrollSnapshot> {
        if !self.debounce.poll(now) {
            return None;
        }
        self.pending.take()
    }
}

/// Navigation and reveal state derived from settled scroll snapshots
#[derive(Debug, Clone)]
pub struct ScrollController {
    config: ScrollConfig,
    nav: NavState,
    reveal: RevealTracker,
}

impl ScrollController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.scroll.clone(),
            nav: NavState::default(),
            reveal: RevealTracker::new(&config.scroll),
        }
    }

    /// Evaluate a snapshot; returns the ids it revealed
    pub fn apply(&mut self, snapshot: ScrollSnapshot) -> Vec<String> {
        self.nav = nav_state(&snapshot, &self.config);

        let mut revealed = Vec::new();
        for rect in &snapshot.elements {
            if self
                .reveal
                .observe(rect, snapshot.viewport_width, snapshot.viewport_height)
            {
                revealed.push(rect.id.clone());
            }
        }
        if !revealed.is_empty() {
            tracing::trace!(count = revealed.len(), "Elements revealed");
        }
        revealed
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.reveal.is_revealed(id)
    }

    /// Anchor scroll position for a section whose top was read at click time
    pub fn anchor_position(&self, section_top: f64) -> f64 {
        anchor_target(section_top, &self.config)
    }
}
