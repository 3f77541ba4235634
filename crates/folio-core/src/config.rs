//! Site configuration.
//!
//! Relay identifiers, timer periods and scroll thresholds in one place.
//! Every field has a default, so a partial JSON document can override only
//! what it names:
//!
//! ```ignore
//! let config = SiteConfig::from_json(r#"{ "timing": { "auto_advance_ms": 8000 } }"#)?;
//! assert_eq!(config.timing.auto_advance(), Duration::from_secs(8));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

/// Top-level configuration for the page controllers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub relay: RelayConfig,
    pub timing: TimingConfig,
    pub scroll: ScrollConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Identifiers for the email relay widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: "service_7xgnai9".to_string(),
            template_id: "template_b0v7rbk".to_string(),
            public_key: "zniOUuwBCCLF-cIso".to_string(),
        }
    }
}

/// Timer periods, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Gallery auto-advance period while a project modal is open
    pub auto_advance_ms: u64,
    /// How long a contact form status message stays visible
    pub status_hide_ms: u64,
    /// Trailing-edge debounce applied to scroll events
    pub scroll_debounce_ms: u64,
    /// Per-index delay for staggered reveals (skill tags)
    pub reveal_stagger_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: 5_000,
            status_hide_ms: 5_000,
            scroll_debounce_ms: 10,
            reveal_stagger_ms: 100,
        }
    }
}

impl TimingConfig {
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    pub fn status_hide(&self) -> Duration {
        Duration::from_millis(self.status_hide_ms)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }
}

/// Scroll-driven thresholds, in CSS pixels unless noted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Look-ahead subtracted from a section's top when picking the active link
    pub nav_look_ahead: f64,
    /// Header switches to its "scrolled" style past this position
    pub header_threshold: f64,
    /// Back-to-top control shows past this position
    pub back_to_top_threshold: f64,
    /// Fixed header height subtracted from anchor scroll targets
    pub anchor_offset: f64,
    /// Minimum visible fraction (0..=1) that triggers a reveal
    pub reveal_ratio: f64,
    /// Viewport shrink at the bottom edge before an element counts as visible
    pub reveal_bottom_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_look_ahead: 100.0,
            header_threshold: 100.0,
            back_to_top_threshold: 300.0,
            anchor_offset: 80.0,
            reveal_ratio: 0.1,
            reveal_bottom_margin: 50.0,
        }
    }
}
