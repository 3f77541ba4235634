//! One-shot reveal animations.
//!
//! An element is revealed the first time enough of it is inside the
//! viewport. Once revealed it stays revealed for the rest of the session.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ScrollConfig;

/// Viewport-relative box of an element that wants a reveal animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fraction of `rect` inside a viewport whose bottom edge is pulled up by
/// `bottom_margin`. Zero-area boxes count as fully visible when they touch
/// the viewport.
pub fn visible_ratio(
    rect: &ElementRect,
    viewport_width: f64,
    viewport_height: f64,
    bottom_margin: f64,
) -> f64 {
    let bottom = (viewport_height - bottom_margin).max(0.0);
    let overlap_x = (rect.x + rect.width).min(viewport_width) - rect.x.max(0.0);
    let overlap_y = (rect.y + rect.height).min(bottom) - rect.y.max(0.0);

    let area = rect.width * rect.height;
    if area <= 0.0 {
        return if overlap_x >= 0.0 && overlap_y >= 0.0 { 1.0 } else { 0.0 };
    }
    (overlap_x.max(0.0) * overlap_y.max(0.0) / area).clamp(0.0, 1.0)
}

/// Transition delay for the `index`-th element of a staggered group
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Remembers which elements have been revealed
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    bottom_margin: f64,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            threshold: config.reveal_ratio,
            bottom_margin: config.reveal_bottom_margin,
            revealed: HashSet::new(),
        }
    }

    /// Returns true only on the observation that first reveals the element
    pub fn observe(&mut self, rect: &ElementRect, viewport_width: f64, viewport_height: f64) -> bool {
        if self.revealed.contains(&rect.id) {
            return false;
        }
        let ratio = visible_ratio(rect, viewport_width, viewport_height, self.bottom_margin);
        if ratio >= self.threshold {
            self.revealed.insert(rect.id.clone());
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(id: &str, y: f64, height: f64) -> ElementRect {
        ElementRect {
            id: id.to_string(),
            x: 0.0,
            y,
            width: 100.0,
            height,
        }
    }

    #[test]
    fn test_ratio_fully_inside() {
        assert_eq!(visible_ratio(&rect("a", 100.0, 100.0), 800.0, 600.0, 50.0), 1.0);
    }

    #[test]
    fn test_ratio_respects_bottom_margin() {
        // Top at 500, viewport effectively ends at 550: 50 of 100 visible
        let ratio = visible_ratio(&rect("a", 500.0, 100.0), 800.0, 600.0, 50.0);
        assert!((ratio - 0.5).abs() < 1e-9);
        // Entirely inside the margin band
        assert_eq!(visible_ratio(&rect("a", 560.0, 30.0), 800.0, 600.0, 50.0), 0.0);
    }

    #[test]
    fn test_ratio_below_viewport() {
        assert_eq!(visible_ratio(&rect("a", 900.0, 100.0), 800.0, 600.0, 50.0), 0.0);
    }

    #[test]
    fn test_zero_area_element() {
        assert_eq!(visible_ratio(&rect("a", 10.0, 0.0), 800.0, 600.0, 50.0), 1.0);
        assert_eq!(visible_ratio(&rect("a", 700.0, 0.0), 800.0, 600.0, 50.0), 0.0);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(&ScrollConfig::default());
        // 5% visible: below the 10% threshold
        assert!(!tracker.observe(&rect("card", 545.0, 100.0), 800.0, 600.0));
        assert!(tracker.observe(&rect("card", 400.0, 100.0), 800.0, 600.0));
        assert!(!tracker.observe(&rect("card", 400.0, 100.0), 800.0, 600.0));
        // Scrolled away again: stays revealed
        assert!(!tracker.observe(&rect("card", 2000.0, 100.0), 800.0, 600.0));
        assert!(tracker.is_revealed("card"));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn test_stagger_delay() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_delay(3, step), Duration::from_millis(300));
    }
}
