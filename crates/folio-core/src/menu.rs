//! Mobile navigation menu.

/// Open/closed state of the mobile menu.
///
/// The trigger and the panel share one "active" state, and page scroll is
/// locked exactly while the menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Flip the menu; returns the new open state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Mobile menu toggled");
        self.open
    }

    /// A link inside the menu was followed; the menu returns to its initial state
    pub fn on_navigate(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    /// Class shared by the trigger and the panel
    pub fn active_class(&self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locks_scroll() {
        let mut menu = MobileMenu::default();
        assert!(!menu.locks_scroll());
        assert!(menu.toggle());
        assert!(menu.locks_scroll());
        assert_eq!(menu.active_class(), "active");
        assert!(!menu.toggle());
        assert!(!menu.locks_scroll());
    }

    #[test]
    fn test_navigation_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.on_navigate();
        assert_eq!(menu, MobileMenu::default());
        // Navigating with the menu closed changes nothing
        menu.on_navigate();
        assert!(!menu.is_open());
    }
}
