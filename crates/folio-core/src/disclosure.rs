//! Expand/collapse toggle for the extra certifications region.

/// Two-state disclosure; collapsed on load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn icon(&self) -> &'static str {
        if self.expanded {
            "–"
        } else {
            "+"
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }
}
