//! Keyboard input and focus-ring modality.

/// Keys the page reacts to, parsed from DOM `KeyboardEvent.key` names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Tab,
    Other,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

/// Page class shown while the user navigates with the keyboard
pub const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";

/// Tracks whether focus rings should be visible.
///
/// `Tab` switches to keyboard mode; any mouse press switches back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardModality {
    keyboard: bool,
}

impl KeyboardModality {
    /// Returns true if the modality changed
    pub fn on_key(&mut self, key: Key) -> bool {
        if key == Key::Tab && !self.keyboard {
            self.keyboard = true;
            return true;
        }
        false
    }

    /// Returns true if the modality changed
    pub fn on_mouse_down(&mut self) -> bool {
        std::mem::replace(&mut self.keyboard, false)
    }

    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }

    pub fn page_class(&self) -> Option<&'static str> {
        self.keyboard.then_some(KEYBOARD_NAVIGATION_CLASS)
    }
}
