//! Keyboard shortcuts for history navigation.

/// A key press with its modifier state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub control: bool,
    /// Cmd on macOS
    pub platform: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_control(mut self) -> Self {
        self.control = true;
        self
    }

    pub fn with_platform(mut self) -> Self {
        self.platform = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
}

/// Map a key press to a history action.
///
/// Ctrl/Cmd+Z undoes; Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo.
pub fn shortcut_for(input: &KeyInput) -> Option<ShortcutAction> {
    if !(input.control || input.platform) {
        return None;
    }

    if input.key.eq_ignore_ascii_case("z") {
        Some(if input.shift {
            ShortcutAction::Redo
        } else {
            ShortcutAction::Undo
        })
    } else if input.key.eq_ignore_ascii_case("y") {
        Some(ShortcutAction::Redo)
    } else {
        None
    }
}
