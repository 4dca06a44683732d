//! Toolkit-level input events and the trait interactive elements implement.
//!
//! Coordinates are in the same space as the element rectangles. A windowing
//! layer translates its own events into these (see the `winit` feature).

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and should not propagate
    Handled,
    /// Event was not handled, continue propagation
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS, the Super/Windows key elsewhere.
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        command: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn command() -> Self {
        Self {
            command: true,
            ..Self::NONE
        }
    }

    /// Shortcut modifier: Command, or Ctrl where there is no Command key.
    pub fn shortcut(&self) -> bool {
        self.command || self.ctrl
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub x: f32,
    pub y: f32,
    /// Number of consecutive clicks (1 = single, 2 = double, 3 = triple)
    pub click_count: u32,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            click_count: 1,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_clicks(mut self, click_count: u32) -> Self {
        self.click_count = click_count;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Keys the editing controls react to; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    KeyA,
    KeyC,
    KeyV,
    KeyX,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
    /// Text produced by the key press, if any.
    pub character: Option<char>,
}

impl KeyEvent {
    pub fn key(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            character: None,
        }
    }

    pub fn character(ch: char) -> Self {
        Self {
            key: KeyCode::Other,
            modifiers: Modifiers::NONE,
            character: Some(ch),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Unified event handler trait for interactive elements
///
/// The dispatcher routes pointer events to the element under the pointer
/// (and drags/ups to the element that took the press) and key events to
/// the focused element.
pub trait EventHandler {
    fn mouse_down(&mut self, event: MouseEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn mouse_drag(&mut self, event: MouseEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn mouse_up(&mut self, event: MouseEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn key_down(&mut self, event: KeyEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn focus_gained(&mut self) {}

    fn focus_lost(&mut self) {}

    fn is_focused(&self) -> bool {
        false
    }

    /// Check if the point (x, y) is inside this element
    fn contains_point(&self, x: f32, y: f32) -> bool {
        let _ = (x, y);
        false
    }
}
