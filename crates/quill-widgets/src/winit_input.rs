//! Translation from winit keyboard input to toolkit events.

use winit::event::{ElementState, KeyEvent as WinitKeyEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};

use crate::event::{KeyCode, KeyEvent, Modifiers};

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::Home => KeyCode::Home,
            WinitKeyCode::End => KeyCode::End,
            WinitKeyCode::Backspace => KeyCode::Backspace,
            WinitKeyCode::Delete => KeyCode::Delete,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Tab => KeyCode::Tab,
            WinitKeyCode::KeyA => KeyCode::KeyA,
            WinitKeyCode::KeyC => KeyCode::KeyC,
            WinitKeyCode::KeyV => KeyCode::KeyV,
            WinitKeyCode::KeyX => KeyCode::KeyX,
            _ => KeyCode::Other,
        }
    }
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            command: state.super_key(),
        }
    }
}

/// Key presses only; releases and unidentified keys give `None`.
pub fn key_event_from_winit(event: &WinitKeyEvent, modifiers: ModifiersState) -> Option<KeyEvent> {
    if event.state != ElementState::Pressed {
        return None;
    }
    let key = match event.physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        PhysicalKey::Unidentified(_) => KeyCode::Other,
    };
    let character = event
        .text
        .as_ref()
        .and_then(|text| text.chars().next())
        .filter(|ch| !ch.is_control());
    if key == KeyCode::Other && character.is_none() {
        return None;
    }
    Some(KeyEvent {
        key,
        modifiers: modifiers.into(),
        character,
    })
}
