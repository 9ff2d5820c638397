//! Input events read from the terminal.
//!
//! A small subset of crossterm's event model: what a hero screen needs to
//! react to (quit keys and resizes).

use crossterm::event::{self, Event, KeyEventKind};

/// Key codes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Any other key.
    Other,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

/// Events from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Focus gained.
    FocusGained,

    /// Focus lost.
    FocusLost,
}

impl InputEvent {
    /// Whether this is one of the quit keys: `q`, Escape or Ctrl+C.
    pub const fn is_quit(&self) -> bool {
        match self {
            Self::Key { code, modifiers } => match code {
                KeyCode::Char('q') | KeyCode::Esc => true,
                KeyCode::Char('c') => modifiers.control,
                _ => false,
            },
            _ => false,
        }
    }

    /// Convert a crossterm event. Key releases, mouse and paste events are dropped.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(Self::Key {
                    code: convert_key_code(key_event.code),
                    modifiers: convert_modifiers(key_event.modifiers),
                })
            }
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            Event::FocusGained => Some(Self::FocusGained),
            Event::FocusLost => Some(Self::FocusLost),
            Event::Mouse(_) | Event::Paste(_) => None,
        }
    }
}

const fn convert_key_code(code: event::KeyCode) -> KeyCode {
    match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Tab => KeyCode::Tab,
        _ => KeyCode::Other,
    }
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}
