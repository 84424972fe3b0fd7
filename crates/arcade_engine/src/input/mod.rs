//! Input events delivered by the host framework

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Map a raw host keycode (the classic virtual-key numbering) to a
    /// `KeyCode`. Unknown codes map to `None`.
    pub fn from_raw(code: u32) -> Option<Self> {
        match code {
            13 => Some(Self::Enter),
            27 => Some(Self::Escape),
            32 => Some(Self::Space),
            37 => Some(Self::Left),
            38 => Some(Self::Up),
            39 => Some(Self::Right),
            40 => Some(Self::Down),
            _ => None,
        }
    }
}

/// Input event applied between simulation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down
    KeyDown {
        /// Printable character, if the key produces one
        key: Option<char>,
        /// Coded key, if the key has one
        keycode: Option<KeyCode>,
    },

    /// A key was released. Hosts do not report which one.
    KeyUp,
}

impl InputEvent {
    /// Key down for a printable character
    pub fn char(key: char) -> Self {
        Self::KeyDown { key: Some(key), keycode: None }
    }

    /// Key down for a coded key
    pub fn code(keycode: KeyCode) -> Self {
        Self::KeyDown { key: None, keycode: Some(keycode) }
    }

    /// Key down from raw host values; unknown raw codes are dropped
    pub fn from_raw(key: Option<char>, raw_keycode: Option<u32>) -> Self {
        Self::KeyDown {
            key,
            keycode: raw_keycode.and_then(KeyCode::from_raw),
        }
    }
}
