use std::str::FromStr;

/// Logical movement keys consumed by [`crate::InputState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    Jump,
}

/// Errors from key-binding selection.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("unknown binding set: {0:?} (expected \"wasd\" or \"arrows\")")]
    UnknownSet(String),
}

/// Named keyboard layouts mapping physical keys to [`MoveKey`]s.
///
/// The physical-key names here match winit's `KeyCode` debug names so the
/// windowing layer can translate without its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyBindings {
    #[default]
    Wasd,
    Arrows,
}

impl KeyBindings {
    /// Translate a physical key name into a logical movement key, if bound.
    pub fn resolve(&self, key_name: &str) -> Option<MoveKey> {
        match self {
            Self::Wasd => match key_name {
                "KeyW" => Some(MoveKey::Forward),
                "KeyS" => Some(MoveKey::Back),
                "KeyA" => Some(MoveKey::Left),
                "KeyD" => Some(MoveKey::Right),
                "Space" => Some(MoveKey::Jump),
                _ => None,
            },
            Self::Arrows => match key_name {
                "ArrowUp" => Some(MoveKey::Forward),
                "ArrowDown" => Some(MoveKey::Back),
                "ArrowLeft" => Some(MoveKey::Left),
                "ArrowRight" => Some(MoveKey::Right),
                "Space" => Some(MoveKey::Jump),
                _ => None,
            },
        }
    }
}

impl FromStr for KeyBindings {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wasd" => Ok(Self::Wasd),
            "arrows" => Ok(Self::Arrows),
            other => Err(BindingError::UnknownSet(other.to_string())),
        }
    }
}
