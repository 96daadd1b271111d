use crate::keys::MoveKey;

/// Held movement keys plus jump state, read once per frame by desktop
/// locomotion.
///
/// `can_jump` is written from two sides: the landing clamp sets it when the
/// camera touches the ground, and consuming a jump clears it. `jump_pending`
/// is an edge flag, set only on a fresh key-down and consumed (or discarded,
/// when airborne) every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub can_jump: bool,
    jump_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key-down or key-up for one of the bound movement keys.
    ///
    /// `repeat` marks OS key-repeat events; those never queue a jump.
    pub fn apply(&mut self, key: MoveKey, pressed: bool, repeat: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Back => self.back = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
            MoveKey::Jump => {
                if pressed && !repeat {
                    self.jump_pending = true;
                }
            }
        }
    }

    /// True while any horizontal movement key is held.
    pub fn any_horizontal(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    /// Consume the pending jump edge. Returns whether a fresh press was
    /// queued since the last frame; the flag clears either way.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pending)
    }
}
