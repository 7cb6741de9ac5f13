use crate::core::Controls;

/// Key that makes the entity climb while held.
pub const ASCEND_KEY: &str = "ArrowUp";

#[inline]
pub fn is_ascend_key(code: &str) -> bool {
    code == ASCEND_KEY
}

/// Latest press/release edges from keyboard and touch. Either source holding
/// ascend is enough.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputState {
    pub key_held: bool,
    pub touch_held: bool,
}

impl InputState {
    pub fn key_down(&mut self, code: &str) -> bool {
        if is_ascend_key(code) {
            self.key_held = true;
            return true;
        }
        false
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        if is_ascend_key(code) {
            self.key_held = false;
            return true;
        }
        false
    }

    pub fn touch_start(&mut self) {
        self.touch_held = true;
    }

    pub fn touch_end(&mut self) {
        self.touch_held = false;
    }

    pub fn controls(&self) -> Controls {
        Controls {
            ascend: self.key_held || self.touch_held,
        }
    }
}
