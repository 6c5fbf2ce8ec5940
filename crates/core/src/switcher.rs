//! Cycling the active hotbar.

use crate::manager::HotbarManager;

impl HotbarManager {
    /// Activate the hotbar before the current one, wrapping to the last.
    pub fn switch_to_previous(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let index = match self.active_index() {
            0 => len - 1,
            index => index - 1,
        };
        self.activate_index(index);
    }

    /// Activate the hotbar after the current one, wrapping to the first.
    pub fn switch_to_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let index = (self.active_index() + 1) % len;
        self.activate_index(index);
    }
}
