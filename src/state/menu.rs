//! Mobile navigation open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu and return the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn icon_class(&self) -> &'static str {
        if self.open { "fas fa-times" } else { "fas fa-bars" }
    }

    /// Body `overflow` value; the page underneath is locked while open.
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}
