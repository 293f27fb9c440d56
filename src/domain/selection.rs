/// The pattern waiting to be placed, if any.
///
/// At most one pattern is armed at a time: selecting another one replaces
/// it, and placing or cancelling returns to `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PatternSelection {
    #[default]
    None,
    Armed(&'static str),
}

impl PatternSelection {
    /// Name of the armed pattern
    pub fn armed(&self) -> Option<&'static str> {
        match self {
            PatternSelection::Armed(name) => Some(*name),
            PatternSelection::None => None,
        }
    }

    pub fn is_armed(&self, name: &str) -> bool {
        self.armed() == Some(name)
    }

    /// Arm `name`, dropping any previously armed pattern
    pub fn select(&mut self, name: &'static str) {
        *self = PatternSelection::Armed(name);
    }

    /// Arm `name`, or disarm it if it is already armed (menu button behaviour)
    pub fn toggle(&mut self, name: &'static str) {
        if self.is_armed(name) {
            self.cancel();
        } else {
            self.select(name);
        }
    }

    /// Leave the armed state after a placement, returning what was armed
    pub fn commit(&mut self) -> Option<&'static str> {
        std::mem::take(self).armed()
    }

    pub fn cancel(&mut self) {
        *self = PatternSelection::None;
    }
}
