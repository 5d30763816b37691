//! Edit/Simulate mode controller.

use crate::editor::EditState;
use crate::point::PointId;
use tracing::debug;

/// Which engine receives input. Link progress only exists while editing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Edit(EditState),
    Simulate,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Edit(EditState::Idle)
    }
}

impl Mode {
    /// Flip between editing and simulating. Leaving edit mode drops any
    /// half-drawn link; scene state carries over in both directions.
    pub fn toggle(&mut self) {
        *self = match *self {
            Mode::Edit(state) => {
                if let Some(start) = state.pending_link() {
                    debug!(start = start.index(), "dropped pending link");
                }
                Mode::Simulate
            }
            Mode::Simulate => Mode::Edit(EditState::Idle),
        };
        debug!(simulating = self.is_simulating(), "mode toggled");
    }

    pub fn is_simulating(&self) -> bool {
        matches!(self, Mode::Simulate)
    }

    pub fn is_editing(&self) -> bool {
        !self.is_simulating()
    }

    pub fn pending_link(&self) -> Option<PointId> {
        match self {
            Mode::Edit(state) => state.pending_link(),
            Mode::Simulate => None,
        }
    }
}
