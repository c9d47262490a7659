use std::fmt;

use serde::Serialize;

/// How a heartbeat is presented in the chat message.
///
/// Only two states exist. Pending, maintenance and any other nonzero status
/// reported by the monitor are shown as `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PresentationStatus {
    Up,
    Down,
}

impl PresentationStatus {
    pub const UP_COLOR: u32 = 0x00FF00;
    pub const DOWN_COLOR: u32 = 0xFF0000;

    pub fn from_heartbeat(status: i64) -> Self {
        if status == 0 {
            Self::Down
        } else {
            Self::Up
        }
    }

    pub fn color(self) -> u32 {
        match self {
            Self::Up => Self::UP_COLOR,
            Self::Down => Self::DOWN_COLOR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

impl fmt::Display for PresentationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
