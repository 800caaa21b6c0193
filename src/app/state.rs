use crate::api::{Track, TrackError};

/// Where a lookup stands. `Ready` and `Failed` are terminal for a given lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Ready(Track),
    Failed(TrackError),
}

impl LookupState {
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }

    pub fn track(&self) -> Option<&Track> {
        match self {
            LookupState::Ready(t) => Some(t),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<TrackError> {
        match self {
            LookupState::Failed(e) => Some(*e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Identifies one lookup; only the newest ticket may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub(crate) generation: u64,
}
