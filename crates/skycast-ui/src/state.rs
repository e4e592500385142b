//! Search view state machine.
//!
//! Exactly one state is shown at a time. There is no terminal state: every
//! state accepts a new submission.

/// What the weather panel is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Welcome,
    Loading,
    Result,
    Error,
}

impl ViewState {
    /// True while a lookup is being shown as in flight.
    pub fn is_loading(self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// State after a query passed validation.
    pub fn on_submit(self) -> Self {
        ViewState::Loading
    }

    /// State after a query failed validation. No lookup is started.
    pub fn on_rejected(self) -> Self {
        ViewState::Error
    }

    /// State after the lookup settled.
    pub fn on_settled(self, succeeded: bool) -> Self {
        if succeeded {
            ViewState::Result
        } else {
            ViewState::Error
        }
    }
}
