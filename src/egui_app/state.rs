//! Shared state types for the egui UI.

mod form;
mod server;
mod status;
mod submission;

pub use form::FormState;
pub use server::{ServerHealth, ServerState};
pub use status::StatusBarState;
pub use submission::{Outcome, RequestId, SubmissionState};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
    /// Values and text buffers of the eleven inputs.
    pub form: FormState,
    /// Last prediction outcome plus the in-flight request, if any.
    pub submission: SubmissionState,
    /// Server URL editor and last health report.
    pub server: ServerState,
}
