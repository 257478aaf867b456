use crate::egui_app::ui::style::StatusTone;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: "Enter property details to get started".into(),
            tone: StatusTone::Idle,
        }
    }
}

impl StatusBarState {
    pub fn badge_label(&self) -> &'static str {
        match self.tone {
            StatusTone::Idle => "Idle",
            StatusTone::Busy => "Busy",
            StatusTone::Info => "Info",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}
