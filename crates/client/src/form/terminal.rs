use super::controller::SUBMITTING_LABEL;
use super::view::{FormView, Status};

/// Renders form state changes to the terminal.
///
/// Errors always go to stderr. Progress and success lines are suppressed in
/// quiet mode.
#[derive(Debug, Default)]
pub struct TerminalView {
    quiet: bool,
}

impl TerminalView {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl FormView for TerminalView {
    fn set_submit_enabled(&mut self, _enabled: bool) {}

    fn set_submit_label(&mut self, label: &str) {
        if !self.quiet && label == SUBMITTING_LABEL {
            eprintln!("{label}");
        }
    }

    fn clear_status(&mut self) {}

    fn show_status(&mut self, status: Status) {
        match status {
            Status::Success(message) if !self.quiet => println!("{message}"),
            Status::Success(_) => {}
            Status::Error(message) => eprintln!("Error: {message}"),
        }
    }

    fn reset_form(&mut self) {}
}
