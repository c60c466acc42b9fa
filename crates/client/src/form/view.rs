/// Outcome line shown below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

/// The parts of the form UI the pipeline touches.
pub trait FormView {
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_submit_label(&mut self, label: &str);
    fn clear_status(&mut self);
    fn show_status(&mut self, status: Status);
    /// Clear every input, including the attached file.
    fn reset_form(&mut self);
}
