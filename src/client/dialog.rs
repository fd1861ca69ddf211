/// Blocking user interaction: confirmation prompts and alerts.
pub trait Dialog {
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
}
