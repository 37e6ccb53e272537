use wadb_common::network::interface::InterfaceAddr;

/// Validator shared between the prompt implementations; the `Err` message is
/// shown inline before the prompt is re-issued.
pub type Validator = fn(&str) -> Result<(), String>;

/// The interactive questions the flows ask. `None` always means the user
/// backed out, which ends the flow silently.
pub trait Prompt {
    /// Pick one entry from the interface list.
    fn select_interface(
        &mut self,
        prompt: &str,
        choices: &[InterfaceAddr],
    ) -> anyhow::Result<Option<usize>>;

    /// One line of validated input. An empty answer counts as cancellation.
    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator,
    ) -> anyhow::Result<Option<String>>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<Option<bool>>;
}

/// User-facing notifications, behind a trait so tests can record them.
pub trait Notify {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}
