use std::time::Duration;

/// Settings shared by every subcommand.
pub struct Config {
    /// Name or path of the adb binary to invoke.
    pub adb: String,
    /// Upper bound on how long a single adb invocation may run.
    ///
    /// `None` waits for as long as the tool does, which can be forever if
    /// the device never answers.
    pub timeout: Option<Duration>,
}
