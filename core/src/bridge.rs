//! Construction and invocation of the external bridge tool's pair/connect
//! commands. The argv shape is a compatibility boundary: `<tool> pair
//! <ip>:<port>` with the code on stdin, `<tool> connect <ip>:<port>`.

use crate::runner::{CommandRunner, RunnerError};

pub fn pair_args(addr: &str) -> Vec<String> {
    vec!["pair".to_string(), addr.to_string()]
}

pub fn connect_args(addr: &str) -> Vec<String> {
    vec!["connect".to_string(), addr.to_string()]
}

/// Runs `<tool> pair <addr>`, feeding the six-digit code as the tool's only
/// line of input.
pub async fn pair<R>(runner: &R, tool: &str, addr: &str, code: &str) -> Result<String, RunnerError>
where
    R: CommandRunner + ?Sized,
{
    runner.run(tool, &pair_args(addr), Some(code)).await
}

/// Runs `<tool> connect <addr>`.
pub async fn connect<R>(runner: &R, tool: &str, addr: &str) -> Result<String, RunnerError>
where
    R: CommandRunner + ?Sized,
{
    runner.run(tool, &connect_args(addr), None).await
}
