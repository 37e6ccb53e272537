//! The two interactive flows: pair and connect. Both are linear with
//! early-exit: every cancelled prompt ends the flow silently, and the first
//! bridge failure propagates out for the caller to show once.

use anyhow::Result;
use tracing::debug;

use wadb_common::network::interface::InterfaceAddr;

use crate::bridge;
use crate::runner::CommandRunner;
use crate::target::derive_prefix;
use crate::ui::{Notify, Prompt};
use crate::validate;

pub const NO_INTERFACES: &str = "No active network interfaces found.";
pub const DEFAULT_PORT: &str = "5555";

/// Pair flow: interface → address → pairing code → `<tool> pair`, then an
/// optional immediate connect to a freshly prompted address on the same
/// prefix.
pub async fn pair<P, R, N>(
    prompt: &mut P,
    runner: &R,
    notify: &mut N,
    interfaces: &[InterfaceAddr],
    tool: &str,
) -> Result<()>
where
    P: Prompt,
    R: CommandRunner + ?Sized,
    N: Notify,
{
    let Some(prefix) = select_prefix(prompt, notify, interfaces, "Select your network IP to pair")?
    else {
        return Ok(());
    };
    let Some(addr) = prompt_address(prompt, &prefix)? else {
        return Ok(());
    };
    let Some(code) = prompt.input(
        "Enter the 6-digit wireless debugging pair code",
        None,
        validate::pair_code,
    )?
    else {
        return Ok(());
    };

    notify.info(&format!("Pairing with {addr} ..."));
    let output = bridge::pair(runner, tool, &addr, &code).await?;
    notify.info(&format!("Pair Output: {}", output.trim()));

    if prompt.confirm("Connect to device now?")? != Some(true) {
        return Ok(());
    }

    // The device usually advertises a different port for the actual
    // connection than for pairing, so the address prompt runs again from
    // the same prefix.
    let Some(addr) = prompt_address(prompt, &prefix)? else {
        return Ok(());
    };
    let output = bridge::connect(runner, tool, &addr).await?;
    notify.info(&format!("Connect Output: {}", output.trim()));
    Ok(())
}

/// Connect flow: interface → address → `<tool> connect`.
pub async fn connect<P, R, N>(
    prompt: &mut P,
    runner: &R,
    notify: &mut N,
    interfaces: &[InterfaceAddr],
    tool: &str,
) -> Result<()>
where
    P: Prompt,
    R: CommandRunner + ?Sized,
    N: Notify,
{
    let Some(prefix) = select_prefix(prompt, notify, interfaces, "Select your network IP")? else {
        return Ok(());
    };
    let Some(addr) = prompt_address(prompt, &prefix)? else {
        return Ok(());
    };

    notify.info(&format!("Connecting to {addr} ..."));
    let output = bridge::connect(runner, tool, &addr).await?;
    notify.info(&format!("Connect Output: {}", output.trim()));
    Ok(())
}

/// Interface selection step shared by both flows. An empty interface list is
/// reported as an error notification, not a failure; `None` means the flow
/// should stop either way.
fn select_prefix<P, N>(
    prompt: &mut P,
    notify: &mut N,
    interfaces: &[InterfaceAddr],
    question: &str,
) -> Result<Option<String>>
where
    P: Prompt,
    N: Notify,
{
    if interfaces.is_empty() {
        notify.error(NO_INTERFACES);
        return Ok(None);
    }
    let Some(idx) = prompt.select_interface(question, interfaces)? else {
        return Ok(None);
    };
    let prefix = derive_prefix(&interfaces[idx].addr.to_string());
    debug!(interface = %interfaces[idx], %prefix, "interface selected");
    Ok(Some(prefix))
}

/// The two address prompts building `{prefix}{octet}:{port}`. The port
/// prompt is never shown once the octet prompt has been cancelled.
fn prompt_address<P: Prompt>(prompt: &mut P, prefix: &str) -> Result<Option<String>> {
    let question = format!("Enter the last part of device IP address (after {prefix})");
    let Some(octet) = prompt.input(&question, None, validate::last_octet)? else {
        return Ok(None);
    };
    let Some(port) = prompt.input("Enter port number", Some(DEFAULT_PORT), validate::port)? else {
        return Ok(None);
    };
    Ok(Some(format!("{prefix}{octet}:{port}")))
}
