use colored::*;
use wadb_core::ui::Notify;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn success(msg: &str) {
    println!("{} {}", "[+]".green().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "[-]".red().bold(), msg.red());
}

/// Routes flow notifications to the terminal.
pub struct TerminalNotify;

impl Notify for TerminalNotify {
    fn info(&mut self, message: &str) {
        success(message);
    }

    fn error(&mut self, message: &str) {
        error(message);
    }
}
