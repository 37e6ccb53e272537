use anyhow::Result;
use wadb_common::config::Config;
use wadb_common::network::interface;
use wadb_core::flow;
use wadb_core::runner::ProcessRunner;

use crate::terminal::print::{self, TerminalNotify};
use crate::terminal::prompt::TerminalPrompt;
use crate::terminal::spinner::SpinnerRunner;

pub async fn pair(cfg: &Config) -> Result<()> {
    print::header("wireless debugging pair");

    let interfaces = interface::list();
    let mut prompt = TerminalPrompt::new();
    let runner = SpinnerRunner::new(ProcessRunner::new(cfg.timeout));
    let mut notify = TerminalNotify;

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces, &cfg.adb).await
}
