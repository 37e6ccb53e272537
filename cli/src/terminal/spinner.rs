use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use wadb_core::runner::{CommandRunner, RunnerError};

/// Wraps the real runner with a tick spinner so the terminal shows life
/// while adb talks to the device.
pub struct SpinnerRunner<R> {
    inner: R,
}

impl<R> SpinnerRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

fn start(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}

#[async_trait]
impl<R> CommandRunner for SpinnerRunner<R>
where
    R: CommandRunner + Send + Sync,
{
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin_line: Option<&str>,
    ) -> Result<String, RunnerError> {
        let spinner = start(format!("{} {}", program, args.join(" ")));
        let result = self.inner.run(program, args, stdin_line).await;
        spinner.finish_and_clear();
        result
    }
}
