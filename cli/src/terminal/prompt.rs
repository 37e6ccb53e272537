use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use wadb_common::network::interface::InterfaceAddr;
use wadb_core::ui::{Prompt, Validator};

/// dialoguer-backed prompts. Esc on a pick list, or an empty answer on
/// free-form input, counts as cancellation.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn select_interface(
        &mut self,
        prompt: &str,
        choices: &[InterfaceAddr],
    ) -> Result<Option<usize>> {
        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact_opt()?;
        Ok(picked)
    }

    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator,
    ) -> Result<Option<String>> {
        // Empty input bypasses validation because it means "cancel", not
        // "try again".
        let lenient = move |value: &String| -> Result<(), String> {
            if value.is_empty() { Ok(()) } else { validate(value) }
        };

        let answer: String = match default {
            Some(default) => Input::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default.to_string())
                .allow_empty(true)
                .validate_with(lenient)
                .interact_text()?,
            None => Input::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .validate_with(lenient)
                .interact_text()?,
        };

        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer))
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_opt()?;
        Ok(answer)
    }
}
