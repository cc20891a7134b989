use inquire::Text;
use tempwatch_core::{InputError, Prompter};

/// Reads answers from the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> Result<String, InputError> {
        Text::new(message).prompt().map_err(|e| InputError::Aborted(e.to_string()))
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
