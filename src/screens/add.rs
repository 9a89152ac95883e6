//! Add-employee screen.

use super::Screen;
use crate::app::App;
use crate::input::{self, LineReader};
use anyhow::Result;

pub struct AddScreen;

impl Screen for AddScreen {
    fn name(&self) -> &'static str {
        "add"
    }

    fn title(&self, _app: &App) -> String {
        "Add a new Employee".to_string()
    }

    fn body(&self) -> Option<&'static str> {
        Some("***  Answer prompts to add new employee.  ***")
    }

    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
        let first_name = input::prompt_field(input, "First Name")?;
        let last_name = input::prompt_field(input, "Last Name")?;

        let username = input::prompt_until(
            input,
            "Username",
            "Username must be unique, non-empty, and contain no spaces.",
            |line| {
                (!line.is_empty()
                    && !line.contains(char::is_whitespace)
                    && app.unique_username(line, None))
                .then(|| line.to_string())
            },
        )?;

        let password = input::prompt_field(input, "Password")?;
        let is_hr = input::prompt_yes_no(input, "Is employee hr? (0: no, 1: yes)")?;
        let is_management = input::prompt_yes_no(input, "Is employee management? (0: no, 1: yes)")?;

        app.add_employee(&first_name, &last_name, &username, &password, is_hr, is_management);

        super::navigate(app, input, "menu")
    }
}
