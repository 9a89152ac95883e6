//! Login screen: prompts for credentials until a match, then hands off to
//! the menu. There is no attempt limit.

use super::Screen;
use crate::app::App;
use crate::input::{self, LineReader};
use anyhow::Result;

pub struct LoginScreen;

impl Screen for LoginScreen {
    fn name(&self) -> &'static str {
        "login"
    }

    fn title(&self, _app: &App) -> String {
        "Welcome to Staffdesk".to_string()
    }

    fn body(&self) -> Option<&'static str> {
        Some("***  Login to Continue  ***")
    }

    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
        loop {
            let username = input::prompt(input, "Username")?;
            let password = input::prompt(input, "Password")?;

            if app.login(&username, &password) {
                break;
            }

            println!("\nInvalid login, please try again.");
        }

        super::navigate(app, input, "menu")
    }
}
