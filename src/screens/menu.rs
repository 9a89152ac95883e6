//! Main menu: permission-gated actions, numbered contiguously from 1.

use super::{list, Screen};
use crate::app::App;
use crate::employee::Employee;
use crate::input::{self, LineReader};
use crate::perms;
use anyhow::{bail, Result};

#[derive(Debug, PartialEq)]
pub struct MenuOption {
    pub position: usize,
    pub screen: &'static str,
    pub label: &'static str,
}

pub struct MenuScreen {
    /// Built lazily on first interaction and cached for the life of this
    /// instance.
    options: Option<Vec<MenuOption>>,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { options: None }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// The actions this employee may see. Hidden options do not leave gaps in
/// the numbering.
pub fn build_options(employee: &Employee) -> Vec<MenuOption> {
    let can_view_all =
        employee.has_permission(perms::HR) || employee.has_permission(perms::MANAGEMENT);

    let entries: [(&'static str, &'static str, bool); 5] = [
        ("list", "View Employees", can_view_all),
        ("search", "Search Employees", can_view_all),
        ("add", "Add Employee", employee.has_permission(perms::HR)),
        ("remove", "Remove Employee", employee.has_permission(perms::HR)),
        ("file", "View Your File", employee.has_permission(perms::GENERAL)),
    ];

    let mut options = Vec::new();
    for (screen, label, allowed) in entries {
        if allowed {
            options.push(MenuOption {
                position: options.len() + 1,
                screen,
                label,
            });
        }
    }
    options
}

impl Screen for MenuScreen {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn title(&self, app: &App) -> String {
        match app.logged_in() {
            Some(e) => format!("Welcome {} {}!", e.first_name, e.last_name),
            None => "Menu".to_string(),
        }
    }

    fn body(&self) -> Option<&'static str> {
        Some("***  What do you need to do today?  ***")
    }

    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
        let Some(employee) = app.logged_in() else {
            bail!("menu displayed without a logged-in employee");
        };
        let options = self.options.get_or_insert_with(|| build_options(employee));

        for option in options.iter() {
            println!("{}. {}", option.position, option.label);
        }
        println!("\n0. Exit Application\n");

        let choice = input::prompt_choice(input, "Choice", options.len())?;
        if choice == 0 {
            return Ok(());
        }

        let target = options[choice - 1].screen;
        if target == "remove" {
            // Remove reuses the list screen with per-invocation state; it
            // returns to the menu on its own.
            let mut remove = list::ListScreen::remove();
            return super::display(&mut remove, app, input);
        }

        super::navigate(app, input, target)
    }
}
