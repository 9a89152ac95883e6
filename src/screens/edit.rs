//! Edit screen: blank input keeps the current value. The record is
//! rewritten only when something actually changed, and a permission-only
//! change counts as a change.

use super::Screen;
use crate::app::App;
use crate::input::{self, LineReader};
use crate::perms;
use anyhow::Result;

pub struct EditScreen {
    target: u32,
}

impl EditScreen {
    pub fn new(target: u32) -> Self {
        Self { target }
    }
}

impl Screen for EditScreen {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn title(&self, _app: &App) -> String {
        "Edit Employee".to_string()
    }

    fn body(&self) -> Option<&'static str> {
        Some("***  Answer prompts to employee information (Leave blank for no change).  ***")
    }

    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
        let Some(current) = app.find_by_id(self.target) else {
            return super::navigate(app, input, "menu");
        };
        let target = self.target;
        let cur_first = current.first_name.clone();
        let cur_last = current.last_name.clone();
        let cur_username = current.username.clone();
        let cur_hr = current.has_permission(perms::HR) as u8;
        let cur_management = current.has_permission(perms::MANAGEMENT) as u8;

        let first_name =
            input::prompt_field_or_blank(input, &format!("First Name (Current: {})", cur_first))?;
        let last_name =
            input::prompt_field_or_blank(input, &format!("Last Name (Current: {})", cur_last))?;

        let username = input::prompt_until(
            input,
            &format!("Username (Current: {})", cur_username),
            "Username must be unique and contain no spaces.",
            |line| {
                // Blank keeps the current username; otherwise it must be
                // whitespace-free and unique apart from this record itself.
                (line.is_empty()
                    || (!line.contains(char::is_whitespace)
                        && app.unique_username(line, Some(target))))
                .then(|| line.to_string())
            },
        )?;

        let password = input::prompt_field_or_blank(input, "Password")?;

        let is_hr = input::prompt_yes_no(
            input,
            &format!("Is employee hr? (0: no, 1: yes; Current: {})", cur_hr),
        )?;
        let is_management = input::prompt_yes_no(
            input,
            &format!(
                "Is employee management? (0: no, 1: yes; Current: {})",
                cur_management
            ),
        )?;

        let new_permissions = perms::compose(is_hr, is_management);
        let mut dirty = false;

        if let Some(employee) = app.find_by_id_mut(target) {
            if !first_name.is_empty() {
                employee.first_name = first_name;
                dirty = true;
            }
            if !last_name.is_empty() {
                employee.last_name = last_name;
                dirty = true;
            }
            if !username.is_empty() {
                employee.username = username;
                dirty = true;
            }
            if !password.is_empty() {
                employee.update_password(password);
                dirty = true;
            }
            if employee.permissions() != new_permissions {
                employee.update_permissions(new_permissions);
                dirty = true;
            }
        }

        if dirty {
            app.persist(target);
        }

        super::navigate(app, input, "menu")
    }
}
