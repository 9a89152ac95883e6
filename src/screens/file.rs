//! Profile view: the logged-in employee's own record, or a specific record
//! opened from a list. HR viewers may step into edit from someone else's
//! profile; editing your own record from here is not offered.

use super::{edit, Screen};
use crate::app::App;
use crate::input::{self, LineReader};
use crate::perms;
use anyhow::{bail, Result};

pub struct FileScreen {
    /// `None` means the logged-in employee's own record.
    target: Option<u32>,
}

impl FileScreen {
    pub fn own() -> Self {
        Self { target: None }
    }

    pub fn target(id: u32) -> Self {
        Self { target: Some(id) }
    }
}

impl Screen for FileScreen {
    fn name(&self) -> &'static str {
        match self.target {
            Some(_) => "specific-file",
            None => "file",
        }
    }

    fn title(&self, _app: &App) -> String {
        match self.target {
            Some(_) => "Viewing Profile".to_string(),
            None => "Viewing Your Profile".to_string(),
        }
    }

    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
        let Some(viewer) = app.logged_in() else {
            bail!("profile displayed without a logged-in employee");
        };
        let viewer_id = viewer.id;
        let viewer_is_hr = viewer.has_permission(perms::HR);

        let employee = match self.target {
            Some(id) => app.find_by_id(id),
            None => app.logged_in(),
        };
        let Some(employee) = employee else {
            // Target vanished between screens; nothing to show.
            return super::navigate(app, input, "menu");
        };

        println!("{}", employee.detail());

        let target_id = employee.id;
        let can_edit = viewer_is_hr && target_id != viewer_id;

        println!("\n0. Return to Menu");
        if can_edit {
            println!("1. Edit Employee");
        }
        println!();

        let choice = input::prompt_until(input, "Choice", "Please input a valid option.", |line| {
            line.parse::<u32>().ok()
        })?;

        if choice == 1 && can_edit {
            let mut editor = edit::EditScreen::new(target_id);
            return super::display(&mut editor, app, input);
        }

        super::navigate(app, input, "menu")
    }
}
