//! Employee listing. One screen, three modes: browse everyone, pick a
//! record to remove, or show a pre-fetched search result set.

use super::{file, Screen};
use crate::app::App;
use crate::employee::Employee;
use crate::input::{self, LineReader};
use anyhow::Result;

enum ListMode {
    All,
    Remove,
    SearchResults { query: String, results: Vec<Employee> },
}

pub struct ListScreen {
    mode: ListMode,
}

impl ListScreen {
    pub fn all() -> Self {
        Self { mode: ListMode::All }
    }

    pub fn remove() -> Self {
        Self {
            mode: ListMode::Remove,
        }
    }

    pub fn search_results(query: &str, results: Vec<Employee>) -> Self {
        Self {
            mode: ListMode::SearchResults {
                query: query.to_string(),
                results,
            },
        }
    }
}

impl Screen for ListScreen {
    fn name(&self) -> &'static str {
        match self.mode {
            ListMode::SearchResults { .. } => "search-list",
            _ => "list",
        }
    }

    fn title(&self, _app: &App) -> String {
        match &self.mode {
            ListMode::All => "Viewing All Employees".to_string(),
            ListMode::Remove => "Remove Employee".to_string(),
            ListMode::SearchResults { query, .. } => {
                format!("Showing employees like \"{}\"", query)
            }
        }
    }

    fn body(&self) -> Option<&'static str> {
        match self.mode {
            ListMode::Remove => Some("***  Insert Id of Employee to Remove  ***"),
            _ => Some("***  Insert Id of Employee to Edit/View  ***"),
        }
    }

    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
        let own_id = app.logged_in().map(|e| e.id).unwrap_or(0);
        let is_remove = matches!(self.mode, ListMode::Remove);

        let rows: Vec<&Employee> = match &self.mode {
            ListMode::SearchResults { results, .. } => results.iter().collect(),
            // Remove mode hides the caller's own row; self-removal is
            // forbidden anyway.
            _ => app
                .employees
                .iter()
                .filter(|e| !(is_remove && e.id == own_id))
                .collect(),
        };
        for employee in &rows {
            println!("{}", employee.summary());
        }
        println!("\n0. Return to Menu\n");

        let id = input::prompt_until(input, "Choice", "ID must be of type int.", |line| {
            line.parse::<u32>()
                .ok()
                .filter(|&id| id == 0 || app.find_by_id(id).is_some())
        })?;

        if id == 0 {
            return super::navigate(app, input, "menu");
        }

        if is_remove {
            app.remove_by_id(id);
            return super::display(self, app, input);
        }

        let mut profile = file::FileScreen::target(id);
        super::display(&mut profile, app, input)
    }
}
