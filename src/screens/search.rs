//! Search prompt; results are handed to a per-invocation list screen.

use super::{list, Screen};
use crate::app::App;
use crate::input::{self, LineReader};
use anyhow::Result;

pub struct SearchScreen;

impl Screen for SearchScreen {
    fn name(&self) -> &'static str {
        "search"
    }

    fn title(&self, _app: &App) -> String {
        "Search Employees".to_string()
    }

    fn body(&self) -> Option<&'static str> {
        Some("***  Insert Search Query by names, or username to Search  ***")
    }

    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
        let query = input::prompt(input, "Query")?;
        let results = app.search(&query);

        let mut result_list = list::ListScreen::search_results(&query, results);
        super::display(&mut result_list, app, input)
    }
}
