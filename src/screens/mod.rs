//! Screen framework.
//!
//! Every screen shares one lifecycle: clear the terminal, print the bordered
//! header, print the body, then run the interactive content. Navigation is a
//! nested call — a screen blocks inside [`display`] until the screen it
//! handed off to returns, and the process exits by unwinding the whole
//! stack (menu choice 0, or the input stream closing).

pub mod add;
pub mod edit;
pub mod file;
pub mod header;
pub mod list;
pub mod login;
pub mod menu;
pub mod search;

use crate::app::App;
use crate::input::LineReader;
use anyhow::Result;
use thiserror::Error;

pub const HEADER_WIDTH: usize = 44;

/// Navigation to a name with no registered screen. The original silently
/// ignored this; here it is surfaced so a bad transition cannot pass
/// unnoticed.
#[derive(Debug, Error)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

pub trait Screen {
    fn name(&self) -> &'static str;
    fn title(&self, app: &App) -> String;
    fn body(&self) -> Option<&'static str> {
        None
    }
    fn interact(&mut self, app: &mut App, input: &mut dyn LineReader) -> Result<()>;
}

/// The uniform lifecycle, in fixed order.
pub fn display(screen: &mut dyn Screen, app: &mut App, input: &mut dyn LineReader) -> Result<()> {
    if app.clear_screens() {
        clear_screen();
    }
    print!("{}", header::render(&screen.title(app), HEADER_WIDTH));
    if let Some(body) = screen.body() {
        println!("{}\n", body);
    }
    screen.interact(app, input)
}

/// Builds one of the long-lived, parameterless screens by name. Screens that
/// carry per-invocation payload (remove-mode list, search results, a
/// specific profile, edit) are constructed directly by their callers.
fn build(name: &str) -> Option<Box<dyn Screen>> {
    match name {
        "login" => Some(Box::new(login::LoginScreen)),
        "menu" => Some(Box::new(menu::MenuScreen::new())),
        "list" => Some(Box::new(list::ListScreen::all())),
        "search" => Some(Box::new(search::SearchScreen)),
        "add" => Some(Box::new(add::AddScreen)),
        "file" => Some(Box::new(file::FileScreen::own())),
        _ => None,
    }
}

/// Looks up `name` in the registry and displays it.
pub fn navigate(app: &mut App, input: &mut dyn LineReader, name: &str) -> Result<()> {
    let mut screen = build(name).ok_or_else(|| UnknownScreen(name.to_string()))?;
    display(screen.as_mut(), app, input)
}

fn clear_screen() {
    // ANSI clear + cursor home.
    print!("\x1b[2J\x1b[1;1H");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Audit;
    use crate::test_utils::ScriptedInput;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn scripted_app(tmp: &tempfile::TempDir) -> (App, PathBuf) {
        let data_dir = tmp.path().join("employees");
        let mut app = App::bootstrap(&data_dir, Audit::disabled()).unwrap();
        app.set_clear_screens(false);
        (app, data_dir)
    }

    #[test]
    fn test_unknown_screen_is_an_error() {
        let tmp = tempdir().unwrap();
        let (mut app, _) = scripted_app(&tmp);
        let mut input = ScriptedInput::new(&[]);

        let err = navigate(&mut app, &mut input, "bogus").unwrap_err();
        let unknown = err.downcast_ref::<UnknownScreen>().unwrap();
        assert_eq!(unknown.0, "bogus");
    }

    #[test]
    fn test_registry_covers_long_lived_screens() {
        for name in ["login", "menu", "list", "search", "add", "file"] {
            assert!(build(name).is_some(), "missing screen {}", name);
        }
    }

    // Full first-run scenario: empty directory, seeded login, add an
    // employee, land back on the menu, exit.
    #[test]
    fn test_first_run_login_and_add() {
        let tmp = tempdir().unwrap();
        let (mut app, data_dir) = scripted_app(&tmp);

        let mut input = ScriptedInput::new(&[
            "testing", "password", // login
            "3",                   // menu: Add Employee
            "Jane", "Doe", "jdoe", "hunter2", "0", "1", // add prompts
            "0",                   // back at menu: exit
        ]);
        navigate(&mut app, &mut input, "login").unwrap();

        assert_eq!(input.remaining(), 0);
        let record = std::fs::read_to_string(data_dir.join("2.txt")).unwrap();
        assert_eq!(record, "2 jdoe Jane Doe hunter2 3\n");
        assert_eq!(app.employees.len(), 2);
    }

    // Interior whitespace in any writable field would shift the
    // space-delimited record on reload; the add prompts must re-prompt
    // until every field is a single token.
    #[test]
    fn test_add_rejects_spaced_fields_and_record_survives_reload() {
        let tmp = tempdir().unwrap();
        let (mut app, data_dir) = scripted_app(&tmp);

        let mut input = ScriptedInput::new(&[
            "testing", "password",
            "3",                 // menu: Add Employee
            "Mary Ann", "MaryAnn", // first name re-prompted
            "Doe",
            "m doe", "mdoe",     // username re-prompted
            "p w", "pw",         // password re-prompted
            "0", "0",
            "0",                 // exit at menu
        ]);
        navigate(&mut app, &mut input, "login").unwrap();

        let record = std::fs::read_to_string(data_dir.join("2.txt")).unwrap();
        assert_eq!(record, "2 mdoe MaryAnn Doe pw 1\n");

        // The reloaded record still carries the credential intact.
        let mut reloaded = App::bootstrap(&data_dir, Audit::disabled()).unwrap();
        assert!(reloaded.login("mdoe", "pw"));
        assert_eq!(reloaded.logged_in().unwrap().first_name, "MaryAnn");
    }

    #[test]
    fn test_retry_on_bad_credentials_then_exit() {
        let tmp = tempdir().unwrap();
        let (mut app, _) = scripted_app(&tmp);

        let mut input = ScriptedInput::new(&[
            "testing", "nope",     // rejected
            "testing", "password", // accepted
            "0",                   // exit at menu
        ]);
        navigate(&mut app, &mut input, "login").unwrap();
        assert_eq!(app.logged_in().unwrap().id, 1);
    }

    #[test]
    fn test_remove_flow_deletes_record_and_returns_to_menu() {
        let tmp = tempdir().unwrap();
        let (mut app, data_dir) = scripted_app(&tmp);
        app.add_employee("Jane", "Doe", "jdoe", "pw", false, false);

        let mut input = ScriptedInput::new(&[
            "testing", "password",
            "4", // menu: Remove Employee
            "2", // remove id 2, list redisplays
            "0", // back to menu
            "0", // exit
        ]);
        navigate(&mut app, &mut input, "login").unwrap();

        assert!(!data_dir.join("2.txt").exists());
        assert_eq!(app.employees.len(), 1);
    }

    #[test]
    fn test_edit_flow_updates_fields_and_permissions() {
        let tmp = tempdir().unwrap();
        let (mut app, data_dir) = scripted_app(&tmp);
        app.add_employee("Jane", "Doe", "jdoe", "hunter2", false, true);

        let mut input = ScriptedInput::new(&[
            "testing", "password",
            "1",       // menu: View Employees
            "2",       // open id 2
            "1",       // edit
            "Janet",   // new first name
            "", "", "", // keep last name, username, password
            "1", "1",  // now HR and management
            "0",       // exit at menu
        ]);
        navigate(&mut app, &mut input, "login").unwrap();

        let edited = app.find_by_id(2).unwrap();
        assert_eq!(edited.first_name, "Janet");
        assert_eq!(edited.permissions(), 31);
        let record = std::fs::read_to_string(data_dir.join("2.txt")).unwrap();
        assert_eq!(record, "2 jdoe Janet Doe hunter2 31\n");
    }

    #[test]
    fn test_search_flow_lists_matches_then_opens_profile() {
        let tmp = tempdir().unwrap();
        let (mut app, _) = scripted_app(&tmp);
        app.add_employee("John", "Moore", "jm", "pw", false, false);
        app.add_employee("Ann", "Smith", "moosecamp", "pw", false, false);

        let mut input = ScriptedInput::new(&[
            "testing", "password",
            "2",   // menu: Search Employees
            "MOO", // query
            "3",   // open the moosecamp profile from the results
            "0",   // profile: back to menu
            "0",   // exit
        ]);
        navigate(&mut app, &mut input, "login").unwrap();
        assert_eq!(input.remaining(), 0);
    }
}
