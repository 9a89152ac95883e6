//! The application controller: owns the employee collection, the logged-in
//! slot, and the id counter. Screens call back into this for every query or
//! mutation.

use crate::audit::Audit;
use crate::employee::Employee;
use crate::perms;
use crate::store::{Loaded, RecordStore};
use anyhow::Result;
use std::path::Path;

pub struct App {
    pub employees: Vec<Employee>,
    /// Session state: a copy of the matched record, set by `login`.
    logged_in: Option<Employee>,
    /// Highest id seen so far; allocation is `current_id + 1`.
    current_id: u32,
    store: RecordStore,
    audit: Audit,
    clear_screens: bool,
}

impl App {
    /// Opens (and on first run seeds) the store, loads every record, and
    /// seeds the id counter from the highest numeric filename stem.
    pub fn bootstrap(data_dir: &Path, mut audit: Audit) -> Result<Self> {
        let (store, seeded) = RecordStore::open(data_dir)?;
        if seeded {
            let _ = audit.store_seeded(1);
        }

        let Loaded {
            employees,
            max_id,
            issues,
        } = store.load_all()?;

        for (path, reason) in &issues {
            eprintln!("warning: skipping id scan for {}: {}", path.display(), reason);
            let _ = audit.bad_record_file(path, reason);
        }

        Ok(Self {
            employees,
            logged_in: None,
            current_id: max_id.max(1),
            store,
            audit,
            clear_screens: true,
        })
    }

    pub fn clear_screens(&self) -> bool {
        self.clear_screens
    }

    pub fn set_clear_screens(&mut self, on: bool) {
        self.clear_screens = on;
    }

    /// Linear scan; the first credential match is copied into the logged-in
    /// slot. Callers re-prompt on `false` — there is no lockout.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let matched = self
            .employees
            .iter()
            .find(|e| e.is_valid_login(username, password))
            .cloned();

        match matched {
            Some(employee) => {
                let _ = self.audit.login_ok(employee.id, &employee.username);
                self.logged_in = Some(employee);
                true
            }
            None => {
                let _ = self.audit.login_failed(username);
                false
            }
        }
    }

    pub fn logged_in(&self) -> Option<&Employee> {
        self.logged_in.as_ref()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    /// Deletes the record's file and collection slot. Self-removal is
    /// forbidden and a no-op, as is an unknown id.
    pub fn remove_by_id(&mut self, id: u32) {
        if self.logged_in.as_ref().is_some_and(|e| e.id == id) {
            return;
        }

        if let Some(pos) = self.employees.iter().position(|e| e.id == id) {
            let employee = self.employees.remove(pos);
            if let Err(e) = self.store.remove(&employee) {
                eprintln!("warning: {}", e);
            }
            let _ = self.audit.employee_removed(employee.id, &employee.username);
        }
    }

    /// Case-insensitive substring match on first name, last name, or
    /// username; original order preserved.
    pub fn search(&self, query: &str) -> Vec<Employee> {
        let needle = query.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                [&e.first_name, &e.last_name, &e.username]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// True iff no employee other than `skip` holds `username` exactly.
    pub fn unique_username(&self, username: &str, skip: Option<u32>) -> bool {
        !self
            .employees
            .iter()
            .any(|e| e.username == username && Some(e.id) != skip)
    }

    /// Allocates the next id, writes the record, and appends it to the
    /// collection. A failed write is reported to stderr and the record is
    /// still admitted; mid-session i/o failure never ends the session.
    pub fn add_employee(
        &mut self,
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str,
        is_hr: bool,
        is_management: bool,
    ) -> u32 {
        self.current_id += 1;
        let mut employee = Employee::new(
            self.current_id,
            first_name,
            last_name,
            username,
            password,
            perms::compose(is_hr, is_management),
        );
        if let Err(e) = self.store.write(&mut employee) {
            eprintln!("warning: {}", e);
        }
        let _ = self.audit.employee_created(employee.id, &employee.username);
        self.employees.push(employee);
        self.current_id
    }

    /// Rewrites the record file for `id` after in-place edits. Unknown ids
    /// are a no-op; a failed write is soft-reported like `add_employee`.
    pub fn persist(&mut self, id: u32) {
        let Some(pos) = self.employees.iter().position(|e| e.id == id) else {
            return;
        };
        if let Err(e) = self.store.write(&mut self.employees[pos]) {
            eprintln!("warning: {}", e);
            return;
        }
        let _ = self.audit.employee_updated(id);
    }
}
