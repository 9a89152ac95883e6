//! Flat-file record store: one text file per employee, named by id.

use crate::employee::Employee;
use crate::perms;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "employees";

/// Seed credentials written on very first run so an empty store is reachable.
pub const SEED_USERNAME: &str = "testing";
pub const SEED_PASSWORD: &str = "password";

pub struct RecordStore {
    dir: PathBuf,
}

/// Result of scanning the record directory at startup.
pub struct Loaded {
    pub employees: Vec<Employee>,
    /// Highest numeric filename stem seen; 0 when the directory is empty.
    pub max_id: u32,
    /// Files that could not be read or carry a non-numeric name, with the
    /// reason. These are diagnostics, never fatal.
    pub issues: Vec<(PathBuf, String)>,
}

impl RecordStore {
    /// Opens the store, creating the directory on first run. A fresh
    /// directory is seeded with one full-permission record (id 1) so the
    /// first login is possible. Returns whether seeding happened.
    pub fn open(dir: &Path) -> Result<(Self, bool)> {
        let store = Self {
            dir: dir.to_path_buf(),
        };

        if dir.exists() {
            return Ok((store, false));
        }

        fs::create_dir_all(dir)
            .with_context(|| format!("creating record directory {}", dir.display()))?;

        let mut seed = Employee::new(1, "Admin", "Account", SEED_USERNAME, SEED_PASSWORD, perms::ALL);
        store.write(&mut seed)?;

        Ok((store, true))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: u32) -> PathBuf {
        self.dir.join(format!("{}.txt", id))
    }

    /// Reads every file in the directory, one employee per file. Parsing is
    /// best-effort per file: a short line yields a partially-populated
    /// record that is still admitted.
    pub fn load_all(&self) -> Result<Loaded> {
        let mut loaded = Loaded {
            employees: Vec::new(),
            max_id: 0,
            issues: Vec::new(),
        };

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("reading record directory {}", self.dir.display()))?
        {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            match path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u32>().ok())
            {
                Some(id) => loaded.max_id = loaded.max_id.max(id),
                None => loaded
                    .issues
                    .push((path.clone(), "non-numeric file name".to_string())),
            }

            let contents = match fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    loaded.issues.push((path, e.to_string()));
                    continue;
                }
            };

            let mut employee = Employee::from_record_line(contents.lines().next().unwrap_or(""));
            employee.file = Some(path);
            loaded.employees.push(employee);
        }

        Ok(loaded)
    }

    /// Writes the whole record, truncating any existing content, and points
    /// the entity's back-reference at the file.
    pub fn write(&self, employee: &mut Employee) -> Result<()> {
        let path = self.record_path(employee.id);
        fs::write(&path, format!("{}\n", employee.to_record_line()))
            .with_context(|| format!("writing record {}", path.display()))?;
        employee.file = Some(path);
        Ok(())
    }

    /// Deletes the backing file.
    pub fn remove(&self, employee: &Employee) -> Result<()> {
        let path = match &employee.file {
            Some(p) => p.clone(),
            None => self.record_path(employee.id),
        };
        fs::remove_file(&path).with_context(|| format!("removing record {}", path.display()))
    }
}
