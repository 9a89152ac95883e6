//! The in-memory employee record.

use std::path::PathBuf;

/// One employee record. Credential and permission fields are private so that
/// every comparison goes through the methods below; `is_valid_login` is the
/// single seam a future hashing pass would touch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    password: String,
    permissions: u16,
    /// Backing file this record was loaded from or last written to.
    pub file: Option<PathBuf>,
}

impl Employee {
    pub fn new(
        id: u32,
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str,
        permissions: u16,
    ) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            permissions,
            file: None,
        }
    }

    /// Exact match on both fields. Credentials are plain text by design.
    pub fn is_valid_login(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// True when at least one bit of `mask` is set on this employee.
    pub fn has_permission(&self, mask: u16) -> bool {
        self.permissions & mask != 0
    }

    pub fn permissions(&self) -> u16 {
        self.permissions
    }

    pub fn update_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn update_permissions(&mut self, permissions: u16) {
        self.permissions = permissions;
    }

    /// The on-disk line: `id username firstName lastName password permissions`.
    pub fn to_record_line(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id, self.username, self.first_name, self.last_name, self.password, self.permissions
        )
    }

    /// Best-effort parse of a record line. A short or malformed line leaves
    /// the remaining fields at their defaults; it never fails.
    pub fn from_record_line(line: &str) -> Self {
        let mut fields = line.split_whitespace();
        let mut employee = Employee::default();
        if let Some(t) = fields.next() {
            employee.id = t.parse().unwrap_or(0);
        }
        if let Some(t) = fields.next() {
            employee.username = t.to_string();
        }
        if let Some(t) = fields.next() {
            employee.first_name = t.to_string();
        }
        if let Some(t) = fields.next() {
            employee.last_name = t.to_string();
        }
        if let Some(t) = fields.next() {
            employee.password = t.to_string();
        }
        if let Some(t) = fields.next() {
            employee.permissions = t.parse().unwrap_or(0);
        }
        employee
    }

    /// One-line listing form: `id: First Last, username`.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} {}, {}",
            self.id, self.first_name, self.last_name, self.username
        )
    }

    /// Multi-line profile form.
    pub fn detail(&self) -> String {
        format!(
            "ID: {}\nName: {} {}\nUsername: {}",
            self.id, self.first_name, self.last_name, self.username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perms;

    fn sample() -> Employee {
        Employee::new(7, "John", "Moore", "jmoore", "secret", perms::MANAGEMENT | perms::GENERAL)
    }

    #[test]
    fn test_valid_login_is_exact_match() {
        let e = sample();
        assert!(e.is_valid_login("jmoore", "secret"));
        assert!(!e.is_valid_login("jmoore", "Secret"));
        assert!(!e.is_valid_login("JMOORE", "secret"));
        assert!(!e.is_valid_login("jmoore", ""));
    }

    #[test]
    fn test_has_permission_is_any_bit() {
        let general_only = Employee::new(1, "a", "b", "c", "d", perms::GENERAL);
        assert!(general_only.has_permission(perms::GENERAL));
        assert!(!general_only.has_permission(perms::HR));
        assert!(!general_only.has_permission(perms::MANAGEMENT));

        // One bit inside the HR range is enough.
        let partial_hr = Employee::new(2, "a", "b", "c", "d", 4);
        assert!(partial_hr.has_permission(perms::HR));
    }

    #[test]
    fn test_record_line_round_trip() {
        let e = sample();
        let parsed = Employee::from_record_line(&e.to_record_line());
        assert_eq!(parsed, e);
    }

    #[test]
    fn test_short_line_parses_best_effort() {
        let e = Employee::from_record_line("5 bob");
        assert_eq!(e.id, 5);
        assert_eq!(e.username, "bob");
        assert_eq!(e.first_name, "");
        assert_eq!(e.permissions(), 0);
    }

    #[test]
    fn test_garbage_id_defaults_to_zero() {
        let e = Employee::from_record_line("nope bob First Last pw 31");
        assert_eq!(e.id, 0);
        assert_eq!(e.permissions(), 31);
    }

    #[test]
    fn test_display_forms() {
        let e = sample();
        assert_eq!(e.summary(), "7: John Moore, jmoore");
        assert_eq!(e.detail(), "ID: 7\nName: John Moore\nUsername: jmoore");
    }
}
