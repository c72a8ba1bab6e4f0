//! Authentication and role resolution
//!
//! Resolution order is fixed: students first, then teachers, then the
//! reserved administrator literal from the configuration. First match wins.
//! Login comparison is case-sensitive; duplicate logins across the combined
//! namespace are not rejected, so a duplicated login resolves to whichever
//! record matches first.

use crate::config::Config;
use crate::store::Store;

/// The three access roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

/// Resolve a login/password pair to a role, or `None` on failure
pub fn authenticate(store: &Store, config: &Config, login: &str, password: &str) -> Option<Role> {
    let student = store
        .students()
        .iter()
        .find(|s| s.login == login && verify_password(&s.password, password));
    if student.is_some() {
        return Some(Role::Student);
    }

    let teacher = store
        .teachers()
        .iter()
        .find(|t| t.login == login && verify_password(&t.password, password));
    if teacher.is_some() {
        return Some(Role::Teacher);
    }

    if login == config.admin_login && verify_password(&config.admin_password, password) {
        return Some(Role::Admin);
    }

    None
}

/// The single credential-comparison seam
///
/// Plaintext equality today; a hardening pass (hashing) only needs to touch
/// this function.
fn verify_password(stored: &str, supplied: &str) -> bool {
    stored == supplied
}
