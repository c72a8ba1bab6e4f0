//! Configuration for Gradebook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Gradebook instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the two data files:
    ///   {data_dir}/
    ///     ├── students.bin
    ///     └── teachers.bin
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Administrator Credentials
    // -------------------------------------------------------------------------
    /// Reserved administrator login. Kept out of the data files; the role
    /// resolution algorithm checks it after students and teachers.
    pub admin_login: String,

    /// Administrator password (plaintext, matching the stored-format contract
    /// for student and teacher passwords)
    pub admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./gradebook_data"),
            admin_login: "admin".to_string(),
            admin_password: "123".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (holds students.bin and teachers.bin)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the administrator login
    pub fn admin_login(mut self, login: impl Into<String>) -> Self {
        self.config.admin_login = login.into();
        self
    }

    /// Set the administrator password
    pub fn admin_password(mut self, password: impl Into<String>) -> Self {
        self.config.admin_password = password.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
