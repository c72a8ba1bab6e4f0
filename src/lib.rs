//! # Gradebook
//!
//! A single-process, console-driven school grade management tool with:
//! - Length-prefixed binary record format for students and teachers
//! - Full-rewrite flat-file persistence (two files, rewritten on every mutation)
//! - Role-based access (student, teacher, administrator)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Console Menus                            │
//! │            (login loop + role-scoped actions)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Auth                                  │
//! │         (students → teachers → admin literal)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!               ┌───────▼───────┐
//!               │     Store     │
//!               │  (in-memory   │
//!               │  collections) │
//!               └───────┬───────┘
//!                       │
//!               ┌───────▼───────┐
//!               │     Codec     │
//!               │ (students.bin │
//!               │  teachers.bin)│
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod codec;
pub mod store;
pub mod auth;
pub mod seed;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GradebookError, Result};
pub use config::Config;
pub use model::{Grade, Student, Teacher, Timestamp};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Gradebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
