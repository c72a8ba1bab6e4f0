//! Domain model
//!
//! The three aggregates persisted in the binary data files. Every field is
//! mandatory; records are never written with missing values, so each type
//! has a zero/empty default for construction.

mod timestamp;

pub use timestamp::{Timestamp, TimestampKind};

/// A single grade entry in a student's journal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grade {
    /// Subject the grade was given for
    pub subject: String,

    /// Score in the 1-5 range. The range is enforced at input time, not by
    /// the codec.
    pub score: i32,

    /// When the grade was entered or last edited (local time)
    pub date: Timestamp,
}

/// A student record
///
/// Grades are kept in insertion order (chronological entry order, not
/// necessarily date-sorted). Multiple grades for the same subject may
/// coexist; edit and remove act on the first match only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Student {
    pub full_name: String,
    pub age: i32,
    pub year_of_birth: i32,
    /// Study group, e.g. "CS50-3-22"
    pub group: String,
    pub login: String,
    /// Plaintext, matching the stored-format contract
    pub password: String,
    pub grades: Vec<Grade>,
}

/// A teacher record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Teacher {
    pub full_name: String,
    pub year_of_birth: i32,
    /// The single group this teacher is assigned to. A teacher only sees and
    /// modifies students whose group equals theirs.
    pub group: String,
    pub login: String,
    pub password: String,
    /// Subjects taught, as an ordered list (duplicates are not prevented)
    pub subjects: Vec<String>,
}
