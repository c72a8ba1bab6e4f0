//! Store
//!
//! Holds the authoritative in-memory collections of students and teachers.
//!
//! ## Responsibilities
//! - Load both data files once at startup
//! - Serve lookups for the menu and auth layers
//! - Apply grade mutations and persist immediately
//!
//! ## Persistence Strategy
//! Full rewrite: every mutation re-encodes the affected collection and
//! truncates/rewrites its file before the operation reports success. There
//! is no write-ahead log, no temp-file swap and no batching; a crash
//! mid-write corrupts the file. Concurrent multi-process access is
//! unsupported (last writer wins at the file level).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{decode_students, decode_teachers, encode_students, encode_teachers};
use crate::config::Config;
use crate::error::{GradebookError, Result};
use crate::model::{Grade, Student, Teacher, Timestamp};

/// The in-memory authoritative collections plus load/save operations
#[derive(Debug)]
pub struct Store {
    students_path: PathBuf,
    teachers_path: PathBuf,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
}

impl Store {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const STUDENTS_FILENAME: &'static str = "students.bin";
    const TEACHERS_FILENAME: &'static str = "teachers.bin";

    /// Open the store, loading both files
    ///
    /// On startup:
    /// 1. Create the data directory if it doesn't exist
    /// 2. Read students.bin and teachers.bin through the codec
    /// 3. An absent file is an empty dataset; a malformed file is fatal
    pub fn open(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let students_path = config.data_dir.join(Self::STUDENTS_FILENAME);
        let teachers_path = config.data_dir.join(Self::TEACHERS_FILENAME);

        let students = Self::load_file(&students_path, decode_students)?;
        let teachers = Self::load_file(&teachers_path, decode_teachers)?;

        debug!(
            students = students.len(),
            teachers = teachers.len(),
            "store loaded"
        );

        Ok(Self {
            students_path,
            teachers_path,
            students,
            teachers,
        })
    }

    /// Read and decode one file; absent file == empty collection
    fn load_file<T>(path: &Path, decode: fn(&[u8]) -> Result<Vec<T>>) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(path)?;
        decode(&bytes).map_err(|e| match e {
            GradebookError::Corruption(msg) => {
                GradebookError::Corruption(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Find a student by login (linear scan, first match, case-sensitive)
    pub fn find_student_by_login(&self, login: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.login == login)
    }

    /// Find a teacher by login (linear scan, first match, case-sensitive)
    pub fn find_teacher_by_login(&self, login: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.login == login)
    }

    /// Find a student by full name within a group
    ///
    /// Name comparison is case-insensitive, group comparison exact; first
    /// match wins.
    pub fn find_student_by_name(&self, full_name: &str, group: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.group == group && eq_ignore_case(&s.full_name, full_name))
    }

    /// All students, in file order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All teachers, in file order
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    // =========================================================================
    // Grade Mutations
    // =========================================================================
    // Every mutation persists the whole student collection before returning.

    /// Append a grade to a student's journal
    pub fn add_grade(
        &mut self,
        login: &str,
        subject: &str,
        score: i32,
        date: Timestamp,
    ) -> Result<()> {
        let student = self.student_by_login_mut(login)?;
        student.grades.push(Grade {
            subject: subject.to_string(),
            score,
            date,
        });
        debug!(login, subject, score, "grade added");
        self.save_students()
    }

    /// Rewrite the score of the first case-insensitive subject match
    ///
    /// Resets the grade's date to now. Later grades for the same subject are
    /// left untouched.
    pub fn edit_grade(&mut self, login: &str, subject: &str, new_score: i32) -> Result<()> {
        let student = self.student_by_login_mut(login)?;
        let grade = student
            .grades
            .iter_mut()
            .find(|g| eq_ignore_case(&g.subject, subject))
            .ok_or(GradebookError::GradeNotFound)?;
        grade.score = new_score;
        grade.date = Timestamp::now();
        debug!(login, subject, new_score, "grade edited");
        self.save_students()
    }

    /// Remove the first case-insensitive subject match
    pub fn remove_grade(&mut self, login: &str, subject: &str) -> Result<()> {
        let student = self.student_by_login_mut(login)?;
        let position = student
            .grades
            .iter()
            .position(|g| eq_ignore_case(&g.subject, subject))
            .ok_or(GradebookError::GradeNotFound)?;
        student.grades.remove(position);
        debug!(login, subject, "grade removed");
        self.save_students()
    }

    // =========================================================================
    // Collection Mutations (seeding)
    // =========================================================================

    /// Add a student and persist the student collection
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        self.students.push(student);
        self.save_students()
    }

    /// Add a teacher and persist the teacher collection
    ///
    /// Follows the same full-rewrite pattern as student mutations.
    pub fn add_teacher(&mut self, teacher: Teacher) -> Result<()> {
        self.teachers.push(teacher);
        self.save_teachers()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Re-encode and rewrite students.bin wholesale
    pub fn save_students(&self) -> Result<()> {
        let bytes = encode_students(&self.students)?;
        Self::write_file(&self.students_path, &bytes)
    }

    /// Re-encode and rewrite teachers.bin wholesale
    pub fn save_teachers(&self) -> Result<()> {
        let bytes = encode_teachers(&self.teachers)?;
        Self::write_file(&self.teachers_path, &bytes)
    }

    /// Create-or-truncate write; the file handle is closed on all exit paths
    fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    fn student_by_login_mut(&mut self, login: &str) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.login == login)
            .ok_or(GradebookError::StudentNotFound)
    }
}

/// Case-insensitive comparison that also covers non-ASCII names
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
