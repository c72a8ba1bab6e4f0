//! Demo data seeding
//!
//! Populates the store with one demo student and one demo teacher the first
//! time the program runs against an empty data directory. Runs before the
//! login loop; both files are persisted through the usual full-rewrite path.

use tracing::info;

use crate::error::Result;
use crate::model::{Student, Teacher, Timestamp};
use crate::store::Store;

/// Seed demo records if the store holds no students
pub fn seed_if_empty(store: &mut Store) -> Result<()> {
    if !store.students().is_empty() {
        return Ok(());
    }

    info!("empty store, seeding demo data");

    let student = Student {
        full_name: "Ivan Mosin".to_string(),
        age: 18,
        year_of_birth: 2006,
        group: "CS50-3-22".to_string(),
        login: "mofix".to_string(),
        password: "123".to_string(),
        grades: Vec::new(),
    };
    store.add_student(student)?;
    store.add_grade("mofix", "Mathematics", 5, Timestamp::now())?;
    store.add_grade("mofix", "Programming", 4, Timestamp::now())?;

    let teacher = Teacher {
        full_name: "Daria Yushina".to_string(),
        year_of_birth: 1979,
        group: "CS50-3-22".to_string(),
        login: "teach".to_string(),
        password: "123".to_string(),
        subjects: vec!["Programming".to_string(), "Mathematics".to_string()],
    };
    store.add_teacher(teacher)?;

    Ok(())
}
