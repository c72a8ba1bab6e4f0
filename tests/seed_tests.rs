//! Seed Tests
//!
//! Tests verify:
//! - An empty store gets one demo student and one demo teacher
//! - Seeding persists both files and never runs twice

use gradebook::{seed::seed_if_empty, Config, Store};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config::builder().data_dir(dir.path()).build()
}

#[test]
fn test_seed_populates_empty_store() {
    let dir = TempDir::new().unwrap();
    let mut store = Store::open(&test_config(&dir)).unwrap();

    seed_if_empty(&mut store).unwrap();

    assert_eq!(store.students().len(), 1);
    assert_eq!(store.teachers().len(), 1);

    let student = &store.students()[0];
    assert_eq!(student.grades.len(), 2);

    // Teacher and student share a group so the demo teacher can grade them
    assert_eq!(student.group, store.teachers()[0].group);
}

#[test]
fn test_seed_persists_both_files() {
    let dir = TempDir::new().unwrap();
    let mut store = Store::open(&test_config(&dir)).unwrap();
    seed_if_empty(&mut store).unwrap();

    let reloaded = Store::open(&test_config(&dir)).unwrap();
    assert_eq!(reloaded.students().len(), 1);
    assert_eq!(reloaded.teachers().len(), 1);
}

#[test]
fn test_seed_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut store = Store::open(&test_config(&dir)).unwrap();
    seed_if_empty(&mut store).unwrap();
    seed_if_empty(&mut store).unwrap();

    assert_eq!(store.students().len(), 1);
    assert_eq!(store.teachers().len(), 1);
}
