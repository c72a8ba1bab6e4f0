//! Console menus
//!
//! The interactive text interface: login loop plus role-scoped numbered
//! menus. This layer owns all prompting and input validation; every state
//! change goes through the [`Store`].

use std::io::{self, Write};

use crate::auth::{authenticate, Role};
use crate::config::Config;
use crate::error::{GradebookError, Result};
use crate::model::{Teacher, Timestamp};
use crate::store::Store;

/// Run the outer login loop
///
/// Loops indefinitely: each successful login enters the role's menu, and
/// exiting that menu returns here. Failed logins re-prompt.
pub fn run(store: &mut Store, config: &Config) -> Result<()> {
    loop {
        let login = prompt("Enter login:")?;
        let password = prompt("Enter password:")?;

        match authenticate(store, config, &login, &password) {
            Some(Role::Student) => student_menu(store, &login)?,
            Some(Role::Teacher) => teacher_menu(store, &login)?,
            Some(Role::Admin) => admin_menu(store)?,
            None => println!("Invalid login or password. Try again."),
        }
    }
}

// =============================================================================
// Student Menu
// =============================================================================

fn student_menu(store: &Store, login: &str) -> Result<()> {
    let Some(student) = store.find_student_by_login(login) else {
        return Ok(());
    };

    println!("Student menu:");
    println!("Grades:");
    for grade in &student.grades {
        println!(
            "Subject: {}, Score: {}, Date: {}",
            grade.subject, grade.score, grade.date
        );
    }
    pause("Press Enter to return to the main menu.")
}

// =============================================================================
// Teacher Menu
// =============================================================================

fn teacher_menu(store: &mut Store, login: &str) -> Result<()> {
    // Cloned so grade mutations below can borrow the store mutably
    let Some(teacher) = store.find_teacher_by_login(login).cloned() else {
        return Ok(());
    };

    println!("Teacher menu for {}:", teacher.full_name);
    println!("Subjects: {}", teacher.subjects.join(", "));

    loop {
        println!("Choose an action:");
        println!("1. View grade journal");
        println!("2. Add a grade");
        println!("3. Edit a grade");
        println!("4. Remove a grade");
        println!("5. Exit");

        match prompt("")?.as_str() {
            "1" => view_journal(store, &teacher)?,
            "2" => add_grade_flow(store, &teacher)?,
            "3" => edit_grade_flow(store, &teacher)?,
            "4" => remove_grade_flow(store, &teacher)?,
            "5" => return Ok(()),
            _ => println!("Invalid choice. Try again."),
        }
    }
}

/// Print every grade in the teacher's group for the teacher's own subjects
fn view_journal(store: &Store, teacher: &Teacher) -> Result<()> {
    println!("Grade journal:");
    for student in store.students().iter().filter(|s| s.group == teacher.group) {
        println!("Student: {}", student.full_name);
        for grade in student
            .grades
            .iter()
            .filter(|g| teacher.subjects.contains(&g.subject))
        {
            println!(
                "  Subject: {}, Score: {}, Date: {}",
                grade.subject, grade.score, grade.date
            );
        }
    }
    pause("Press Enter to return to the teacher menu.")
}

fn add_grade_flow(store: &mut Store, teacher: &Teacher) -> Result<()> {
    let Some(login) = resolve_student(store, teacher, "Enter the student's full name:")? else {
        return Ok(());
    };

    let subject = prompt("Enter the subject:")?;
    if !teacher.subjects.contains(&subject) {
        println!("You cannot grade this subject.");
        return Ok(());
    }

    let score = prompt_score("Enter the score (1-5):")?;
    store.add_grade(&login, &subject, score, Timestamp::now())?;
    println!("Grade recorded.");
    Ok(())
}

fn edit_grade_flow(store: &mut Store, teacher: &Teacher) -> Result<()> {
    let Some(login) = resolve_student(store, teacher, "Enter the student's full name:")? else {
        return Ok(());
    };

    let subject = prompt("Enter the subject:")?;

    // Show the current score before asking for the new one
    let current = store
        .find_student_by_login(&login)
        .and_then(|s| {
            s.grades
                .iter()
                .find(|g| g.subject.to_lowercase() == subject.to_lowercase())
        })
        .map(|g| g.score);
    let Some(current) = current else {
        println!("No grade found for that subject.");
        return Ok(());
    };

    println!("Current score: {}.", current);
    let new_score = prompt_score("Enter the new score (1-5):")?;
    match store.edit_grade(&login, &subject, new_score) {
        Ok(()) => println!("Grade updated."),
        Err(GradebookError::GradeNotFound) => println!("No grade found for that subject."),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn remove_grade_flow(store: &mut Store, teacher: &Teacher) -> Result<()> {
    let Some(login) = resolve_student(store, teacher, "Enter the student's full name:")? else {
        return Ok(());
    };

    let subject = prompt("Enter the subject:")?;
    match store.remove_grade(&login, &subject) {
        Ok(()) => println!("Grade removed."),
        Err(GradebookError::GradeNotFound) => println!("No grade found for that subject."),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Prompt for a full name and resolve it to a login within the teacher's
/// group; prints the not-found message itself
fn resolve_student(store: &Store, teacher: &Teacher, msg: &str) -> Result<Option<String>> {
    let name = prompt(msg)?;
    match store.find_student_by_name(&name, &teacher.group) {
        Some(student) => Ok(Some(student.login.clone())),
        None => {
            println!("Student not found or not in your group.");
            Ok(None)
        }
    }
}

// =============================================================================
// Admin Menu
// =============================================================================

fn admin_menu(store: &Store) -> Result<()> {
    println!("Administrator menu:");

    loop {
        println!("Choose an action:");
        println!("1. List all students");
        println!("2. List all teachers");
        println!("3. Exit");

        match prompt("")?.as_str() {
            "1" => {
                println!("Students:");
                for student in store.students() {
                    println!(
                        "Name: {}, Age: {}, Group: {}",
                        student.full_name, student.age, student.group
                    );
                }
                pause("Press Enter to return to the administrator menu.")?;
            }
            "2" => {
                println!("Teachers:");
                for teacher in store.teachers() {
                    println!(
                        "Name: {}, Subjects: {}, Group: {}",
                        teacher.full_name,
                        teacher.subjects.join(", "),
                        teacher.group
                    );
                }
                pause("Press Enter to return to the administrator menu.")?;
            }
            "3" => return Ok(()),
            _ => println!("Invalid choice. Try again."),
        }
    }
}

// =============================================================================
// Input Helpers
// =============================================================================

/// Print a prompt and read one trimmed line from stdin
fn prompt(msg: &str) -> Result<String> {
    if !msg.is_empty() {
        println!("{}", msg);
    }
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read a score, re-prompting indefinitely until it parses into 1-5
fn prompt_score(msg: &str) -> Result<i32> {
    println!("{}", msg);
    loop {
        let line = prompt("")?;
        match line.trim().parse::<i32>() {
            Ok(score) if (1..=5).contains(&score) => return Ok(score),
            _ => println!("Invalid score. Try again."),
        }
    }
}

/// Wait for the user before returning to the calling menu
fn pause(msg: &str) -> Result<()> {
    println!("{}", msg);
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
