//! Record writer
//!
//! Serializes students and teachers to the length-prefixed binary layout.
//! The encoder only works with fully-populated records — every field is
//! mandatory and written unconditionally.

use std::io::Write;

use crate::error::Result;
use crate::model::{Student, Teacher};

/// Writes records to an underlying byte sink
pub struct RecordWriter<W: Write> {
    inner: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write a string: LEB128 byte-length prefix, then UTF-8 bytes
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        let mut len = value.len() as u32;
        loop {
            let group = (len & 0x7F) as u8;
            len >>= 7;
            if len == 0 {
                self.inner.write_all(&[group])?;
                break;
            }
            self.inner.write_all(&[group | 0x80])?;
        }
        self.inner.write_all(value.as_bytes())?;
        Ok(())
    }

    /// Write a fixed-width little-endian i32
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    /// Write a fixed-width little-endian i64
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    /// Write one student record
    pub fn write_student(&mut self, student: &Student) -> Result<()> {
        self.write_str(&student.full_name)?;
        self.write_i32(student.age)?;
        self.write_i32(student.year_of_birth)?;
        self.write_str(&student.group)?;
        self.write_str(&student.login)?;
        self.write_str(&student.password)?;
        self.write_i32(student.grades.len() as i32)?;
        for grade in &student.grades {
            self.write_str(&grade.subject)?;
            self.write_i32(grade.score)?;
            self.write_i64(grade.date.to_bits())?;
        }
        Ok(())
    }

    /// Write one teacher record
    pub fn write_teacher(&mut self, teacher: &Teacher) -> Result<()> {
        self.write_str(&teacher.full_name)?;
        self.write_i32(teacher.year_of_birth)?;
        self.write_str(&teacher.group)?;
        self.write_str(&teacher.login)?;
        self.write_str(&teacher.password)?;
        self.write_i32(teacher.subjects.len() as i32)?;
        for subject in &teacher.subjects {
            self.write_str(subject)?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying sink
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Encode a whole student collection as concatenated records
///
/// An empty collection encodes as a zero-length stream.
pub fn encode_students(students: &[Student]) -> Result<Vec<u8>> {
    let mut writer = RecordWriter::new(Vec::new());
    for student in students {
        writer.write_student(student)?;
    }
    writer.into_inner()
}

/// Encode a whole teacher collection as concatenated records
pub fn encode_teachers(teachers: &[Teacher]) -> Result<Vec<u8>> {
    let mut writer = RecordWriter::new(Vec::new());
    for teacher in teachers {
        writer.write_teacher(teacher)?;
    }
    writer.into_inner()
}
