//! Record reader
//!
//! Deserializes concatenated student and teacher records. Any short read,
//! over-long length prefix, negative count or invalid UTF-8 is reported as
//! corruption; decoding never returns a partial collection.

use std::io::Cursor;
use std::io::Read;

use crate::error::{GradebookError, Result};
use crate::model::{Grade, Student, Teacher, Timestamp};

/// LEB128 length prefixes longer than this cannot encode a u32
const MAX_LEN_PREFIX_BYTES: u32 = 5;

/// Reads records from an in-memory byte stream
pub struct RecordReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> RecordReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    /// Whether the stream position has reached the total length
    pub fn is_at_end(&self) -> bool {
        self.cursor.position() >= self.cursor.get_ref().len() as u64
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.cursor.read_exact(buf).map_err(|_| {
            GradebookError::Corruption(format!(
                "unexpected end of stream at offset {}",
                self.cursor.position()
            ))
        })
    }

    /// Read a string: LEB128 byte-length prefix, then UTF-8 bytes
    pub fn read_str(&mut self) -> Result<String> {
        let mut len: u32 = 0;
        let mut shift = 0u32;
        let mut groups = 0u32;
        loop {
            let mut byte = [0u8; 1];
            self.read_exact(&mut byte)?;
            groups += 1;
            if groups > MAX_LEN_PREFIX_BYTES {
                return Err(GradebookError::Corruption(
                    "string length prefix too long".to_string(),
                ));
            }
            len |= ((byte[0] & 0x7F) as u32) << shift;
            if byte[0] & 0x80 == 0 {
                break;
            }
            shift += 7;
        }

        let remaining = self.cursor.get_ref().len() as u64 - self.cursor.position();
        if len as u64 > remaining {
            return Err(GradebookError::Corruption(format!(
                "string length {} exceeds remaining {} bytes",
                len, remaining
            )));
        }

        let mut bytes = vec![0u8; len as usize];
        self.read_exact(&mut bytes)?;
        String::from_utf8(bytes)
            .map_err(|_| GradebookError::Corruption("string is not valid UTF-8".to_string()))
    }

    /// Read a fixed-width little-endian i32
    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Read a fixed-width little-endian i64
    pub fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    /// Read an element count, rejecting negative values
    fn read_count(&mut self, what: &str) -> Result<usize> {
        let count = self.read_i32()?;
        usize::try_from(count).map_err(|_| {
            GradebookError::Corruption(format!("negative {} count: {}", what, count))
        })
    }

    /// Read one student record
    pub fn read_student(&mut self) -> Result<Student> {
        let mut student = Student {
            full_name: self.read_str()?,
            age: self.read_i32()?,
            year_of_birth: self.read_i32()?,
            group: self.read_str()?,
            login: self.read_str()?,
            password: self.read_str()?,
            grades: Vec::new(),
        };
        let grade_count = self.read_count("grade")?;
        for _ in 0..grade_count {
            student.grades.push(Grade {
                subject: self.read_str()?,
                score: self.read_i32()?,
                date: Timestamp::from_bits(self.read_i64()?),
            });
        }
        Ok(student)
    }

    /// Read one teacher record
    pub fn read_teacher(&mut self) -> Result<Teacher> {
        let mut teacher = Teacher {
            full_name: self.read_str()?,
            year_of_birth: self.read_i32()?,
            group: self.read_str()?,
            login: self.read_str()?,
            password: self.read_str()?,
            subjects: Vec::new(),
        };
        let subject_count = self.read_count("subject")?;
        for _ in 0..subject_count {
            teacher.subjects.push(self.read_str()?);
        }
        Ok(teacher)
    }
}

/// Decode concatenated student records until the stream is exhausted
///
/// A zero-length stream yields an empty collection.
pub fn decode_students(bytes: &[u8]) -> Result<Vec<Student>> {
    let mut reader = RecordReader::new(bytes);
    let mut students = Vec::new();
    while !reader.is_at_end() {
        students.push(reader.read_student()?);
    }
    Ok(students)
}

/// Decode concatenated teacher records until the stream is exhausted
pub fn decode_teachers(bytes: &[u8]) -> Result<Vec<Teacher>> {
    let mut reader = RecordReader::new(bytes);
    let mut teachers = Vec::new();
    while !reader.is_at_end() {
        teachers.push(reader.read_teacher()?);
    }
    Ok(teachers)
}
