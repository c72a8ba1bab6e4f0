//! Codec Tests
//!
//! Tests verify:
//! - Student/Teacher round-trips, including empty and nested collections
//! - Concatenated record framing (no count, no delimiter)
//! - Multi-byte LEB128 string length prefixes
//! - Corruption detection (truncation, bad UTF-8, negative counts)
//! - Timestamp bit-for-bit round-trips

use gradebook::codec::{decode_students, decode_teachers, encode_students, encode_teachers};
use gradebook::{Grade, Student, Teacher, Timestamp};

fn sample_student(login: &str) -> Student {
    Student {
        full_name: "Ivan Mosin".to_string(),
        age: 18,
        year_of_birth: 2006,
        group: "CS50-3-22".to_string(),
        login: login.to_string(),
        password: "123".to_string(),
        grades: vec![
            Grade {
                subject: "Mathematics".to_string(),
                score: 5,
                date: Timestamp::now(),
            },
            Grade {
                subject: "Programming".to_string(),
                score: 4,
                date: Timestamp::now(),
            },
        ],
    }
}

fn sample_teacher(subjects: &[&str]) -> Teacher {
    Teacher {
        full_name: "Daria Yushina".to_string(),
        year_of_birth: 1979,
        group: "CS50-3-22".to_string(),
        login: "teach".to_string(),
        password: "123".to_string(),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
    }
}

// =============================================================================
// Student Round-Trip Tests
// =============================================================================

#[test]
fn test_student_round_trip_with_grades() {
    let student = sample_student("mofix");

    let bytes = encode_students(std::slice::from_ref(&student)).unwrap();
    let decoded = decode_students(&bytes).unwrap();

    assert_eq!(decoded, vec![student]);
}

#[test]
fn test_student_round_trip_zero_grades() {
    let student = Student {
        grades: Vec::new(),
        ..sample_student("mofix")
    };

    let bytes = encode_students(&[student.clone()]).unwrap();
    let decoded = decode_students(&bytes).unwrap();

    assert_eq!(decoded.len(), 1);
    assert!(decoded[0].grades.is_empty());
    assert_eq!(decoded[0], student);
}

#[test]
fn test_student_round_trip_empty_string_fields() {
    let student = Student {
        full_name: String::new(),
        age: 0,
        year_of_birth: 0,
        group: String::new(),
        login: String::new(),
        password: String::new(),
        grades: vec![Grade::default()],
    };

    let bytes = encode_students(&[student.clone()]).unwrap();
    let decoded = decode_students(&bytes).unwrap();

    assert_eq!(decoded, vec![student]);
}

#[test]
fn test_grade_order_preserved_including_duplicate_subjects() {
    let mut student = sample_student("mofix");
    student.grades.push(Grade {
        subject: "Mathematics".to_string(),
        score: 2,
        date: Timestamp::now(),
    });

    let bytes = encode_students(&[student.clone()]).unwrap();
    let decoded = decode_students(&bytes).unwrap();

    let subjects: Vec<&str> = decoded[0].grades.iter().map(|g| g.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Mathematics", "Programming", "Mathematics"]);
    assert_eq!(decoded[0].grades[2].score, 2);
}

// =============================================================================
// Teacher Round-Trip Tests
// =============================================================================

#[test]
fn test_teacher_round_trip_zero_subjects() {
    let teacher = sample_teacher(&[]);

    let bytes = encode_teachers(&[teacher.clone()]).unwrap();
    let decoded = decode_teachers(&bytes).unwrap();

    assert_eq!(decoded, vec![teacher]);
}

#[test]
fn test_teacher_round_trip_one_subject() {
    let teacher = sample_teacher(&["Mathematics"]);

    let bytes = encode_teachers(&[teacher.clone()]).unwrap();
    let decoded = decode_teachers(&bytes).unwrap();

    assert_eq!(decoded, vec![teacher]);
}

#[test]
fn test_teacher_round_trip_many_subjects_with_duplicates() {
    let teacher = sample_teacher(&["Programming", "Mathematics", "Programming"]);

    let bytes = encode_teachers(&[teacher.clone()]).unwrap();
    let decoded = decode_teachers(&bytes).unwrap();

    assert_eq!(decoded[0].subjects, teacher.subjects);
}

// =============================================================================
// Framing Tests
// =============================================================================

#[test]
fn test_concatenation_preserves_count_and_order() {
    let students = vec![
        sample_student("a"),
        sample_student("b"),
        sample_student("c"),
    ];

    let bytes = encode_students(&students).unwrap();
    let decoded = decode_students(&bytes).unwrap();

    assert_eq!(decoded.len(), 3);
    let logins: Vec<&str> = decoded.iter().map(|s| s.login.as_str()).collect();
    assert_eq!(logins, vec!["a", "b", "c"]);
}

#[test]
fn test_empty_stream_decodes_to_empty_collections() {
    assert!(decode_students(&[]).unwrap().is_empty());
    assert!(decode_teachers(&[]).unwrap().is_empty());
}

#[test]
fn test_empty_collections_encode_to_zero_length_streams() {
    assert!(encode_students(&[]).unwrap().is_empty());
    assert!(encode_teachers(&[]).unwrap().is_empty());
}

#[test]
fn test_long_string_uses_multibyte_length_prefix() {
    let student = Student {
        full_name: "x".repeat(200),
        ..sample_student("mofix")
    };

    let bytes = encode_students(&[student.clone()]).unwrap();

    // 200 = 0b11001000 -> LEB128 groups 0xC8, 0x01
    assert_eq!(bytes[0], 0xC8);
    assert_eq!(bytes[1], 0x01);

    let decoded = decode_students(&bytes).unwrap();
    assert_eq!(decoded[0].full_name.len(), 200);
    assert_eq!(decoded, vec![student]);
}

#[test]
fn test_non_ascii_strings_round_trip() {
    let student = Student {
        full_name: "Мосин Иван Алексеевич".to_string(),
        ..sample_student("mofix")
    };

    let bytes = encode_students(&[student.clone()]).unwrap();
    let decoded = decode_students(&bytes).unwrap();

    assert_eq!(decoded[0].full_name, student.full_name);
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_truncated_record_is_corruption() {
    let bytes = encode_students(&[sample_student("mofix")]).unwrap();
    let truncated = &bytes[..bytes.len() - 3];

    let err = decode_students(truncated).unwrap_err();
    assert!(matches!(err, gradebook::GradebookError::Corruption(_)));
}

#[test]
fn test_string_length_past_end_is_corruption() {
    // Claims a 100-byte string but provides only 2 bytes
    let bytes = [100u8, b'h', b'i'];

    let err = decode_students(&bytes).unwrap_err();
    assert!(matches!(err, gradebook::GradebookError::Corruption(_)));
}

#[test]
fn test_invalid_utf8_is_corruption() {
    // 2-byte string of invalid UTF-8
    let bytes = [2u8, 0xFF, 0xFE];

    let err = decode_students(&bytes).unwrap_err();
    assert!(matches!(err, gradebook::GradebookError::Corruption(_)));
}

#[test]
fn test_negative_subject_count_is_corruption() {
    let teacher = sample_teacher(&[]);
    let mut bytes = encode_teachers(&[teacher]).unwrap();

    // Overwrite the trailing SubjectCount(i32) with -1
    let len = bytes.len();
    bytes[len - 4..].copy_from_slice(&(-1i32).to_le_bytes());

    let err = decode_teachers(&bytes).unwrap_err();
    assert!(matches!(err, gradebook::GradebookError::Corruption(_)));
}

// =============================================================================
// Timestamp Tests
// =============================================================================

#[test]
fn test_timestamp_bits_round_trip() {
    for bits in [0i64, 1, -1, i64::MIN, i64::MAX, 638_600_000_000_000_000] {
        assert_eq!(Timestamp::from_bits(bits).to_bits(), bits);
    }
}

#[test]
fn test_timestamp_now_is_local_kind() {
    use gradebook::model::TimestampKind;
    assert_eq!(Timestamp::now().kind(), TimestampKind::Local);
}

#[test]
fn test_timestamp_date_round_trips_through_bits() {
    use chrono::{Local, TimeZone};

    let dt = Local.with_ymd_and_hms(2024, 9, 3, 12, 30, 45).unwrap();
    let ts = Timestamp::from_local(dt);
    let restored = Timestamp::from_bits(ts.to_bits());

    assert_eq!(restored, ts);
    assert_eq!(restored.to_local().unwrap(), dt);
}
