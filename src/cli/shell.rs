//! Interactive shell - read-dispatch-print loop over the registry

use crate::domain::Registry;
use crate::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "Commands: list students | list courses | list instructors | \
                    list enrollments | enroll <studentId> <courseId> | \
                    assign <instructorId> <courseId> | exit";

enum Outcome {
    Continue,
    Exit,
}

/// Run the interactive loop until `exit` or end-of-input.
///
/// Generic over the streams so tests can drive it with in-memory buffers;
/// main passes locked stdin/stdout.
pub fn run(
    registry: &mut Registry,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "cmd> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match dispatch(registry, line.trim(), &mut output)? {
            Outcome::Continue => {}
            Outcome::Exit => break,
        }
    }
    writeln!(output, "Goodbye.")?;
    Ok(())
}

fn dispatch(registry: &mut Registry, cmd: &str, output: &mut impl Write) -> Result<Outcome> {
    if cmd.eq_ignore_ascii_case("exit") {
        return Ok(Outcome::Exit);
    }
    if cmd.eq_ignore_ascii_case("help") {
        writeln!(output, "{}", HELP)?;
    } else if cmd.eq_ignore_ascii_case("list students") {
        for student in registry.students() {
            writeln!(output, "  {}", student)?;
        }
    } else if cmd.eq_ignore_ascii_case("list courses") {
        for course in registry.courses() {
            writeln!(output, "  {}", course)?;
        }
    } else if cmd.eq_ignore_ascii_case("list instructors") {
        for instructor in registry.instructors() {
            writeln!(output, "  {}", instructor)?;
        }
    } else if cmd.eq_ignore_ascii_case("list enrollments") {
        for enrollment in registry.enrollments() {
            writeln!(output, "  {}", enrollment)?;
        }
    } else if cmd.starts_with("enroll ") {
        // Extra tokens beyond the two ids are ignored
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        if parts.len() >= 3 {
            match registry.enroll_student(parts[1], parts[2]) {
                Some(enrollment) => writeln!(output, "Enrolled: {}", enrollment)?,
                None => writeln!(output, "Failed to enroll. Check IDs.")?,
            }
        } else {
            writeln!(output, "Usage: enroll <studentId> <courseId>")?;
        }
    } else if cmd.starts_with("assign ") {
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        if parts.len() >= 3 {
            if registry.assign_instructor_to_course(parts[1], parts[2]) {
                writeln!(output, "Assigned")?;
            } else {
                writeln!(output, "Failed to assign (check IDs)")?;
            }
        } else {
            writeln!(output, "Usage: assign <instructorId> <courseId>")?;
        }
    } else {
        writeln!(output, "Unknown command. Type 'help'.")?;
    }
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, Instructor, Student};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn seeded_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_instructor(Instructor::new(
            "I100",
            "Asha Sharma",
            "Computer Science",
            NaiveDate::from_ymd_opt(2020, 7, 1).unwrap(),
            vec!["Data Structures".to_string()],
            "asha@example.com",
            "+91-9876543210",
            6,
        ));
        registry.add_course(Course::new("C101", "Introduction to Java", "Basics"));
        registry.add_student(Student::new(
            "S500",
            "Rohit Kumar",
            "B.Tech",
            "CSE",
            "SRM Ramapuram",
            "+91-9123456789",
            "rohit@example.com",
            "secret123",
            "B.Tech",
            "2nd",
            "Chennai",
        ));
        registry
    }

    fn run_session(registry: &mut Registry, script: &str) -> String {
        let mut buf = Vec::new();
        run(registry, Cursor::new(script), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_exit_prints_goodbye() {
        let mut registry = Registry::new();
        let out = run_session(&mut registry, "exit\n");
        assert_eq!(out, "cmd> Goodbye.\n");
    }

    #[test]
    fn test_eof_terminates_loop() {
        let mut registry = Registry::new();
        let out = run_session(&mut registry, "");
        assert_eq!(out, "cmd> Goodbye.\n");
    }

    #[test]
    fn test_help_lists_commands() {
        let mut registry = Registry::new();
        let out = run_session(&mut registry, "help\nexit\n");
        assert!(out.contains("list students"));
        assert!(out.contains("enroll <studentId> <courseId>"));
        assert!(out.contains("assign <instructorId> <courseId>"));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "HELP\nLIST Students\nEXIT\n");
        assert!(out.contains("Commands:"));
        assert!(out.contains("Student[id=S500"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_list_courses() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "list courses\nexit\n");
        assert!(out.contains("  Course[id=C101,name=Introduction to Java,instructor=null]"));
    }

    #[test]
    fn test_enroll_success_and_visibility() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "enroll S500 C101\nlist enrollments\nexit\n");
        assert!(out.contains("Enrolled: Enrollment[id="));
        assert!(out.contains("student=S500,course=C101"));
        assert_eq!(registry.enrollments_for_student("S500").len(), 1);
    }

    #[test]
    fn test_enroll_unknown_id_fails() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "enroll S999 C101\nexit\n");
        assert!(out.contains("Failed to enroll. Check IDs."));
        assert_eq!(registry.enrollments().count(), 0);
    }

    #[test]
    fn test_enroll_usage_on_missing_argument() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "enroll S500\nexit\n");
        assert!(out.contains("Usage: enroll <studentId> <courseId>"));
    }

    #[test]
    fn test_enroll_extra_tokens_ignored() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "enroll S500 C101 extra\nexit\n");
        assert!(out.contains("Enrolled:"));
    }

    #[test]
    fn test_assign_success() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "assign I100 C101\nlist courses\nexit\n");
        assert!(out.contains("Assigned\n"));
        assert!(out.contains("instructor=I100"));
    }

    #[test]
    fn test_assign_unknown_id_fails() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "assign I999 C101\nexit\n");
        assert!(out.contains("Failed to assign (check IDs)"));
        assert_eq!(registry.get_course("C101").unwrap().instructor_id, None);
    }

    #[test]
    fn test_assign_usage_on_missing_argument() {
        let mut registry = seeded_registry();
        let out = run_session(&mut registry, "assign I100\nexit\n");
        assert!(out.contains("Usage: assign <instructorId> <courseId>"));
    }

    #[test]
    fn test_unknown_command() {
        let mut registry = Registry::new();
        let out = run_session(&mut registry, "frobnicate\nexit\n");
        assert!(out.contains("Unknown command. Type 'help'."));
    }

    #[test]
    fn test_bare_enroll_keyword_is_unknown() {
        // The dispatcher matches on the "enroll " prefix, so a bare keyword
        // falls through to the unknown-command branch
        let mut registry = Registry::new();
        let out = run_session(&mut registry, "enroll\nexit\n");
        assert!(out.contains("Unknown command. Type 'help'."));
    }

    #[test]
    fn test_whitespace_only_line_is_unknown() {
        let mut registry = Registry::new();
        let out = run_session(&mut registry, "   \nexit\n");
        assert!(out.contains("Unknown command. Type 'help'."));
    }
}
