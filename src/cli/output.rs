//! Output formatting utilities

use crate::domain::Registry;
use crate::error::Result;
use std::fmt::Display;
use std::io::Write;

/// Write one indented line per entity under a section title
pub fn write_section<T: Display>(
    output: &mut impl Write,
    title: &str,
    entities: impl Iterator<Item = T>,
) -> Result<()> {
    writeln!(output, "{}:", title)?;
    for entity in entities {
        writeln!(output, "  {}", entity)?;
    }
    Ok(())
}

/// Write the startup overview: banner, the four listings, and the
/// interactive-demo hint
pub fn write_overview(registry: &Registry, output: &mut impl Write) -> Result<()> {
    writeln!(output, "=== E-Learning Platform Demo ===")?;
    write_section(output, "Instructors", registry.instructors())?;
    write_section(output, "Courses", registry.courses())?;
    write_section(output, "Students", registry.students())?;
    write_section(output, "Enrollments", registry.enrollments())?;
    writeln!(
        output,
        "\nYou can try a small interactive demo. Type 'help' to see commands, 'exit' to quit."
    )?;
    Ok(())
}
