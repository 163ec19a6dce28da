use crate::models::FileMatch;
use std::io::{self, Write};

pub const NO_RESULTS: &str = "No results found.";

/// Writes the human-readable report for `matches`.
///
/// The entity block is printed only when names were supplied.
pub fn write_report<W: Write>(out: &mut W, matches: &[FileMatch], names: &[String]) -> io::Result<()> {
    if matches.is_empty() {
        writeln!(out, "\n{NO_RESULTS}")?;
        return Ok(());
    }

    for found in matches {
        writeln!(out, "\nFound File: {}", found.path.display())?;

        if !found.keyword_counts.is_empty() {
            writeln!(out, "Keyword Occurrences:")?;
            for (keyword, count) in &found.keyword_counts {
                writeln!(out, "    {keyword}: {count}")?;
            }
        }

        if !names.is_empty() && !found.entities.is_empty() {
            writeln!(out, "Named Entities:")?;
            for entity in &found.entities {
                writeln!(out, "    {}: {}", entity.text, entity.label)?;
            }
        }

        writeln!(out)?;
    }

    Ok(())
}

pub fn render_report(matches: &[FileMatch], names: &[String]) -> String {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_report(&mut buffer, matches, names);
    String::from_utf8_lossy(&buffer).into_owned()
}
