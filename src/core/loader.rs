use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::core::parser;
use crate::core::registry::DepartmentRegistry;
use crate::domain::model::Person;
use crate::utils::error::{Result, RosterError};

/// Loads a roster from a file on disk with a fresh registry, so department
/// ids always start at 1 for each load session.
///
/// A missing file is `ResourceNotFound`; any other open failure passes
/// through as an IO error. An existing but empty file yields an empty roster,
/// which is a valid outcome, not an error.
pub fn load_from_path(path: &Path) -> Result<Vec<Person>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            RosterError::ResourceNotFound {
                path: path.display().to_string(),
            }
        } else {
            RosterError::IoError(e)
        }
    })?;

    let mut registry = DepartmentRegistry::new();
    load_from_reader(file, &mut registry)
}

/// Reads semicolon-delimited records from `input`, resolving departments
/// through `registry`.
///
/// Blank lines are skipped silently and do not consume the header slot. If
/// the first non-blank line contains "id", "name" and "gender"
/// (case-insensitive substring match) it is skipped as a header. A malformed
/// line never aborts the load: the failure is logged with its line number and
/// content, and reading continues. Successfully parsed records keep input
/// order.
pub fn load_from_reader<R: Read>(
    input: R,
    registry: &mut DepartmentRegistry,
) -> Result<Vec<Person>> {
    // Quoting is disabled so field splitting matches a plain split on ';',
    // and flexible record lengths let the parser report short lines itself.
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut people = Vec::new();
    let mut awaiting_first_line = true;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "?".to_string());
                let err = RosterError::from(e);
                // A failing underlying reader is a resource-level error, not
                // a bad line; only record-shape problems are skippable.
                if !err.is_line_level() {
                    return Err(err);
                }
                tracing::error!("error in line {}: {}", line, err);
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if is_blank(&record) {
            continue;
        }

        if awaiting_first_line {
            awaiting_first_line = false;
            if is_header(&record) {
                tracing::info!("skipping header line");
                continue;
            }
        }

        match parser::parse_record(&record, registry) {
            Ok(person) => people.push(person),
            Err(e) if e.is_line_level() => {
                tracing::error!("error in line {}: {}", line, e);
                tracing::error!("line {} content: {}", line, raw_content(&record));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(people)
}

/// Truly empty lines never reach us (the csv reader drops them); this catches
/// whitespace-only lines, which arrive as a single blank field.
fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.trim().is_empty())
}

fn is_header(record: &StringRecord) -> bool {
    let line = raw_content(record).to_lowercase();
    line.contains("id") && line.contains("name") && line.contains("gender")
}

fn raw_content(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(";")
}
