use std::io::{self, Write};

use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use crate::domain::model::{Person, DATE_FORMAT};

/// One roster line in the fixed listing layout.
pub fn format_person(person: &Person, today: NaiveDate) -> String {
    format!(
        "ID: {:<6} Name: {:<15} Gender: {:<8} Department: {:<15} Salary: {:>8.2} Born: {} Age: {}",
        person.id,
        person.name,
        person.gender,
        person.department.name,
        person.salary,
        person.birth_date.format(DATE_FORMAT),
        person.age_on(today)
    )
}

/// Writes the full roster listing, one fixed-layout line per person, ages
/// computed against the current local date.
pub fn write_roster<W: Write>(out: &mut W, people: &[Person]) -> io::Result<()> {
    let today = Local::now().date_naive();
    writeln!(out, "=== EMPLOYEE ROSTER ===")?;
    writeln!(out, "{}", "-".repeat(80))?;
    for person in people {
        writeln!(out, "{}", format_person(person, today))?;
    }
    Ok(())
}

/// Writes per-department head counts, ascending by department name, followed
/// by a total line. An empty roster prints a notice instead.
pub fn write_statistics<W: Write>(out: &mut W, people: &[Person]) -> io::Result<()> {
    if people.is_empty() {
        writeln!(out, "No data to report.")?;
        return Ok(());
    }

    // BTreeMap keeps departments sorted by name; the id rides along.
    let mut counts: BTreeMap<&str, (u32, usize)> = BTreeMap::new();
    for person in people {
        let entry = counts
            .entry(person.department.name.as_str())
            .or_insert((person.department.id, 0));
        entry.1 += 1;
    }

    writeln!(out)?;
    writeln!(out, "=== EMPLOYEES PER DEPARTMENT ===")?;
    for (name, (id, count)) in &counts {
        writeln!(out, "{} (ID:{}): {} employee(s)", name, id, count)?;
    }
    writeln!(out, "Total employees: {}", people.len())?;
    Ok(())
}

/// Stdout convenience used by the binary.
pub fn print_report(people: &[Person]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if people.is_empty() {
        // Just the no-data notice; an empty listing header would be noise.
        write_statistics(&mut out, people)?;
    } else {
        write_roster(&mut out, people)?;
        write_statistics(&mut out, people)?;
    }
    out.flush()
}
