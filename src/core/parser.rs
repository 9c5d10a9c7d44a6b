use csv::StringRecord;

use crate::core::registry::DepartmentRegistry;
use crate::domain::model::Person;
use crate::utils::error::{Result, RosterError};

/// Required field count: id;name;gender;birthDate;department;salary.
pub const REQUIRED_FIELDS: usize = 6;

/// Parses one raw semicolon-delimited line into a validated [`Person`],
/// resolving the department through `registry`.
pub fn parse_line(line: &str, registry: &mut DepartmentRegistry) -> Result<Person> {
    let fields: Vec<&str> = line.split(';').collect();
    parse_fields(&fields, registry)
}

/// Record-based variant used by the loader, which reads through the csv
/// crate rather than splitting lines by hand.
pub fn parse_record(record: &StringRecord, registry: &mut DepartmentRegistry) -> Result<Person> {
    let fields: Vec<&str> = record.iter().collect();
    parse_fields(&fields, registry)
}

fn parse_fields(fields: &[&str], registry: &mut DepartmentRegistry) -> Result<Person> {
    if fields.len() < REQUIRED_FIELDS {
        return Err(RosterError::Parse {
            message: format!(
                "insufficient fields: expected {}, got {}",
                REQUIRED_FIELDS,
                fields.len()
            ),
        });
    }

    // Extra trailing fields beyond the required six are ignored.
    let id: i32 = fields[0].trim().parse().map_err(|e| RosterError::Parse {
        message: format!("invalid numeric format: {}", e),
    })?;
    let salary: f64 = fields[5].trim().parse().map_err(|e| RosterError::Parse {
        message: format!("invalid numeric format: {}", e),
    })?;

    let department = registry.get_or_create(fields[4])?;

    Person::new(id, fields[1], fields[2], fields[3], department, salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn test_parse_well_formed_line() {
        let mut registry = DepartmentRegistry::new();
        let person = parse_line("28281;Aahan;Male;15.05.1970;I;4800", &mut registry).unwrap();
        assert_eq!(person.id, 28281);
        assert_eq!(person.name, "Aahan");
        assert_eq!(person.gender, "Male");
        assert_eq!(
            person.birth_date,
            NaiveDate::from_ymd_opt(1970, 5, 15).unwrap()
        );
        assert_eq!(person.department.name, "I");
        assert_eq!(person.department.id, 1);
        assert_eq!(person.salary, 4800.0);
    }

    #[test]
    fn test_two_lines_share_one_department() {
        let mut registry = DepartmentRegistry::new();
        let first = parse_line("28281;Aahan;Male;15.05.1970;I;4800", &mut registry).unwrap();
        let second = parse_line("28288;Aamori;Male;01.01.1980;I;3000", &mut registry).unwrap();
        assert!(Arc::ptr_eq(&first.department, &second.department));
        assert_eq!(first.department.id, second.department.id);
    }

    #[test]
    fn test_insufficient_fields() {
        let mut registry = DepartmentRegistry::new();
        let err = parse_line("28281;Aahan;Male", &mut registry).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: insufficient fields: expected 6, got 3"
        );
    }

    #[test]
    fn test_extra_trailing_fields_are_ignored() {
        let mut registry = DepartmentRegistry::new();
        let person =
            parse_line("28281;Aahan;Male;15.05.1970;I;4800;extra;junk", &mut registry).unwrap();
        assert_eq!(person.id, 28281);
        assert_eq!(person.salary, 4800.0);
    }

    #[test]
    fn test_non_numeric_id_and_salary() {
        let mut registry = DepartmentRegistry::new();
        let err = parse_line("abc;Aahan;Male;15.05.1970;I;4800", &mut registry).unwrap_err();
        assert!(err.to_string().contains("invalid numeric format"));

        let err = parse_line("28281;Aahan;Male;15.05.1970;I;lots", &mut registry).unwrap_err();
        assert!(err.to_string().contains("invalid numeric format"));
    }

    #[test]
    fn test_invalid_values_name_the_field() {
        let mut registry = DepartmentRegistry::new();
        let err = parse_line("-1;Aahan;Male;15.05.1970;I;4800", &mut registry).unwrap_err();
        assert!(err.to_string().contains("invalid id"));

        let err = parse_line("28281;Aahan;Male;1970/05/15;I;4800", &mut registry).unwrap_err();
        assert!(err.to_string().contains("invalid birth date"));

        let err = parse_line("28281;Aahan;Male;15.05.1970; ;4800", &mut registry).unwrap_err();
        assert!(err.to_string().contains("invalid department"));

        let err = parse_line("28281;Aahan;Male;15.05.1970;I;-4800", &mut registry).unwrap_err();
        assert!(err.to_string().contains("invalid salary"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut registry = DepartmentRegistry::new();
        let person =
            parse_line(" 28281 ; Aahan ; Male ; 15.05.1970 ; I ; 4800 ", &mut registry).unwrap();
        assert_eq!(person.name, "Aahan");
        assert_eq!(person.gender, "Male");
        assert_eq!(person.department.name, "I");
    }

    #[test]
    fn test_parse_record_matches_parse_line() {
        let mut registry = DepartmentRegistry::new();
        let record = StringRecord::from(vec!["28281", "Aahan", "Male", "15.05.1970", "I", "4800"]);
        let person = parse_record(&record, &mut registry).unwrap();
        assert_eq!(person.id, 28281);
        assert_eq!(person.department.name, "I");
    }
}
