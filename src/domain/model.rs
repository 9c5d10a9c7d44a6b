use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::utils::error::{Result, RosterError};
use crate::utils::validation;

/// Date layout used both for parsing birth dates and for the report.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A department with a run-scoped sequential id. Instances are created only
/// by the registry and shared between all people assigned to them.
#[derive(Debug, Serialize, PartialEq)]
pub struct Department {
    pub id: u32,
    pub name: String,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(ID:{})", self.name, self.id)
    }
}

/// One validated roster record. Construct through [`Person::new`]; the
/// constructor is the only place the field invariants are enforced.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub department: Arc<Department>,
    pub salary: f64,
}

impl Person {
    /// Validates and builds a record. Fails with `InvalidArgument` naming the
    /// offending field: non-positive id, empty name or gender, a birth date
    /// not matching `DD.MM.YYYY`, or a negative salary.
    pub fn new(
        id: i32,
        name: &str,
        gender: &str,
        birth_date: &str,
        department: Arc<Department>,
        salary: f64,
    ) -> Result<Self> {
        let id = validation::positive_id("id", id)?;
        let name = validation::non_empty("name", name)?;
        let gender = validation::non_empty("gender", gender)?;
        let birth_date_str = validation::non_empty("birth date", birth_date)?;
        let salary = validation::non_negative("salary", salary)?;

        let birth_date = NaiveDate::parse_from_str(birth_date_str, DATE_FORMAT).map_err(|e| {
            RosterError::InvalidArgument {
                field: "birth date",
                reason: format!("expected DD.MM.YYYY, got {:?} ({})", birth_date_str, e),
            }
        })?;

        Ok(Person {
            id,
            name: name.to_string(),
            gender: gender.to_string(),
            birth_date,
            department,
            salary,
        })
    }

    /// Age in completed years as of `today`. Negative if the birth date lies
    /// in the future.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut years = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            years -= 1;
        }
        years
    }
}
