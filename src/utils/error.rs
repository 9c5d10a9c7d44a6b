use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("parse error: {message}")]
    Parse { message: String },

    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl RosterError {
    /// Line-level errors are logged and skipped by the loader; everything
    /// else aborts the load. Record-shape and encoding problems are confined
    /// to one line; a failing underlying reader is not.
    pub fn is_line_level(&self) -> bool {
        match self {
            RosterError::Parse { .. } | RosterError::InvalidArgument { .. } => true,
            RosterError::CsvError(e) => !matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::ResourceNotFound { .. } => {
                "place data.csv next to the binary (or pass --input <path>); \
                 expected format: id;name;gender;birthDate;department;salary, \
                 one record per line, optional header line first"
            }
            _ => "check file permissions and that the input is valid UTF-8 text",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_per_record_errors_are_line_level() {
        let parse = RosterError::Parse {
            message: "insufficient fields: expected 6, got 3".to_string(),
        };
        let invalid = RosterError::InvalidArgument {
            field: "id",
            reason: "value must be positive, got 0".to_string(),
        };
        assert!(parse.is_line_level());
        assert!(invalid.is_line_level());
    }

    #[test]
    fn test_reader_failures_are_not_line_level() {
        let io_err = io::Error::new(io::ErrorKind::Other, "disk read failed");
        let wrapped = RosterError::CsvError(csv::Error::from(io_err));
        assert!(!wrapped.is_line_level());

        let plain = RosterError::IoError(io::Error::new(io::ErrorKind::Other, "disk read failed"));
        assert!(!plain.is_line_level());
    }

    #[test]
    fn test_missing_resource_suggestion_explains_the_format() {
        let err = RosterError::ResourceNotFound {
            path: "data.csv".to_string(),
        };
        assert!(err.recovery_suggestion().contains("--input"));
        assert!(err
            .recovery_suggestion()
            .contains("id;name;gender;birthDate;department;salary"));
    }
}
