use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns the trimmed value, rejecting empty and whitespace-only strings.
pub fn non_empty<'a>(field_name: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::InvalidArgument {
            field: field_name,
            reason: "value must not be empty".to_string(),
        });
    }
    Ok(trimmed)
}

pub fn positive_id(field_name: &'static str, value: i32) -> Result<i32> {
    if value <= 0 {
        return Err(RosterError::InvalidArgument {
            field: field_name,
            reason: format!("value must be positive, got {}", value),
        });
    }
    Ok(value)
}

pub fn non_negative(field_name: &'static str, value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(RosterError::InvalidArgument {
            field: field_name,
            reason: format!("value must not be negative, got {}", value),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("name", "  Aahan ").unwrap(), "Aahan");
        assert!(non_empty("name", "").is_err());
        assert!(non_empty("name", "   ").is_err());
    }

    #[test]
    fn test_positive_id() {
        assert_eq!(positive_id("id", 28281).unwrap(), 28281);
        assert!(positive_id("id", 0).is_err());
        assert!(positive_id("id", -5).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("salary", 0.0).unwrap(), 0.0);
        assert_eq!(non_negative("salary", 4800.0).unwrap(), 4800.0);
        assert!(non_negative("salary", -0.01).is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = positive_id("id", -1).unwrap_err();
        assert!(err.to_string().contains("invalid id"));
    }
}
