use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::shared::constants::{HCP_MAX_TENTHS, HCP_MIN_TENTHS, MAX_COURSE_RATING};

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// Both columns are NUMERIC(_, 1); more precision would be rounded away
fn ensure_one_decimal(value: &Decimal, code: &'static str) -> Result<(), ValidationError> {
    if value.normalize().scale() > 1 {
        return Err(ValidationError::new(code)
            .with_message("At most one decimal place is allowed".into()));
    }
    Ok(())
}

/// Handicap must lie in [-10.0, 54.0] with one decimal place
pub fn validate_hcp(hcp: &Decimal) -> Result<(), ValidationError> {
    ensure_one_decimal(hcp, "hcp_precision")?;
    let min = Decimal::new(HCP_MIN_TENTHS, 1);
    let max = Decimal::new(HCP_MAX_TENTHS, 1);
    if *hcp < min || *hcp > max {
        return Err(ValidationError::new("hcp_range")
            .with_message("Handicap must be between -10.0 and 54.0".into()));
    }
    Ok(())
}

/// Course rating must lie strictly between 0 and 100 with one decimal place
pub fn validate_course_rating(rating: &Decimal) -> Result<(), ValidationError> {
    ensure_one_decimal(rating, "course_rating_precision")?;
    if *rating <= Decimal::ZERO || *rating >= Decimal::from(MAX_COURSE_RATING) {
        return Err(ValidationError::new("course_rating_range")
            .with_message("Course rating must be greater than 0 and less than 100".into()));
    }
    Ok(())
}

/// Rejects strings that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Value must not be blank".into()));
    }
    Ok(())
}

/// Trim an optional string in place, turning whitespace-only input into `None`
pub fn trim_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_regex_valid() {
        assert!(USERNAME_REGEX.is_match("john_doe"));
        assert!(USERNAME_REGEX.is_match("user123"));
        assert!(USERNAME_REGEX.is_match("_admin"));
        assert!(USERNAME_REGEX.is_match("JohnDoe"));
    }

    #[test]
    fn test_username_regex_invalid() {
        assert!(!USERNAME_REGEX.is_match("123user")); // starts with digit
        assert!(!USERNAME_REGEX.is_match("-user")); // starts with hyphen
        assert!(!USERNAME_REGEX.is_match("user-name")); // hyphen
        assert!(!USERNAME_REGEX.is_match("user name")); // space
        assert!(!USERNAME_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_validate_hcp_bounds() {
        assert!(validate_hcp(&Decimal::new(-100, 1)).is_ok());
        assert!(validate_hcp(&Decimal::new(540, 1)).is_ok());
        assert!(validate_hcp(&Decimal::new(123, 1)).is_ok());
        assert!(validate_hcp(&Decimal::new(-101, 1)).is_err());
        assert!(validate_hcp(&Decimal::new(541, 1)).is_err());
    }

    #[test]
    fn test_validate_course_rating_bounds() {
        assert!(validate_course_rating(&Decimal::new(721, 1)).is_ok());
        assert!(validate_course_rating(&Decimal::ZERO).is_err());
        assert!(validate_course_rating(&Decimal::from(100)).is_err());
        assert!(validate_course_rating(&Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn test_extra_decimal_places_are_rejected() {
        assert!(validate_hcp(&Decimal::new(1845, 2)).is_err());
        assert!(validate_course_rating(&Decimal::new(7215, 2)).is_err());
        // trailing zeros are not extra precision
        assert!(validate_hcp(&Decimal::new(1840, 2)).is_ok());
        assert!(validate_course_rating(&Decimal::new(72, 0)).is_ok());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Driver").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_trim_opt() {
        assert_eq!(trim_opt(Some("  7 iron ".into())), Some("7 iron".to_string()));
        assert_eq!(trim_opt(Some("   ".into())), None);
        assert_eq!(trim_opt(None), None);
    }
}
