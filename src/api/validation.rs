use super::ApiError;

/// Bounds check for free-text filter parameters. Lengths are counted in
/// characters, not bytes.
pub fn validate_text<'a>(
    field: &str,
    value: &'a str,
    min: usize,
    max: usize,
) -> Result<&'a str, ApiError> {
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Err(ApiError::validation(format!(
            "Invalid {}: length must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(value)
}

pub fn validate_title(title: &str) -> Result<&str, ApiError> {
    validate_text("title", title, 3, 50)
}

pub fn validate_release_year(year: i32) -> Result<i32, ApiError> {
    // 1888 is the year of the earliest surviving film.
    const MIN_YEAR: i32 = 1888;
    const MAX_YEAR: i32 = 2100;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ApiError::validation(format!(
            "Invalid release_year: {}. Year must be between {} and {}",
            year, MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(year)
}

pub fn validate_limit(limit: u64) -> Result<u64, ApiError> {
    const MIN_LIMIT: u64 = 1;
    const MAX_LIMIT: u64 = 1000;

    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::validation(format!(
            "Invalid limit: {}. Limit must be between {} and {}",
            limit, MIN_LIMIT, MAX_LIMIT
        )));
    }
    Ok(limit)
}

pub fn validate_user_id(user_id: &str) -> Result<&str, ApiError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("user_id cannot be empty"));
    }
    if trimmed.chars().count() > 64 {
        return Err(ApiError::validation(
            "user_id must be 64 characters or less",
        ));
    }
    Ok(trimmed)
}

pub fn validate_prediction_value(value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() {
        return Err(ApiError::validation(
            "prediction_value must be a finite number",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert!(validate_text("actor", "Nicolas Cage", 1, 50).is_ok());
        assert!(validate_text("actor", "", 1, 50).is_err());
        assert!(validate_text("genre", "a".repeat(21).as_str(), 1, 20).is_err());
        // Multibyte names count characters, not bytes.
        assert!(validate_text("director", "Alejandro Iñárritu", 1, 18).is_ok());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Dune").is_ok());
        assert!(validate_title("Up").is_err());
        assert!(validate_title("a".repeat(51).as_str()).is_err());
    }

    #[test]
    fn test_validate_release_year() {
        assert!(validate_release_year(1888).is_ok());
        assert!(validate_release_year(2024).is_ok());
        assert!(validate_release_year(2100).is_ok());
        assert!(validate_release_year(1887).is_err());
        assert!(validate_release_year(2101).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(500).is_ok());
        assert!(validate_limit(1000).is_ok());
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(1001).is_err());
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("analyst_7").is_ok());
        assert_eq!(validate_user_id("  padded  ").unwrap(), "padded");
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("   ").is_err());
        assert!(validate_user_id("a".repeat(65).as_str()).is_err());
    }

    #[test]
    fn test_validate_prediction_value() {
        assert!(validate_prediction_value(7.8).is_ok());
        assert!(validate_prediction_value(-1.0).is_ok());
        assert!(validate_prediction_value(f64::NAN).is_err());
        assert!(validate_prediction_value(f64::INFINITY).is_err());
    }
}
