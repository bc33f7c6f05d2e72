/// Validates that a required text field is present
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    Ok(())
}

/// Validates that a text field fits its column, counted in characters after trimming
pub fn validate_max_len(field: &str, value: Option<&str>, max: usize) -> Result<(), String> {
    match value {
        Some(v) if v.trim().chars().count() > max => {
            Err(format!("{field} must be at most {max} characters"))
        }
        _ => Ok(()),
    }
}

/// Validates HTTP/HTTPS URL
pub fn validate_http_url(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    let url = url::Url::parse(value).map_err(|e| format!("Invalid URL: {}", e))?;
    match url.scheme() {
        "http" | "https" => {}
        _ => return Err("URL must use http or https scheme".to_string()),
    }
    if url.host_str().filter(|h| !h.is_empty()).is_none() {
        return Err("URL must have a valid host".to_string());
    }
    Ok(())
}

/// Validates an optional URL field. Blank values are treated as absent.
pub fn validate_optional_url(field: &str, value: Option<&str>) -> Result<(), String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(url) => validate_http_url(url).map_err(|e| format!("{field}: {e}")),
        None => Ok(()),
    }
}

/// Validates a college rating on the 0-5 scale
pub fn validate_rating(value: Option<f64>) -> Result<(), String> {
    match value {
        Some(rating) if !(0.0..=5.0).contains(&rating) => {
            Err("Rating must be between 0 and 5".to_string())
        }
        _ => Ok(()),
    }
}

/// Validates that a salary range is not inverted
pub fn validate_salary_range(min: Option<i32>, max: Option<i32>) -> Result<(), String> {
    if let Some(bound) = min.into_iter().chain(max).find(|v| *v < 0) {
        return Err(format!("Salary cannot be negative: {bound}"));
    }
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(
            "Minimum salary cannot be greater than maximum salary".to_string(),
        ),
        _ => Ok(()),
    }
}

/// Validates a stream slug such as `science` or `arts-humanities`
pub fn validate_slug(value: &str) -> Result<(), String> {
    validate_required("Slug", value)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug may only contain lowercase letters, digits and '-'".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_max_len() {
        assert_eq!(validate_max_len("Fees", None, 100), Ok(()));
        assert_eq!(validate_max_len("Slug", Some("science"), 50), Ok(()));
        assert_eq!(validate_max_len("Fees", Some(&"₹".repeat(100)), 100), Ok(()));
        assert_eq!(validate_max_len("Slug", Some(&format!("  {}  ", "a".repeat(50))), 50), Ok(()));
        assert_eq!(
            validate_max_len("Slug", Some(&"a".repeat(51)), 50),
            Err("Slug must be at most 50 characters".to_string())
        );
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("Title", "MBBS"), Ok(()));
        assert_eq!(
            validate_required("Title", "   "),
            Err("Title cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_http_url() {
        assert_eq!(validate_http_url("https://home.iitd.ac.in/"), Ok(()));
        assert_eq!(validate_http_url("http://www.srcc.edu/"), Ok(()));
        assert_eq!(
            validate_http_url("ftp://www.srcc.edu/"),
            Err("URL must use http or https scheme".to_string())
        );
        assert_eq!(
            validate_http_url("www.srcc.edu"),
            Err("Invalid URL: relative URL without a base".to_string())
        );
        assert_eq!(validate_http_url(""), Err("URL cannot be empty".to_string()));
    }

    #[test]
    fn test_validate_optional_url() {
        assert_eq!(validate_optional_url("website", None), Ok(()));
        assert_eq!(validate_optional_url("website", Some("  ")), Ok(()));
        assert_eq!(
            validate_optional_url("website", Some("mailto:admissions@example.com")),
            Err("website: URL must use http or https scheme".to_string())
        );
    }

    #[test]
    fn test_validate_rating() {
        assert_eq!(validate_rating(None), Ok(()));
        assert_eq!(validate_rating(Some(4.8)), Ok(()));
        assert_eq!(validate_rating(Some(0.0)), Ok(()));
        assert!(validate_rating(Some(5.1)).is_err());
        assert!(validate_rating(Some(-1.0)).is_err());
    }

    #[test]
    fn test_validate_salary_range() {
        assert_eq!(validate_salary_range(Some(1_200_000), Some(1_800_000)), Ok(()));
        assert_eq!(validate_salary_range(None, Some(10)), Ok(()));
        assert!(validate_salary_range(Some(20), Some(10)).is_err());
        assert!(validate_salary_range(Some(-5), None).is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert_eq!(validate_slug("science"), Ok(()));
        assert_eq!(validate_slug("arts-humanities"), Ok(()));
        assert!(validate_slug("Science").is_err());
        assert!(validate_slug("").is_err());
    }
}
