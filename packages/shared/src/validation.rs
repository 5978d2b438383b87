use url::Url;

/// A request body field that failed its schema constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        ValidationError {
            field,
            constraint: constraint.into(),
        }
    }
}

/// Turns a decoded request body into the record that gets stored.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}

pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {} characters", min, max),
        ));
    }
    Ok(())
}

pub fn check_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(
            field,
            "must be greater than or equal to 0",
        ));
    }
    Ok(())
}

/// Accepts absolute http(s) URLs with a host.
pub fn check_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value)
        .map_err(|e| ValidationError::new(field, format!("must be a valid URL ({})", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::new(field, "URL scheme must be http or https"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::new(field, "URL must have a host"));
    }
    Ok(())
}
