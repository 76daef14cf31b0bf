use crate::error::ApiError;

/// Unwraps a field the caller must send. Only absence (missing key or `null`)
/// is rejected; `0`, `false` and `""` are values like any other.
pub fn required<T>(value: Option<T>, message: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(message))
}

/// Like [`required`], but also rejects blank strings. Used for identity
/// fields (names, emails, passwords) where whitespace is never meaningful.
pub fn required_text(value: Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ApiError::bad_request(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_present_value() {
        assert_eq!(required(Some(0u64), "missing").unwrap(), 0);
        assert_eq!(required(Some(String::new()), "missing").unwrap(), "");
    }

    #[test]
    fn missing_value_is_rejected_with_message() {
        let err = required::<u64>(None, "User ID is required").unwrap_err();
        assert_eq!(err.to_string(), "User ID is required");
    }

    #[test]
    fn blank_identity_text_is_rejected() {
        assert!(required_text(Some("   ".into()), "Name is required").is_err());
        assert_eq!(
            required_text(Some("  a@b.io ".into()), "Email is required").unwrap(),
            "a@b.io"
        );
    }
}
