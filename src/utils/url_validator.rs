//! Target URL validation.
//!
//! The destination is stored exactly as submitted (minus surrounding
//! whitespace); validation only decides whether it is acceptable.

use url::Url;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Returns the trimmed input on success.
///
/// # Security
///
/// Rejects schemes such as `javascript:`, `data:` and `file:` so a short
/// link can never be used to smuggle script into the redirect page.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_target_url(" https://example.com/a ").unwrap(), "https://example.com/a");
/// assert!(validate_target_url("not-a-url").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    let url =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_https() {
        assert_eq!(
            validate_target_url("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_keeps_url_as_submitted() {
        let raw = "https://EXAMPLE.com:443/Path?q=Rust#frag";
        assert_eq!(validate_target_url(raw).unwrap(), raw);
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_target_url("  http://example.com/a \n").unwrap(),
            "http://example.com/a"
        );
    }

    #[test]
    fn test_accepts_ip_and_localhost() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_target_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_target_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_target_url("   "),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        for raw in [
            "ftp://example.com/file.txt",
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
            "file:///etc/passwd",
        ] {
            assert!(
                matches!(
                    validate_target_url(raw),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{raw} should be rejected"
            );
        }
    }
}
