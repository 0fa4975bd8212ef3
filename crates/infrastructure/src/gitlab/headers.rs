use artifact_sweeper_domain::DomainError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// GitLab personal/project access token header
pub const PRIVATE_TOKEN: HeaderName = HeaderName::from_static("private-token");

/// Builds the headers sent with every API request.
///
/// `Content-Type: application/json` is always present. A username adds
/// `Authorization: Basic <username>`, an API key adds `PRIVATE-TOKEN`.
/// Empty values are treated as absent.
pub fn build_headers(
    username: Option<&str>,
    api_key: Option<&str>,
) -> Result<HeaderMap, DomainError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(username) = username.filter(|u| !u.is_empty()) {
        headers.insert(
            AUTHORIZATION,
            sensitive_value(&format!("Basic {}", username))?,
        );
    }

    if let Some(api_key) = api_key.filter(|k| !k.is_empty()) {
        headers.insert(PRIVATE_TOKEN, sensitive_value(api_key)?);
    }

    Ok(headers)
}

fn sensitive_value(raw: &str) -> Result<HeaderValue, DomainError> {
    let mut value = HeaderValue::from_str(raw).map_err(|_| {
        DomainError::InvalidCredential(
            "credential contains characters not allowed in a header".to_string(),
        )
    })?;
    value.set_sensitive(true);
    Ok(value)
}
