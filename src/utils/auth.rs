// src/utils/auth.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use base64::Engine;

use crate::{config::Config, error::AppError, utils::hash::verify_password};

/// Extracts the credential pair from an `Authorization: Basic ...` header
/// value. Returns `None` for a different scheme, undecodable payload, or
/// a payload without the `user:pass` separator.
pub fn parse_basic_auth(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

/// Axum Middleware: Admin Authorization.
///
/// Validates the request's Basic credential against the configured admin
/// username and password hash. Mismatch or absence yields a 401 carrying
/// the `WWW-Authenticate` challenge (via `AppError::AuthError`).
pub async fn admin_auth(
    State(config): State<Config>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_basic_auth);

    let (username, password) =
        credentials.ok_or_else(|| AppError::AuthError("Access denied".to_string()))?;

    if username != config.admin_username
        || !verify_password(&password, &config.admin_password_hash)?
    {
        return Err(AppError::AuthError("Access denied".to_string()));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn encode(raw: &str) -> String {
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }

    #[test]
    fn parses_valid_credentials() {
        let parsed = parse_basic_auth(&encode("admin:password"));
        assert_eq!(parsed, Some(("admin".to_string(), "password".to_string())));
    }

    #[test]
    fn password_may_contain_colons() {
        let parsed = parse_basic_auth(&encode("admin:pa:ss"));
        assert_eq!(parsed, Some(("admin".to_string(), "pa:ss".to_string())));
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(parse_basic_auth("Bearer abc123"), None);
    }

    #[test]
    fn rejects_undecodable_payload() {
        assert_eq!(parse_basic_auth("Basic $$$not-base64$$$"), None);
    }

    #[test]
    fn rejects_payload_without_separator() {
        assert_eq!(parse_basic_auth(&encode("admin")), None);
    }
}
