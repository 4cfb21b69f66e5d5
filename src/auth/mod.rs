use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use std::collections::{HashMap, HashSet};

use crate::config::AuthConfig;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authorization header missing")]
    MissingCredential,
    #[error("authorization header is not a bearer credential")]
    MalformedCredential,
    #[error("unknown credential")]
    UnknownCredential,
    #[error("permission '{required}' not granted")]
    PermissionDenied { required: String },
}

/// Capability gate mapping bearer credentials to their granted permission
/// strings.
///
/// Protected handlers call [`AuthGate::authorize`] with the permission they
/// require before touching the store; public handlers never consult the gate.
#[derive(Clone, Debug, Default)]
pub struct AuthGate {
    grants: HashMap<String, HashSet<String>>,
}

impl AuthGate {
    /// Builds the gate from the configured token grants
    ///
    /// # Arguments
    ///
    /// * `config` - Auth section of the application configuration
    pub fn from_config(config: &AuthConfig) -> Self {
        let grants = config
            .tokens
            .iter()
            .map(|grant| {
                (
                    grant.token.clone(),
                    grant.permissions.iter().cloned().collect(),
                )
            })
            .collect();

        AuthGate { grants }
    }

    /// Checks that the request carries a bearer credential granted `required`
    ///
    /// # Arguments
    ///
    /// * `headers` - Request headers holding the `Authorization` header
    /// * `required` - Permission string the handler requires
    ///
    /// # Errors
    ///
    /// Returns an AuthError when the header is absent or malformed, the
    /// credential is unknown, or the permission is not granted
    pub fn authorize(&self, headers: &HeaderMap, required: &str) -> Result<(), AuthError> {
        let header = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredential)?;
        let header = header
            .to_str()
            .map_err(|_| AuthError::MalformedCredential)?;

        let (scheme, token) = header
            .split_once(' ')
            .ok_or(AuthError::MalformedCredential)?;
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return Err(AuthError::MalformedCredential);
        }

        let permissions = self
            .grants
            .get(token)
            .ok_or(AuthError::UnknownCredential)?;

        if permissions.contains(required) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied {
                required: required.to_string(),
            })
        }
    }
}
