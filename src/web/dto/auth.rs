//! Form payloads for the credential flow.

use serde::Deserialize;

/// Urlencoded body of the login and signup forms.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}
