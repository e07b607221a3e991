//! User, role and authentication models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role granted to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "ADMIN")]
    Admin,
    #[serde(alias = "RECRUITER")]
    Recruiter,
    #[serde(alias = "WORKER")]
    Worker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Recruiter => "recruiter",
            Role::Worker => "worker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "recruiter" => Ok(Role::Recruiter),
            "worker" => Ok(Role::Worker),
            other => Err(format!(
                "unknown role '{}' (expected admin, recruiter or worker)",
                other
            )),
        }
    }
}

/// Account record returned alongside a login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: i64,

    /// Email address
    pub email: String,

    /// Account role
    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Worker profile, present for worker accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<Worker>,

    /// Recruiter profile, present for recruiter accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter: Option<Recruiter>,
}

impl User {
    /// "First Last", whichever parts are known, or the email address.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

/// Worker profile as embedded in a user account.
///
/// Kept separate from [`crate::client::models::Worker`]; the user endpoint
/// returns a trimmed profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub is_available: bool,
}

/// Recruiter profile as embedded in a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of the login and register endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Issued bearer token
    #[serde(alias = "access_token", alias = "token")]
    pub access_token: String,

    /// Account the token was issued for (not every deployment returns it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_both_cases() {
        let role: Role = serde_json::from_str("\"RECRUITER\"").unwrap();
        assert_eq!(role, Role::Recruiter);
        let role: Role = serde_json::from_str("\"worker\"").unwrap();
        assert_eq!(role, Role::Worker);
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("guest".parse::<Role>().is_err());
    }

    #[test]
    fn test_auth_response_accepts_token_aliases() {
        let snake: AuthResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        let camel: AuthResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        let bare: AuthResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(snake.access_token, "abc");
        assert_eq!(camel.access_token, "abc");
        assert_eq!(bare.access_token, "abc");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user: User =
            serde_json::from_str(r#"{"id":1,"email":"a@b.c","role":"admin"}"#).unwrap();
        assert_eq!(user.display_name(), "a@b.c");
        user.first_name = Some("Ada".to_string());
        assert_eq!(user.display_name(), "Ada");
        user.last_name = Some("Lovelace".to_string());
        assert_eq!(user.display_name(), "Ada Lovelace");
    }
}
