//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;

/// Unsigned JWT carrying the given claims.
pub fn make_token(claims: serde_json::Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.sig", header, payload)
}

/// Token for a worker account expiring `seconds` from now (negative for the past).
pub fn worker_token(seconds: i64) -> String {
    let exp = Utc::now().timestamp() + seconds;
    make_token(serde_json::json!({
        "id": 11,
        "email": "sam@example.com",
        "role": "worker",
        "iat": exp - 3600,
        "exp": exp,
    }))
}

/// Write a config file holding an optional token and API URL.
pub fn write_config(dir: &Path, token: Option<&str>, api_url: Option<&str>) -> PathBuf {
    let path = dir.join("config.yaml");
    let mut contents = String::new();
    if let Some(url) = api_url {
        contents.push_str(&format!("api_url: {}\n", url));
    }
    if let Some(token) = token {
        contents.push_str(&format!("token: {}\n", token));
    }
    fs::write(&path, contents).expect("failed to write config");
    path
}
