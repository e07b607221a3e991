//! Worker profile models

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Worker profile as served by the worker resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// Worker ID
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Trade or craft, e.g. "Electrician"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Whether the worker is open to new engagements
    #[serde(default)]
    pub is_available: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Worker {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body of `POST /worker`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Body of `PATCH /worker/me` and `PATCH /worker/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Profile picture attached to a multipart worker creation
#[derive(Debug, Clone)]
pub struct ProfilePhoto {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type, e.g. `image/png`
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ProfilePhoto {
    /// Read a photo from disk, guessing the MIME type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo".to_string());
        let mime_type = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
        .to_string();

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_full_name() {
        let worker: Worker = serde_json::from_str(
            r#"{"id":1,"firstName":"Grace","lastName":"Hopper","isAvailable":true}"#,
        )
        .unwrap();
        assert_eq!(worker.full_name(), "Grace Hopper");
        assert!(worker.is_available);
        assert!(worker.skills.is_empty());
    }

    #[test]
    fn test_photo_mime_from_extension() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("me.JPG");
        std::fs::write(&path, [0xFF, 0xD8]).unwrap();

        let photo = ProfilePhoto::from_path(&path).unwrap();
        assert_eq!(photo.file_name, "me.JPG");
        assert_eq!(photo.mime_type, "image/jpeg");
        assert_eq!(photo.bytes, vec![0xFF, 0xD8]);
    }
}
