//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// When the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Number of items, for list output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                count: None,
            },
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }
}

/// Format a single value as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Format a list as pretty-printed JSON, recording the item count
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(items).with_count(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Clone)]
    struct Item {
        id: i64,
        title: String,
    }

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec!["a", "b"]);

        assert_eq!(output.data, vec!["a", "b"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
        assert!(output.meta.count.is_none());
    }

    #[test]
    fn test_format_json_single() {
        let result = format_json(&Item {
            id: 1,
            title: "Painter".to_string(),
        })
        .unwrap();

        assert!(result.contains("\"title\": \"Painter\""));
        assert!(result.contains("\"timestamp\""));
        assert!(!result.contains("\"count\""));
    }

    #[test]
    fn test_format_json_list_counts_items() {
        let items = vec![
            Item {
                id: 1,
                title: "First".to_string(),
            },
            Item {
                id: 2,
                title: "Second".to_string(),
            },
        ];

        let value: serde_json::Value =
            serde_json::from_str(&format_json_list(&items).unwrap()).unwrap();
        assert_eq!(value["meta"]["count"], 2);
        assert_eq!(value["data"][1]["title"], "Second");
    }

    #[test]
    fn test_format_json_list_empty() {
        let items: Vec<Item> = vec![];
        assert!(format_json_list(&items).unwrap().contains("\"data\": []"));
    }
}
