//! Instrument catalog entries

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an instrument
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// A placeable instrument type, as reported by the host.
///
/// Read-only once loaded; `index` is the catalog key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentConfig {
    pub index: String,
    #[serde(default)]
    pub is_interactive: bool,
    pub name: String,
    pub dimensions: Dimensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "index": "PFD",
            "isInteractive": true,
            "name": "Primary Flight Display",
            "dimensions": { "width": 768, "height": 768 }
        }"#;
        let config: InstrumentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.index, "PFD");
        assert!(config.is_interactive);
        assert_eq!(config.dimensions.width, 768.0);
    }

    #[test]
    fn test_is_interactive_defaults_to_false() {
        let json = r#"{"index": "EWD", "name": "EWD", "dimensions": {"width": 1, "height": 1}}"#;
        let config: InstrumentConfig = serde_json::from_str(json).unwrap();
        assert!(!config.is_interactive);
    }

    #[test]
    fn test_serialize_uses_host_field_names() {
        let config = InstrumentConfig {
            index: "ND".to_string(),
            is_interactive: false,
            name: "Navigation Display".to_string(),
            dimensions: Dimensions {
                width: 10.0,
                height: 20.0,
            },
        };
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.get("isInteractive").is_some());
        assert!(value.get("is_interactive").is_none());
    }
}
