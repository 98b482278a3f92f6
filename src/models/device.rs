//! Device and version information for the home info card.
//!
//! Builds the copyable diagnostic summary from the manager's compiled-in
//! version constants and the system properties reported by the helper
//! bridge.

use serde::Deserialize;

use crate::config;
use crate::utils::format::{capitalize_first, format_version};
use crate::utils::strings::{self, StringId};

/// System properties reported by the helper bridge's `getSystemInfo`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    pub manufacturer: String,
    pub brand: String,
    pub model: String,
    /// Primary supported instruction-set ABI.
    pub abi: String,
    /// Released OS version string (e.g. "14").
    pub release: String,
    /// Development codename; "REL" on release builds.
    pub codename: String,
    pub sdk_int: i32,
    /// Non-zero only on preview OS builds.
    pub preview_sdk_int: i32,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            manufacturer: "unknown".to_string(),
            brand: "unknown".to_string(),
            model: "unknown".to_string(),
            abi: "unknown".to_string(),
            release: "unknown".to_string(),
            codename: "REL".to_string(),
            sdk_int: 0,
            preview_sdk_int: 0,
        }
    }
}

impl SystemInfo {
    /// Human-readable device identifier.
    ///
    /// Capitalized manufacturer, then the capitalized brand only when it
    /// differs from the manufacturer, then the model.
    pub fn device_string(&self) -> String {
        let mut out = capitalize_first(&self.manufacturer);
        if self.brand != self.manufacturer {
            out.push(' ');
            out.push_str(&capitalize_first(&self.brand));
        }
        out.push(' ');
        out.push_str(&self.model);
        out
    }

    /// OS version string, preferring the preview codename form when
    /// running on a non-final build.
    pub fn os_version(&self) -> String {
        if self.preview_sdk_int != 0 {
            format!("{} Preview (API {})", self.codename, self.preview_sdk_int)
        } else {
            format!("{} (API {})", self.release, self.sdk_int)
        }
    }
}

/// Build the ordered (label, value) pairs shown on the info card.
pub fn info_summary(system: &SystemInfo) -> Vec<(String, String)> {
    vec![
        (
            strings::resolve(StringId::ApiVersion).to_string(),
            config::API_CODE.to_string(),
        ),
        (
            strings::resolve(StringId::ManagerVersion).to_string(),
            format_version(config::VERSION_NAME, config::VERSION_CODE),
        ),
        (
            strings::resolve(StringId::CoreVersion).to_string(),
            format_version(config::CORE_VERSION_NAME, config::CORE_VERSION_CODE),
        ),
        (
            strings::resolve(StringId::SystemVersion).to_string(),
            system.os_version(),
        ),
        (
            strings::resolve(StringId::Device).to_string(),
            system.device_string(),
        ),
        (
            strings::resolve(StringId::SystemAbi).to_string(),
            system.abi.clone(),
        ),
    ]
}

/// Concatenate summary pairs into the clipboard payload.
///
/// Each pair becomes a `label\nvalue\n\n` block.
pub fn clipboard_text(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (label, value) in pairs {
        out.push_str(label);
        out.push('\n');
        out.push_str(value);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> SystemInfo {
        SystemInfo {
            manufacturer: "google".to_string(),
            brand: "google".to_string(),
            model: "Pixel 6".to_string(),
            abi: "arm64-v8a".to_string(),
            release: "14".to_string(),
            codename: "REL".to_string(),
            sdk_int: 34,
            preview_sdk_int: 0,
        }
    }

    #[test]
    fn test_device_string_omits_brand_equal_to_manufacturer() {
        assert_eq!(pixel().device_string(), "Google Pixel 6");
    }

    #[test]
    fn test_device_string_includes_differing_brand() {
        let info = SystemInfo {
            manufacturer: "xiaomi".to_string(),
            brand: "redmi".to_string(),
            model: "Note 10".to_string(),
            ..pixel()
        };
        assert_eq!(info.device_string(), "Xiaomi Redmi Note 10");
    }

    #[test]
    fn test_os_version_release_form() {
        assert_eq!(pixel().os_version(), "14 (API 34)");
    }

    #[test]
    fn test_os_version_preview_form() {
        let info = SystemInfo {
            codename: "VanillaIceCream".to_string(),
            preview_sdk_int: 1,
            ..pixel()
        };
        assert_eq!(info.os_version(), "VanillaIceCream Preview (API 1)");
    }

    #[test]
    fn test_clipboard_text_block_format() {
        let pairs = vec![
            ("A".to_string(), "1".to_string()),
            ("B".to_string(), "2".to_string()),
        ];
        assert_eq!(clipboard_text(&pairs), "A\n1\n\nB\n2\n\n");
        assert_eq!(clipboard_text(&[]), "");
    }

    #[test]
    fn test_summary_order() {
        let pairs = info_summary(&pixel());
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0].0, "API version");
        assert_eq!(pairs[3].1, "14 (API 34)");
        assert_eq!(pairs[4].1, "Google Pixel 6");
        assert_eq!(pairs[5].1, "arm64-v8a");
    }

    #[test]
    fn test_system_info_decodes_bridge_payload() {
        let info: SystemInfo = serde_json::from_str(
            r#"{
                "manufacturer": "google",
                "brand": "google",
                "model": "Pixel 6",
                "abi": "arm64-v8a",
                "release": "14",
                "codename": "REL",
                "sdkInt": 34,
                "previewSdkInt": 0
            }"#,
        )
        .unwrap();
        assert_eq!(info, pixel());
    }

    #[test]
    fn test_system_info_fills_missing_fields() {
        let info: SystemInfo = serde_json::from_str(r#"{ "model": "Pixel 6" }"#).unwrap();
        assert_eq!(info.model, "Pixel 6");
        assert_eq!(info.manufacturer, "unknown");
        assert_eq!(info.preview_sdk_int, 0);
    }
}
