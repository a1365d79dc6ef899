//! Validation profiles
//!
//! A profile decides how strictly taxpayer-id check digits are enforced and
//! whether advisory findings may hold a document back. Field rules are not
//! configurable: every rule runs under every profile.

use std::path::Path;

use mdfe_core::{MdfeError, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationProfile {
    /// Profile name (e.g., "strict@1.0")
    pub name: String,

    /// Verify the issuer CNPJ/CPF check digits
    pub verify_emitter_checksum: bool,

    /// Verify the driver CPF check digits
    pub verify_driver_checksum: bool,

    /// Severity of check-digit findings
    pub checksum_severity: Severity,

    /// Treat WARN findings as blocking for transmission-bound transitions
    pub block_on_warnings: bool,
}

impl ValidationProfile {
    /// Every check enforced, check-digit failures block
    pub fn strict() -> Self {
        Self {
            name: "strict@1.0".to_string(),
            verify_emitter_checksum: true,
            verify_driver_checksum: true,
            checksum_severity: Severity::Error,
            block_on_warnings: false,
        }
    }

    /// Check-digit failures are advisory; driver CPF digits are not verified
    pub fn lenient() -> Self {
        Self {
            name: "lenient@1.0".to_string(),
            verify_emitter_checksum: true,
            verify_driver_checksum: false,
            checksum_severity: Severity::Warn,
            block_on_warnings: false,
        }
    }

    /// Get profile by mode name
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "strict" => Self::strict(),
            "lenient" => Self::lenient(),
            _ => Self::strict(), // Default to strict
        }
    }

    /// Load profile from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MdfeError> {
        serde_yaml::from_str(yaml).map_err(|e| MdfeError::Config(e.to_string()))
    }

    /// Load profile from JSON
    pub fn from_json_str(json: &str) -> Result<Self, MdfeError> {
        serde_json::from_str(json).map_err(|e| MdfeError::Config(e.to_string()))
    }

    /// Load profile from a `.yaml`/`.yml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MdfeError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw),
            Some("json") => Self::from_json_str(&raw),
            other => Err(MdfeError::Config(format!(
                "unsupported profile format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

impl Default for ValidationProfile {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_strict_profile() {
        let profile = ValidationProfile::strict();
        assert!(profile.verify_emitter_checksum);
        assert!(profile.verify_driver_checksum);
        assert_eq!(profile.checksum_severity, Severity::Error);
    }

    #[test]
    fn test_lenient_profile() {
        let profile = ValidationProfile::for_mode("lenient");
        assert!(!profile.verify_driver_checksum);
        assert_eq!(profile.checksum_severity, Severity::Warn);
    }

    #[test]
    fn test_unknown_mode_is_strict() {
        assert_eq!(ValidationProfile::for_mode("whatever"), ValidationProfile::strict());
    }

    #[test]
    fn test_yaml_missing_keys_take_strict_defaults() {
        let profile = ValidationProfile::from_yaml_str(
            "name: custom@2.0\nchecksum_severity: WARN\n",
        )
        .unwrap();

        assert_eq!(profile.name, "custom@2.0");
        assert_eq!(profile.checksum_severity, Severity::Warn);
        assert!(profile.verify_driver_checksum);
        assert!(!profile.block_on_warnings);
    }

    #[test]
    fn test_bad_yaml_is_config_error() {
        let err = ValidationProfile::from_yaml_str("checksum_severity: LOUD").unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"name": "ops@1.0", "block_on_warnings": true}}"#).unwrap();

        let profile = ValidationProfile::load(file.path()).unwrap();
        assert_eq!(profile.name, "ops@1.0");
        assert!(profile.block_on_warnings);
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            ValidationProfile::load(file.path()),
            Err(MdfeError::Config(_))
        ));
    }
}
