// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SDK version embedded at compile time by build.rs.
/// In CI/CD, the patch component can be overridden via OMVIAN_PATCH_VERSION.
pub const SDK_VERSION: &str = env!("OMVIAN_SDK_VERSION");

/// Build description read from a version file.
///
/// Both fields are opaque text: the version is not checked against semver and
/// the build time is not parsed as a timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(rename = "buildTime")]
    pub build_time: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>, build_time: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            build_time: build_time.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn build_time(&self) -> &str {
        &self.build_time
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.build_time.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{} (built {})", self.version, self.build_time)
        }
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "camelCase")]
enum Field {
    Version,
    BuildTime,
    #[serde(other)]
    Other,
}

struct VersionInfoVisitor;

impl<'de> Visitor<'de> for VersionInfoVisitor {
    type Value = VersionInfo;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with string fields \"version\" and \"buildTime\"")
    }

    // A null document leaves every field empty.
    fn visit_none<E>(self) -> Result<VersionInfo, E>
    where
        E: de::Error,
    {
        Ok(VersionInfo::default())
    }

    fn visit_unit<E>(self) -> Result<VersionInfo, E>
    where
        E: de::Error,
    {
        Ok(VersionInfo::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<VersionInfo, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VersionInfoVisitor)
    }

    // Missing and null fields stay empty, later duplicates overwrite earlier ones.
    fn visit_map<A>(self, mut map: A) -> Result<VersionInfo, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut info = VersionInfo::default();
        while let Some(key) = map.next_key::<Field>()? {
            match key {
                Field::Version => {
                    info.version = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                Field::BuildTime => {
                    info.build_time = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(info)
    }
}

// Hand-written so only an object (or null) is accepted; the derived impl
// would also take a two-element array.
impl<'de> Deserialize<'de> for VersionInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(VersionInfoVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> serde_json::Result<VersionInfo> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_decode_both_fields() {
        let info = decode(r#"{"version":"1.2.3","buildTime":"2024-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(info.version(), "1.2.3");
        assert_eq!(info.build_time(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        assert_eq!(decode("{}").unwrap(), VersionInfo::default());
        assert_eq!(
            decode(r#"{"version":"2.0.0"}"#).unwrap(),
            VersionInfo::new("2.0.0", "")
        );
    }

    #[test]
    fn test_null_fields_decode_to_empty() {
        let info = decode(r#"{"version":null,"buildTime":"x"}"#).unwrap();
        assert_eq!(info, VersionInfo::new("", "x"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let info =
            decode(r#"{"version":"9.9.9","buildTime":"x","extra":{"nested":[1,2]}}"#).unwrap();
        assert_eq!(info, VersionInfo::new("9.9.9", "x"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let info = decode(r#"{"Version":"1.0.0","buildtime":"x","build_time":"y"}"#).unwrap();
        assert_eq!(info, VersionInfo::default());
    }

    #[test]
    fn test_values_kept_verbatim() {
        let info = decode(r#"{"version":"  v1 ","buildTime":"yesterday"}"#).unwrap();
        assert_eq!(info.version, "  v1 ");
        assert_eq!(info.build_time, "yesterday");
    }

    #[test]
    fn test_non_string_value_rejected() {
        assert!(decode(r#"{"version":123,"buildTime":"x"}"#).is_err());
        assert!(decode(r#"{"version":"1","buildTime":false}"#).is_err());
    }

    #[test]
    fn test_array_rejected() {
        assert!(decode(r#"["1.2.3","x"]"#).is_err());
    }

    #[test]
    fn test_null_document_decodes_to_empty() {
        assert_eq!(decode("null").unwrap(), VersionInfo::default());
        assert_eq!(decode(" null\n").unwrap(), VersionInfo::default());
    }

    #[test]
    fn test_scalar_document_rejected() {
        assert!(decode("true").is_err());
        assert!(decode(r#""1.2.3""#).is_err());
    }

    #[test]
    fn test_serialize_uses_file_keys() {
        let json = serde_json::to_value(VersionInfo::new("1.0.0", "t")).unwrap();
        assert_eq!(json, serde_json::json!({"version": "1.0.0", "buildTime": "t"}));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            VersionInfo::new("1.2.3", "2024-01-01T00:00:00Z").to_string(),
            "1.2.3 (built 2024-01-01T00:00:00Z)"
        );
        assert_eq!(VersionInfo::new("1.2.3", "").to_string(), "1.2.3");
    }

    #[test]
    fn test_sdk_version_matches_cargo() {
        let parts: Vec<&str> = SDK_VERSION.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], env!("CARGO_PKG_VERSION_MAJOR"));
        assert_eq!(parts[1], env!("CARGO_PKG_VERSION_MINOR"));
    }
}
