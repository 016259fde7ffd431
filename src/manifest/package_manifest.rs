//! DAppNode package manifest reader and patcher
//!
//! The manifest is a JSON object carrying at least:
//! - `version`: local package release (`major.minor.patch`)
//! - `upstream`: tracked upstream release tag
//!
//! Key order of untouched fields is preserved (serde_json `preserve_order`).

use crate::domain::PackageState;
use crate::error::ManifestError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default manifest location relative to the package root
pub const DEFAULT_MANIFEST_PATH: &str = "dappnode_package-mainnet.json";

const VERSION_KEY: &str = "version";
const UPSTREAM_KEY: &str = "upstream";

/// Read the current package state from a manifest file
///
/// Fails if the file is missing, unreadable or not valid JSON. Missing or
/// non-string `version`/`upstream` fields are returned as `None`.
pub fn read_state(path: &Path) -> Result<PackageState, ManifestError> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    parse_state(&content, path)
}

/// Parse the package state from manifest content
pub fn parse_state(content: &str, path: &Path) -> Result<PackageState, ManifestError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let field = |key: &str| json.get(key).and_then(Value::as_str).map(str::to_string);

    Ok(PackageState {
        version: field(VERSION_KEY),
        upstream: field(UPSTREAM_KEY),
    })
}

/// Set `version` and `upstream` in manifest content
///
/// Output uses 2-space indentation and ends with a newline. Existing keys stay
/// in place; missing keys are appended.
pub fn update_manifest_content(
    content: &str,
    path: &Path,
    new_version: &str,
    new_upstream: &str,
) -> Result<String, ManifestError> {
    let mut json: Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let object = json.as_object_mut().ok_or_else(|| ManifestError::NotAnObject {
        path: path.to_path_buf(),
    })?;
    object.insert(VERSION_KEY.to_string(), Value::from(new_version));
    object.insert(UPSTREAM_KEY.to_string(), Value::from(new_upstream));

    let mut output =
        serde_json::to_string_pretty(&json).map_err(|e| ManifestError::SerializeError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn manifest_path() -> PathBuf {
        PathBuf::from(DEFAULT_MANIFEST_PATH)
    }

    #[test]
    fn test_parse_state() {
        let content = r#"{"name": "eth2validator.avado.dnp.dappnode.eth", "version": "0.0.68", "upstream": "v7.1.0"}"#;
        let state = parse_state(content, &manifest_path()).unwrap();
        assert_eq!(state, PackageState::new("0.0.68", "v7.1.0"));
    }

    #[test]
    fn test_parse_state_missing_fields() {
        let state = parse_state(r#"{"name": "pkg"}"#, &manifest_path()).unwrap();
        assert!(state.version.is_none());
        assert!(state.upstream.is_none());
    }

    #[test]
    fn test_parse_state_non_string_fields_are_absent() {
        let state = parse_state(r#"{"version": 68, "upstream": null}"#, &manifest_path()).unwrap();
        assert!(state.version.is_none());
        assert!(state.upstream.is_none());
    }

    #[test]
    fn test_parse_state_invalid_json() {
        let result = parse_state("{not json", &manifest_path());
        assert!(matches!(result, Err(ManifestError::JsonParseError { .. })));
    }

    #[test]
    fn test_read_state_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_state(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_read_state_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MANIFEST_PATH);
        fs::write(&path, r#"{"version": "1.2.3", "upstream": "v5.0.0"}"#).unwrap();

        let state = read_state(&path).unwrap();
        assert_eq!(state, PackageState::new("1.2.3", "v5.0.0"));
    }

    #[test]
    fn test_update_manifest_content() {
        let content = r#"{"version":"0.0.68","upstream":"v7.1.0"}"#;
        let updated = update_manifest_content(content, &manifest_path(), "0.0.69", "v7.1.1").unwrap();
        assert_eq!(
            updated,
            "{\n  \"version\": \"0.0.69\",\n  \"upstream\": \"v7.1.1\"\n}\n"
        );
    }

    #[test]
    fn test_update_preserves_key_order_and_other_fields() {
        let content = r#"{
  "name": "eth2validator.avado.dnp.dappnode.eth",
  "version": "0.0.68",
  "upstream": "v7.1.0",
  "description": "Prysm validator",
  "type": "service",
  "image": {
    "path": "eth2validator.avado.dnp.dappnode.eth_0.0.68.tar.xz",
    "ports": ["9999:9999"]
  }
}"#;
        let updated = update_manifest_content(content, &manifest_path(), "0.0.69", "v7.1.1").unwrap();

        let expected = r#"{
  "name": "eth2validator.avado.dnp.dappnode.eth",
  "version": "0.0.69",
  "upstream": "v7.1.1",
  "description": "Prysm validator",
  "type": "service",
  "image": {
    "path": "eth2validator.avado.dnp.dappnode.eth_0.0.68.tar.xz",
    "ports": [
      "9999:9999"
    ]
  }
}
"#;
        assert_eq!(updated, expected);
    }

    #[test]
    fn test_update_appends_missing_keys() {
        let content = r#"{"name": "pkg"}"#;
        let updated = update_manifest_content(content, &manifest_path(), "0.0.1", "v1.0.0").unwrap();
        assert_eq!(
            updated,
            "{\n  \"name\": \"pkg\",\n  \"version\": \"0.0.1\",\n  \"upstream\": \"v1.0.0\"\n}\n"
        );
    }

    #[test]
    fn test_update_rejects_non_object() {
        let result = update_manifest_content("[1, 2]", &manifest_path(), "0.0.1", "v1");
        assert!(matches!(result, Err(ManifestError::NotAnObject { .. })));
    }

    #[test]
    fn test_update_keeps_unicode_verbatim() {
        let content = r#"{"author": "Zoë", "version": "0.0.1", "upstream": "v1"}"#;
        let updated = update_manifest_content(content, &manifest_path(), "0.0.2", "v2").unwrap();
        assert!(updated.contains("\"author\": \"Zoë\""));
    }
}
