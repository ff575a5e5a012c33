//! Version semantics: change detection and canonical version extraction.

/// An entry has a pending update iff the freshly resolved tag differs from
/// the stored version. Plain string inequality — case-sensitive, no semver
/// ordering, so a rollback to a lexically older tag still counts.
pub fn has_version_changed(stored: &str, tag: &str) -> bool {
    stored != tag
}

/// Strip one optional leading `v` from a release tag.
///
/// `v2.4.0` → `2.4.0`; `2.4.0` comes back unchanged.
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Extract `info.version` from a structured spec document.
///
/// Parses the whole document (YAML, which also covers JSON artifacts) and
/// reads the nested field. String and numeric scalars both occur in the
/// wild (`version: "2.3.1"`, `version: 3`). Returns `None` when the
/// document does not parse or carries no such field; the caller falls back
/// to the release tag.
pub fn extract_api_version(content: &str) -> Option<String> {
    let doc: serde_yaml::Value = serde_yaml::from_str(content).ok()?;
    match doc.get("info")?.get("version")? {
        serde_yaml::Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_test_is_plain_string_inequality() {
        assert!(!has_version_changed("v1.0.0", "v1.0.0"));
        assert!(has_version_changed("v1.0.0", "v1.0.1"));
        // Case-sensitive, no normalization.
        assert!(has_version_changed("v1.0.0", "V1.0.0"));
        // A rollback still counts as a change.
        assert!(has_version_changed("v2.0.0", "v1.9.0"));
    }

    #[test]
    fn normalize_strips_a_single_leading_v() {
        assert_eq!(normalize_tag("v2.4.0"), "2.4.0");
        assert_eq!(normalize_tag("2.4.0"), "2.4.0");
        assert_eq!(normalize_tag("vv2.4.0"), "v2.4.0");
    }

    #[test]
    fn extracts_quoted_version_from_info_block() {
        let doc = "openapi: 3.0.0\ninfo:\n  title: X\n  version: \"2.3.1\"\npaths: {}\n";
        assert_eq!(extract_api_version(doc), Some("2.3.1".to_string()));
    }

    #[test]
    fn extracts_unquoted_and_numeric_versions() {
        assert_eq!(
            extract_api_version("info:\n  version: 1.2.3\n"),
            Some("1.2.3".to_string())
        );
        assert_eq!(
            extract_api_version("info:\n  version: 3\n"),
            Some("3".to_string())
        );
    }

    #[test]
    fn json_artifacts_parse_too() {
        let doc = r#"{"openapi": "3.0.0", "info": {"title": "X", "version": "4.5.6"}}"#;
        assert_eq!(extract_api_version(doc), Some("4.5.6".to_string()));
    }

    #[test]
    fn missing_version_field_fails_extraction() {
        assert_eq!(extract_api_version("info:\n  title: X\n"), None);
        assert_eq!(extract_api_version("paths: {}\n"), None);
        assert_eq!(extract_api_version(": not yaml ["), None);
    }
}
