use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Knobs shared by the generators. Every key is optional in TOML form.
///
/// ```toml
/// api_prefix    = "/v1"
/// schema_module = "../schema"
/// submit_label  = "Save"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Prepended to the resource path in `api.ts` (`/api` + `/users`).
    pub api_prefix:    String,
    /// Module specifier `Form.tsx` and `api.ts` import the schema from.
    pub schema_module: String,
    /// Text of the form's submit button.
    pub submit_label:  String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            api_prefix:    "/api".to_string(),
            schema_module: "./schema".to_string(),
            submit_label:  "Submit".to_string(),
        }
    }
}

impl CodegenConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ShapeError> {
        let config: CodegenConfig = toml::from_str(text).map_err(|e| ShapeError::Config(e.to_string()))?;
        if !config.api_prefix.is_empty() && !config.api_prefix.starts_with('/') && !config.api_prefix.contains("://") {
            return Err(ShapeError::Config(format!(
                "api_prefix must be empty, start with '/', or be an absolute URL, got {:?}",
                config.api_prefix
            )));
        }
        Ok(config)
    }

    /// `api_prefix` without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_prefix.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(CodegenConfig::from_toml_str("").unwrap(), CodegenConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CodegenConfig::from_toml_str("api_prefix = \"https://example.com/v1/\"").unwrap();
        assert_eq!(config.api_base(), "https://example.com/v1");
        assert_eq!(config.schema_module, "./schema");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = CodegenConfig::from_toml_str("api_prefx = \"/v1\"").unwrap_err();
        assert!(matches!(err, ShapeError::Config(_)));
    }

    #[test]
    fn test_relative_prefix_is_rejected() {
        let err = CodegenConfig::from_toml_str("api_prefix = \"api\"").unwrap_err();
        assert!(err.to_string().contains("api_prefix"));
    }
}
